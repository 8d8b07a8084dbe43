//! The assistant service: one object, built once, reused for every request.
//!
//! ## Why a service object?
//!
//! The HTTP client and configuration are constructed a single time at process
//! start and injected into each request handler. That keeps requests
//! stateless — every call is an independent aggregate → complete → (render)
//! round trip with no caching, persistence, or shared mutable state — while
//! making the model trivially substitutable in tests via
//! [`AssistantConfig::client`].
//!
//! Both modes share one request path parameterised by [`PromptContract`];
//! only the system prompt and the output handling differ.

use crate::config::AssistantConfig;
use crate::contract;
use crate::error::AssistantError;
use crate::pipeline::input::{self, InputBundle};
use crate::pipeline::llm::{ChatClient, ChatMessage, GroqClient};
use crate::pipeline::render;
use crate::prompts::{FINDER_SYSTEM_PROMPT, REPORT_SYSTEM_PROMPT};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Which output contract the model is held to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptContract {
    /// Locate exactly one paper, or answer with the fallback sentence.
    Finder,
    /// Produce the eleven-section academic report.
    Report,
}

impl PromptContract {
    fn system_prompt(self) -> &'static str {
        match self {
            PromptContract::Finder => FINDER_SYSTEM_PROMPT,
            PromptContract::Report => REPORT_SYSTEM_PROMPT,
        }
    }

    fn name(self) -> &'static str {
        match self {
            PromptContract::Finder => "finder",
            PromptContract::Report => "report",
        }
    }
}

/// The research assistant service.
///
/// # Example
/// ```rust,no_run
/// use paperdesk::{Assistant, AssistantConfig, InputBundle};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // API key read from GROQ_API_KEY
///     let assistant = Assistant::new(AssistantConfig::default())?;
///     let bundle = InputBundle::from_text("quantum error correction surface codes");
///     let answer = assistant.find_paper(&bundle).await?;
///     println!("{answer}");
///     Ok(())
/// }
/// ```
pub struct Assistant {
    client: Arc<dyn ChatClient>,
    config: AssistantConfig,
}

impl Assistant {
    /// Build the service, constructing the model client once.
    ///
    /// Fails immediately with [`AssistantError::ApiKeyMissing`] when no key
    /// is configured and none is present in the environment.
    pub fn new(config: AssistantConfig) -> Result<Self, AssistantError> {
        let client: Arc<dyn ChatClient> = match &config.client {
            Some(client) => Arc::clone(client),
            None => Arc::new(GroqClient::from_config(&config)?),
        };
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    /// Mode A, finder contract: return the completion text — either the
    /// seven-field citation record or the fallback sentence.
    pub async fn find_paper(&self, bundle: &InputBundle) -> Result<String, AssistantError> {
        self.run_contract(PromptContract::Finder, bundle).await
    }

    /// Mode A, report contract: return the report as plain text.
    pub async fn generate_report(&self, bundle: &InputBundle) -> Result<String, AssistantError> {
        self.run_contract(PromptContract::Report, bundle).await
    }

    /// Mode B: generate the report and render it as a PDF file.
    ///
    /// With `output_path = None` a uniquely named file is created per request
    /// in the configured output directory (or the system temp directory).
    pub async fn generate_report_pdf(
        &self,
        bundle: &InputBundle,
        output_path: Option<&Path>,
    ) -> Result<PathBuf, AssistantError> {
        let report = self.run_contract(PromptContract::Report, bundle).await?;
        render::render_report(&report, output_path, self.config.output_dir.as_deref()).await
    }

    /// The shared request path: aggregate inputs, invoke the model once,
    /// optionally validate the completion against its contract.
    async fn run_contract(
        &self,
        contract_kind: PromptContract,
        bundle: &InputBundle,
    ) -> Result<String, AssistantError> {
        let start = Instant::now();
        let prompt = input::combine(bundle).await?;
        debug!(
            "Combined prompt: {} chars ({} contract)",
            prompt.len(),
            contract_kind.name()
        );

        let system = self
            .config
            .system_prompt
            .as_deref()
            .unwrap_or_else(|| contract_kind.system_prompt());

        let messages = [ChatMessage::system(system), ChatMessage::user(prompt)];
        let completion = self.client.complete(&messages).await?;

        if self.config.validate_output {
            match contract_kind {
                PromptContract::Finder => contract::validate_finder(&completion)?,
                PromptContract::Report => contract::validate_report(&completion)?,
            }
        }

        info!(
            "{} request complete: {} chars in {:?}",
            contract_kind.name(),
            completion.len(),
            start.elapsed()
        );
        Ok(completion)
    }
}
