//! Configuration for the research assistant service.
//!
//! All behaviour is controlled through [`AssistantConfig`], built via its
//! [`AssistantConfigBuilder`]. Keeping every knob in one struct makes the
//! service trivial to construct once at process start and share across
//! requests, and makes the model client substitutable in tests.

use crate::error::AssistantError;
use crate::pipeline::llm::ChatClient;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Environment variable holding the model API key.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Default chat-completion model.
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Default OpenAI-compatible API base URL (Groq).
pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Configuration for [`crate::Assistant`].
///
/// # Example
/// ```rust
/// use paperdesk::AssistantConfig;
///
/// let config = AssistantConfig::builder()
///     .model("llama-3.1-8b-instant")
///     .api_timeout_secs(90)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct AssistantConfig {
    /// Chat-completion model identifier. Default: [`DEFAULT_MODEL`].
    pub model: String,

    /// Sampling temperature. Default: 0.0.
    ///
    /// Zero temperature keeps the model maximally deterministic, which both
    /// contracts rely on: the finder must reproduce the fallback sentence
    /// verbatim and the report must keep its mandated section order.
    pub temperature: f32,

    /// Maximum tokens the model may generate per completion. Default: 4096.
    pub max_tokens: usize,

    /// OpenAI-compatible API base URL. Default: [`DEFAULT_API_BASE`].
    pub api_base: String,

    /// API key override. When `None`, the key is read from [`API_KEY_ENV`]
    /// at service construction; absence is a fatal configuration error.
    pub api_key: Option<String>,

    /// Per-call HTTP timeout in seconds. Default: 60.
    pub api_timeout_secs: u64,

    /// Custom system prompt. If `None`, the built-in prompt for the selected
    /// contract ([`crate::prompts`]) is used.
    pub system_prompt: Option<String>,

    /// Validate the completion against its output contract. Default: false.
    ///
    /// Off by default: the upstream behaviour is to hand the model's output
    /// through untouched. Enabling this rejects finder responses that are
    /// neither the seven-field record nor the fallback sentence, and report
    /// responses missing any of the eleven mandated sections.
    pub validate_output: bool,

    /// Directory for generated report PDFs. If `None`, each report gets a
    /// uniquely named file in the system temp directory.
    pub output_dir: Option<PathBuf>,

    /// Pre-constructed chat client. Takes precedence over `api_key`/`api_base`.
    /// The seam used by tests to substitute a canned model.
    pub client: Option<Arc<dyn ChatClient>>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.0,
            max_tokens: 4096,
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: None,
            api_timeout_secs: 60,
            system_prompt: None,
            validate_output: false,
            output_dir: None,
            client: None,
        }
    }
}

impl fmt::Debug for AssistantConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssistantConfig")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("api_base", &self.api_base)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_timeout_secs", &self.api_timeout_secs)
            .field("validate_output", &self.validate_output)
            .field("output_dir", &self.output_dir)
            .field("client", &self.client.as_ref().map(|_| "<dyn ChatClient>"))
            .finish()
    }
}

impl AssistantConfig {
    /// Create a new builder for `AssistantConfig`.
    pub fn builder() -> AssistantConfigBuilder {
        AssistantConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`AssistantConfig`].
#[derive(Debug)]
pub struct AssistantConfigBuilder {
    config: AssistantConfig,
}

impl AssistantConfigBuilder {
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    pub fn temperature(mut self, t: f32) -> Self {
        self.config.temperature = t.clamp(0.0, 2.0);
        self
    }

    pub fn max_tokens(mut self, n: usize) -> Self {
        self.config.max_tokens = n.max(1);
        self
    }

    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.config.api_base = base.into();
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    pub fn api_timeout_secs(mut self, secs: u64) -> Self {
        self.config.api_timeout_secs = secs.max(1);
        self
    }

    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.system_prompt = Some(prompt.into());
        self
    }

    pub fn validate_output(mut self, v: bool) -> Self {
        self.config.validate_output = v;
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = Some(dir.into());
        self
    }

    pub fn client(mut self, client: Arc<dyn ChatClient>) -> Self {
        self.config.client = Some(client);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<AssistantConfig, AssistantError> {
        let c = &self.config;
        if c.model.trim().is_empty() {
            return Err(AssistantError::InvalidConfig(
                "Model identifier must not be empty".into(),
            ));
        }
        if c.api_base.trim().is_empty() {
            return Err(AssistantError::InvalidConfig(
                "API base URL must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}
