//! Integration tests for the assistant service.
//!
//! No network, no API key: the model is a fake `ChatClient` returning canned
//! completions, injected through `AssistantConfig::client`. These tests pin
//! the request shape (message layout, combined-prompt format) and the
//! output handling (pass-through, opt-in validation, PDF rendering).

use paperdesk::prompts::{FALLBACK_SENTENCE, FINDER_SYSTEM_PROMPT, REPORT_SYSTEM_PROMPT};
use paperdesk::{
    Assistant, AssistantConfig, AssistantError, ChatClient, ChatMessage, InputBundle, PdfSource,
};
use std::sync::{Arc, Mutex};

// ── Test helpers ─────────────────────────────────────────────────────────────

/// Fake model: records every message list it receives, answers with a fixed
/// reply (or a fixed error).
struct FakeChat {
    reply: Result<String, (u16, String)>,
    seen: Mutex<Vec<Vec<ChatMessage>>>,
}

impl FakeChat {
    fn replying(reply: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply.into()),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn failing(status: u16, body: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Err((status, body.into())),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ChatClient for FakeChat {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, AssistantError> {
        self.seen.lock().unwrap().push(messages.to_vec());
        match &self.reply {
            Ok(reply) => Ok(reply.clone()),
            Err((status, body)) => Err(AssistantError::ApiStatus {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

fn assistant_with(client: Arc<FakeChat>) -> Assistant {
    let config = AssistantConfig::builder()
        .client(client)
        .build()
        .expect("config should build");
    Assistant::new(config).expect("assistant should build without an API key")
}

fn assistant_validating(client: Arc<FakeChat>) -> Assistant {
    let config = AssistantConfig::builder()
        .client(client)
        .validate_output(true)
        .build()
        .expect("config should build");
    Assistant::new(config).expect("assistant should build")
}

fn canned_record() -> String {
    [
        "Research Paper Title: Surface Codes in Practice",
        "Authors: A. Example, B. Sample",
        "Publication Year: 2024",
        "Journal / Conference: Quantum Review",
        "Research Paper Link: https://example.org/paper",
        "Reference Link: https://example.org/ref",
        "Reason for Selection: Most recent matching paper.",
    ]
    .join("\n")
}

fn canned_report() -> String {
    paperdesk::prompts::REPORT_SECTIONS
        .iter()
        .map(|s| format!("{s}\n\nProse for the {s} section.\n\n"))
        .collect()
}

/// A structurally valid PDF whose single page carries no text at all.
async fn blank_pdf_bytes() -> Vec<u8> {
    let dir = tempfile::tempdir().unwrap();
    let path = paperdesk::pipeline::render::render_report("", None, Some(dir.path()))
        .await
        .unwrap();
    std::fs::read(path).unwrap()
}

// ── Invalid input ────────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_bundle_is_rejected_in_every_mode() {
    let fake = FakeChat::replying("never reached");
    let assistant = assistant_with(fake.clone());
    let bundle = InputBundle::default();

    assert!(matches!(
        assistant.find_paper(&bundle).await,
        Err(AssistantError::InvalidInput)
    ));
    assert!(matches!(
        assistant.generate_report(&bundle).await,
        Err(AssistantError::InvalidInput)
    ));
    assert!(matches!(
        assistant.generate_report_pdf(&bundle, None).await,
        Err(AssistantError::InvalidInput)
    ));

    // Rejected locally: the model was never called.
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn pdf_with_no_extractable_text_and_no_text_is_rejected() {
    let fake = FakeChat::replying("never reached");
    let assistant = assistant_with(fake.clone());
    let bundle = InputBundle::from_pdf_bytes(blank_pdf_bytes().await);

    assert!(matches!(
        assistant.generate_report(&bundle).await,
        Err(AssistantError::InvalidInput)
    ));
    assert!(fake.calls().is_empty());
}

// ── Message shape ────────────────────────────────────────────────────────────

#[tokio::test]
async fn finder_sends_system_then_user_with_combined_prompt() {
    let fake = FakeChat::replying(FALLBACK_SENTENCE);
    let assistant = assistant_with(fake.clone());
    let bundle = InputBundle::from_text("quantum error correction surface codes");

    assistant.find_paper(&bundle).await.unwrap();

    let calls = fake.calls();
    assert_eq!(calls.len(), 1);
    let messages = &calls[0];
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, "system");
    assert_eq!(messages[0].content, FINDER_SYSTEM_PROMPT);
    assert_eq!(messages[1].role, "user");
    assert_eq!(
        messages[1].content,
        "User Text:\nquantum error correction surface codes"
    );
}

#[tokio::test]
async fn report_mode_uses_report_prompt() {
    let fake = FakeChat::replying(canned_report());
    let assistant = assistant_with(fake.clone());
    let bundle = InputBundle::from_text("topic");

    assistant.generate_report(&bundle).await.unwrap();

    let calls = fake.calls();
    assert_eq!(calls[0][0].content, REPORT_SYSTEM_PROMPT);
    assert!(!calls[0][1].content.contains("PDF Content"));
}

#[tokio::test]
async fn system_prompt_override_replaces_builtin() {
    let fake = FakeChat::replying("ok");
    let config = AssistantConfig::builder()
        .client(fake.clone())
        .system_prompt("You are a terse reviewer.")
        .build()
        .unwrap();
    let assistant = Assistant::new(config).unwrap();

    assistant
        .find_paper(&InputBundle::from_text("x"))
        .await
        .unwrap();

    assert_eq!(fake.calls()[0][0].content, "You are a terse reviewer.");
}

// ── Output handling ──────────────────────────────────────────────────────────

#[tokio::test]
async fn completion_passes_through_untouched_by_default() {
    let reply = "Sure! Here is some chatty, contract-breaking output.";
    let assistant = assistant_with(FakeChat::replying(reply));

    let out = assistant
        .find_paper(&InputBundle::from_text("anything"))
        .await
        .unwrap();
    assert_eq!(out, reply);
}

#[tokio::test]
async fn api_errors_surface_unmodified() {
    let assistant = assistant_with(FakeChat::failing(429, "rate limit reached"));

    let err = assistant
        .find_paper(&InputBundle::from_text("anything"))
        .await
        .unwrap_err();
    match err {
        AssistantError::ApiStatus { status, body } => {
            assert_eq!(status, 429);
            assert_eq!(body, "rate limit reached");
        }
        other => panic!("expected ApiStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn validation_accepts_contract_shapes() {
    let finder = assistant_validating(FakeChat::replying(canned_record()));
    finder
        .find_paper(&InputBundle::from_text("x"))
        .await
        .unwrap();

    let fallback = assistant_validating(FakeChat::replying(FALLBACK_SENTENCE));
    fallback
        .find_paper(&InputBundle::from_text("x"))
        .await
        .unwrap();

    let report = assistant_validating(FakeChat::replying(canned_report()));
    report
        .generate_report(&InputBundle::from_text("x"))
        .await
        .unwrap();
}

#[tokio::test]
async fn validation_rejects_contract_breaks() {
    let finder = assistant_validating(FakeChat::replying("Here are three papers I like."));
    let err = finder
        .find_paper(&InputBundle::from_text("x"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AssistantError::ContractViolation { contract: "finder", .. }
    ));

    let report = assistant_validating(FakeChat::replying("Title\n\nAbstract\n\nThe end."));
    let err = report
        .generate_report(&InputBundle::from_text("x"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AssistantError::ContractViolation { contract: "report", .. }
    ));
}

// ── PDF output ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn report_pdf_is_written_per_request() {
    let dir = tempfile::tempdir().unwrap();
    let config = AssistantConfig::builder()
        .client(FakeChat::replying(canned_report()))
        .output_dir(dir.path())
        .build()
        .unwrap();
    let assistant = Assistant::new(config).unwrap();
    let bundle = InputBundle::from_text("topic");

    let first = assistant.generate_report_pdf(&bundle, None).await.unwrap();
    let second = assistant.generate_report_pdf(&bundle, None).await.unwrap();

    // Unique file per request; both valid PDFs.
    assert_ne!(first, second);
    for path in [&first, &second] {
        let bytes = std::fs::read(path).unwrap();
        assert!(bytes.starts_with(b"%PDF"), "not a PDF: {}", path.display());
    }
}

#[tokio::test]
async fn report_pdf_honours_explicit_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("report.pdf");
    let assistant = assistant_with(FakeChat::replying(canned_report()));
    let bundle = InputBundle::from_text("topic");

    let path = assistant
        .generate_report_pdf(&bundle, Some(&target))
        .await
        .unwrap();
    assert_eq!(path, target);
    assert!(target.exists());
}

// ── PDF input ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn malformed_pdf_upload_is_an_extraction_error() {
    let assistant = assistant_with(FakeChat::replying("never reached"));
    let bundle = InputBundle::new(
        None,
        Some(PdfSource::Bytes(b"%PDF-1.4 but truncated nonsense".to_vec())),
    );

    let err = assistant.generate_report(&bundle).await.unwrap_err();
    assert!(matches!(err, AssistantError::ExtractionFailed { .. }));
}

#[tokio::test]
async fn pdf_only_bundle_gets_a_single_pdf_content_section() {
    // Render a text-bearing PDF with our own renderer, then feed it back in
    // as an upload: the extracted text must arrive in one labelled block.
    let dir = tempfile::tempdir().unwrap();
    let path = paperdesk::pipeline::render::render_report("Foo\nBar", None, Some(dir.path()))
        .await
        .unwrap();
    let bytes = std::fs::read(path).unwrap();

    let fake = FakeChat::replying(canned_report());
    let assistant = assistant_with(fake.clone());
    let bundle = InputBundle::from_pdf_bytes(bytes);

    assistant.generate_report(&bundle).await.unwrap();

    let prompt = &fake.calls()[0][1].content;
    assert!(prompt.starts_with("PDF Content:\n"), "got: {prompt}");
    assert_eq!(prompt.matches("PDF Content:").count(), 1);
    assert!(prompt.contains("Foo"));
    assert!(prompt.contains("Bar"));
    assert!(!prompt.contains("User Text"));
}

#[tokio::test]
async fn text_still_wins_when_pdf_is_blank() {
    // Blank PDF plus real text: the PDF section is omitted, the request runs.
    let fake = FakeChat::replying(canned_report());
    let assistant = assistant_with(fake.clone());
    let bundle = InputBundle::new(
        Some("summarize this topic".into()),
        Some(PdfSource::Bytes(blank_pdf_bytes().await)),
    );

    assistant.generate_report(&bundle).await.unwrap();

    let prompt = &fake.calls()[0][1].content;
    assert_eq!(prompt, "User Text:\nsummarize this topic");
    assert!(!prompt.contains("PDF Content"));
}
