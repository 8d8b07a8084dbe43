//! CLI binary for paperdesk.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `AssistantConfig` and prints results.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use paperdesk::{Assistant, AssistantConfig, InputBundle, PdfSource};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Find one paper for a topic
  paperdesk find "quantum error correction surface codes"

  # Find a paper using a PDF as context
  paperdesk find --pdf notes.pdf

  # Generate a report PDF from a paper
  paperdesk report --pdf paper.pdf -o report.pdf

  # Print the report text instead of rendering a PDF
  paperdesk report "transformer architectures" --text-only

  # Combine free text and a PDF
  paperdesk report "focus on the evaluation section" --pdf paper.pdf

  # Reject completions that break their output contract
  paperdesk find "surface codes" --validate

ENVIRONMENT VARIABLES:
  GROQ_API_KEY        Model API key (required)
  PAPERDESK_MODEL     Override the model ID
  PAPERDESK_API_BASE  Override the OpenAI-compatible API base URL

SETUP:
  1. Set API key:  export GROQ_API_KEY=gsk_...
  2. Run:          paperdesk report --pdf paper.pdf -o report.pdf
"#;

/// Find academic papers and generate structured research reports with LLMs.
#[derive(Parser, Debug)]
#[command(
    name = "paperdesk",
    version,
    about = "Find academic papers and generate structured research reports with LLMs",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Chat-completion model ID.
    #[arg(long, global = true, env = "PAPERDESK_MODEL")]
    model: Option<String>,

    /// OpenAI-compatible API base URL.
    #[arg(long, global = true, env = "PAPERDESK_API_BASE")]
    api_base: Option<String>,

    /// Per-call API timeout in seconds.
    #[arg(long, global = true, env = "PAPERDESK_API_TIMEOUT", default_value_t = 60)]
    api_timeout: u64,

    /// Max tokens the model may generate.
    #[arg(long, global = true, env = "PAPERDESK_MAX_TOKENS", default_value_t = 4096)]
    max_tokens: usize,

    /// Reject completions that violate their output contract.
    #[arg(long, global = true, env = "PAPERDESK_VALIDATE")]
    validate: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, global = true, env = "PAPERDESK_VERBOSE")]
    verbose: bool,

    /// Suppress all output except results and errors.
    #[arg(short, long, global = true, env = "PAPERDESK_QUIET")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Identify one academic paper matching the input.
    Find {
        /// Research topic or academic statement.
        text: Option<String>,

        /// PDF file providing additional context.
        #[arg(long)]
        pdf: Option<PathBuf>,
    },
    /// Summarize the input into an eleven-section academic report.
    Report {
        /// Research topic (optional when a PDF is given).
        text: Option<String>,

        /// Research paper PDF to summarize.
        #[arg(long)]
        pdf: Option<PathBuf>,

        /// Write the report PDF to this path instead of a temp file.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the report text to stdout instead of rendering a PDF.
        #[arg(long)]
        text_only: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let assistant = Assistant::new(build_config(&cli)?).context("Failed to build assistant")?;

    match &cli.command {
        Command::Find { text, pdf } => {
            let bundle = bundle_from(text.clone(), pdf.clone());
            let result = assistant
                .find_paper(&bundle)
                .await
                .context("Finder request failed")?;
            print_result(&result)?;
        }
        Command::Report {
            text,
            pdf,
            output,
            text_only,
        } => {
            let bundle = bundle_from(text.clone(), pdf.clone());
            if *text_only {
                let report = assistant
                    .generate_report(&bundle)
                    .await
                    .context("Report request failed")?;
                print_result(&report)?;
            } else {
                let path = assistant
                    .generate_report_pdf(&bundle, output.as_deref())
                    .await
                    .context("Report request failed")?;
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}

/// Map CLI args to `AssistantConfig`.
fn build_config(cli: &Cli) -> Result<AssistantConfig> {
    let mut builder = AssistantConfig::builder()
        .api_timeout_secs(cli.api_timeout)
        .max_tokens(cli.max_tokens)
        .validate_output(cli.validate);

    if let Some(ref model) = cli.model {
        builder = builder.model(model);
    }
    if let Some(ref base) = cli.api_base {
        builder = builder.api_base(base);
    }

    builder.build().context("Invalid configuration")
}

fn bundle_from(text: Option<String>, pdf: Option<PathBuf>) -> InputBundle {
    InputBundle::new(text, pdf.map(PdfSource::Path))
}

fn print_result(result: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(result.as_bytes())
        .context("Failed to write to stdout")?;
    if !result.ends_with('\n') {
        handle.write_all(b"\n").ok();
    }
    Ok(())
}
