use clap::{ArgGroup, Parser};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sciweave::cli::{Output, confirm, is_expected_source, print_preview, print_sync};
use sciweave::{ConfigLoader, OpenAiProvider, SyncOptions, SyncService, WikiJsClient};

#[derive(Parser)]
#[command(name = "sciweave")]
#[command(
    version,
    about = "Turn a ScienceDaily article into Wiki.js knowledge entries"
)]
#[command(group = ArgGroup::new("mode").required(true))]
struct Cli {
    /// ScienceDaily article URL
    url: String,

    /// Preview the analysis without creating any pages
    #[arg(long, short = 'p', group = "mode")]
    preview: bool,

    /// Create or update wiki pages
    #[arg(long, short = 'c', group = "mode")]
    create: bool,

    /// Only resolve the main entry; do not split out sub-topics
    #[arg(long, short = 'm')]
    main_only: bool,

    /// Fail instead of degrading when the topic analysis cannot be decoded
    #[arg(long)]
    strict: bool,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let out = Output::new();

    if !is_expected_source(&cli.url) {
        out.warning("The URL does not look like a ScienceDaily article link");
        if !confirm("Continue anyway?")? {
            out.info("Cancelled");
            return Ok(ExitCode::SUCCESS);
        }
    }

    let config = ConfigLoader::load()?;
    let provider = Arc::new(OpenAiProvider::new(&config.llm)?);
    let store = Arc::new(WikiJsClient::new(&config.wiki)?);
    let service = SyncService::new(store, provider, &config)?.with_options(SyncOptions {
        main_only: cli.main_only,
        strict_analysis: cli.strict,
    });

    let rt = Runtime::new()?;

    if cli.preview {
        let report = rt.block_on(service.preview(&cli.url))?;
        print_preview(&out, &report);
    } else {
        let report = rt.block_on(service.process_url(&cli.url))?;
        print_sync(&out, &report);
    }

    Ok(ExitCode::SUCCESS)
}
