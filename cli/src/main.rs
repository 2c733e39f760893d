//! CLI entrypoint for statehouse
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use statehouse_application::{
    AskAssistantUseCase, AskError, AskInput, SessionOptions, TranscriptLogger, ViewBillUseCase,
};
use statehouse_domain::{BillNumber, ChatTurn};
use statehouse_infrastructure::{
    ConfigLoader, FileConfig, HttpLlmGateway, JsonlTranscriptLogger, OpenLegClient,
};
use statehouse_presentation::{
    BillCard, ChatRepl, Cli, StreamPrinter, referenced_bills, render_transcript,
};
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level. Logs go to stderr so
    // streamed replies on stdout stay clean.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };
    let (writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(writer)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };
    for warning in config.validate() {
        warn!("Config: {}", warning);
    }

    let color = config.output.color && !cli.no_color;
    if !color {
        colored::control::set_override(false);
    }

    info!("Starting statehouse");

    // === Dependency Injection ===
    let assistant_key = config.assistant.resolve_api_key();
    if assistant_key.is_none() {
        warn!(
            "No assistant API key found (checked {}); requests may be rejected",
            config.assistant.api_key_env
        );
    }
    let llm_gateway = Arc::new(HttpLlmGateway::new(&config.assistant.base_url, assistant_key)?);
    let bill_gateway = Arc::new(OpenLegClient::new(
        &config.openleg.base_url,
        config.openleg.resolve_api_key(),
        config.openleg.session_year,
    )?);

    let mut ask = AskAssistantUseCase::new(llm_gateway);
    if let Some(path) = &config.output.transcript {
        if let Some(logger) = JsonlTranscriptLogger::new(path) {
            let logger: Arc<dyn TranscriptLogger> = Arc::new(logger);
            ask = ask.with_transcript_logger(logger);
        } else {
            warn!("Transcript logging disabled: {} not writable", path.display());
        }
    }
    let ask = Arc::new(ask);
    let bills = Arc::new(ViewBillUseCase::new(bill_gateway));

    let options = session_options(&cli, &config);

    // Bill lookup mode
    if let Some(print_no) = &cli.bill {
        let bill = match BillNumber::parse(print_no) {
            Ok(bill) => bill,
            Err(e) => bail!("{} (expected e.g. S1528 or A405B)", e),
        };
        let view = bills.execute(&bill).await?;
        println!("{}", BillCard::new(color).format(&view));
        return Ok(());
    }

    // Chat mode
    if cli.chat {
        let repl = ChatRepl::new(ask, options)
            .with_bill_lookup(bills)
            .with_progress(!cli.quiet)
            .with_color(color);

        let turns = repl.run().await?;
        if let Some(path) = &cli.export_html {
            export_transcript(&turns, path)?;
        }
        return Ok(());
    }

    // Single question mode - question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --chat for interactive mode."),
    };

    let printer = StreamPrinter::new(!cli.quiet);
    let token = CancellationToken::new();
    let watcher = {
        let token = token.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                token.cancel();
            }
        })
    };

    let input = AskInput::new(question.clone(), options.clone());
    let result = ask.execute(input, &printer, Some(&token)).await;
    watcher.abort();

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(AskError::Cancelled) => {
            eprintln!("(interrupted)");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let mentioned = referenced_bills(&outcome.linked);
    if !mentioned.is_empty() && !cli.quiet {
        println!(
            "Bills mentioned: {} (try statehouse --bill <number>)",
            mentioned.join(", ")
        );
    }

    if let Some(path) = &cli.export_html {
        let turns = vec![ChatTurn::new(&options.model, &question, &outcome.linked)];
        export_transcript(&turns, path)?;
    }

    Ok(())
}

fn session_options(cli: &Cli, config: &FileConfig) -> SessionOptions {
    let model = cli
        .model
        .clone()
        .unwrap_or_else(|| config.assistant.model.clone());
    SessionOptions::new(model).with_max_tokens(config.assistant.max_tokens)
}

fn export_transcript(turns: &[ChatTurn], path: &Path) -> Result<()> {
    if turns.is_empty() {
        eprintln!("No completed turns; skipping transcript export");
        return Ok(());
    }
    let page = render_transcript(turns, "Statehouse Session");
    std::fs::write(path, page)
        .with_context(|| format!("Failed to write transcript to {}", path.display()))?;
    println!("Transcript written to {}", path.display());
    Ok(())
}
