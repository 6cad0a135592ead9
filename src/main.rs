use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use crossterm::tty::IsTty;
use recite::app::{App, AppEvent, Response};
use recite::engine::config::{Config, ScoringConfig};
use recite::engine::Scorer;
use recite::ui::{PromptSession, ReportRenderer};
use std::io;

#[derive(Parser)]
#[command(name = "recite", about = "Pronunciation practice scoring", version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Weight of the word-overlap signal
    #[arg(long, global = true, default_value_t = 0.5)]
    overlap_weight: f64,

    /// Weight of the edit-distance signal
    #[arg(long, global = true, default_value_t = 0.5)]
    edit_weight: f64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Practise sentences interactively, typing or pasting recognized speech
    Practice {
        /// Sentence library (.txt or .pdf) to start with
        file: Option<String>,
    },
    /// Score one recognized sentence against a reference
    Score {
        reference: String,
        candidate: String,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the normalized tokens of a sentence
    Normalize { text: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let scoring = ScoringConfig::default().with_weights(cli.overlap_weight, cli.edit_weight);
    if !scoring.has_valid_weights() {
        bail!("blend weights must be finite and not negative");
    }

    match cli.command {
        Commands::Practice { file } => run_practice(scoring, file)?,
        Commands::Score {
            reference,
            candidate,
            json,
        } => {
            let report = Scorer::new(scoring).score(&reference, &candidate);
            if json {
                let text = serde_json::to_string_pretty(&report)
                    .context("failed to serialize score report")?;
                println!("{}", text);
            } else {
                let renderer = ReportRenderer::new(io::stdout().is_tty());
                print!("{}", renderer.render_report(&report));
            }
        }
        Commands::Normalize { text } => {
            let tokens = Scorer::new(scoring).normalize(&text);
            println!("{}", serde_json::to_string(&tokens)?);
        }
    }

    Ok(())
}

fn run_practice(scoring: ScoringConfig, file: Option<String>) -> Result<()> {
    let mut app = App::with_config(Config {
        scoring,
        ..Config::default()
    });

    if let Some(path) = file {
        if let Response::Warning(message) = app.handle_event(AppEvent::LoadFile(path.clone())) {
            bail!("could not load {}: {}", path, message);
        }
    }

    let color = io::stdout().is_tty();
    let stdin = io::stdin();
    let mut session = PromptSession::new(stdin.lock(), io::stdout(), color);
    session
        .run_event_loop(&mut app)
        .context("practice session I/O failed")?;

    Ok(())
}
