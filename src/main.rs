//! `deep-narrative` - runs one narrative session from a file of answers.
//!
//! Logs go to stderr; the report is printed to stdout and also persisted
//! under the configured storage directory.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::fs;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use deep_narrative::adapters::{AnswersFileSource, FsSessionStorage};
use deep_narrative::application::{RunSessionCommand, RunSessionHandler};
use deep_narrative::config::{AppConfig, LoggingConfig};
use deep_narrative::domain::foundation::SessionId;
use deep_narrative::domain::narrative::{
    FragmentScorer, Lexicon, QuestionBattery, SynthesisGenerator,
};

#[derive(Parser)]
#[command(name = "deep-narrative", about = "Deep Narrative Analysis session runner")]
struct Cli {
    /// YAML file with one transcribed answer per question
    answers: PathBuf,

    /// Session identifier (random when omitted)
    #[arg(long)]
    session_id: Option<SessionId>,
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    let scorer = match &config.engine.lexicon_path {
        Some(path) => {
            info!(path = %path.display(), "Loading lexicon override");
            FragmentScorer::new(&Lexicon::from_yaml(&fs::read_to_string(path).await?)?)?
        }
        None => FragmentScorer::builtin()?,
    };

    let battery = match &config.engine.questions_path {
        Some(path) => {
            info!(path = %path.display(), "Loading question battery override");
            QuestionBattery::from_yaml(&fs::read_to_string(path).await?)?
        }
        None => QuestionBattery::builtin().clone(),
    };

    let transcripts = AnswersFileSource::from_path(&cli.answers).await?;
    if transcripts.len() != battery.len() {
        warn!(
            answers = transcripts.len(),
            questions = battery.len(),
            "Answers file does not match the battery size"
        );
    }

    let handler = RunSessionHandler::new(
        Arc::new(battery),
        Arc::new(scorer),
        SynthesisGenerator::new(config.engine.synthesis_options()),
        Arc::new(transcripts),
        Arc::new(FsSessionStorage::new(&config.storage.base_dir)),
    );

    let result = handler
        .handle(RunSessionCommand {
            session_id: cli.session_id.unwrap_or_default(),
        })
        .await?;

    info!(path = %result.report_path.display(), "Report written");
    println!("{}", result.report);
    Ok(())
}
