use clap::Parser;
use guide_match::config::{LoggingSettings, Settings};
use guide_match::core::Matcher;
use guide_match::models::{ErrorResponse, RecommendResponse};
use guide_match::services::{JsonFileSource, ProfileError, ProfileSource};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Rank tour guides for a traveler from a JSON request file
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Request file; falls back to `input.path` from the settings
    input: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("No input given: pass a request file or set GUIDE_MATCH__INPUT__PATH")]
    NoInput,

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error("Failed to serialize response: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config_error",
            AppError::NoInput => "no_input",
            AppError::Profile(ProfileError::Io { .. }) => "io_error",
            AppError::Profile(ProfileError::Json(_)) => "invalid_json",
            AppError::Profile(ProfileError::Validation(_)) => "validation_failed",
            AppError::Profile(ProfileError::LimitExceeded { .. }) => "limit_exceeded",
            AppError::Serialize(_) => "serialize_error",
        }
    }
}

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

fn input_path(cli: &Cli, settings: &Settings) -> Result<PathBuf, AppError> {
    cli.input
        .clone()
        .or_else(|| settings.input.path.as_ref().map(PathBuf::from))
        .ok_or(AppError::NoInput)
}

async fn run(cli: &Cli, settings: &Settings) -> Result<String, AppError> {
    let path = input_path(cli, settings)?;

    let source = JsonFileSource::new(path).with_max_limit(settings.matching.max_limit);
    let request = source.load_request().await?;

    info!(
        "Loaded request from {} ({} candidates, limit {})",
        source.path().display(),
        request.candidates.len(),
        request.limit
    );

    let matcher = Matcher::new(settings.matching.limits());
    let result = matcher.recommend(
        &request.traveler,
        request.candidates,
        Some(usize::from(request.limit)),
    );

    info!(
        "Returning {} guides (scored {} of {} candidates)",
        result.guides.len(),
        result.scored_candidates,
        result.total_candidates
    );

    let response = RecommendResponse {
        request_id: uuid::Uuid::new_v4().to_string(),
        generated_at: chrono::Utc::now(),
        total_candidates: result.total_candidates,
        scored_candidates: result.scored_candidates,
        recommendations: result.guides,
    };

    Ok(serde_json::to_string_pretty(&response)?)
}

fn report(err: &AppError) -> ExitCode {
    error!("{}", err);
    let body = ErrorResponse {
        error: err.kind().to_string(),
        message: err.to_string(),
    };
    match serde_json::to_string_pretty(&body) {
        Ok(json) => println!("{}", json),
        Err(_) => eprintln!("{}", err),
    }
    ExitCode::FAILURE
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            return report(&AppError::from(e));
        }
    };

    init_logging(&settings.logging);
    info!("Matcher limits: {:?}", settings.matching.limits());

    match run(&cli, &settings).await {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => report(&e),
    }
}
