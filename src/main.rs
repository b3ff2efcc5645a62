use std::process::ExitCode;

use biodata_match::config::{LoggingSettings, Settings};
use biodata_match::services::ProfilePool;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Rank the profiles that satisfy one profile's partner requirements
#[derive(Parser)]
#[command(name = "biodata-match")]
#[command(version)]
struct Cli {
    /// Id of the profile whose requirements drive the query
    subject_id: String,

    /// JSON file holding the profile pool (overrides pool.path)
    #[arg(long)]
    pool: Option<String>,

    /// Return at most this many matches
    #[arg(long)]
    top_k: Option<usize>,

    /// Keep inactive and married profiles, flagged for de-emphasis
    #[arg(long)]
    include_inactive: bool,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
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

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging);
    info!("Configuration loaded successfully");

    let pool_path = cli.pool.unwrap_or(settings.pool.path);
    let pool = match ProfilePool::load(&pool_path) {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to load profile pool: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let matcher = settings.matching.matcher();
    let mut options = settings.matching.options();
    options.include_inactive |= cli.include_inactive;
    if cli.top_k.is_some() {
        options.top_k = cli.top_k;
    }

    info!("Matcher initialized with ranking: {:?}, options: {:?}", matcher.ranking(), options);

    let snapshot = pool.snapshot();
    let report = match matcher.find_matches_for(&cli.subject_id, &snapshot, &options) {
        Ok(report) => report,
        Err(e) => {
            error!("Matching failed for {}: {}", cli.subject_id, e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        "Returning {} matches for {} (from {} candidates)",
        report.matches.len(),
        report.subject_id,
        report.total_candidates
    );

    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    };

    match json {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to serialize report: {}", e);
            ExitCode::FAILURE
        }
    }
}
