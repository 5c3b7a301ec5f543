use std::process::ExitCode;

use clap::Parser;
use neo_scenario::body::descriptor::BodyDescriptor;
use neo_scenario::config::NeoFeedConfig;
use neo_scenario::neo_errors::NeoError;
use neo_scenario::scenario::NeoScenario;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Fetch the upcoming close approaches of near Earth objects and print them as JSON
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// NASA api key (defaults to the configuration or NASA_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// first day of the feed window (YYYY-MM-DD), today when omitted
    #[arg(long)]
    start_date: Option<String>,

    /// maximum number of objects to retrieve
    #[arg(short = 'n', long)]
    max_candidates: Option<usize>,
}

fn load_config(args: &Args) -> Result<NeoFeedConfig, NeoError> {
    let mut config = match &args.config {
        Some(path) => NeoFeedConfig::from_file(path)?,
        None => NeoFeedConfig::default().with_env_overrides(),
    };

    if let Some(api_key) = &args.api_key {
        config.api_key = api_key.clone();
    }
    if let Some(start_date) = &args.start_date {
        config.start_date = Some(start_date.clone());
    }
    if let Some(max_candidates) = args.max_candidates {
        config.max_candidates = max_candidates;
    }

    config.validate()?;
    Ok(config)
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config.log_level);

    let scenario = NeoScenario::with_http(config, Vec::new());
    match scenario.load().await {
        Ok(registry) => {
            let neos: Vec<&BodyDescriptor> = registry.iter().collect();
            match serde_json::to_string_pretty(&neos) {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    error!("unable to serialize bodies: {err}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(err) => {
            error!("error loading NEO definitions: {err}");
            ExitCode::FAILURE
        }
    }
}
