// Command-line entry point for the vehicle recommender
//
// Usage:
//   recommend request.json
//   recommend --json houseLat=37.77 houseLng=-122.42 workplaceLat=37.80 \
//       workplaceLng=-122.27 holidayLat=34.05 holidayLng=-118.24 preferredType=electric

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vehicle_recommender::{
    EngineConfig, JsonFormatter, MarkdownFormatter, RecommendationInput, Recommender,
    VehicleCatalog,
};

/// Recommend a primary vehicle and a runner-up for a commute and a holiday trip
#[derive(Parser, Debug)]
#[command(name = "recommend", version)]
struct Cli {
    /// Print the result as JSON instead of Markdown
    #[arg(long)]
    json: bool,

    /// Vehicle catalog CSV (default: built-in catalog)
    #[arg(long, env = "VEHICLE_CATALOG")]
    catalog: Option<PathBuf>,

    /// Engine config JSON (default: built-in prices)
    #[arg(long, env = "ENGINE_CONFIG")]
    config: Option<PathBuf>,

    /// A request JSON file, or key=value query parameters
    #[arg(required = true)]
    request: Vec<String>,
}

fn main() {
    // Initialize tracing (structured logging, stderr so stdout stays clean)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vehicle_recommender=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let catalog = match &cli.catalog {
        Some(path) => VehicleCatalog::load_csv(path)?,
        None => VehicleCatalog::builtin(),
    };
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    let input = read_request(&cli.request)?;
    let result = Recommender::with_config(&catalog, config).recommend(&input)?;

    let output = if cli.json {
        JsonFormatter::format(&result).context("Failed to serialize result")?
    } else {
        MarkdownFormatter::format(&result)
    };
    println!("{}", output);
    Ok(())
}

/// A single argument without '=' is a request file; everything else is key=value pairs
fn read_request(args: &[String]) -> Result<RecommendationInput> {
    if let [single] = args {
        if !single.contains('=') {
            return read_request_file(Path::new(single));
        }
    }

    let mut pairs = Vec::with_capacity(args.len());
    for arg in args {
        let Some((key, value)) = arg.split_once('=') else {
            bail!("Expected key=value, got '{}'", arg);
        };
        pairs.push((key, value));
    }
    Ok(RecommendationInput::from_query_params(pairs)?)
}

fn read_request_file(path: &Path) -> Result<RecommendationInput> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request: {:?}", path))?;
    serde_json::from_str(&contents).with_context(|| format!("Invalid request JSON: {:?}", path))
}
