use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crowdstats::report::{ReportFormat, render};
use crowdstats::utils::read_source_list;
use crowdstats::{Config, Summarizer};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{Level, debug};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "crowdstats")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Average and median age over many CSV person lists", long_about = None)]
struct Cli {
    /// File listing one source per line (http(s) URL, file:// URL or path)
    sources_file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// JSON configuration file
    #[arg(short, long, env = "CROWDSTATS_CONFIG")]
    config: Option<PathBuf>,

    /// Upper bound on concurrent workers
    #[arg(long)]
    max_workers: Option<usize>,

    /// Per-source fetch timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => ReportFormat::Text,
            Format::Json => ReportFormat::Json,
        }
    }
}

fn init_tracing(json: bool, level: Level) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    // Logs go to stderr so stdout carries only the report
    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr).json())
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init()
            .ok();
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(max_workers) = cli.max_workers {
        config.pool.max_workers = max_workers;
    }
    if let Some(secs) = cli.timeout_secs {
        config.fetch.timeout = Duration::from_secs(secs);
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    init_tracing(cli.log_json, level);

    let config = load_config(&cli)?;
    debug!(?config, "configuration loaded");

    let source_ids = read_source_list(&cli.sources_file).with_context(|| {
        format!(
            "failed to read source list {}",
            cli.sources_file.display()
        )
    })?;
    debug!(sources = source_ids.len(), "source list loaded");

    let summarizer = Summarizer::from_config(&config).context("failed to set up fetchers")?;
    let (summary, stats) = summarizer.run(source_ids).await?;

    let output = render(&summary, &stats, cli.format.into())?;
    print!("{output}");
    if matches!(cli.format, Format::Json) {
        println!();
    }

    Ok(())
}
