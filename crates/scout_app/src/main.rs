mod platform;

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use scout_logging::LogDestination;

/// Explore GitHub repositories by name, language and topic, one page at a time.
#[derive(Debug, Parser)]
#[command(name = "repo-scout", version, about)]
struct Cli {
    /// RON configuration file; defaults apply when it does not exist.
    #[arg(long, default_value = "repo_scout.ron")]
    config: PathBuf,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Also write logs to stderr when `--log-file` is given.
    #[arg(long, requires = "log_file")]
    log_stderr: bool,

    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let destination = match (cli.log_file, cli.log_stderr) {
        (Some(path), true) => LogDestination::Both(path),
        (Some(path), false) => LogDestination::File(path),
        (None, _) => LogDestination::Terminal,
    };
    scout_logging::initialize(destination, cli.log_level);

    let config = platform::config::AppConfig::load(&cli.config)?;
    let token = std::env::var(platform::config::TOKEN_ENV)
        .ok()
        .filter(|t| !t.trim().is_empty());

    platform::run_app(config, token)
}
