/*
[INPUT]:  CLI arguments and an optional YAML configuration file
[OUTPUT]: One hygiene batch run against the configured tracker
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or the startup flow
*/

use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use phorge_conduit_adapter::{Capabilities, ConduitClient};
use phorge_task_chores::{ChoresConfig, run_chores};

#[derive(Parser, Debug)]
#[command(name = "phorge-task-chores", version, about = "Phorge task-board hygiene bot")]
struct Cli {
    /// Conduit API token
    #[arg(short = 't', long = "token", value_name = "TOKEN")]
    token: String,
    /// Decide and report without applying any edits
    #[arg(short = 'd', long = "dry-run")]
    dry_run: bool,
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    /// Override the configured tracker origin
    #[arg(long = "host", value_name = "URL")]
    host: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let mut config = load_config(args.config_path.as_ref())?;
    if let Some(host) = args.host {
        config.host = host;
    }

    info!(host = %config.host, dry_run = args.dry_run, "starting phorge-task-chores");
    if args.dry_run {
        info!("this is a dry run; edits will be decided but not applied");
    }

    let client = ConduitClient::with_config(
        &config.host,
        args.token,
        config.client_config(),
        Capabilities::standard(),
    )
    .context("construct conduit client")?;

    let report = run_chores(&client, &config.policy(), args.dry_run, Utc::now()).await?;
    if report.failed() > 0 {
        info!(failed = report.failed(), "some edits failed; see the log above");
    }

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<ChoresConfig> {
    let Some(path) = path else {
        return Ok(ChoresConfig::default());
    };
    let path_str = path.to_str().context("config path must be valid utf-8")?;
    ChoresConfig::from_file(path_str).context("load config")
}
