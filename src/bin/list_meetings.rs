//! List upcoming Zoom meetings for the configured user.
//!
//! Usage:
//!   cargo run --bin list_meetings
//!   cargo run --bin list_meetings -- --type previous_meetings

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use zoom_meetings::commands;
use zoom_meetings::{ListType, ZoomClient, ZoomConfig};

#[derive(Parser, Debug)]
#[command(name = "list_meetings")]
#[command(about = "List Zoom meetings")]
struct Args {
    /// Config file (JSON or YAML)
    #[arg(long, env = "ZOOM_CONFIG")]
    config: Option<PathBuf>,

    /// Meeting type: scheduled | live | upcoming | upcoming_meetings | previous_meetings
    #[arg(short = 't', long = "type", default_value = "upcoming")]
    list_type: ListType,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args: Args = zoom_meetings::parse_args_or_exit();
    zoom_meetings::init_logging();

    zoom_meetings::report(run(args).await)
}

async fn run(args: Args) -> anyhow::Result<()> {
    let client = ZoomClient::new(ZoomConfig::load(args.config.as_deref())?)?;
    commands::list::run(&client, args.list_type).await?;
    Ok(())
}
