//! Schedule a Zoom meeting.
//!
//! Usage:
//!   cargo run --bin create_meeting -- "Weekly sync" 2026-11-02T15:00:00Z 30

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use zoom_meetings::commands::{self, CreateArgs};
use zoom_meetings::{ZoomClient, ZoomConfig};

#[derive(Parser, Debug)]
#[command(name = "create_meeting")]
#[command(about = "Create a scheduled Zoom meeting")]
struct Args {
    /// Config file (JSON or YAML)
    #[arg(long, env = "ZOOM_CONFIG")]
    config: Option<PathBuf>,

    #[command(flatten)]
    meeting: CreateArgs,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args: Args = zoom_meetings::parse_args_or_exit();
    zoom_meetings::init_logging();

    zoom_meetings::report(run(args).await)
}

async fn run(args: Args) -> anyhow::Result<()> {
    let client = ZoomClient::new(ZoomConfig::load(args.config.as_deref())?)?;
    commands::create::run(&client, args.meeting).await?;
    Ok(())
}
