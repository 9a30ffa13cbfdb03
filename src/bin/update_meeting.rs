//! Reschedule a Zoom meeting.
//!
//! Usage:
//!   cargo run --bin update_meeting -- 81234567890 2026-11-04T09:00:00Z 45 "New topic"

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use zoom_meetings::commands::{self, UpdateArgs};
use zoom_meetings::{ZoomClient, ZoomConfig};

#[derive(Parser, Debug)]
#[command(name = "update_meeting")]
#[command(about = "Change a Zoom meeting's start time, duration and topic")]
struct Args {
    /// Config file (JSON or YAML)
    #[arg(long, env = "ZOOM_CONFIG")]
    config: Option<PathBuf>,

    #[command(flatten)]
    update: UpdateArgs,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args: Args = zoom_meetings::parse_args_or_exit();
    zoom_meetings::init_logging();

    zoom_meetings::report(run(args).await)
}

async fn run(args: Args) -> anyhow::Result<()> {
    let client = ZoomClient::new(ZoomConfig::load(args.config.as_deref())?)?;
    commands::update::run(&client, args.update).await?;
    Ok(())
}
