//! Print full details of a Zoom meeting as JSON.
//!
//! Usage:
//!   cargo run --bin get_meeting_info -- 81234567890

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use zoom_meetings::commands;
use zoom_meetings::{ZoomClient, ZoomConfig};

#[derive(Parser, Debug)]
#[command(name = "get_meeting_info")]
#[command(about = "Show Zoom meeting details")]
struct Args {
    /// Config file (JSON or YAML)
    #[arg(long, env = "ZOOM_CONFIG")]
    config: Option<PathBuf>,

    /// Meeting ID
    meeting_id: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args: Args = zoom_meetings::parse_args_or_exit();
    zoom_meetings::init_logging();

    zoom_meetings::report(run(args).await)
}

async fn run(args: Args) -> anyhow::Result<()> {
    let client = ZoomClient::new(ZoomConfig::load(args.config.as_deref())?)?;
    commands::info::run(&client, &args.meeting_id).await?;
    Ok(())
}
