//! Zoom CLI - main entry point
//!
//! Unified interface for the meeting operations; each run fetches a fresh
//! token and makes a single API call.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use zoom_meetings::commands::{self, CreateArgs, UpdateArgs};
use zoom_meetings::{ListType, ZoomClient, ZoomConfig};

#[derive(Parser)]
#[command(name = "zoom")]
#[command(about = "Create, list, inspect, update and delete Zoom meetings", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (JSON or YAML); env vars take precedence over it
    #[arg(long, env = "ZOOM_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Schedule a new meeting
    Create(CreateArgs),

    /// List the user's meetings
    List {
        /// Meeting type: scheduled | live | upcoming | upcoming_meetings | previous_meetings
        #[arg(short = 't', long = "type", default_value = "upcoming")]
        list_type: ListType,
    },

    /// Show full details of a meeting
    Info {
        /// Meeting ID
        meeting_id: String,
    },

    /// Delete a meeting
    Delete {
        /// Meeting ID
        meeting_id: String,
    },

    /// Change start time, duration and optionally the topic
    Update(UpdateArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli: Cli = zoom_meetings::parse_args_or_exit();
    zoom_meetings::init_logging();

    zoom_meetings::report(execute(cli).await)
}

async fn execute(cli: Cli) -> anyhow::Result<()> {
    // Credentials are checked before anything goes over the wire.
    let config = ZoomConfig::load(cli.config.as_deref())?;
    let client = ZoomClient::new(config)?;

    match cli.command {
        Commands::Create(args) => commands::create::run(&client, args).await?,
        Commands::List { list_type } => commands::list::run(&client, list_type).await?,
        Commands::Info { meeting_id } => commands::info::run(&client, &meeting_id).await?,
        Commands::Delete { meeting_id } => commands::delete::run(&client, &meeting_id).await?,
        Commands::Update(args) => commands::update::run(&client, args).await?,
    }

    Ok(())
}
