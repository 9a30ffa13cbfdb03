//! Zoom meeting management library
//!
//! This library provides tools to:
//! - Exchange server-to-server OAuth app credentials for a bearer token
//! - Create, list, inspect, reschedule and delete Zoom meetings
//! - Load credentials from environment variables, `.env` or a config file

pub mod auth;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod meetings;

// Re-export common types
pub use client::ZoomClient;
pub use config::{Credentials, ZoomConfig};
pub use error::{Error, Result};
pub use meetings::{ListType, Meeting, MeetingList, MeetingUpdate, NewMeeting};

/// Install the stderr log subscriber shared by every binary.
///
/// `RUST_LOG` wins; otherwise only warnings from this crate are shown so
/// stdout stays clean for command output.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("zoom_meetings=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse CLI arguments; usage errors exit with code 1, `--help` and
/// `--version` with 0.
pub fn parse_args_or_exit<P: clap::Parser>() -> P {
    match P::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    }
}

/// Print a top-level error to stderr and turn it into the process exit code.
pub fn report(result: anyhow::Result<()>) -> std::process::ExitCode {
    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❌ Error: {:#}", err);
            std::process::ExitCode::FAILURE
        }
    }
}
