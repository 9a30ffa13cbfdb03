//! `update`: reschedule (and optionally rename) a meeting.

use clap::Args;

use super::{parse_duration, parse_start_time};
use crate::client::ZoomClient;
use crate::error::Result;
use crate::meetings::MeetingUpdate;

#[derive(Args, Debug, Clone)]
pub struct UpdateArgs {
    /// Meeting ID
    pub meeting_id: String,

    /// New start time, e.g. 2026-11-02T15:00:00Z
    #[arg(value_parser = parse_start_time)]
    pub start_time: String,

    /// New duration in minutes
    #[arg(value_parser = parse_duration)]
    pub duration: u32,

    /// New topic (unchanged when omitted)
    pub topic: Option<String>,
}

impl UpdateArgs {
    pub fn to_update(&self) -> MeetingUpdate {
        MeetingUpdate {
            start_time: self.start_time.clone(),
            duration: self.duration,
            topic: self
                .topic
                .as_ref()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
        }
    }
}

pub async fn run(client: &ZoomClient, args: UpdateArgs) -> Result<()> {
    client
        .update_meeting(&args.meeting_id, &args.to_update())
        .await?;
    println!(
        "✅ Meeting {} updated successfully to {}.",
        args.meeting_id.trim(),
        args.start_time
    );
    Ok(())
}
