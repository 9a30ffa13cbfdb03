//! `create`: schedule a new meeting.

use clap::Args;

use super::{parse_duration, parse_start_time};
use crate::client::ZoomClient;
use crate::error::Result;
use crate::meetings::{Meeting, NewMeeting, DEFAULT_TIMEZONE};

#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Meeting topic
    pub topic: String,

    /// Start time, e.g. 2026-11-02T15:00:00Z
    #[arg(value_parser = parse_start_time)]
    pub start_time: String,

    /// Duration in minutes
    #[arg(value_parser = parse_duration)]
    pub duration: u32,

    /// IANA timezone for the meeting
    #[arg(long, default_value = DEFAULT_TIMEZONE)]
    pub timezone: String,

    /// Recording mode: none | local | cloud
    #[arg(long, default_value = "cloud", value_parser = ["none", "local", "cloud"])]
    pub auto_recording: String,
}

impl CreateArgs {
    pub fn into_meeting(self) -> NewMeeting {
        NewMeeting::scheduled(self.topic, self.start_time, self.duration)
            .with_timezone(self.timezone)
            .with_auto_recording(self.auto_recording)
    }
}

pub async fn run(client: &ZoomClient, args: CreateArgs) -> Result<()> {
    let meeting = client.create_meeting(&args.into_meeting()).await?;
    println!("{}", format_created(&meeting));
    Ok(())
}

pub fn format_created(meeting: &Meeting) -> String {
    format!(
        "✅ Meeting created successfully!\nID: {}\nJoin URL: {}\nStart Time: {}",
        meeting.id_str(),
        meeting.join_url.as_deref().unwrap_or("-"),
        meeting.start_time.as_deref().unwrap_or("-"),
    )
}
