//! Meeting operations on top of [`ZoomClient`].
//!
//! Every operation acquires its own token and then makes exactly one call.

use std::fmt;
use std::str::FromStr;

use reqwest::{Method, Url};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use crate::client::ZoomClient;
use crate::{Error, Result};

/// Zoom meeting type 2: scheduled meeting.
pub const SCHEDULED_MEETING: u8 = 2;
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Meeting as returned by Zoom. Only the fields printed by the CLI are
/// named; the rest is kept verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub join_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Meeting {
    /// Meeting id as text; Zoom sends large integers, some endpoints strings.
    pub fn id_str(&self) -> String {
        match &self.id {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }
}

/// First page of `GET /users/{userId}/meetings`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MeetingList {
    #[serde(default)]
    pub meetings: Vec<Meeting>,
    #[serde(default)]
    pub total_records: Option<u64>,
    #[serde(default)]
    pub page_size: Option<u64>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// `type` query parameter of the list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListType {
    Scheduled,
    Live,
    #[default]
    Upcoming,
    UpcomingMeetings,
    PreviousMeetings,
}

impl ListType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListType::Scheduled => "scheduled",
            ListType::Live => "live",
            ListType::Upcoming => "upcoming",
            ListType::UpcomingMeetings => "upcoming_meetings",
            ListType::PreviousMeetings => "previous_meetings",
        }
    }
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "scheduled" => Ok(ListType::Scheduled),
            "live" => Ok(ListType::Live),
            "upcoming" => Ok(ListType::Upcoming),
            "upcoming_meetings" => Ok(ListType::UpcomingMeetings),
            "previous_meetings" => Ok(ListType::PreviousMeetings),
            other => Err(Error::InvalidArgument(format!(
                "Unknown meeting list type '{}'",
                other
            ))),
        }
    }
}

/// Settings sent with a new meeting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeetingSettings {
    pub host_video: bool,
    pub participant_video: bool,
    pub join_before_host: bool,
    pub mute_upon_entry: bool,
    pub approval_type: u8,
    pub audio: String,
    pub auto_recording: String,
}

impl Default for MeetingSettings {
    fn default() -> Self {
        Self {
            host_video: true,
            participant_video: true,
            join_before_host: false,
            mute_upon_entry: false,
            approval_type: 0,
            audio: "both".to_string(),
            auto_recording: "cloud".to_string(),
        }
    }
}

/// Body of `POST /users/{userId}/meetings`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMeeting {
    pub topic: String,
    #[serde(rename = "type")]
    pub meeting_type: u8,
    pub start_time: String,
    pub duration: u32,
    pub timezone: String,
    pub settings: MeetingSettings,
}

impl NewMeeting {
    /// Scheduled meeting in UTC with the default settings.
    pub fn scheduled<S1: Into<String>, S2: Into<String>>(
        topic: S1,
        start_time: S2,
        duration: u32,
    ) -> Self {
        Self {
            topic: topic.into(),
            meeting_type: SCHEDULED_MEETING,
            start_time: start_time.into(),
            duration,
            timezone: DEFAULT_TIMEZONE.to_string(),
            settings: MeetingSettings::default(),
        }
    }

    pub fn with_timezone<S: Into<String>>(mut self, timezone: S) -> Self {
        self.timezone = timezone.into();
        self
    }

    pub fn with_auto_recording<S: Into<String>>(mut self, mode: S) -> Self {
        self.settings.auto_recording = mode.into();
        self
    }
}

/// Body of `PATCH /meetings/{meetingId}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeetingUpdate {
    pub start_time: String,
    pub duration: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

fn require_id(meeting_id: &str) -> Result<&str> {
    let id = meeting_id.trim();
    if id.is_empty() {
        return Err(Error::InvalidArgument("Meeting id is empty".to_string()));
    }
    if id.chars().all(|c| c == '.') {
        return Err(Error::InvalidArgument(format!(
            "Meeting id '{}' is not valid",
            id
        )));
    }
    Ok(id)
}

impl ZoomClient {
    fn user_meetings_url(&self) -> Result<Url> {
        self.endpoint(&["users", self.credentials().user_id.as_str(), "meetings"])
    }

    /// Schedule a meeting for the configured user.
    pub async fn create_meeting(&self, meeting: &NewMeeting) -> Result<Meeting> {
        if meeting.topic.trim().is_empty() {
            return Err(Error::InvalidArgument("Meeting topic is empty".to_string()));
        }

        let url = self.user_meetings_url()?;
        let token = self.access_token().await?;
        let body = serde_json::to_value(meeting)?;

        let value = self.request(&token, Method::POST, url, Some(&body)).await?;
        let created: Meeting = serde_json::from_value(value)?;

        info!(id = %created.id_str(), "Meeting created");
        Ok(created)
    }

    /// First page of the configured user's meetings.
    pub async fn list_meetings(&self, list_type: ListType) -> Result<MeetingList> {
        let mut url = self.user_meetings_url()?;
        url.query_pairs_mut().append_pair("type", list_type.as_str());
        let token = self.access_token().await?;

        let value = self.request(&token, Method::GET, url, None).await?;
        if value.is_null() {
            return Ok(MeetingList::default());
        }

        let list: MeetingList = serde_json::from_value(value)?;
        info!(count = list.meetings.len(), %list_type, "Meetings listed");
        Ok(list)
    }

    /// Full meeting details, untouched.
    pub async fn get_meeting(&self, meeting_id: &str) -> Result<Value> {
        let id = require_id(meeting_id)?;
        let url = self.endpoint(&["meetings", id])?;
        let token = self.access_token().await?;

        self.request(&token, Method::GET, url, None).await
    }

    /// Reschedule a meeting, optionally renaming it.
    pub async fn update_meeting(&self, meeting_id: &str, update: &MeetingUpdate) -> Result<()> {
        let id = require_id(meeting_id)?;
        let url = self.endpoint(&["meetings", id])?;
        let token = self.access_token().await?;
        let body = serde_json::to_value(update)?;

        self.request(&token, Method::PATCH, url, Some(&body)).await?;
        info!(id, start_time = %update.start_time, "Meeting updated");
        Ok(())
    }

    pub async fn delete_meeting(&self, meeting_id: &str) -> Result<()> {
        let id = require_id(meeting_id)?;
        let url = self.endpoint(&["meetings", id])?;
        let token = self.access_token().await?;

        self.request(&token, Method::DELETE, url, None).await?;
        info!(id, "Meeting deleted");
        Ok(())
    }
}
