//! `list`: show the configured user's meetings.

use crate::client::ZoomClient;
use crate::error::Result;
use crate::meetings::{ListType, MeetingList};

pub async fn run(client: &ZoomClient, list_type: ListType) -> Result<()> {
    let list = client.list_meetings(list_type).await?;
    println!("{}", format_list(&list, list_type));
    Ok(())
}

pub fn format_list(list: &MeetingList, list_type: ListType) -> String {
    let label = match list_type {
        ListType::Upcoming | ListType::UpcomingMeetings => "upcoming",
        ListType::PreviousMeetings => "previous",
        ListType::Live => "live",
        ListType::Scheduled => "scheduled",
    };

    if list.meetings.is_empty() {
        return format!("No {} meetings found.", label);
    }

    let mut out = format!("Found {} {} meeting(s):", list.meetings.len(), label);
    for m in &list.meetings {
        out.push_str(&format!(
            "\n- {} | ID: {} | {} | {}",
            m.topic.as_deref().unwrap_or("(no topic)"),
            m.id_str(),
            m.start_time.as_deref().unwrap_or("-"),
            m.join_url.as_deref().unwrap_or("-"),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_list_message() {
        assert_eq!(
            format_list(&MeetingList::default(), ListType::Upcoming),
            "No upcoming meetings found."
        );
    }

    #[test]
    fn one_line_per_meeting() {
        let list: MeetingList = serde_json::from_value(json!({
            "meetings": [
                { "id": 1, "topic": "Standup", "start_time": "2026-11-02T09:00:00Z", "join_url": "https://zoom.us/j/1" },
                { "id": "2", "topic": "Retro" }
            ]
        }))
        .expect("list");

        assert_eq!(
            format_list(&list, ListType::Upcoming),
            "Found 2 upcoming meeting(s):\n\
             - Standup | ID: 1 | 2026-11-02T09:00:00Z | https://zoom.us/j/1\n\
             - Retro | ID: 2 | - | -"
        );
    }

    #[test]
    fn label_follows_list_type() {
        assert_eq!(
            format_list(&MeetingList::default(), ListType::PreviousMeetings),
            "No previous meetings found."
        );
    }
}
