//! Tests for the list command output

use zoom_meetings::commands::list::format_list;
use zoom_meetings::{ListType, MeetingList};

#[test]
fn list_output_matches_console_format() {
    let list: MeetingList = serde_json::from_value(serde_json::json!({
        "page_size": 30,
        "total_records": 1,
        "meetings": [{
            "id": 93012345678_u64,
            "topic": "1:1",
            "start_time": "2026-11-05T08:30:00Z",
            "join_url": "https://zoom.us/j/93012345678"
        }]
    }))
    .expect("list");

    let out = format_list(&list, ListType::Upcoming);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "Found 1 upcoming meeting(s):");
    assert_eq!(
        lines[1],
        "- 1:1 | ID: 93012345678 | 2026-11-05T08:30:00Z | https://zoom.us/j/93012345678"
    );
}

#[test]
fn empty_upcoming_list() {
    assert_eq!(
        format_list(&MeetingList::default(), ListType::UpcomingMeetings),
        "No upcoming meetings found."
    );
}
