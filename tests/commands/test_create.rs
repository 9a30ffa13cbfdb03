//! Tests for the create command

use clap::Parser;
use zoom_meetings::commands::CreateArgs;

#[derive(Parser, Debug)]
struct Harness {
    #[command(flatten)]
    args: CreateArgs,
}

#[test]
fn positional_topic_start_and_duration() {
    let parsed = Harness::try_parse_from(["create", "Weekly sync", "2026-11-02T15:00:00Z", "30"])
        .expect("parse");

    assert_eq!(parsed.args.topic, "Weekly sync");
    assert_eq!(parsed.args.start_time, "2026-11-02T15:00:00Z");
    assert_eq!(parsed.args.duration, 30);
    assert_eq!(parsed.args.timezone, "UTC");
    assert_eq!(parsed.args.auto_recording, "cloud");
}

#[test]
fn missing_duration_is_a_usage_error() {
    let err = Harness::try_parse_from(["create", "Weekly sync", "2026-11-02T15:00:00Z"])
        .unwrap_err();
    assert!(err.use_stderr());
}

#[test]
fn non_numeric_duration_is_rejected() {
    assert!(Harness::try_parse_from(["create", "t", "2026-11-02T15:00:00Z", "soon"]).is_err());
}

#[test]
fn malformed_start_time_is_rejected() {
    assert!(Harness::try_parse_from(["create", "t", "next tuesday", "30"]).is_err());
}

#[test]
fn unknown_recording_mode_is_rejected() {
    assert!(Harness::try_parse_from([
        "create",
        "t",
        "2026-11-02T15:00:00Z",
        "30",
        "--auto-recording",
        "tape"
    ])
    .is_err());
}

#[test]
fn options_reach_the_payload() {
    let parsed = Harness::try_parse_from([
        "create",
        "Board",
        "2026-11-02T15:00:00",
        "60",
        "--timezone",
        "Asia/Tokyo",
        "--auto-recording",
        "local",
    ])
    .expect("parse");

    let meeting = parsed.args.into_meeting();
    assert_eq!(meeting.timezone, "Asia/Tokyo");
    assert_eq!(meeting.settings.auto_recording, "local");
}
