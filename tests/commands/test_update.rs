//! Tests for the update command

use clap::Parser;
use zoom_meetings::commands::UpdateArgs;

#[derive(Parser, Debug)]
struct Harness {
    #[command(flatten)]
    args: UpdateArgs,
}

#[test]
fn topic_is_optional() {
    let parsed = Harness::try_parse_from(["update", "42", "2026-11-04T09:00:00Z", "15"])
        .expect("parse");

    let update = parsed.args.to_update();
    assert_eq!(update.start_time, "2026-11-04T09:00:00Z");
    assert_eq!(update.duration, 15);
    assert!(update.topic.is_none());
}

#[test]
fn topic_is_forwarded() {
    let parsed = Harness::try_parse_from([
        "update",
        "42",
        "2026-11-04T09:00:00Z",
        "15",
        "Quarterly planning",
    ])
    .expect("parse");

    assert_eq!(
        parsed.args.to_update().topic.as_deref(),
        Some("Quarterly planning")
    );
}

#[test]
fn zero_duration_is_rejected() {
    assert!(Harness::try_parse_from(["update", "42", "2026-11-04T09:00:00Z", "0"]).is_err());
}

#[test]
fn too_few_arguments_is_a_usage_error() {
    assert!(Harness::try_parse_from(["update", "42"]).is_err());
}
