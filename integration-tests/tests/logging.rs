use integration_tests::harness::{LogFixture, capture_events, fixture_path};
use loggantt_core::cli::render;
use loggantt_core::timeline::parse_log;

#[test]
fn parse_emits_summary_event() {
    let (model, events) = capture_events(|| parse_log(&fixture_path("pluck.log")).unwrap());

    let parsed = events
        .iter()
        .find(|e| e.message() == Some("timeline parsed"))
        .expect("missing parse summary event");

    assert_eq!(parsed.field("chunks"), Some("6"));
    assert_eq!(parsed.field("streams"), Some("3"));
    assert_eq!(parsed.field("rollovers"), Some("1"));
    assert_eq!(parsed.field("timestamped"), Some("17"));
    assert_eq!(parsed.field("lines_read"), Some("19"));
    assert_eq!(model.chunks().len(), 6);
}

#[test]
fn ignored_lines_are_not_logged() {
    let fx = LogFixture::new();
    let input = fx.write_log(
        "noisy.log",
        &["noise", "more noise", "10:00:00 stream=a chunk=1", "trailing"],
    );

    let (_, events) = capture_events(|| parse_log(&input).unwrap());

    assert!(events.iter().all(|e| !format!("{:?}", e.fields).contains("noise")));
    assert_eq!(
        events
            .iter()
            .filter(|e| e.message() == Some("timeline parsed"))
            .count(),
        1
    );
}

#[test]
fn render_emits_output_event() {
    let fx = LogFixture::new();
    let output = fx.path("gantt.html");

    let (_, events) =
        capture_events(|| render(&fixture_path("pluck.log"), &output, "t", None).unwrap());

    let rendered = events
        .iter()
        .find(|e| e.message() == Some("timeline rendered"))
        .expect("missing render event");
    assert_eq!(rendered.field("chunk_bars"), Some("6"));
    assert_eq!(rendered.field("streams"), Some("3"));
    assert!(rendered.target.starts_with("loggantt_core"));
}
