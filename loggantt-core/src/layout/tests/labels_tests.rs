use crate::layout::{absolute_time_label, duration_label, format_int, seconds_label};

#[test]
fn seconds_label_wraps_at_day() {
    assert_eq!(seconds_label(36_005), "10:00:05");
    assert_eq!(seconds_label(86_400 + 61), "00:01:01");
}

#[test]
fn duration_label_keeps_hours_past_a_day() {
    assert_eq!(duration_label(0), "00:00:00");
    assert_eq!(duration_label(90_061), "25:01:01");
}

#[test]
fn absolute_label_adds_day_prefix_after_midnight() {
    assert_eq!(absolute_time_label(86_399), "23:59:59");
    assert_eq!(absolute_time_label(86_400), "D+1 00:00:00");
    assert_eq!(absolute_time_label(2 * 86_400 + 3600), "D+2 01:00:00");
}

#[test]
fn format_int_groups_thousands() {
    assert_eq!(format_int(0), "0");
    assert_eq!(format_int(999), "999");
    assert_eq!(format_int(1000), "1,000");
    assert_eq!(format_int(1_234_567), "1,234,567");
}
