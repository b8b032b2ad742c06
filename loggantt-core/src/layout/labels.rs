use crate::timeline::constants::SECONDS_PER_DAY;

/// Time of day, `HH:MM:SS`, ignoring the day.
pub fn seconds_label(ts: u64) -> String {
    let h = (ts / 3600) % 24;
    let m = (ts % 3600) / 60;
    let s = ts % 60;
    format!("{h:02}:{m:02}:{s:02}")
}

/// `HH:MM:SS` with hours allowed past 24.
pub fn duration_label(total: u64) -> String {
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;
    format!("{h:02}:{m:02}:{s:02}")
}

/// Time of day, prefixed with `D+<day>` once the timeline has crossed
/// midnight.
pub fn absolute_time_label(ts: u64) -> String {
    let day = ts / SECONDS_PER_DAY;
    let base = seconds_label(ts);
    if day == 0 {
        base
    } else {
        format!("D+{day} {base}")
    }
}

/// Decimal with `,` thousands separators.
pub fn format_int(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
