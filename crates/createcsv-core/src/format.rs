//! Human-readable figures for the run summary.

use std::time::Duration;

/// Format an integer with `,` separating groups of three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a duration as seconds with millisecond precision.
///
/// The integer part is grouped and trailing fractional zeros are dropped,
/// so 1.5s renders as `1.5` and 2s as `2`.
pub fn format_seconds(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    let seconds = u64::try_from(millis / 1000).unwrap_or(u64::MAX);
    let fraction = format!("{:03}", millis % 1000);
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        group_thousands(seconds)
    } else {
        format!("{}.{fraction}", group_thousands(seconds))
    }
}
