//! Formatting helpers for presenting metrics.

/// Marks averages show at most two decimals with trailing zeros trimmed,
/// so 77.6 renders as "77.6" rather than "77.60".
pub fn format_marks(value: f64) -> String {
    let text = format!("{value:.2}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Attendance averages keep a fixed two-decimal percentage, e.g. "84.00%".
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

pub fn format_number(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}
