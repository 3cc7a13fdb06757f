//! Text helpers for the console output.

/// Returns `word` for a count of one and the regular English plural otherwise.
pub fn correct_plural_form(count: u64, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

/// Renders a duration given in seconds.
///
/// Under a minute the value keeps two decimals (`"45.00 seconds"`). From one
/// minute up it is split into whole minutes and whole remaining seconds, so
/// fractional seconds are dropped (`"2 minutes and 5 seconds"`).
pub fn format_duration(total_seconds: f64) -> String {
    if total_seconds < 60.0 {
        return format!("{:.2} seconds", total_seconds);
    }

    let whole_seconds = total_seconds as u64;
    let minutes = whole_seconds / 60;
    let seconds = whole_seconds % 60;

    format!(
        "{} {} and {} {}",
        minutes,
        correct_plural_form(minutes, "minute"),
        seconds,
        correct_plural_form(seconds, "second")
    )
}
