//! Text formatting shared by the screens.

use chrono::{Local, TimeZone};
use sentinel_config::constants::USER_AGENT_DISPLAY_LEN;

/// Human-readable monitor interval. Rounds down to whole minutes or hours.
pub fn format_interval(seconds: u32) -> String {
    if seconds < 60 {
        format!("{seconds} seconds")
    } else if seconds < 3600 {
        format!("{} minutes", seconds / 60)
    } else {
        format!("{} hours", seconds / 3600)
    }
}

/// Unix seconds as local `dd/mm/yyyy HH:MM:SS`. Zero renders as `never`.
pub fn format_timestamp(unix_secs: i64) -> String {
    if unix_secs <= 0 {
        return "never".to_string();
    }
    match Local.timestamp_opt(unix_secs, 0).single() {
        Some(dt) => dt.format("%d/%m/%Y %H:%M:%S").to_string(),
        None => unix_secs.to_string(),
    }
}

/// Request duration in milliseconds with two decimals.
pub fn format_millis(duration_ms: f64) -> String {
    format!("{duration_ms:.2} ms")
}

/// Truncates by characters and appends `...` when anything was cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

pub fn truncate_user_agent(user_agent: &str) -> String {
    truncate(user_agent, USER_AGENT_DISPLAY_LEN)
}

/// Pretty-prints `text` when it parses as JSON, returns it unchanged otherwise.
pub fn pretty_json_or_raw(text: &str) -> String {
    serde_json::from_str::<serde_json::Value>(text)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_interval_boundaries() {
        assert_eq!(format_interval(5), "5 seconds");
        assert_eq!(format_interval(59), "59 seconds");
        assert_eq!(format_interval(60), "1 minutes");
        assert_eq!(format_interval(150), "2 minutes");
        assert_eq!(format_interval(3599), "59 minutes");
        assert_eq!(format_interval(3600), "1 hours");
        assert_eq!(format_interval(7300), "2 hours");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("short", 28), "short");
        let ua = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36";
        let out = truncate_user_agent(ua);
        assert_eq!(out, "Mozilla/5.0 (X11; Linux x86_...");
        assert_eq!(out.chars().count(), USER_AGENT_DISPLAY_LEN + 3);
        assert_eq!(truncate("ééééé", 2), "éé...");
    }

    #[test]
    fn test_pretty_json_or_raw() {
        assert_eq!(pretty_json_or_raw(r#"{"a":1}"#), "{\n  \"a\": 1\n}");
        assert_eq!(pretty_json_or_raw("Bad Gateway"), "Bad Gateway");
        assert_eq!(pretty_json_or_raw(""), "");
    }

    #[test]
    fn test_format_timestamp_never() {
        assert_eq!(format_timestamp(0), "never");
        assert_eq!(format_timestamp(1_700_000_000).len(), 19);
    }

    #[test]
    fn test_format_millis() {
        assert_eq!(format_millis(12.5), "12.50 ms");
    }
}
