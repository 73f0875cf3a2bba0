//! Conversions between seconds and the `H:MM:SS` strings duration editors use.

/// Format seconds as `M:SS` or `H:MM:SS`
pub fn seconds_to_string(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let total = seconds.unsigned_abs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}{}:{:02}:{:02}", sign, hours, minutes, secs)
    } else {
        format!("{}{}:{:02}", sign, minutes, secs)
    }
}

/// Parse `S`, `M:S` or `H:M:S` into seconds
pub fn string_to_seconds(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parts: Vec<&str> = trimmed.split(':').collect();
    if parts.len() > 3 {
        return None;
    }

    let mut seconds: i64 = 0;
    for part in parts {
        let value: i64 = part.trim().parse().ok()?;
        if value < 0 {
            return None;
        }
        seconds = seconds.checked_mul(60)?.checked_add(value)?;
    }

    Some(seconds)
}
