//! Duration text: ISO-8601 (`PT3H`) and `"<integer> <UNIT_NAME>"` forms.
//!
//! The ISO form is the canonical one; typed duration defaults are stored
//! as [`format_duration`] output and [`parse_duration`] accepts both forms.
//! Negative durations are unsupported (the domain is unsigned).

use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;

use crate::error::{ConfigError, ConfigResult};

fn iso_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^P(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+(?:\.\d{1,9})?)S)?)?$")
            .unwrap()
    })
}

fn unit_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^\s*(\d+)\s+(NANOSECONDS|MICROSECONDS|MILLISECONDS|SECONDS|MINUTES|HOURS|DAYS)\s*$",
        )
        .unwrap()
    })
}

/// Parses duration text in either accepted form.
///
/// # Errors
///
/// Returns [`ConfigError`] when the text matches neither form or the
/// resulting duration overflows.
pub fn parse_duration(text: &str) -> ConfigResult<Duration> {
    if let Some(caps) = unit_regex().captures(text) {
        let count: u64 = caps[1]
            .parse()
            .map_err(|_| ConfigError::new(format!("duration count out of range: {}", text)))?;
        return scale(count, &caps[2].to_ascii_uppercase(), text);
    }
    parse_iso(text)
}

/// Renders a duration in canonical ISO-8601 form.
///
/// `parse_duration(format_duration(d)) == d` for every duration.
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let nanos = duration.subsec_nanos();
    if total_secs == 0 && nanos == 0 {
        return "PT0S".to_string();
    }

    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;

    let mut out = String::from("P");
    if days > 0 {
        out.push_str(&format!("{}D", days));
    }
    if hours > 0 || minutes > 0 || seconds > 0 || nanos > 0 {
        out.push('T');
        if hours > 0 {
            out.push_str(&format!("{}H", hours));
        }
        if minutes > 0 {
            out.push_str(&format!("{}M", minutes));
        }
        if seconds > 0 || nanos > 0 {
            if nanos > 0 {
                let frac = format!("{:09}", nanos);
                out.push_str(&format!("{}.{}S", seconds, frac.trim_end_matches('0')));
            } else {
                out.push_str(&format!("{}S", seconds));
            }
        }
    }
    out
}

fn parse_iso(text: &str) -> ConfigResult<Duration> {
    let caps = iso_regex()
        .captures(text)
        .ok_or_else(|| ConfigError::new(format!("malformed duration text: {}", text)))?;

    // A bare "P" or "PT" carries no component at all.
    if caps.get(1).is_none() && caps.get(2).is_none() && caps.get(3).is_none() && caps.get(4).is_none()
    {
        return Err(ConfigError::new(format!(
            "duration text has no components: {}",
            text
        )));
    }

    let field = |i: usize| -> ConfigResult<u64> {
        match caps.get(i) {
            Some(m) => m
                .as_str()
                .parse()
                .map_err(|_| ConfigError::new(format!("duration component out of range: {}", text))),
            None => Ok(0),
        }
    };

    let days = field(1)?;
    let hours = field(2)?;
    let minutes = field(3)?;

    let (seconds, nanos) = match caps.get(4) {
        Some(m) => split_seconds(m.as_str(), text)?,
        None => (0, 0),
    };

    let total = days
        .checked_mul(86_400)
        .and_then(|t| hours.checked_mul(3_600).and_then(|h| t.checked_add(h)))
        .and_then(|t| minutes.checked_mul(60).and_then(|m| t.checked_add(m)))
        .and_then(|t| t.checked_add(seconds))
        .ok_or_else(|| ConfigError::new(format!("duration overflows: {}", text)))?;

    Ok(Duration::new(total, nanos))
}

fn split_seconds(field: &str, text: &str) -> ConfigResult<(u64, u32)> {
    let (whole, frac) = match field.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (field, ""),
    };
    let seconds: u64 = whole
        .parse()
        .map_err(|_| ConfigError::new(format!("duration component out of range: {}", text)))?;
    if frac.is_empty() {
        return Ok((seconds, 0));
    }
    // Right-pad the fraction to nanosecond precision.
    let padded = format!("{:0<9}", frac);
    let nanos: u32 = padded
        .parse()
        .map_err(|_| ConfigError::new(format!("duration component out of range: {}", text)))?;
    Ok((seconds, nanos))
}

fn scale(count: u64, unit: &str, text: &str) -> ConfigResult<Duration> {
    let overflow = || ConfigError::new(format!("duration overflows: {}", text));
    match unit {
        "NANOSECONDS" => Ok(Duration::from_nanos(count)),
        "MICROSECONDS" => Ok(Duration::from_micros(count)),
        "MILLISECONDS" => Ok(Duration::from_millis(count)),
        "SECONDS" => Ok(Duration::from_secs(count)),
        "MINUTES" => count.checked_mul(60).map(Duration::from_secs).ok_or_else(overflow),
        "HOURS" => count.checked_mul(3_600).map(Duration::from_secs).ok_or_else(overflow),
        "DAYS" => count
            .checked_mul(86_400)
            .map(Duration::from_secs)
            .ok_or_else(overflow),
        _ => unreachable!("unit names are fixed by the regex"),
    }
}
