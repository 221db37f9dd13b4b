//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "caffeine")]
#[command(about = "Keep your system awake from the terminal")]
#[command(version)]
pub struct Config {
    /// Duration to prevent sleep (e.g. 1h, 30m, 5h). 0 means indefinitely
    #[arg(short = 't', long = "time", value_parser = parse_duration, default_value = "0")]
    pub duration: Duration,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

/// Parse a duration string made of `<number><unit>` segments, where the unit
/// is one of `h`, `m`, `s` (e.g. `90s`, `30m`, `1h30m`). A bare `0` is
/// accepted and means "no duration".
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    let input = input.trim();
    if input == "0" {
        return Ok(Duration::ZERO);
    }
    if input.is_empty() {
        return Err("empty duration".to_string());
    }

    let mut total_seconds: u64 = 0;
    let mut digits = String::new();
    for ch in input.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }
        if digits.is_empty() {
            return Err(format!("invalid duration '{}': expected a number before '{}'", input, ch));
        }
        let value: u64 = digits
            .parse()
            .map_err(|_| format!("invalid duration '{}': number out of range", input))?;
        let scale = match ch {
            's' => 1,
            'm' => 60,
            'h' => 3600,
            other => {
                return Err(format!("invalid duration '{}': unknown unit '{}'", input, other));
            }
        };
        total_seconds = value
            .checked_mul(scale)
            .and_then(|v| total_seconds.checked_add(v))
            .ok_or_else(|| format!("invalid duration '{}': too large", input))?;
        digits.clear();
    }

    if !digits.is_empty() {
        return Err(format!("invalid duration '{}': missing unit (h, m or s)", input));
    }

    Ok(Duration::from_secs(total_seconds))
}

/// Format a duration as a compact `1h30m15s` style string, rounded to the
/// nearest whole second. Zero components are omitted except for the all-zero
/// case, which renders as `0s`.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs_f64().round() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{}h", hours));
    }
    if minutes > 0 {
        out.push_str(&format!("{}m", minutes));
    }
    if seconds > 0 || out.is_empty() {
        out.push_str(&format!("{}s", seconds));
    }
    out
}
