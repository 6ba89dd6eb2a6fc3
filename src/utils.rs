use crate::config::*;
use once_cell::sync::Lazy;
use regex::Regex;

// Compiled regexes for duration parsing
static TIME_COLON_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+):(\d+)$").unwrap());
static TIME_MIN_SEC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)m\s*(\d+)s$").unwrap());
static TIME_SEC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)s$").unwrap());

/// Duration parsing error types for better error handling
#[derive(Debug)]
pub enum DurationParseError {
    EmptyInput,
    InvalidFormat(String),
    InvalidMinutes,
    InvalidSeconds(u32),
    TooLarge,
}

impl std::fmt::Display for DurationParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DurationParseError::EmptyInput => write!(f, "Duration cannot be empty"),
            DurationParseError::InvalidFormat(hint) => {
                write!(f, "Invalid duration format. {}", hint)
            }
            DurationParseError::InvalidMinutes => write!(f, "Invalid minutes value"),
            DurationParseError::InvalidSeconds(s) => {
                write!(f, "Invalid seconds: {} (must be 0-59)", s)
            }
            DurationParseError::TooLarge => write!(f, "Duration is too large"),
        }
    }
}

impl std::error::Error for DurationParseError {}

/// Combine minutes and seconds without wrapping on absurd minute values.
fn total_secs(minutes: u32, seconds: u32) -> Result<u32, String> {
    minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .ok_or_else(|| DurationParseError::TooLarge.to_string())
}

/// Parse a race duration string in various formats to whole seconds.
///
/// Supported formats:
/// - Pure number: "360" (interpreted as seconds)
/// - Colon format: "6:00" (minutes:seconds)
/// - Minutes and seconds: "6m 0s" or "6m0s"
/// - Seconds only: "360s"
pub fn parse_duration_to_secs(input: &str) -> Result<u32, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DurationParseError::EmptyInput.to_string());
    }

    // Try parsing as pure number (assume seconds)
    if let Ok(secs) = trimmed.parse::<u32>() {
        return Ok(secs);
    }

    // Try parsing "M:SS" format
    if let Some(captures) = TIME_COLON_REGEX.captures(trimmed) {
        let minutes: u32 = captures[1]
            .parse()
            .map_err(|_| DurationParseError::InvalidMinutes.to_string())?;
        let seconds: u32 = captures[2]
            .parse()
            .map_err(|_| DurationParseError::InvalidSeconds(0).to_string())?;
        if seconds > 59 {
            return Err(DurationParseError::InvalidSeconds(seconds).to_string());
        }
        return total_secs(minutes, seconds);
    }

    // Try parsing "XmYs" format
    if let Some(captures) = TIME_MIN_SEC_REGEX.captures(trimmed) {
        let minutes: u32 = captures[1].parse().map_err(|_| "Invalid minutes")?;
        let seconds: u32 = captures[2].parse().map_err(|_| "Invalid seconds")?;
        if seconds > 59 {
            return Err(DurationParseError::InvalidSeconds(seconds).to_string());
        }
        return total_secs(minutes, seconds);
    }

    // Try parsing "Xs" format (seconds)
    if let Some(captures) = TIME_SEC_REGEX.captures(trimmed) {
        let seconds: u32 = captures[1].parse().map_err(|_| "Invalid seconds")?;
        return Ok(seconds);
    }

    Err(DurationParseError::InvalidFormat("Use: 6:00, 6m0s, 360s, or 360".to_string()).to_string())
}

/// Generic numeric input validation
pub fn validate_numeric_input<T>(
    input: &str,
    min: Option<T>,
    max: Option<T>,
    field_name: &str,
) -> Result<T, String>
where
    T: std::str::FromStr + std::fmt::Display + PartialOrd,
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("{} cannot be empty", field_name));
    }

    match trimmed.parse::<T>() {
        Ok(val) => {
            if let Some(min_val) = min {
                if val < min_val {
                    return Err(format!("{} must be at least {}", field_name, min_val));
                }
            }
            if let Some(max_val) = max {
                if val > max_val {
                    return Err(format!("{} cannot exceed {}", field_name, max_val));
                }
            }
            Ok(val)
        }
        Err(_) => Err(format!("{} must be a valid number", field_name)),
    }
}

/// Validate cox weight input against the slider bounds
pub fn validate_cox_weight(input: &str) -> Result<f64, String> {
    validate_numeric_input(
        input,
        Some(MIN_COX_WEIGHT_KG),
        Some(MAX_COX_WEIGHT_KG),
        "Cox weight",
    )
}

/// Validate crew average weight input against the slider bounds
pub fn validate_crew_weight(input: &str) -> Result<f64, String> {
    validate_numeric_input(
        input,
        Some(MIN_CREW_WEIGHT_KG),
        Some(MAX_CREW_WEIGHT_KG),
        "Crew average weight",
    )
}

/// Validate a race duration in whole seconds against the slider bounds
pub fn validate_duration_secs(secs: u32) -> Result<u32, String> {
    if secs > MAX_RACE_DURATION_SECS {
        return Err(format!(
            "Race duration cannot exceed {} seconds",
            MAX_RACE_DURATION_SECS
        ));
    }
    Ok(secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_duration_formats() {
        assert_eq!(parse_duration_to_secs("360"), Ok(360));
        assert_eq!(parse_duration_to_secs("6:00"), Ok(360));
        assert_eq!(parse_duration_to_secs("6m0s"), Ok(360));
        assert_eq!(parse_duration_to_secs("6m 0s"), Ok(360));
        assert_eq!(parse_duration_to_secs("360s"), Ok(360));
        assert_eq!(parse_duration_to_secs(" 5:59 "), Ok(359));
    }

    #[test]
    fn rejects_malformed_durations() {
        assert!(parse_duration_to_secs("").is_err());
        assert!(parse_duration_to_secs("6:61").is_err());
        assert!(parse_duration_to_secs("six minutes").is_err());
        assert!(parse_duration_to_secs("-360").is_err());
    }

    #[test]
    fn overflowing_minute_values_return_an_error() {
        // 71582789 * 60 exceeds u32::MAX
        assert!(parse_duration_to_secs("71582789:00").is_err());
        assert!(parse_duration_to_secs("71582789m0s").is_err());
        // largest representable total still parses
        assert_eq!(parse_duration_to_secs("71582788:15"), Ok(71582788 * 60 + 15));
    }

    #[test]
    fn weight_validation_enforces_slider_bounds() {
        assert_eq!(validate_cox_weight("55"), Ok(55.0));
        assert_eq!(validate_cox_weight("140"), Ok(140.0));
        assert!(validate_cox_weight("49.9").is_err());
        assert!(validate_cox_weight("141").is_err());
        assert!(validate_cox_weight("").is_err());
        assert!(validate_cox_weight("heavy").is_err());
    }

    #[test]
    fn crew_weight_range_is_wider_than_cox() {
        assert_eq!(validate_crew_weight("40"), Ok(40.0));
        assert!(validate_crew_weight("39").is_err());
    }

    #[test]
    fn duration_validation_caps_at_slider_max() {
        assert_eq!(validate_duration_secs(1000), Ok(1000));
        assert!(validate_duration_secs(1001).is_err());
    }
}
