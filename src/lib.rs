use log::{debug, warn};
use std::fmt;
use std::str::FromStr;
use wasm_bindgen::prelude::*;

/// Empirical scaling constant from the "Effect of Deadweight on Boat Speed"
/// analysis in Anu Dudhia's Physics of Rowing.
pub const DEADWEIGHT_DIVISOR: f64 = 6.0;

/// Default crew parameters shown at startup
pub mod defaults {
    pub const COX_WEIGHT_KG: f64 = 55.0;
    pub const CREW_AVERAGE_WEIGHT_KG: f64 = 85.0;
    pub const RACE_DURATION_SECS: f64 = 360.0;
}

// Custom error type for penalty estimation
#[derive(Debug, Clone, PartialEq)]
pub enum DeadweightError {
    UnknownBoatClass(String),
    InvalidWeight { field: &'static str, value: f64 },
    InvalidDuration(f64),
}

impl fmt::Display for DeadweightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeadweightError::UnknownBoatClass(label) => {
                write!(f, "Unknown boat class: '{}' (expected W8+, M8+, W4+ or M4+)", label)
            }
            DeadweightError::InvalidWeight { field, value } => {
                write!(f, "Invalid {}: {} kg (must be a finite, non-negative number)", field, value)
            }
            DeadweightError::InvalidDuration(value) => {
                write!(f, "Invalid race duration: {} s (must be a finite, non-negative number)", value)
            }
        }
    }
}

impl std::error::Error for DeadweightError {}

/// The four coxed boat classes recognised by British Rowing's minimum cox
/// weight rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum BoatClass {
    /// Women's eight (8+)
    W8,
    /// Men's eight (8+)
    M8,
    /// Women's coxed four (4+)
    W4,
    /// Men's coxed four (4+)
    M4,
}

/// Per-class constants used by the penalty formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassConstants {
    pub hull_weight_kg: f64,
    pub rower_count: u32,
    pub min_cox_weight_kg: f64,
}

impl BoatClass {
    /// All classes, in picker display order.
    pub const ALL: [BoatClass; 4] = [BoatClass::W8, BoatClass::M8, BoatClass::W4, BoatClass::M4];

    /// Finite lookup over the four classes. Eights carry a 100 kg hull and
    /// eight rowers, fours a 60 kg hull and four rowers; the minimum cox
    /// weight is 50 kg for women's classes and 55 kg for men's.
    pub fn constants(self) -> ClassConstants {
        match self {
            BoatClass::W8 => ClassConstants {
                hull_weight_kg: 100.0,
                rower_count: 8,
                min_cox_weight_kg: 50.0,
            },
            BoatClass::M8 => ClassConstants {
                hull_weight_kg: 100.0,
                rower_count: 8,
                min_cox_weight_kg: 55.0,
            },
            BoatClass::W4 => ClassConstants {
                hull_weight_kg: 60.0,
                rower_count: 4,
                min_cox_weight_kg: 50.0,
            },
            BoatClass::M4 => ClassConstants {
                hull_weight_kg: 60.0,
                rower_count: 4,
                min_cox_weight_kg: 55.0,
            },
        }
    }

    /// Canonical label as shown in race programmes ("W8+", "M4+", ...).
    pub fn label(self) -> &'static str {
        match self {
            BoatClass::W8 => "W8+",
            BoatClass::M8 => "M8+",
            BoatClass::W4 => "W4+",
            BoatClass::M4 => "M4+",
        }
    }
}

impl fmt::Display for BoatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BoatClass {
    type Err = DeadweightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "W8+" => Ok(BoatClass::W8),
            "M8+" => Ok(BoatClass::M8),
            "W4+" => Ok(BoatClass::W4),
            "M4+" => Ok(BoatClass::M4),
            other => Err(DeadweightError::UnknownBoatClass(other.to_string())),
        }
    }
}

/// Current crew parameters. Treated as an immutable value: the UI builds a
/// fresh config on every input change rather than mutating fields in place.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CrewConfig {
    pub cox_weight_kg: f64,
    pub crew_average_weight_kg: f64,
    pub boat_class: BoatClass,
    pub race_duration_secs: f64,
}

impl Default for CrewConfig {
    fn default() -> Self {
        Self {
            cox_weight_kg: defaults::COX_WEIGHT_KG,
            crew_average_weight_kg: defaults::CREW_AVERAGE_WEIGHT_KG,
            boat_class: BoatClass::W8,
            race_duration_secs: defaults::RACE_DURATION_SECS,
        }
    }
}

impl CrewConfig {
    pub fn with_cox_weight(self, kg: f64) -> Self {
        Self { cox_weight_kg: kg, ..self }
    }

    pub fn with_crew_average_weight(self, kg: f64) -> Self {
        Self { crew_average_weight_kg: kg, ..self }
    }

    pub fn with_boat_class(self, class: BoatClass) -> Self {
        Self { boat_class: class, ..self }
    }

    pub fn with_race_duration(self, secs: f64) -> Self {
        Self { race_duration_secs: secs, ..self }
    }
}

fn check_weight(field: &'static str, value: f64) -> Result<(), DeadweightError> {
    if !value.is_finite() || value < 0.0 {
        warn!("Rejecting {}: {}", field, value);
        return Err(DeadweightError::InvalidWeight { field, value });
    }
    Ok(())
}

/// Estimate the race-time penalty, in seconds, caused by a cox weighing more
/// than the class minimum.
///
/// The boat's theoretical mass is hull + rowers + a minimum-weight cox; the
/// actual mass substitutes the real cox weight. The time lost over the race
/// is proportional to the excess mass:
///
/// `duration * (actual - theoretical) / theoretical / 6.0`
///
/// The result is negative when the cox is under the minimum (the crew would
/// notionally gain time, ballast rules aside).
///
/// # Errors
/// Negative or non-finite weights and durations are rejected rather than
/// silently producing nonsense.
pub fn penalty_seconds(
    cox_weight_kg: f64,
    crew_average_weight_kg: f64,
    class: BoatClass,
    race_duration_secs: f64,
) -> Result<f64, DeadweightError> {
    check_weight("cox weight", cox_weight_kg)?;
    check_weight("crew average weight", crew_average_weight_kg)?;
    if !race_duration_secs.is_finite() || race_duration_secs < 0.0 {
        warn!("Rejecting race duration: {}", race_duration_secs);
        return Err(DeadweightError::InvalidDuration(race_duration_secs));
    }

    let constants = class.constants();
    let rowers_weight = constants.rower_count as f64 * crew_average_weight_kg;
    let theoretical_mass = constants.min_cox_weight_kg + constants.hull_weight_kg + rowers_weight;
    let actual_mass = cox_weight_kg + constants.hull_weight_kg + rowers_weight;

    let penalty = race_duration_secs * (actual_mass - theoretical_mass)
        / theoretical_mass
        / DEADWEIGHT_DIVISOR;

    debug!(
        "{}: cox {} kg vs minimum {} kg over {} s -> {:.3} s",
        class, cox_weight_kg, constants.min_cox_weight_kg, race_duration_secs, penalty
    );

    Ok(penalty)
}

/// Convenience form of [`penalty_seconds`] taking the whole config.
pub fn estimate_penalty_seconds(config: &CrewConfig) -> Result<f64, DeadweightError> {
    penalty_seconds(
        config.cox_weight_kg,
        config.crew_average_weight_kg,
        config.boat_class,
        config.race_duration_secs,
    )
}

/// Format a race duration as "M:SS" (seconds zero-padded, minutes not).
pub fn format_race_seconds(total_secs: u32) -> String {
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{}:{:02}", minutes, seconds)
}

/// JS-facing entry point for estimating the penalty outside the Yew shell.
///
/// Deserializes a `CrewConfig` from JavaScript and returns the penalty in
/// seconds, or the error message as a string on invalid input.
#[wasm_bindgen]
pub fn estimate_penalty(config_js: JsValue) -> JsValue {
    let config: CrewConfig = match serde_wasm_bindgen::from_value(config_js) {
        Ok(c) => c,
        Err(e) => {
            return serde_wasm_bindgen::to_value(&format!("Failed to deserialize config: {}", e))
                .unwrap_or(JsValue::NULL);
        }
    };

    match estimate_penalty_seconds(&config) {
        Ok(penalty) => serde_wasm_bindgen::to_value(&penalty).unwrap_or(JsValue::NULL),
        Err(e) => serde_wasm_bindgen::to_value(&format!("Estimation failed: {}", e))
            .unwrap_or(JsValue::NULL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn penalty_is_zero_at_class_minimum() {
        for class in BoatClass::ALL {
            let min = class.constants().min_cox_weight_kg;
            let penalty = penalty_seconds(min, 85.0, class, 360.0).unwrap();
            assert_eq!(penalty, 0.0, "{} should cost nothing at the minimum", class);
        }
    }

    #[test]
    fn womens_eight_worked_example() {
        // theoretical = 50 + 100 + 8*85 = 830, actual = 835
        // 360 * 5 / 830 / 6 ≈ 0.3614
        let penalty = penalty_seconds(55.0, 85.0, BoatClass::W8, 360.0).unwrap();
        assert!((penalty - 0.3614).abs() < 1e-4, "got {}", penalty);
    }

    #[test]
    fn mens_four_at_minimum_is_exactly_zero() {
        let penalty = penalty_seconds(55.0, 85.0, BoatClass::M4, 360.0).unwrap();
        assert_eq!(penalty, 0.0);
    }

    #[test]
    fn penalty_is_strictly_increasing_in_cox_weight() {
        let mut previous = f64::NEG_INFINITY;
        for cox in 50..=140 {
            let penalty = penalty_seconds(cox as f64, 85.0, BoatClass::M8, 360.0).unwrap();
            assert!(penalty > previous, "not increasing at {} kg", cox);
            previous = penalty;
        }
    }

    #[test]
    fn penalty_scales_linearly_with_duration() {
        let single = penalty_seconds(60.0, 80.0, BoatClass::W4, 300.0).unwrap();
        let double = penalty_seconds(60.0, 80.0, BoatClass::W4, 600.0).unwrap();
        assert!((double - 2.0 * single).abs() < 1e-12);
    }

    #[test]
    fn light_cox_yields_negative_penalty() {
        let penalty = penalty_seconds(50.0, 85.0, BoatClass::M8, 360.0).unwrap();
        assert!(penalty < 0.0);
    }

    #[test]
    fn negative_weight_is_rejected() {
        let err = penalty_seconds(-1.0, 85.0, BoatClass::W8, 360.0).unwrap_err();
        assert!(matches!(err, DeadweightError::InvalidWeight { field: "cox weight", .. }));
    }

    #[test]
    fn nan_duration_is_rejected() {
        let err = penalty_seconds(55.0, 85.0, BoatClass::W8, f64::NAN).unwrap_err();
        assert!(matches!(err, DeadweightError::InvalidDuration(_)));
    }

    #[test]
    fn class_labels_round_trip() {
        for class in BoatClass::ALL {
            assert_eq!(class.label().parse::<BoatClass>().unwrap(), class);
        }
    }

    #[test]
    fn unknown_class_label_fails_fast() {
        let err = "2x".parse::<BoatClass>().unwrap_err();
        assert_eq!(err, DeadweightError::UnknownBoatClass("2x".to_string()));
    }

    #[test]
    fn class_constants_match_the_rules() {
        assert_eq!(BoatClass::W8.constants().hull_weight_kg, 100.0);
        assert_eq!(BoatClass::M4.constants().hull_weight_kg, 60.0);
        assert_eq!(BoatClass::W4.constants().rower_count, 4);
        assert_eq!(BoatClass::M8.constants().min_cox_weight_kg, 55.0);
        assert_eq!(BoatClass::W4.constants().min_cox_weight_kg, 50.0);
    }

    #[test]
    fn race_seconds_format() {
        assert_eq!(format_race_seconds(65), "1:05");
        assert_eq!(format_race_seconds(0), "0:00");
        assert_eq!(format_race_seconds(359), "5:59");
        assert_eq!(format_race_seconds(600), "10:00");
    }

    #[test]
    fn estimation_is_pure() {
        let config = CrewConfig::default();
        let a = estimate_penalty_seconds(&config).unwrap();
        let b = estimate_penalty_seconds(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn functional_updates_leave_the_original_untouched() {
        let base = CrewConfig::default();
        let heavier = base.with_cox_weight(70.0).with_boat_class(BoatClass::M4);
        assert_eq!(base.cox_weight_kg, 55.0);
        assert_eq!(heavier.cox_weight_kg, 70.0);
        assert_eq!(heavier.boat_class, BoatClass::M4);
        assert_eq!(heavier.crew_average_weight_kg, base.crew_average_weight_kg);
    }
}
