//! Application-level configuration constants.

// Slider bounds (kg / seconds), matching British club crews in practice
pub const MIN_COX_WEIGHT_KG: f64 = 50.0;
pub const MAX_COX_WEIGHT_KG: f64 = 140.0;
pub const MIN_CREW_WEIGHT_KG: f64 = 40.0;
pub const MAX_CREW_WEIGHT_KG: f64 = 140.0;
pub const MIN_RACE_DURATION_SECS: u32 = 0;
pub const MAX_RACE_DURATION_SECS: u32 = 1000;

// Decimal places shown in the penalty readout
pub const PENALTY_DECIMALS: usize = 1;
