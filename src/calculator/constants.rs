use crate::models::ActivityLevel;

/// Pounds per kilogram.
pub const LBS_PER_KG: f64 = 2.20462;

// ─────────────────────────────────────────────────────────────────────────────
// Schofield BMR (teen variant): bmr = slope * kg + intercept
// ─────────────────────────────────────────────────────────────────────────────

pub const MALE_BMR_SLOPE: f64 = 17.686;
pub const MALE_BMR_INTERCEPT: f64 = 658.2;

pub const FEMALE_BMR_SLOPE: f64 = 13.384;
pub const FEMALE_BMR_INTERCEPT: f64 = 692.6;

// ─────────────────────────────────────────────────────────────────────────────
// Activity multipliers ("Load" framing)
// ─────────────────────────────────────────────────────────────────────────────

pub const STANDARD_MULT: f64 = 1.65;
pub const HEAVY_MULT: f64 = 1.9;
pub const PEAK_MULT: f64 = 2.1;

pub const STANDARD_NOTE: &str =
    "Standard Load. Good for practice days or skill sports (Volleyball/Baseball).";
pub const HEAVY_NOTE: &str =
    "High Load. Use this for Hockey season, heavy lifting blocks, or distance running.";
pub const PEAK_NOTE: &str =
    "Peak Load. ONLY use this for 3-game tournament weekends or double-day camps.";

/// Flat surplus added for the gain-size goal (kcal, not a percentage).
pub const GROWTH_SURPLUS_KCAL: f64 = 400.0;

// ─────────────────────────────────────────────────────────────────────────────
// Macro split and hand-portion conversion
// ─────────────────────────────────────────────────────────────────────────────

pub const PROTEIN_SHARE: f64 = 0.25;
pub const CARB_SHARE: f64 = 0.50;
pub const FAT_SHARE: f64 = 0.25;

/// Approximate calories in one palm of protein.
pub const KCAL_PER_PALM: f64 = 150.0;

/// Approximate calories in one cupped hand of carbs.
pub const KCAL_PER_CUPFUL: f64 = 120.0;

/// Approximate calories in one thumb of fat.
pub const KCAL_PER_THUMB: f64 = 100.0;

/// Daily portions are spread over this many meals.
pub const MEALS_PER_DAY: f64 = 4.0;

// ─────────────────────────────────────────────────────────────────────────────
// Input domain, enforced by the interface layer
// ─────────────────────────────────────────────────────────────────────────────

pub const AGE_MIN: u8 = 12;
pub const AGE_MAX: u8 = 18;
pub const DEFAULT_AGE: u8 = 16;

pub const WEIGHT_LBS_MIN: f64 = 70.0;
pub const WEIGHT_LBS_MAX: f64 = 350.0;
pub const DEFAULT_WEIGHT_LBS: f64 = 145.0;

/// Upper bound on rows in one weight sweep.
pub const MAX_SWEEP_ROWS: usize = 10_000;

/// Multiplier and rationale for an activity tier.
pub fn activity_factor(level: ActivityLevel) -> (f64, &'static str) {
    match level {
        ActivityLevel::Standard => (STANDARD_MULT, STANDARD_NOTE),
        ActivityLevel::Heavy => (HEAVY_MULT, HEAVY_NOTE),
        ActivityLevel::Peak => (PEAK_MULT, PEAK_NOTE),
    }
}
