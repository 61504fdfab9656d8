use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::calculator::constants::{AGE_MAX, AGE_MIN, WEIGHT_LBS_MAX, WEIGHT_LBS_MIN};
use crate::error::{FuelError, Result};

/// Minimum Jaro-Winkler score before a label is offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

/// Weekly workload tier ("Load" framing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Level 1: 3-4 sessions a week, skill sports.
    Standard,
    /// Level 2: 5-6 sessions a week, contact sports or running.
    Heavy,
    /// Level 3: tournament weekends and two-a-days.
    Peak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Performance / maintenance.
    Maintain,
    /// Gain size during a growth spurt.
    GainSize,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 3] =
        [ActivityLevel::Standard, ActivityLevel::Heavy, ActivityLevel::Peak];

    /// Display label used by prompts and reports.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Standard => "LEVEL 1: Standard (3-4x/week | Volleyball/Skill)",
            ActivityLevel::Heavy => "LEVEL 2: Heavy (5-6x/week | Hockey/Contact/Running)",
            ActivityLevel::Peak => "LEVEL 3: Peak (Tournament Weekend | Two-a-Days)",
        }
    }
}

impl Goal {
    pub const ALL: [Goal; 2] = [Goal::Maintain, Goal::GainSize];

    pub fn label(&self) -> &'static str {
        match self {
            Goal::Maintain => "Performance/Maintenance",
            Goal::GainSize => "Gain Size/Growth Spurt",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolve `input` against a table of accepted aliases.
///
/// Matching is exact after lowercasing and trimming. On a miss, the closest
/// alias by Jaro-Winkler similarity is returned as a suggestion.
fn parse_label<T: Copy>(kind: &'static str, input: &str, aliases: &[(&str, T)]) -> Result<T> {
    let needle = input.trim().to_lowercase();

    if let Some((_, value)) = aliases.iter().find(|(alias, _)| *alias == needle) {
        return Ok(*value);
    }

    let suggestion = aliases
        .iter()
        .map(|(alias, _)| (*alias, jaro_winkler(alias, &needle)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(alias, _)| alias.to_string());

    Err(FuelError::UnknownLabel {
        kind,
        input: input.to_string(),
        suggestion,
    })
}

impl FromStr for Sex {
    type Err = FuelError;

    fn from_str(s: &str) -> Result<Self> {
        parse_label(
            "sex",
            s,
            &[
                ("male", Sex::Male),
                ("m", Sex::Male),
                ("female", Sex::Female),
                ("f", Sex::Female),
            ],
        )
    }
}

impl FromStr for ActivityLevel {
    type Err = FuelError;

    fn from_str(s: &str) -> Result<Self> {
        parse_label(
            "activity level",
            s,
            &[
                ("standard", ActivityLevel::Standard),
                ("level1", ActivityLevel::Standard),
                ("1", ActivityLevel::Standard),
                ("heavy", ActivityLevel::Heavy),
                ("level2", ActivityLevel::Heavy),
                ("2", ActivityLevel::Heavy),
                ("peak", ActivityLevel::Peak),
                ("level3", ActivityLevel::Peak),
                ("3", ActivityLevel::Peak),
            ],
        )
    }
}

impl FromStr for Goal {
    type Err = FuelError;

    fn from_str(s: &str) -> Result<Self> {
        parse_label(
            "goal",
            s,
            &[
                ("maintain", Goal::Maintain),
                ("maintenance", Goal::Maintain),
                ("performance", Goal::Maintain),
                ("gain", Goal::GainSize),
                ("gain-size", Goal::GainSize),
                ("growth", Goal::GainSize),
            ],
        )
    }
}

/// Biometric and training inputs for a single calculation.
///
/// Age is collected and range-checked but does not enter the formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteProfile {
    pub sex: Sex,
    pub age_years: u8,
    pub weight_lbs: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl AthleteProfile {
    pub fn new(
        sex: Sex,
        age_years: u8,
        weight_lbs: f64,
        activity_level: ActivityLevel,
        goal: Goal,
    ) -> Self {
        Self {
            sex,
            age_years,
            weight_lbs,
            activity_level,
            goal,
        }
    }

    /// Check age and weight against the supported domain.
    ///
    /// `compute` assumes this has passed; it never validates on its own.
    pub fn validate(&self) -> Result<()> {
        if !(AGE_MIN..=AGE_MAX).contains(&self.age_years) {
            return Err(FuelError::OutOfRange {
                field: "age",
                value: self.age_years as f64,
                min: AGE_MIN as f64,
                max: AGE_MAX as f64,
            });
        }

        // NaN fails `contains`, so it is rejected here as well.
        if !(WEIGHT_LBS_MIN..=WEIGHT_LBS_MAX).contains(&self.weight_lbs) {
            return Err(FuelError::OutOfRange {
                field: "weight",
                value: self.weight_lbs,
                min: WEIGHT_LBS_MIN,
                max: WEIGHT_LBS_MAX,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> AthleteProfile {
        AthleteProfile::new(Sex::Male, 16, 145.0, ActivityLevel::Heavy, Goal::Maintain)
    }

    #[test]
    fn test_validate_accepts_bounds() {
        let mut profile = sample_profile();
        for (age, weight) in [(12, 70.0), (18, 350.0)] {
            profile.age_years = age;
            profile.weight_lbs = weight;
            assert!(profile.validate().is_ok());
        }
    }

    #[test]
    fn test_validate_rejects_age() {
        let mut profile = sample_profile();
        profile.age_years = 11;
        assert!(matches!(
            profile.validate(),
            Err(FuelError::OutOfRange { field: "age", .. })
        ));

        profile.age_years = 19;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_weight() {
        for weight in [69.9, 350.1, -5.0, f64::NAN] {
            let mut profile = sample_profile();
            profile.weight_lbs = weight;
            assert!(matches!(
                profile.validate(),
                Err(FuelError::OutOfRange { field: "weight", .. })
            ));
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("M".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!(" Female ".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!("level2".parse::<ActivityLevel>().unwrap(), ActivityLevel::Heavy);
        assert_eq!("3".parse::<ActivityLevel>().unwrap(), ActivityLevel::Peak);
        assert_eq!("growth".parse::<Goal>().unwrap(), Goal::GainSize);
        assert_eq!("Performance".parse::<Goal>().unwrap(), Goal::Maintain);
    }

    #[test]
    fn test_parse_suggests_close_label() {
        let err = "hevy".parse::<ActivityLevel>().unwrap_err();
        match err {
            FuelError::UnknownLabel { suggestion, .. } => {
                assert_eq!(suggestion.as_deref(), Some("heavy"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err_message("hevy").contains("did you mean 'heavy'"));
    }

    #[test]
    fn test_parse_no_suggestion_for_garbage() {
        let err = "zzzzzzzz".parse::<Goal>().unwrap_err();
        assert!(matches!(err, FuelError::UnknownLabel { suggestion: None, .. }));
    }

    fn err_message(input: &str) -> String {
        input.parse::<ActivityLevel>().unwrap_err().to_string()
    }

    #[test]
    fn test_profile_json_uses_snake_case() {
        let profile = AthleteProfile::new(Sex::Female, 15, 120.0, ActivityLevel::Standard, Goal::GainSize);
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"gain_size\""));
        assert!(json.contains("\"female\""));

        let back: AthleteProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
