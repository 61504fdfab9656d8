use dialoguer::{Confirm, Input, Select};

use crate::calculator::constants::{
    AGE_MAX, AGE_MIN, DEFAULT_AGE, DEFAULT_WEIGHT_LBS, WEIGHT_LBS_MAX, WEIGHT_LBS_MIN,
};
use crate::error::Result;
use crate::models::{ActivityLevel, AthleteProfile, Goal, Sex};

/// Prompt for sex.
pub fn prompt_sex() -> Result<Sex> {
    let labels: Vec<&str> = Sex::ALL.iter().map(|s| s.label()).collect();

    let selection = Select::new()
        .with_prompt("Sex")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Sex::ALL[selection])
}

/// Prompt for age, re-asking until it is inside the supported range.
pub fn prompt_age() -> Result<u8> {
    let age: u8 = Input::new()
        .with_prompt(format!("Age ({}-{})", AGE_MIN, AGE_MAX))
        .default(DEFAULT_AGE)
        .validate_with(|age: &u8| -> std::result::Result<(), String> {
            if (AGE_MIN..=AGE_MAX).contains(age) {
                Ok(())
            } else {
                Err(format!("Age must be between {} and {}", AGE_MIN, AGE_MAX))
            }
        })
        .interact_text()?;

    Ok(age)
}

/// Prompt for body weight in pounds.
pub fn prompt_weight() -> Result<f64> {
    let weight: f64 = Input::new()
        .with_prompt(format!("Weight in lbs ({}-{})", WEIGHT_LBS_MIN, WEIGHT_LBS_MAX))
        .default(DEFAULT_WEIGHT_LBS)
        .validate_with(|weight: &f64| -> std::result::Result<(), String> {
            if (WEIGHT_LBS_MIN..=WEIGHT_LBS_MAX).contains(weight) {
                Ok(())
            } else {
                Err(format!(
                    "Weight must be between {} and {} lbs",
                    WEIGHT_LBS_MIN, WEIGHT_LBS_MAX
                ))
            }
        })
        .interact_text()?;

    Ok(weight)
}

/// Prompt for the weekly workload tier.
pub fn prompt_activity_level() -> Result<ActivityLevel> {
    let labels: Vec<&str> = ActivityLevel::ALL.iter().map(|l| l.label()).collect();

    let selection = Select::new()
        .with_prompt("Select Weekly Workload")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}

/// Prompt for the primary goal.
pub fn prompt_goal() -> Result<Goal> {
    let labels: Vec<&str> = Goal::ALL.iter().map(|g| g.label()).collect();

    let selection = Select::new()
        .with_prompt("Primary Goal")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Goal::ALL[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full athlete profile from the terminal.
pub fn collect_profile() -> Result<AthleteProfile> {
    let sex = prompt_sex()?;
    let age = prompt_age()?;
    let weight = prompt_weight()?;
    let level = prompt_activity_level()?;
    let goal = prompt_goal()?;

    Ok(AthleteProfile::new(sex, age, weight, level, goal))
}
