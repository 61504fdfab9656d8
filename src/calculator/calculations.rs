use crate::calculator::constants::*;
use crate::models::{
    AthleteProfile, CalculationResult, Goal, HandPortions, MacroCalories, Meal,
    MealSlot, Sex,
};

/// Convert pounds to kilograms.
#[inline]
pub fn lbs_to_kg(weight_lbs: f64) -> f64 {
    weight_lbs / LBS_PER_KG
}

/// Basal metabolic rate from the teen Schofield equation.
pub fn basal_metabolic_rate(sex: Sex, weight_kg: f64) -> f64 {
    match sex {
        Sex::Male => MALE_BMR_SLOPE * weight_kg + MALE_BMR_INTERCEPT,
        Sex::Female => FEMALE_BMR_SLOPE * weight_kg + FEMALE_BMR_INTERCEPT,
    }
}

/// Activity-scaled energy, plus the flat surplus when gaining size.
pub fn total_daily_energy(bmr: f64, multiplier: f64, goal: Goal) -> f64 {
    let tdee = bmr * multiplier;
    match goal {
        Goal::Maintain => tdee,
        Goal::GainSize => tdee + GROWTH_SURPLUS_KCAL,
    }
}

/// Split energy 25/50/25 into protein, carb, and fat calories.
pub fn split_macros(tdee: f64) -> MacroCalories {
    MacroCalories {
        protein: tdee * PROTEIN_SHARE,
        carbs: tdee * CARB_SHARE,
        fat: tdee * FAT_SHARE,
    }
}

/// Convert macro calories to whole hand portions.
///
/// Each count is rounded on its own (half away from zero), so the portions
/// do not convert back to the calorie total.
pub fn hand_portions(macros: &MacroCalories) -> HandPortions {
    HandPortions {
        protein_palms: to_count(macros.protein / KCAL_PER_PALM),
        carb_cupfuls: to_count(macros.carbs / KCAL_PER_CUPFUL),
        fat_thumbs: to_count(macros.fat / KCAL_PER_THUMB),
    }
}

fn to_count(units: f64) -> u32 {
    units.round().max(0.0) as u32
}

/// Round half away from zero to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Spread the daily portions over breakfast, lunch, snack, and dinner.
///
/// Every meal gets the same quarter share; the snack keeps the carbs only.
/// Summing the four meals may drift from the daily counts after rounding.
pub fn plan_meals(portions: &HandPortions) -> Vec<Meal> {
    let per_meal = |count: u32| round_to_tenth(count as f64 / MEALS_PER_DAY);

    let palms = per_meal(portions.protein_palms);
    let cupfuls = per_meal(portions.carb_cupfuls);
    let thumbs = per_meal(portions.fat_thumbs);

    MealSlot::ALL
        .into_iter()
        .map(|slot| {
            if slot.is_carb_only() {
                Meal {
                    slot,
                    palms: None,
                    cupfuls,
                    thumbs: None,
                }
            } else {
                Meal {
                    slot,
                    palms: Some(palms),
                    cupfuls,
                    thumbs: Some(thumbs),
                }
            }
        })
        .collect()
}

/// Run the full pipeline for one profile.
///
/// Total over the validated domain: the caller is responsible for calling
/// [`AthleteProfile::validate`] first. Age is not used.
pub fn compute(profile: &AthleteProfile) -> CalculationResult {
    let weight_kg = lbs_to_kg(profile.weight_lbs);
    let bmr = basal_metabolic_rate(profile.sex, weight_kg);
    let (multiplier, note) = activity_factor(profile.activity_level);
    let tdee = total_daily_energy(bmr, multiplier, profile.goal);

    let macros = split_macros(tdee);
    let portions = hand_portions(&macros);
    let meal_plan = plan_meals(&portions);

    let result = CalculationResult {
        weight_kg,
        bmr,
        activity_multiplier: multiplier,
        tdee,
        daily_calories: tdee.floor() as u32,
        note: note.to_string(),
        includes_growth_surplus: profile.goal == Goal::GainSize,
        macros,
        portions,
        meal_plan,
    };

    tracing::debug!(
        sex = ?profile.sex,
        weight_lbs = profile.weight_lbs,
        level = ?profile.activity_level,
        goal = ?profile.goal,
        bmr = result.bmr,
        daily_calories = result.daily_calories,
        "computed fuel plan"
    );

    result
}
