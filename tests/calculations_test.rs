#[macro_use]
extern crate assert_float_eq;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use jxn_fuel_rs::calculator::{
    basal_metabolic_rate, compute, lbs_to_kg, round_to_tenth, GROWTH_SURPLUS_KCAL,
    WEIGHT_LBS_MAX, WEIGHT_LBS_MIN,
};
use jxn_fuel_rs::models::{ActivityLevel, AthleteProfile, Goal, MealSlot, Sex};

fn make_profile(sex: Sex, weight: f64, level: ActivityLevel, goal: Goal) -> AthleteProfile {
    AthleteProfile::new(sex, 16, weight, level, goal)
}

/// Random profiles across the supported domain, reproducible by seed.
fn sample_profiles(count: usize) -> Vec<AthleteProfile> {
    let mut rng = StdRng::seed_from_u64(123);
    (0..count)
        .map(|_| {
            AthleteProfile::new(
                Sex::ALL[rng.gen_range(0..Sex::ALL.len())],
                rng.gen_range(12..=18),
                rng.gen_range(WEIGHT_LBS_MIN..=WEIGHT_LBS_MAX),
                ActivityLevel::ALL[rng.gen_range(0..ActivityLevel::ALL.len())],
                Goal::ALL[rng.gen_range(0..Goal::ALL.len())],
            )
        })
        .collect()
}

#[test]
fn test_reference_male_heavy_maintain() {
    let result = compute(&make_profile(
        Sex::Male,
        145.0,
        ActivityLevel::Heavy,
        Goal::Maintain,
    ));

    assert_float_absolute_eq!(result.weight_kg, 65.77, 0.01);
    assert_float_absolute_eq!(result.bmr, 1821.4, 0.1);
    assert_float_absolute_eq!(result.tdee, 3460.7, 0.1);
    assert_eq!(result.daily_calories, 3460);

    assert_eq!(result.portions.protein_palms, 6);
    assert_eq!(result.portions.carb_cupfuls, 14);
    assert_eq!(result.portions.fat_thumbs, 9);

    let breakfast = result.meal(MealSlot::Breakfast).unwrap();
    assert_eq!(breakfast.palms, Some(1.5));
    assert_eq!(breakfast.cupfuls, 3.5);
    assert_eq!(breakfast.thumbs, Some(2.3));
}

#[test]
fn test_reference_female_standard_gain() {
    let result = compute(&make_profile(
        Sex::Female,
        120.0,
        ActivityLevel::Standard,
        Goal::GainSize,
    ));

    assert_float_absolute_eq!(result.weight_kg, 54.43, 0.01);
    assert_float_absolute_eq!(result.bmr, 1421.1, 0.1);
    assert_float_absolute_eq!(result.tdee, 2744.8, 0.1);
    assert_eq!(result.daily_calories, 2744);
    assert!(result.includes_growth_surplus);
    assert_eq!(result.macros.total(), result.tdee);

    assert_eq!(result.portions.protein_palms, 5);
    assert_eq!(result.portions.carb_cupfuls, 11);
    assert_eq!(result.portions.fat_thumbs, 7);
}

#[test]
fn test_bmr_positive_across_domain() {
    for sex in Sex::ALL {
        for weight in [WEIGHT_LBS_MIN, 145.0, WEIGHT_LBS_MAX] {
            assert!(basal_metabolic_rate(sex, lbs_to_kg(weight)) > 0.0);
        }
    }
}

#[test]
fn test_compute_is_deterministic() {
    for profile in sample_profiles(50) {
        assert_eq!(compute(&profile), compute(&profile.clone()));
    }
}

#[test]
fn test_macro_split_sums_to_tdee_exactly() {
    for profile in sample_profiles(500) {
        let result = compute(&profile);
        assert_eq!(result.macros.total(), result.tdee, "profile {:?}", profile);
        assert!(result.daily_calories > 0);
        assert_eq!(result.daily_calories, result.tdee.floor() as u32);
    }
}

#[test]
fn test_gain_size_adds_flat_surplus() {
    for profile in sample_profiles(100) {
        let maintain = compute(&AthleteProfile {
            goal: Goal::Maintain,
            ..profile.clone()
        });
        let gain = compute(&AthleteProfile {
            goal: Goal::GainSize,
            ..profile
        });
        assert_eq!(gain.tdee, maintain.tdee + GROWTH_SURPLUS_KCAL);
        assert_float_absolute_eq!(gain.tdee - maintain.tdee, GROWTH_SURPLUS_KCAL, 1e-9);
    }
}

#[test]
fn test_meal_plan_is_quarter_of_portions() {
    for profile in sample_profiles(200) {
        let result = compute(&profile);
        let palms = round_to_tenth(result.portions.protein_palms as f64 / 4.0);
        let cupfuls = round_to_tenth(result.portions.carb_cupfuls as f64 / 4.0);
        let thumbs = round_to_tenth(result.portions.fat_thumbs as f64 / 4.0);

        let slots: Vec<MealSlot> = result.meal_plan.iter().map(|m| m.slot).collect();
        assert_eq!(slots, MealSlot::ALL.to_vec());

        for meal in &result.meal_plan {
            assert_eq!(meal.cupfuls, cupfuls);
            if meal.slot == MealSlot::PrePracticeSnack {
                assert_eq!(meal.palms, None);
                assert_eq!(meal.thumbs, None);
            } else {
                assert_eq!(meal.palms, Some(palms));
                assert_eq!(meal.thumbs, Some(thumbs));
            }
        }
    }
}

#[test]
fn test_heavier_tier_never_lowers_calories() {
    for profile in sample_profiles(100) {
        let calories: Vec<u32> = ActivityLevel::ALL
            .iter()
            .map(|&level| {
                compute(&AthleteProfile {
                    activity_level: level,
                    ..profile.clone()
                })
                .daily_calories
            })
            .collect();
        assert!(calories.windows(2).all(|w| w[0] < w[1]), "{:?}", calories);
    }
}
