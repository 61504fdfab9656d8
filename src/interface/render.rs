use std::fmt::Write;

use crate::calculator::constants::GROWTH_SURPLUS_KCAL;
use crate::error::Result;
use crate::models::{CalculationResult, Meal};

pub const PROTEIN_FOODS: &str = "Chicken, Beef, Eggs, Greek Yogurt, Fish";
pub const CARB_FOODS: &str = "Rice, Potatoes, Oats, Pasta, Fruit, Bread";
pub const FAT_FOODS: &str = "Butter, Oils, Nuts, Avocado, Cheese";

pub const SNACK_HINT: &str = "Focus on Fruit/Granola here!";

pub const COACH_NOTE: &str = "These numbers are targets, not laws. If you are extra tired or \
                              hungry, eat more carbs. Listen to your body.";

/// Build the text report for a result.
pub fn format_report(result: &CalculationResult) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, result);
    out
}

fn write_report(out: &mut String, result: &CalculationResult) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "=== JXN Performance Fuel ===")?;
    writeln!(out)?;
    writeln!(out, "Daily Target: {} Calories", result.daily_calories)?;
    writeln!(out, "Why this amount? {}", result.note)?;
    if result.includes_growth_surplus {
        writeln!(
            out,
            "Includes +{:.0} calorie surplus for growth.",
            GROWTH_SURPLUS_KCAL
        )?;
    }

    writeln!(out)?;
    writeln!(out, "--- Hand Portions ---")?;
    writeln!(
        out,
        "{:>3} PALMS of Protein     ({})",
        result.portions.protein_palms, PROTEIN_FOODS
    )?;
    writeln!(
        out,
        "{:>3} HANDFULS of Carbs    ({})",
        result.portions.carb_cupfuls, CARB_FOODS
    )?;
    writeln!(
        out,
        "{:>3} THUMBS of Fat        ({})",
        result.portions.fat_thumbs, FAT_FOODS
    )?;

    writeln!(out)?;
    writeln!(out, "--- How to eat this in a day ---")?;
    for (i, meal) in result.meal_plan.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, format_meal(meal))?;
    }

    writeln!(out)?;
    writeln!(out, "Coach's Note: {}", COACH_NOTE)?;
    Ok(())
}

/// One meal line, e.g. `Lunch: 1.5 Palms | 3.5 Carbs | 2.3 Thumbs`.
pub fn format_meal(meal: &Meal) -> String {
    match (meal.palms, meal.thumbs) {
        (Some(palms), Some(thumbs)) => format!(
            "{}: {:.1} Palms | {:.1} Carbs | {:.1} Thumbs",
            meal.slot, palms, meal.cupfuls, thumbs
        ),
        _ => format!("{}: {:.1} Carbs ({})", meal.slot, meal.cupfuls, SNACK_HINT),
    }
}

/// Print the text report.
pub fn display_result(result: &CalculationResult) {
    print!("{}", format_report(result));
    println!();
}

/// Print the result as pretty JSON.
pub fn display_json(result: &CalculationResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}
