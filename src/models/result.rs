use std::fmt;

use serde::Serialize;

/// Calories assigned to each macronutrient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroCalories {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroCalories {
    /// Sum of the three shares.
    ///
    /// The two quarter shares are added first; with a 25/50/25 split that
    /// keeps every partial sum exact, so the total equals the source energy.
    pub fn total(&self) -> f64 {
        (self.protein + self.fat) + self.carbs
    }
}

/// Whole hand-portion counts for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HandPortions {
    pub protein_palms: u32,
    pub carb_cupfuls: u32,
    pub fat_thumbs: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    PrePracticeSnack,
    Dinner,
}

impl MealSlot {
    /// Slots in eating order.
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::PrePracticeSnack,
        MealSlot::Dinner,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::PrePracticeSnack => "Pre-Practice Snack",
            MealSlot::Dinner => "Dinner",
        }
    }

    /// The snack is carbs only.
    pub fn is_carb_only(&self) -> bool {
        matches!(self, MealSlot::PrePracticeSnack)
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Portions for one meal, rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Meal {
    pub slot: MealSlot,
    /// `None` for carb-only meals.
    pub palms: Option<f64>,
    pub cupfuls: f64,
    /// `None` for carb-only meals.
    pub thumbs: Option<f64>,
}

/// Everything derived from one profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub weight_kg: f64,
    pub bmr: f64,
    pub activity_multiplier: f64,
    /// Energy after the activity multiplier and any growth surplus.
    pub tdee: f64,
    /// `tdee` truncated to whole calories.
    pub daily_calories: u32,
    /// Why the chosen activity multiplier applies.
    pub note: String,
    pub includes_growth_surplus: bool,
    pub macros: MacroCalories,
    pub portions: HandPortions,
    pub meal_plan: Vec<Meal>,
}

impl CalculationResult {
    pub fn meal(&self, slot: MealSlot) -> Option<&Meal> {
        self.meal_plan.iter().find(|m| m.slot == slot)
    }
}
