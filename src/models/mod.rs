pub mod profile;
pub mod result;

pub use profile::{ActivityLevel, AthleteProfile, Goal, Sex};
pub use result::{CalculationResult, HandPortions, MacroCalories, Meal, MealSlot};
