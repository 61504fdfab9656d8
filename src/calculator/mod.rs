pub mod calculations;
pub mod constants;

pub use calculations::{
    basal_metabolic_rate, compute, hand_portions, lbs_to_kg, plan_meals,
    round_to_tenth, split_macros, total_daily_energy,
};
pub use constants::*;
