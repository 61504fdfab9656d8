pub mod calculator;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod sweep;

pub use calculator::compute;
pub use error::{FuelError, Result};
pub use models::{AthleteProfile, CalculationResult};
