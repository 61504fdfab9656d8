use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::calculator::constants::{DEFAULT_AGE, DEFAULT_WEIGHT_LBS};
use crate::error::{FuelError, Result};
use crate::models::{ActivityLevel, AthleteProfile, Goal, Sex};

/// JXN Fuel: daily calories, hand portions, and meals for the growing athlete.
#[derive(Parser, Debug)]
#[command(name = "jxn_fuel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Print the result as JSON instead of the text report.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Profile fields shared by `calc` and `sweep`.
#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// Sex: male | female.
    #[arg(long)]
    pub sex: Option<Sex>,

    /// Age in years (12-18).
    #[arg(long, default_value_t = DEFAULT_AGE)]
    pub age: u8,

    /// Weekly workload: standard | heavy | peak (or 1-3).
    #[arg(long)]
    pub level: Option<ActivityLevel>,

    /// Goal: maintain | gain.
    #[arg(long, default_value = "maintain")]
    pub goal: Goal,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ask for the athlete's details interactively.
    Interactive,

    /// Calculate from flags or from a JSON profile file.
    Calc {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Body weight in lbs (70-350). Defaults to 145.
        #[arg(long)]
        weight: Option<f64>,

        /// Read the whole profile from a JSON file instead of flags.
        #[arg(long = "profile", conflicts_with_all = ["sex", "age", "level", "goal", "weight"])]
        profile_file: Option<PathBuf>,
    },

    /// Tabulate results over a weight range and write them as CSV.
    Sweep {
        #[command(flatten)]
        profile: ProfileArgs,

        /// First weight in lbs.
        #[arg(long, default_value = "70")]
        from: f64,

        /// Last weight in lbs.
        #[arg(long, default_value = "350")]
        to: f64,

        /// Step between weights in lbs.
        #[arg(long, default_value = "5")]
        step: f64,

        /// Output CSV file.
        #[arg(short, long, default_value = "fuel_sweep.csv")]
        out: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}

impl ProfileArgs {
    /// Build a profile from the flags, requiring every field without a default.
    pub fn to_profile(&self, weight_lbs: Option<f64>) -> Result<AthleteProfile> {
        let sex = self
            .sex
            .ok_or_else(|| FuelError::InvalidInput("--sex is required".to_string()))?;
        let level = self
            .level
            .ok_or_else(|| FuelError::InvalidInput("--level is required".to_string()))?;
        let weight_lbs = weight_lbs.unwrap_or(DEFAULT_WEIGHT_LBS);

        Ok(AthleteProfile::new(sex, self.age, weight_lbs, level, self.goal))
    }
}
