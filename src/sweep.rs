use std::io::Write;
use std::path::Path;

use crate::calculator::compute;
use crate::calculator::constants::{MAX_SWEEP_ROWS, WEIGHT_LBS_MAX, WEIGHT_LBS_MIN};
use crate::error::{FuelError, Result};
use crate::models::{AthleteProfile, CalculationResult, MealSlot};

/// Weight range to tabulate, in pounds. Both ends are inclusive.
#[derive(Debug, Clone, Copy)]
pub struct WeightRange {
    pub from_lbs: f64,
    pub to_lbs: f64,
    pub step_lbs: f64,
}

impl WeightRange {
    pub fn validate(&self) -> Result<()> {
        if !(self.step_lbs > 0.0) {
            return Err(FuelError::InvalidInput(format!(
                "step must be positive (got {})",
                self.step_lbs
            )));
        }

        for (field, value) in [("from", self.from_lbs), ("to", self.to_lbs)] {
            if !(WEIGHT_LBS_MIN..=WEIGHT_LBS_MAX).contains(&value) {
                return Err(FuelError::OutOfRange {
                    field,
                    value,
                    min: WEIGHT_LBS_MIN,
                    max: WEIGHT_LBS_MAX,
                });
            }
        }

        if self.from_lbs > self.to_lbs {
            return Err(FuelError::InvalidInput(format!(
                "from ({}) must not exceed to ({})",
                self.from_lbs, self.to_lbs
            )));
        }

        // One row per step plus a possible trailing row for an uneven end.
        let rows = (self.to_lbs - self.from_lbs) / self.step_lbs + 2.0;
        if rows > MAX_SWEEP_ROWS as f64 {
            return Err(FuelError::InvalidInput(format!(
                "step {} lbs yields more than {} rows",
                self.step_lbs, MAX_SWEEP_ROWS
            )));
        }

        Ok(())
    }

    /// Weights from `from_lbs` up to `to_lbs`, stepping by `step_lbs`.
    ///
    /// Weights are computed by index to avoid accumulating float error, and
    /// `to_lbs` is appended when the last step falls short of it.
    pub fn weights(&self) -> Vec<f64> {
        let steps = ((self.to_lbs - self.from_lbs) / self.step_lbs + 1e-9).floor() as usize;
        let mut weights: Vec<f64> = (0..=steps)
            .map(|i| self.from_lbs + i as f64 * self.step_lbs)
            .collect();

        if weights.last().is_some_and(|&w| self.to_lbs - w > 1e-9) {
            weights.push(self.to_lbs);
        }

        weights
    }
}

/// Compute one result per weight, keeping every other field of `base`.
pub fn sweep(base: &AthleteProfile, range: &WeightRange) -> Result<Vec<(f64, CalculationResult)>> {
    range.validate()?;

    let rows: Vec<(f64, CalculationResult)> = range
        .weights()
        .into_iter()
        .map(|weight_lbs| {
            let profile = AthleteProfile {
                weight_lbs,
                ..base.clone()
            };
            (weight_lbs, compute(&profile))
        })
        .collect();

    tracing::info!(rows = rows.len(), "weight sweep computed");
    Ok(rows)
}

const HEADER: [&str; 15] = [
    "weight_lbs",
    "weight_kg",
    "bmr",
    "activity_multiplier",
    "tdee",
    "daily_calories",
    "protein_kcal",
    "carb_kcal",
    "fat_kcal",
    "protein_palms",
    "carb_cupfuls",
    "fat_thumbs",
    "meal_palms",
    "meal_cupfuls",
    "meal_thumbs",
];

/// Write sweep rows as CSV to any writer.
pub fn write_sweep<W: Write>(writer: W, rows: &[(f64, CalculationResult)]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;

    for (weight_lbs, result) in rows {
        let breakfast = result.meal(MealSlot::Breakfast);
        let meal_palms = breakfast.and_then(|m| m.palms).unwrap_or(0.0);
        let meal_cupfuls = breakfast.map(|m| m.cupfuls).unwrap_or(0.0);
        let meal_thumbs = breakfast.and_then(|m| m.thumbs).unwrap_or(0.0);

        wtr.write_record([
            format!("{:.1}", weight_lbs),
            format!("{:.2}", result.weight_kg),
            format!("{:.1}", result.bmr),
            format!("{:.2}", result.activity_multiplier),
            format!("{:.1}", result.tdee),
            result.daily_calories.to_string(),
            format!("{:.1}", result.macros.protein),
            format!("{:.1}", result.macros.carbs),
            format!("{:.1}", result.macros.fat),
            result.portions.protein_palms.to_string(),
            result.portions.carb_cupfuls.to_string(),
            result.portions.fat_thumbs.to_string(),
            format!("{:.1}", meal_palms),
            format!("{:.1}", meal_cupfuls),
            format!("{:.1}", meal_thumbs),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write sweep rows to a CSV file.
pub fn write_sweep_csv(rows: &[(f64, CalculationResult)], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_sweep(file, rows)
}
