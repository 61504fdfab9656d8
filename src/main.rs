use std::path::{Path, PathBuf};

use clap::Parser;

use jxn_fuel_rs::calculator::compute;
use jxn_fuel_rs::cli::{Cli, Command, ProfileArgs};
use jxn_fuel_rs::error::Result;
use jxn_fuel_rs::interface::{
    collect_profile, display_json, display_result, load_profile, prompt_yes_no,
};
use jxn_fuel_rs::logging::init_logger;
use jxn_fuel_rs::models::AthleteProfile;
use jxn_fuel_rs::sweep::{sweep, write_sweep_csv, WeightRange};

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let json = cli.json;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Interactive => cmd_interactive(json),
        Command::Calc {
            profile,
            weight,
            profile_file,
        } => cmd_calc(&profile, weight, profile_file.as_deref(), json),
        Command::Sweep {
            profile,
            from,
            to,
            step,
            out,
        } => cmd_sweep(&profile, from, to, step, out),
    }
}

/// Compute and print one result.
fn report(profile: &AthleteProfile, json: bool) -> Result<()> {
    let result = compute(profile);

    if json {
        display_json(&result)
    } else {
        display_result(&result);
        Ok(())
    }
}

/// Collect profiles from prompts until the user stops.
fn cmd_interactive(json: bool) -> Result<()> {
    println!("JXN PERFORMANCE FUEL");
    println!("Calculate nutrition needs for the growing athlete.");
    println!();

    loop {
        let profile = collect_profile()?;
        tracing::debug!(?profile, "profile collected");
        report(&profile, json)?;

        if !prompt_yes_no("Calculate another?", false)? {
            break;
        }
        println!();
    }

    Ok(())
}

/// Calculate from flags or a profile file.
fn cmd_calc(
    args: &ProfileArgs,
    weight: Option<f64>,
    profile_file: Option<&Path>,
    json: bool,
) -> Result<()> {
    let profile = match profile_file {
        Some(path) => load_profile(path)?,
        None => {
            let profile = args.to_profile(weight)?;
            profile.validate()?;
            profile
        }
    };

    report(&profile, json)
}

/// Tabulate a weight range to CSV.
fn cmd_sweep(args: &ProfileArgs, from: f64, to: f64, step: f64, out: PathBuf) -> Result<()> {
    let base = args.to_profile(Some(from))?;
    base.validate()?;

    let range = WeightRange {
        from_lbs: from,
        to_lbs: to,
        step_lbs: step,
    };
    let rows = sweep(&base, &range)?;

    write_sweep_csv(&rows, &out)?;
    println!("Wrote {} rows to {:?}", rows.len(), out);

    Ok(())
}
