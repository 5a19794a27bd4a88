#![allow(clippy::cast_possible_truncation)]

mod options;

use anyhow::{Context, Error as AnyError};
use clap::Parser;
use geoprofile::{kml_path, InclineParams, Profile, METERS_TO_FEET};
use options::{Cli, Command as CliCmd};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use std::io::Write;

fn main() -> Result<(), AnyError> {
    let cli = Cli::parse();

    env_logger::init();

    let kml_text = std::fs::read_to_string(&cli.kml)
        .with_context(|| format!("reading {}", cli.kml.display()))?;
    let path = kml_path(&kml_text)?;

    let profile = match &cli.samples {
        Some(samples_file) => {
            let raw = std::fs::read_to_string(samples_file)
                .with_context(|| format!("reading {}", samples_file.display()))?;
            let samples: Vec<f64> = serde_json::from_str(&raw)?;
            let unit = if cli.meters { METERS_TO_FEET } else { 1.0 };
            Profile::from_samples(&path, &samples, unit)?
        }
        None => {
            let mut rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            Profile::simulated(&path, &mut rng)?
        }
    };

    match cli.cmd {
        CliCmd::Csv => print_csv(&profile)?,
        CliCmd::Json => print_json(&profile)?,
        CliCmd::Plot => plot_ascii(&profile),
        CliCmd::Grade {
            target,
            overall_tolerance,
            local_tolerance,
        } => print_grade(&profile, target, overall_tolerance, local_tolerance),
    };

    Ok(())
}

fn print_csv(profile: &Profile) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "Distance,Elevation")?;
    for point in &profile.points {
        writeln!(stdout, "{},{}", point.distance, point.elevation)?;
    }
    Ok(())
}

fn print_json(profile: &Profile) -> Result<(), AnyError> {
    #[derive(Serialize)]
    struct JsonEntry {
        distance: f64,
        elevation: f64,
    }

    let reshaped: Vec<JsonEntry> = profile
        .points
        .iter()
        .map(|point| JsonEntry {
            distance: point.distance,
            elevation: point.elevation,
        })
        .collect();
    let json = serde_json::to_string(&reshaped)?;
    println!("{json}");
    Ok(())
}

fn plot_ascii(profile: &Profile) {
    use textplots::{Chart, Plot, Shape};

    let plot_data: Vec<(f32, f32)> = profile
        .points
        .iter()
        .map(|point| (point.distance as f32, point.elevation as f32))
        .collect();
    Chart::new(300, 150, 0.0, profile.distance as f32)
        .lineplot(&Shape::Lines(&plot_data))
        .display();
}

fn print_grade(profile: &Profile, target: f64, overall_tolerance: f64, local_tolerance: f64) {
    let summary = profile.grade_summary();
    let params = InclineParams {
        target_grade: target,
        overall_tolerance,
        local_tolerance,
    };
    let evaluation = params.evaluate(profile);

    println!("total distance: {:.2} mi", profile.distance);
    println!("total climb:    {:.0} ft", summary.total_climb);
    println!("total descent:  {:.0} ft", summary.total_descent);
    println!("overall grade:  {:.2} %", summary.overall_grade);
    println!("steepest grade: {:.2} %", summary.steepest_segment_grade);
    println!("out of band:    {:.2} mi", evaluation.out_of_band_distance);
    println!(
        "verdict:        {}",
        if evaluation.accepted {
            "within tolerance"
        } else {
            "out of tolerance"
        }
    );
}
