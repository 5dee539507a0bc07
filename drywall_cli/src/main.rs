//! # Drywall Estimator CLI
//!
//! Terminal front end for drywall_core. Prompts for room dimensions and
//! options, validates them, and prints the material list followed by the
//! estimate as JSON.
//!
//! Defaults come from a JSON settings file given as the first argument or
//! through `DRYWALL_SETTINGS`. Set `RUST_LOG=debug` to trace the pipeline.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use drywall_core::materials::StudSpacing;
use drywall_core::settings::SETTINGS_ENV_VAR;
use drywall_core::validation::{
    format_error_message, is_valid_stud_spacing, is_valid_waste_factor,
};
use drywall_core::{
    calculate_all_materials, sanitize_input, validate_room_dimensions, CalcError,
    CalculationOptions, EstimatorSettings, MaterialEstimate,
};

/// Initialize logging with RUST_LOG environment variable support
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn settings_path() -> Option<PathBuf> {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var(SETTINGS_ENV_VAR).ok())
        .map(PathBuf::from)
}

fn load_settings() -> EstimatorSettings {
    let Some(path) = settings_path() else {
        return EstimatorSettings::default();
    };

    EstimatorSettings::load(&path).unwrap_or_else(|e| {
        tracing::warn!(code = e.error_code(), "Ignoring settings file: {}", e);
        EstimatorSettings::default()
    })
}

fn prompt(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn prompt_measurement(label: &str, default: &str) -> String {
    let raw = prompt(&format!("{} [{}]: ", label, default))
        .unwrap_or_else(|| default.to_string());
    sanitize_input(&raw)
}

fn prompt_bool(label: &str, default: bool) -> bool {
    let hint = if default { "Y/n" } else { "y/N" };
    match prompt(&format!("{} ({}): ", label, hint)) {
        Some(answer) => matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"),
        None => default,
    }
}

fn prompt_f64(label: &str, default: f64, is_valid: fn(f64) -> bool) -> f64 {
    match prompt(&format!("{} [{}]: ", label, default)).map(|s| s.parse::<f64>()) {
        Some(Ok(value)) if is_valid(value) => value,
        Some(_) => {
            println!("  Not accepted, using {}", default);
            default
        }
        None => default,
    }
}

fn read_options(settings: &EstimatorSettings) -> CalculationOptions {
    let mut options = settings.to_options();

    options.include_ceiling = prompt_bool("Include ceiling?", options.include_ceiling);
    options.waste_factor = prompt_f64(
        "Waste factor (0.05, 0.10, 0.15, 0.20)",
        options.waste_factor,
        is_valid_waste_factor,
    );
    options.include_studs = prompt_bool("Include metal studs?", options.include_studs);
    if options.include_studs {
        let inches = prompt_f64(
            "Stud spacing in inches OC (12, 16, 19.2, 24)",
            options.stud_spacing.inches(),
            is_valid_stud_spacing,
        );
        options.stud_spacing = StudSpacing::from_inches(inches).unwrap_or(options.stud_spacing);
    }

    options
}

fn print_estimate(estimate: &MaterialEstimate) {
    let sq = &estimate.square_footage;
    let dims = &estimate.dimensions;

    println!("═══════════════════════════════════════");
    println!("  DRYWALL MATERIAL ESTIMATE");
    println!("═══════════════════════════════════════");
    println!();
    println!("Room:");
    println!(
        "  {:.2}' x {:.2}' x {:.2}' high",
        dims.length.0, dims.width.0, dims.height.0
    );
    println!("  Walls:    {:.2} sq ft", sq.wall_area);
    if sq.ceiling_area > 0.0 {
        println!("  Ceiling:  {:.2} sq ft", sq.ceiling_area);
    }
    println!("  Total:    {:.2} sq ft", sq.total_area);
    println!();
    println!("Drywall ({}):", estimate.drywall_thickness);
    println!(
        "  Sheets:   {} ({} sq ft each)",
        estimate.drywall.sheets_needed, estimate.drywall.sheet_area
    );
    println!("  Coverage: {} sq ft", estimate.drywall.total_coverage);
    println!(
        "  Waste:    {} sq ft ({}% allowance)",
        estimate.drywall.waste_amount, estimate.drywall.waste_percentage
    );
    println!();
    println!("Screws:");
    println!(
        "  {} screws, {} lb",
        estimate.screws.total_screws, estimate.screws.pounds_needed
    );
    println!();
    println!("Joint compound:");
    println!("  {} gal - {}", estimate.mud.total_gallons, estimate.mud.container_breakdown);

    if let Some(studs) = &estimate.studs {
        println!();
        println!("Metal framing:");
        println!("  Studs:    {} x {}'", studs.vertical_studs, studs.stud_length);
        println!("  Track:    {}'", studs.track_length);
        println!("  Spacing:  {}\" OC", studs.spacing);
    }
    println!("═══════════════════════════════════════");
}

fn report_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn main() {
    init_logging();

    println!("Drywall Estimator - Material Takeoff");
    println!("====================================");
    println!("Enter measurements like 12'6\", 12.5, 150\" or 150.");
    println!("Bare numbers over 20 are read as inches.");
    println!();

    let settings = load_settings();

    let length = prompt_measurement("Room length", &settings.default_length);
    let width = prompt_measurement("Room width", &settings.default_width);
    let height = prompt_measurement("Wall height", &settings.default_height);

    let validation = validate_room_dimensions(&length, &width, &height);
    if !validation.valid {
        eprintln!();
        eprintln!("{}", format_error_message(&validation.errors));
        std::process::exit(2);
    }

    let options = read_options(&settings);
    tracing::debug!(?options, "calculation options");
    println!();

    match calculate_all_materials(&length, &width, &height, &options) {
        Ok(estimate) => {
            print_estimate(&estimate);

            println!();
            println!("JSON Output (for API use):");
            if let Ok(json) = serde_json::to_string_pretty(&estimate) {
                println!("{}", json);
            }
        }
        Err(e) => {
            report_error(&e);
            std::process::exit(1);
        }
    }
}
