// src/presentation.rs
use draw_numbers_core::{DrawSettings, format};
use serde::Serialize;

use crate::args::OutputFormat;

#[derive(Serialize)]
struct DrawReport<'a> {
    settings: &'a DrawSettings,
    values: &'a [i64],
}

/// Render a finished draw to stdout.
pub fn print_draw(settings: &DrawSettings, values: &[i64], format: OutputFormat) {
    match format {
        OutputFormat::Text => print_text(settings, values),
        OutputFormat::Json => print_json(settings, Some(values)),
    }
}

/// Render the effective settings without a result set.
pub fn print_settings(settings: &DrawSettings, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            println!("{}", format::summary_line(settings));
            println!();
            println!("{}", format::NO_RESULT_PROMPT);
        }
        OutputFormat::Json => print_json(settings, None),
    }
}

fn print_text(settings: &DrawSettings, values: &[i64]) {
    println!("{}", format::summary_line(settings));
    println!();
    println!("{}", format::wrapped_values(values));
}

fn print_json(settings: &DrawSettings, values: Option<&[i64]>) {
    let report = DrawReport {
        settings,
        values: values.unwrap_or_default(),
    };
    if let Ok(json) = serde_json::to_string_pretty(&report) {
        println!("{json}");
    }
}
