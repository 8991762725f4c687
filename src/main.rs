use std::process::ExitCode;

use clap::Parser;
use draw_numbers::args::Args;
use draw_numbers::config::RunConfig;
use draw_numbers::presentation;
use draw_numbers_core::{RandomSource, SeededSource, ThreadRngSource};

fn main() -> ExitCode {
    let args = Args::parse();

    let run = match RunConfig::resolve(args) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if run.show_config {
        presentation::print_settings(&run.settings, run.format);
        return ExitCode::SUCCESS;
    }

    let mut source: Box<dyn RandomSource> = match run.seed {
        Some(seed) => Box::new(SeededSource::new(seed)),
        None => Box::new(ThreadRngSource::new()),
    };

    let output = match draw_numbers_core::draw_with(source.as_mut(), &run.settings) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Draw Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    presentation::print_draw(&run.settings, &output.values, run.format);

    // The draw already succeeded; a failing history append must not turn
    // the run into a failure.
    if run.write_history {
        let record = draw_numbers_core::record_now(&run.settings, output.values.clone());
        if let Err(e) = draw_numbers_core::append_history(&run.history_path, &record) {
            eprintln!("Warning: history was not recorded: {e}");
        }
    }

    if run.save_settings {
        if let Err(e) = draw_numbers_core::save_settings(&run.config_path, &run.settings) {
            eprintln!("Warning: settings were not saved: {e}");
        }
    }

    ExitCode::SUCCESS
}
