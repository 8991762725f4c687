// src/args.rs
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, ValueEnum, ValueHint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "draw_numbers",
    version,
    about = "Draws batches of distinct random integers with exclusions and a history log"
)]
pub struct Args {
    #[command(flatten)]
    pub draw: DrawOptions,

    #[command(flatten)]
    pub exclusion: ExclusionOptions,

    #[command(flatten)]
    pub storage: StorageOptions,

    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(ClapArgs, Debug)]
pub struct DrawOptions {
    /// Lower bound of the range (inclusive)
    #[arg(long, allow_negative_numbers = true, help_heading = "Draw")]
    pub min: Option<i64>,

    /// Upper bound of the range (inclusive)
    #[arg(long, allow_negative_numbers = true, help_heading = "Draw")]
    pub max: Option<i64>,

    /// How many distinct numbers to draw
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..), help_heading = "Draw")]
    pub count: Option<u32>,

    /// Seed for a reproducible draw
    #[arg(long, help_heading = "Draw")]
    pub seed: Option<u64>,
}

#[derive(ClapArgs, Debug)]
pub struct ExclusionOptions {
    /// Comma-separated numbers to exclude (enables exclusion)
    #[arg(
        long,
        value_name = "LIST",
        allow_hyphen_values = true,
        conflicts_with = "no_exclusion",
        help_heading = "Exclusion"
    )]
    pub exclude: Option<String>,

    /// Ignore any persisted exclusion list for this run
    #[arg(long, help_heading = "Exclusion")]
    pub no_exclusion: bool,
}

#[derive(ClapArgs, Debug)]
pub struct StorageOptions {
    /// Settings file
    #[arg(
        long,
        value_hint = ValueHint::FilePath,
        default_value = "draw_numbers.toml",
        help_heading = "Storage"
    )]
    pub config: PathBuf,

    /// Write the effective settings back to the settings file
    #[arg(long, help_heading = "Storage")]
    pub save: bool,

    /// History log file
    #[arg(
        long,
        value_hint = ValueHint::FilePath,
        default_value = "history.txt",
        help_heading = "Storage"
    )]
    pub history: PathBuf,

    /// Skip the history append for this run
    #[arg(long, help_heading = "Storage")]
    pub no_history: bool,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// Output format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: OutputFormat,

    /// Show the effective settings without drawing
    #[arg(long, help_heading = "Output")]
    pub show_config: bool,
}
