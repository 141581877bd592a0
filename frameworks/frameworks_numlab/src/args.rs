//! Command-Line Argument Parsing Module
//!
//! Uses clap for type-safe argument parsing. The parsed arguments are turned
//! into a validated [`LabConfig`](crate::config::LabConfig) before anything runs.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Numerical laboratory command-line arguments
#[derive(Parser, Debug)]
#[command(name = "numlab")]
#[command(about = "Integer square roots and series approximations in arbitrary precision")]
pub struct LabArgs {
    /// Log filter (e.g. "debug", "usecases_sqrt=trace"); overrides RUST_LOG
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: LabCommand,
}

#[derive(Subcommand, Debug)]
pub enum LabCommand {
    /// Compare the library and Babylonian integer square roots
    Sqrt(SqrtArgs),
    /// Run the standard series expansion suite
    Series(SeriesArgs),
}

/// Bit width of the unsigned integer type
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    #[value(name = "1024")]
    Bits1024,
    #[value(name = "2048")]
    Bits2048,
}

impl Width {
    pub fn bits(self) -> u64 {
        match self {
            Width::Bits1024 => 1024,
            Width::Bits2048 => 2048,
        }
    }
}

#[derive(Args, Debug)]
pub struct SqrtArgs {
    /// Number to take the root of (decimal or 0x hex); random when omitted
    #[arg(long)]
    pub number: Option<String>,

    /// Bit width of the number
    #[arg(long, value_enum, default_value = "1024")]
    pub width: Width,

    /// Ask for the number on stdin, falling back to a random one
    #[arg(long)]
    pub interactive: bool,
}

#[derive(Args, Debug)]
pub struct SeriesArgs {
    /// Term ceiling for every series
    #[arg(long, default_value_t = 99)]
    pub max_terms: u32,
}
