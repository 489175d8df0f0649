//! Command line argument parsing for the tongyi CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Tongyi - synonym detection and replacement for mixed Chinese/English text
#[derive(Parser, Debug, Clone)]
#[command(name = "tongyi")]
#[command(about = "Rewrite domain-term variants to their canonical form")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TongyiArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Replacer configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "TONGYI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TongyiArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Replace variants in text with their canonical terms
    Replace(ReplaceArgs),

    /// Show the concrete variants a raw variant template registers
    Expand(ExpandArgs),

    /// Show vocabulary statistics
    Stats(StatsArgs),
}

/// Arguments for replacing text
#[derive(Parser, Debug, Clone)]
pub struct ReplaceArgs {
    /// Vocabulary file (.json records or .csv)
    #[arg(long, value_name = "VOCAB_FILE")]
    pub vocab: PathBuf,

    /// Text to process. Lines are read from --input or stdin when omitted
    #[arg(value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// File with one text per line
    #[arg(short, long, value_name = "INPUT_FILE")]
    pub input: Option<PathBuf>,

    /// Also print the annotated form
    #[arg(long)]
    pub annotated: bool,
}

/// Arguments for expanding a variant template
#[derive(Parser, Debug, Clone)]
pub struct ExpandArgs {
    /// Raw variant, `?` marks a connector placeholder
    #[arg(value_name = "TEMPLATE")]
    pub template: String,
}

/// Arguments for vocabulary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Vocabulary file (.json records or .csv)
    #[arg(long, value_name = "VOCAB_FILE")]
    pub vocab: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_replace_command() {
        let args = TongyiArgs::try_parse_from([
            "tongyi",
            "replace",
            "--vocab",
            "vocab.json",
            "做MRI检查",
            "--annotated",
        ])
        .unwrap();

        match args.command {
            Command::Replace(replace_args) => {
                assert_eq!(replace_args.vocab, PathBuf::from("vocab.json"));
                assert_eq!(replace_args.text.as_deref(), Some("做MRI检查"));
                assert!(replace_args.input.is_none());
                assert!(replace_args.annotated);
            }
            _ => panic!("Expected replace command"),
        }
    }

    #[test]
    fn test_text_conflicts_with_input() {
        let result = TongyiArgs::try_parse_from([
            "tongyi", "replace", "--vocab", "v.csv", "text", "--input", "in.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_expand_command() {
        let args = TongyiArgs::try_parse_from(["tongyi", "expand", "ab?cd"]).unwrap();
        match args.command {
            Command::Expand(expand_args) => assert_eq!(expand_args.template, "ab?cd"),
            _ => panic!("Expected expand command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let args = TongyiArgs::try_parse_from([
            "tongyi", "-vv", "--format", "json", "--pretty", "stats", "--vocab", "v.csv",
        ])
        .unwrap();
        assert_eq!(args.verbosity(), 2);
        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
        assert!(matches!(args.command, Command::Stats(_)));
    }

    #[test]
    fn test_verbosity_levels() {
        let args = TongyiArgs::try_parse_from(["tongyi", "expand", "x"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = TongyiArgs::try_parse_from(["tongyi", "-q", "-vvv", "expand", "x"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }
}
