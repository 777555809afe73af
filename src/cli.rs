//! Command line arguments.

use clap::Parser;
use std::path::PathBuf;

use crate::advisor::{DatasetSize, ProblemType};
use crate::prompt::{parse_yes_no, PresetCriteria};
use crate::report::OutputFormat;

/// Recommend machine-learning algorithms from a short questionnaire.
///
/// Any criterion given as a flag is not asked interactively.
#[derive(Parser, Debug, Clone)]
#[command(name = "ml-advisor")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct AdvisorArgs {
    /// Problem type (classification, regression, clustering, anomaly_detection)
    #[arg(long)]
    pub task: Option<ProblemType>,

    /// Approximate dataset size (small, medium, large)
    #[arg(long)]
    pub data_size: Option<DatasetSize>,

    /// Need high interpretability
    #[arg(long, value_name = "yes|no", action = clap::ArgAction::Set, value_parser = parse_answer)]
    pub interpretability: Option<bool>,

    /// Maximum accuracy is the top priority
    #[arg(long, value_name = "yes|no", action = clap::ArgAction::Set, value_parser = parse_answer)]
    pub accuracy: Option<bool>,

    /// Fast training is important
    #[arg(long, value_name = "yes|no", action = clap::ArgAction::Set, value_parser = parse_answer)]
    pub fast_training: Option<bool>,

    /// Rules file to use instead of the built-in table
    #[arg(long, value_name = "PATH")]
    pub rules: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl AdvisorArgs {
    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    pub fn preset(&self) -> PresetCriteria {
        PresetCriteria {
            problem_type: self.task,
            dataset_size: self.data_size,
            interpretability: self.interpretability,
            accuracy: self.accuracy,
            fast_training: self.fast_training,
        }
    }
}

fn parse_answer(s: &str) -> Result<bool, String> {
    parse_yes_no(s).ok_or_else(|| format!("expected yes or no, got '{}'", s))
}
