//! Console questionnaire that collects the user's criteria.
//!
//! Every question loops until it gets a valid answer. The prompter is generic
//! over its input and output so the same code drives stdin/stdout and tests.

use std::fmt::Display;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::advisor::{Criteria, DatasetSize, ProblemType};
use crate::error::{AdvisorError, Result};

const CHOICE_INPUT: &str = "Select an option number: ";
const INVALID_CHOICE: &str = "Invalid input. Please choose a valid option number.";
const INVALID_YES_NO: &str = "Invalid input. Please type y or n.";

pub const PROBLEM_TYPE_QUESTION: &str = "What is your problem type?";
pub const DATASET_SIZE_QUESTION: &str = "Approximate dataset size?";
pub const INTERPRETABILITY_QUESTION: &str = "Do you need high interpretability (easy to explain)?";
pub const ACCURACY_QUESTION: &str = "Is maximum accuracy the top priority?";
pub const FAST_TRAINING_QUESTION: &str =
    "Is fast training important (limited compute / quick iteration)?";

/// Line-oriented question/answer loop over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show `options` as a 1-based numbered list and return the selected one.
    ///
    /// Re-asks until the answer is a number in range. Fails only if the input
    /// is closed or the console cannot be written.
    pub fn ask_choice<'a, T: Display>(&mut self, prompt: &str, options: &'a [T]) -> Result<&'a T> {
        if options.is_empty() {
            return Err(AdvisorError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("no options to choose from for '{}'", prompt),
            )));
        }

        loop {
            writeln!(self.output, "{}", prompt)?;
            for (i, option) in options.iter().enumerate() {
                writeln!(self.output, "  {}) {}", i + 1, option)?;
            }
            write!(self.output, "{}", CHOICE_INPUT)?;
            self.output.flush()?;

            let line = self.read_line()?;
            if let Some(idx) = parse_choice(&line, options.len()) {
                return Ok(&options[idx]);
            }

            debug!("Rejected choice {:?} for '{}'", line.trim(), prompt);
            writeln!(self.output, "{}\n", INVALID_CHOICE)?;
        }
    }

    /// Ask a yes/no question. Accepts y/yes/n/no in any case.
    pub fn ask_yes_no(&mut self, prompt: &str) -> Result<bool> {
        loop {
            write!(self.output, "{} (y/n): ", prompt)?;
            self.output.flush()?;

            let line = self.read_line()?;
            if let Some(answer) = parse_yes_no(&line) {
                return Ok(answer);
            }

            debug!("Rejected answer {:?} for '{}'", line.trim(), prompt);
            writeln!(self.output, "{}\n", INVALID_YES_NO)?;
        }
    }

    /// Write a line of free text to the prompt output.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(AdvisorError::InputClosed);
        }
        // Undecodable bytes become U+FFFD and fail validation like any other typo
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Parse a 1-based option number. Returns the 0-based index when valid.
pub fn parse_choice(input: &str, len: usize) -> Option<usize> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match trimmed.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Some(n - 1),
        _ => None,
    }
}

pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Criteria already answered on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresetCriteria {
    pub problem_type: Option<ProblemType>,
    pub dataset_size: Option<DatasetSize>,
    pub interpretability: Option<bool>,
    pub accuracy: Option<bool>,
    pub fast_training: Option<bool>,
}

impl PresetCriteria {
    /// The full criteria, if nothing is left to ask.
    pub fn complete(&self) -> Option<Criteria> {
        Some(Criteria {
            problem_type: self.problem_type?,
            dataset_size: self.dataset_size?,
            interpretability: self.interpretability?,
            accuracy: self.accuracy?,
            fast_training: self.fast_training?,
        })
    }
}

/// Ask, in order, every question the preset does not already answer.
pub fn collect_criteria<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    preset: PresetCriteria,
) -> Result<Criteria> {
    let problem_type = match preset.problem_type {
        Some(p) => p,
        None => *prompter.ask_choice(PROBLEM_TYPE_QUESTION, &ProblemType::ALL)?,
    };
    let dataset_size = match preset.dataset_size {
        Some(d) => d,
        None => *prompter.ask_choice(DATASET_SIZE_QUESTION, &DatasetSize::ALL)?,
    };
    let interpretability = match preset.interpretability {
        Some(b) => b,
        None => prompter.ask_yes_no(INTERPRETABILITY_QUESTION)?,
    };
    let accuracy = match preset.accuracy {
        Some(b) => b,
        None => prompter.ask_yes_no(ACCURACY_QUESTION)?,
    };
    let fast_training = match preset.fast_training {
        Some(b) => b,
        None => prompter.ask_yes_no(FAST_TRAINING_QUESTION)?,
    };

    Ok(Criteria {
        problem_type,
        dataset_size,
        interpretability,
        accuracy,
        fast_training,
    })
}
