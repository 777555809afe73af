pub mod advisor;
pub mod cli;
mod error;
pub mod prompt;
pub mod report;

use std::io::{BufRead, Write};

use tracing::info;

use advisor::{resolve_rules, EvaluationResult, RuleEngine};
use cli::AdvisorArgs;
use prompt::{collect_criteria, PresetCriteria, Prompter};
use report::OutputFormat;

pub use error::{AdvisorError, Result};

/// Install the stderr log subscriber. `RUST_LOG` wins over `default_level`.
pub fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run one questionnaire on the real console.
pub fn run(args: &AdvisorArgs) -> anyhow::Result<()> {
    let engine = RuleEngine::new(resolve_rules(args.rules.as_deref())?);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    match args.format {
        OutputFormat::Text => run_session(
            &engine,
            args.preset(),
            args.format,
            stdin.lock(),
            std::io::stdout(),
            &mut stdout,
        )?,
        // Keep stdout clean for the JSON document
        OutputFormat::Json => run_session(
            &engine,
            args.preset(),
            args.format,
            stdin.lock(),
            std::io::stderr(),
            &mut stdout,
        )?,
    };

    Ok(())
}

/// Ask for any missing criteria on `prompts`, then write the result to `out`.
pub fn run_session<R: BufRead, P: Write, W: Write>(
    engine: &RuleEngine,
    preset: PresetCriteria,
    format: OutputFormat,
    input: R,
    prompts: P,
    out: &mut W,
) -> Result<EvaluationResult> {
    let mut prompter = Prompter::new(input, prompts);
    if format == OutputFormat::Text {
        prompter.say(report::HEADER)?;
    }

    let criteria = collect_criteria(&mut prompter, preset)?;
    info!(
        "Collected criteria: {} / {} dataset (interpretability={}, accuracy={}, fast_training={})",
        criteria.problem_type,
        criteria.dataset_size,
        criteria.interpretability,
        criteria.accuracy,
        criteria.fast_training
    );
    info!("Matching rules: {:?}", engine.matching_rules(&criteria));

    let result = engine.recommend(&criteria);
    match format {
        OutputFormat::Text => report::write_text(out, &result)?,
        OutputFormat::Json => report::write_json(out, &criteria, &result)?,
    }
    out.flush()?;

    Ok(result)
}
