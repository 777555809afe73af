//! TOML rule loading for the recommendation engine.
//!
//! Provides three loading methods:
//! - `default_rules()` - Loads embedded rules compiled into the binary
//! - `load_rules(path)` - Loads custom rules from a file path
//! - `resolve_rules(path)` - Picks between the two (flag, user config dir, embedded)

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::types::{Algorithm, RulesConfig};
use crate::error::AdvisorError;

/// Default rules embedded in the binary at compile time.
/// These are loaded from `config/algorithm_rules.toml`.
const DEFAULT_RULES: &str = include_str!("../../config/algorithm_rules.toml");

/// Directory name under the platform config dir that may hold `rules.toml`.
const APP_DIR: &str = "ml-advisor";
const USER_RULES_FILE: &str = "rules.toml";

/// Parse and validate a rules document.
pub fn parse_rules(content: &str) -> crate::error::Result<RulesConfig> {
    let config: RulesConfig = toml::from_str(content)?;
    validate_rules(&config)?;
    Ok(config)
}

/// Load rules from a TOML file at the given path.
///
/// # Returns
/// * `Ok(RulesConfig)` - Parsed rules configuration
/// * `Err` - If the file cannot be read, the TOML is invalid, or validation fails
pub fn load_rules(path: &Path) -> Result<RulesConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read rules file {:?}", path))?;
    let config =
        parse_rules(&content).with_context(|| format!("Failed to load rules from {:?}", path))?;
    info!("Loaded {} rules from {:?}", config.rules.len(), path);
    Ok(config)
}

/// Get the default rules embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_rules() -> RulesConfig {
    parse_rules(DEFAULT_RULES).expect("embedded algorithm_rules.toml must be valid")
}

/// Location of the optional per-user rules file.
pub fn user_rules_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join(USER_RULES_FILE))
}

/// Pick the rule table for this run.
///
/// An explicit path wins; otherwise a `rules.toml` in the user config
/// directory is used when present; otherwise the embedded defaults.
pub fn resolve_rules(explicit: Option<&Path>) -> Result<RulesConfig> {
    resolve_rules_from(explicit, user_rules_path().as_deref())
}

fn resolve_rules_from(explicit: Option<&Path>, user_file: Option<&Path>) -> Result<RulesConfig> {
    if let Some(path) = explicit {
        return load_rules(path);
    }

    if let Some(path) = user_file.filter(|p| p.is_file()) {
        debug!("Using user rules file at {:?}", path);
        return load_rules(path);
    }

    debug!("Using embedded default rules");
    Ok(default_rules())
}

fn validate_rules(config: &RulesConfig) -> crate::error::Result<()> {
    let invalid = |msg: String| Err(AdvisorError::InvalidRules(msg));

    if config.display.max_shown == 0 {
        return invalid("display.max_shown must be at least 1".to_string());
    }
    if config.display.max_reasons == 0 {
        return invalid("display.max_reasons must be at least 1".to_string());
    }

    let mut seen = HashSet::new();
    let mut exposure = [0i64; Algorithm::ALL.len()];
    for rule in &config.rules {
        if rule.name.trim().is_empty() {
            return invalid("rule name must not be empty".to_string());
        }
        if !seen.insert(rule.name.as_str()) {
            return invalid(format!("duplicate rule name '{}'", rule.name));
        }
        if rule.awards.is_empty() {
            return invalid(format!("rule '{}' has no awards", rule.name));
        }
        for award in &rule.awards {
            if award.points == 0 {
                return invalid(format!(
                    "rule '{}' awards zero points to {}",
                    rule.name, award.algorithm
                ));
            }
            if award.reason.trim().is_empty() {
                return invalid(format!(
                    "rule '{}' has an empty reason for {}",
                    rule.name, award.algorithm
                ));
            }
            exposure[award.algorithm.index()] += i64::from(award.points).abs();
        }
    }

    // Worst case is every rule firing with all awards pulling the same way
    for algorithm in Algorithm::ALL {
        if exposure[algorithm.index()] > i64::from(i32::MAX) {
            return invalid(format!("points awarded to {} can overflow the score", algorithm));
        }
    }

    Ok(())
}
