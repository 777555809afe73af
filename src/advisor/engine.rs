//! Rule evaluation engine for algorithm recommendations.
//!
//! The `RuleEngine` takes the user's criteria, accumulates a score ledger
//! from every matching rule, then ranks and filters it for display.

use tracing::debug;

use super::ledger::ScoreLedger;
use super::types::*;

/// The rule evaluation engine.
///
/// Holds no state besides the rule table, so evaluating the same criteria
/// twice always yields the same result.
pub struct RuleEngine {
    rules: RulesConfig,
}

impl RuleEngine {
    /// Create a new rule engine with the given configuration.
    ///
    /// # Arguments
    /// * `rules` - Rule configuration (typically from `default_rules()` or `load_rules()`)
    pub fn new(rules: RulesConfig) -> Self {
        Self { rules }
    }

    /// Apply every matching rule, in table order, to a fresh ledger.
    pub fn score(&self, criteria: &Criteria) -> ScoreLedger {
        let mut ledger = ScoreLedger::new();

        for rule in self.rules.rules.iter().filter(|r| r.when.matches(criteria)) {
            debug!("Rule '{}' fired ({} awards)", rule.name, rule.awards.len());
            for award in &rule.awards {
                ledger.apply(award);
            }
        }

        ledger
    }

    /// Score, rank and filter.
    ///
    /// Algorithms scoring zero or less are never shown. At most
    /// `display.max_shown` algorithms are returned, each with its first
    /// `display.max_reasons` justifications.
    pub fn recommend(&self, criteria: &Criteria) -> EvaluationResult {
        let ledger = self.score(criteria);
        let limits = self.rules.display;

        let recommendations: Vec<Recommendation> = ledger
            .ranked()
            .into_iter()
            .filter(|entry| entry.score > 0)
            .take(limits.max_shown)
            .map(|entry| Recommendation {
                algorithm: entry.algorithm,
                score: entry.score,
                reasons: entry
                    .reasons
                    .iter()
                    .take(limits.max_reasons)
                    .cloned()
                    .collect(),
            })
            .collect();

        debug!(
            "Evaluated {:?}: {} recommendation(s)",
            criteria,
            recommendations.len()
        );

        EvaluationResult { recommendations }
    }

    /// Names of the rules that apply to the given criteria, in firing order.
    pub fn matching_rules(&self, criteria: &Criteria) -> Vec<&str> {
        self.rules
            .rules
            .iter()
            .filter(|r| r.when.matches(criteria))
            .map(|r| r.name.as_str())
            .collect()
    }
}
