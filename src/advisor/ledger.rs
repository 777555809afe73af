//! Per-evaluation score accumulator.

use super::types::{Algorithm, Award};

/// Accumulated score and justifications for one algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub algorithm: Algorithm,
    pub score: i32,
    /// Justifications in rule-application order
    pub reasons: Vec<String>,
}

/// One entry per known algorithm, kept in declaration order.
///
/// Built fresh for every evaluation and only changed through [`ScoreLedger::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreLedger {
    entries: Vec<LedgerEntry>,
}

impl ScoreLedger {
    pub fn new() -> Self {
        let entries = Algorithm::ALL
            .iter()
            .map(|&algorithm| LedgerEntry {
                algorithm,
                score: 0,
                reasons: Vec::new(),
            })
            .collect();
        Self { entries }
    }

    /// Add an award's points and record its reason.
    pub fn apply(&mut self, award: &Award) {
        let entry = &mut self.entries[award.algorithm.index()];
        entry.score = entry.score.saturating_add(award.points);
        entry.reasons.push(award.reason.clone());
    }

    pub fn get(&self, algorithm: Algorithm) -> &LedgerEntry {
        &self.entries[algorithm.index()]
    }

    pub fn score(&self, algorithm: Algorithm) -> i32 {
        self.get(algorithm).score
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Entries sorted by score, highest first. The sort is stable, so equal
    /// scores keep declaration order.
    pub fn ranked(&self) -> Vec<&LedgerEntry> {
        let mut ranked: Vec<&LedgerEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }
}

impl Default for ScoreLedger {
    fn default() -> Self {
        Self::new()
    }
}
