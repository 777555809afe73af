//! Criteria-to-algorithm recommendation engine.
//!
//! This module provides a TOML-driven rule engine that turns the user's
//! answers into a ranked, justified shortlist of machine-learning algorithms.
//!
//! # Architecture
//!
//! - **Rules**: Embedded TOML table (or a user-supplied file), evaluated in order
//! - **Ledger**: Each matching rule adds points and a reason per algorithm
//! - **Ranking**: Stable sort by score; ties keep declaration order
//! - **Display**: Non-positive scores dropped, shortlist and reasons truncated
//!
//! # Example
//!
//! ```ignore
//! use ml_advisor::advisor::{default_rules, Criteria, DatasetSize, ProblemType, RuleEngine};
//!
//! let engine = RuleEngine::new(default_rules());
//!
//! let criteria = Criteria {
//!     problem_type: ProblemType::Classification,
//!     dataset_size: DatasetSize::Medium,
//!     interpretability: true,
//!     accuracy: false,
//!     fast_training: false,
//! };
//!
//! for rec in engine.recommend(&criteria).recommendations {
//!     println!("{} (score: {})", rec.algorithm, rec.score);
//! }
//! ```

mod engine;
mod ledger;
mod rules;
mod types;

pub use engine::RuleEngine;
pub use ledger::{LedgerEntry, ScoreLedger};
pub use rules::{default_rules, load_rules, parse_rules, resolve_rules, user_rules_path};
pub use types::*;
