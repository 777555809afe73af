//! Type definitions for the algorithm recommendation engine.
//!
//! These types support both TOML deserialization (for loading rules)
//! and JSON serialization (for report output).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// CRITERIA (collected from the user)
// =============================================================================

/// The kind of learning problem the user is solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemType {
    Classification,
    Regression,
    Clustering,
    AnomalyDetection,
}

impl ProblemType {
    /// All problem types in the order they are offered at the prompt.
    pub const ALL: [ProblemType; 4] = [
        ProblemType::Classification,
        ProblemType::Regression,
        ProblemType::Clustering,
        ProblemType::AnomalyDetection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemType::Classification => "classification",
            ProblemType::Regression => "regression",
            ProblemType::Clustering => "clustering",
            ProblemType::AnomalyDetection => "anomaly_detection",
        }
    }
}

impl fmt::Display for ProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProblemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown problem type '{}' (expected one of: classification, regression, clustering, anomaly_detection)",
                    s
                )
            })
    }
}

/// Approximate size of the user's dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetSize {
    Small,
    Medium,
    Large,
}

impl DatasetSize {
    pub const ALL: [DatasetSize; 3] = [DatasetSize::Small, DatasetSize::Medium, DatasetSize::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetSize::Small => "small",
            DatasetSize::Medium => "medium",
            DatasetSize::Large => "large",
        }
    }
}

impl fmt::Display for DatasetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown dataset size '{}' (expected one of: small, medium, large)",
                    s
                )
            })
    }
}

/// The user's answers. Immutable once collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Criteria {
    pub problem_type: ProblemType,
    pub dataset_size: DatasetSize,
    /// Wants a model that is easy to explain
    pub interpretability: bool,
    /// Maximum accuracy is the top priority
    pub accuracy: bool,
    /// Limited compute or quick iteration
    pub fast_training: bool,
}

// =============================================================================
// ALGORITHMS
// =============================================================================

/// The closed set of algorithms the advisor knows about.
///
/// Declaration order is significant: it breaks ties when two algorithms
/// end up with the same score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "Logistic Regression")]
    LogisticRegression,
    #[serde(rename = "Linear Regression")]
    LinearRegression,
    #[serde(rename = "Decision Tree")]
    DecisionTree,
    #[serde(rename = "Random Forest")]
    RandomForest,
    #[serde(rename = "XGBoost")]
    XgBoost,
    #[serde(rename = "K-Means")]
    KMeans,
    #[serde(rename = "DBSCAN")]
    Dbscan,
    #[serde(rename = "Isolation Forest")]
    IsolationForest,
    #[serde(rename = "One-Class SVM")]
    OneClassSvm,
}

impl Algorithm {
    /// All algorithms in declaration order.
    pub const ALL: [Algorithm; 9] = [
        Algorithm::LogisticRegression,
        Algorithm::LinearRegression,
        Algorithm::DecisionTree,
        Algorithm::RandomForest,
        Algorithm::XgBoost,
        Algorithm::KMeans,
        Algorithm::Dbscan,
        Algorithm::IsolationForest,
        Algorithm::OneClassSvm,
    ];

    /// Human-readable name, as shown in reports and written in rule files.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::LogisticRegression => "Logistic Regression",
            Algorithm::LinearRegression => "Linear Regression",
            Algorithm::DecisionTree => "Decision Tree",
            Algorithm::RandomForest => "Random Forest",
            Algorithm::XgBoost => "XGBoost",
            Algorithm::KMeans => "K-Means",
            Algorithm::Dbscan => "DBSCAN",
            Algorithm::IsolationForest => "Isolation Forest",
            Algorithm::OneClassSvm => "One-Class SVM",
        }
    }

    /// Position in declaration order.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// CONFIGURATION TYPES (loaded from TOML)
// =============================================================================

/// Root configuration loaded from algorithm_rules.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct RulesConfig {
    /// Limits applied when picking recommendations for display
    #[serde(default)]
    pub display: DisplayLimits,
    /// Rules, evaluated in file order
    pub rules: Vec<Rule>,
}

/// How much of the ranked ledger is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayLimits {
    /// Maximum number of algorithms shown
    pub max_shown: usize,
    /// Maximum number of justifications shown per algorithm
    pub max_reasons: usize,
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self {
            max_shown: 3,
            max_reasons: 4,
        }
    }
}

/// Which group of heuristics a rule belongs to. Informational only;
/// evaluation order is the order of the rules list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Task,
    #[default]
    Preference,
    DatasetSize,
}

/// A named branch: when `when` matches, every award is applied.
#[derive(Debug, Clone, Deserialize)]
pub struct Rule {
    pub name: String,
    #[serde(default)]
    pub stage: Stage,
    #[serde(default)]
    pub when: Condition,
    pub awards: Vec<Award>,
}

/// Predicate over the criteria. Every field that is set must match;
/// an empty condition always matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Condition {
    pub problem_type: Option<ProblemType>,
    pub dataset_size: Option<DatasetSize>,
    pub interpretability: Option<bool>,
    pub accuracy: Option<bool>,
    pub fast_training: Option<bool>,
}

impl Condition {
    pub fn matches(&self, criteria: &Criteria) -> bool {
        self.problem_type.map_or(true, |p| p == criteria.problem_type)
            && self.dataset_size.map_or(true, |d| d == criteria.dataset_size)
            && self
                .interpretability
                .map_or(true, |b| b == criteria.interpretability)
            && self.accuracy.map_or(true, |b| b == criteria.accuracy)
            && self.fast_training.map_or(true, |b| b == criteria.fast_training)
    }
}

/// A score adjustment within a rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Award {
    pub algorithm: Algorithm,
    /// Points added to the algorithm's score (negative for a penalty)
    pub points: i32,
    /// Justification shown with the recommendation
    pub reason: String,
}

// =============================================================================
// OUTPUT TYPES
// =============================================================================

/// Shown in place of a listing when nothing scores above zero.
pub const NO_RECOMMENDATIONS: &str =
    "No strong recommendations found based on inputs. Try different constraints.";

/// A single recommended algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub algorithm: Algorithm,
    pub score: i32,
    /// Justifications in the order the rules fired, already truncated
    pub reasons: Vec<String>,
}

/// Ranked, filtered output of the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    pub recommendations: Vec<Recommendation>,
}

impl EvaluationResult {
    /// The sentinel message, if nothing qualified for display.
    pub fn message(&self) -> Option<&'static str> {
        if self.recommendations.is_empty() {
            Some(NO_RECOMMENDATIONS)
        } else {
            None
        }
    }
}
