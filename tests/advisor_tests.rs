use std::io::Cursor;

use ml_advisor::advisor::*;
use ml_advisor::prompt::PresetCriteria;
use ml_advisor::report::OutputFormat;
use ml_advisor::{run_session, AdvisorError};

/// Run a text-mode session and return (result, prompt transcript, report output).
fn run_text(engine: &RuleEngine, answers: &str) -> (EvaluationResult, String, String) {
    let mut prompts = Vec::new();
    let mut out = Vec::new();
    let result = run_session(
        engine,
        PresetCriteria::default(),
        OutputFormat::Text,
        Cursor::new(answers.as_bytes().to_vec()),
        &mut prompts,
        &mut out,
    )
    .expect("session should complete");
    (
        result,
        String::from_utf8(prompts).unwrap(),
        String::from_utf8(out).unwrap(),
    )
}

fn shown(result: &EvaluationResult) -> Vec<(&'static str, i32)> {
    result
        .recommendations
        .iter()
        .map(|r| (r.algorithm.name(), r.score))
        .collect()
}

#[test]
fn test_classification_medium_interpretable_session() {
    let engine = RuleEngine::new(default_rules());
    let (result, prompts, out) = run_text(&engine, "1\n2\ny\nn\nn\n");

    assert!(prompts.starts_with("\n=== ML Algorithm Decision Support System (Prototype) ===\n"));
    assert_eq!(
        shown(&result),
        vec![
            ("Logistic Regression", 5),
            ("Decision Tree", 5),
            ("Random Forest", 3),
        ]
    );

    assert!(out.contains("\nLogistic Regression (score: 5)\n  - Fits classification tasks well (strong baseline)\n  - High interpretability (coefficients are explainable)\n"));
    assert!(out.contains("\nDecision Tree (score: 5)\n"));
    assert!(!out.contains("XGBoost"));
    assert!(out.ends_with("\n--- End ---\n\n"));
}

#[test]
fn test_clustering_small_session() {
    let engine = RuleEngine::new(default_rules());
    let (result, _, out) = run_text(&engine, "3\n1\nn\nn\nn\n");

    assert_eq!(
        shown(&result),
        vec![("K-Means", 3), ("DBSCAN", 3), ("Decision Tree", 1)]
    );
    assert!(out.contains("  - Often works well on smaller datasets\n"));
    assert!(!out.contains("One-Class SVM"));
}

#[test]
fn test_anomaly_detection_large_session() {
    let engine = RuleEngine::new(default_rules());
    let (result, _, _) = run_text(&engine, "4\n3\nno\nno\nno\n");

    assert_eq!(
        shown(&result),
        vec![("Isolation Forest", 3), ("One-Class SVM", 3), ("XGBoost", 1)]
    );
}

#[test]
fn test_invalid_answers_are_reprompted() {
    let engine = RuleEngine::new(default_rules());
    let (result, prompts, _) = run_text(&engine, "0\nfive\n2\nhuge\n3\nsure\nyes\nn\nN\n");

    assert_eq!(
        prompts
            .matches("Invalid input. Please choose a valid option number.")
            .count(),
        3
    );
    assert_eq!(prompts.matches("Invalid input. Please type y or n.").count(), 1);

    // regression + large + interpretability; three-way tie at 4
    assert_eq!(
        shown(&result),
        vec![
            ("Linear Regression", 5),
            ("Decision Tree", 4),
            ("Random Forest", 4),
        ]
    );
}

#[test]
fn test_closed_input_is_an_error() {
    let engine = RuleEngine::new(default_rules());
    let mut out = Vec::new();
    let err = run_session(
        &engine,
        PresetCriteria::default(),
        OutputFormat::Text,
        Cursor::new(b"1\n".to_vec()),
        Vec::new(),
        &mut out,
    )
    .unwrap_err();

    assert!(matches!(err, AdvisorError::InputClosed));
    assert!(out.is_empty(), "No report without complete criteria");
}

#[test]
fn test_preset_json_session_asks_nothing() {
    let engine = RuleEngine::new(default_rules());
    let preset = PresetCriteria {
        problem_type: Some(ProblemType::Regression),
        dataset_size: Some(DatasetSize::Small),
        interpretability: Some(false),
        accuracy: Some(true),
        fast_training: Some(true),
    };
    let mut prompts = Vec::new();
    let mut out = Vec::new();
    run_session(
        &engine,
        preset,
        OutputFormat::Json,
        Cursor::new(Vec::new()),
        &mut prompts,
        &mut out,
    )
    .unwrap();

    assert!(prompts.is_empty());
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["criteria"]["problem_type"], "regression");
    assert_eq!(value["criteria"]["fast_training"], true);

    // Random Forest 3+2, Linear Regression 3+2, XGBoost 3+3-1
    let recs = value["recommendations"].as_array().unwrap();
    let names: Vec<&str> = recs
        .iter()
        .map(|r| r["algorithm"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Linear Regression", "Random Forest", "XGBoost"]);
    assert_eq!(recs[2]["score"], 5);
    assert!(value["message"].is_null());
}

#[test]
fn test_custom_rules_file_without_survivors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.toml");
    std::fs::write(
        &path,
        r#"
        [[rules]]
        name = "discourage_boosting"
        stage = "preference"
        when = { fast_training = true }
        awards = [{ algorithm = "XGBoost", points = -1, reason = "Can be slower to train" }]
        "#,
    )
    .unwrap();

    let engine = RuleEngine::new(load_rules(&path).unwrap());
    let (result, _, out) = run_text(&engine, "1\n1\nn\nn\ny\n");

    assert!(result.recommendations.is_empty());
    assert!(out.contains(NO_RECOMMENDATIONS));
    assert!(!out.contains("(score:"));
}

#[test]
fn test_custom_rules_display_limits() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.toml");
    std::fs::write(
        &path,
        r#"
        [display]
        max_shown = 1
        max_reasons = 1

        [[rules]]
        name = "everything_counts"
        awards = [
            { algorithm = "K-Means", points = 2, reason = "first" },
            { algorithm = "K-Means", points = 2, reason = "second" },
            { algorithm = "DBSCAN", points = 1, reason = "third" },
        ]
        "#,
    )
    .unwrap();

    let engine = RuleEngine::new(load_rules(&path).unwrap());
    let (result, _, _) = run_text(&engine, "2\n2\nn\nn\nn\n");

    assert_eq!(result.recommendations.len(), 1);
    assert_eq!(result.recommendations[0].algorithm, Algorithm::KMeans);
    assert_eq!(result.recommendations[0].score, 4);
    assert_eq!(result.recommendations[0].reasons, vec!["first"]);
}

#[test]
fn test_invalid_rules_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[[rules]]\nname = \"\"\nawards = []\n").unwrap();

    let err = load_rules(&path).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("broken.toml"), "{}", message);
    assert!(message.contains("Invalid rules"), "{}", message);
}
