use std::io::Write;

use mindwell_cli::commands;
use mindwell_cli::settings;
use mindwell_risk::RiskScorer;
use mindwell_risk::config::ScoringConfig;
use serde_json::Value;

fn scorer() -> RiskScorer {
    RiskScorer::with_embedded_config().unwrap()
}

#[test]
fn scores_a_questionnaire_request() {
    let request = r#"{"signals": [{"kind": "questionnaire", "answers": [2,2,1,2,1,2,1,1,0]}]}"#;
    let output: Value =
        serde_json::from_str(&commands::score(&scorer(), request, None).unwrap()).unwrap();

    assert_eq!(output["severity"], "moderate");
    assert_eq!(output["risk_level"], "moderate");
    assert_eq!(output["escalation"], false);
    assert_eq!(output["raw_score"], 12);
}

#[test]
fn scores_mixed_signals() {
    let request = r#"{
        "signals": [
            {"kind": "questionnaire", "answers": [1,1,1,1,1,1,1,1,0]},
            {"kind": "text", "text": "I had a good day with friends", "language": "en"},
            {"kind": "behavioral", "features": {"typing_speed_wpm": 38.0, "voice_energy": 0.4}}
        ]
    }"#;
    let output: Value =
        serde_json::from_str(&commands::score(&scorer(), request, None).unwrap()).unwrap();

    let score = output["score"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&score));
    assert_eq!(output["is_crisis"], false);
}

#[test]
fn session_wraps_the_assessment_in_a_record() {
    let request = r#"{"signals": [{"kind": "text", "text": "I want to end my life"}]}"#;
    let session = "6f1c2a9e-3d4b-4c1a-9f0e-2b7d8c5a1e34";
    let output: Value =
        serde_json::from_str(&commands::score(&scorer(), request, Some(session)).unwrap()).unwrap();

    assert_eq!(output["session_id"], session);
    assert_eq!(output["assessment"]["is_crisis"], true);
    assert!(output["assessed_at"].is_string());
}

#[test]
fn bad_session_id_is_an_error() {
    let request = r#"{"signals": [{"kind": "text", "text": "hello"}]}"#;
    assert!(commands::score(&scorer(), request, Some("not-a-uuid")).is_err());
}

#[test]
fn out_of_range_answer_is_an_error() {
    let request = r#"{"signals": [{"kind": "questionnaire", "answers": [4,0,0,0,0,0,0,0,0]}]}"#;
    let err = commands::score(&scorer(), request, None).unwrap_err();
    assert!(err.to_string().contains("outside range"), "{err}");
}

#[test]
fn reply_includes_turn_and_safety() {
    let output: Value = serde_json::from_str(
        &commands::reply(&scorer(), "hello", Some("en"), Vec::new()).unwrap(),
    )
    .unwrap();

    assert_eq!(output["reply"]["intent"], "greeting");
    assert_eq!(output["reply"]["language"], "en");
    assert_eq!(output["assessment"]["is_crisis"], false);
    assert_eq!(output["safety"]["needs_escalation"], false);
}

#[test]
fn crisis_reply_escalates() {
    let output: Value = serde_json::from_str(
        &commands::reply(&scorer(), "I want to die", None, Vec::new()).unwrap(),
    )
    .unwrap();

    assert_eq!(output["reply"]["source"], "crisis");
    assert_eq!(output["safety"]["is_crisis"], true);
    assert_eq!(output["safety"]["risk_level"], "severe");
}

#[test]
fn prints_all_nine_questions() {
    let text = commands::questions("en").unwrap();
    assert!(text.starts_with("1. "));
    assert!(text.contains("\n\n9. "));
    assert!(!text.contains("\n\n10. "));
}

#[test]
fn unknown_language_prints_english_questions() {
    assert_eq!(
        commands::questions("fr").unwrap(),
        commands::questions("en").unwrap()
    );
}

#[test]
fn shown_config_round_trips() {
    let embedded = ScoringConfig::embedded().unwrap();
    let shown = commands::show_config(&embedded).unwrap();
    assert_eq!(ScoringConfig::from_json(&shown).unwrap(), embedded);
}

#[test]
fn checks_a_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let json = ScoringConfig::embedded().unwrap().to_json_pretty().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let message = commands::check_config(file.path()).unwrap();
    assert!(message.ends_with("ok (config_version 1)"));
}

#[test]
fn explicit_config_path_wins() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let mut config = ScoringConfig::embedded().unwrap();
    config.crisis_keywords.insert(
        mindwell_core::language::Language::En,
        vec!["walk into the sea".to_string()],
    );
    file.write_all(config.to_json_pretty().unwrap().as_bytes()).unwrap();

    let scorer = settings::build_scorer(Some(file.path())).unwrap();
    assert!(scorer.crisis_detector().is_crisis("I will walk into the sea"));
}
