use std::io::Write;

use mindwell_core::models::assessment::SeverityTier;
use mindwell_instruments::instruments::phq9::QuestionnaireResponse;
use mindwell_risk::RiskScorer;
use mindwell_risk::config::{CURRENT_VERSION, ModalityWeights, ScoringConfig};
use mindwell_risk::error::ConfigError;

fn embedded_json() -> serde_json::Value {
    let config = ScoringConfig::embedded().unwrap();
    serde_json::from_str(&config.to_json_pretty().unwrap()).unwrap()
}

#[test]
fn embedded_config_is_current_and_valid() {
    let config = ScoringConfig::embedded().unwrap();
    assert_eq!(config.config_version, CURRENT_VERSION);
    assert_eq!(config.phq9.escalation_tier, SeverityTier::ModeratelySevere);
    assert_eq!(config.phq9.breakpoints.lower_bound(config.phq9.escalation_tier), 15);
    assert!(config.validate().is_ok());
}

#[test]
fn pre_versioned_config_is_migrated() {
    let mut json = embedded_json();
    let obj = json.as_object_mut().unwrap();
    obj.remove("config_version");
    obj.remove("modality_weights");

    let config = ScoringConfig::from_json(&json.to_string()).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.modality_weights, ModalityWeights::default());
}

#[test]
fn newer_config_version_is_rejected() {
    let mut json = embedded_json();
    json["config_version"] = serde_json::json!(CURRENT_VERSION + 1);
    let err = ScoringConfig::from_json(&json.to_string()).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedVersion { .. }));
}

#[test]
fn weights_must_sum_to_one() {
    let mut json = embedded_json();
    json["text_weights"]["keyword"] = serde_json::json!(0.5);
    let err = ScoringConfig::from_json(&json.to_string()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("text_weights")));
}

#[test]
fn thresholds_must_be_ordered() {
    let mut json = embedded_json();
    json["risk_thresholds"]["high"] = serde_json::json!(0.9);
    assert!(matches!(
        ScoringConfig::from_json(&json.to_string()),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn every_language_needs_crisis_keywords() {
    let mut json = embedded_json();
    json["crisis_keywords"].as_object_mut().unwrap().remove("si");
    let err = ScoringConfig::from_json(&json.to_string()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("si")));
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        ScoringConfig::from_json("{ not json"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn escalation_tier_comes_from_config() {
    let mut json = embedded_json();
    json["phq9"]["escalation_tier"] = serde_json::json!("severe");
    let config = ScoringConfig::from_json(&json.to_string()).unwrap();
    let scorer = RiskScorer::new(config).unwrap();

    let fifteen = QuestionnaireResponse::new(vec![2, 2, 2, 2, 2, 2, 2, 1, 0]);
    assert!(!scorer.score_questionnaire(&fifteen).unwrap().escalation);
}

#[test]
fn escalation_tier_must_not_start_at_zero() {
    let mut json = embedded_json();
    json["phq9"]["escalation_tier"] = serde_json::json!("minimal");
    let err = ScoringConfig::from_json(&json.to_string()).unwrap_err();
    assert!(
        matches!(&err, ConfigError::Invalid(msg) if msg.contains("'minimal'")),
        "{err}"
    );
}

#[test]
fn crisis_keywords_come_from_config() {
    let mut json = embedded_json();
    json["crisis_keywords"]["en"] = serde_json::json!(["Give Up On Everything"]);
    let scorer = RiskScorer::new(ScoringConfig::from_json(&json.to_string()).unwrap()).unwrap();
    assert!(scorer.crisis_detector().is_crisis("i just want to give up on everything"));
    assert!(!scorer.crisis_detector().is_crisis("i want to end my life"));
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(embedded_json().to_string().as_bytes()).unwrap();
    let config = ScoringConfig::load(file.path()).unwrap();
    assert_eq!(config, ScoringConfig::embedded().unwrap());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ScoringConfig::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
