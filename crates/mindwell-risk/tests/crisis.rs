use mindwell_core::language::Language;
use mindwell_core::models::assessment::{RiskLevel, SeverityTier};
use mindwell_instruments::instruments::phq9::QuestionnaireResponse;
use mindwell_risk::behavioral::{BehavioralFeature, BehavioralSignal};
use mindwell_risk::crisis::crisis_message;
use mindwell_risk::text::TextSignal;
use mindwell_risk::{RiskScorer, Signal};

fn scorer() -> RiskScorer {
    RiskScorer::with_embedded_config().unwrap()
}

#[test]
fn end_my_life_is_a_crisis() {
    let assessment = scorer()
        .score_text(&TextSignal::new("I want to end my life"))
        .unwrap();
    assert!(assessment.is_crisis);
    assert!(assessment.escalation);
    assert_eq!(assessment.risk_level, RiskLevel::Severe);
    assert_eq!(assessment.score, None);
    assert_eq!(
        assessment.recommendation.as_deref(),
        Some(crisis_message(Language::En))
    );
}

#[test]
fn matching_is_case_insensitive() {
    assert!(scorer().crisis_detector().is_crisis("Thinking about SUICIDE again"));
}

#[test]
fn every_language_list_is_checked() {
    let detector = scorer();
    let hit = detector
        .crisis_detector()
        .detect("i keep thinking தற்கொலை")
        .unwrap();
    assert_eq!(hit.language, Language::Ta);
    assert!(detector.crisis_detector().is_crisis("ජීවිතය අවසන් කරන්න ඕනේ"));
}

#[test]
fn crisis_reply_uses_message_language() {
    let assessment = scorer()
        .score_text(&TextSignal::new("தற்கொலை செய்து கொள்ள விரும்புகிறேன்"))
        .unwrap();
    assert_eq!(
        assessment.recommendation.as_deref(),
        Some(crisis_message(Language::Ta))
    );
}

#[test]
fn crisis_overrides_every_other_signal() {
    let signals = [
        Signal::Questionnaire(QuestionnaireResponse::new(vec![0; 9])),
        Signal::Text(TextSignal::new("Some days I want to die. Anyway, good day today!")),
        Signal::Behavioral(
            BehavioralSignal::new().with(BehavioralFeature::TypingSpeedWpm, 80.0),
        ),
    ];
    let assessment = scorer().score_all(&signals).unwrap();
    assert!(assessment.is_crisis);
    assert!(assessment.escalation);
    assert_eq!(assessment.risk_level, RiskLevel::Severe);
    assert_eq!(assessment.severity, Some(SeverityTier::Minimal));
    assert_eq!(assessment.raw_score, Some(0));
}

#[test]
fn ordinary_sadness_is_not_a_crisis() {
    let assessment = scorer()
        .score_text(&TextSignal::new("I feel down and lonely this week"))
        .unwrap();
    assert!(!assessment.is_crisis);
    assert!(!assessment.escalation);
}
