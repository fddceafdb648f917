use mindwell_core::language::Language;
use mindwell_core::models::assessment::RiskLevel;
use mindwell_risk::text::{SubScores, TextSignal, tokenize};
use mindwell_risk::{RiskScorer, Signal};

fn scorer() -> RiskScorer {
    RiskScorer::with_embedded_config().unwrap()
}

#[test]
fn composite_example_maps_to_moderate() {
    let scorer = scorer();
    let sub = SubScores {
        keyword: 0.2,
        polarity: 0.4,
        linguistic: 0.1,
        context: 0.3,
    };
    let composite = scorer.text_composite(&sub);
    assert!((composite - 0.26).abs() < 1e-9);
    assert_eq!(scorer.risk_level(composite), RiskLevel::Moderate);
}

#[test]
fn risk_thresholds_are_half_open() {
    let scorer = scorer();
    assert_eq!(scorer.risk_level(0.0), RiskLevel::Low);
    assert_eq!(scorer.risk_level(0.2499), RiskLevel::Low);
    assert_eq!(scorer.risk_level(0.25), RiskLevel::Moderate);
    assert_eq!(scorer.risk_level(0.5), RiskLevel::High);
    assert_eq!(scorer.risk_level(0.75), RiskLevel::Severe);
    assert_eq!(scorer.risk_level(1.0), RiskLevel::Severe);
}

#[test]
fn sub_scores_for_a_low_mood_message() {
    let signal = TextSignal::new("I feel sad and hopeless, I am always tired");
    let sub = SubScores::analyze(&signal).unwrap();
    assert!((sub.keyword - 0.6).abs() < 1e-9);
    assert!((sub.polarity - 1.0).abs() < 1e-9);
    assert!((sub.linguistic - (0.5 + 0.5 / 3.0)).abs() < 1e-9);
    assert_eq!(sub.context, 0.0);

    let assessment = scorer().score_text(&signal).unwrap();
    assert_eq!(assessment.risk_level, RiskLevel::High);
    assert!(!assessment.escalation);
    assert!(!assessment.is_crisis);
    assert_eq!(assessment.severity, None);
}

#[test]
fn neutral_message_scores_low() {
    let assessment = scorer()
        .score_text(&TextSignal::new("The weather is nice today"))
        .unwrap();
    assert_eq!(assessment.score, Some(0.0));
    assert_eq!(assessment.risk_level, RiskLevel::Low);
}

#[test]
fn negated_positive_word_counts_as_negative() {
    let negated = SubScores::analyze(&TextSignal::new("honestly not good")).unwrap();
    assert_eq!(negated.polarity, 1.0);
    let plain = SubScores::analyze(&TextSignal::new("honestly good")).unwrap();
    assert_eq!(plain.polarity, 0.0);
}

#[test]
fn context_uses_recent_history_only() {
    let recent = TextSignal::new("hello").with_history(vec![0.5, 0.5]);
    assert_eq!(SubScores::analyze(&recent).unwrap().context, 0.5);

    let stale = TextSignal::new("hello").with_history(vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    assert_eq!(SubScores::analyze(&stale).unwrap().context, 0.0);
}

#[test]
fn composite_stays_in_unit_interval() {
    let scorer = scorer();
    let messages = [
        "sad depressed hopeless worthless tired empty lonely anxious worried I I I always never nothing",
        "good great happy",
        "?",
        "மகிழ்ச்சி",
    ];
    for message in messages {
        let signal = TextSignal::new(message).with_history(vec![1.0; 5]);
        let assessment = scorer.score_text(&signal).unwrap();
        let score = assessment.score.unwrap();
        assert!((0.0..=1.0).contains(&score), "{message}: {score}");
    }
}

#[test]
fn empty_text_is_a_validation_error() {
    let err = scorer().score_text(&TextSignal::new("   ")).unwrap_err();
    assert_eq!(err.field, "text");
}

#[test]
fn history_outside_unit_interval_is_a_validation_error() {
    let err = scorer()
        .score_text(&TextSignal::new("hello").with_history(vec![0.2, 1.5]))
        .unwrap_err();
    assert_eq!(err.field, "history[1]");
}

#[test]
fn declared_language_wins_over_detection() {
    let signal = TextSignal::new("hello").with_language(Language::Ta);
    assert_eq!(signal.language(), Language::Ta);
    assert_eq!(TextSignal::new("මට දුකයි").language(), Language::Si);
}

#[test]
fn tokenizer_strips_punctuation_but_keeps_contractions() {
    assert_eq!(tokenize("I'm fine, really!"), vec!["i'm", "fine", "really"]);
    assert_eq!(tokenize("“Nothing” works…"), vec!["nothing", "works"]);
}

#[test]
fn scoring_is_idempotent() {
    let scorer = scorer();
    let signal =
        Signal::Text(TextSignal::new("I am so tired of everything").with_history(vec![0.4]));
    let first = scorer.score(&signal).unwrap();
    let second = scorer.score(&signal).unwrap();
    assert_eq!(first, second);
}

#[test]
fn english_keywords_match_whole_words_only() {
    let sub = SubScores::analyze(&TextSignal::new(
        "The crusade painting was a numbered deathmatch",
    ))
    .unwrap();
    assert_eq!(sub.keyword, 0.0);

    let sub = SubScores::analyze(&TextSignal::new("Sad. Numb, in pain!")).unwrap();
    assert!((sub.keyword - 0.6).abs() < 1e-9);
}

#[test]
fn sinhala_keywords_match_with_suffixes() {
    let sub = SubScores::analyze(&TextSignal::new("මට දුකයි")).unwrap();
    assert!((sub.keyword - 0.2).abs() < 1e-9);
}
