use std::collections::BTreeMap;

use mindwell_core::language::Language;
use mindwell_core::models::assessment::{RiskLevel, SeverityTier};
use mindwell_instruments::Instrument;
use mindwell_instruments::instruments::phq9::{
    Phq9, QuestionnaireResponse, SeverityBreakpoints, parse_answer,
};
use mindwell_instruments::scoring::ScoreEntry;

#[test]
fn defines_nine_rating_items() {
    let domains = Phq9.domains();
    assert_eq!(domains.len(), 1);
    assert_eq!(domains[0].subscales.len(), 9);
    assert!(domains[0].subscales.iter().all(|s| s.range.min == 0.0 && s.range.max == 3.0));
}

#[test]
fn raw_score_sums_answers() {
    let response = QuestionnaireResponse::new(vec![2, 2, 1, 2, 1, 2, 1, 1, 0]);
    assert_eq!(Phq9.raw_score(&response).unwrap(), 12);
}

#[test]
fn rejects_out_of_range_answer() {
    let response = QuestionnaireResponse::new(vec![0, 0, 0, 4, 0, 0, 0, 0, 0]);
    let err = Phq9.raw_score(&response).unwrap_err();
    assert_eq!(err.field, "q4");
    assert_eq!(err.value, Some(4.0));
    assert!(err.message.contains("outside range"));
}

#[test]
fn rejects_wrong_answer_count() {
    let short = QuestionnaireResponse::new(vec![1, 1, 1]);
    let err = Phq9.raw_score(&short).unwrap_err();
    assert_eq!(err.field, "answers");

    let long = QuestionnaireResponse::new(vec![0; 10]);
    assert!(Phq9.raw_score(&long).is_err());
}

#[test]
fn validate_scores_flags_unknown_items() {
    let errors = Phq9.validate_scores(&[ScoreEntry {
        subscale_id: "q10".to_string(),
        value: 1.0,
    }]);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("unknown item"));
}

#[test]
fn validate_scores_rejects_fractional_ratings() {
    let errors = Phq9.validate_scores(&[ScoreEntry {
        subscale_id: "q1".to_string(),
        value: 1.5,
    }]);
    assert_eq!(errors.len(), 1);
}

#[test]
fn every_raw_score_lands_in_exactly_one_tier() {
    let breakpoints = SeverityBreakpoints::default();
    for raw in 0..=27u8 {
        let expected = match raw {
            0..=4 => SeverityTier::Minimal,
            5..=9 => SeverityTier::Mild,
            10..=14 => SeverityTier::Moderate,
            15..=19 => SeverityTier::ModeratelySevere,
            _ => SeverityTier::Severe,
        };
        assert_eq!(breakpoints.tier(raw), expected, "raw score {raw}");
    }
}

#[test]
fn tiers_are_monotonic_in_raw_score() {
    let breakpoints = SeverityBreakpoints::default();
    let tiers: Vec<_> = (0..=27u8).map(|raw| breakpoints.tier(raw)).collect();
    assert!(tiers.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn default_breakpoints_are_well_formed() {
    assert!(SeverityBreakpoints::default().is_well_formed());
    let broken = SeverityBreakpoints {
        mild: 5,
        moderate: 15,
        moderately_severe: 10,
        severe: 20,
    };
    assert!(!broken.is_well_formed());

    let mild_at_zero = SeverityBreakpoints {
        mild: 0,
        ..SeverityBreakpoints::default()
    };
    assert!(!mild_at_zero.is_well_formed());

    let past_max = SeverityBreakpoints {
        severe: 28,
        ..SeverityBreakpoints::default()
    };
    assert!(!past_max.is_well_formed());
}

#[test]
fn interpretation_carries_risk_level_and_recommendation() {
    let interpretation = Phq9.interpret(25, &SeverityBreakpoints::default());
    assert_eq!(interpretation.severity, SeverityTier::Severe);
    assert_eq!(interpretation.risk_level, RiskLevel::Severe);
    assert!(interpretation.recommendation.contains("1926"));
}

#[test]
fn numbered_answers_assemble_in_order() {
    let answers: BTreeMap<u8, u8> = (1..=9).map(|n| (n, n % 4)).collect();
    assert!(Phq9.is_complete(&answers));
    let response = QuestionnaireResponse::from_numbered(&answers).unwrap();
    assert_eq!(response.answers, vec![1, 2, 3, 0, 1, 2, 3, 0, 1]);
    assert_eq!(response.self_harm_answer(), Some(1));
}

#[test]
fn numbered_answers_report_missing_question() {
    let mut answers: BTreeMap<u8, u8> = (1..=9).map(|n| (n, 0)).collect();
    answers.remove(&6);
    assert!(!Phq9.is_complete(&answers));
    let err = QuestionnaireResponse::from_numbered(&answers).unwrap_err();
    assert_eq!(err.field, "q6");
}

#[test]
fn next_question_stops_after_ninth() {
    assert_eq!(Phq9.next_question(1), Some(2));
    assert_eq!(Phq9.next_question(8), Some(9));
    assert_eq!(Phq9.next_question(9), None);
}

#[test]
fn questions_are_localized() {
    let en = Phq9.question(9, Language::En).unwrap();
    assert!(en.contains("hurting yourself"));
    let ta = Phq9.question(1, Language::Ta).unwrap();
    assert_eq!(Language::detect(ta), Language::Ta);
    let si = Phq9.question(1, Language::Si).unwrap();
    assert_eq!(Language::detect(si), Language::Si);
    assert!(Phq9.question(0, Language::En).is_err());
    assert!(Phq9.question(10, Language::En).is_err());
}

#[test]
fn formatted_question_lists_numbered_options() {
    let text = Phq9.format_question_with_options(2, Language::En).unwrap();
    assert!(text.contains("0. Not at all"));
    assert!(text.contains("3. Nearly every day"));
}

#[test]
fn parses_numeric_and_phrase_answers() {
    assert_eq!(parse_answer(" 2 "), Some(2));
    assert_eq!(parse_answer("4"), None);
    assert_eq!(parse_answer("Not at all"), Some(0));
    assert_eq!(parse_answer("several days I guess"), Some(1));
    assert_eq!(parse_answer("more than half the days"), Some(2));
    assert_eq!(parse_answer("Nearly every day"), Some(3));
    assert_eq!(parse_answer("දිනපතාම"), Some(3));
    assert_eq!(parse_answer("சில நாட்கள்"), Some(1));
    assert_eq!(parse_answer("banana"), None);
    assert_eq!(parse_answer("no"), Some(0));
    assert_eq!(parse_answer("Nope."), Some(0));
    assert_eq!(parse_answer("no, not really"), Some(0));
    assert_eq!(parse_answer("I don't know"), None);
    assert_eq!(parse_answer("not sure"), None);
}

#[test]
fn validation_error_serializes_its_context() {
    let err = Phq9
        .raw_score(&QuestionnaireResponse::new([0, 0, 0, 0, 7, 0, 0, 0, 0]))
        .unwrap_err();
    let json = serde_json::to_value(&err).unwrap();

    assert_eq!(json["field"], "q5");
    assert_eq!(json["value"], 7.0);
    assert_eq!(json["expected_range"]["max"], 3.0);
}
