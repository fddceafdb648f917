use std::path::Path;

use mindwell_chat::reply::{ChatTurn, respond};
use mindwell_chat::safety::{SafetyReport, analyze_message_safety};
use mindwell_core::language::Language;
use mindwell_core::models::record::AssessmentRecord;
use mindwell_instruments::instruments::phq9::{ITEM_COUNT, Phq9};
use mindwell_risk::config::ScoringConfig;
use mindwell_risk::text::TextSignal;
use mindwell_risk::{RiskScorer, Signal};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub signals: Vec<Signal>,
}

#[derive(Debug, Serialize)]
pub struct ReplyOutput {
    #[serde(flatten)]
    pub turn: ChatTurn,
    pub safety: SafetyReport,
}

/// Scores a JSON request and returns the assessment (or a session record)
/// as pretty JSON.
pub fn score(scorer: &RiskScorer, request: &str, session: Option<&str>) -> eyre::Result<String> {
    let request: ScoreRequest = serde_json::from_str(request)?;
    let assessment = scorer.score_all(&request.signals)?;

    match session {
        Some(session_id) => {
            let record = AssessmentRecord::for_session(session_id, assessment)?;
            if record.needs_alert() {
                info!(
                    session_id = %record.session_id,
                    record_id = %record.id,
                    "assessment needs alert"
                );
            }
            Ok(serde_json::to_string_pretty(&record)?)
        }
        None => Ok(serde_json::to_string_pretty(&assessment)?),
    }
}

pub fn reply(
    scorer: &RiskScorer,
    message: &str,
    language: Option<&str>,
    history: Vec<f64>,
) -> eyre::Result<String> {
    let mut signal = TextSignal::new(message).with_history(history);
    if let Some(tag) = language {
        signal = signal.with_language(Language::from_tag(tag));
    }

    let turn = respond(scorer, &signal)?;
    let safety = analyze_message_safety(scorer, message, signal.language());
    Ok(serde_json::to_string_pretty(&ReplyOutput { turn, safety })?)
}

/// All nine PHQ-9 questions with numbered options, separated by blank lines.
pub fn questions(language: &str) -> eyre::Result<String> {
    let language = Language::from_tag(language);
    let phq9 = Phq9;
    let mut blocks = Vec::with_capacity(ITEM_COUNT);

    let mut current = Some(1);
    while let Some(number) = current {
        let block = phq9.format_question_with_options(number, language)?;
        blocks.push(format!("{number}. {block}"));
        current = phq9.next_question(number);
    }
    Ok(blocks.join("\n\n"))
}

pub fn show_config(config: &ScoringConfig) -> eyre::Result<String> {
    Ok(config.to_json_pretty()?)
}

pub fn check_config(path: &Path) -> eyre::Result<String> {
    let config = ScoringConfig::load(path)?;
    Ok(format!(
        "{}: ok (config_version {})",
        path.display(),
        config.config_version
    ))
}
