use mindwell_core::language::Language;
use mindwell_core::models::assessment::RiskAssessment;
use mindwell_instruments::scoring::ValidationError;
use mindwell_risk::RiskScorer;
use mindwell_risk::crisis::crisis_message;
use mindwell_risk::text::TextSignal;
use serde::Serialize;
use tracing::warn;

use crate::intent::{self, Intent};
use crate::safety::check_template;
use crate::templates::{self, LAST_RESORT};

/// Where the reply text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    /// A template for the classified intent.
    Template,
    /// The default empathetic list: no intent matched, or the intent's
    /// template was rejected.
    Default,
    /// The fixed crisis message.
    Crisis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub text: String,
    pub intent: Option<Intent>,
    pub language: Language,
    pub source: ReplySource,
}

/// A reply together with the risk assessment of the message it answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatTurn {
    pub reply: Reply,
    pub assessment: RiskAssessment,
}

/// Picks a vetted template for `message`. Never fails: unknown intents
/// and rejected templates fall back to the default empathetic replies.
///
/// The choice within a template list depends only on the normalized
/// message, so the same message always gets the same reply.
pub fn select_response(message: &str, language: Language) -> Reply {
    let key = stable_hash(&normalize(message));
    let intent = intent::classify(message);

    if let Some(intent) = intent {
        if let Some(candidates) = templates::templates_for(language, intent) {
            if !candidates.is_empty() {
                let text = pick(candidates, key);
                match check_template(text, language) {
                    Ok(()) => {
                        return Reply {
                            text: text.to_string(),
                            intent: Some(intent),
                            language,
                            source: ReplySource::Template,
                        };
                    }
                    Err(violation) => {
                        warn!(%intent, %language, %violation, "rejected response template");
                    }
                }
            }
        }
    }

    Reply {
        text: default_reply(language, key).to_string(),
        intent,
        language,
        source: ReplySource::Default,
    }
}

/// Scores `signal` and answers it: the crisis message when a crisis
/// keyword fired, a template otherwise.
pub fn respond(scorer: &RiskScorer, signal: &TextSignal) -> Result<ChatTurn, ValidationError> {
    let assessment = scorer.score_text(signal)?;
    let language = signal.language();

    let reply = if assessment.is_crisis {
        Reply {
            text: crisis_message(language).to_string(),
            intent: None,
            language,
            source: ReplySource::Crisis,
        }
    } else {
        select_response(&signal.text, language)
    };

    Ok(ChatTurn { reply, assessment })
}

fn default_reply(language: Language, key: u64) -> &'static str {
    let defaults = templates::default_empathetic(language);
    let start = if defaults.is_empty() {
        0
    } else {
        (key % defaults.len() as u64) as usize
    };

    // Rotate from the hashed position so a rejected default does not pin
    // every message to the same reply.
    defaults[start..]
        .iter()
        .chain(&defaults[..start])
        .copied()
        .find(|text| match check_template(text, language) {
            Ok(()) => true,
            Err(violation) => {
                warn!(%language, %violation, "rejected default response");
                false
            }
        })
        .unwrap_or(LAST_RESORT)
}

fn pick(candidates: &'static [&'static str], key: u64) -> &'static str {
    candidates[(key % candidates.len() as u64) as usize]
}

fn normalize(message: &str) -> String {
    message
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// 64-bit FNV-1a. Stable across runs and platforms, unlike the std hasher.
fn stable_hash(text: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    text.bytes()
        .fold(OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME))
}
