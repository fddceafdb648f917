use std::collections::HashSet;

use mindwell_core::language::Language;
use mindwell_instruments::scoring::{ScoreRange, ValidationError};
use serde::{Deserialize, Serialize};

use crate::config::TextWeights;
use crate::lexicon;

/// Number of earlier turns the context heuristic looks back over.
pub const CONTEXT_WINDOW: usize = 5;

const KEYWORD_SATURATION: f64 = 5.0;
const FIRST_PERSON_SATURATION: f64 = 0.2;
const ABSOLUTIST_SATURATION: f64 = 3.0;

const NEGATORS: &[&str] = &["not", "no", "never", "don't", "dont", "isn't", "can't", "cannot"];

/// One chat message to score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSignal {
    pub text: String,
    /// Declared language. Detected from the script when absent.
    #[serde(default)]
    pub language: Option<Language>,
    /// Composite scores of earlier messages in the same session, oldest
    /// first.
    #[serde(default)]
    pub history: Vec<f64>,
}

impl TextSignal {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: None,
            history: Vec::new(),
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn with_history(mut self, history: Vec<f64>) -> Self {
        self.history = history;
        self
    }

    pub fn language(&self) -> Language {
        self.language.unwrap_or_else(|| Language::detect(&self.text))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::new("text", "message text is empty"));
        }
        for (i, score) in self.history.iter().enumerate() {
            if !ScoreRange::UNIT.contains(*score) {
                return Err(ValidationError::out_of_range(
                    format!("history[{i}]"),
                    *score,
                    ScoreRange::UNIT,
                ));
            }
        }
        Ok(())
    }
}

/// The four independent text heuristics, each in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub keyword: f64,
    pub polarity: f64,
    pub linguistic: f64,
    pub context: f64,
}

impl SubScores {
    pub fn analyze(signal: &TextSignal) -> Result<Self, ValidationError> {
        signal.validate()?;
        let lowered = signal.text.to_lowercase();
        let tokens = tokenize(&lowered);
        Ok(Self {
            keyword: keyword_score(&lowered, &tokens),
            polarity: polarity_score(&tokens),
            linguistic: linguistic_score(&tokens),
            context: context_score(&signal.history),
        })
    }

    pub fn composite(&self, weights: &TextWeights) -> f64 {
        let score = weights.keyword * self.keyword
            + weights.polarity * self.polarity
            + weights.linguistic * self.linguistic
            + weights.context * self.context;
        score.clamp(0.0, 1.0)
    }
}

/// Lowercased whitespace tokens with surrounding punctuation removed.
/// Apostrophes inside words are kept so contractions stay whole.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|raw| {
            raw.replace('\u{2019}', "'")
                .trim_matches(|c: char| is_punctuation(c) || c == '\'')
                .to_lowercase()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/// Typographic quotes, ellipsis, dashes and the Sinhala kunddaliya.
const EXTRA_PUNCTUATION: &[char] = &[
    '\u{2018}', '\u{201C}', '\u{201D}', '\u{2026}', '\u{2013}', '\u{2014}', '\u{0DF4}',
];

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || EXTRA_PUNCTUATION.contains(&c)
}

fn keyword_score(lowered: &str, tokens: &[String]) -> f64 {
    let hits = lexicon::NEGATIVE_KEYWORDS
        .iter()
        .filter(|keyword| keyword_matches(lowered, tokens, keyword))
        .count();
    (hits as f64 / KEYWORD_SATURATION).min(1.0)
}

/// Phrases match anywhere. English words must equal a token, so "sad"
/// does not fire inside "crusade". Sinhala and Tamil words may start a
/// token since case suffixes attach to the stem.
fn keyword_matches(lowered: &str, tokens: &[String], keyword: &str) -> bool {
    if keyword.contains(' ') {
        lowered.contains(keyword)
    } else if keyword.is_ascii() {
        tokens.iter().any(|token| token == keyword)
    } else {
        tokens.iter().any(|token| token.starts_with(keyword))
    }
}

/// Share of polar tokens that are negative. A positive word right after a
/// negator ("not good") counts as negative.
fn polarity_score(tokens: &[String]) -> f64 {
    let negative: HashSet<&str> = lexicon::NEGATIVE_WORDS.iter().copied().collect();
    let positive: HashSet<&str> = lexicon::POSITIVE_WORDS.iter().copied().collect();

    let mut neg = 0usize;
    let mut pos = 0usize;
    for (i, token) in tokens.iter().enumerate() {
        let negated = i > 0 && NEGATORS.contains(&tokens[i - 1].as_str());
        if negative.contains(token.as_str()) {
            neg += 1;
        } else if positive.contains(token.as_str()) {
            if negated {
                neg += 1;
            } else {
                pos += 1;
            }
        }
    }

    if neg + pos == 0 {
        0.0
    } else {
        neg as f64 / (neg + pos) as f64
    }
}

/// Self-focus and all-or-nothing language, weighted equally.
fn linguistic_score(tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let first_person = tokens
        .iter()
        .filter(|t| lexicon::FIRST_PERSON.contains(&t.as_str()))
        .count();
    let absolutist = tokens
        .iter()
        .filter(|t| lexicon::ABSOLUTIST.contains(&t.as_str()))
        .count();

    let ratio = first_person as f64 / tokens.len() as f64;
    let self_focus = (ratio / FIRST_PERSON_SATURATION).min(1.0);
    let all_or_nothing = (absolutist as f64 / ABSOLUTIST_SATURATION).min(1.0);
    0.5 * self_focus + 0.5 * all_or_nothing
}

fn context_score(history: &[f64]) -> f64 {
    let recent = &history[history.len().saturating_sub(CONTEXT_WINDOW)..];
    if recent.is_empty() {
        return 0.0;
    }
    (recent.iter().sum::<f64>() / recent.len() as f64).clamp(0.0, 1.0)
}
