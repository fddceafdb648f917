use mindwell_core::models::assessment::{ComponentScores, RiskAssessment, RiskLevel};
use mindwell_instruments::instruments::phq9::{
    MAX_RAW_SCORE, Phq9, Phq9Interpretation, QuestionnaireResponse,
};
use mindwell_instruments::scoring::ValidationError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::behavioral::BehavioralSignal;
use crate::config::ScoringConfig;
use crate::crisis::{CrisisDetector, crisis_message, escalation_message};
use crate::error::ConfigError;
use crate::text::{SubScores, TextSignal};

/// One input to the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Signal {
    Questionnaire(QuestionnaireResponse),
    Text(TextSignal),
    Behavioral(BehavioralSignal),
}

impl Signal {
    fn kind(&self) -> &'static str {
        match self {
            Signal::Questionnaire(_) => "questionnaire",
            Signal::Text(_) => "text",
            Signal::Behavioral(_) => "behavioral",
        }
    }
}

/// Maps questionnaire answers, chat text and behavioral statistics to a
/// [`RiskAssessment`].
///
/// Holds only immutable configuration, so one instance can be shared
/// across threads and called concurrently. Identical input always yields
/// identical output.
#[derive(Debug, Clone)]
pub struct RiskScorer {
    config: ScoringConfig,
    crisis: CrisisDetector,
}

struct Questionnaire {
    interpretation: Phq9Interpretation,
    self_harm: bool,
}

impl RiskScorer {
    pub fn new(config: ScoringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let crisis = CrisisDetector::new(&config);
        Ok(Self { config, crisis })
    }

    /// Scorer using the configuration shipped with this build.
    pub fn with_embedded_config() -> Result<Self, ConfigError> {
        Self::new(ScoringConfig::embedded()?)
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn crisis_detector(&self) -> &CrisisDetector {
        &self.crisis
    }

    /// Risk level for a normalized score.
    pub fn risk_level(&self, score: f64) -> RiskLevel {
        self.config.risk_thresholds.level(score)
    }

    /// Weighted text composite for already-computed sub-scores.
    pub fn text_composite(&self, sub_scores: &SubScores) -> f64 {
        sub_scores.composite(&self.config.text_weights)
    }

    pub fn score(&self, signal: &Signal) -> Result<RiskAssessment, ValidationError> {
        self.score_all(std::slice::from_ref(signal))
    }

    pub fn score_questionnaire(
        &self,
        response: &QuestionnaireResponse,
    ) -> Result<RiskAssessment, ValidationError> {
        self.score_all(&[Signal::Questionnaire(response.clone())])
    }

    pub fn score_text(&self, signal: &TextSignal) -> Result<RiskAssessment, ValidationError> {
        self.score_all(&[Signal::Text(signal.clone())])
    }

    pub fn score_behavioral(
        &self,
        signal: &BehavioralSignal,
    ) -> Result<RiskAssessment, ValidationError> {
        self.score_all(&[Signal::Behavioral(signal.clone())])
    }

    /// Score every signal known for one subject at once.
    ///
    /// At most one signal of each kind is accepted. All signals are
    /// validated before anything is scored. A crisis keyword in the text
    /// overrides every other input. Otherwise a questionnaire and a
    /// conversation score are blended with the combined weights.
    pub fn score_all(&self, signals: &[Signal]) -> Result<RiskAssessment, ValidationError> {
        if signals.is_empty() {
            return Err(ValidationError::new(
                "signals",
                "at least one signal is required",
            ));
        }

        let mut questionnaire: Option<&QuestionnaireResponse> = None;
        let mut text: Option<&TextSignal> = None;
        let mut behavioral: Option<&BehavioralSignal> = None;
        for signal in signals {
            let duplicate = match signal {
                Signal::Questionnaire(q) => questionnaire.replace(q).is_some(),
                Signal::Text(t) => text.replace(t).is_some(),
                Signal::Behavioral(b) => behavioral.replace(b).is_some(),
            };
            if duplicate {
                return Err(ValidationError::new(
                    "signals",
                    format!("more than one {} signal supplied", signal.kind()),
                ));
            }
        }

        let questionnaire = questionnaire
            .map(|response| self.interpret_questionnaire(response))
            .transpose()?;
        if let Some(text) = text {
            text.validate()?;
        }
        if let Some(behavioral) = behavioral {
            behavioral.validate()?;
        }

        let language = text.map(TextSignal::language).unwrap_or_default();
        let behavioral_insights =
            behavioral.map(|b| b.insights(b.voice_score().map(|voice| self.risk_level(voice))));
        let questionnaire_norm = questionnaire
            .as_ref()
            .map(|q| q.interpretation.raw_score as f64 / MAX_RAW_SCORE as f64);

        if let Some(hit) = text.and_then(|t| self.crisis.detect(&t.text)) {
            warn!(
                keyword = %hit.keyword,
                keyword_language = %hit.language,
                "crisis keyword matched, overriding score"
            );
            return Ok(RiskAssessment {
                severity: questionnaire.as_ref().map(|q| q.interpretation.severity),
                risk_level: RiskLevel::Severe,
                escalation: true,
                is_crisis: true,
                raw_score: questionnaire.as_ref().map(|q| q.interpretation.raw_score),
                score: None,
                components: ComponentScores {
                    questionnaire: questionnaire_norm,
                    ..Default::default()
                },
                behavioral: behavioral_insights,
                recommendation: Some(crisis_message(language).to_string()),
            });
        }

        let text_score = text
            .map(|t| SubScores::analyze(t).map(|sub| self.text_composite(&sub)))
            .transpose()?;
        let typing_score = behavioral.and_then(BehavioralSignal::typing_score);
        let voice_score = behavioral.and_then(BehavioralSignal::voice_score);
        let conversation = self
            .config
            .modality_weights
            .blend(text_score, typing_score, voice_score);

        let (score, risk_level) = match (questionnaire.as_ref(), questionnaire_norm, conversation) {
            (Some(_), Some(q), Some(c)) => {
                let combined = self.config.combined_weights.combine(q, c);
                (combined, self.risk_level(combined))
            }
            (Some(q), Some(norm), None) => (norm, q.interpretation.risk_level),
            (_, _, Some(c)) => (c, self.risk_level(c)),
            // Every validated signal yields a questionnaire or conversation score.
            _ => {
                return Err(ValidationError::new(
                    "signals",
                    "no scorable signal supplied",
                ));
            }
        };

        let phq9 = &self.config.phq9;
        let escalation = questionnaire.as_ref().is_some_and(|q| {
            q.interpretation.severity >= phq9.escalation_tier
                || (phq9.escalate_on_self_harm_answer && q.self_harm)
        });

        let recommendation = match (&questionnaire, conversation) {
            (Some(q), None) => q.interpretation.recommendation.clone(),
            _ if escalation => escalation_message(language).to_string(),
            _ => recommendation_for(risk_level).to_string(),
        };

        debug!(
            score,
            risk_level = %risk_level,
            escalation,
            questionnaire = ?questionnaire_norm,
            text = ?text_score,
            typing = ?typing_score,
            voice = ?voice_score,
            "risk assessed"
        );

        Ok(RiskAssessment {
            severity: questionnaire.as_ref().map(|q| q.interpretation.severity),
            risk_level,
            escalation,
            is_crisis: false,
            raw_score: questionnaire.as_ref().map(|q| q.interpretation.raw_score),
            score: Some(score),
            components: ComponentScores {
                questionnaire: questionnaire_norm,
                text: text_score,
                typing: typing_score,
                voice: voice_score,
            },
            behavioral: behavioral_insights,
            recommendation: Some(recommendation),
        })
    }

    fn interpret_questionnaire(
        &self,
        response: &QuestionnaireResponse,
    ) -> Result<Questionnaire, ValidationError> {
        let raw_score = Phq9.raw_score(response)?;
        Ok(Questionnaire {
            interpretation: Phq9.interpret(raw_score, &self.config.phq9.breakpoints),
            self_harm: response.self_harm_answer().is_some_and(|answer| answer > 0),
        })
    }
}

/// General guidance for a score-derived risk level.
pub fn recommendation_for(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => {
            "Continue monitoring your mental health and keep up your self-care activities."
        }
        RiskLevel::Moderate => {
            "Regular physical activity and a steady sleep schedule can help. Keep talking with us."
        }
        RiskLevel::High => "Consider scheduling an appointment with a mental health professional.",
        RiskLevel::Severe => {
            "Please consider speaking with a mental health professional soon. Call 1926 if you need immediate support."
        }
    }
}
