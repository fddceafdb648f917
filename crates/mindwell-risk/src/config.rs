//! Versioned scoring configuration.
//!
//! Clinical thresholds and keyword lists live in JSON so they can be
//! audited and changed without a code change. The build embeds
//! `config/scoring.json` as the default; deployments may load their own
//! file, which is migrated forward to [`CURRENT_VERSION`] before use.

use std::collections::BTreeMap;
use std::path::Path;

use mindwell_core::language::Language;
use mindwell_core::models::assessment::{RiskLevel, SeverityTier};
use mindwell_instruments::instruments::phq9::SeverityBreakpoints;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

const EMBEDDED: &str = include_str!("../config/scoring.json");

const WEIGHT_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub phq9: Phq9Config,
    pub risk_thresholds: RiskThresholds,
    pub text_weights: TextWeights,
    pub combined_weights: CombinedWeights,
    pub modality_weights: ModalityWeights,
    pub crisis_keywords: BTreeMap<Language, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phq9Config {
    pub breakpoints: SeverityBreakpoints,
    /// Lowest tier that escalates on its own.
    pub escalation_tier: SeverityTier,
    /// Escalate whenever question 9 is answered above zero.
    pub escalate_on_self_harm_answer: bool,
}

/// Lower bounds of the score-derived risk levels. Anything below
/// `moderate` is low.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub moderate: f64,
    pub high: f64,
    pub severe: f64,
}

impl RiskThresholds {
    pub fn level(&self, score: f64) -> RiskLevel {
        if score >= self.severe {
            RiskLevel::Severe
        } else if score >= self.high {
            RiskLevel::High
        } else if score >= self.moderate {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }
}

/// Weights of the four text sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextWeights {
    pub keyword: f64,
    pub polarity: f64,
    pub linguistic: f64,
    pub context: f64,
}

/// Weights used when a questionnaire and a conversation score coexist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombinedWeights {
    pub questionnaire: f64,
    pub conversation: f64,
}

impl CombinedWeights {
    pub fn combine(&self, questionnaire: f64, conversation: f64) -> f64 {
        (self.questionnaire * questionnaire + self.conversation * conversation).clamp(0.0, 1.0)
    }
}

/// Relative weights of the conversation-side sources. Renormalized over
/// whichever sources are present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModalityWeights {
    pub text: f64,
    pub typing: f64,
    pub voice: f64,
}

impl Default for ModalityWeights {
    fn default() -> Self {
        Self {
            text: 0.3,
            typing: 0.3,
            voice: 0.4,
        }
    }
}

impl ModalityWeights {
    pub fn blend(&self, text: Option<f64>, typing: Option<f64>, voice: Option<f64>) -> Option<f64> {
        let parts = [(text, self.text), (typing, self.typing), (voice, self.voice)];
        let (sum, total_weight) = parts
            .iter()
            .filter_map(|(score, weight)| score.map(|s| (s * weight, *weight)))
            .fold((0.0, 0.0), |(sum, total), (part, weight)| (sum + part, total + weight));

        (total_weight > 0.0).then(|| (sum / total_weight).clamp(0.0, 1.0))
    }
}

impl ScoringConfig {
    /// The configuration shipped with this build.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&contents)?;
        tracing::info!(
            path = %path.display(),
            version = config.config_version,
            escalation_score = config.phq9.breakpoints.lower_bound(config.phq9.escalation_tier),
            "scoring config loaded"
        );
        Ok(config)
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        // Parse as raw JSON so we can run migrations before deserializing.
        let json: serde_json::Value = serde_json::from_str(contents)?;
        let on_disk_version = json
            .get("config_version")
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32;

        let migrated = migrate(json, on_disk_version)?;
        let config: ScoringConfig = serde_json::from_value(migrated)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configs whose thresholds or weights cannot produce a
    /// meaningful assessment.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.phq9.breakpoints.is_well_formed() {
            return Err(ConfigError::Invalid(format!(
                "PHQ-9 breakpoints must be strictly increasing within 1..=27: {:?}",
                self.phq9.breakpoints
            )));
        }

        let escalation_score = self.phq9.breakpoints.lower_bound(self.phq9.escalation_tier);
        if escalation_score == 0 {
            return Err(ConfigError::Invalid(format!(
                "escalation tier '{}' starts at raw score 0, so every questionnaire would escalate",
                self.phq9.escalation_tier
            )));
        }

        let t = self.risk_thresholds;
        let ordered =
            0.0 < t.moderate && t.moderate < t.high && t.high < t.severe && t.severe <= 1.0;
        if !ordered {
            return Err(ConfigError::Invalid(format!(
                "risk thresholds must satisfy 0 < moderate < high < severe <= 1: {t:?}"
            )));
        }

        let w = self.text_weights;
        check_weights("text_weights", &[w.keyword, w.polarity, w.linguistic, w.context])?;
        let c = self.combined_weights;
        check_weights("combined_weights", &[c.questionnaire, c.conversation])?;
        let m = self.modality_weights;
        check_weights("modality_weights", &[m.text, m.typing, m.voice])?;

        for language in Language::ALL {
            let keywords = self.crisis_keywords.get(&language).ok_or_else(|| {
                ConfigError::Invalid(format!("no crisis keywords for language '{language}'"))
            })?;
            if keywords.is_empty() || keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(ConfigError::Invalid(format!(
                    "crisis keywords for '{language}' must be non-empty strings"
                )));
            }
        }

        Ok(())
    }
}

fn check_weights(name: &str, weights: &[f64]) -> Result<(), ConfigError> {
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(ConfigError::Invalid(format!(
            "{name} must be finite and non-negative: {weights:?}"
        )));
    }
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(ConfigError::Invalid(format!("{name} must sum to 1, got {sum}")));
    }
    Ok(())
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(
    mut json: serde_json::Value,
    from_version: u32,
) -> Result<serde_json::Value, ConfigError> {
    if from_version > CURRENT_VERSION {
        return Err(ConfigError::UnsupportedVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: behavioral signals added modality_weights
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| ConfigError::Invalid("config is not a JSON object".to_string()))?;
        if !obj.contains_key("modality_weights") {
            obj.insert(
                "modality_weights".to_string(),
                serde_json::to_value(ModalityWeights::default())?,
            );
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated scoring config v0 → v1 (added modality_weights)");
    }

    Ok(json)
}
