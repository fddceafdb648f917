use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::behavioral::BehavioralInsights;

/// PHQ-9 interpretation bucket, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityTier {
    Minimal,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
}

impl SeverityTier {
    pub const ALL: [SeverityTier; 5] = [
        SeverityTier::Minimal,
        SeverityTier::Mild,
        SeverityTier::Moderate,
        SeverityTier::ModeratelySevere,
        SeverityTier::Severe,
    ];

    /// Consumer-facing risk level for this tier.
    pub fn risk_level(self) -> RiskLevel {
        match self {
            SeverityTier::Minimal | SeverityTier::Mild => RiskLevel::Low,
            SeverityTier::Moderate => RiskLevel::Moderate,
            SeverityTier::ModeratelySevere => RiskLevel::High,
            SeverityTier::Severe => RiskLevel::Severe,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SeverityTier::Minimal => "minimal",
            SeverityTier::Mild => "mild",
            SeverityTier::Moderate => "moderate",
            SeverityTier::ModeratelySevere => "moderately_severe",
            SeverityTier::Severe => "severe",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Four-level risk bucket shown to staff and stored with the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Severe,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Severe => "severe",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized per-source scores that fed an assessment. Each is in [0, 1].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComponentScores {
    pub questionnaire: Option<f64>,
    pub text: Option<f64>,
    pub typing: Option<f64>,
    pub voice: Option<f64>,
}

/// Result of a single scoring call. Never persisted by the scorer itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskAssessment {
    /// Present whenever a PHQ-9 questionnaire contributed.
    pub severity: Option<SeverityTier>,
    pub risk_level: RiskLevel,
    pub escalation: bool,
    pub is_crisis: bool,
    /// PHQ-9 sum in [0, 27].
    pub raw_score: Option<u8>,
    /// Final normalized score in [0, 1]. Absent on a crisis override.
    pub score: Option<f64>,
    pub components: ComponentScores,
    /// Typing and voice readings, when a behavioral signal contributed.
    #[serde(default)]
    pub behavioral: Option<BehavioralInsights>,
    pub recommendation: Option<String>,
}
