use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PauseAnalysis {
    Normal,
    LongerThanNormal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TypingConsistency {
    Consistent,
    Inconsistent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ErrorPattern {
    Normal,
    HighErrors,
}

/// Per-feature readings of a typing sample. A field is `None` when the
/// feature it depends on was not measured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TypingInsights {
    /// Words per minute above (positive) or below the baseline.
    pub speed_deviation_wpm: Option<f64>,
    pub pause_analysis: Option<PauseAnalysis>,
    pub consistency: Option<TypingConsistency>,
    pub error_pattern: Option<ErrorPattern>,
}

/// Coarse emotion label read from voice energy and pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VoiceEmotion {
    Sad,
    Happy,
    Neutral,
    Calm,
}

/// Everything a behavioral signal says beyond its scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BehavioralInsights {
    pub typing: Option<TypingInsights>,
    pub voice_emotion: Option<VoiceEmotion>,
    /// Guidance for the voice score's risk level.
    pub voice_recommendations: Vec<String>,
}
