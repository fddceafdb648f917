use std::collections::BTreeMap;
use std::fmt;

use mindwell_core::models::assessment::RiskLevel;
use mindwell_core::models::behavioral::{
    BehavioralInsights, ErrorPattern, PauseAnalysis, TypingConsistency, TypingInsights,
    VoiceEmotion,
};
use mindwell_instruments::scoring::{ScoreRange, ValidationError};
use serde::{Deserialize, Serialize};

/// Typing speed treated as unremarkable.
pub const BASELINE_TYPING_WPM: f64 = 40.0;
/// Pause between bursts treated as unremarkable, in seconds.
pub const BASELINE_PAUSE_SECS: f64 = 0.5;
/// Pitch at or above which the voice pitch factor is zero.
pub const PITCH_CEILING_HZ: f64 = 300.0;

/// Keystroke timing variance above which typing reads as inconsistent.
const INCONSISTENT_VARIANCE: f64 = 0.5;
/// Correction rate above which typing reads as error-prone.
const HIGH_ERROR_RATE: f64 = 0.1;

const NON_NEGATIVE: ScoreRange = ScoreRange {
    min: 0.0,
    max: f64::MAX,
    step: None,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BehavioralFeature {
    TypingSpeedWpm,
    PauseDurationSecs,
    /// Fraction of keystrokes that were corrections.
    ErrorRate,
    KeystrokeTimingVariance,
    VoicePitchHz,
    /// Mean RMS energy of the recording.
    VoiceEnergy,
}

impl BehavioralFeature {
    pub fn name(self) -> &'static str {
        match self {
            BehavioralFeature::TypingSpeedWpm => "typing_speed_wpm",
            BehavioralFeature::PauseDurationSecs => "pause_duration_secs",
            BehavioralFeature::ErrorRate => "error_rate",
            BehavioralFeature::KeystrokeTimingVariance => "keystroke_timing_variance",
            BehavioralFeature::VoicePitchHz => "voice_pitch_hz",
            BehavioralFeature::VoiceEnergy => "voice_energy",
        }
    }

    pub fn range(self) -> ScoreRange {
        match self {
            BehavioralFeature::ErrorRate => ScoreRange::UNIT,
            _ => NON_NEGATIVE,
        }
    }

    pub fn is_typing(self) -> bool {
        matches!(
            self,
            BehavioralFeature::TypingSpeedWpm
                | BehavioralFeature::PauseDurationSecs
                | BehavioralFeature::ErrorRate
                | BehavioralFeature::KeystrokeTimingVariance
        )
    }
}

impl fmt::Display for BehavioralFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Aggregate typing and voice statistics for one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BehavioralSignal {
    pub features: BTreeMap<BehavioralFeature, f64>,
}

impl BehavioralSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, feature: BehavioralFeature, value: f64) -> Self {
        self.features.insert(feature, value);
        self
    }

    pub fn get(&self, feature: BehavioralFeature) -> Option<f64> {
        self.features.get(&feature).copied()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.features.is_empty() {
            return Err(ValidationError::new(
                "features",
                "behavioral signal has no features",
            ));
        }
        for (feature, value) in &self.features {
            let range = feature.range();
            if range.contains(*value) {
                continue;
            }
            if range == NON_NEGATIVE {
                return Err(ValidationError {
                    field: feature.name().to_string(),
                    value: Some(*value),
                    expected_range: Some(range),
                    message: format!("{feature} must be a finite non-negative number, got {value}"),
                });
            }
            return Err(ValidationError::out_of_range(feature.name(), *value, range));
        }
        Ok(())
    }

    fn has_typing(&self) -> bool {
        self.features.keys().any(|f| f.is_typing())
    }

    fn has_voice(&self) -> bool {
        self.features.keys().any(|f| !f.is_typing())
    }

    /// Typing score in [0, 1], or `None` without any typing feature.
    ///
    /// Slow typing, long pauses, frequent corrections and irregular
    /// keystroke timing each push the score up. Missing features
    /// contribute nothing.
    pub fn typing_score(&self) -> Option<f64> {
        if !self.has_typing() {
            return None;
        }
        let speed = self
            .get(BehavioralFeature::TypingSpeedWpm)
            .map_or(0.0, |wpm| (1.0 - wpm / BASELINE_TYPING_WPM).max(0.0));
        let pause = self
            .get(BehavioralFeature::PauseDurationSecs)
            .map_or(0.0, |secs| (secs / (BASELINE_PAUSE_SECS * 2.0)).min(1.0));
        let errors = self
            .get(BehavioralFeature::ErrorRate)
            .map_or(0.0, |rate| (rate * 10.0).min(1.0));
        let variance = self
            .get(BehavioralFeature::KeystrokeTimingVariance)
            .map_or(0.0, |v| v.min(1.0));

        let score = 0.3 * speed + 0.3 * pause + 0.2 * errors + 0.2 * variance;
        Some(score.clamp(0.0, 1.0))
    }

    /// Voice score in [0, 1], or `None` without any voice feature.
    ///
    /// Low pitch and low energy push the score up; a constant 0.2 floor
    /// keeps a flat recording from reading as entirely unremarkable.
    pub fn voice_score(&self) -> Option<f64> {
        if !self.has_voice() {
            return None;
        }
        let pitch = self
            .get(BehavioralFeature::VoicePitchHz)
            .map_or(0.0, |hz| (1.0 - hz / PITCH_CEILING_HZ).max(0.0));
        let energy = self
            .get(BehavioralFeature::VoiceEnergy)
            .map_or(0.0, |e| (1.0 - e * 10.0).max(0.0));

        let score = 0.4 * pitch + 0.4 * energy + 0.2;
        Some(score.clamp(0.0, 1.0))
    }

    /// Threshold readings of the typing features, or `None` without any
    /// typing feature.
    pub fn typing_insights(&self) -> Option<TypingInsights> {
        if !self.has_typing() {
            return None;
        }
        Some(TypingInsights {
            speed_deviation_wpm: self
                .get(BehavioralFeature::TypingSpeedWpm)
                .map(|wpm| wpm - BASELINE_TYPING_WPM),
            pause_analysis: self.get(BehavioralFeature::PauseDurationSecs).map(|secs| {
                if secs > BASELINE_PAUSE_SECS {
                    PauseAnalysis::LongerThanNormal
                } else {
                    PauseAnalysis::Normal
                }
            }),
            consistency: self
                .get(BehavioralFeature::KeystrokeTimingVariance)
                .map(|variance| {
                    if variance > INCONSISTENT_VARIANCE {
                        TypingConsistency::Inconsistent
                    } else {
                        TypingConsistency::Consistent
                    }
                }),
            error_pattern: self.get(BehavioralFeature::ErrorRate).map(|rate| {
                if rate > HIGH_ERROR_RATE {
                    ErrorPattern::HighErrors
                } else {
                    ErrorPattern::Normal
                }
            }),
        })
    }

    /// Emotion label from voice energy and pitch. Needs both features.
    pub fn voice_emotion(&self) -> Option<VoiceEmotion> {
        let energy = self.get(BehavioralFeature::VoiceEnergy)?;
        let pitch = self.get(BehavioralFeature::VoicePitchHz)?;

        let emotion = if energy < 0.1 && pitch < 150.0 {
            VoiceEmotion::Sad
        } else if energy > 0.3 && pitch > 250.0 {
            VoiceEmotion::Happy
        } else if energy > 0.2 {
            VoiceEmotion::Neutral
        } else {
            VoiceEmotion::Calm
        };
        Some(emotion)
    }

    /// Typing insights, voice emotion and voice guidance together.
    /// `voice_level` is the risk level of the voice score, when there is one.
    pub fn insights(&self, voice_level: Option<RiskLevel>) -> BehavioralInsights {
        BehavioralInsights {
            typing: self.typing_insights(),
            voice_emotion: self.voice_emotion(),
            voice_recommendations: voice_level
                .map(|level| {
                    voice_recommendations(level)
                        .iter()
                        .map(|r| r.to_string())
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

/// Self-care guidance for a voice risk level.
pub fn voice_recommendations(level: RiskLevel) -> &'static [&'static str; 2] {
    match level {
        RiskLevel::Severe => &[
            "Please consider speaking with a mental health professional immediately.",
            "Contact emergency services if you're in crisis.",
        ],
        RiskLevel::High => &[
            "Consider scheduling an appointment with a therapist.",
            "Practice mindfulness and relaxation techniques.",
        ],
        RiskLevel::Moderate => &[
            "Engage in regular physical activity.",
            "Maintain a regular sleep schedule.",
        ],
        RiskLevel::Low => &[
            "Continue monitoring your mental health.",
            "Practice self-care activities.",
        ],
    }
}
