//! mindwell-risk
//!
//! Depression risk scoring. Turns PHQ-9 answers, chat text and typing or
//! voice statistics into a [`RiskAssessment`] with an escalation decision.
//! Pure and synchronous: no I/O happens while scoring, and the only failure
//! is a [`ValidationError`] for malformed input.
//!
//! [`RiskAssessment`]: mindwell_core::models::assessment::RiskAssessment
//! [`ValidationError`]: mindwell_instruments::scoring::ValidationError

pub mod behavioral;
pub mod config;
pub mod crisis;
pub mod error;
pub mod lexicon;
pub mod scorer;
pub mod text;

pub use scorer::{RiskScorer, Signal};
