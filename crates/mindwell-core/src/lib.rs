//! mindwell-core
//!
//! Shared vocabulary of the Mindwell scoring system: supported languages,
//! severity tiers, risk levels and the assessment shape every scorer returns.
//! No scoring logic lives here.

pub mod error;
pub mod language;
pub mod models;
