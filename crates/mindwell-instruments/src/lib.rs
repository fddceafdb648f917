//! mindwell-instruments
//!
//! Questionnaire instrument definitions. Pure data plus validation: item
//! ranges, localized wording, and the score interpretation for each
//! supported screening instrument.

pub mod error;
pub mod instruments;
pub mod scoring;

use scoring::{Domain, ScoreEntry, ValidationError};

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "phq9").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PHQ-9").
    fn name(&self) -> &str;

    /// The domains and items this instrument measures.
    fn domains(&self) -> &[Domain];

    /// Validate a set of item scores against this instrument's rules.
    ///
    /// Entries naming an item the instrument does not define are reported
    /// too.
    fn validate_scores(&self, scores: &[ScoreEntry]) -> Vec<ValidationError> {
        let all_items: Vec<_> = self
            .domains()
            .iter()
            .flat_map(|d| &d.subscales)
            .collect();

        let mut errors = Vec::new();
        for entry in scores {
            match all_items.iter().find(|s| s.id == entry.subscale_id) {
                Some(item) if !item.range.contains(entry.value) => {
                    errors.push(ValidationError {
                        field: entry.subscale_id.clone(),
                        value: Some(entry.value),
                        expected_range: Some(item.range),
                        message: format!(
                            "{}: {} score {} is outside range [{}, {}]",
                            self.name(),
                            item.name,
                            entry.value,
                            item.range.min,
                            item.range.max,
                        ),
                    });
                }
                Some(_) => {}
                None => errors.push(ValidationError::new(
                    &entry.subscale_id,
                    format!("{}: unknown item '{}'", self.name(), entry.subscale_id),
                )),
            }
        }
        errors
    }
}
