use std::path::{Path, PathBuf};

use mindwell_risk::RiskScorer;
use mindwell_risk::config::ScoringConfig;

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("mindwell").join("scoring.json"))
}

/// Resolve the scoring config: an explicit path, then the user's config
/// file when one exists, then the built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> eyre::Result<ScoringConfig> {
    if let Some(path) = explicit {
        return Ok(ScoringConfig::load(path)?);
    }
    match user_config_path() {
        Some(path) if path.exists() => Ok(ScoringConfig::load(&path)?),
        _ => Ok(ScoringConfig::embedded()?),
    }
}

pub fn build_scorer(explicit: Option<&Path>) -> eyre::Result<RiskScorer> {
    Ok(RiskScorer::new(load_config(explicit)?)?)
}
