use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::alignment::needleman::GlobalWeights;
use crate::alignment::scoring::Weighting;
use crate::error::ScoringError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignerKind {
    Dtw,
    #[default]
    Needleman,
}

impl AlignerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dtw => "dtw",
            Self::Needleman => "needleman",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub algorithm: AlignerKind,
    pub match_weight: f64,
    pub substitution_penalty: f64,
    pub gap_penalty: f64,
    /// Added to purely vertical or horizontal DTW moves.
    pub boundary_penalty: f64,
    /// Candidates below this probability do not count as heard.
    pub probability_threshold: f32,
    pub blank_symbol: String,
    pub weighting: Weighting,
    /// Phoneme tables JSON; the built-in Hebrew tables are used when unset.
    pub tables_path: Option<String>,
}

impl ScoringConfig {
    pub const DEFAULT_PROBABILITY_THRESHOLD: f32 = 0.3;
    pub const DEFAULT_BLANK_SYMBOL: &'static str = "<blk>";

    pub fn load(path: &Path) -> Result<Self, ScoringError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| ScoringError::io("read scoring config", e))?;
        let config: Self = serde_json::from_str(&data)
            .map_err(|e| ScoringError::json("parse scoring config", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        let weights = [
            ("match_weight", self.match_weight),
            ("substitution_penalty", self.substitution_penalty),
            ("gap_penalty", self.gap_penalty),
            ("boundary_penalty", self.boundary_penalty),
        ];
        if let Some((name, value)) = weights.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ScoringError::invalid_input(format!(
                "{name} must be finite, got {value}"
            )));
        }
        if self.boundary_penalty < 0.0 {
            return Err(ScoringError::invalid_input(format!(
                "boundary_penalty must be non-negative, got {}",
                self.boundary_penalty
            )));
        }
        if !(0.0..=1.0).contains(&self.probability_threshold) {
            return Err(ScoringError::invalid_input(format!(
                "probability_threshold must be within [0, 1], got {}",
                self.probability_threshold
            )));
        }
        if self.blank_symbol.is_empty() {
            return Err(ScoringError::invalid_input("blank_symbol must not be empty"));
        }
        Ok(())
    }

    pub fn global_weights(&self) -> GlobalWeights {
        GlobalWeights {
            match_weight: self.match_weight,
            substitution: self.substitution_penalty,
            gap: self.gap_penalty,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let weights = GlobalWeights::default();
        Self {
            algorithm: AlignerKind::default(),
            match_weight: weights.match_weight,
            substitution_penalty: weights.substitution,
            gap_penalty: weights.gap,
            boundary_penalty: 0.0,
            probability_threshold: Self::DEFAULT_PROBABILITY_THRESHOLD,
            blank_symbol: Self::DEFAULT_BLANK_SYMBOL.to_string(),
            weighting: Weighting::default(),
            tables_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoring_config_default() {
        let config = ScoringConfig::default();
        assert_eq!(config.algorithm, AlignerKind::Needleman);
        assert_eq!(config.match_weight, 3.0);
        assert_eq!(config.substitution_penalty, -1.0);
        assert_eq!(config.gap_penalty, -2.0);
        assert_eq!(config.boundary_penalty, 0.0);
        assert_eq!(config.probability_threshold, 0.3);
        assert_eq!(config.blank_symbol, "<blk>");
        assert_eq!(config.weighting, Weighting::Binary);
        assert!(config.tables_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: ScoringConfig =
            serde_json::from_str(r#"{"algorithm": "dtw", "gap_penalty": -3}"#)
                .expect("valid config json");
        assert_eq!(config.algorithm, AlignerKind::Dtw);
        assert_eq!(config.gap_penalty, -3.0);
        assert_eq!(config.match_weight, 3.0);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let negative_boundary = ScoringConfig {
            boundary_penalty: -1.0,
            ..ScoringConfig::default()
        };
        assert!(negative_boundary.validate().is_err());

        let threshold = ScoringConfig {
            probability_threshold: 1.5,
            ..ScoringConfig::default()
        };
        assert!(threshold.validate().is_err());

        let nan_gap = ScoringConfig {
            gap_penalty: f64::NAN,
            ..ScoringConfig::default()
        };
        assert!(nan_gap.validate().is_err());
    }

    #[test]
    fn load_reads_and_validates_file() {
        let path = std::env::temp_dir().join("kriah_align_config_load.json");
        std::fs::write(&path, r#"{"weighting": "probability"}"#).expect("write config");
        let config = ScoringConfig::load(&path).expect("load config");
        assert_eq!(config.weighting, Weighting::Probability);
        let _ = std::fs::remove_file(&path);

        assert!(ScoringConfig::load(Path::new("/nonexistent/scoring.json")).is_err());
    }
}
