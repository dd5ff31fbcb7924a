use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::lattice::heard_phones;
use crate::types::{AlignmentStep, Frame};

/// How a match step contributes to accuracy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weighting {
    /// Every match counts as 1.
    #[default]
    Binary,
    /// A match counts as its candidate probability (1 when unknown).
    Probability,
}

/// Matched reference steps over all reference steps (match + miss), as a percentage.
/// Extras do not affect the result. Returns 0 when there are no reference steps.
pub fn accuracy<R, I>(steps: &[AlignmentStep<R, I>], weighting: Weighting) -> f64 {
    let mut matched = 0.0;
    let mut total = 0usize;
    for step in steps {
        match step {
            AlignmentStep::Match { similarity, .. } => {
                total += 1;
                matched += match weighting {
                    Weighting::Binary => 1.0,
                    Weighting::Probability => similarity.unwrap_or(1.0),
                };
            }
            AlignmentStep::Miss { .. } => total += 1,
            AlignmentStep::Extra { .. } => {}
        }
    }
    if total == 0 {
        return 0.0;
    }
    matched / total as f64 * 100.0
}

/// Reference words (symbols separated by `.`) with at least one symbol that no
/// frame offers at or above `threshold`.
pub fn omitted_words(
    reference_words: &[String],
    frames: &[Frame],
    threshold: f32,
    blank: &str,
) -> Vec<String> {
    let heard: HashSet<&str> = frames
        .iter()
        .flat_map(|f| heard_phones(f, threshold, blank))
        .collect();
    reference_words
        .iter()
        .filter(|word| {
            !word
                .split('.')
                .filter(|s| !s.is_empty())
                .all(|symbol| heard.contains(symbol))
        })
        .cloned()
        .collect()
}
