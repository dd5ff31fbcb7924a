use crate::config::ScoringConfig;
use crate::transliteration::{PhonemeTables, Transliteration};
use crate::types::{Frame, PhonemeStep};

pub trait Transliterator: Send + Sync {
    fn transliterate(&self, text: &str, tables: &PhonemeTables) -> Transliteration;
}

/// Steps plus the aligner's own total (DTW distance or global score).
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedSteps {
    pub score: f64,
    pub steps: Vec<PhonemeStep>,
}

pub trait SequenceAligner: Send + Sync {
    fn align_steps(&self, reference: &[char], frames: &[Frame], config: &ScoringConfig)
        -> AlignedSteps;
}
