use crate::alignment::classify::classify_dtw_path;
use crate::alignment::dtw::dtw;
use crate::alignment::lattice::{candidate_distance, candidate_similarity};
use crate::alignment::needleman::needleman_wunsch;
use crate::config::ScoringConfig;
use crate::pipeline::traits::{AlignedSteps, SequenceAligner, Transliterator};
use crate::transliteration::{transliterate, PhonemeTables, Transliteration};
use crate::types::Frame;

pub struct HebrewTransliterator;

impl Transliterator for HebrewTransliterator {
    fn transliterate(&self, text: &str, tables: &PhonemeTables) -> Transliteration {
        transliterate(text, tables)
    }
}

pub struct DtwSequenceAligner;

impl SequenceAligner for DtwSequenceAligner {
    fn align_steps(
        &self,
        reference: &[char],
        frames: &[Frame],
        config: &ScoringConfig,
    ) -> AlignedSteps {
        let blank = config.blank_symbol.as_str();
        let alignment = dtw(reference, frames, config.boundary_penalty, |r, f| {
            candidate_distance(*r, f, blank)
        });
        AlignedSteps {
            score: alignment.distance,
            steps: classify_dtw_path(reference, frames, &alignment),
        }
    }
}

pub struct NeedlemanSequenceAligner;

impl SequenceAligner for NeedlemanSequenceAligner {
    fn align_steps(
        &self,
        reference: &[char],
        frames: &[Frame],
        config: &ScoringConfig,
    ) -> AlignedSteps {
        let blank = config.blank_symbol.as_str();
        let alignment =
            needleman_wunsch(reference, frames, config.global_weights(), |r, f| {
                candidate_similarity(*r, f, blank)
            });
        AlignedSteps {
            score: alignment.score,
            steps: alignment.steps,
        }
    }
}
