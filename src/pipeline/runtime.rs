use crate::alignment::lattice::validate_frames;
use crate::alignment::scoring::{accuracy, omitted_words};
use crate::config::ScoringConfig;
use crate::error::ScoringError;
use crate::pipeline::traits::{SequenceAligner, Transliterator};
use crate::transliteration::{PhonemeTables, ReferenceSequence, Transliteration};
use crate::types::{Frame, ScoreOutput};

/// Scores a reading of pointed text against recogniser frames.
pub struct ReadingScorer {
    config: ScoringConfig,
    tables: PhonemeTables,
    transliterator: Box<dyn Transliterator>,
    sequence_aligner: Box<dyn SequenceAligner>,
}

pub(crate) struct ReadingScorerParts {
    pub config: ScoringConfig,
    pub tables: PhonemeTables,
    pub transliterator: Box<dyn Transliterator>,
    pub sequence_aligner: Box<dyn SequenceAligner>,
}

impl ReadingScorer {
    pub(crate) fn from_parts(parts: ReadingScorerParts) -> Self {
        Self {
            config: parts.config,
            tables: parts.tables,
            transliterator: parts.transliterator,
            sequence_aligner: parts.sequence_aligner,
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn tables(&self) -> &PhonemeTables {
        &self.tables
    }

    pub fn transliterate(&self, text: &str) -> Transliteration {
        self.transliterator.transliterate(text, &self.tables)
    }

    pub fn score(&self, text: &str, frames: &[Frame]) -> Result<ScoreOutput, ScoringError> {
        let reference = self.transliterate(text).reference();
        self.score_reference(&reference, frames)
    }

    pub fn score_reference(
        &self,
        reference: &ReferenceSequence,
        frames: &[Frame],
    ) -> Result<ScoreOutput, ScoringError> {
        validate_frames(frames)?;

        if reference.is_empty() {
            tracing::warn!("scoring: reference has no phonemes; nothing to align");
        }

        let aligned = self
            .sequence_aligner
            .align_steps(reference.symbols(), frames, &self.config);
        let accuracy = accuracy(&aligned.steps, self.config.weighting);
        let dotted = reference.dotted_words();
        let omitted_dotted = omitted_words(
            &dotted,
            frames,
            self.config.probability_threshold,
            &self.config.blank_symbol,
        );
        let omitted: Vec<String> = reference
            .words()
            .iter()
            .zip(&dotted)
            .filter(|(_, d)| omitted_dotted.contains(*d))
            .map(|(w, _)| w.clone())
            .collect();

        tracing::debug!(
            algorithm = self.config.algorithm.as_str(),
            reference_len = reference.len(),
            frame_count = frames.len(),
            alignment_score = aligned.score,
            accuracy,
            omitted = omitted.len(),
            "scoring: reading scored"
        );

        Ok(ScoreOutput {
            algorithm: self.config.algorithm,
            reference: reference.text(),
            alignment_score: aligned.score,
            accuracy,
            omitted_words: omitted,
            steps: aligned.steps,
        })
    }
}
