use std::path::Path;

use crate::config::{AlignerKind, ScoringConfig};
use crate::error::ScoringError;
use crate::pipeline::defaults::{DtwSequenceAligner, HebrewTransliterator, NeedlemanSequenceAligner};
use crate::pipeline::runtime::{ReadingScorer, ReadingScorerParts};
use crate::pipeline::traits::{SequenceAligner, Transliterator};
use crate::transliteration::PhonemeTables;

pub struct ReadingScorerBuilder {
    config: ScoringConfig,
    tables: Option<PhonemeTables>,
    transliterator: Option<Box<dyn Transliterator>>,
    sequence_aligner: Option<Box<dyn SequenceAligner>>,
}

impl ReadingScorerBuilder {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            tables: None,
            transliterator: None,
            sequence_aligner: None,
        }
    }

    pub fn with_algorithm(mut self, algorithm: AlignerKind) -> Self {
        self.config.algorithm = algorithm;
        self
    }

    /// Use these tables instead of `tables_path` or the built-in Hebrew tables.
    pub fn with_tables(mut self, tables: PhonemeTables) -> Self {
        self.tables = Some(tables);
        self
    }

    pub fn with_transliterator(mut self, transliterator: Box<dyn Transliterator>) -> Self {
        self.transliterator = Some(transliterator);
        self
    }

    pub fn with_sequence_aligner(mut self, sequence_aligner: Box<dyn SequenceAligner>) -> Self {
        self.sequence_aligner = Some(sequence_aligner);
        self
    }

    pub fn build(self) -> Result<ReadingScorer, ScoringError> {
        self.config.validate()?;

        let tables = match (self.tables, self.config.tables_path.as_deref()) {
            (Some(tables), _) => tables,
            (None, Some(path)) => PhonemeTables::load(Path::new(path))?,
            (None, None) => PhonemeTables::hebrew(),
        };

        let sequence_aligner = self
            .sequence_aligner
            .unwrap_or_else(|| default_aligner(self.config.algorithm));

        Ok(ReadingScorer::from_parts(ReadingScorerParts {
            config: self.config,
            tables,
            transliterator: self
                .transliterator
                .unwrap_or_else(|| Box::new(HebrewTransliterator)),
            sequence_aligner,
        }))
    }
}

fn default_aligner(algorithm: AlignerKind) -> Box<dyn SequenceAligner> {
    match algorithm {
        AlignerKind::Dtw => Box::new(DtwSequenceAligner),
        AlignerKind::Needleman => Box::new(NeedlemanSequenceAligner),
    }
}
