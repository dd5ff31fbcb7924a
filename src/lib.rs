pub mod alignment;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod transliteration;
pub mod types;

pub use alignment::classify::{classify_dtw_path, expected_sequence, got_sequence};
pub use alignment::dtw::{dtw, DtwAlignment};
pub use alignment::lattice::{load_frames, parse_phone_dump};
pub use alignment::needleman::{needleman_wunsch, GlobalAlignment, GlobalWeights};
pub use alignment::scoring::{accuracy, omitted_words, Weighting};
pub use config::{AlignerKind, ScoringConfig};
pub use error::ScoringError;
pub use pipeline::builder::ReadingScorerBuilder;
pub use pipeline::runtime::ReadingScorer;
pub use pipeline::traits::{AlignedSteps, SequenceAligner, Transliterator};
pub use transliteration::{transliterate, PhonemeTables, ReferenceSequence, Transliteration};
pub use types::{AlignmentStep, Candidate, Frame, PhonemeStep, ScoreOutput, StepKind};
