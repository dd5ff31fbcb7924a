pub mod grapheme;
pub mod rules;
pub mod sequence;
pub mod tables;

pub use grapheme::Grapheme;
pub use sequence::{transliterate, transliterate_word, ReferenceSequence, Transliteration, Verse, Word};
pub use tables::{Letter, PhonemeTables, Point, PointSet};
