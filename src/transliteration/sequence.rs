use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

use super::grapheme::{map_word, Grapheme};
use super::rules::apply_rules;
use super::tables::PhonemeTables;

/// SOF PASUQ, ends a verse.
pub const VERSE_SEPARATOR: char = '\u{05C3}';
/// MAQAF, joins words that are still read as separate words.
pub const MAQAF: char = '\u{05BE}';

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Word {
    /// Original pointed text, for display only.
    pub text: String,
    pub graphemes: Vec<Grapheme>,
}

impl Word {
    /// Concatenated sounds of every grapheme that has one.
    pub fn sound(&self) -> String {
        self.graphemes.iter().filter_map(Grapheme::sound).collect()
    }

    pub fn unknown_count(&self) -> usize {
        self.graphemes.iter().map(|g| g.unknowns.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verse {
    pub words: Vec<Word>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transliteration {
    pub verses: Vec<Verse>,
}

impl Transliteration {
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.verses.iter().flat_map(|v| v.words.iter())
    }

    pub fn unknown_count(&self) -> usize {
        self.words().map(Word::unknown_count).sum()
    }

    pub fn reference(&self) -> ReferenceSequence {
        ReferenceSequence::from_words(self.words().map(Word::sound))
    }
}

/// Transliterate a single word: segment, map, then run the rule engine.
pub fn transliterate_word(word: &str, tables: &PhonemeTables) -> Word {
    let mapped = map_word(word, tables);
    Word {
        text: word.to_string(),
        graphemes: apply_rules(&mapped, tables),
    }
}

/// Transliterate pointed text into verses and words.
pub fn transliterate(text: &str, tables: &PhonemeTables) -> Transliteration {
    let normalized: String = text.nfc().collect();
    let verses = normalized
        .split(VERSE_SEPARATOR)
        .map(|verse| Verse {
            words: verse
                .split(|c: char| c.is_whitespace() || c == MAQAF)
                .filter(|w| !w.is_empty())
                .map(|w| transliterate_word(w, tables))
                .collect(),
        })
        .filter(|v| !v.words.is_empty())
        .collect();
    let out = Transliteration { verses };

    let unknowns = out.unknown_count();
    if unknowns > 0 {
        tracing::warn!(
            unknown_marks = unknowns,
            "transliteration: unrecognised marks recorded on graphemes"
        );
    }
    out
}

/// Ordered phoneme symbols to align against, one `char` per symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReferenceSequence {
    words: Vec<String>,
    symbols: Vec<char>,
    word_of_symbol: Vec<usize>,
}

impl ReferenceSequence {
    /// Build from per-word sound strings. Silent words are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out = Self::default();
        for word in words.into_iter().map(Into::into) {
            if word.is_empty() {
                continue;
            }
            let index = out.words.len();
            for c in word.chars() {
                out.symbols.push(c);
                out.word_of_symbol.push(index);
            }
            out.words.push(word);
        }
        out
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Index into [`Self::words`] of the word that produced symbol `index`.
    pub fn word_of(&self, index: usize) -> Option<usize> {
        self.word_of_symbol.get(index).copied()
    }

    /// Words joined by a single space.
    pub fn text(&self) -> String {
        self.words.join(" ")
    }

    /// Each word's symbols separated by `.`, the form the accuracy scorer reads.
    pub fn dotted_words(&self) -> Vec<String> {
        self.words
            .iter()
            .map(|w| {
                w.chars()
                    .map(String::from)
                    .collect::<Vec<_>>()
                    .join(".")
            })
            .collect()
    }
}
