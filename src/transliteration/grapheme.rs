use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use super::tables::{Letter, PhonemeTables, Point, PointSet};

/// One user-perceived character: a base letter plus its attached marks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grapheme {
    pub cluster: String,
    pub base: char,
    pub letter: Option<Letter>,
    #[serde(skip)]
    pub points: PointSet,
    /// Marks that are not recognised points, rendered as `\uXXXX`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unknowns: Vec<String>,
    pub(crate) sound: Option<String>,
}

impl Grapheme {
    /// `None` when the base letter has no phoneme; `Some("")` when silent.
    pub fn sound(&self) -> Option<&str> {
        self.sound.as_deref()
    }

    pub fn has(&self, point: Point) -> bool {
        self.points.contains(point)
    }

    pub fn is(&self, letter: Letter) -> bool {
        self.letter == Some(letter)
    }
}

/// Split one word into grapheme clusters and decompose each cluster.
pub fn segment_word(word: &str) -> Vec<Grapheme> {
    word.graphemes(true).map(decompose_cluster).collect()
}

fn decompose_cluster(cluster: &str) -> Grapheme {
    let mut chars = cluster.chars();
    let base = chars.next().unwrap_or('\u{FFFD}');
    let mut points = PointSet::default();
    let mut unknowns = Vec::new();
    for c in chars {
        match Point::from_char(c) {
            Some(point) => points.insert(point),
            None => unknowns.push(format!("\\u{:04x}", c as u32)),
        }
    }
    Grapheme {
        cluster: cluster.to_string(),
        base,
        letter: Letter::from_char(base),
        points,
        unknowns,
        sound: None,
    }
}

/// Preliminary sound: base phoneme followed by vowel phonemes in point order.
pub fn map_sound(grapheme: &Grapheme, tables: &PhonemeTables) -> Option<String> {
    let mut sound = tables.letter(grapheme.letter?)?.to_string();
    for point in grapheme.points.iter() {
        if let Some(vowel) = tables.vowel(point) {
            sound.push_str(vowel);
        }
    }
    Some(sound)
}

/// Segment a word and assign every grapheme its preliminary sound.
pub fn map_word(word: &str, tables: &PhonemeTables) -> Vec<Grapheme> {
    segment_word(word)
        .into_iter()
        .map(|mut g| {
            g.sound = map_sound(&g, tables);
            g
        })
        .collect()
}
