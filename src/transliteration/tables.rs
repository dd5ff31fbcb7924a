use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ScoringError;

/// Hebrew base letters, in code point order (U+05D0..=U+05EA).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Letter {
    Alef,
    Bet,
    Gimel,
    Dalet,
    He,
    Vav,
    Zayin,
    Het,
    Tet,
    Yod,
    FinalKaf,
    Kaf,
    Lamed,
    FinalMem,
    Mem,
    FinalNun,
    Nun,
    Samekh,
    Ayin,
    FinalPe,
    Pe,
    FinalTsadi,
    Tsadi,
    Qof,
    Resh,
    Shin,
    Tav,
}

impl Letter {
    pub const ALL: [Letter; 27] = [
        Letter::Alef,
        Letter::Bet,
        Letter::Gimel,
        Letter::Dalet,
        Letter::He,
        Letter::Vav,
        Letter::Zayin,
        Letter::Het,
        Letter::Tet,
        Letter::Yod,
        Letter::FinalKaf,
        Letter::Kaf,
        Letter::Lamed,
        Letter::FinalMem,
        Letter::Mem,
        Letter::FinalNun,
        Letter::Nun,
        Letter::Samekh,
        Letter::Ayin,
        Letter::FinalPe,
        Letter::Pe,
        Letter::FinalTsadi,
        Letter::Tsadi,
        Letter::Qof,
        Letter::Resh,
        Letter::Shin,
        Letter::Tav,
    ];

    const FIRST: u32 = 0x05D0;

    pub fn from_char(c: char) -> Option<Self> {
        let offset = (c as u32).checked_sub(Self::FIRST)?;
        Self::ALL.get(offset as usize).copied()
    }

    pub fn as_char(self) -> char {
        // The enum is declared in code point order starting at alef.
        char::from_u32(Self::FIRST + self as u32).unwrap_or('\u{05D0}')
    }
}

/// Niqqud marks recognised on a grapheme.
///
/// Declaration order is significant: vowel sounds are appended in this order
/// regardless of the order the marks appear in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Point {
    Sheva,
    HatafSegol,
    HatafPatah,
    HatafQamats,
    Hiriq,
    Tsere,
    Segol,
    Patah,
    Qamats,
    Holam,
    HolamHaserForVav,
    Qubuts,
    Dagesh,
    Meteg,
    Rafe,
    ShinDot,
    SinDot,
    QamatsQatan,
}

impl Point {
    pub const ALL: [Point; 18] = [
        Point::Sheva,
        Point::HatafSegol,
        Point::HatafPatah,
        Point::HatafQamats,
        Point::Hiriq,
        Point::Tsere,
        Point::Segol,
        Point::Patah,
        Point::Qamats,
        Point::Holam,
        Point::HolamHaserForVav,
        Point::Qubuts,
        Point::Dagesh,
        Point::Meteg,
        Point::Rafe,
        Point::ShinDot,
        Point::SinDot,
        Point::QamatsQatan,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        let point = match c {
            '\u{05B0}' => Point::Sheva,
            '\u{05B1}' => Point::HatafSegol,
            '\u{05B2}' => Point::HatafPatah,
            '\u{05B3}' => Point::HatafQamats,
            '\u{05B4}' => Point::Hiriq,
            '\u{05B5}' => Point::Tsere,
            '\u{05B6}' => Point::Segol,
            '\u{05B7}' => Point::Patah,
            '\u{05B8}' => Point::Qamats,
            '\u{05B9}' => Point::Holam,
            '\u{05BA}' => Point::HolamHaserForVav,
            '\u{05BB}' => Point::Qubuts,
            '\u{05BC}' => Point::Dagesh,
            '\u{05BD}' => Point::Meteg,
            '\u{05BF}' => Point::Rafe,
            '\u{05C1}' => Point::ShinDot,
            '\u{05C2}' => Point::SinDot,
            '\u{05C7}' => Point::QamatsQatan,
            _ => return None,
        };
        Some(point)
    }

    fn bit(self) -> u32 {
        1 << (self as u32)
    }
}

/// Set of points carried by one grapheme. Iterates in declaration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PointSet(u32);

impl PointSet {
    pub fn insert(&mut self, point: Point) {
        self.0 |= point.bit();
    }

    pub fn contains(&self, point: Point) -> bool {
        self.0 & point.bit() != 0
    }

    pub fn contains_any(&self, points: &[Point]) -> bool {
        points.iter().any(|&p| self.contains(p))
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        Point::ALL.into_iter().filter(|&p| self.contains(p))
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        let mut set = PointSet::default();
        for point in iter {
            set.insert(point);
        }
        set
    }
}

/// Read-only phoneme resource consumed by the mapper and the rule engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhonemeTables {
    pub letters: BTreeMap<Letter, String>,
    pub vowels: BTreeMap<Point, String>,
    /// Alternate consonant used when the letter carries a dagesh.
    pub hardened: BTreeMap<Letter, String>,
    /// Fixed reading of the four-letter divine name, one sound per letter.
    pub divine_name: [String; 4],
}

impl PhonemeTables {
    pub fn hebrew() -> Self {
        let letters = [
            (Letter::Alef, "ʔ"),
            (Letter::Bet, "v"),
            (Letter::Gimel, "g"),
            (Letter::Dalet, "d"),
            (Letter::He, "h"),
            (Letter::Vav, "v"),
            (Letter::Zayin, "z"),
            (Letter::Het, "x"),
            (Letter::Tet, "t"),
            (Letter::Yod, "j"),
            (Letter::FinalKaf, "x"),
            (Letter::Kaf, "x"),
            (Letter::Lamed, "l"),
            (Letter::FinalMem, "m"),
            (Letter::Mem, "m"),
            (Letter::FinalNun, "n"),
            (Letter::Nun, "n"),
            (Letter::Samekh, "s"),
            (Letter::Ayin, "ʔ"),
            (Letter::FinalPe, "f"),
            (Letter::Pe, "f"),
            (Letter::FinalTsadi, "ts"),
            (Letter::Tsadi, "ts"),
            (Letter::Qof, "k"),
            (Letter::Resh, "ʁ"),
            (Letter::Shin, "ʃ"),
            (Letter::Tav, "t"),
        ];
        let vowels = [
            (Point::Sheva, "ə"),
            (Point::HatafSegol, "e"),
            (Point::HatafPatah, "a"),
            (Point::HatafQamats, "o"),
            (Point::Hiriq, "i"),
            (Point::Tsere, "e"),
            (Point::Segol, "e"),
            (Point::Patah, "a"),
            (Point::Qamats, "a"),
            (Point::Holam, "o"),
            (Point::HolamHaserForVav, "o"),
            (Point::Qubuts, "u"),
            (Point::QamatsQatan, "o"),
        ];
        let hardened = [
            (Letter::Bet, "b"),
            (Letter::FinalKaf, "k"),
            (Letter::Kaf, "k"),
            (Letter::FinalPe, "p"),
            (Letter::Pe, "p"),
        ];

        Self {
            letters: to_owned_map(&letters),
            vowels: to_owned_map(&vowels),
            hardened: to_owned_map(&hardened),
            divine_name: ["ʔa", "do", "na", "j"].map(str::to_string),
        }
    }

    pub fn from_json_str(data: &str) -> Result<Self, ScoringError> {
        serde_json::from_str(data).map_err(|e| ScoringError::json("parse phoneme tables", e))
    }

    pub fn load(path: &Path) -> Result<Self, ScoringError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| ScoringError::io("read phoneme tables", e))?;
        Self::from_json_str(&data)
    }

    pub fn letter(&self, letter: Letter) -> Option<&str> {
        self.letters.get(&letter).map(String::as_str)
    }

    pub fn vowel(&self, point: Point) -> Option<&str> {
        self.vowels.get(&point).map(String::as_str)
    }

    pub fn hardened(&self, letter: Letter) -> Option<&str> {
        self.hardened.get(&letter).map(String::as_str)
    }

    /// True when any of `points` carries a vowel sound in these tables.
    pub fn has_vowel(&self, points: &PointSet) -> bool {
        points.iter().any(|p| self.vowels.contains_key(&p))
    }
}

impl Default for PhonemeTables {
    fn default() -> Self {
        Self::hebrew()
    }
}

fn to_owned_map<K: Ord + Copy>(entries: &[(K, &str)]) -> BTreeMap<K, String> {
    entries.iter().map(|&(k, v)| (k, v.to_string())).collect()
}
