use serde::{Deserialize, Serialize};

use crate::config::AlignerKind;

/// One recogniser hypothesis for a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub phone: String,
    /// Probability in [0, 1].
    pub prob: f32,
}

impl Candidate {
    pub fn new(phone: impl Into<String>, prob: f32) -> Self {
        Self {
            phone: phone.into(),
            prob,
        }
    }
}

/// One recogniser time step; candidates are ordered by descending probability.
///
/// Serialised as a bare candidate array. Deserialising sorts it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Candidate>", into = "Vec<Candidate>")]
pub struct Frame {
    pub candidates: Vec<Candidate>,
}

impl From<Vec<Candidate>> for Frame {
    fn from(candidates: Vec<Candidate>) -> Self {
        Self::new(candidates)
    }
}

impl From<Frame> for Vec<Candidate> {
    fn from(frame: Frame) -> Self {
        frame.candidates
    }
}

impl Frame {
    pub fn new(mut candidates: Vec<Candidate>) -> Self {
        candidates.sort_by(|a, b| b.prob.total_cmp(&a.prob));
        Self { candidates }
    }

    /// Highest-probability candidate.
    pub fn best(&self) -> Option<&Candidate> {
        self.candidates.first()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Match,
    Miss,
    Extra,
}

/// One classified alignment step, in forward order.
///
/// `cost` is the accumulated matrix value at the cell the step leaves from:
/// a cost for DTW, a score for Needleman-Wunsch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AlignmentStep<R, I> {
    Match {
        expected: R,
        got: I,
        cost: f64,
        /// Similarity reported by the global aligner; `None` for DTW.
        #[serde(skip_serializing_if = "Option::is_none")]
        similarity: Option<f64>,
    },
    Miss {
        expected: R,
        cost: f64,
    },
    Extra {
        got: I,
        cost: f64,
    },
}

impl<R, I> AlignmentStep<R, I> {
    pub fn kind(&self) -> StepKind {
        match self {
            Self::Match { .. } => StepKind::Match,
            Self::Miss { .. } => StepKind::Miss,
            Self::Extra { .. } => StepKind::Extra,
        }
    }

    pub fn cost(&self) -> f64 {
        match self {
            Self::Match { cost, .. } | Self::Miss { cost, .. } | Self::Extra { cost, .. } => *cost,
        }
    }

    pub fn expected(&self) -> Option<&R> {
        match self {
            Self::Match { expected, .. } | Self::Miss { expected, .. } => Some(expected),
            Self::Extra { .. } => None,
        }
    }

    pub fn got(&self) -> Option<&I> {
        match self {
            Self::Match { got, .. } | Self::Extra { got, .. } => Some(got),
            Self::Miss { .. } => None,
        }
    }
}

pub type PhonemeStep = AlignmentStep<char, Frame>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreOutput {
    pub algorithm: AlignerKind,
    /// Space-joined reference phonemes.
    pub reference: String,
    /// DTW distance or Needleman-Wunsch score.
    pub alignment_score: f64,
    /// Percentage in [0, 100].
    pub accuracy: f64,
    pub omitted_words: Vec<String>,
    pub steps: Vec<PhonemeStep>,
}
