use serde::{Deserialize, Serialize};

use super::Matrix;
use crate::types::AlignmentStep;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalWeights {
    /// Multiplied by the similarity of a matching pair.
    pub match_weight: f64,
    /// Added when the similarity is zero.
    pub substitution: f64,
    /// Added for every miss or extra.
    pub gap: f64,
}

impl Default for GlobalWeights {
    fn default() -> Self {
        Self {
            match_weight: 3.0,
            substitution: -1.0,
            gap: -2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GlobalAlignment<R, I> {
    /// Score at the bottom-right cell; 0 when either input is empty.
    pub score: f64,
    pub steps: Vec<AlignmentStep<R, I>>,
    pub matrix: Matrix,
}

/// Score-maximising global alignment of `reference` against `incoming`.
///
/// `similarity` returns a weight in [0, 1]; 0 means the pair does not match.
/// When the main backtrace reaches the first row or column, the remaining
/// prefix is emitted as misses (reference) or extras (incoming), so every
/// element of both inputs appears in exactly one step.
pub fn needleman_wunsch<R, I, F>(
    reference: &[R],
    incoming: &[I],
    weights: GlobalWeights,
    mut similarity: F,
) -> GlobalAlignment<R, I>
where
    R: Clone,
    I: Clone,
    F: FnMut(&R, &I) -> f64,
{
    let r_len = reference.len();
    let n_len = incoming.len();
    if r_len == 0 || n_len == 0 {
        return GlobalAlignment {
            score: 0.0,
            steps: Vec::new(),
            matrix: Matrix::default(),
        };
    }

    let GlobalWeights {
        match_weight,
        substitution,
        gap,
    } = weights;

    let mut score = Matrix::new(r_len + 1, n_len + 1);
    let mut sims = Matrix::new(r_len, n_len);
    for j in 0..=n_len {
        score.set(0, j, j as f64 * gap);
    }
    for i in 1..=r_len {
        score.set(i, 0, i as f64 * gap);
        for j in 1..=n_len {
            let sim = similarity(&reference[i - 1], &incoming[j - 1]);
            sims.set(i - 1, j - 1, sim);
            let pair = if sim > 0.0 { match_weight * sim } else { substitution };
            let best = (score.get(i - 1, j) + gap)
                .max(score.get(i, j - 1) + gap)
                .max(score.get(i - 1, j - 1) + pair);
            score.set(i, j, best);
        }
    }

    let mut steps = Vec::with_capacity(r_len + n_len);
    let mut i = r_len;
    let mut j = n_len;
    while i > 0 && j > 0 {
        let cost = score.get(i, j);
        if cost == score.get(i - 1, j) + gap {
            i -= 1;
            steps.push(AlignmentStep::Miss {
                expected: reference[i].clone(),
                cost,
            });
        } else if cost == score.get(i, j - 1) + gap {
            j -= 1;
            steps.push(AlignmentStep::Extra {
                got: incoming[j].clone(),
                cost,
            });
        } else {
            i -= 1;
            j -= 1;
            steps.push(AlignmentStep::Match {
                expected: reference[i].clone(),
                got: incoming[j].clone(),
                cost,
                similarity: Some(sims.get(i, j)),
            });
        }
    }

    let leftover_misses = i;
    let leftover_extras = j;
    while i > 0 {
        let cost = score.get(i, 0);
        i -= 1;
        steps.push(AlignmentStep::Miss {
            expected: reference[i].clone(),
            cost,
        });
    }
    while j > 0 {
        let cost = score.get(0, j);
        j -= 1;
        steps.push(AlignmentStep::Extra {
            got: incoming[j].clone(),
            cost,
        });
    }
    steps.reverse();

    let total = score.get(r_len, n_len);
    tracing::debug!(
        reference_len = r_len,
        incoming_len = n_len,
        score = total,
        steps = steps.len(),
        leftover_misses,
        leftover_extras,
        "needleman: alignment complete"
    );

    GlobalAlignment {
        score: total,
        steps,
        matrix: score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StepKind;

    fn exact(a: &char, b: &char) -> f64 {
        if a == b {
            1.0
        } else {
            0.0
        }
    }

    fn kinds<R, I>(steps: &[AlignmentStep<R, I>]) -> Vec<StepKind> {
        steps.iter().map(AlignmentStep::kind).collect()
    }

    #[test]
    fn skipped_middle_symbol_is_a_miss() {
        let out = needleman_wunsch(&['a', 'b', 'c'], &['a', 'c'], GlobalWeights::default(), exact);
        assert_eq!(out.score, 4.0);
        assert_eq!(kinds(&out.steps), [StepKind::Match, StepKind::Miss, StepKind::Match]);
        assert_eq!(out.steps[1].expected(), Some(&'b'));
    }

    #[test]
    fn border_is_index_times_gap() {
        let out = needleman_wunsch(&['a', 'b'], &['x', 'y', 'z'], GlobalWeights::default(), exact);
        assert_eq!(out.matrix.row(0), &[0.0, -2.0, -4.0, -6.0]);
        assert_eq!(out.matrix.get(2, 0), -4.0);
    }

    #[test]
    fn leftover_reference_prefix_becomes_misses() {
        let out = needleman_wunsch(&['a', 'b'], &['b'], GlobalWeights::default(), exact);
        assert_eq!(kinds(&out.steps), [StepKind::Miss, StepKind::Match]);
        assert_eq!(out.steps[0].expected(), Some(&'a'));
        assert_eq!(out.steps[0].cost(), -2.0);
        assert_eq!(out.score, 1.0);
    }

    #[test]
    fn leftover_incoming_prefix_becomes_extras() {
        let out = needleman_wunsch(&['b'], &['a', 'b'], GlobalWeights::default(), exact);
        assert_eq!(kinds(&out.steps), [StepKind::Extra, StepKind::Match]);
        assert_eq!(out.steps[0].got(), Some(&'a'));
    }

    #[test]
    fn substitution_is_reported_as_match_with_zero_similarity() {
        let out = needleman_wunsch(&['a'], &['z'], GlobalWeights::default(), exact);
        assert_eq!(out.score, -1.0);
        assert_eq!(
            out.steps,
            vec![AlignmentStep::Match {
                expected: 'a',
                got: 'z',
                cost: -1.0,
                similarity: Some(0.0),
            }]
        );
    }

    #[test]
    fn empty_inputs_give_no_steps() {
        let none: [char; 0] = [];
        assert!(needleman_wunsch(&none, &['a'], GlobalWeights::default(), exact).steps.is_empty());
        assert!(needleman_wunsch(&['a'], &none, GlobalWeights::default(), exact).steps.is_empty());
    }

    #[test]
    fn round_trip_holds() {
        let reference: Vec<char> = "shalom".chars().collect();
        let incoming: Vec<char> = "xsalloomq".chars().collect();
        let out = needleman_wunsch(&reference, &incoming, GlobalWeights::default(), exact);
        let expected: Vec<char> = out.steps.iter().filter_map(|s| s.expected().copied()).collect();
        let got: Vec<char> = out.steps.iter().filter_map(|s| s.got().copied()).collect();
        assert_eq!(expected, reference);
        assert_eq!(got, incoming);
    }
}
