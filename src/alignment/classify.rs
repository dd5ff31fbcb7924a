use super::dtw::DtwAlignment;
use crate::types::AlignmentStep;

/// Turn a DTW warping path into classified steps.
///
/// The first cell is a match. After that, a move along both axes is a match,
/// a move along the reference only is a miss, and a move along the incoming
/// sequence only is an extra.
pub fn classify_dtw_path<R, I>(
    reference: &[R],
    incoming: &[I],
    alignment: &DtwAlignment,
) -> Vec<AlignmentStep<R, I>>
where
    R: Clone,
    I: Clone,
{
    let Some(&(i0, j0)) = alignment.path.first() else {
        return Vec::new();
    };
    let matrix = &alignment.matrix;
    let mut steps = Vec::with_capacity(alignment.path.len());
    steps.push(AlignmentStep::Match {
        expected: reference[i0].clone(),
        got: incoming[j0].clone(),
        cost: matrix.get(i0, j0),
        similarity: None,
    });

    for pair in alignment.path.windows(2) {
        let (prev_i, prev_j) = pair[0];
        let (i, j) = pair[1];
        let cost = matrix.get(i, j);
        let step = match (i > prev_i, j > prev_j) {
            (true, true) => AlignmentStep::Match {
                expected: reference[i].clone(),
                got: incoming[j].clone(),
                cost,
                similarity: None,
            },
            (true, false) => AlignmentStep::Miss {
                expected: reference[i].clone(),
                cost,
            },
            _ => AlignmentStep::Extra {
                got: incoming[j].clone(),
                cost,
            },
        };
        steps.push(step);
    }
    steps
}

/// Reference elements in step order, skipping extras.
pub fn expected_sequence<R: Clone, I>(steps: &[AlignmentStep<R, I>]) -> Vec<R> {
    steps.iter().filter_map(|s| s.expected().cloned()).collect()
}

/// Incoming elements in step order, skipping misses.
pub fn got_sequence<R, I: Clone>(steps: &[AlignmentStep<R, I>]) -> Vec<I> {
    steps.iter().filter_map(|s| s.got().cloned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::dtw::dtw;
    use crate::types::StepKind;

    fn abs_diff(a: &i32, b: &i32) -> f64 {
        (a - b).abs() as f64
    }

    #[test]
    fn numeric_example_has_one_miss_for_unheard_value() {
        let reference = [0, 10, 20, 30, 40];
        let incoming = [0, 0, 10, 30, 40, 40];
        let alignment = dtw(&reference, &incoming, 0.0, abs_diff);
        let steps = classify_dtw_path(&reference, &incoming, &alignment);

        let misses: Vec<i32> = steps
            .iter()
            .filter(|s| s.kind() == StepKind::Miss)
            .filter_map(|s| s.expected().copied())
            .collect();
        assert_eq!(misses, vec![20]);

        for step in &steps {
            if let AlignmentStep::Match { expected, got, .. } = step {
                assert_eq!(expected, got);
            }
        }
        let matches = steps.iter().filter(|s| s.kind() == StepKind::Match).count();
        assert_eq!(matches, 4);
    }

    #[test]
    fn dtw_steps_round_trip() {
        let reference = [1, 5, 9, 9, 2];
        let incoming = [1, 1, 9, 3, 2, 2, 7];
        let alignment = dtw(&reference, &incoming, 0.0, abs_diff);
        let steps = classify_dtw_path(&reference, &incoming, &alignment);
        assert_eq!(expected_sequence(&steps), reference);
        assert_eq!(got_sequence(&steps), incoming);
    }

    #[test]
    fn empty_path_gives_no_steps() {
        let empty: [i32; 0] = [];
        let alignment = dtw(&empty, &[1], 0.0, abs_diff);
        assert!(classify_dtw_path(&empty, &[1], &alignment).is_empty());
    }
}
