use super::Matrix;

#[derive(Debug, Clone, PartialEq)]
pub struct DtwAlignment {
    /// Accumulated cost at the last cell; 0 when either input is empty.
    pub distance: f64,
    /// Cells `(reference, incoming)` from `(0, 0)` to the last cell.
    pub path: Vec<(usize, usize)>,
    pub matrix: Matrix,
}

/// Cost-minimising dynamic time warping.
///
/// `boundary_penalty` is added to every purely vertical or horizontal move
/// while filling the matrix. The backtrace compares raw accumulated costs.
pub fn dtw<R, I, F>(
    reference: &[R],
    incoming: &[I],
    boundary_penalty: f64,
    mut distance: F,
) -> DtwAlignment
where
    F: FnMut(&R, &I) -> f64,
{
    let r_len = reference.len();
    let n_len = incoming.len();
    if r_len == 0 || n_len == 0 {
        return DtwAlignment {
            distance: 0.0,
            path: Vec::new(),
            matrix: Matrix::default(),
        };
    }

    let mut cost = Matrix::new(r_len, n_len);
    for i in 0..r_len {
        for j in 0..n_len {
            let d = distance(&reference[i], &incoming[j]);
            let prior = match (i, j) {
                (0, 0) => 0.0,
                (0, _) => cost.get(0, j - 1) + boundary_penalty,
                (_, 0) => cost.get(i - 1, 0) + boundary_penalty,
                _ => (cost.get(i - 1, j) + boundary_penalty)
                    .min(cost.get(i, j - 1) + boundary_penalty)
                    .min(cost.get(i - 1, j - 1)),
            };
            cost.set(i, j, prior + d);
        }
    }

    let path = backtrace(&cost);
    let total = cost.get(r_len - 1, n_len - 1);
    tracing::debug!(
        reference_len = r_len,
        incoming_len = n_len,
        distance = total,
        path_len = path.len(),
        "dtw: alignment complete"
    );

    DtwAlignment {
        distance: total,
        path,
        matrix: cost,
    }
}

/// Walk back from the last cell. Ties go to the second operand of each
/// comparison, so equal costs lean left.
fn backtrace(cost: &Matrix) -> Vec<(usize, usize)> {
    let mut i = cost.rows() - 1;
    let mut j = cost.cols() - 1;
    let mut path = Vec::with_capacity(i + j + 1);
    path.push((i, j));
    while i > 0 || j > 0 {
        if i > 0 && j > 0 {
            let up = cost.get(i - 1, j);
            let diag = cost.get(i - 1, j - 1);
            let left = cost.get(i, j - 1);
            if up < diag {
                if up < left {
                    i -= 1;
                } else {
                    j -= 1;
                }
            } else if diag < left {
                i -= 1;
                j -= 1;
            } else {
                j -= 1;
            }
        } else if i > 0 {
            i -= 1;
        } else {
            j -= 1;
        }
        path.push((i, j));
    }
    path.reverse();
    path
}
