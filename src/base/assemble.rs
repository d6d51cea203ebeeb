use crate::{Error, Result};
use ndarray::{Array2, ArrayD, Axis, IxDyn};

/// Assembles per-element contributions into a global per-node array
///
/// Given `conn` of shape `(n_element, n_local)` holding node indices and
/// `contributions` of shape `(n_element, n_local, ...)` holding the values
/// each element adds to each of its local nodes, produces a zero-initialized
/// global array of shape `(num_targets, ...)` where row `n` is the sum of all
/// contribution slices whose connectivity entry equals `n`.
///
/// Contributions to shared nodes accumulate; two elements touching the same
/// node have their values summed, never overwritten.
///
/// # Errors
///
/// Returns `ShapeMismatch` if the leading axes of `contributions` disagree
/// with the shape of `conn`, and `IndexOutOfBounds` if a connectivity entry
/// is not smaller than `num_targets`.
pub fn assemble(
    num_targets: usize,
    conn: &Array2<usize>,
    contributions: &ArrayD<f64>,
) -> Result<ArrayD<f64>> {
    if contributions.ndim() < 2
        || contributions.shape()[0] != conn.nrows()
        || contributions.shape()[1] != conn.ncols()
    {
        return Err(Error::ShapeMismatch(format!(
            "contributions of shape {:?} do not match connectivity of shape ({}, {})",
            contributions.shape(),
            conn.nrows(),
            conn.ncols()
        )));
    }
    let mut shape = vec![num_targets];
    shape.extend_from_slice(&contributions.shape()[2..]);
    let mut global = ArrayD::zeros(IxDyn(&shape));
    for (e, row) in conn.rows().into_iter().enumerate() {
        for (k, &n) in row.iter().enumerate() {
            if n >= num_targets {
                return Err(Error::IndexOutOfBounds(format!(
                    "connectivity entry {} exceeds the {} assembly targets",
                    n, num_targets
                )));
            }
            let contribution = contributions.index_axis(Axis(0), e);
            let contribution = contribution.index_axis(Axis(0), k);
            let mut target = global.index_axis_mut(Axis(0), n);
            target += &contribution;
        }
    }
    Ok(global)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
