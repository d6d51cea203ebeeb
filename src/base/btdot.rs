use crate::{Error, Result};
use ndarray::{ArrayD, Axis, IxDyn};

/// Performs a batched tensor dot product
///
/// Contracts the trailing axes of `large` against the non-batch axes of
/// `small`. The first axis of `small` is the batch axis; its remaining `M`
/// axes are the contraction operand. The leading axes of `large` are batch
/// (broadcast) axes and its trailing `M` axes are contracted.
///
/// The rule is the one a reshape-multiply-reduce implements: insert
/// `dim_diff = large.ndim() - small.ndim()` singleton axes after the batch
/// axis of `small`, multiply elementwise with broadcasting, then sum over the
/// trailing axes corresponding to the non-batch axes of `small`.
///
/// A size-1 batch axis on either operand broadcasts against the other's batch
/// size. With `small` of rank 2 this is a per-batch vector-vector product;
/// with `small` of rank 3 and `large` of rank 3 a per-batch matrix-vector
/// contraction; with `small` of rank 3 and `large` of rank 5 a per-batch
/// double contraction of a rank-4 tensor.
///
/// # Errors
///
/// Returns `ShapeMismatch` if `small` outranks `large`, if `small` has no
/// batch axis, or if the shapes cannot be broadcast together.
pub fn btdot(large: &ArrayD<f64>, small: &ArrayD<f64>) -> Result<ArrayD<f64>> {
    if small.ndim() == 0 {
        return Err(Error::ShapeMismatch(
            "small operand must have at least a batch axis".to_string(),
        ));
    }
    if small.ndim() > large.ndim() {
        return Err(Error::ShapeMismatch(format!(
            "small operand of rank {} outranks large operand of rank {}",
            small.ndim(),
            large.ndim()
        )));
    }
    let dim_diff = large.ndim() - small.ndim();
    let mut sview = small.view();
    for _ in 0..dim_diff {
        sview = sview.insert_axis(Axis(1));
    }
    let shape = co_broadcast(large.shape(), sview.shape())?;
    let lb = large
        .broadcast(IxDyn(&shape))
        .ok_or_else(|| Error::ShapeMismatch("cannot broadcast large operand".to_string()))?;
    let sb = sview
        .broadcast(IxDyn(&shape))
        .ok_or_else(|| Error::ShapeMismatch("cannot broadcast small operand".to_string()))?;
    let mut result = &lb * &sb;
    for axis in (dim_diff + 1..large.ndim()).rev() {
        result = result.sum_axis(Axis(axis));
    }
    Ok(result)
}

/// Computes the common broadcast shape of two equal-rank shapes
fn co_broadcast(a: &[usize], b: &[usize]) -> Result<Vec<usize>> {
    a.iter()
        .zip(b.iter())
        .map(|(&da, &db)| {
            if da == db || db == 1 {
                Ok(da)
            } else if da == 1 {
                Ok(db)
            } else {
                Err(Error::ShapeMismatch(format!(
                    "cannot broadcast shapes {:?} and {:?}",
                    a, b
                )))
            }
        })
        .collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::btdot;
    use crate::Error;
    use approx::assert_relative_eq;
    use ndarray::{Array, ArrayD, IxDyn};

    fn arange(shape: &[usize]) -> ArrayD<f64> {
        let n: usize = shape.iter().product();
        Array::from_shape_vec(IxDyn(shape), (0..n).map(|i| i as f64).collect()).unwrap()
    }

    #[test]
    fn batch_vector_dot_works() {
        let large = arange(&[2, 2, 3, 6]);
        let small = arange(&[2, 6]);
        let result = btdot(&large, &small).unwrap();
        assert_eq!(result.shape(), &[2, 2, 3]);
        for i in 0..2 {
            for j in 0..2 {
                for k in 0..3 {
                    let mut dot = 0.0;
                    for m in 0..6 {
                        dot += large[[i, j, k, m]] * small[[i, m]];
                    }
                    assert_relative_eq!(result[[i, j, k]], dot, max_relative = 1e-14);
                }
            }
        }
    }

    #[test]
    fn batch_double_dot_works() {
        let large = arange(&[3, 4, 2, 2]);
        let small = arange(&[3, 2, 2]);
        let result = btdot(&large, &small).unwrap();
        assert_eq!(result.shape(), &[3, 4]);
        for b in 0..3 {
            for i in 0..4 {
                let mut ddot = 0.0;
                for k in 0..2 {
                    for l in 0..2 {
                        ddot += large[[b, i, k, l]] * small[[b, k, l]];
                    }
                }
                assert_relative_eq!(result[[b, i]], ddot, max_relative = 1e-14);
            }
        }
    }

    #[test]
    fn batch_axis_broadcasts() {
        // size-1 batch on the large operand against a size-4 batch of strains
        let mut large = ArrayD::zeros(IxDyn(&[1, 3, 3]));
        for i in 0..3 {
            large[[0, i, i]] = (i + 1) as f64;
        }
        let small = arange(&[4, 3]);
        let result = btdot(&large, &small).unwrap();
        assert_eq!(result.shape(), &[4, 3]);
        for b in 0..4 {
            for i in 0..3 {
                assert_relative_eq!(
                    result[[b, i]],
                    (i + 1) as f64 * small[[b, i]],
                    max_relative = 1e-14
                );
            }
        }
    }

    #[test]
    fn rank_errors_are_captured() {
        let large = arange(&[2, 3]);
        let small = arange(&[2, 3, 3]);
        assert!(matches!(
            btdot(&large, &small).err(),
            Some(Error::ShapeMismatch(_))
        ));
        let scalar = ArrayD::zeros(IxDyn(&[]));
        assert!(matches!(
            btdot(&large, &scalar).err(),
            Some(Error::ShapeMismatch(_))
        ));
    }

    #[test]
    fn incompatible_shapes_are_captured() {
        let large = arange(&[1, 3, 3]);
        let small = arange(&[2, 4]);
        assert!(matches!(
            btdot(&large, &small).err(),
            Some(Error::ShapeMismatch(_))
        ));
    }
}
