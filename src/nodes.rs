use crate::{Error, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Holds the nodal state of a simulation
///
/// Three same-shaped `(n_node, n_dim)` arrays: the reference positions `xx`
/// (by convention immutable after construction), the displacements `uu`, and
/// the velocities `vv`. The current position is always derived as `xx + uu`
/// and never stored.
///
/// Constraints and the external time integrator mutate `uu` and `vv` in
/// place; elements only read them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Nodes {
    /// Reference positions (n_node, n_dim)
    pub xx: Array2<f64>,

    /// Displacements (n_node, n_dim)
    pub uu: Array2<f64>,

    /// Velocities (n_node, n_dim)
    pub vv: Array2<f64>,
}

impl Nodes {
    /// Allocates a new instance with zero displacements and velocities
    pub fn new(xx: Array2<f64>) -> Self {
        let dim = xx.raw_dim();
        Nodes {
            xx,
            uu: Array2::zeros(dim),
            vv: Array2::zeros(dim),
        }
    }

    /// Allocates a new instance with given displacements and velocities
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` unless `xx`, `uu`, and `vv` share one shape.
    pub fn with_state(xx: Array2<f64>, uu: Array2<f64>, vv: Array2<f64>) -> Result<Self> {
        if uu.dim() != xx.dim() || vv.dim() != xx.dim() {
            return Err(Error::ShapeMismatch(format!(
                "displacement shape {:?} and velocity shape {:?} must both equal the reference position shape {:?}",
                uu.dim(),
                vv.dim(),
                xx.dim()
            )));
        }
        Ok(Nodes { xx, uu, vv })
    }

    /// Computes the current positions `xx + uu`
    pub fn x(&self) -> Array2<f64> {
        &self.xx + &self.uu
    }

    /// Returns the number of nodes
    pub fn len(&self) -> usize {
        self.xx.nrows()
    }

    /// Returns true if there are no nodes
    pub fn is_empty(&self) -> bool {
        self.xx.nrows() == 0
    }

    /// Returns the number of space dimensions
    pub fn ndim(&self) -> usize {
        self.xx.ncols()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
