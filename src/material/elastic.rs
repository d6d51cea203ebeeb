use super::Material;
use crate::{btdot, Error, Result};
use ndarray::{Array2, ArrayD, ArrayViewD, Axis};
use serde::{Deserialize, Serialize};

/// Implements a linear elastic material with a general stiffness tensor
///
/// The stiffness may be given in Voigt form, a rank-2 array of shape
/// `(k, k)`, or in full tensor form, a rank-4 array of shape `(k, k, k, k)`.
/// Internally a batch axis is prepended so the stored stiffness contracts
/// against whole strain batches in one [`btdot`] call.
///
/// `update` accepts strain in Voigt form `(batch, k)` or tensor form
/// `(batch, k, k)` and returns stress of matching shape. The stiffness and
/// density are fixed at construction; `update` is a pure function of the
/// strain.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Elastic {
    /// Stiffness with a leading batch axis: (1, k, k) or (1, k, k, k, k)
    cc: ArrayD<f64>,

    /// Mass density
    density: f64,
}

impl Elastic {
    /// Allocates a new instance from a rank-2 (Voigt) or rank-4 stiffness
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the stiffness rank is neither 2 nor 4.
    pub fn new(cc: ArrayD<f64>, density: f64) -> Result<Self> {
        match cc.ndim() {
            2 | 4 => Ok(Elastic {
                cc: cc.insert_axis(Axis(0)),
                density,
            }),
            rank => Err(Error::ShapeMismatch(format!(
                "stiffness must have rank 2 (Voigt form) or 4 (tensor form), not {}",
                rank
            ))),
        }
    }

    /// Allocates a new instance from a Voigt stiffness matrix
    pub fn from_voigt(cc: Array2<f64>, density: f64) -> Self {
        Elastic {
            cc: cc.into_dyn().insert_axis(Axis(0)),
            density,
        }
    }

    /// Sets the mass density
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Returns the stiffness without its batch axis
    pub fn stiffness(&self) -> ArrayViewD<f64> {
        self.cc.index_axis(Axis(0), 0)
    }
}

impl Material for Elastic {
    fn update(&self, strain: &ArrayD<f64>) -> Result<ArrayD<f64>> {
        btdot(&self.cc, strain)
    }

    fn density(&self) -> f64 {
        self.density
    }

    fn mat_id(&self) -> u32 {
        1
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
