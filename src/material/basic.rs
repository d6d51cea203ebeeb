use super::Material;
use crate::Result;
use ndarray::ArrayD;

/// Implements a material defined by a user-supplied scalar law
///
/// The law maps one scalar strain to one scalar stress and is applied
/// elementwise over the whole strain batch. This is the natural constitutive
/// model for truss elements, whose strain is always the scalar axial value.
///
/// # Examples
///
/// ```
/// use exdyn::{BasicMaterial, Material};
/// use ndarray::array;
///
/// let young = 200.0;
/// let mat = BasicMaterial::new(move |strain| young * strain, 7.8);
/// let stress = mat.update(&array![0.0, 0.01, -0.02].into_dyn()).unwrap();
/// assert_eq!(stress[[1]], 2.0);
/// ```
pub struct BasicMaterial {
    law: Box<dyn Fn(f64) -> f64>,
    density: f64,
}

impl BasicMaterial {
    /// Allocates a new instance from a scalar constitutive law and a density
    pub fn new(law: impl Fn(f64) -> f64 + 'static, density: f64) -> Self {
        BasicMaterial {
            law: Box::new(law),
            density,
        }
    }
}

impl Material for BasicMaterial {
    fn update(&self, strain: &ArrayD<f64>) -> Result<ArrayD<f64>> {
        Ok(strain.mapv(|e| (self.law)(e)))
    }

    fn density(&self) -> f64 {
        self.density
    }

    fn mat_id(&self) -> u32 {
        0
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
