//! Implements constitutive models mapping strain to stress
//!
//! A material is anything satisfying the [`Material`] trait: it turns a batch
//! of strains into a batch of stresses, knows its mass density, and carries a
//! small integer identity tag. Materials are immutable once constructed and
//! may be shared by several element collections through `Rc<dyn Material>`.

mod basic;
mod elastic;
mod isotropic;
mod properties;
pub use crate::material::basic::*;
pub use crate::material::elastic::*;
pub use crate::material::isotropic::*;
pub use crate::material::properties::*;

use crate::Result;
use ndarray::ArrayD;

/// Defines the capability set of a constitutive model
pub trait Material {
    /// Computes the stress corresponding to a batch of strains
    ///
    /// The first axis of `strain` is the batch axis. The returned stress has
    /// the shape of the input strain.
    fn update(&self, strain: &ArrayD<f64>) -> Result<ArrayD<f64>>;

    /// Returns the mass density
    fn density(&self) -> f64;

    /// Returns the identity tag of this material kind
    fn mat_id(&self) -> u32;
}
