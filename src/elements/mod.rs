//! Implements element collections producing nodal force and mass

mod truss;
pub use crate::elements::truss::*;

use crate::{Error, Result};
use ndarray::Array2;

/// Defines the interface of an element collection
///
/// Anything able to produce a global nodal force array of shape
/// `(n_node, n_dim)` and a lumped nodal mass array of shape `(n_node, 1)`
/// can drive a [`crate::Model`].
pub trait ElementCollection {
    /// Computes the global nodal force
    ///
    /// Takes `&mut self` because collections may cache diagnostic state such
    /// as the last computed strain and stress.
    fn force(&mut self) -> Result<Array2<f64>>;

    /// Computes the global lumped nodal mass
    fn mass(&self) -> Result<Array2<f64>>;
}

/// Combines several element collections by summing their nodal arrays
impl ElementCollection for Vec<Box<dyn ElementCollection>> {
    fn force(&mut self) -> Result<Array2<f64>> {
        let mut total: Option<Array2<f64>> = None;
        for member in self.iter_mut() {
            let force = member.force()?;
            total = match total {
                None => Some(force),
                Some(sum) => {
                    if sum.dim() != force.dim() {
                        return Err(Error::ShapeMismatch(format!(
                            "cannot combine element collections with force shapes {:?} and {:?}",
                            sum.dim(),
                            force.dim()
                        )));
                    }
                    Some(sum + force)
                }
            };
        }
        total.ok_or(Error::MissingDependency("elements"))
    }

    fn mass(&self) -> Result<Array2<f64>> {
        let mut total: Option<Array2<f64>> = None;
        for member in self.iter() {
            let mass = member.mass()?;
            total = match total {
                None => Some(mass),
                Some(sum) => {
                    if sum.dim() != mass.dim() {
                        return Err(Error::ShapeMismatch(format!(
                            "cannot combine element collections with mass shapes {:?} and {:?}",
                            sum.dim(),
                            mass.dim()
                        )));
                    }
                    Some(sum + mass)
                }
            };
        }
        total.ok_or(Error::MissingDependency("elements"))
    }
}
