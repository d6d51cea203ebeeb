use crate::{ElementCollection, Nodes, Result};
use ndarray::Array2;
use std::cell::RefCell;
use std::rc::Rc;

/// Aggregates nodes and elements into mass, force, and acceleration queries
///
/// The model combines the elastic nodal force of its element collection with
/// an optional linear viscous damping term and exposes the resulting nodal
/// acceleration for an external explicit time integrator.
///
/// Zero mass on a node untouched by any element makes the acceleration
/// undefined there; the caller must ensure every node is referenced by at
/// least one element.
pub struct Model {
    /// Shared nodal state
    pub nodes: Rc<RefCell<Nodes>>,

    /// Element collection producing nodal force and mass
    pub elements: Box<dyn ElementCollection>,

    /// Viscous damping coefficient (0 = no damping)
    pub damping: f64,
}

impl Model {
    /// Allocates a new instance without damping
    pub fn new(nodes: Rc<RefCell<Nodes>>, elements: Box<dyn ElementCollection>) -> Self {
        Model {
            nodes,
            elements,
            damping: 0.0,
        }
    }

    /// Sets the viscous damping coefficient
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Computes the global lumped nodal mass (n_node, 1)
    pub fn mass(&self) -> Result<Array2<f64>> {
        self.elements.mass()
    }

    /// Computes the global nodal force (n_node, n_dim)
    ///
    /// The elastic force of the elements, minus `damping * v * mass` when a
    /// damping coefficient is set.
    pub fn force(&mut self) -> Result<Array2<f64>> {
        let mut force = self.elements.force()?;
        if self.damping != 0.0 {
            let mass = self.elements.mass()?;
            let nodes = self.nodes.borrow();
            force = force - (&nodes.vv * &mass) * self.damping;
        }
        Ok(force)
    }

    /// Computes the nodal acceleration `force / mass` (n_node, n_dim)
    pub fn acceleration(&mut self) -> Result<Array2<f64>> {
        let force = self.force()?;
        let mass = self.mass()?;
        Ok(&force / &mass)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
