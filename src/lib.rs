//! Explicit structural dynamics kernel
//!
//! This crate implements the computational core of an explicit (matrix-free)
//! structural dynamics simulation: point masses ("nodes") connected by truss
//! elements, a constitutive abstraction mapping strain to stress, scatter-add
//! assembly of per-element contributions into global nodal arrays, and a model
//! aggregating nodes and elements into mass, force, and acceleration queries.
//!
//! The design is explicit: there is no global stiffness matrix and no linear
//! solver, only lumped nodal mass and nodal force. A time integrator driving
//! the model is outside the scope of this crate.

mod base;
mod constraint;
mod elements;
mod error;
mod material;
mod model;
mod nodes;
pub use crate::base::*;
pub use crate::constraint::*;
pub use crate::elements::*;
pub use crate::error::*;
pub use crate::material::*;
pub use crate::model::*;
pub use crate::nodes::*;
