//! Implements the numerical building blocks shared by elements and materials

mod assemble;
mod btdot;
pub use crate::base::assemble::*;
pub use crate::base::btdot::*;
