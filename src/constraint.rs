use crate::{Error, Nodes, Result};
use ndarray::{ArrayD, Axis};
use std::cell::RefCell;
use std::rc::Rc;

/// Selects which nodal field a constraint application targets
///
/// Callers use the field to activate constraints only during the matching
/// stage of an integration step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodalField {
    /// The displacement field
    Displacement,

    /// The velocity field
    Velocity,
}

/// Constrains the velocity of selected nodes to a prescribed value
///
/// The target may be a scalar (rank 0), a single velocity vector applied to
/// every selected node (rank 1, broadcastable to a row), or one vector per
/// selected node (rank 2 of shape `(n_selected, n_dim)`). Whatever the
/// numeric type of the caller's values, the stored target is floating point.
///
/// Applying the constraint overwrites only the velocity rows of the selected
/// nodes; all other state is untouched. Applying it to the displacement
/// field does nothing: this operator only ever constrains velocity.
pub struct ImposeVelocity {
    nodes: Rc<RefCell<Nodes>>,
    node_ids: Vec<usize>,
    velocity: ArrayD<f64>,
}

impl ImposeVelocity {
    /// Allocates a new instance
    pub fn new<T>(nodes: Rc<RefCell<Nodes>>, node_ids: Vec<usize>, velocity: ArrayD<T>) -> Self
    where
        T: Into<f64> + Clone,
    {
        ImposeVelocity {
            nodes,
            node_ids,
            velocity: velocity.mapv(T::into),
        }
    }

    /// Overwrites the selected velocity rows if `field` is the velocity
    ///
    /// For any other field this is deliberately a no-op.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if a selected node id does not exist and
    /// `ShapeMismatch` if the stored target cannot broadcast to a velocity
    /// row. Both are detected before any row is written.
    pub fn apply(&self, field: NodalField) -> Result<()> {
        if field != NodalField::Velocity {
            return Ok(());
        }
        let mut nodes = self.nodes.borrow_mut();
        if let Some(&bad) = self.node_ids.iter().find(|&&id| id >= nodes.len()) {
            return Err(Error::IndexOutOfBounds(format!(
                "constrained node {} exceeds the {} nodes",
                bad,
                nodes.len()
            )));
        }
        let ndim = nodes.ndim();
        if self.velocity.ndim() == 2 {
            if self.velocity.shape() != &[self.node_ids.len(), ndim][..] {
                return Err(Error::ShapeMismatch(format!(
                    "velocity target of shape {:?} does not provide one row per constrained node",
                    self.velocity.shape()
                )));
            }
            for (k, &id) in self.node_ids.iter().enumerate() {
                nodes
                    .vv
                    .row_mut(id)
                    .assign(&self.velocity.index_axis(Axis(0), k));
            }
        } else {
            let target = self.velocity.broadcast(ndim).ok_or_else(|| {
                Error::ShapeMismatch(format!(
                    "velocity target of shape {:?} does not broadcast to a row of {} components",
                    self.velocity.shape(),
                    ndim
                ))
            })?;
            for &id in &self.node_ids {
                nodes.vv.row_mut(id).assign(&target);
            }
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
