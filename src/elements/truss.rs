use super::ElementCollection;
use crate::{assemble, Error, Material, Nodes, Result};
use ndarray::{s, Array1, Array2, Array3, Axis, Ix1, Ix2};
use std::cell::RefCell;
use std::rc::Rc;

/// Implements a collection of two-node truss elements
///
/// A truss element transmits only axial force. Connectivity is an
/// `(n_element, 2)` array of node indices; each row holds the tail and the
/// head of one bar. The cross-section area is either uniform (length-1
/// array) or per-element (length `n_element`).
///
/// The material and the nodes are late-bound shared references: both may be
/// absent at construction but must be assigned before `force()` or `mass()`
/// is called, otherwise those operations fail with `MissingDependency`.
///
/// After every `force()` call the per-element engineering strain and stress
/// are kept in `strain`/`stress` for inspection. They are diagnostic state,
/// overwritten by the next call.
pub struct Truss {
    /// Connectivity (n_element, 2); each row is (tail, head)
    pub conn: Array2<usize>,

    /// Material reference, required before force() and mass()
    pub material: Option<Rc<dyn Material>>,

    /// Nodes reference, required before force() and mass()
    pub nodes: Option<Rc<RefCell<Nodes>>>,

    /// Last computed engineering strain per element
    pub strain: Option<Array1<f64>>,

    /// Last computed stress per element
    pub stress: Option<Array1<f64>>,

    area: Array1<f64>,
}

impl Truss {
    /// Allocates a new instance with unit area and unbound material and nodes
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` unless `conn` has exactly two columns.
    pub fn new(conn: Array2<usize>) -> Result<Self> {
        if conn.ncols() != 2 {
            return Err(Error::ShapeMismatch(format!(
                "truss connectivity must have two columns, not {}",
                conn.ncols()
            )));
        }
        Ok(Truss {
            conn,
            material: None,
            nodes: None,
            strain: None,
            stress: None,
            area: Array1::from_elem(1, 1.0),
        })
    }

    /// Sets the nodes reference
    pub fn with_nodes(mut self, nodes: Rc<RefCell<Nodes>>) -> Self {
        self.nodes = Some(nodes);
        self
    }

    /// Sets the material reference
    pub fn with_material(mut self, material: Rc<dyn Material>) -> Self {
        self.material = Some(material);
        self
    }

    /// Sets a uniform cross-section area
    pub fn with_area(mut self, area: f64) -> Self {
        self.area = Array1::from_elem(1, area);
        self
    }

    /// Sets a per-element cross-section area
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` unless `areas` has one entry per element.
    pub fn with_areas(mut self, areas: Array1<f64>) -> Result<Self> {
        if areas.len() != self.conn.nrows() {
            return Err(Error::ShapeMismatch(format!(
                "{} areas given for {} elements",
                areas.len(),
                self.conn.nrows()
            )));
        }
        self.area = areas;
        Ok(self)
    }

    /// Returns the cross-section area array (length 1 or n_element)
    pub fn area(&self) -> &Array1<f64> {
        &self.area
    }

    fn check_conn(&self, num_nodes: usize) -> Result<()> {
        match self.conn.iter().find(|&&n| n >= num_nodes) {
            Some(&n) => Err(Error::IndexOutOfBounds(format!(
                "connectivity entry {} exceeds the {} nodes",
                n, num_nodes
            ))),
            None => Ok(()),
        }
    }
}

/// Computes the Euclidean norm of every row
fn row_norms(a: &Array2<f64>) -> Array1<f64> {
    a.map_axis(Axis(1), |row| row.dot(&row).sqrt())
}

impl ElementCollection for Truss {
    /// Computes the global nodal force
    ///
    /// Per element: reference vector `Xdiff` from tail to head, current
    /// vector `xdiff = Xdiff + udiff`, engineering strain `(L - L0)/L0`,
    /// stress from the material, and the axial force `stress * area` along
    /// the current unit direction. In tension the tail is pulled toward the
    /// head and the head toward the tail (equal and opposite pair); the
    /// per-element pairs are assembled into the `(n_node, n_dim)` global
    /// array, accumulating on shared nodes.
    fn force(&mut self) -> Result<Array2<f64>> {
        let material = self
            .material
            .clone()
            .ok_or(Error::MissingDependency("material"))?;
        let nodes = self.nodes.clone().ok_or(Error::MissingDependency("nodes"))?;
        let nodes = nodes.borrow();
        self.check_conn(nodes.len())?;
        let tail = self.conn.column(0).to_vec();
        let head = self.conn.column(1).to_vec();
        let xdiff0 = &nodes.xx.select(Axis(0), &head) - &nodes.xx.select(Axis(0), &tail);
        let udiff = &nodes.uu.select(Axis(0), &head) - &nodes.uu.select(Axis(0), &tail);
        let xdiff = &xdiff0 + &udiff;
        let l0 = row_norms(&xdiff0);
        let l = row_norms(&xdiff);
        let strain = (&l - &l0) / &l0;
        let stress = material.update(&strain.clone().into_dyn())?;
        let stress = stress.into_dimensionality::<Ix1>().map_err(|_| {
            Error::ShapeMismatch(
                "material returned a stress batch that is not one scalar per element".to_string(),
            )
        })?;
        let direction = &xdiff / &l.clone().insert_axis(Axis(1));
        let magnitude = (&stress * &self.area).insert_axis(Axis(1));
        let element_forces = &direction * &magnitude;
        let mut contributions = Array3::<f64>::zeros((self.conn.nrows(), 2, nodes.ndim()));
        contributions.slice_mut(s![.., 0, ..]).assign(&element_forces);
        contributions
            .slice_mut(s![.., 1, ..])
            .assign(&(-&element_forces));
        let force = assemble(nodes.len(), &self.conn, &contributions.into_dyn())?;
        self.strain = Some(strain);
        self.stress = Some(stress);
        force.into_dimensionality::<Ix2>().map_err(|_| {
            Error::ShapeMismatch("assembled force is not two-dimensional".to_string())
        })
    }

    /// Computes the global lumped nodal mass
    ///
    /// Per element: `L0 * area * density / 2` to each endpoint, assembled
    /// into an `(n_node, 1)` array.
    fn mass(&self) -> Result<Array2<f64>> {
        let material = self
            .material
            .as_ref()
            .ok_or(Error::MissingDependency("material"))?;
        let nodes = self
            .nodes
            .as_ref()
            .ok_or(Error::MissingDependency("nodes"))?
            .borrow();
        self.check_conn(nodes.len())?;
        let tail = self.conn.column(0).to_vec();
        let head = self.conn.column(1).to_vec();
        let xdiff0 = &nodes.xx.select(Axis(0), &head) - &nodes.xx.select(Axis(0), &tail);
        let l0 = row_norms(&xdiff0);
        let element_mass = (&l0 * &self.area) * (material.density() / 2.0);
        let mut contributions = Array3::<f64>::zeros((self.conn.nrows(), 2, 1));
        contributions.slice_mut(s![.., 0, 0]).assign(&element_mass);
        contributions.slice_mut(s![.., 1, 0]).assign(&element_mass);
        let mass = assemble(nodes.len(), &self.conn, &contributions.into_dyn())?;
        mass.into_dimensionality::<Ix2>().map_err(|_| {
            Error::ShapeMismatch("assembled mass is not two-dimensional".to_string())
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
