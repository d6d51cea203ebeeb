use approx::{assert_abs_diff_eq, assert_relative_eq};
use exdyn::{BasicMaterial, ElementCollection, Nodes, Result, Truss};
use ndarray::{array, Array2};
use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

/// Two bars of equal length fanning out of one origin node, mirrored about
/// the x axis, both stretched by the same longitudinal strain.
struct Mirrored {
    nodes: Rc<RefCell<Nodes>>,
    truss: Truss,
    area: f64,
    young: f64,
    length: f64,
    density: f64,
    strain: f64,
}

fn mirrored(angle: f64, aeld: (f64, f64, f64, f64), strain: f64) -> Result<Mirrored> {
    let (area, young, length, density) = aeld;
    let origin = [3.7 * length, -1.2 * length];
    let p1 = [
        origin[0] + length * angle.cos(),
        origin[1] + length * angle.sin(),
    ];
    let p2 = [
        origin[0] + length * angle.cos(),
        origin[1] - length * angle.sin(),
    ];
    let xx = array![[origin[0], origin[1]], [p1[0], p1[1]], [p2[0], p2[1]]];
    let mut uu = Array2::<f64>::zeros((3, 2));
    for node in 1..3 {
        for c in 0..2 {
            uu[[node, c]] = strain * (xx[[node, c]] - xx[[0, c]]);
        }
    }
    let nodes = Rc::new(RefCell::new(Nodes::with_state(
        xx,
        uu,
        Array2::zeros((3, 2)),
    )?));
    let mat = Rc::new(BasicMaterial::new(move |e| young * e, density));
    let truss = Truss::new(array![[0_usize, 1], [0, 2]])?
        .with_nodes(nodes.clone())
        .with_material(mat)
        .with_area(area);
    Ok(Mirrored {
        nodes,
        truss,
        area,
        young,
        length,
        density,
        strain,
    })
}

const ANGLES: [f64; 3] = [0.0, PI / 6.0, PI / 2.0];
const AELD: [(f64, f64, f64, f64); 2] = [(1e-6, 2.0, 0.05, 3.0), (0.01, 2e11, 10.0, 3e3)];
const STRAINS: [f64; 2] = [0.023, -0.031];

#[test]
fn mass_matches_analytic() -> Result<()> {
    for &angle in &ANGLES {
        for &aeld in &AELD {
            let case = mirrored(angle, aeld, 0.01)?;
            let mass = case.truss.mass()?;
            assert_eq!(mass.dim(), (3, 1));
            let bar_weight = case.density * case.area * case.length;
            assert_relative_eq!(mass[[0, 0]], bar_weight, max_relative = 1e-12);
            assert_relative_eq!(mass[[1, 0]], bar_weight / 2.0, max_relative = 1e-12);
            assert_relative_eq!(mass[[2, 0]], bar_weight / 2.0, max_relative = 1e-12);
        }
    }
    Ok(())
}

#[test]
fn force_matches_analytic() -> Result<()> {
    for &angle in &ANGLES {
        for &aeld in &AELD {
            for &strain in &STRAINS {
                let mut case = mirrored(angle, aeld, strain)?;
                let forces = case.truss.force()?;
                assert_eq!(forces.dim(), (3, 2));
                let magnitude = (case.strain * case.young * case.area).abs();
                let norm1 = forces.row(1).dot(&forces.row(1)).sqrt();
                assert_relative_eq!(norm1, magnitude, max_relative = 1e-9);
                // the restoring force at a stretched head opposes its displacement
                let nodes = case.nodes.borrow();
                for c in 0..2 {
                    assert_relative_eq!(
                        forces[[1, c]],
                        -nodes.uu[[1, c]] * case.young * case.area / case.length,
                        max_relative = 1e-9,
                        epsilon = magnitude * 1e-12
                    );
                }
            }
        }
    }
    Ok(())
}

#[test]
fn mirrored_forces_have_mirrored_components() -> Result<()> {
    for &angle in &ANGLES {
        for &aeld in &AELD {
            for &strain in &STRAINS {
                let mut case = mirrored(angle, aeld, strain)?;
                let forces = case.truss.force()?;
                let magnitude = (case.strain * case.young * case.area).abs();
                // transverse components cancel at the shared origin
                assert_abs_diff_eq!(forces[[0, 1]], 0.0, epsilon = magnitude * 1e-12);
                // branch forces are componentwise mirror images
                assert_relative_eq!(
                    forces[[1, 0]],
                    forces[[2, 0]],
                    max_relative = 1e-12,
                    epsilon = magnitude * 1e-12
                );
                assert_relative_eq!(
                    forces[[1, 1]],
                    -forces[[2, 1]],
                    max_relative = 1e-12,
                    epsilon = magnitude * 1e-12
                );
            }
        }
    }
    Ok(())
}

#[test]
fn coincident_ends_produce_equal_forces() -> Result<()> {
    for &aeld in &AELD {
        let mut case = mirrored(PI / 6.0, aeld, 0.023)?;
        // move node 1 onto the current position of node 2
        {
            let mut nodes = case.nodes.borrow_mut();
            let target = nodes.x().row(2).to_owned();
            let reference = nodes.xx.row(1).to_owned();
            nodes.uu.row_mut(1).assign(&(&target - &reference));
        }
        let forces = case.truss.force()?;
        let magnitude = (0.023 * case.young * case.area).abs();
        for c in 0..2 {
            assert_relative_eq!(
                forces[[1, c]],
                forces[[2, c]],
                max_relative = 1e-12,
                epsilon = magnitude * 1e-12
            );
        }
        let strain = case.truss.strain.as_ref().unwrap();
        assert_relative_eq!(strain[0], strain[1], max_relative = 1e-12);
    }
    Ok(())
}
