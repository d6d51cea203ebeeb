use super::{Elastic, Material};
use crate::Result;
use ndarray::{Array2, ArrayD, ArrayViewD};
use serde::{Deserialize, Serialize};

/// Implements an isotropic linear elastic solid in 3D
///
/// Precomputes the closed-form 6x6 Voigt stiffness from Young's modulus and
/// Poisson's ratio and delegates the stress computation to [`Elastic`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Isotropic3D {
    /// Young's modulus
    pub young: f64,

    /// Poisson's coefficient
    pub poisson: f64,

    elastic: Elastic,
}

/// Implements an isotropic linear elastic solid under plane-strain conditions
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IsotropicPlaneStrain {
    /// Young's modulus
    pub young: f64,

    /// Poisson's coefficient
    pub poisson: f64,

    elastic: Elastic,
}

/// Implements an isotropic linear elastic solid under plane-stress conditions
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IsotropicPlaneStress {
    /// Young's modulus
    pub young: f64,

    /// Poisson's coefficient
    pub poisson: f64,

    elastic: Elastic,
}

impl Isotropic3D {
    /// Allocates a new instance with zero density
    pub fn new(young: f64, poisson: f64) -> Self {
        let coef = young / (1.0 + poisson) / (1.0 - 2.0 * poisson);
        let mut cc = Array2::<f64>::zeros((6, 6));
        for i in 0..3 {
            for j in 0..3 {
                cc[[i, j]] = if i == j {
                    coef * (1.0 - poisson)
                } else {
                    coef * poisson
                };
            }
        }
        for i in 3..6 {
            cc[[i, i]] = coef * (1.0 - 2.0 * poisson) / 2.0;
        }
        Isotropic3D {
            young,
            poisson,
            elastic: Elastic::from_voigt(cc, 0.0),
        }
    }

    /// Sets the mass density
    pub fn with_density(mut self, density: f64) -> Self {
        self.elastic = self.elastic.with_density(density);
        self
    }

    /// Returns the Voigt stiffness matrix
    pub fn stiffness(&self) -> ArrayViewD<f64> {
        self.elastic.stiffness()
    }
}

impl Material for Isotropic3D {
    fn update(&self, strain: &ArrayD<f64>) -> Result<ArrayD<f64>> {
        self.elastic.update(strain)
    }

    fn density(&self) -> f64 {
        self.elastic.density()
    }

    fn mat_id(&self) -> u32 {
        2
    }
}

impl IsotropicPlaneStrain {
    /// Allocates a new instance with zero density
    pub fn new(young: f64, poisson: f64) -> Self {
        let coef = young / (1.0 + poisson) / (1.0 - 2.0 * poisson);
        let mut cc = Array2::<f64>::zeros((3, 3));
        cc[[0, 0]] = coef * (1.0 - poisson);
        cc[[0, 1]] = coef * poisson;
        cc[[1, 0]] = coef * poisson;
        cc[[1, 1]] = coef * (1.0 - poisson);
        cc[[2, 2]] = coef * (1.0 - 2.0 * poisson) / 2.0;
        IsotropicPlaneStrain {
            young,
            poisson,
            elastic: Elastic::from_voigt(cc, 0.0),
        }
    }

    /// Sets the mass density
    pub fn with_density(mut self, density: f64) -> Self {
        self.elastic = self.elastic.with_density(density);
        self
    }

    /// Returns the Voigt stiffness matrix
    pub fn stiffness(&self) -> ArrayViewD<f64> {
        self.elastic.stiffness()
    }
}

impl Material for IsotropicPlaneStrain {
    fn update(&self, strain: &ArrayD<f64>) -> Result<ArrayD<f64>> {
        self.elastic.update(strain)
    }

    fn density(&self) -> f64 {
        self.elastic.density()
    }

    fn mat_id(&self) -> u32 {
        3
    }
}

impl IsotropicPlaneStress {
    /// Allocates a new instance with zero density
    pub fn new(young: f64, poisson: f64) -> Self {
        let coef = young / (1.0 - poisson * poisson);
        let mut cc = Array2::<f64>::zeros((3, 3));
        cc[[0, 0]] = coef;
        cc[[0, 1]] = coef * poisson;
        cc[[1, 0]] = coef * poisson;
        cc[[1, 1]] = coef;
        cc[[2, 2]] = coef * (1.0 - poisson) / 2.0;
        IsotropicPlaneStress {
            young,
            poisson,
            elastic: Elastic::from_voigt(cc, 0.0),
        }
    }

    /// Sets the mass density
    pub fn with_density(mut self, density: f64) -> Self {
        self.elastic = self.elastic.with_density(density);
        self
    }

    /// Returns the Voigt stiffness matrix
    pub fn stiffness(&self) -> ArrayViewD<f64> {
        self.elastic.stiffness()
    }
}

impl Material for IsotropicPlaneStress {
    fn update(&self, strain: &ArrayD<f64>) -> Result<ArrayD<f64>> {
        self.elastic.update(strain)
    }

    fn density(&self) -> f64 {
        self.elastic.density()
    }

    fn mat_id(&self) -> u32 {
        4
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
