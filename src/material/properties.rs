use crate::{Error, Result};

/// Computes the shear modulus and Lamé's first parameter
///
/// Exactly two of the four named elastic constants must be given; the
/// remaining two follow from the standard isotropic elasticity identities.
/// All six pairs are supported.
///
/// # Errors
///
/// Returns `InvalidArgumentCount` if the number of supplied parameters is
/// not exactly two.
///
/// # Examples
///
/// ```
/// use exdyn::mu_lambda;
///
/// let (mu, lam) = mu_lambda(Some(2.0), Some(0.3), None, None).unwrap();
/// assert!((mu - 1.0 / 1.3).abs() < 1e-15);
/// assert!((lam - 2.0 * 0.3 / 1.3 / 0.4).abs() < 1e-15);
/// ```
pub fn mu_lambda(
    young: Option<f64>,
    poisson: Option<f64>,
    mu: Option<f64>,
    lam: Option<f64>,
) -> Result<(f64, f64)> {
    let count = [
        young.is_some(),
        poisson.is_some(),
        mu.is_some(),
        lam.is_some(),
    ]
    .iter()
    .filter(|&&given| given)
    .count();
    match (young, poisson, mu, lam) {
        (Some(e), Some(nu), None, None) => Ok((
            e / (2.0 * (1.0 + nu)),
            e * nu / ((1.0 + nu) * (1.0 - 2.0 * nu)),
        )),
        (Some(e), None, Some(g), None) => Ok((g, g * (e - 2.0 * g) / (3.0 * g - e))),
        (Some(e), None, None, Some(l)) => {
            let r = f64::sqrt(e * e + 9.0 * l * l + 2.0 * e * l);
            Ok(((e - 3.0 * l + r) / 4.0, l))
        }
        (None, Some(nu), Some(g), None) => Ok((g, 2.0 * g * nu / (1.0 - 2.0 * nu))),
        (None, Some(nu), None, Some(l)) => Ok((l * (1.0 - 2.0 * nu) / (2.0 * nu), l)),
        (None, None, Some(g), Some(l)) => Ok((g, l)),
        _ => Err(Error::InvalidArgumentCount(count)),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
