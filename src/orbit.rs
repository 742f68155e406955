use nalgebra::Vector3;
use roots::{find_root_newton_raphson, SimpleConvergency};

use crate::{
    astro_errors::AstroError,
    constants::{principal_angle, Radian},
};

/// Convergence threshold of the Kepler solve, radians.
const KEPLER_TOLERANCE: Radian = 1e-12;

const KEPLER_MAX_ITER: usize = 30;

/// Equinoctial orbital elements.
/// Units:
/// - a: AU
/// - h, k: dimensionless (eccentricity vector)
/// - p, q: dimensionless (inclination vector)
/// - lambda: radians (mean longitude)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquinoctialElements {
    pub semi_major_axis: f64,        // a (AU)
    pub eccentricity_sin_lon: f64,   // h = e * sin(ϖ)
    pub eccentricity_cos_lon: f64,   // k = e * cos(ϖ)
    pub tan_half_incl_sin_node: f64, // p = tan(i/2) * sin(Ω)
    pub tan_half_incl_cos_node: f64, // q = tan(i/2) * cos(Ω)
    pub mean_longitude: f64,         // λ = ϖ + M
}

impl EquinoctialElements {
    /// Build from classical elements, all angles in radians.
    ///
    /// Arguments
    /// -----------------
    /// * `a`: semi-major axis.
    /// * `e`: eccentricity.
    /// * `i`: inclination.
    /// * `node`: longitude of the ascending node Ω.
    /// * `peri_lon`: longitude of pericentre ϖ = Ω + ω.
    /// * `mean_lon`: mean longitude λ = ϖ + M.
    pub fn from_classical(a: f64, e: f64, i: Radian, node: Radian, peri_lon: Radian, mean_lon: Radian) -> Self {
        let tgi2 = (i / 2.0).tan();
        EquinoctialElements {
            semi_major_axis: a,
            eccentricity_sin_lon: e * peri_lon.sin(),
            eccentricity_cos_lon: e * peri_lon.cos(),
            tan_half_incl_sin_node: tgi2 * node.sin(),
            tan_half_incl_cos_node: tgi2 * node.cos(),
            mean_longitude: mean_lon,
        }
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity_sin_lon.hypot(self.eccentricity_cos_lon)
    }

    /// Solve the equinoctial Kepler equation for the eccentric longitude `F`:
    ///
    /// ```text
    /// F − k·sin F + h·cos F = λ
    /// ```
    fn solve_kepler_equation(&self) -> Result<Radian, AstroError> {
        let lambda = principal_angle(self.mean_longitude);
        let f = |fval: f64| -> f64 {
            fval - self.eccentricity_cos_lon * fval.sin() + self.eccentricity_sin_lon * fval.cos()
                - lambda
        };
        let df = |fval: f64| -> f64 {
            1.0 - self.eccentricity_cos_lon * fval.cos() - self.eccentricity_sin_lon * fval.sin()
        };

        let mut tol = SimpleConvergency {
            eps: KEPLER_TOLERANCE,
            max_iter: KEPLER_MAX_ITER,
        };

        Ok(find_root_newton_raphson(lambda, &f, &df, &mut tol)?)
    }

    /// Cartesian position and velocity in the reference plane of the elements.
    ///
    /// Arguments
    /// -----------------
    /// * `mean_motion`: mean motion in radians per day.
    ///
    /// Return
    /// ----------
    /// * `(position, velocity)` in the units of `a` and `a`/day, or
    ///   [`AstroError::InvalidInput`] for a non-elliptic orbit.
    pub fn to_state(&self, mean_motion: f64) -> Result<(Vector3<f64>, Vector3<f64>), AstroError> {
        let (h, k) = (self.eccentricity_sin_lon, self.eccentricity_cos_lon);
        let (p, q) = (self.tan_half_incl_sin_node, self.tan_half_incl_cos_node);
        let a = self.semi_major_axis;

        let eccentricity_pow2 = h * h + k * k;
        if eccentricity_pow2 >= 1.0 {
            return Err(AstroError::InvalidInput(format!(
                "eccentricity {} is not elliptic",
                eccentricity_pow2.sqrt()
            )));
        }

        let ecc_lon = self.solve_kepler_equation()?;
        let (sin_f, cos_f) = ecc_lon.sin_cos();

        let beta = 1. / (1. + (1. - eccentricity_pow2).sqrt());
        let beta_hk = beta * h * k;

        let xe = a * ((1. - beta * h * h) * cos_f + beta_hk * sin_f - k);
        let ye = a * ((1. - beta * k * k) * sin_f + beta_hk * cos_f - h);

        let inv_u = 1.0 / (1. + p * p + q * q);
        let common = 2. * p * q * inv_u;
        let f_vector = Vector3::new((1. - p * p + q * q) * inv_u, common, -2. * p * inv_u);
        let g_vector = Vector3::new(common, (1. + p * p - q * q) * inv_u, 2. * q * inv_u);

        let v_const = mean_motion * a * a / xe.hypot(ye);
        let v_xe = v_const * (beta_hk * cos_f - (1. - beta * h * h) * sin_f);
        let v_ye = v_const * ((1. - beta * k * k) * cos_f - beta_hk * sin_f);

        Ok((xe * f_vector + ye * g_vector, v_xe * f_vector + v_ye * g_vector))
    }
}

#[cfg(test)]
mod orbit_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_circular_equatorial() {
        let el = EquinoctialElements::from_classical(2.0, 0.0, 0.0, 0.0, 0.0, 0.5);
        let (pos, vel) = el.to_state(0.1).unwrap();
        assert_relative_eq!(pos, Vector3::new(2.0 * 0.5f64.cos(), 2.0 * 0.5f64.sin(), 0.0), epsilon = 1e-12);
        assert_relative_eq!(vel.norm(), 0.2, epsilon = 1e-12);
        assert_relative_eq!(pos.dot(&vel), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_perihelion_distance() {
        // At λ = ϖ the body sits at pericentre, a(1 − e) from the focus.
        let el = EquinoctialElements::from_classical(1.5, 0.2, 0.3, 1.0, 2.0, 2.0);
        let (pos, vel) = el.to_state(0.01).unwrap();
        assert_relative_eq!(pos.norm(), 1.2, epsilon = 1e-12);
        assert_relative_eq!(pos.dot(&vel), 0.0, epsilon = 1e-12);
        // Inclination is preserved by the orbital plane basis.
        let normal = pos.cross(&vel).normalize();
        assert_relative_eq!(normal.z, 0.3f64.cos(), epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_hyperbolic() {
        let el = EquinoctialElements::from_classical(1.0, 1.2, 0.0, 0.0, 0.0, 0.0);
        assert!(el.to_state(0.01).is_err());
    }
}
