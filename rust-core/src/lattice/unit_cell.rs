use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::LATTICE_TOLERANCE;
use crate::error::{Result, TwinError};
use crate::interfaces::Space;

/// A 3D unit cell given by its parameters.
///
/// The orthogonalization matrix follows the PDB convention: `a` along x and
/// `b` in the xy plane. Its columns are the basis vectors in Cartesian space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitCell {
    /// Lengths in Ångström.
    pub a: f64,
    pub b: f64,
    pub c: f64,
    /// Angles in degrees.
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    /// Fractional → Cartesian.
    pub orth: Matrix3<f64>,
    /// Cartesian → fractional.
    pub frac: Matrix3<f64>,
    pub volume: f64,
}

/// Cosine of an angle in degrees; exactly zero for 90°.
fn cos_deg(angle: f64) -> f64 {
    if angle == 90.0 {
        0.0
    } else {
        angle.to_radians().cos()
    }
}

impl UnitCell {
    /// Construct a new cell from lengths (Å) and angles (degrees).
    pub fn new(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Result<Self> {
        // Run tests on the parameters to decide whether a cell can be constructed
        for (name, length) in [("a", a), ("b", b), ("c", c)] {
            if !length.is_finite() || length <= 0.0 {
                return Err(TwinError::InvalidCell(format!(
                    "length {} must be positive, got {}",
                    name, length
                )));
            }
        }
        for (name, angle) in [("alpha", alpha), ("beta", beta), ("gamma", gamma)] {
            if !angle.is_finite() || angle <= 0.0 || angle >= 180.0 {
                return Err(TwinError::InvalidCell(format!(
                    "angle {} must lie in (0, 180), got {}",
                    name, angle
                )));
            }
        }

        let (cos_alpha, cos_beta, cos_gamma) = (cos_deg(alpha), cos_deg(beta), cos_deg(gamma));
        let volume_factor = 1.0 - cos_alpha * cos_alpha - cos_beta * cos_beta
            - cos_gamma * cos_gamma
            + 2.0 * cos_alpha * cos_beta * cos_gamma;
        if volume_factor <= LATTICE_TOLERANCE {
            return Err(TwinError::InvalidCell(format!(
                "angles {}, {}, {} do not span a volume",
                alpha, beta, gamma
            )));
        }
        let volume = a * b * c * volume_factor.sqrt();

        let sin_beta = beta.to_radians().sin();
        let sin_gamma = gamma.to_radians().sin();
        let cos_alpha_star = (cos_beta * cos_gamma - cos_alpha) / (sin_beta * sin_gamma);
        let sin_alpha_star = (1.0 - cos_alpha_star * cos_alpha_star).sqrt();

        #[rustfmt::skip]
        let orth = Matrix3::new(
            a, b * cos_gamma, c * cos_beta,
            0.0, b * sin_gamma, -c * sin_beta * cos_alpha_star,
            0.0, 0.0, c * sin_beta * sin_alpha_star,
        );
        let frac = orth.try_inverse().ok_or_else(|| {
            TwinError::InvalidCell("orthogonalization matrix is singular".to_string())
        })?;

        Ok(UnitCell {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
            orth,
            frac,
            volume,
        })
    }

    /// Construct a cell from its metric tensor G (G_ij = a_i · a_j).
    pub fn from_metric_tensor(metric: &Matrix3<f64>) -> Result<Self> {
        let a = metric[(0, 0)].sqrt();
        let b = metric[(1, 1)].sqrt();
        let c = metric[(2, 2)].sqrt();
        let angle = |g: f64, x: f64, y: f64| (g / (x * y)).clamp(-1.0, 1.0).acos().to_degrees();
        Self::new(
            a,
            b,
            c,
            angle(metric[(1, 2)], b, c),
            angle(metric[(0, 2)], a, c),
            angle(metric[(0, 1)], a, b),
        )
    }

    /// Get cell parameters: a, b, c, α, β, γ
    pub fn parameters(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.alpha, self.beta, self.gamma]
    }

    /// Metric tensor G = A^T * A.
    pub fn metric_tensor(&self) -> Matrix3<f64> {
        self.orth.transpose() * self.orth
    }

    /// Convert fractional (u,v,w) coords → cartesian.
    pub fn frac_to_cart(&self, v_frac: &Vector3<f64>) -> Vector3<f64> {
        self.orth * v_frac
    }

    /// Convert cartesian coords → fractional (u,v,w).
    pub fn cart_to_frac(&self, v_cart: &Vector3<f64>) -> Vector3<f64> {
        self.frac * v_cart
    }

    /// Cartesian direction of a lattice vector given in direct-space (uvw) or
    /// reciprocal-space (hkl) components.
    ///
    /// Reciprocal vectors transform with the transposed fractionalization
    /// matrix, i.e. `tau = h^T * frac`.
    pub fn axis_to_cartesian(&self, axis: &Vector3<f64>, space: Space) -> Vector3<f64> {
        match space {
            Space::Real => self.orth * axis,
            Space::Reciprocal => self.frac.transpose() * axis,
        }
    }

    /// Whether two cells have the same parameters within relative length and
    /// absolute angle (degrees) tolerances.
    pub fn is_similar(&self, other: &UnitCell, rel: f64, deg: f64) -> bool {
        let lengths = [(self.a, other.a), (self.b, other.b), (self.c, other.c)];
        let angles = [
            (self.alpha, other.alpha),
            (self.beta, other.beta),
            (self.gamma, other.gamma),
        ];
        lengths.iter().all(|(x, y)| (x - y).abs() <= rel * x.max(*y))
            && angles.iter().all(|(x, y)| (x - y).abs() <= deg)
    }
}
