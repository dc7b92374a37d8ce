use log::debug;
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::config::{NIGGLI_EPSILON, NIGGLI_ITERATION_LIMIT};
use crate::error::{Result, TwinError};
use crate::lattice::lattice_types::Centering;
use crate::lattice::unit_cell::UnitCell;
use crate::symmetries::symmetry_operations::Op;

/// Niggli-reduced cell together with the basis change that produced it.
///
/// `change_of_basis` maps reduced fractional coordinates to coordinates of the
/// original cell: `x_original = P * x_reduced`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReducedCell {
    pub cell: UnitCell,
    pub change_of_basis: Op,
}

/// Krivy–Gruber reduction of a G6 vector (A, B, C, ξ, η, ζ), with the
/// epsilon handling of Grosse-Kunstleve, Sauter & Adams (2004).
///
/// A = a·a, B = b·b, C = c·c, ξ = 2b·c, η = 2a·c, ζ = 2a·b.
#[derive(Debug, Clone)]
pub struct NiggliReduction {
    a: f64,
    b: f64,
    c: f64,
    xi: f64,
    eta: f64,
    zeta: f64,
    epsilon: f64,
    change_of_basis: Op,
    iterations: usize,
}

fn sign(x: f64, epsilon: f64) -> i8 {
    if x > epsilon {
        1
    } else if x < -epsilon {
        -1
    } else {
        0
    }
}

impl NiggliReduction {
    /// Start from the primitive cell of `cell` with the given centring.
    pub fn new(cell: &UnitCell, centering: Centering) -> Self {
        let to_primitive = centering.to_primitive_op();
        let p = to_primitive.float_rotation();
        let g = p.transpose() * cell.metric_tensor() * p;
        let volume = g.determinant().max(0.0).sqrt();
        NiggliReduction {
            a: g[(0, 0)],
            b: g[(1, 1)],
            c: g[(2, 2)],
            xi: 2.0 * g[(1, 2)],
            eta: 2.0 * g[(0, 2)],
            zeta: 2.0 * g[(0, 1)],
            epsilon: NIGGLI_EPSILON * volume.powf(2.0 / 3.0),
            change_of_basis: to_primitive,
            iterations: 0,
        }
    }

    /// Current G6 vector.
    pub fn g6(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.xi, self.eta, self.zeta]
    }

    /// Number of completed reduction cycles.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Metric tensor of the current cell.
    pub fn metric_tensor(&self) -> Matrix3<f64> {
        let (half_xi, half_eta, half_zeta) = (self.xi / 2.0, self.eta / 2.0, self.zeta / 2.0);
        Matrix3::new(
            self.a, half_zeta, half_eta, //
            half_zeta, self.b, half_xi, //
            half_eta, half_xi, self.c,
        )
    }

    /// Whether the current G6 vector satisfies the Niggli conditions.
    pub fn is_niggli(&self) -> bool {
        let mut probe = self.clone();
        matches!(probe.step(), Ok(false))
            && probe.g6().iter().zip(self.g6()).all(|(x, y)| (x - y).abs() <= self.epsilon)
    }

    pub fn reduce(mut self) -> Result<ReducedCell> {
        loop {
            if self.iterations >= NIGGLI_ITERATION_LIMIT {
                return Err(TwinError::ReductionFailed(format!(
                    "no convergence after {} iterations",
                    NIGGLI_ITERATION_LIMIT
                )));
            }
            self.iterations += 1;
            if !self.step()? {
                break;
            }
        }
        debug!(
            "Niggli reduction finished after {} iterations: G6 = {:?}",
            self.iterations,
            self.g6()
        );
        let cell = UnitCell::from_metric_tensor(&self.metric_tensor())?;
        Ok(ReducedCell {
            cell,
            change_of_basis: self.change_of_basis,
        })
    }

    fn transform(&mut self, matrix: [i8; 9]) {
        self.change_of_basis = self
            .change_of_basis
            .combine(&Op::from_integer_rotation(&matrix));
    }

    /// One pass of steps N1-N8. Returns true when a step restarting the cycle
    /// was applied.
    fn step(&mut self) -> Result<bool> {
        let eps = self.epsilon;

        // N1
        if self.a > self.b + eps
            || ((self.a - self.b).abs() <= eps && self.xi.abs() > self.eta.abs() + eps)
        {
            std::mem::swap(&mut self.a, &mut self.b);
            std::mem::swap(&mut self.xi, &mut self.eta);
            self.transform([0, -1, 0, -1, 0, 0, 0, 0, -1]);
        }

        // N2
        if self.b > self.c + eps
            || ((self.b - self.c).abs() <= eps && self.eta.abs() > self.zeta.abs() + eps)
        {
            std::mem::swap(&mut self.b, &mut self.c);
            std::mem::swap(&mut self.eta, &mut self.zeta);
            self.transform([-1, 0, 0, 0, 0, -1, 0, -1, 0]);
            return Ok(true);
        }

        // N3, N4
        let (l, m, n) = (sign(self.xi, eps), sign(self.eta, eps), sign(self.zeta, eps));
        if l * m * n == 1 {
            let flip = |s: i8| if s == -1 { -1 } else { 1 };
            self.transform([flip(l), 0, 0, 0, flip(m), 0, 0, 0, flip(n)]);
            self.xi = self.xi.abs();
            self.eta = self.eta.abs();
            self.zeta = self.zeta.abs();
        } else {
            let mut ijk = [1i8; 3];
            let mut zero_at = None;
            for (idx, s) in [l, m, n].into_iter().enumerate() {
                match s {
                    1 => ijk[idx] = -1,
                    0 => zero_at = Some(idx),
                    _ => {}
                }
            }
            if ijk[0] * ijk[1] * ijk[2] < 0 {
                let idx = zero_at.ok_or_else(|| {
                    TwinError::ReductionFailed("step N4 cannot keep a right-handed basis".to_string())
                })?;
                ijk[idx] = -1;
            }
            self.transform([ijk[0], 0, 0, 0, ijk[1], 0, 0, 0, ijk[2]]);
            self.xi = -self.xi.abs();
            self.eta = -self.eta.abs();
            self.zeta = -self.zeta.abs();
        }

        // N5
        if self.xi.abs() > self.b + eps
            || ((self.xi - self.b).abs() <= eps && 2.0 * self.eta < self.zeta - eps)
            || ((self.xi + self.b).abs() <= eps && self.zeta < -eps)
        {
            let s = self.xi.signum();
            self.c += self.b - s * self.xi;
            self.eta -= s * self.zeta;
            self.xi -= 2.0 * s * self.b;
            self.transform([1, 0, 0, 0, 1, -(s as i8), 0, 0, 1]);
            return Ok(true);
        }

        // N6
        if self.eta.abs() > self.a + eps
            || ((self.eta - self.a).abs() <= eps && 2.0 * self.xi < self.zeta - eps)
            || ((self.eta + self.a).abs() <= eps && self.zeta < -eps)
        {
            let s = self.eta.signum();
            self.c += self.a - s * self.eta;
            self.xi -= s * self.zeta;
            self.eta -= 2.0 * s * self.a;
            self.transform([1, 0, -(s as i8), 0, 1, 0, 0, 0, 1]);
            return Ok(true);
        }

        // N7
        if self.zeta.abs() > self.a + eps
            || ((self.zeta - self.a).abs() <= eps && 2.0 * self.xi < self.eta - eps)
            || ((self.zeta + self.a).abs() <= eps && self.eta < -eps)
        {
            let s = self.zeta.signum();
            self.b += self.a - s * self.zeta;
            self.xi -= s * self.eta;
            self.zeta -= 2.0 * s * self.a;
            self.transform([1, -(s as i8), 0, 0, 1, 0, 0, 0, 1]);
            return Ok(true);
        }

        // N8
        let sum = self.xi + self.eta + self.zeta + self.a + self.b;
        if sum < -eps || (sum.abs() <= eps && 2.0 * (self.a + self.eta) + self.zeta > eps) {
            self.c += sum;
            self.xi += 2.0 * self.b + self.zeta;
            self.eta += 2.0 * self.a + self.zeta;
            self.transform([1, 0, 1, 0, 1, 1, 0, 0, 1]);
            return Ok(true);
        }

        Ok(false)
    }
}

/// Niggli-reduce `cell` after converting it to the primitive setting of `centering`.
pub fn niggli_reduce(cell: &UnitCell, centering: Centering) -> Result<ReducedCell> {
    NiggliReduction::new(cell, centering).reduce()
}
