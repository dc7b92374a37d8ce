use std::cmp::Ordering;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::interfaces::Space;
use crate::lattice::unit_cell::UnitCell;
use crate::symmetries::symmetry_operations::Op;
use crate::twinning::two_fold_table::TWO_FOLD_TABLE;

/// A lattice two-fold operation and its obliquity (Le Page delta) in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpObliquity {
    pub op: Op,
    pub obliquity: f64,
}

/// Cosine of the Le Page obliquity between a direct-space axis and its
/// reciprocal-space counterpart in `reduced_cell`.
///
/// With `t = orth * d` and `tau = frac^T * r`, returns `min(1, |cos(t, tau)|)`.
/// The obliquity itself is `acos` of this value and lies in 0..90 degrees.
pub fn calculate_cos_obliquity(
    reduced_cell: &UnitCell,
    d_axis: &Vector3<f64>,
    r_axis: &Vector3<f64>,
) -> f64 {
    let t = reduced_cell.axis_to_cartesian(d_axis, Space::Real);
    let tau = reduced_cell.axis_to_cartesian(r_axis, Space::Reciprocal);
    let cos_delta = t.dot(&tau) / (t.norm() * tau.norm());
    cos_delta.abs().min(1.0)
}

/// Two-fold operations of the reduced lattice whose obliquity is below
/// `max_obliq` degrees, sorted by increasing obliquity.
///
/// The comparison is strict, so a tolerance of 0 accepts nothing. Ties keep
/// the order of the two-fold table.
pub fn find_lattice_2fold_ops(reduced_cell: &UnitCell, max_obliq: f64) -> Vec<OpObliquity> {
    let cos_max_obliq = max_obliq.to_radians().cos();
    let mut ret: Vec<OpObliquity> = TWO_FOLD_TABLE
        .iter()
        .filter_map(|row| {
            let cos_delta = calculate_cos_obliquity(
                reduced_cell,
                &row.direct_axis(),
                &row.reciprocal_axis(),
            );
            (cos_delta > cos_max_obliq).then(|| OpObliquity {
                op: row.op(),
                obliquity: cos_delta.acos().to_degrees(),
            })
        })
        .collect();
    // sort_by is stable
    ret.sort_by(|a, b| {
        a.obliquity
            .partial_cmp(&b.obliquity)
            .unwrap_or(Ordering::Equal)
    });
    ret
}
