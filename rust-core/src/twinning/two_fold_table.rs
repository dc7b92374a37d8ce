use nalgebra::Vector3;

use crate::symmetries::symmetry_operations::Op;

/// A two-fold rotation possible for a reduced cell, with its axis written in
/// direct-space (uvw) and reciprocal-space (hkl) components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoFoldData {
    /// Row-major integer rotation acting on fractional coordinates.
    pub matrix: [i8; 9],
    pub ds_axis: [i8; 3],
    pub rs_axis: [i8; 3],
}

const fn two_fold(matrix: [i8; 9], ds_axis: [i8; 3], rs_axis: [i8; 3]) -> TwoFoldData {
    TwoFoldData {
        matrix,
        ds_axis,
        rs_axis,
    }
}

impl TwoFoldData {
    /// The rotation as an operation without translation.
    pub fn op(&self) -> Op {
        Op::from_integer_rotation(&self.matrix)
    }

    pub fn direct_axis(&self) -> Vector3<f64> {
        Vector3::from(self.ds_axis.map(f64::from))
    }

    pub fn reciprocal_axis(&self) -> Vector3<f64> {
        Vector3::from(self.rs_axis.map(f64::from))
    }
}

/// The 81 two-fold operations possible for Niggli-reduced cells, as enumerated by
/// cctbx (`reduced_cell_two_folds.py`).
#[rustfmt::skip]
pub static TWO_FOLD_TABLE: [TwoFoldData; 81] = [
    two_fold([-1, -1, -1, 0, 0, 1, 0, 1, 0], [-1, 1, 1], [0, 1, 1]),
    two_fold([-1, -1, 0, 0, 1, 0, 0, -1, -1], [1, -2, 1], [0, 1, 0]),
    two_fold([-1, -1, 0, 0, 1, 0, 0, 0, -1], [-1, 2, 0], [0, 1, 0]),
    two_fold([-1, -1, 0, 0, 1, 0, 0, 1, -1], [-1, 2, 1], [0, 1, 0]),
    two_fold([-1, -1, 1, 0, 0, -1, 0, -1, 0], [1, -1, 1], [0, -1, 1]),
    two_fold([-1, 0, -1, 0, -1, -1, 0, 0, 1], [-1, -1, 2], [0, 0, 1]),
    two_fold([-1, 0, -1, 0, -1, 0, 0, 0, 1], [-1, 0, 2], [0, 0, 1]),
    two_fold([-1, 0, -1, 0, -1, 1, 0, 0, 1], [-1, 1, 2], [0, 0, 1]),
    two_fold([-1, 0, 0, -1, 0, -1, 1, -1, 0], [0, -1, 1], [1, -1, 1]),
    two_fold([-1, 0, 0, -1, 0, 1, -1, 1, 0], [0, 1, 1], [-1, 1, 1]),
    two_fold([-1, 0, 0, -1, 1, -1, 0, 0, -1], [0, 1, 0], [1, -2, 1]),
    two_fold([-1, 0, 0, -1, 1, 0, 0, 0, -1], [0, 1, 0], [-1, 2, 0]),
    two_fold([-1, 0, 0, -1, 1, 1, 0, 0, -1], [0, 1, 0], [-1, 2, 1]),
    two_fold([-1, 0, 0, 0, -1, -1, 0, 0, 1], [0, -1, 2], [0, 0, 1]),
    two_fold([-1, 0, 0, 0, -1, 0, -1, -1, 1], [0, 0, 1], [-1, -1, 2]),
    two_fold([-1, 0, 0, 0, -1, 0, -1, 0, 1], [0, 0, 1], [-1, 0, 2]),
    two_fold([-1, 0, 0, 0, -1, 0, -1, 1, 1], [0, 0, 1], [-1, 1, 2]),
    two_fold([-1, 0, 0, 0, -1, 0, 0, -1, 1], [0, 0, 1], [0, -1, 2]),
    two_fold([-1, 0, 0, 0, -1, 0, 0, 0, 1], [0, 0, 1], [0, 0, 1]),
    two_fold([-1, 0, 0, 0, -1, 0, 0, 1, 1], [0, 0, 1], [0, 1, 2]),
    two_fold([-1, 0, 0, 0, -1, 0, 1, -1, 1], [0, 0, 1], [1, -1, 2]),
    two_fold([-1, 0, 0, 0, -1, 0, 1, 0, 1], [0, 0, 1], [1, 0, 2]),
    two_fold([-1, 0, 0, 0, -1, 0, 1, 1, 1], [0, 0, 1], [1, 1, 2]),
    two_fold([-1, 0, 0, 0, -1, 1, 0, 0, 1], [0, 1, 2], [0, 0, 1]),
    two_fold([-1, 0, 0, 0, 0, -1, 0, -1, 0], [0, -1, 1], [0, -1, 1]),
    two_fold([-1, 0, 0, 0, 0, 1, 0, 1, 0], [0, 1, 1], [0, 1, 1]),
    two_fold([-1, 0, 0, 0, 1, -1, 0, 0, -1], [0, 1, 0], [0, -2, 1]),
    two_fold([-1, 0, 0, 0, 1, 0, 0, -1, -1], [0, -2, 1], [0, 1, 0]),
    two_fold([-1, 0, 0, 0, 1, 0, 0, 0, -1], [0, 1, 0], [0, 1, 0]),
    two_fold([-1, 0, 0, 0, 1, 0, 0, 1, -1], [0, 2, 1], [0, 1, 0]),
    two_fold([-1, 0, 0, 0, 1, 1, 0, 0, -1], [0, 1, 0], [0, 2, 1]),
    two_fold([-1, 0, 0, 1, 0, -1, -1, -1, 0], [0, -1, 1], [-1, -1, 1]),
    two_fold([-1, 0, 0, 1, 0, 1, 1, 1, 0], [0, 1, 1], [1, 1, 1]),
    two_fold([-1, 0, 0, 1, 1, -1, 0, 0, -1], [0, 1, 0], [-1, -2, 1]),
    two_fold([-1, 0, 0, 1, 1, 0, 0, 0, -1], [0, 1, 0], [1, 2, 0]),
    two_fold([-1, 0, 0, 1, 1, 1, 0, 0, -1], [0, 1, 0], [1, 2, 1]),
    two_fold([-1, 0, 1, 0, -1, -1, 0, 0, 1], [1, -1, 2], [0, 0, 1]),
    two_fold([-1, 0, 1, 0, -1, 0, 0, 0, 1], [1, 0, 2], [0, 0, 1]),
    two_fold([-1, 0, 1, 0, -1, 1, 0, 0, 1], [1, 1, 2], [0, 0, 1]),
    two_fold([-1, 1, -1, 0, 0, -1, 0, -1, 0], [-1, -1, 1], [0, -1, 1]),
    two_fold([-1, 1, 0, 0, 1, 0, 0, -1, -1], [-1, -2, 1], [0, 1, 0]),
    two_fold([-1, 1, 0, 0, 1, 0, 0, 0, -1], [1, 2, 0], [0, 1, 0]),
    two_fold([-1, 1, 0, 0, 1, 0, 0, 1, -1], [1, 2, 1], [0, 1, 0]),
    two_fold([-1, 1, 1, 0, 0, 1, 0, 1, 0], [1, 1, 1], [0, 1, 1]),
    two_fold([0, -1, -1, -1, 0, 1, 0, 0, -1], [-1, 1, 0], [-1, 1, 1]),
    two_fold([0, -1, -1, 0, -1, 0, -1, 1, 0], [-1, 0, 1], [-1, 1, 1]),
    two_fold([0, -1, 0, -1, 0, 0, -1, 1, -1], [-1, 1, 1], [-1, 1, 0]),
    two_fold([0, -1, 0, -1, 0, 0, 0, 0, -1], [-1, 1, 0], [-1, 1, 0]),
    two_fold([0, -1, 0, -1, 0, 0, 1, -1, -1], [1, -1, 1], [-1, 1, 0]),
    two_fold([0, -1, 1, -1, 0, -1, 0, 0, -1], [-1, 1, 0], [1, -1, 1]),
    two_fold([0, -1, 1, 0, -1, 0, 1, -1, 0], [1, 0, 1], [1, -1, 1]),
    two_fold([0, 0, -1, -1, -1, 1, -1, 0, 0], [-1, 1, 1], [-1, 0, 1]),
    two_fold([0, 0, -1, 0, -1, 0, -1, 0, 0], [-1, 0, 1], [-1, 0, 1]),
    two_fold([0, 0, -1, 1, -1, -1, -1, 0, 0], [-1, -1, 1], [-1, 0, 1]),
    two_fold([0, 0, 1, -1, -1, -1, 1, 0, 0], [1, -1, 1], [1, 0, 1]),
    two_fold([0, 0, 1, 0, -1, 0, 1, 0, 0], [1, 0, 1], [1, 0, 1]),
    two_fold([0, 0, 1, 1, -1, 1, 1, 0, 0], [1, 1, 1], [1, 0, 1]),
    two_fold([0, 1, -1, 0, -1, 0, -1, -1, 0], [-1, 0, 1], [-1, -1, 1]),
    two_fold([0, 1, -1, 1, 0, -1, 0, 0, -1], [1, 1, 0], [-1, -1, 1]),
    two_fold([0, 1, 0, 1, 0, 0, -1, -1, -1], [-1, -1, 1], [1, 1, 0]),
    two_fold([0, 1, 0, 1, 0, 0, 0, 0, -1], [1, 1, 0], [1, 1, 0]),
    two_fold([0, 1, 0, 1, 0, 0, 1, 1, -1], [1, 1, 1], [1, 1, 0]),
    two_fold([0, 1, 1, 0, -1, 0, 1, 1, 0], [1, 0, 1], [1, 1, 1]),
    two_fold([0, 1, 1, 1, 0, 1, 0, 0, -1], [1, 1, 0], [1, 1, 1]),
    two_fold([1, -1, -1, 0, -1, 0, 0, 0, -1], [1, 0, 0], [-2, 1, 1]),
    two_fold([1, -1, 0, 0, -1, 0, 0, 0, -1], [1, 0, 0], [-2, 1, 0]),
    two_fold([1, -1, 1, 0, -1, 0, 0, 0, -1], [1, 0, 0], [2, -1, 1]),
    two_fold([1, 0, -1, 0, -1, 0, 0, 0, -1], [1, 0, 0], [-2, 0, 1]),
    two_fold([1, 0, 0, -1, -1, 0, -1, 0, -1], [-2, 1, 1], [1, 0, 0]),
    two_fold([1, 0, 0, -1, -1, 0, 0, 0, -1], [-2, 1, 0], [1, 0, 0]),
    two_fold([1, 0, 0, -1, -1, 0, 1, 0, -1], [2, -1, 1], [1, 0, 0]),
    two_fold([1, 0, 0, 0, -1, 0, -1, 0, -1], [-2, 0, 1], [1, 0, 0]),
    two_fold([1, 0, 0, 0, -1, 0, 0, 0, -1], [1, 0, 0], [1, 0, 0]),
    two_fold([1, 0, 0, 0, -1, 0, 1, 0, -1], [2, 0, 1], [1, 0, 0]),
    two_fold([1, 0, 0, 1, -1, 0, -1, 0, -1], [-2, -1, 1], [1, 0, 0]),
    two_fold([1, 0, 0, 1, -1, 0, 0, 0, -1], [2, 1, 0], [1, 0, 0]),
    two_fold([1, 0, 0, 1, -1, 0, 1, 0, -1], [2, 1, 1], [1, 0, 0]),
    two_fold([1, 0, 1, 0, -1, 0, 0, 0, -1], [1, 0, 0], [2, 0, 1]),
    two_fold([1, 1, -1, 0, -1, 0, 0, 0, -1], [1, 0, 0], [-2, -1, 1]),
    two_fold([1, 1, 0, 0, -1, 0, 0, 0, -1], [1, 0, 0], [2, 1, 0]),
    two_fold([1, 1, 1, 0, -1, 0, 0, 0, -1], [1, 0, 0], [2, 1, 1]),
];
