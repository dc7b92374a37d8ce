// Lattice module: Contains unit cells, centring types and cell reduction
// This module provides the metric side of lattice symmetry analysis

// ======================== MODULE DECLARATIONS ========================
pub mod lattice_types;
pub mod niggli_reduction;
pub mod unit_cell;


// ======================== CENTRING TYPES ========================
pub use lattice_types::Centering; // enum - lattice centring types (P, A, B, C, I, R, F)
// Centering impl methods:
//   from_symbol(symbol: char) -> Result<Centering>               - parses a centring symbol (H is an alias of R)
//   symbol(&self) -> char                                        - returns the centring symbol
//   translations(&self) -> Vec<Tran>                             - centring vectors in units of 1/DEN, zero vector first
//   to_primitive_op(&self) -> Op                                 - centred-to-primitive basis change (x_centred = P * x_primitive)
//   to_primitive(&self) -> Matrix3<f64>                          - the same basis change as a real matrix
//   multiplicity(&self) -> usize                                 - lattice points per centred cell

// ======================== UNIT CELL ========================
pub use unit_cell::UnitCell; // struct - cell parameters with orthogonalization/fractionalization matrices
// UnitCell impl methods:
//   new(a, b, c, alpha, beta, gamma) -> Result<UnitCell>         - constructs a cell (lengths in Å, angles in degrees)
//   from_metric_tensor(metric: &Matrix3<f64>) -> Result<UnitCell> - constructs a cell from G = A^T * A
//   parameters(&self) -> [f64; 6]                                - returns a, b, c, α, β, γ
//   metric_tensor(&self) -> Matrix3<f64>                         - returns metric tensor G = A^T * A
//   frac_to_cart(&self, v) / cart_to_frac(&self, v)              - coordinate conversions
//   axis_to_cartesian(&self, axis, space: Space) -> Vector3<f64> - direct (uvw) or reciprocal (hkl) axis in Cartesian space
//   is_similar(&self, other, rel, deg) -> bool                   - compares cell parameters within tolerances

// ======================== NIGGLI REDUCTION ========================
pub use niggli_reduction::{
    niggli_reduce,    // fn(cell: &UnitCell, centering: Centering) -> Result<ReducedCell> - primitive Niggli cell and basis change
    NiggliReduction,  // struct - Krivy-Gruber reduction state on the G6 vector
    ReducedCell,      // struct - reduced cell with change_of_basis (x_original = P * x_reduced)
};
