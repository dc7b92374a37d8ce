// Twinning module: Contains lattice two-folds, lattice symmetry and twin-law selection
// This module builds on the lattice and symmetries modules

// ======================== MODULE DECLARATIONS ========================
pub mod lattice_symmetry;
pub mod obliquity;
pub mod twin_laws;
pub mod two_fold_table;

// Test modules
mod _tests_lattice_symmetry;
mod _tests_obliquity;

// ======================== TWO-FOLD TABLE ========================
pub use two_fold_table::{
    TwoFoldData,    // struct - two-fold rotation with its direct and reciprocal axis
    TWO_FOLD_TABLE, // static - the 81 two-folds possible for reduced cells
};

// ======================== OBLIQUITY ========================
pub use obliquity::{
    calculate_cos_obliquity, // fn(reduced_cell: &UnitCell, d_axis: &Vector3<f64>, r_axis: &Vector3<f64>) -> f64
    find_lattice_2fold_ops,  // fn(reduced_cell: &UnitCell, max_obliq: f64) -> Vec<OpObliquity> - sorted by obliquity
    OpObliquity,             // struct - operation with obliquity in degrees
};

// ======================== LATTICE SYMMETRY ========================
pub use lattice_symmetry::{
    find_lattice_symmetry,        // fn(cell: &UnitCell, centering: Centering, max_obliq: f64) -> Result<GroupOps> - original basis
    find_lattice_symmetry_r,      // fn(reduced_cell: &UnitCell, max_obliq: f64) -> Result<GroupOps> - reduced basis
    find_lattice_symmetry_r_with, // fn(closure: &impl GroupClosure, reduced_cell, max_obliq) -> Result<GroupOps>
};

// ======================== TWIN LAWS ========================
pub use twin_laws::find_potential_twinning; // fn(cell, sg: Option<&SpaceGroup>, max_obliq, all_ops) -> Result<Vec<Op>>
