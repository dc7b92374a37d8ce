// Symmetries module: Contains symmetry operations, groups of operations and space groups
// This module provides the crystallographic symmetry algebra used by lattice symmetry analysis

// ======================== MODULE DECLARATIONS ========================
pub mod group_operations;
pub mod space_groups;
pub mod symmetry_operations;

mod _tests_space_groups;
mod _tests_symmetry_operations;

// ======================== SYMMETRY OPERATIONS ========================
pub use symmetry_operations::{
    Op,   // struct - symmetry operation (rotation + translation) in units of 1/DEN
    Rot,  // type - Matrix3<i32> rotation part
    Tran, // type - Vector3<i32> translation part
    DEN,  // const - fixed-point denominator (24)
};
// Op impl methods:
//   identity() -> Op                                             - identity operation
//   from_integer_rotation(matrix: &[i8; 9]) -> Op                - rotation-only operation from a row-major integer matrix
//   combine(&self, b: &Op) -> Op                                 - composition self * b (also via the * operator)
//   inverse(&self) -> Result<Op>                                 - inverse operation
//   negated_rot(&self) -> Rot                                    - rotation multiplied by -1
//   det_rot(&self) -> i32                                        - determinant of the scaled rotation
//   wrap(&self) -> Op                                            - translation reduced to [0, 1)
//   triplet(&self) -> String / as_hkl(&self) -> String           - textual forms (x,y,z and h,k,l)
//   parse_triplet(triplet: &str) -> Result<Op>                   - parses a coordinate triplet

// ======================== GROUPS OF OPERATIONS ========================
pub use group_operations::{
    format_centring, // fn(cen_ops: &[Tran]) -> String - human-readable list of centring vectors
    DiminoClosure,   // struct - GroupClosure implementation (Dimino's algorithm), strict or lenient
    GroupOps,        // struct - rotations (sym_ops) and centring vectors (cen_ops) of a group
};
// GroupOps impl methods:
//   trivial() -> GroupOps                                        - identity only
//   order(&self) -> usize                                        - number of operations including centring
//   find_by_rotation(&self, rot: &Rot) -> Option<&Op>            - lookup ignoring translations
//   has_same_centring(&self, other: &GroupOps) -> bool           - compares centring vector sets
//   change_basis_forward(&mut self, cob: &Op) -> Result<()>      - conjugates every operation with cob
//   all_ops(&self) -> impl Iterator<Item = Op>                   - operations combined with centring

// ======================== SPACE GROUPS ========================
pub use space_groups::{
    find_spacegroup_by_name,   // fn(name: &str) -> Option<&'static SpaceGroup> - lookup by Hermann-Mauguin symbol
    find_spacegroup_by_number, // fn(number: u16) -> Option<&'static SpaceGroup> - lookup by ITA number
    SpaceGroup,                // struct - built-in space group (number, symbol, centring, operations)
};
