//! Lattice symmetry and twin law detection
//!
//! Given a unit cell and (optionally) a space group, this library finds the
//! rotations that map the Niggli-reduced lattice onto itself within an obliquity
//! tolerance and reports those that are not already symmetry operations of the
//! crystal. These are the candidate (pseudo-)merohedral twin laws.
//!
//! The lattice point group is generated from two-fold axes only, following
//! Le Page (1982) and Zwart et al. (2006).

pub mod config;
pub mod error;
pub mod interfaces;
pub mod lattice;
pub mod symmetries;
pub mod twinning;

pub use error::{Result, TwinError};
pub use lattice::{Centering, UnitCell};
pub use symmetries::{GroupOps, Op, SpaceGroup};
pub use twinning::{
    find_lattice_2fold_ops, find_lattice_symmetry, find_lattice_symmetry_r,
    find_potential_twinning, OpObliquity,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
