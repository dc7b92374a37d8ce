// Definitions that are used throughout all modules

use crate::error::Result;
use crate::symmetries::{GroupOps, Op};

// Enumeration to track the space type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Space {
    Real,
    Reciprocal,
}

/// Completes a group of operations from extra generators.
///
/// `group` must already hold the identity as its first operation, its centring
/// vectors, and every element generated by `generators[0]`. Implementations
/// extend `group.sym_ops` in place and must not let the number of rotations grow
/// past `max_order`.
pub trait GroupClosure {
    fn close(&self, group: &mut GroupOps, generators: &[Op], max_order: usize) -> Result<()>;
}
