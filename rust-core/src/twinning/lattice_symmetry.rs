use log::debug;

use crate::config::MAX_LATTICE_POINT_GROUP_ORDER;
use crate::error::{Result, TwinError};
use crate::interfaces::GroupClosure;
use crate::lattice::lattice_types::Centering;
use crate::lattice::niggli_reduction::niggli_reduce;
use crate::lattice::unit_cell::UnitCell;
use crate::symmetries::group_operations::{format_centring, DiminoClosure, GroupOps};
use crate::symmetries::symmetry_operations::Op;
use crate::twinning::obliquity::find_lattice_2fold_ops;

/// Lattice symmetry of a reduced cell, without inversion.
///
/// The group is generated from the two-fold operations within `max_obliq`
/// degrees, best first. A generator that would push the group past 24
/// operations is skipped, so large tolerances still give a group. The reduced
/// cell is primitive, so the only centring vector is zero.
pub fn find_lattice_symmetry_r(reduced_cell: &UnitCell, max_obliq: f64) -> Result<GroupOps> {
    find_lattice_symmetry_r_with(&DiminoClosure::lenient(), reduced_cell, max_obliq)
}

/// [`find_lattice_symmetry_r`] with a custom closure algorithm.
pub fn find_lattice_symmetry_r_with<C: GroupClosure + ?Sized>(
    closure: &C,
    reduced_cell: &UnitCell,
    max_obliq: f64,
) -> Result<GroupOps> {
    let generators: Vec<Op> = find_lattice_2fold_ops(reduced_cell, max_obliq)
        .into_iter()
        .map(|op_obl| op_obl.op)
        .collect();

    let mut group = GroupOps::trivial();
    // a two-fold squared is the identity, so the first generator alone adds one element
    if let Some(first) = generators.first() {
        group.sym_ops.push(*first);
    }
    closure.close(&mut group, &generators, MAX_LATTICE_POINT_GROUP_ORDER)?;
    debug!(
        "Lattice point group of order {} from {} two-fold generators",
        group.sym_ops.len(),
        generators.len()
    );
    Ok(group)
}

/// Lattice symmetry (without inversion) of `cell` with the given centring,
/// expressed in the basis of `cell`.
///
/// The cell is Niggli-reduced, the symmetry is found for the reduced cell and
/// then transformed back with the reduction's change of basis.
pub fn find_lattice_symmetry(cell: &UnitCell, centering: Centering, max_obliq: f64) -> Result<GroupOps> {
    let reduced = niggli_reduce(cell, centering)?;
    let mut group = find_lattice_symmetry_r(&reduced.cell, max_obliq)?;
    group.change_basis_forward(&reduced.change_of_basis)?;

    let expected = GroupOps::centring_only(centering);
    if !group.has_same_centring(&expected) {
        return Err(TwinError::CentringMismatch {
            expected: format_centring(&expected.cen_ops),
            found: format_centring(&group.cen_ops),
        });
    }
    Ok(group)
}
