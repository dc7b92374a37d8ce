use log::debug;

use crate::error::{Result, TwinError};
use crate::lattice::unit_cell::UnitCell;
use crate::symmetries::group_operations::format_centring;
use crate::symmetries::space_groups::SpaceGroup;
use crate::symmetries::symmetry_operations::Op;
use crate::twinning::lattice_symmetry::find_lattice_symmetry;

/// Potential twin laws: rotations of the lattice that are not, up to sign,
/// rotations of the space group.
///
/// Without a space group P 1 is assumed. With `all_ops` every such rotation is
/// returned, otherwise only one representative per coset of the space group.
pub fn find_potential_twinning(
    cell: &UnitCell,
    sg: Option<&SpaceGroup>,
    max_obliq: f64,
    all_ops: bool,
) -> Result<Vec<Op>> {
    let sg = sg.unwrap_or(SpaceGroup::trivial());
    let mut go = sg.operations()?;
    let lat_go = find_lattice_symmetry(cell, sg.centring_type(), max_obliq)?;
    if !go.has_same_centring(&lat_go) {
        return Err(TwinError::CentringMismatch {
            expected: format_centring(&go.cen_ops),
            found: format_centring(&lat_go.cen_ops),
        });
    }

    let sg_symop_count = go.sym_ops.len();
    let mut ops = Vec::new();
    for op in &lat_go.sym_ops {
        if go.find_by_rotation(&op.rot).is_some()
            || go.find_by_rotation(&op.negated_rot()).is_some()
        {
            continue;
        }
        ops.push(*op);
        if !all_ops {
            for i in 1..sg_symop_count {
                let product = op.combine(&go.sym_ops[i]);
                go.sym_ops.push(product);
            }
        }
    }
    debug!(
        "{}: {} of {} lattice operations are potential twin laws",
        sg.hm,
        ops.len(),
        lat_go.sym_ops.len()
    );
    Ok(ops)
}
