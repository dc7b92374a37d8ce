use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TwinError};
use crate::interfaces::GroupClosure;
use crate::lattice::lattice_types::Centering;
use crate::symmetries::symmetry_operations::{format_den, Op, Rot, Tran, DEN};

/// Symmetry operations of a group, split into rotations and centring vectors.
///
/// `sym_ops[0]` is always the identity and `cen_ops[0]` the zero vector. The
/// full set of operations is every `sym_op` combined with every `cen_op`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupOps {
    pub sym_ops: Vec<Op>,
    pub cen_ops: Vec<Tran>,
}

impl GroupOps {
    pub fn new(sym_ops: Vec<Op>, cen_ops: Vec<Tran>) -> Self {
        Self { sym_ops, cen_ops }
    }

    /// Group containing only the identity.
    pub fn trivial() -> Self {
        Self {
            sym_ops: vec![Op::identity()],
            cen_ops: vec![Tran::zeros()],
        }
    }

    /// Identity with the centring vectors of a lattice type.
    pub fn centring_only(centering: Centering) -> Self {
        Self {
            sym_ops: vec![Op::identity()],
            cen_ops: centering.translations(),
        }
    }

    /// Number of operations including centring.
    pub fn order(&self) -> usize {
        self.sym_ops.len() * self.cen_ops.len()
    }

    /// First operation with the given rotation, ignoring its translation.
    pub fn find_by_rotation(&self, rot: &Rot) -> Option<&Op> {
        self.sym_ops.iter().find(|op| op.rot == *rot)
    }

    pub fn is_centrosymmetric(&self) -> bool {
        self.find_by_rotation(&Op::identity().negated_rot()).is_some()
    }

    /// Whether both groups have the same set of centring vectors.
    pub fn has_same_centring(&self, other: &GroupOps) -> bool {
        if self.cen_ops.len() != other.cen_ops.len() {
            return false;
        }
        sorted_centring(&self.cen_ops) == sorted_centring(&other.cen_ops)
    }

    /// All operations: rotations combined with centring vectors, wrapped to [0, 1).
    pub fn all_ops(&self) -> impl Iterator<Item = Op> + '_ {
        self.cen_ops.iter().flat_map(move |cen| {
            self.sym_ops
                .iter()
                .map(move |op| Op::new(op.rot, op.tran + cen).wrap())
        })
    }

    /// Re-express the group in another basis: every operation becomes
    /// `cob * op * cob^-1`.
    ///
    /// `cob` maps coordinates of the current basis to the target basis. When the
    /// target cell is larger (|det cob^-1| > 1) the centring vectors are
    /// regenerated from the lattice points of a supercell.
    pub fn change_basis_forward(&mut self, cob: &Op) -> Result<()> {
        let inv = cob.inverse()?;
        self.change_basis_impl(cob, &inv);
        Ok(())
    }

    /// Inverse of [`change_basis_forward`](Self::change_basis_forward).
    pub fn change_basis_backward(&mut self, cob: &Op) -> Result<()> {
        let inv = cob.inverse()?;
        self.change_basis_impl(&inv, cob);
        Ok(())
    }

    fn change_basis_impl(&mut self, cob: &Op, inv: &Op) {
        if self.sym_ops.is_empty() || self.cen_ops.is_empty() {
            return;
        }

        // sym_ops[0] is the identity and stays so
        for op in self.sym_ops.iter_mut().skip(1) {
            *op = cob.combine(op).combine(inv).wrap();
        }

        let idet = (inv.det_rot() / (DEN * DEN * DEN)).abs();
        if idet > 1 {
            let mut supercell = Vec::with_capacity(self.cen_ops.len() * (idet as usize).pow(3));
            for i in 0..idet {
                for j in 0..idet {
                    for k in 0..idet {
                        for cen in &self.cen_ops {
                            supercell.push(Tran::new(i * DEN, j * DEN, k * DEN) + cen);
                        }
                    }
                }
            }
            self.cen_ops = supercell;
        }

        let mut cvec = Op::identity();
        for tr in self.cen_ops.iter_mut().skip(1) {
            cvec.tran = *tr;
            *tr = cob.combine(&cvec).combine(inv).wrap().tran;
        }

        let mut unique: Vec<Tran> = Vec::with_capacity(self.cen_ops.len());
        for tr in &self.cen_ops {
            if !unique.contains(tr) {
                unique.push(*tr);
            }
        }
        self.cen_ops = unique;
    }
}

fn sorted_centring(cen_ops: &[Tran]) -> Vec<Tran> {
    let mut sorted = cen_ops.to_vec();
    sorted.sort_by_key(|t| (t.x, t.y, t.z));
    sorted
}

/// Human-readable list of centring vectors, e.g. `[0,0,0] [1/2,1/2,1/2]`.
pub fn format_centring(cen_ops: &[Tran]) -> String {
    sorted_centring(cen_ops)
        .iter()
        .map(|t| {
            let parts: Vec<String> = t.iter().map(|&x| format_den(x)).collect();
            format!("[{}]", parts.join(","))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Dimino's algorithm for completing a group from generators.
///
/// Rotations are compared without translations, so centring vectors must
/// already be present in the group. By default a group that grows past the
/// maximum order is an error; with `skip_bad_generators` the offending
/// generator is dropped instead and closure continues with the next one.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiminoClosure {
    pub skip_bad_generators: bool,
}

impl DiminoClosure {
    pub fn strict() -> Self {
        Self {
            skip_bad_generators: false,
        }
    }

    pub fn lenient() -> Self {
        Self {
            skip_bad_generators: true,
        }
    }
}

impl GroupClosure for DiminoClosure {
    fn close(&self, group: &mut GroupOps, generators: &[Op], max_order: usize) -> Result<()> {
        let mut generators = generators.to_vec();
        let mut i = 1;
        while i < generators.len() {
            let mut coset_repr = vec![Op::identity()];
            let init_size = group.sym_ops.len();
            let mut skipped = false;
            loop {
                let len = coset_repr.len();
                for j in 0..len {
                    for generator in &generators[..=i] {
                        let sg = generator.combine(&coset_repr[j]);
                        if group.find_by_rotation(&sg.rot).is_none() {
                            group.sym_ops.push(sg);
                            for k in 1..init_size {
                                let product = sg.combine(&group.sym_ops[k]);
                                group.sym_ops.push(product);
                            }
                            coset_repr.push(sg);
                        }
                    }
                }
                if len == coset_repr.len() {
                    break;
                }
                if group.sym_ops.len() > max_order {
                    group.sym_ops.truncate(init_size);
                    if !self.skip_bad_generators {
                        return Err(TwinError::ClosureOverflow { max_order });
                    }
                    debug!(
                        "Generator {} would exceed group order {}, skipped",
                        generators[i], max_order
                    );
                    // later generators must not combine with the dropped one
                    generators.remove(i);
                    skipped = true;
                    break;
                }
            }
            if !skipped {
                i += 1;
            }
        }
        Ok(())
    }
}
