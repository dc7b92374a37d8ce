use std::fmt;

use crate::error::{Result, TwinError};
use crate::lattice::lattice_types::Centering::{self, *};
use crate::symmetries::group_operations::GroupOps;
use crate::symmetries::symmetry_operations::Op;

/// A space group from the built-in table.
///
/// `ops` are the coordinate triplets of the point operations with the identity
/// first; centring translations are implied by `centering`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceGroup {
    pub number: u16,
    /// Full Hermann-Mauguin symbol, e.g. `P 1 21 1`.
    pub hm: &'static str,
    /// Short symbol, e.g. `P21`.
    pub short: &'static str,
    pub centering: Centering,
    pub ops: &'static [&'static str],
}

impl SpaceGroup {
    /// P 1
    pub fn trivial() -> &'static SpaceGroup {
        &SPACE_GROUPS[0]
    }

    /// Looks up a space group by ITA number or by Hermann-Mauguin symbol.
    pub fn from_symbol(symbol: &str) -> Result<&'static SpaceGroup> {
        let found = match symbol.trim().parse::<u16>() {
            Ok(number) => find_spacegroup_by_number(number),
            Err(_) => find_spacegroup_by_name(symbol),
        };
        found.ok_or_else(|| TwinError::UnknownSpaceGroup(symbol.trim().to_string()))
    }

    pub fn centring_type(&self) -> Centering {
        self.centering
    }

    /// Point operations and centring vectors of the group.
    pub fn operations(&self) -> Result<GroupOps> {
        let sym_ops = self
            .ops
            .iter()
            .map(|triplet| Op::parse_triplet(triplet))
            .collect::<Result<Vec<_>>>()?;
        Ok(GroupOps::new(sym_ops, self.centering.translations()))
    }
}

impl fmt::Display for SpaceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.hm, self.number)
    }
}

pub fn find_spacegroup_by_number(number: u16) -> Option<&'static SpaceGroup> {
    SPACE_GROUPS.iter().find(|sg| sg.number == number)
}

/// Symbols are compared without whitespace and case, so `p 21 21 21`,
/// `P212121` and `P 21 21 21` all match. `H` is accepted in place of `R`.
pub fn find_spacegroup_by_name(name: &str) -> Option<&'static SpaceGroup> {
    let key = normalize_symbol(name);
    if key.is_empty() {
        return None;
    }
    SPACE_GROUPS
        .iter()
        .find(|sg| normalize_symbol(sg.hm) == key || normalize_symbol(sg.short) == key)
}

fn normalize_symbol(symbol: &str) -> String {
    let mut key: String = symbol
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if key.starts_with('H') {
        key.replace_range(..1, "R");
    }
    key
}

const P1: &[&str] = &["x,y,z"];
const P2: &[&str] = &["x,y,z", "-x,y,-z"];
const P2_M: &[&str] = &["x,y,z", "-x,y,-z", "-x,-y,-z", "x,-y,z"];
const P222: &[&str] = &["x,y,z", "-x,-y,z", "-x,y,-z", "x,-y,-z"];
const P4: &[&str] = &["x,y,z", "-x,-y,z", "-y,x,z", "y,-x,z"];
#[rustfmt::skip]
const P422: &[&str] = &[
    "x,y,z", "-x,-y,z", "-y,x,z", "y,-x,z",
    "-x,y,-z", "x,-y,-z", "y,x,-z", "-y,-x,-z",
];
const P3: &[&str] = &["x,y,z", "-y,x-y,z", "-x+y,-x,z"];
#[rustfmt::skip]
const P321: &[&str] = &[
    "x,y,z", "-y,x-y,z", "-x+y,-x,z",
    "y,x,-z", "x-y,-y,-z", "-x,-x+y,-z",
];
#[rustfmt::skip]
const P23: &[&str] = &[
    "x,y,z", "-x,-y,z", "-x,y,-z", "x,-y,-z",
    "z,x,y", "z,-x,-y", "-z,-x,y", "-z,x,-y",
    "y,z,x", "-y,z,-x", "y,-z,-x", "-y,-z,x",
];
#[rustfmt::skip]
const P432: &[&str] = &[
    "x,y,z", "-x,-y,z", "-x,y,-z", "x,-y,-z",
    "z,x,y", "z,-x,-y", "-z,-x,y", "-z,x,-y",
    "y,z,x", "-y,z,-x", "y,-z,-x", "-y,-z,x",
    "y,x,-z", "-y,-x,-z", "y,-x,z", "-y,x,z",
    "x,z,-y", "-x,z,y", "-x,-z,-y", "x,-z,y",
    "z,y,-x", "z,-y,x", "-z,y,x", "-z,-y,-x",
];

const fn sg(
    number: u16,
    hm: &'static str,
    short: &'static str,
    centering: Centering,
    ops: &'static [&'static str],
) -> SpaceGroup {
    SpaceGroup {
        number,
        hm,
        short,
        centering,
        ops,
    }
}

/// Built-in space groups, first ITA setting, ordered by number.
#[rustfmt::skip]
static SPACE_GROUPS: [SpaceGroup; 36] = [
    sg(1, "P 1", "P1", Primitive, P1),
    sg(2, "P -1", "P-1", Primitive, &["x,y,z", "-x,-y,-z"]),
    sg(3, "P 1 2 1", "P2", Primitive, P2),
    sg(4, "P 1 21 1", "P21", Primitive, &["x,y,z", "-x,y+1/2,-z"]),
    sg(5, "C 1 2 1", "C2", BaseCenteredC, P2),
    sg(10, "P 1 2/m 1", "P2/m", Primitive, P2_M),
    sg(12, "C 1 2/m 1", "C2/m", BaseCenteredC, P2_M),
    sg(16, "P 2 2 2", "P222", Primitive, P222),
    sg(19, "P 21 21 21", "P212121", Primitive, &[
        "x,y,z", "-x+1/2,-y,z+1/2", "-x,y+1/2,-z+1/2", "x+1/2,-y+1/2,-z",
    ]),
    sg(20, "C 2 2 21", "C2221", BaseCenteredC, &[
        "x,y,z", "-x,-y,z+1/2", "-x,y,-z+1/2", "x,-y,-z",
    ]),
    sg(21, "C 2 2 2", "C222", BaseCenteredC, P222),
    sg(22, "F 2 2 2", "F222", FaceCentered, P222),
    sg(23, "I 2 2 2", "I222", BodyCentered, P222),
    sg(75, "P 4", "P4", Primitive, P4),
    sg(76, "P 41", "P41", Primitive, &[
        "x,y,z", "-x,-y,z+1/2", "-y,x,z+1/4", "y,-x,z+3/4",
    ]),
    sg(79, "I 4", "I4", BodyCentered, P4),
    sg(89, "P 4 2 2", "P422", Primitive, P422),
    sg(92, "P 41 21 2", "P41212", Primitive, &[
        "x,y,z", "-x,-y,z+1/2", "-y+1/2,x+1/2,z+1/4", "y+1/2,-x+1/2,z+3/4",
        "-x+1/2,y+1/2,-z+1/4", "x+1/2,-y+1/2,-z+3/4", "y,x,-z", "-y,-x,-z+1/2",
    ]),
    sg(96, "P 43 21 2", "P43212", Primitive, &[
        "x,y,z", "-x,-y,z+1/2", "-y+1/2,x+1/2,z+3/4", "y+1/2,-x+1/2,z+1/4",
        "-x+1/2,y+1/2,-z+3/4", "x+1/2,-y+1/2,-z+1/4", "y,x,-z", "-y,-x,-z+1/2",
    ]),
    sg(97, "I 4 2 2", "I422", BodyCentered, P422),
    sg(143, "P 3", "P3", Primitive, P3),
    sg(144, "P 31", "P31", Primitive, &["x,y,z", "-y,x-y,z+1/3", "-x+y,-x,z+2/3"]),
    sg(146, "R 3", "R3", Rhombohedral, P3),
    sg(149, "P 3 1 2", "P312", Primitive, &[
        "x,y,z", "-y,x-y,z", "-x+y,-x,z",
        "-y,-x,-z", "-x+y,y,-z", "x,x-y,-z",
    ]),
    sg(150, "P 3 2 1", "P321", Primitive, P321),
    sg(155, "R 3 2", "R32", Rhombohedral, P321),
    sg(168, "P 6", "P6", Primitive, &[
        "x,y,z", "-y,x-y,z", "-x+y,-x,z",
        "-x,-y,z", "y,-x+y,z", "x-y,x,z",
    ]),
    sg(169, "P 61", "P61", Primitive, &[
        "x,y,z", "-y,x-y,z+1/3", "-x+y,-x,z+2/3",
        "-x,-y,z+1/2", "y,-x+y,z+5/6", "x-y,x,z+1/6",
    ]),
    sg(177, "P 6 2 2", "P622", Primitive, &[
        "x,y,z", "-y,x-y,z", "-x+y,-x,z",
        "-x,-y,z", "y,-x+y,z", "x-y,x,z",
        "y,x,-z", "x-y,-y,-z", "-x,-x+y,-z",
        "-y,-x,-z", "-x+y,y,-z", "x,x-y,-z",
    ]),
    sg(195, "P 2 3", "P23", Primitive, P23),
    sg(196, "F 2 3", "F23", FaceCentered, P23),
    sg(197, "I 2 3", "I23", BodyCentered, P23),
    sg(198, "P 21 3", "P213", Primitive, &[
        "x,y,z", "-x+1/2,-y,z+1/2", "-x,y+1/2,-z+1/2", "x+1/2,-y+1/2,-z",
        "z,x,y", "z+1/2,-x+1/2,-y", "-z+1/2,-x,y+1/2", "-z,x+1/2,-y+1/2",
        "y,z,x", "-y,z+1/2,-x+1/2", "y+1/2,-z+1/2,-x", "-y+1/2,-z,x+1/2",
    ]),
    sg(207, "P 4 3 2", "P432", Primitive, P432),
    sg(209, "F 4 3 2", "F432", FaceCentered, P432),
    sg(211, "I 4 3 2", "I432", BodyCentered, P432),
];
