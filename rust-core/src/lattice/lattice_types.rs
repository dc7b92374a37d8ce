use std::fmt;
use std::str::FromStr;

use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TwinError};
use crate::symmetries::symmetry_operations::{Op, Rot, Tran};

/// Lattice centring types of the conventional cells.
///
/// `Rhombohedral` is the obverse centring of a rhombohedral lattice in the
/// hexagonal setting (symbol `R`, also accepted as `H`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Centering {
    Primitive,
    BaseCenteredA,
    BaseCenteredB,
    BaseCenteredC,
    BodyCentered,
    Rhombohedral,
    FaceCentered,
}

impl Centering {
    pub fn from_symbol(symbol: char) -> Result<Self> {
        match symbol.to_ascii_uppercase() {
            'P' => Ok(Self::Primitive),
            'A' => Ok(Self::BaseCenteredA),
            'B' => Ok(Self::BaseCenteredB),
            'C' => Ok(Self::BaseCenteredC),
            'I' => Ok(Self::BodyCentered),
            'R' | 'H' => Ok(Self::Rhombohedral),
            'F' => Ok(Self::FaceCentered),
            _ => Err(TwinError::UnknownCentring(symbol)),
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::Primitive => 'P',
            Self::BaseCenteredA => 'A',
            Self::BaseCenteredB => 'B',
            Self::BaseCenteredC => 'C',
            Self::BodyCentered => 'I',
            Self::Rhombohedral => 'R',
            Self::FaceCentered => 'F',
        }
    }

    /// Centring vectors in units of 1/DEN, starting with the zero vector.
    pub fn translations(&self) -> Vec<Tran> {
        let mut cen_ops = vec![Tran::zeros()];
        match self {
            Self::Primitive => {}
            Self::BaseCenteredA => cen_ops.push(Tran::new(0, 12, 12)),
            Self::BaseCenteredB => cen_ops.push(Tran::new(12, 0, 12)),
            Self::BaseCenteredC => cen_ops.push(Tran::new(12, 12, 0)),
            Self::BodyCentered => cen_ops.push(Tran::new(12, 12, 12)),
            Self::Rhombohedral => {
                cen_ops.push(Tran::new(16, 8, 8));
                cen_ops.push(Tran::new(8, 16, 16));
            }
            Self::FaceCentered => {
                cen_ops.push(Tran::new(0, 12, 12));
                cen_ops.push(Tran::new(12, 0, 12));
                cen_ops.push(Tran::new(12, 12, 0));
            }
        }
        cen_ops
    }

    /// Centred-to-primitive transformation as an operation (units of 1/DEN).
    ///
    /// Columns are the primitive basis vectors expressed in the centred basis, so
    /// that `x_centred = P * x_primitive`.
    pub fn to_primitive_op(&self) -> Op {
        #[rustfmt::skip]
        let rows: [i32; 9] = match self {
            Self::Primitive => [24, 0, 0, 0, 24, 0, 0, 0, 24],
            Self::BaseCenteredA => [24, 0, 0, 0, 12, -12, 0, 12, 12],
            Self::BaseCenteredB => [12, 0, 12, 0, 24, 0, -12, 0, 12],
            Self::BaseCenteredC => [12, 12, 0, -12, 12, 0, 0, 0, 24],
            Self::BodyCentered => [-12, 12, 12, 12, -12, 12, 12, 12, -12],
            Self::Rhombohedral => [16, -8, -8, 8, 8, -16, 8, 8, 8],
            Self::FaceCentered => [0, 12, 12, 12, 0, 12, 12, 12, 0],
        };
        Op::new(Rot::from_row_slice(&rows), Tran::zeros())
    }

    /// Centred-to-primitive transformation as a real matrix.
    pub fn to_primitive(&self) -> Matrix3<f64> {
        self.to_primitive_op().float_rotation()
    }

    /// Number of lattice points in the centred cell.
    pub fn multiplicity(&self) -> usize {
        self.translations().len()
    }
}

impl fmt::Display for Centering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Centering {
    type Err = TwinError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Self::from_symbol(symbol),
            (Some(symbol), Some(_)) => Err(TwinError::UnknownCentring(symbol)),
            (None, _) => Err(TwinError::UnknownCentring(' ')),
        }
    }
}
