use std::fmt;
use std::ops::Mul;

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TwinError};

/// Fixed-point denominator of rotation and translation components.
pub const DEN: i32 = 24;

/// Rotation part of an operation, in units of 1/DEN.
pub type Rot = Matrix3<i32>;
/// Translation part of an operation, in units of 1/DEN.
pub type Tran = Vector3<i32>;

/// A single symmetry operation: rotation + translation, both scaled by [`DEN`].
///
/// The rotation acts on fractional coordinates. Integer storage keeps equality
/// exact, which is what group closure and rotation lookup rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Op {
    pub rot: Rot,
    pub tran: Tran,
}

impl Op {
    pub fn new(rot: Rot, tran: Tran) -> Self {
        Self { rot, tran }
    }

    /// Create identity operation
    pub fn identity() -> Self {
        Self {
            rot: Rot::from_diagonal_element(DEN),
            tran: Tran::zeros(),
        }
    }

    /// Operation with an integer rotation matrix (row-major) and no translation.
    pub fn from_integer_rotation(matrix: &[i8; 9]) -> Self {
        let scaled = matrix.map(|x| i32::from(x) * DEN);
        Self {
            rot: Rot::from_row_slice(&scaled),
            tran: Tran::zeros(),
        }
    }

    /// Rotation as floating-point matrix (unscaled).
    pub fn float_rotation(&self) -> Matrix3<f64> {
        self.rot.map(|x| f64::from(x) / f64::from(DEN))
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// `self * b`: apply `b` first, then `self`.
    pub fn combine(&self, b: &Op) -> Op {
        Op {
            rot: (self.rot * b.rot).map(|x| x / DEN),
            tran: (self.rot * b.tran).map(|x| x / DEN) + self.tran,
        }
    }

    pub fn negated_rot(&self) -> Rot {
        -self.rot
    }

    /// Determinant of the scaled rotation (DEN^3 for a proper rotation).
    pub fn det_rot(&self) -> i32 {
        let m = &self.rot;
        m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
            - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
            + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)])
    }

    /// Inverse operation. Fails when the rotation is singular or when the inverse
    /// is not representable with denominator [`DEN`].
    pub fn inverse(&self) -> Result<Op> {
        let det = self.det_rot();
        if det == 0 {
            return Err(TwinError::SingularOperation(format!(
                "{} has a singular rotation",
                self
            )));
        }
        let not_representable =
            || TwinError::SingularOperation(format!("inverse of {} needs a finer denominator", self));

        let mut rot = Rot::zeros();
        for i in 0..3 {
            for j in 0..3 {
                // adj(M)[i][j] is the (j, i) cofactor
                let scaled = cofactor(&self.rot, j, i) * DEN * DEN;
                if scaled % det != 0 {
                    return Err(not_representable());
                }
                rot[(i, j)] = scaled / det;
            }
        }
        let shifted = rot * self.tran;
        if shifted.iter().any(|x| x % DEN != 0) {
            return Err(not_representable());
        }
        Ok(Op {
            rot,
            tran: shifted.map(|x| -x / DEN),
        })
    }

    /// Translation reduced to [0, 1).
    pub fn wrap(&self) -> Op {
        Op {
            rot: self.rot,
            tran: self.tran.map(|x| x.rem_euclid(DEN)),
        }
    }

    /// Coordinate triplet, e.g. `-x,y+1/2,-z`.
    pub fn triplet(&self) -> String {
        (0..3)
            .map(|i| {
                let row = [self.rot[(i, 0)], self.rot[(i, 1)], self.rot[(i, 2)]];
                format_triplet_part(&row, self.tran[i], ['x', 'y', 'z'])
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Rotation in reciprocal-index notation, e.g. `-h,-k,l`.
    ///
    /// Miller indices transform with the transposed rotation; the translation
    /// is irrelevant for twin laws and is not printed.
    pub fn as_hkl(&self) -> String {
        (0..3)
            .map(|j| {
                let column = [self.rot[(0, j)], self.rot[(1, j)], self.rot[(2, j)]];
                format_triplet_part(&column, 0, ['h', 'k', 'l'])
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Parse a coordinate triplet such as `x,y,z`, `-x+1/2,y,-z` or `x-y,x,z+1/6`.
    pub fn parse_triplet(triplet: &str) -> Result<Op> {
        let parts: Vec<&str> = triplet.split(',').collect();
        if parts.len() != 3 {
            return Err(TwinError::InvalidTriplet(triplet.to_string()));
        }
        let mut op = Op::new(Rot::zeros(), Tran::zeros());
        for (i, part) in parts.iter().enumerate() {
            let (row, tran) = parse_triplet_part(part)?;
            for (j, value) in row.iter().enumerate() {
                op.rot[(i, j)] = *value;
            }
            op.tran[i] = tran;
        }
        Ok(op)
    }
}

impl Mul for Op {
    type Output = Op;

    fn mul(self, rhs: Op) -> Op {
        self.combine(&rhs)
    }
}

impl<'a> Mul<&'a Op> for &'a Op {
    type Output = Op;

    fn mul(self, rhs: &'a Op) -> Op {
        self.combine(rhs)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.triplet())
    }
}

fn cofactor(m: &Rot, row: usize, col: usize) -> i32 {
    let rows: Vec<usize> = (0..3).filter(|&r| r != row).collect();
    let cols: Vec<usize> = (0..3).filter(|&c| c != col).collect();
    let minor = m[(rows[0], cols[0])] * m[(rows[1], cols[1])]
        - m[(rows[0], cols[1])] * m[(rows[1], cols[0])];
    if (row + col) % 2 == 0 {
        minor
    } else {
        -minor
    }
}

fn gcd(a: i32, b: i32) -> i32 {
    if b == 0 {
        a.abs()
    } else {
        gcd(b, a % b)
    }
}

/// `value / DEN` as a reduced fraction (numerator, denominator).
fn reduced_fraction(value: i32) -> (i32, i32) {
    let g = gcd(value, DEN).max(1);
    (value / g, DEN / g)
}

fn format_fraction(num: i32, den: i32) -> String {
    if den == 1 {
        num.to_string()
    } else {
        format!("{}/{}", num, den)
    }
}

/// `value / DEN` written as an integer or reduced fraction, e.g. `1/2`.
pub(crate) fn format_den(value: i32) -> String {
    let (num, den) = reduced_fraction(value);
    format_fraction(num, den)
}

fn format_triplet_part(coefs: &[i32; 3], tran: i32, letters: [char; 3]) -> String {
    let mut s = String::new();
    for (&coef, letter) in coefs.iter().zip(letters) {
        if coef == 0 {
            continue;
        }
        let (num, den) = reduced_fraction(coef);
        if num < 0 {
            s.push('-');
        } else if !s.is_empty() {
            s.push('+');
        }
        if num.abs() != 1 || den != 1 {
            s.push_str(&format_fraction(num.abs(), den));
        }
        s.push(letter);
    }
    if tran != 0 {
        let (num, den) = reduced_fraction(tran);
        if num < 0 {
            s.push('-');
        } else if !s.is_empty() {
            s.push('+');
        }
        s.push_str(&format_fraction(num.abs(), den));
    }
    if s.is_empty() {
        s.push('0');
    }
    s
}

/// Parse one component of a triplet into (rotation row, translation), scaled by DEN.
fn parse_triplet_part(part: &str) -> Result<([i32; 3], i32)> {
    let err = || TwinError::InvalidTriplet(part.trim().to_string());
    let chars: Vec<char> = part
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if chars.is_empty() {
        return Err(err());
    }

    let mut row = [0; 3];
    let mut tran = 0;
    let mut pos = 0;
    while pos < chars.len() {
        let mut sign = 1;
        match chars[pos] {
            '+' => pos += 1,
            '-' => {
                sign = -1;
                pos += 1;
            }
            _ if pos > 0 => return Err(err()),
            _ => {}
        }

        let number = if chars.get(pos).is_some_and(|c| c.is_ascii_digit()) {
            let (num, den, next) = parse_fraction(&chars, pos).ok_or_else(err)?;
            pos = next;
            Some((num, den))
        } else {
            None
        };
        let starred = number.is_some() && chars.get(pos) == Some(&'*');
        if starred {
            pos += 1;
        }

        let axis = match chars.get(pos) {
            Some('x') => Some(0),
            Some('y') => Some(1),
            Some('z') => Some(2),
            _ => None,
        };
        match (axis, number) {
            (Some(axis), number) => {
                let (num, den) = number.unwrap_or((1, 1));
                row[axis] += sign * scale_to_den(num, den).ok_or_else(err)?;
                pos += 1;
            }
            (None, Some((num, den))) if !starred => {
                tran += sign * scale_to_den(num, den).ok_or_else(err)?;
            }
            (None, _) => return Err(err()),
        }
    }
    Ok((row, tran))
}

/// Reads `digits` or `digits/digits` starting at `pos`.
fn parse_fraction(chars: &[char], mut pos: usize) -> Option<(i32, i32, usize)> {
    let read_int = |pos: &mut usize| -> Option<i32> {
        let start = *pos;
        while chars.get(*pos).is_some_and(|c| c.is_ascii_digit()) {
            *pos += 1;
        }
        chars[start..*pos].iter().collect::<String>().parse().ok()
    };
    let num = read_int(&mut pos)?;
    let den = if chars.get(pos) == Some(&'/') {
        pos += 1;
        read_int(&mut pos)?
    } else {
        1
    };
    if den == 0 {
        return None;
    }
    Some((num, den, pos))
}

fn scale_to_den(num: i32, den: i32) -> Option<i32> {
    let scaled = num.checked_mul(DEN)?;
    (scaled % den == 0).then_some(scaled / den)
}
