use num_complex::Complex64;
use std::ops::{Mul, MulAssign, Neg};

/// A phase drawn from `{+1, +i, -1, -i}`, represented as `i^k` for `k in 0..4`.
///
/// Multiplication is addition of the exponent modulo 4, so phase bookkeeping never touches
/// floating point and never needs the "is this really +-1?" check the original prototype performs
/// on raw `complex64` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase(u8);

impl Phase {
    pub const PLUS_ONE: Self = Self(0);
    pub const PLUS_I: Self = Self(1);
    pub const MINUS_ONE: Self = Self(2);
    pub const MINUS_I: Self = Self(3);

    /// Builds a phase from `i^k`, reducing `k` modulo 4.
    pub fn from_exponent(k: i32) -> Self {
        Self(k.rem_euclid(4) as u8)
    }

    pub fn exponent(self) -> u8 {
        self.0
    }

    pub fn conjugate(self) -> Self {
        Self((4 - self.0) % 4)
    }

    pub fn to_complex(self) -> Complex64 {
        match self.0 {
            0 => Complex64::new(1.0, 0.0),
            1 => Complex64::new(0.0, 1.0),
            2 => Complex64::new(-1.0, 0.0),
            _ => Complex64::new(0.0, -1.0),
        }
    }

    /// Recovers a `Phase` from a unit complex number, within `tol` of one of {+1,+i,-1,-i}.
    pub fn from_complex(z: Complex64, tol: f64) -> Option<Self> {
        const CANDIDATES: [(u8, Complex64); 4] = [
            (0, Complex64::new(1.0, 0.0)),
            (1, Complex64::new(0.0, 1.0)),
            (2, Complex64::new(-1.0, 0.0)),
            (3, Complex64::new(0.0, -1.0)),
        ];
        CANDIDATES
            .into_iter()
            .find(|(_, c)| (z - c).norm() <= tol)
            .map(|(k, _)| Self(k))
    }

    /// The textual sign prefix used by [`crate::types::SignedPauliString`]'s `Display`/`FromStr`:
    /// `""`, `"-"`, `"i"`, or `"-i"`.
    pub fn as_prefix(self) -> &'static str {
        match self.0 {
            0 => "",
            1 => "i",
            2 => "-",
            _ => "-i",
        }
    }
}

impl Mul for Phase {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self((self.0 + rhs.0) % 4)
    }
}

impl MulAssign for Phase {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Neg for Phase {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self * Self::MINUS_ONE
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::PLUS_ONE
    }
}
