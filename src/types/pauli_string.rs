use super::{Pauli, Phase};
use crate::error::Error;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// A multi-qubit Pauli string paired with a sign drawn from `{+1, -1, +i, -i}`.
///
/// Textual format: `sign? letters`, where `sign` is one of `""`, `"-"`, `"i"`, `"-i"` and
/// `letters` is one or more of `I`, `X`, `Y`, `Z` (see [`crate::types::Phase::as_prefix`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPauliString {
    pub phase: Phase,
    pub ops: Vec<Pauli>,
}

lazy_static! {
    static ref SIGNED_PAULI_RE: Regex = Regex::new(r"^(?P<sign>-i|-|i)?(?P<letters>[IXYZ]+)$").unwrap();
}

impl SignedPauliString {
    pub fn new(phase: Phase, ops: Vec<Pauli>) -> Self {
        Self { phase, ops }
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// The unsigned letters, e.g. `"XIZ"`.
    pub fn letters(&self) -> String {
        self.ops.iter().map(|p| p.to_char()).collect()
    }
}

impl fmt::Display for SignedPauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.phase.as_prefix(), self.letters())
    }
}

impl FromStr for SignedPauliString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = SIGNED_PAULI_RE
            .captures(s)
            .ok_or_else(|| Error::PauliParse(s.to_string()))?;

        let phase = match caps.name("sign").map(|m| m.as_str()) {
            None => Phase::PLUS_ONE,
            Some("-") => Phase::MINUS_ONE,
            Some("i") => Phase::PLUS_I,
            Some("-i") => Phase::MINUS_I,
            Some(other) => return Err(Error::PauliParse(format!("unrecognized sign '{other}'"))),
        };

        let letters = &caps["letters"];
        let ops = letters
            .chars()
            .map(|c| Pauli::from_char(c).ok_or_else(|| Error::PauliParse(s.to_string())))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { phase, ops })
    }
}
