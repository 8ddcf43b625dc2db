use std::fmt;

/// One of the canonical supported Clifford gate names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateName {
    H,
    S,
    I,
    X,
    Y,
    Z,
    CX,
}

impl GateName {
    pub const ALL: [GateName; 7] = [
        GateName::H,
        GateName::S,
        GateName::I,
        GateName::X,
        GateName::Y,
        GateName::Z,
        GateName::CX,
    ];

    /// Number of qubits the gate acts on.
    pub fn arity(self) -> usize {
        match self {
            GateName::CX => 2,
            _ => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GateName::H => "H",
            GateName::S => "S",
            GateName::I => "I",
            GateName::X => "X",
            GateName::Y => "Y",
            GateName::Z => "Z",
            GateName::CX => "CX",
        }
    }
}

impl fmt::Display for GateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GateName {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GateName::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| crate::error::Error::UnknownGate(s.to_string()))
    }
}
