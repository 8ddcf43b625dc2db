use thiserror::Error;

/// A specialized `Result` type for check-matrix simulator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or simulating a Clifford circuit.
///
/// The first four variants are user-input errors raised while building a [`Circuit`](crate::circuit::Circuit)
/// or while looking up a gate. The last two indicate a corrupted stabilizer invariant or a bug in
/// the conjugation table rather than bad input, and should not occur for well-formed circuits.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// A circuit operation named a qubit index outside `[0, n_qubits)`.
    #[error("qubit index {qubit} is out of bounds for {n_qubits} qubits")]
    QubitOutOfRange { qubit: usize, n_qubits: usize },

    /// The simulator was asked to conjugate a gate that isn't in its configured gate set.
    #[error("unknown gate '{0}'")]
    UnknownGate(String),

    /// A gate or measurement's qubit count disagrees with its operator length or the gate's arity.
    #[error("arity mismatch: expected {expected} qubit(s), found {found}")]
    ArityMismatch { expected: usize, found: usize },

    /// A phase value fell outside the set {+1, -1, +i, -i}.
    #[error("invalid phase: {0}")]
    InvalidPhase(String),

    /// A signed Pauli string or circuit instruction could not be parsed.
    #[error("failed to parse Pauli string '{0}'")]
    PauliParse(String),

    /// At table-build/self-test time, `U * P * U^-1` did not decompose into a signed Pauli string.
    /// Indicates a bug in the gate set or an attempt to conjugate a non-Clifford gate.
    #[error("conjugation of '{pauli}' under gate '{gate}' is not a signed Pauli string")]
    UnrecognizedConjugate { gate: String, pauli: String },

    /// The deterministic measurement branch could not locate the stabilizer generator matching
    /// the measured operator. Indicates corrupted stabilizer invariants, not user error.
    #[error("measurement operator is not represented among the stabilizer generators")]
    MeasurementNotInGroup,
}
