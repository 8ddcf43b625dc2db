mod pauli;
mod pauli_string;
mod phase;

pub use pauli::Pauli;
pub use pauli_string::SignedPauliString;
pub use phase::Phase;
