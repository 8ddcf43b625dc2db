//! # Clifford Stabilizer Simulator
//!
//! Simulates quantum circuits built from the Clifford gate set (H, S, I, X, Y, Z, CX) together
//! with Pauli-basis projective measurements, tracking an n-qubit stabilizer group in polynomial
//! time and space via the binary check-matrix representation, rather than an exponential
//! state-vector.

pub mod algebra;
pub mod circuit;
pub mod error;
pub mod rng;
pub mod simulator;
pub mod state;
pub mod table;
pub mod types;

pub mod prelude {
    pub use crate::circuit::{Circuit, Instruction};
    pub use crate::error::{Error, Result};
    pub use crate::simulator::{Outcome, Simulator};
    pub use crate::state::{CheckMatrixState, MeasurementKind, MeasurementOutcome};
    pub use crate::table::{ConjugationTable, GateName};
    pub use crate::types::{Pauli, Phase, SignedPauliString};
}
