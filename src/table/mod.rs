//! The Clifford conjugation table: for each supported gate, a precomputed map from every signed
//! Pauli string of the gate's arity to its conjugated image.
//!
//! Entries are derived symbolically from each gate's action on its `X`/`Z` generators (see
//! [`build`]), and independently re-derived via dense matrix conjugation in
//! [`crate::algebra::conjugate`] as a self-test (see [`selftest`]).

mod basis_images;
mod build;
mod conjugation_table;
mod gate_name;
pub mod selftest;

pub use conjugation_table::ConjugationTable;
pub use gate_name::GateName;
