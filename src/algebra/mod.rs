//! Single- and multi-qubit Pauli algebra: commutation, multiplication with exact phase tracking.
//!
//! The reference prototype this crate's semantics were distilled from carries a latent bug in its
//! `commute`: some ports add a stray `z_count % 4 == 0` branch that misreports commutation. The
//! correct rule -- parity of anticommuting positions, modulo 2 -- is what's implemented below.

use crate::types::{Pauli, Phase};

pub mod conjugate;

/// Returns `true` iff two equal-length Pauli strings commute as operators.
///
/// Two single-qubit Paulis commute iff at least one is `I` or they are equal. A multi-qubit Pauli
/// pair commutes iff the number of positions at which both operands are non-identity and unequal
/// (i.e. anticommuting at that site) is even. Phases are ignored.
///
/// # Panics
/// Panics if `p` and `q` have different lengths.
pub fn commute(p: &[Pauli], q: &[Pauli]) -> bool {
    assert_eq!(p.len(), q.len(), "commute: Pauli strings must have equal length");
    let anticommuting_positions = p
        .iter()
        .zip(q.iter())
        .filter(|(&a, &b)| a != Pauli::I && b != Pauli::I && a != b)
        .count();
    anticommuting_positions % 2 == 0
}

/// The product of two single-qubit Paulis, returned as a signed Pauli uniformly -- unlike the
/// prototype this was distilled from, which returns a bare `Pauli` whenever an operand is `I`.
fn single_pauli_product(a: Pauli, b: Pauli) -> (Phase, Pauli) {
    use Pauli::*;
    match (a, b) {
        (I, other) => (Phase::PLUS_ONE, other),
        (other, I) => (Phase::PLUS_ONE, other),
        (a, b) if a == b => (Phase::PLUS_ONE, I),
        (X, Y) => (Phase::PLUS_I, Z),
        (Y, X) => (Phase::MINUS_I, Z),
        (Y, Z) => (Phase::PLUS_I, X),
        (Z, Y) => (Phase::MINUS_I, X),
        (Z, X) => (Phase::PLUS_I, Y),
        (X, Z) => (Phase::MINUS_I, Y),
        _ => unreachable!("all Pauli pairs are covered above"),
    }
}

/// Multiplies two signed, equal-length Pauli strings pairwise, returning the signed product.
///
/// `phase_c = phase_a * phase_b * (product of the per-qubit phases)`.
///
/// # Panics
/// Panics if `a` and `b` have different lengths.
pub fn multiply(
    (phase_a, a): (Phase, &[Pauli]),
    (phase_b, b): (Phase, &[Pauli]),
) -> (Phase, Vec<Pauli>) {
    assert_eq!(a.len(), b.len(), "multiply: Pauli strings must have equal length");
    let mut phase = phase_a * phase_b;
    let mut ops = Vec::with_capacity(a.len());
    for (&pa, &pb) in a.iter().zip(b.iter()) {
        let (term_phase, pauli) = single_pauli_product(pa, pb);
        phase *= term_phase;
        ops.push(pauli);
    }
    (phase, ops)
}
