//! Builds a gate's conjugation table from its action on the X/Z generators of each qubit it acts
//! on, exploiting that conjugation is a ring homomorphism: `U(P1 P2)U^-1 = (U P1 U^-1)(U P2 U^-1)`.
//!
//! Each single-qubit Pauli decomposes exactly into a product of `X_q` and `Z_q` generators (with
//! `Y_q = i * X_q * Z_q`), so a gate's full `4^k`-entry table is determined by where it sends the
//! `2k` generators `X_0, Z_0, ..., X_{k-1}, Z_{k-1}`. This keeps every table entry an exact
//! symbolic computation over `{Pauli, Phase}` -- no floating point -- while `algebra::conjugate`
//! independently re-derives the same table via dense matrices as a self-test (see
//! `table::selftest`).

use crate::algebra::multiply;
use crate::types::{Pauli, Phase};
use itertools::Itertools;
use std::collections::HashMap;

/// The signed image of generator `X_qubit` (`is_z = false`) or `Z_qubit` (`is_z = true`) under
/// conjugation by some gate, as a full `n_qubits`-length signed Pauli string.
pub type BasisImage = fn(qubit: usize, is_z: bool) -> (Phase, Vec<Pauli>);

fn identity_ops(n: usize) -> Vec<Pauli> {
    vec![Pauli::I; n]
}

/// Decomposes a single-qubit symbol at position `qubit` into its generator factors, returning the
/// extra phase needed (`+i` for `Y`, since `Y = i * X * Z`) and the list of `(qubit, is_z)`
/// generators to multiply together.
fn decompose_symbol(qubit: usize, symbol: Pauli) -> (Phase, Vec<(usize, bool)>) {
    match symbol {
        Pauli::I => (Phase::PLUS_ONE, vec![]),
        Pauli::X => (Phase::PLUS_ONE, vec![(qubit, false)]),
        Pauli::Z => (Phase::PLUS_ONE, vec![(qubit, true)]),
        Pauli::Y => (Phase::PLUS_I, vec![(qubit, false), (qubit, true)]),
    }
}

/// Builds the full `(pauli -> (phase, pauli'))` table for a `k`-qubit gate given the conjugated
/// images of its `2k` generators.
pub fn build_table(n_qubits: usize, basis_image: BasisImage) -> HashMap<Vec<Pauli>, (Phase, Vec<Pauli>)> {
    let mut table = HashMap::with_capacity(4usize.pow(n_qubits as u32));

    for combo in std::iter::repeat([Pauli::I, Pauli::X, Pauli::Y, Pauli::Z])
        .take(n_qubits)
        .multi_cartesian_product()
    {
        let mut total_phase = Phase::PLUS_ONE;
        let mut total_ops = identity_ops(n_qubits);

        for (qubit, &symbol) in combo.iter().enumerate() {
            let (extra_phase, generators) = decompose_symbol(qubit, symbol);
            total_phase *= extra_phase;
            for (gen_qubit, is_z) in generators {
                let (gen_phase, gen_ops) = basis_image(gen_qubit, is_z);
                let (new_phase, new_ops) = multiply((total_phase, &total_ops), (gen_phase, &gen_ops));
                total_phase = new_phase;
                total_ops = new_ops;
            }
        }

        table.insert(combo, (total_phase, total_ops));
    }

    table
}
