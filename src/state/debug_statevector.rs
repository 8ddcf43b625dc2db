//! Dense state-vector reconstruction for a [`CheckMatrixState`], for tests and debug tooling only.
//!
//! Not a simulation path: it builds a full `2^n`-dimensional amplitude vector by dense linear
//! algebra, so it is only ever run against tiny circuits as a brute-force cross-check of the
//! check-matrix result.

use super::CheckMatrixState;
use crate::algebra::conjugate::pauli_string_matrix;
use ndarray::Array1;
use num_complex::Complex64;

const MAX_QUBITS: usize = 12;

/// Reconstructs the (unit-norm, up to global phase) amplitude vector of the state `state`
/// describes, by projecting a computational basis vector onto the simultaneous `+1`-eigenspace of
/// every stabilizer generator.
///
/// The projector `P = prod_s (I + g_s) / 2` onto that eigenspace is rank one, since the `n`
/// generators are independent and commuting; applying it to any basis vector with nonzero overlap
/// recovers the target state up to normalization. Because the computational basis spans the whole
/// space and the target is nonzero, some basis vector must have nonzero overlap.
///
/// # Panics
/// Panics if `state.n_qubits()` exceeds [`MAX_QUBITS`], or if every basis vector happens to have
/// negligible overlap (should not happen for a well-formed `state`).
pub fn reconstruct(state: &CheckMatrixState) -> Array1<Complex64> {
    let n = state.n_qubits();
    assert!(n <= MAX_QUBITS, "debug_statevector::reconstruct: {n} qubits exceeds the {MAX_QUBITS}-qubit debug limit");
    let dim = 1usize << n;

    let generators: Vec<(Complex64, Vec<crate::types::Pauli>)> = (0..n)
        .map(|s| (state.phase(s).to_complex(), state.full_pauli_string(s)))
        .collect();

    for basis_index in 0..dim {
        let mut amplitudes = Array1::<Complex64>::zeros(dim);
        amplitudes[basis_index] = Complex64::new(1.0, 0.0);

        for (sign, ops) in &generators {
            let g = pauli_string_matrix(ops).map(|z| z * sign);
            let projected = g.dot(&amplitudes);
            amplitudes = (&amplitudes + &projected).map(|z| z * 0.5);
        }

        let norm = amplitudes.iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt();
        if norm > 1e-8 {
            return amplitudes.map(|z| z / norm);
        }
    }
    unreachable!("every computational basis vector had negligible overlap with the stabilizer state")
}
