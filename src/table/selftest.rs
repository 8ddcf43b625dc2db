//! Cross-checks the generator-built conjugation table against the independent, dense-matrix
//! derivation in [`crate::algebra::conjugate`]. Run from a test so a mistake in either the basis
//! images or the matrix forms of the gates can't silently agree with itself.

use super::conjugation_table::ConjugationTable;
use super::gate_name::GateName;
use crate::algebra::conjugate::conjugate;
use crate::types::Pauli;
use itertools::Itertools;

/// Panics if any entry of `table` disagrees with the matrix-derived conjugation for `gate`.
pub fn verify_gate(table: &ConjugationTable, gate: GateName) {
    for combo in std::iter::repeat([Pauli::I, Pauli::X, Pauli::Y, Pauli::Z])
        .take(gate.arity())
        .multi_cartesian_product()
    {
        let from_table = table.lookup(gate, &combo).unwrap();
        let from_matrix = conjugate(gate.as_str(), &combo).unwrap();
        assert_eq!(
            from_table, from_matrix,
            "table/matrix disagreement for gate {gate} on {combo:?}: table says {from_table:?}, matrix says {from_matrix:?}"
        );
    }
}
