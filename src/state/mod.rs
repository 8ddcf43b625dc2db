//! The mutable core of the simulator: an `n x 2n` binary check matrix plus an `n`-length phase
//! vector, together with the gate-application and measurement routines that keep it a valid
//! stabilizer description as a circuit runs.

mod bitrow;
#[cfg(any(test, feature = "statevector"))]
pub mod debug_statevector;
mod outcome;

pub use outcome::{MeasurementKind, MeasurementOutcome};

use crate::algebra::{commute, multiply};
use crate::error::{Error, Result};
use crate::rng::StabilizerRng;
use crate::table::{ConjugationTable, GateName};
use crate::types::{Pauli, Phase, SignedPauliString};
use std::fmt;

/// The binary check matrix and phase vector of an `n`-qubit stabilizer state.
///
/// Row `s` packs its `2n` check-matrix columns into [`bitrow`]-format `u64` words; see that module
/// for the column layout. `phase[s]` is the overall sign/phase of generator `s`.
pub struct CheckMatrixState {
    n_qubits: usize,
    rows: Vec<Vec<u64>>,
    phase: Vec<Phase>,
}

impl CheckMatrixState {
    /// Builds the check matrix for the computational basis state `|0...0>`: generator `s` is `Z`
    /// on qubit `s` and `I` elsewhere, each with phase `+1`.
    pub fn new(n_qubits: usize) -> Self {
        let mut rows = vec![bitrow::zero_row(n_qubits); n_qubits];
        for (s, row) in rows.iter_mut().enumerate() {
            bitrow::set_pauli(row, s, n_qubits, Pauli::Z);
        }
        Self {
            n_qubits,
            rows,
            phase: vec![Phase::PLUS_ONE; n_qubits],
        }
    }

    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    fn require_qubit_in_range(&self, qubit: usize) -> Result<()> {
        if qubit >= self.n_qubits {
            Err(Error::QubitOutOfRange {
                qubit,
                n_qubits: self.n_qubits,
            })
        } else {
            Ok(())
        }
    }

    pub fn phase(&self, generator: usize) -> Phase {
        self.phase[generator]
    }

    pub fn get_pauli(&self, generator: usize, qubit: usize) -> Pauli {
        bitrow::get_pauli(&self.rows[generator], qubit, self.n_qubits)
    }

    pub fn set_pauli(&mut self, generator: usize, qubit: usize, symbol: Pauli) {
        bitrow::set_pauli(&mut self.rows[generator], qubit, self.n_qubits, symbol);
    }

    /// The Pauli symbols of generator `s` at `qubits`, in the order given.
    pub fn get_stabilizer(&self, generator: usize, qubits: &[usize]) -> Vec<Pauli> {
        qubits.iter().map(|&q| self.get_pauli(generator, q)).collect()
    }

    /// Writes `ops` into generator `s` at `qubits`, in the order given; other positions untouched.
    pub fn set_stabilizer(&mut self, generator: usize, qubits: &[usize], ops: &[Pauli]) {
        for (&q, &symbol) in qubits.iter().zip(ops.iter()) {
            self.set_pauli(generator, q, symbol);
        }
    }

    fn full_pauli_string(&self, generator: usize) -> Vec<Pauli> {
        bitrow::full_pauli_string(&self.rows[generator], self.n_qubits)
    }

    fn set_full_pauli_string(&mut self, generator: usize, ops: &[Pauli]) {
        bitrow::set_full_pauli_string(&mut self.rows[generator], self.n_qubits, ops);
    }

    /// Human-readable signed Pauli string for every generator, e.g. `["ZI", "-IZ"]`.
    pub fn get_pauli_strings(&self) -> Vec<String> {
        (0..self.n_qubits)
            .map(|s| {
                SignedPauliString::new(self.phase[s], self.full_pauli_string(s)).to_string()
            })
            .collect()
    }

    /// Applies `gate` to `qubits`, updating every generator's Pauli content and phase via the
    /// precomputed conjugation table.
    ///
    /// # Errors
    /// [`Error::QubitOutOfRange`] if any index is out of bounds, [`Error::ArityMismatch`] if
    /// `qubits.len()` disagrees with the gate's arity.
    pub fn apply_gate(&mut self, qubits: &[usize], gate: GateName, table: &ConjugationTable) -> Result<()> {
        if qubits.len() != gate.arity() {
            return Err(Error::ArityMismatch {
                expected: gate.arity(),
                found: qubits.len(),
            });
        }
        for &q in qubits {
            self.require_qubit_in_range(q)?;
        }

        for s in 0..self.n_qubits {
            let p = self.get_stabilizer(s, qubits);
            let (delta, p_prime) = table.lookup(gate, &p)?;
            self.set_stabilizer(s, qubits, &p_prime);
            self.phase[s] *= delta;
        }
        Ok(())
    }

    /// Measures the Pauli observable `phase * operator` on `qubits` (with `I` on every other
    /// qubit), returning the outcome and, for a random outcome, updating the generators so the
    /// post-measurement stabilizer group contains `outcome * phase * operator`.
    ///
    /// # Errors
    /// [`Error::QubitOutOfRange`] if any index is out of bounds, [`Error::ArityMismatch`] if
    /// `operator.len() != qubits.len()`, [`Error::MeasurementNotInGroup`] if the deterministic
    /// branch cannot locate a matching generator (a corrupted-invariant condition, not user error).
    pub fn apply_measurement(
        &mut self,
        qubits: &[usize],
        operator: &[Pauli],
        phase: Phase,
        rng: &mut impl StabilizerRng,
    ) -> Result<MeasurementOutcome> {
        if operator.len() != qubits.len() {
            return Err(Error::ArityMismatch {
                expected: qubits.len(),
                found: operator.len(),
            });
        }
        for &q in qubits {
            self.require_qubit_in_range(q)?;
        }

        let mut extended = vec![Pauli::I; self.n_qubits];
        for (&q, &symbol) in qubits.iter().zip(operator.iter()) {
            extended[q] = symbol;
        }

        let anticommuting: Vec<usize> = (0..self.n_qubits)
            .filter(|&s| !commute(&self.full_pauli_string(s), &extended))
            .collect();

        if anticommuting.is_empty() {
            let pivot = (0..self.n_qubits)
                .find(|&s| self.get_stabilizer(s, qubits) == operator)
                .ok_or(Error::MeasurementNotInGroup)?;
            let value = if self.phase[pivot] == phase {
                Phase::PLUS_ONE
            } else {
                Phase::MINUS_ONE
            };
            return Ok(MeasurementOutcome {
                value,
                kind: MeasurementKind::Deterministic,
            });
        }

        let pivot = *anticommuting.iter().min().expect("checked non-empty above");
        let pivot_ops = self.full_pauli_string(pivot);
        let pivot_phase = self.phase[pivot];

        for &s in anticommuting.iter().filter(|&&s| s != pivot) {
            let row_ops = self.full_pauli_string(s);
            let (new_phase, new_ops) = multiply((self.phase[s], &row_ops), (pivot_phase, &pivot_ops));
            self.set_full_pauli_string(s, &new_ops);
            self.phase[s] = new_phase;
        }

        let value = if rng.next_bool() { Phase::PLUS_ONE } else { Phase::MINUS_ONE };
        self.set_full_pauli_string(pivot, &extended);
        self.phase[pivot] = value * phase;

        Ok(MeasurementOutcome {
            value,
            kind: MeasurementKind::Random,
        })
    }

    /// Checks the three stabilizer invariants: pairwise commutation, GF(2) linear independence of
    /// the rows, and phases restricted to `{+1,-1,+i,-i}` (automatic for [`Phase`]). Intended for
    /// tests and debug builds, not the hot gate-application path.
    pub fn debug_assert_invariants(&self) {
        for s in 0..self.n_qubits {
            for t in (s + 1)..self.n_qubits {
                assert!(
                    commute(&self.full_pauli_string(s), &self.full_pauli_string(t)),
                    "generators {s} and {t} do not commute"
                );
            }
        }
        assert!(self.rows_are_linearly_independent(), "generator rows are linearly dependent over GF(2)");
    }

    fn rows_are_linearly_independent(&self) -> bool {
        let n = self.n_qubits;
        let mut columns: Vec<Vec<bool>> = (0..self.n_qubits)
            .map(|s| {
                let mut bits = Vec::with_capacity(2 * n);
                for q in 0..n {
                    let (x, z) = self.get_pauli(s, q).to_bits();
                    bits.push(x);
                    bits.push(z);
                }
                bits
            })
            .collect();

        let width = 2 * n;
        let mut pivot_row = 0;
        for col in 0..width {
            if pivot_row >= columns.len() {
                break;
            }
            let Some(found) = (pivot_row..columns.len()).find(|&r| columns[r][col]) else {
                continue;
            };
            columns.swap(pivot_row, found);
            for r in 0..columns.len() {
                if r != pivot_row && columns[r][col] {
                    for c in col..width {
                        columns[r][c] ^= columns[pivot_row][c];
                    }
                }
            }
            pivot_row += 1;
        }
        pivot_row == self.n_qubits
    }
}

impl fmt::Display for CheckMatrixState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.get_pauli_strings() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
