//! Iterates a circuit's instructions against a fresh check-matrix state, dispatching each to gate
//! application or measurement and collecting the measurement outcomes.

use crate::circuit::{Circuit, Instruction};
use crate::error::Result;
use crate::rng::StabilizerRng;
use crate::state::{CheckMatrixState, MeasurementOutcome};
use crate::table::{ConjugationTable, GateName};

/// The final state and ordered measurement outcomes of one circuit execution.
pub struct Outcome {
    pub state: CheckMatrixState,
    pub measurements: Vec<MeasurementOutcome>,
}

/// Drives a fixed conjugation table over however many circuits are executed with it. Cheap to
/// share: the table is built once and never mutated.
pub struct Simulator {
    table: ConjugationTable,
}

impl Simulator {
    /// Builds a simulator supporting exactly `gates`.
    pub fn new(gates: &[GateName]) -> Self {
        Self {
            table: ConjugationTable::new(gates),
        }
    }

    /// Builds a simulator supporting the full canonical gate set.
    pub fn full() -> Self {
        Self {
            table: ConjugationTable::full(),
        }
    }

    /// Runs `circuit` to completion against a fresh `|0...0>` state.
    ///
    /// No rollback: if an instruction fails, the partially-mutated state is discarded along with
    /// the error: there is no well-defined intermediate state for a caller to recover.
    pub fn execute(&self, circuit: &Circuit, rng: &mut impl StabilizerRng) -> Result<Outcome> {
        let mut state = CheckMatrixState::new(circuit.n_qubits());
        let mut measurements = Vec::new();

        for instruction in circuit.instructions() {
            match instruction {
                Instruction::Gate { name, qubits } => {
                    state.apply_gate(qubits, *name, &self.table)?;
                }
                Instruction::Measurement { qubits, operator, phase } => {
                    let outcome = state.apply_measurement(qubits, operator, *phase, rng)?;
                    measurements.push(outcome);
                }
            }
        }

        Ok(Outcome { state, measurements })
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;
    use crate::state::MeasurementKind;

    #[test]
    fn executes_the_bell_pair_scenario() {
        let mut circuit = Circuit::new(2);
        circuit.h(0).unwrap();
        circuit.h(1).unwrap();
        circuit.cx(0, 1).unwrap();

        let simulator = Simulator::full();
        let mut rng = seeded(0);
        let outcome = simulator.execute(&circuit, &mut rng).unwrap();

        assert_eq!(outcome.state.get_pauli_strings(), vec!["XX".to_string(), "IX".to_string()]);
        assert!(outcome.measurements.is_empty());
    }

    #[test]
    fn measure_all_on_eigenstate_is_fully_deterministic() {
        let mut circuit = Circuit::new(2);
        circuit.x(0).unwrap();
        circuit.x(1).unwrap();
        circuit.measure_all().unwrap();

        let simulator = Simulator::full();
        let mut rng = seeded(0);
        let outcome = simulator.execute(&circuit, &mut rng).unwrap();

        assert_eq!(outcome.measurements.len(), 2);
        assert!(outcome.measurements.iter().all(|m| m.kind == MeasurementKind::Deterministic));
        assert_eq!(outcome.state.get_pauli_strings(), vec!["-ZI".to_string(), "-IZ".to_string()]);
    }

    #[test]
    fn unknown_gate_in_a_restricted_simulator_surfaces_the_error() {
        let mut circuit = Circuit::new(1);
        circuit.h(0).unwrap();

        let simulator = Simulator::new(&[GateName::X]);
        let mut rng = seeded(0);
        assert!(simulator.execute(&circuit, &mut rng).is_err());
    }

    #[test]
    fn bell_pair_matches_both_the_stabilizer_strings_and_the_brute_force_statevector() {
        use crate::test_utils::{assert_matches_statevector, assert_pauli_strings_eq};
        use num_complex::Complex64;

        let mut circuit = Circuit::new(2);
        circuit.h(0).unwrap();
        circuit.h(1).unwrap();
        circuit.cx(0, 1).unwrap();

        let simulator = Simulator::full();
        let mut rng = seeded(0);
        let outcome = simulator.execute(&circuit, &mut rng).unwrap();

        assert_pauli_strings_eq(&outcome.state.get_pauli_strings(), &["XX", "IX"]);

        let h = 1.0 / std::f64::consts::SQRT_2;
        assert_matches_statevector(
            &outcome.state,
            &[Complex64::new(h, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(h, 0.0)],
        );
    }
}
