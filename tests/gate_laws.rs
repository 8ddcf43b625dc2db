mod common;

use clifford_stab_sim::circuit::Circuit;
use clifford_stab_sim::table::{ConjugationTable, GateName};
use clifford_stab_sim::types::{Pauli, Phase};
use common::run_seeded;

/// Applying H twice to any qubit restores every generator and every phase.
#[test]
fn hh_is_identity() {
    let mut circuit = Circuit::new(1);
    circuit.h(0).unwrap();
    circuit.h(0).unwrap();
    circuit.h(0).unwrap();
    circuit.h(0).unwrap();
    let outcome = run_seeded(&circuit, 0);
    assert_eq!(outcome.state.get_pauli_strings(), vec!["Z".to_string()]);
}

/// Four S applications restore the state (S has order 4).
#[test]
fn ssss_is_identity() {
    let mut circuit = Circuit::new(1);
    circuit.h(0).unwrap();
    for _ in 0..4 {
        circuit.s(0).unwrap();
    }
    let outcome = run_seeded(&circuit, 0);
    assert_eq!(outcome.state.get_pauli_strings(), vec!["X".to_string()]);
}

#[test]
fn pauli_gates_are_self_inverse() {
    for (gate, expected) in [("x", "Z"), ("y", "Z"), ("z", "X")] {
        let mut circuit = Circuit::new(1);
        if expected == "X" {
            circuit.h(0).unwrap();
        }
        match gate {
            "x" => {
                circuit.x(0).unwrap();
                circuit.x(0).unwrap();
            }
            "y" => {
                circuit.y(0).unwrap();
                circuit.y(0).unwrap();
            }
            "z" => {
                circuit.z(0).unwrap();
                circuit.z(0).unwrap();
            }
            _ => unreachable!(),
        }
        let outcome = run_seeded(&circuit, 0);
        assert_eq!(outcome.state.get_pauli_strings(), vec![expected.to_string()]);
    }
}

#[test]
fn cx_cx_is_identity_on_the_same_control_and_target() {
    let mut circuit = Circuit::new(2);
    circuit.cx(0, 1).unwrap();
    circuit.cx(0, 1).unwrap();
    let outcome = run_seeded(&circuit, 0);
    assert_eq!(outcome.state.get_pauli_strings(), vec!["ZI".to_string(), "IZ".to_string()]);
}

/// H, X, Y, Z's conjugation squares to the identity map on single-qubit Paulis.
#[test]
fn conjugation_is_an_involution_for_h_x_y_z() {
    let table = ConjugationTable::full();
    for gate in [GateName::H, GateName::X, GateName::Y, GateName::Z] {
        for p in [Pauli::I, Pauli::X, Pauli::Y, Pauli::Z] {
            let (phase1, once) = table.lookup(gate, &[p]).unwrap();
            let (phase2, twice) = table.lookup(gate, &once).unwrap();
            assert_eq!(twice, vec![p]);
            assert_eq!(phase1 * phase2, Phase::PLUS_ONE);
        }
    }
}
