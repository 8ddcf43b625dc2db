mod common;

use clifford_stab_sim::circuit::Circuit;
use common::run_seeded;

fn pauli_strings(circuit: &Circuit) -> Vec<String> {
    run_seeded(circuit, 0).state.get_pauli_strings()
}

#[test]
fn no_ops_gives_the_computational_zero_state() {
    let circuit = Circuit::new(2);
    assert_eq!(pauli_strings(&circuit), vec!["ZI".to_string(), "IZ".to_string()]);
}

#[test]
fn h_gives_x() {
    let mut circuit = Circuit::new(1);
    circuit.h(0).unwrap();
    assert_eq!(pauli_strings(&circuit), vec!["X".to_string()]);
}

#[test]
fn h_h_gives_z() {
    let mut circuit = Circuit::new(1);
    circuit.h(0).unwrap();
    circuit.h(0).unwrap();
    assert_eq!(pauli_strings(&circuit), vec!["Z".to_string()]);
}

#[test]
fn h_s_gives_y() {
    let mut circuit = Circuit::new(1);
    circuit.h(0).unwrap();
    circuit.s(0).unwrap();
    assert_eq!(pauli_strings(&circuit), vec!["Y".to_string()]);
}

#[test]
fn x_gives_minus_z() {
    let mut circuit = Circuit::new(1);
    circuit.x(0).unwrap();
    assert_eq!(pauli_strings(&circuit), vec!["-Z".to_string()]);
}

#[test]
fn y_gives_minus_z() {
    let mut circuit = Circuit::new(1);
    circuit.y(0).unwrap();
    assert_eq!(pauli_strings(&circuit), vec!["-Z".to_string()]);
}

#[test]
fn h_z_gives_minus_x() {
    let mut circuit = Circuit::new(1);
    circuit.h(0).unwrap();
    circuit.z(0).unwrap();
    assert_eq!(pauli_strings(&circuit), vec!["-X".to_string()]);
}

#[test]
fn cx_on_zero_state_gives_zi_zz() {
    let mut circuit = Circuit::new(2);
    circuit.cx(0, 1).unwrap();
    assert_eq!(pauli_strings(&circuit), vec!["ZI".to_string(), "ZZ".to_string()]);
}

#[test]
fn bell_state_stabilizers() {
    let mut circuit = Circuit::new(2);
    circuit.h(0).unwrap();
    circuit.h(1).unwrap();
    circuit.cx(0, 1).unwrap();
    assert_eq!(pauli_strings(&circuit), vec!["XX".to_string(), "IX".to_string()]);
}

#[test]
fn measuring_an_x_eigenstate_all_z_is_deterministic_negative() {
    let mut circuit = Circuit::new(2);
    circuit.x(0).unwrap();
    circuit.x(1).unwrap();
    circuit.measure_all().unwrap();
    assert_eq!(pauli_strings(&circuit), vec!["-ZI".to_string(), "-IZ".to_string()]);
}

#[test]
fn measuring_a_superposition_lands_on_one_of_the_four_sign_combinations() {
    let mut circuit = Circuit::new(2);
    circuit.h(0).unwrap();
    circuit.h(1).unwrap();
    circuit.measure_all().unwrap();

    let possible_first = ["ZI", "-ZI"];
    let possible_second = ["IZ", "-IZ"];
    for seed in 0..20 {
        let strings = pauli_strings_seeded(&circuit, seed);
        assert!(possible_first.contains(&strings[0].as_str()));
        assert!(possible_second.contains(&strings[1].as_str()));
    }
}

fn pauli_strings_seeded(circuit: &Circuit, seed: u64) -> Vec<String> {
    run_seeded(circuit, seed).state.get_pauli_strings()
}
