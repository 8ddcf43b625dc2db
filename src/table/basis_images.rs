//! Hard-coded conjugated images of each gate's `X_qubit`/`Z_qubit` generators, the only facts
//! [`super::build::build_table`] needs to derive a gate's complete `4^k`-entry conjugation table.

use super::build::BasisImage;
use super::gate_name::GateName;
use crate::types::{Pauli, Phase};

fn h_image(_qubit: usize, is_z: bool) -> (Phase, Vec<Pauli>) {
    if is_z {
        (Phase::PLUS_ONE, vec![Pauli::X])
    } else {
        (Phase::PLUS_ONE, vec![Pauli::Z])
    }
}

fn s_image(_qubit: usize, is_z: bool) -> (Phase, Vec<Pauli>) {
    if is_z {
        (Phase::PLUS_ONE, vec![Pauli::Z])
    } else {
        (Phase::PLUS_ONE, vec![Pauli::Y])
    }
}

fn identity_image(_qubit: usize, is_z: bool) -> (Phase, Vec<Pauli>) {
    if is_z {
        (Phase::PLUS_ONE, vec![Pauli::Z])
    } else {
        (Phase::PLUS_ONE, vec![Pauli::X])
    }
}

fn x_image(_qubit: usize, is_z: bool) -> (Phase, Vec<Pauli>) {
    if is_z {
        (Phase::MINUS_ONE, vec![Pauli::Z])
    } else {
        (Phase::PLUS_ONE, vec![Pauli::X])
    }
}

fn y_image(_qubit: usize, is_z: bool) -> (Phase, Vec<Pauli>) {
    if is_z {
        (Phase::MINUS_ONE, vec![Pauli::Z])
    } else {
        (Phase::MINUS_ONE, vec![Pauli::X])
    }
}

fn z_image(_qubit: usize, is_z: bool) -> (Phase, Vec<Pauli>) {
    if is_z {
        (Phase::PLUS_ONE, vec![Pauli::Z])
    } else {
        (Phase::MINUS_ONE, vec![Pauli::X])
    }
}

/// `CX` with qubit 0 as control and qubit 1 as target.
fn cx_image(qubit: usize, is_z: bool) -> (Phase, Vec<Pauli>) {
    match (qubit, is_z) {
        (0, false) => (Phase::PLUS_ONE, vec![Pauli::X, Pauli::X]),
        (0, true) => (Phase::PLUS_ONE, vec![Pauli::Z, Pauli::I]),
        (1, false) => (Phase::PLUS_ONE, vec![Pauli::I, Pauli::X]),
        (1, true) => (Phase::PLUS_ONE, vec![Pauli::Z, Pauli::Z]),
        _ => unreachable!("CX only touches qubits 0 and 1"),
    }
}

pub fn basis_image(gate: GateName) -> BasisImage {
    match gate {
        GateName::H => h_image,
        GateName::S => s_image,
        GateName::I => identity_image,
        GateName::X => x_image,
        GateName::Y => y_image,
        GateName::Z => z_image,
        GateName::CX => cx_image,
    }
}
