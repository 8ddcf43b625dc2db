//! Matrix-based Clifford conjugation: boundary code used only to independently derive and
//! self-test the static conjugation table in [`crate::table`]. Never on the runtime gate-
//! application path (see section 4.1 of `SPEC_FULL.md`).

use crate::error::Error;
use crate::types::Pauli;
use ndarray::{Array2, array};
use num_complex::Complex64;

pub(crate) type Mat = Array2<Complex64>;

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

/// Dense matrix for a single Pauli symbol.
fn pauli_matrix(p: Pauli) -> Mat {
    match p {
        Pauli::I => array![[c(1.0, 0.0), c(0.0, 0.0)], [c(0.0, 0.0), c(1.0, 0.0)]],
        Pauli::X => array![[c(0.0, 0.0), c(1.0, 0.0)], [c(1.0, 0.0), c(0.0, 0.0)]],
        Pauli::Y => array![[c(0.0, 0.0), c(0.0, -1.0)], [c(0.0, 1.0), c(0.0, 0.0)]],
        Pauli::Z => array![[c(1.0, 0.0), c(0.0, 0.0)], [c(0.0, 0.0), c(-1.0, 0.0)]],
    }
}

/// Dense matrix for a multi-qubit Pauli string, via Kronecker product in qubit order.
pub(crate) fn pauli_string_matrix(ops: &[Pauli]) -> Mat {
    ops.iter()
        .map(|&p| pauli_matrix(p))
        .reduce(|acc, m| kron(&acc, &m))
        .expect("pauli_string_matrix: empty Pauli string")
}

fn kron(a: &Mat, b: &Mat) -> Mat {
    let (ar, ac) = a.dim();
    let (br, bc) = b.dim();
    Array2::from_shape_fn((ar * br, ac * bc), |(i, j)| {
        a[(i / br, j / bc)] * b[(i % br, j % bc)]
    })
}

fn dagger(m: &Mat) -> Mat {
    m.t().map(|z| z.conj())
}

fn matmul(a: &Mat, b: &Mat) -> Mat {
    a.dot(b)
}

/// Dense unitary matrix for a gate, in the canonical argument order used throughout this crate
/// (for `CX`, qubit 0 is control, qubit 1 is target).
pub fn gate_matrix(gate: &str) -> Option<Mat> {
    let h = 1.0 / std::f64::consts::SQRT_2;
    match gate {
        "H" => Some(array![[c(h, 0.0), c(h, 0.0)], [c(h, 0.0), c(-h, 0.0)]]),
        "S" => Some(array![[c(1.0, 0.0), c(0.0, 0.0)], [c(0.0, 0.0), c(0.0, 1.0)]]),
        "I" => Some(array![[c(1.0, 0.0), c(0.0, 0.0)], [c(0.0, 0.0), c(1.0, 0.0)]]),
        "X" => Some(pauli_matrix(Pauli::X)),
        "Y" => Some(pauli_matrix(Pauli::Y)),
        "Z" => Some(pauli_matrix(Pauli::Z)),
        "CX" => Some(array![
            [c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
            [c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
            [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)],
            [c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)],
        ]),
        _ => None,
    }
}

fn matrices_close(a: &Mat, b: &Mat) -> bool {
    a.iter()
        .zip(b.iter())
        .all(|(x, y)| approx::abs_diff_eq!(x.re, y.re, epsilon = 1e-8) && approx::abs_diff_eq!(x.im, y.im, epsilon = 1e-8))
}

fn decompose_signed_pauli(m: &Mat, n_qubits: usize) -> Option<(crate::types::Phase, Vec<Pauli>)> {
    use itertools::Itertools;

    for combo in std::iter::repeat([Pauli::I, Pauli::X, Pauli::Y, Pauli::Z])
        .take(n_qubits)
        .multi_cartesian_product()
    {
        let candidate = pauli_string_matrix(&combo);
        for k in 0..4 {
            let phase = crate::types::Phase::from_exponent(k);
            let scaled = candidate.map(|z| z * phase.to_complex());
            if matrices_close(&scaled, m) {
                return Some((phase, combo));
            }
        }
    }
    None
}

/// Computes `Q = U . P . U^dagger` for gate `gate` and Pauli string `pauli`, and decomposes the
/// result into a signed Pauli string `(phase, pauli')`.
pub fn conjugate(gate: &str, pauli: &[Pauli]) -> crate::error::Result<(crate::types::Phase, Vec<Pauli>)> {
    let u = gate_matrix(gate).ok_or_else(|| Error::UnknownGate(gate.to_string()))?;
    let p = pauli_string_matrix(pauli);
    let q = matmul(&matmul(&u, &p), &dagger(&u));
    decompose_signed_pauli(&q, pauli.len()).ok_or_else(|| Error::UnrecognizedConjugate {
        gate: gate.to_string(),
        pauli: pauli.iter().map(|p| p.to_char()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Phase;
    use Pauli::*;

    #[test]
    fn h_conjugates_x_to_z_and_z_to_x() {
        assert_eq!(conjugate("H", &[X]).unwrap(), (Phase::PLUS_ONE, vec![Z]));
        assert_eq!(conjugate("H", &[Z]).unwrap(), (Phase::PLUS_ONE, vec![X]));
        assert_eq!(conjugate("H", &[Y]).unwrap(), (Phase::MINUS_ONE, vec![Y]));
    }

    #[test]
    fn s_conjugates_x_to_y() {
        assert_eq!(conjugate("S", &[X]).unwrap(), (Phase::PLUS_ONE, vec![Y]));
        assert_eq!(conjugate("S", &[Y]).unwrap(), (Phase::MINUS_ONE, vec![X]));
        assert_eq!(conjugate("S", &[Z]).unwrap(), (Phase::PLUS_ONE, vec![Z]));
    }

    #[test]
    fn cx_conjugates_xi_to_xx() {
        assert_eq!(conjugate("CX", &[X, I]).unwrap(), (Phase::PLUS_ONE, vec![X, X]));
        assert_eq!(conjugate("CX", &[I, X]).unwrap(), (Phase::PLUS_ONE, vec![I, X]));
        assert_eq!(conjugate("CX", &[Z, I]).unwrap(), (Phase::PLUS_ONE, vec![Z, I]));
        assert_eq!(conjugate("CX", &[I, Z]).unwrap(), (Phase::PLUS_ONE, vec![Z, Z]));
    }

    #[test]
    fn unknown_gate_errors() {
        assert!(conjugate("T", &[X]).is_err());
    }
}
