//! An ordered list of gate and measurement instructions plus a qubit count -- the external
//! collaborator the simulator driver consumes. Builder methods validate qubit indices and operator
//! arity at push time so the driver can assume every instruction it sees is well-formed.

mod instruction;

pub use instruction::Instruction;

use crate::error::{Error, Result};
use crate::table::GateName;
use crate::types::{Pauli, Phase};
use std::fmt;

#[derive(Debug, Clone)]
pub struct Circuit {
    n_qubits: usize,
    instructions: Vec<Instruction>,
}

impl Circuit {
    pub fn new(n_qubits: usize) -> Self {
        Self {
            n_qubits,
            instructions: Vec::new(),
        }
    }

    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    fn validate_qubits(&self, qubits: &[usize]) -> Result<()> {
        for &q in qubits {
            if q >= self.n_qubits {
                return Err(Error::QubitOutOfRange {
                    qubit: q,
                    n_qubits: self.n_qubits,
                });
            }
        }
        Ok(())
    }

    fn push_gate(&mut self, name: GateName, qubits: Vec<usize>) -> Result<()> {
        if qubits.len() != name.arity() {
            return Err(Error::ArityMismatch {
                expected: name.arity(),
                found: qubits.len(),
            });
        }
        self.validate_qubits(&qubits)?;
        self.instructions.push(Instruction::Gate { name, qubits });
        Ok(())
    }

    pub fn h(&mut self, qubit: usize) -> Result<()> {
        self.push_gate(GateName::H, vec![qubit])
    }

    pub fn s(&mut self, qubit: usize) -> Result<()> {
        self.push_gate(GateName::S, vec![qubit])
    }

    pub fn x(&mut self, qubit: usize) -> Result<()> {
        self.push_gate(GateName::X, vec![qubit])
    }

    pub fn y(&mut self, qubit: usize) -> Result<()> {
        self.push_gate(GateName::Y, vec![qubit])
    }

    pub fn z(&mut self, qubit: usize) -> Result<()> {
        self.push_gate(GateName::Z, vec![qubit])
    }

    pub fn cx(&mut self, control: usize, target: usize) -> Result<()> {
        self.push_gate(GateName::CX, vec![control, target])
    }

    /// Measures `operator` (non-identity letters only) on `qubits`, with sign `phase`.
    pub fn measure(&mut self, qubits: Vec<usize>, operator: Vec<Pauli>, phase: Phase) -> Result<()> {
        if operator.len() != qubits.len() {
            return Err(Error::ArityMismatch {
                expected: qubits.len(),
                found: operator.len(),
            });
        }
        self.validate_qubits(&qubits)?;
        self.instructions.push(Instruction::Measurement { qubits, operator, phase });
        Ok(())
    }

    /// Measures every qubit individually in the `Z` basis with phase `+1`.
    pub fn measure_all(&mut self) -> Result<()> {
        for q in 0..self.n_qubits {
            self.measure(vec![q], vec![Pauli::Z], Phase::PLUS_ONE)?;
        }
        Ok(())
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Circuit({} qubits)", self.n_qubits)?;
        for instruction in &self.instructions {
            writeln!(f, "  {instruction}")?;
        }
        Ok(())
    }
}
