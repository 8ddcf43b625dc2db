use crate::table::GateName;
use crate::types::{Pauli, Phase};
use std::fmt;

/// One step of a circuit: either a gate application or a Pauli-basis measurement.
///
/// A tagged variant replaces the two-case class hierarchy of older Clifford-circuit prototypes;
/// the driver dispatches on this tag instead of over dynamic dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    Gate { name: GateName, qubits: Vec<usize> },
    Measurement { qubits: Vec<usize>, operator: Vec<Pauli>, phase: Phase },
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Gate { name, qubits } => {
                let args: Vec<String> = qubits.iter().map(|q| q.to_string()).collect();
                write!(f, "{}({})", name, args.join(", "))
            }
            Instruction::Measurement { qubits, operator, phase } => {
                let letters: String = operator.iter().map(|p| p.to_char()).collect();
                let args: Vec<String> = qubits.iter().map(|q| q.to_string()).collect();
                write!(f, "measure({}, {}{})", args.join(", "), phase.as_prefix(), letters)
            }
        }
    }
}
