use super::basis_images::basis_image;
use super::build::build_table;
use super::gate_name::GateName;
use crate::error::{Error, Result};
use crate::types::{Pauli, Phase};
use std::collections::HashMap;

/// A precomputed lookup table mapping `(gate, signed Pauli string) -> (phase, Pauli string)` for
/// every gate in a fixed gate set, built once at construction and immutable thereafter.
pub struct ConjugationTable {
    tables: HashMap<GateName, HashMap<Vec<Pauli>, (Phase, Vec<Pauli>)>>,
}

impl ConjugationTable {
    /// Builds the table for exactly the gates in `gates`.
    pub fn new(gates: &[GateName]) -> Self {
        let tables = gates
            .iter()
            .map(|&gate| (gate, build_table(gate.arity(), basis_image(gate))))
            .collect();
        Self { tables }
    }

    /// Builds the table for all gates the distilled gate set recognizes.
    pub fn full() -> Self {
        Self::new(&GateName::ALL)
    }

    /// Looks up the conjugated image of `pauli` under `gate`, ignoring any sign `pauli` itself
    /// carries (the caller folds that sign back in separately).
    ///
    /// # Errors
    /// Returns [`Error::UnknownGate`] if `gate` wasn't included at construction, and
    /// [`Error::ArityMismatch`] if `pauli`'s length disagrees with the gate's arity.
    pub fn lookup(&self, gate: GateName, pauli: &[Pauli]) -> Result<(Phase, Vec<Pauli>)> {
        if pauli.len() != gate.arity() {
            return Err(Error::ArityMismatch {
                expected: gate.arity(),
                found: pauli.len(),
            });
        }
        let table = self
            .tables
            .get(&gate)
            .ok_or_else(|| Error::UnknownGate(gate.as_str().to_string()))?;
        Ok(table
            .get(pauli)
            .cloned()
            .expect("build_table enumerates every Pauli string of the gate's arity"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Pauli::*;

    #[test]
    fn h_lookup_matches_known_relations() {
        let table = ConjugationTable::new(&[GateName::H]);
        assert_eq!(table.lookup(GateName::H, &[X]).unwrap(), (Phase::PLUS_ONE, vec![Z]));
        assert_eq!(table.lookup(GateName::H, &[Y]).unwrap(), (Phase::MINUS_ONE, vec![Y]));
    }

    #[test]
    fn lookup_rejects_unknown_gate() {
        let table = ConjugationTable::new(&[GateName::H]);
        assert!(matches!(table.lookup(GateName::S, &[X]), Err(Error::UnknownGate(_))));
    }

    #[test]
    fn lookup_rejects_arity_mismatch() {
        let table = ConjugationTable::new(&[GateName::CX]);
        assert!(matches!(
            table.lookup(GateName::CX, &[X]),
            Err(Error::ArityMismatch { expected: 2, found: 1 })
        ));
    }
}
