use crate::types::Phase;

/// How a measurement outcome was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementKind {
    /// The measured operator was already a signed stabilizer generator; the outcome follows from
    /// a sign comparison and the state was left unmodified.
    Deterministic,
    /// The measured operator anticommuted with at least one generator; the outcome was chosen by
    /// a fair coin flip and the state was updated to reflect it.
    Random,
}

/// The result of a single [`crate::state::CheckMatrixState::apply_measurement`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasurementOutcome {
    /// The measured eigenvalue, always [`Phase::PLUS_ONE`] or [`Phase::MINUS_ONE`].
    pub value: Phase,
    pub kind: MeasurementKind,
}

impl MeasurementOutcome {
    pub fn is_plus_one(self) -> bool {
        self.value == Phase::PLUS_ONE
    }
}
