use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Invalid search kind: {0}")]
    InvalidKind(String),

    #[error("state, commission, and value are required (missing {0})")]
    MissingField(&'static str),

    #[error("Unknown state: {0}")]
    UnknownState(String),

    #[error("Unknown commission for state {state_id}: {name}")]
    UnknownCommission { state_id: String, name: String },

    #[error("Commission {commission_id} references unknown state {state_id}")]
    DanglingCommission {
        commission_id: String,
        state_id: String,
    },
}

impl LookupError {
    /// Reference lookups that found nothing, as opposed to malformed input.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LookupError::UnknownState(_) | LookupError::UnknownCommission { .. }
        )
    }
}
