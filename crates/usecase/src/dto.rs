// crates/usecase/src/dto.rs
use multab_domain::{Table, ValidationError};

/// Result of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Rendered(Table),
    Failed(ValidationError),
}

impl Outcome {
    pub fn table(&self) -> Option<&Table> {
        match self {
            Self::Rendered(table) => Some(table),
            Self::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Rendered(_) => None,
            Self::Failed(err) => Some(err),
        }
    }
}
