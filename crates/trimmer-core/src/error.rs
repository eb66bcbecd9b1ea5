use crate::visitor::NodeKind;
use thiserror::Error as ThisError;

///
/// TrimError
///
/// The only failure the trimmer reports: the value handed to it did not
/// resolve to a record. Fired at the entry point before anything is
/// mutated, or propagated unchanged from a nested record.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum TrimError {
    #[error("expected a mutable reference to a record, found {found}")]
    InvalidType { found: NodeKind },
}

impl TrimError {
    #[must_use]
    pub const fn invalid_type(found: NodeKind) -> Self {
        Self::InvalidType { found }
    }

    /// The node kind that failed entry validation.
    #[must_use]
    pub const fn found(&self) -> NodeKind {
        match self {
            Self::InvalidType { found } => *found,
        }
    }
}
