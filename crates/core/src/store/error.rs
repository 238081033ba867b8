//! Snapshot construction errors.

use thiserror::Error;

/// Errors raised while assembling a [`Snapshot`](super::Snapshot).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// Two records of the same kind share an id.
    #[error("Duplicate {entity} id: {id}")]
    DuplicateId {
        /// Entity kind.
        entity: &'static str,
        /// Repeated id.
        id: i64,
    },

    /// A record points at an id that does not exist.
    #[error("{entity} {id} references missing {target} {target_id}")]
    DanglingReference {
        /// Entity kind holding the reference.
        entity: &'static str,
        /// Id of the referencing record.
        id: i64,
        /// Entity kind referenced.
        target: &'static str,
        /// Missing id.
        target_id: i64,
    },

    /// A travel request returns before it departs.
    #[error("Travel request {0} returns before it departs")]
    InvalidTravelDates(i64),

    /// A vacation ends before it starts.
    #[error("Vacation {0} ends before it starts")]
    InvalidVacationDates(i64),
}
