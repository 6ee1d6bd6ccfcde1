//! Error types for the rota-duty crate.

/// Error type for all fallible operations in the rota-duty crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DutyError {
    /// Returned when a duty mode tag is not one of the recognized values.
    #[error("unknown duty mode: `{value}` (expected on, off, same, alt, or any)")]
    UnknownMode {
        /// The unrecognized tag that was provided.
        value: String,
    },

    /// Returned when a duty index sequence is not strictly increasing.
    #[error("{side} index is not strictly increasing at rank {rank}")]
    UnsortedIndex {
        /// Which side of the partition is out of order.
        side: &'static str,
        /// Rank of the first entry that breaks the ordering.
        rank: usize,
    },

    /// Returned when a position appears in both sides of the partition.
    #[error("position {position} is claimed by both duty indexes")]
    DuplicatePosition {
        /// The doubly-claimed position.
        position: usize,
    },

    /// Returned when the partition does not cover a position of the range.
    #[error("position {position} is missing from the duty partition of length {len}")]
    MissingPosition {
        /// The first uncovered position.
        position: usize,
        /// Total length of the partitioned range.
        len: usize,
    },
}
