//! Error types for the rota-shift crate.

use rota_duty::DutyMode;

use crate::navigate::Direction;

/// Diagnostic context of a navigation that ran off the timeline.
///
/// Carries everything the owning container needs to decide recovery: the
/// starting position, the requested steps, the duty mode, the direction,
/// and the schedule's activity descriptor. Covers both boundary cases the
/// same way: no zero-step anchor, and stepping past either end of the
/// qualifying sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot roll {direction} from position {start} with steps={steps}, duty={mode}, schedule={activity}")]
pub struct OutOfBounds {
    /// The starting position of the navigation.
    pub start: usize,
    /// The requested step count.
    pub steps: i64,
    /// The duty mode being walked.
    pub mode: DutyMode,
    /// The navigation direction.
    pub direction: Direction,
    /// Activity descriptor of the schedule, for diagnostics only.
    pub activity: String,
}

/// Error type for all fallible operations in the rota-shift crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShiftError {
    /// Returned when a position cannot be resolved against a schedule or
    /// timeline.
    #[error("position {position} is outside the timeline of length {len}")]
    OutOfRange {
        /// The unresolvable position.
        position: usize,
        /// Length of the timeline it was resolved against.
        len: usize,
    },

    /// Returned when a timeline is configured with an empty workshift span.
    #[error("workshift span must cover at least one base unit, got {units}")]
    InvalidSpan {
        /// The invalid number of base units per workshift.
        units: u32,
    },

    /// Returned when a timeline is configured with a non-positive base unit.
    #[error("base unit must be a positive duration")]
    InvalidBaseUnit,

    /// A navigation ran off the timeline.
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBounds),
}
