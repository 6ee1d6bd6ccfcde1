//! The workshift value: one position bound to its schedule.

use std::cmp::Ordering;
use std::fmt;

use rota_duty::DutyMode;

use crate::error::ShiftError;
use crate::navigate::{roll, Direction};
use crate::schedule::Schedule;
use crate::timeline::{Timeline, Timestamp};

/// One workshift on a timeline, bound to the schedule that classifies it.
///
/// A workshift is a thin `(schedule, position)` reference: duty queries
/// read the schedule, navigation delegates to the stepping core with this
/// position as the start, and time queries delegate to a timeline
/// collaborator. Equality and ordering are by position.
pub struct Workshift<'a, L> {
    schedule: &'a Schedule<L>,
    position: usize,
}

impl<'a, L> Workshift<'a, L> {
    /// Binds a workshift to `position` under `schedule`.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::OutOfRange`] if the schedule cannot resolve
    /// `position`.
    pub fn new(schedule: &'a Schedule<L>, position: usize) -> Result<Self, ShiftError> {
        schedule.label(position)?;
        Ok(Self { schedule, position })
    }

    /// Rebinds to a position produced by the stepping core, which only
    /// yields positions drawn from the schedule's own index.
    fn rebind(&self, position: usize) -> Self {
        Self {
            schedule: self.schedule,
            position,
        }
    }

    /// Returns this workshift's position on the timeline.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the schedule this workshift is bound to.
    pub fn schedule(&self) -> &'a Schedule<L> {
        self.schedule
    }

    /// Returns the schedule's label for this workshift.
    pub fn label(&self) -> &'a L {
        // The position was validated when the workshift was bound.
        self.schedule
            .label(self.position)
            .expect("bound workshift position resolves against its schedule")
    }

    /// Returns `true` if this workshift is on-duty under its schedule.
    pub fn is_on_duty(&self) -> bool {
        self.schedule.is_on_duty(self.position)
    }

    /// Returns `true` if this workshift is off-duty under its schedule.
    pub fn is_off_duty(&self) -> bool {
        self.schedule.is_off_duty(self.position)
    }

    /// Returns the workshift `steps` qualifying workshifts toward the
    /// future.
    ///
    /// With `steps = 0` this is the zero-step anchor: this workshift
    /// itself if it satisfies `mode`, else the first qualifying workshift
    /// after it. Negative `steps` move toward the past from the anchor.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::OutOfBounds`] if no anchor exists or the
    /// steps run off the timeline.
    pub fn rollforward(&self, steps: i64, mode: DutyMode) -> Result<Self, ShiftError> {
        let position = roll(
            self.schedule.index(),
            self.schedule.activity(),
            self.position,
            steps,
            mode,
            Direction::Forward,
        )?;
        Ok(self.rebind(position))
    }

    /// Returns the workshift `steps` qualifying workshifts toward the
    /// past.
    ///
    /// With `steps = 0` this is the zero-step anchor: this workshift
    /// itself if it satisfies `mode`, else the last qualifying workshift
    /// before it. Negative `steps` move toward the future from the anchor.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::OutOfBounds`] if no anchor exists or the
    /// steps run off the timeline.
    pub fn rollback(&self, steps: i64, mode: DutyMode) -> Result<Self, ShiftError> {
        let position = roll(
            self.schedule.index(),
            self.schedule.activity(),
            self.position,
            steps,
            mode,
            Direction::Backward,
        )?;
        Ok(self.rebind(position))
    }

    /// Advances `steps` on-duty workshifts toward the future.
    ///
    /// Shorthand for `rollforward(steps, DutyMode::On)`.
    ///
    /// # Errors
    ///
    /// Same as [`rollforward`](Self::rollforward).
    pub fn advance(&self, steps: i64) -> Result<Self, ShiftError> {
        self.rollforward(steps, DutyMode::On)
    }

    /// Retreats `steps` on-duty workshifts toward the past.
    ///
    /// Shorthand for `rollback(steps, DutyMode::On)`.
    ///
    /// # Errors
    ///
    /// Same as [`rollback`](Self::rollback).
    pub fn retreat(&self, steps: i64) -> Result<Self, ShiftError> {
        self.rollback(steps, DutyMode::On)
    }

    /// When this workshift begins, per `timeline`.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::OutOfRange`] if the timeline is shorter than
    /// the schedule.
    pub fn start_time<T: Timeline>(&self, timeline: &T) -> Result<Timestamp, ShiftError> {
        timeline.start_time(self.position)
    }

    /// When this workshift ends, per `timeline`.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::OutOfRange`] if the timeline is shorter than
    /// the schedule.
    pub fn end_time<T: Timeline>(&self, timeline: &T) -> Result<Timestamp, ShiftError> {
        timeline.end_time(self.position)
    }

    /// Number of base units this workshift spans, per `timeline`.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::OutOfRange`] if the timeline is shorter than
    /// the schedule.
    pub fn duration<T: Timeline>(&self, timeline: &T) -> Result<u32, ShiftError> {
        timeline.duration(self.position)
    }

    /// The characteristic timestamp representing this workshift, per
    /// `timeline`.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::OutOfRange`] if the timeline is shorter than
    /// the schedule.
    pub fn ref_time<T: Timeline>(&self, timeline: &T) -> Result<Timestamp, ShiftError> {
        timeline.ref_time(self.position)
    }
}

impl<L> Clone for Workshift<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for Workshift<'_, L> {}

impl<L> PartialEq for Workshift<'_, L> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<L> Eq for Workshift<'_, L> {}

impl<L> PartialOrd for Workshift<'_, L> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<L> Ord for Workshift<'_, L> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.position.cmp(&other.position)
    }
}

impl<L> fmt::Debug for Workshift<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workshift({}, schedule={})",
            self.position,
            self.schedule.activity()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Evens on duty, odds off duty, ten positions.
    fn alternating() -> Schedule<u8> {
        let labels: Vec<u8> = (0..10).collect();
        Schedule::new("alternating", labels, |&label| label % 2 == 0)
    }

    #[test]
    fn bind_valid_position() {
        let schedule = alternating();
        let ws = Workshift::new(&schedule, 3).unwrap();
        assert_eq!(ws.position(), 3);
        assert_eq!(ws.label(), &3);
        assert!(ws.is_off_duty());
        assert!(!ws.is_on_duty());
    }

    #[test]
    fn bind_out_of_range() {
        let schedule = alternating();
        let err = Workshift::new(&schedule, 10).unwrap_err();
        assert_eq!(
            err,
            ShiftError::OutOfRange {
                position: 10,
                len: 10,
            }
        );
    }

    #[test]
    fn rolling_returns_rebound_workshifts() {
        let schedule = alternating();
        let ws = Workshift::new(&schedule, 3).unwrap();
        assert_eq!(ws.rollforward(0, DutyMode::On).unwrap().position(), 4);
        assert_eq!(ws.rollback(0, DutyMode::On).unwrap().position(), 2);
        assert_eq!(ws.rollforward(1, DutyMode::Alt).unwrap().position(), 6);
    }

    #[test]
    fn advance_and_retreat_walk_on_duty() {
        let schedule = alternating();
        let ws = Workshift::new(&schedule, 4).unwrap();
        assert_eq!(ws.advance(2).unwrap().position(), 8);
        assert_eq!(ws.retreat(2).unwrap().position(), 0);
        // Zero steps from an on-duty shift is the shift itself.
        assert_eq!(ws.advance(0).unwrap(), ws);
    }

    #[test]
    fn rolling_off_the_end_fails() {
        let schedule = alternating();
        let ws = Workshift::new(&schedule, 0).unwrap();
        let err = ws.advance(10).unwrap_err();
        assert!(matches!(err, ShiftError::OutOfBounds(_)));
    }

    #[test]
    fn ordering_is_by_position() {
        let schedule = alternating();
        let early = Workshift::new(&schedule, 2).unwrap();
        let late = Workshift::new(&schedule, 7).unwrap();
        assert!(early < late);
        assert_eq!(early, Workshift::new(&schedule, 2).unwrap());
    }

    #[test]
    fn copy_semantics() {
        let schedule = alternating();
        let ws = Workshift::new(&schedule, 1).unwrap();
        let copy = ws;
        assert_eq!(ws, copy);
    }

    #[test]
    fn debug_format() {
        let schedule = alternating();
        let ws = Workshift::new(&schedule, 5).unwrap();
        assert_eq!(format!("{ws:?}"), "Workshift(5, schedule=alternating)");
    }
}
