//! A named duty schedule over a timeline.

use rota_duty::DutyIndex;

use crate::error::ShiftError;

/// One label per position plus the duty partition derived from them.
///
/// The duty index is built exactly once, here, by applying the caller's
/// selector to every label; how the selector judges a label is its own
/// business. The schedule is immutable afterwards and outlives every
/// navigation call made against it.
#[derive(Debug, Clone)]
pub struct Schedule<L> {
    activity: String,
    labels: Vec<L>,
    index: DutyIndex,
}

impl<L> Schedule<L> {
    /// Builds a schedule by classifying every label with `selector`.
    ///
    /// A position is on-duty iff `selector` returns `true` for its label.
    pub fn new<F>(activity: impl Into<String>, labels: Vec<L>, selector: F) -> Self
    where
        F: Fn(&L) -> bool,
    {
        let flags: Vec<bool> = labels.iter().map(|label| selector(label)).collect();
        Self {
            activity: activity.into(),
            labels,
            index: DutyIndex::from_flags(&flags),
        }
    }

    /// Returns the activity descriptor used in diagnostics.
    pub fn activity(&self) -> &str {
        &self.activity
    }

    /// Returns the number of positions on the timeline.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if the schedule covers no positions.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the duty partition owned by this schedule.
    pub fn index(&self) -> &DutyIndex {
        &self.index
    }

    /// Returns the label at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::OutOfRange`] if `position` is not on the
    /// timeline.
    pub fn label(&self, position: usize) -> Result<&L, ShiftError> {
        self.labels.get(position).ok_or(ShiftError::OutOfRange {
            position,
            len: self.labels.len(),
        })
    }

    /// Returns `true` if `position` is on-duty.
    ///
    /// Positions outside the timeline are neither on- nor off-duty.
    pub fn is_on_duty(&self, position: usize) -> bool {
        self.index.is_on_duty(position)
    }

    /// Returns `true` if `position` is off-duty.
    ///
    /// Positions outside the timeline are neither on- nor off-duty.
    pub fn is_off_duty(&self, position: usize) -> bool {
        self.index.is_off_duty(position)
    }
}
