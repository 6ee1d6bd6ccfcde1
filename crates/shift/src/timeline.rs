//! Time geometry of a workshift timeline.

use chrono::{Duration, NaiveDateTime};

use crate::error::ShiftError;

/// Timestamp type used across the timeline interface.
///
/// Naive on purpose: timezone handling belongs to the calendar layer that
/// builds timelines, not to navigation.
pub type Timestamp = NaiveDateTime;

/// Which end of a workshift provides its reference timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WorkshiftRef {
    /// Represent a workshift by its start time.
    #[default]
    Start,
    /// Represent a workshift by its end time.
    End,
}

/// Read-only time geometry consumed by workshift values.
///
/// Maps a position to when its workshift starts and ends, how many base
/// units it spans, and the characteristic timestamp that represents it.
pub trait Timeline {
    /// Returns the number of workshifts on the timeline.
    fn len(&self) -> usize;

    /// Returns `true` if the timeline has no workshifts.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// When the workshift at `position` begins.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::OutOfRange`] if `position` is not on the
    /// timeline.
    fn start_time(&self, position: usize) -> Result<Timestamp, ShiftError>;

    /// When the workshift at `position` ends.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::OutOfRange`] if `position` is not on the
    /// timeline.
    fn end_time(&self, position: usize) -> Result<Timestamp, ShiftError>;

    /// Number of base units the workshift at `position` spans (always
    /// positive).
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::OutOfRange`] if `position` is not on the
    /// timeline.
    fn duration(&self, position: usize) -> Result<u32, ShiftError>;

    /// The characteristic timestamp representing the workshift at
    /// `position`.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::OutOfRange`] if `position` is not on the
    /// timeline.
    fn ref_time(&self, position: usize) -> Result<Timestamp, ShiftError>;
}

/// A timeline of equal-span workshifts laid out from an epoch.
///
/// Every workshift covers the same number of base units; workshift `p`
/// starts at `epoch + p * span` and ends where workshift `p + 1` starts.
///
/// # Example
///
/// ```
/// use chrono::{Duration, NaiveDate};
/// use rota_shift::{Timeline, UniformTimeline, WorkshiftRef};
///
/// let epoch = NaiveDate::from_ymd_opt(2024, 1, 1)
///     .unwrap()
///     .and_hms_opt(0, 0, 0)
///     .unwrap();
/// let timeline = UniformTimeline::new(epoch, Duration::hours(8), 3, 10)
///     .unwrap()
///     .with_ref(WorkshiftRef::End);
///
/// // Each workshift spans one full day (3 eight-hour units).
/// assert_eq!(timeline.duration(0).unwrap(), 3);
/// assert_eq!(timeline.ref_time(0).unwrap(), timeline.end_time(0).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct UniformTimeline {
    epoch: Timestamp,
    base_unit: Duration,
    units_per_shift: u32,
    len: usize,
    workshift_ref: WorkshiftRef,
}

impl UniformTimeline {
    /// Creates a timeline of `len` workshifts starting at `epoch`, each
    /// spanning `units_per_shift` base units of length `base_unit`.
    ///
    /// The reference timestamp defaults to the start of each workshift;
    /// use [`with_ref`](Self::with_ref) to change it.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::InvalidSpan`] if `units_per_shift` is zero
    /// and [`ShiftError::InvalidBaseUnit`] if `base_unit` is not a
    /// positive duration.
    pub fn new(
        epoch: Timestamp,
        base_unit: Duration,
        units_per_shift: u32,
        len: usize,
    ) -> Result<Self, ShiftError> {
        if units_per_shift == 0 {
            return Err(ShiftError::InvalidSpan {
                units: units_per_shift,
            });
        }
        if base_unit <= Duration::zero() {
            return Err(ShiftError::InvalidBaseUnit);
        }
        Ok(Self {
            epoch,
            base_unit,
            units_per_shift,
            len,
            workshift_ref: WorkshiftRef::Start,
        })
    }

    /// Sets which end of a workshift provides its reference timestamp.
    pub fn with_ref(mut self, workshift_ref: WorkshiftRef) -> Self {
        self.workshift_ref = workshift_ref;
        self
    }

    /// Returns the span of one workshift.
    fn shift_span(&self) -> Duration {
        self.base_unit * self.units_per_shift as i32
    }

    fn check(&self, position: usize) -> Result<(), ShiftError> {
        if position < self.len {
            Ok(())
        } else {
            Err(ShiftError::OutOfRange {
                position,
                len: self.len,
            })
        }
    }
}

impl Timeline for UniformTimeline {
    fn len(&self) -> usize {
        self.len
    }

    fn start_time(&self, position: usize) -> Result<Timestamp, ShiftError> {
        self.check(position)?;
        Ok(self.epoch + self.shift_span() * position as i32)
    }

    fn end_time(&self, position: usize) -> Result<Timestamp, ShiftError> {
        self.check(position)?;
        Ok(self.epoch + self.shift_span() * (position as i32 + 1))
    }

    fn duration(&self, position: usize) -> Result<u32, ShiftError> {
        self.check(position)?;
        Ok(self.units_per_shift)
    }

    fn ref_time(&self, position: usize) -> Result<Timestamp, ShiftError> {
        match self.workshift_ref {
            WorkshiftRef::Start => self.start_time(position),
            WorkshiftRef::End => self.end_time(position),
        }
    }
}
