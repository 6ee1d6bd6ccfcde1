//! The immutable duty partition of a timeline.

use crate::error::DutyError;
use crate::mode::DutyMode;
use crate::sequence::DutySequence;

/// Sorted partition of the positions `[0, N)` into on-duty and off-duty.
///
/// Built once when a schedule is constructed and read-only afterwards, so
/// it may be shared freely across navigation calls. Both sides are strictly
/// increasing, disjoint, and together cover the full range exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DutyIndex {
    on_duty: Vec<usize>,
    off_duty: Vec<usize>,
    len: usize,
}

/// Checks that a partition side is strictly increasing.
fn check_sorted(seq: &[usize], side: &'static str) -> Result<(), DutyError> {
    for (rank, pair) in seq.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(DutyError::UnsortedIndex {
                side,
                rank: rank + 1,
            });
        }
    }
    Ok(())
}

impl DutyIndex {
    /// Builds a duty index from one duty flag per position.
    ///
    /// Position `p` is on-duty iff `flags[p]` is `true`. The partition
    /// invariant holds by construction, so this cannot fail.
    pub fn from_flags(flags: &[bool]) -> Self {
        let mut on_duty = Vec::new();
        let mut off_duty = Vec::new();
        for (position, &on) in flags.iter().enumerate() {
            if on {
                on_duty.push(position);
            } else {
                off_duty.push(position);
            }
        }
        Self {
            on_duty,
            off_duty,
            len: flags.len(),
        }
    }

    /// Builds a duty index from precomputed on-duty and off-duty sequences.
    ///
    /// The sequences must be strictly increasing, disjoint, and together
    /// cover `[0, N)` exactly, where `N` is their combined length.
    ///
    /// # Errors
    ///
    /// Returns [`DutyError::UnsortedIndex`] if either side is out of order,
    /// [`DutyError::DuplicatePosition`] if a position appears on both
    /// sides, or [`DutyError::MissingPosition`] if the union leaves a gap
    /// in the range.
    pub fn from_parts(on_duty: Vec<usize>, off_duty: Vec<usize>) -> Result<Self, DutyError> {
        let len = on_duty.len() + off_duty.len();
        check_sorted(&on_duty, "on-duty")?;
        check_sorted(&off_duty, "off-duty")?;

        // Merge both sides and require the union to be exactly 0..len.
        let (mut i, mut j) = (0, 0);
        for expected in 0..len {
            let next = match (on_duty.get(i), off_duty.get(j)) {
                (Some(&a), Some(&b)) if a == b => {
                    return Err(DutyError::DuplicatePosition { position: a });
                }
                (Some(&a), Some(&b)) => {
                    if a < b {
                        i += 1;
                        a
                    } else {
                        j += 1;
                        b
                    }
                }
                (Some(&a), None) => {
                    i += 1;
                    a
                }
                (None, Some(&b)) => {
                    j += 1;
                    b
                }
                // i + j == expected < len, so one side always has entries left.
                (None, None) => unreachable!("merge consumes exactly len entries"),
            };
            if next != expected {
                return Err(DutyError::MissingPosition {
                    position: expected,
                    len,
                });
            }
        }

        Ok(Self {
            on_duty,
            off_duty,
            len,
        })
    }

    /// Returns the length of the partitioned range.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the partitioned range is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the sorted on-duty positions.
    pub fn on_duty(&self) -> &[usize] {
        &self.on_duty
    }

    /// Returns the sorted off-duty positions.
    pub fn off_duty(&self) -> &[usize] {
        &self.off_duty
    }

    /// Returns `true` if `position` is classified on-duty.
    ///
    /// Positions outside `[0, N)` are neither on- nor off-duty.
    pub fn is_on_duty(&self, position: usize) -> bool {
        self.on_duty.binary_search(&position).is_ok()
    }

    /// Returns `true` if `position` is classified off-duty.
    ///
    /// Positions outside `[0, N)` are neither on- nor off-duty.
    pub fn is_off_duty(&self, position: usize) -> bool {
        self.off_duty.binary_search(&position).is_ok()
    }

    /// Resolves the sequence a navigation call walks.
    ///
    /// `Same` and `Alt` are resolved against `start_on_duty`, the duty of
    /// the starting position. `Any` yields the identity view over the full
    /// range.
    pub fn sequence(&self, mode: DutyMode, start_on_duty: bool) -> DutySequence<'_> {
        match mode {
            DutyMode::On => DutySequence::Partition(&self.on_duty),
            DutyMode::Off => DutySequence::Partition(&self.off_duty),
            DutyMode::Same => {
                if start_on_duty {
                    DutySequence::Partition(&self.on_duty)
                } else {
                    DutySequence::Partition(&self.off_duty)
                }
            }
            DutyMode::Alt => {
                if start_on_duty {
                    DutySequence::Partition(&self.off_duty)
                } else {
                    DutySequence::Partition(&self.on_duty)
                }
            }
            DutyMode::Any => DutySequence::Full(self.len),
        }
    }
}
