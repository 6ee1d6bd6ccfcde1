//! Ordered sequence views walked by the navigator.

/// A read-only view over the ordered positions satisfying a duty selection.
///
/// The `Any` selection covers the whole range `[0, len)`; it is represented
/// as the identity sequence rather than materialized, so every lookup stays
/// O(1) without allocating.
#[derive(Debug, Clone, Copy)]
pub enum DutySequence<'a> {
    /// Positions drawn from one side of the duty partition, sorted ascending.
    Partition(&'a [usize]),
    /// The identity view over the full range `[0, len)`.
    Full(usize),
}

impl DutySequence<'_> {
    /// Returns the number of positions in the view.
    pub fn len(&self) -> usize {
        match self {
            DutySequence::Partition(seq) => seq.len(),
            DutySequence::Full(len) => *len,
        }
    }

    /// Returns `true` if the view contains no positions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the position at `rank`, or `None` if `rank` is out of range.
    pub fn get(&self, rank: usize) -> Option<usize> {
        match self {
            DutySequence::Partition(seq) => seq.get(rank).copied(),
            DutySequence::Full(len) => (rank < *len).then_some(rank),
        }
    }

    /// Returns the smallest rank whose position is `>= position`.
    ///
    /// This is the ceiling search resolving the zero-step anchor for
    /// forward navigation. Returns `None` when every position in the view
    /// lies before `position`.
    pub fn rank_at_or_after(&self, position: usize) -> Option<usize> {
        match self {
            DutySequence::Partition(seq) => {
                let rank = seq.partition_point(|&p| p < position);
                (rank < seq.len()).then_some(rank)
            }
            DutySequence::Full(len) => (position < *len).then_some(position),
        }
    }

    /// Returns the largest rank whose position is `<= position`.
    ///
    /// This is the floor search resolving the zero-step anchor for backward
    /// navigation. Returns `None` when every position in the view lies
    /// after `position`.
    pub fn rank_at_or_before(&self, position: usize) -> Option<usize> {
        match self {
            DutySequence::Partition(seq) => {
                let rank = seq.partition_point(|&p| p <= position);
                rank.checked_sub(1)
            }
            DutySequence::Full(len) => {
                if *len == 0 {
                    None
                } else {
                    Some(position.min(*len - 1))
                }
            }
        }
    }
}
