//! The two-phase stepping core.

use std::fmt;

use rota_duty::{DutyIndex, DutyMode};

use crate::bounds::{BoundsPolicy, Strict};
use crate::error::{OutOfBounds, ShiftError};

static STRICT: Strict = Strict;

/// Direction of a navigation call.
///
/// Forward and backward share one stepping routine; the direction only
/// decides the anchor search (ceiling vs floor) and the sign applied to
/// the step count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the future (`rollforward`).
    Forward,
    /// Toward the past (`rollback`).
    Backward,
}

impl Direction {
    /// Returns the lowercase name of the direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Walks the duty index `steps` qualifying workshifts away from `start`.
///
/// The walk runs in two phases. Phase 1 resolves the zero-step anchor:
/// the first position at or after `start` (forward) or at or before it
/// (backward) in the sequence selected by `mode`. A start that already
/// satisfies the mode is its own anchor. Phase 2 moves `steps` ranks from
/// the anchor — positive steps in the named direction, negative steps
/// against it — and returns the position at the resulting rank.
///
/// `start` is not range-checked here: positions are validated by the
/// schedule that resolves them, and a start past the end simply fails the
/// anchor search (forward) or anchors at the last qualifying position
/// (backward).
///
/// # Errors
///
/// Returns [`OutOfBounds`] when no anchor exists, or when stepping would
/// run off either end of the qualifying sequence. The result is never
/// clamped or wrapped.
#[tracing::instrument(skip(index))]
pub fn roll(
    index: &DutyIndex,
    activity: &str,
    start: usize,
    steps: i64,
    mode: DutyMode,
    direction: Direction,
) -> Result<usize, OutOfBounds> {
    let out_of_bounds = || OutOfBounds {
        start,
        steps,
        mode,
        direction,
        activity: activity.to_string(),
    };

    let seq = index.sequence(mode, index.is_on_duty(start));

    // Phase 1: the zero-step anchor.
    let anchor = match direction {
        Direction::Forward => seq.rank_at_or_after(start),
        Direction::Backward => seq.rank_at_or_before(start),
    };
    let Some(anchor) = anchor else {
        return Err(out_of_bounds());
    };

    // Phase 2: apply steps. Overflow counts as running off the end.
    let target = match direction {
        Direction::Forward => (anchor as i64).checked_add(steps),
        Direction::Backward => (anchor as i64).checked_sub(steps),
    };
    let Some(target) = target else {
        return Err(out_of_bounds());
    };
    if target < 0 || target as usize >= seq.len() {
        return Err(out_of_bounds());
    }

    Ok(seq
        .get(target as usize)
        .expect("target rank checked against the sequence length"))
}

/// Navigation over one duty index with an injected bounds policy.
///
/// The navigator holds no mutable state; it borrows the index, the
/// schedule's activity descriptor, and the policy that decides what a
/// boundary failure turns into. The default policy is [`Strict`].
///
/// # Example
///
/// ```
/// use rota_duty::{DutyIndex, DutyMode};
/// use rota_shift::Navigator;
///
/// let flags: Vec<bool> = (0..10).map(|p| p % 2 == 0).collect();
/// let index = DutyIndex::from_flags(&flags);
/// let nav = Navigator::new(&index, "alternating");
///
/// assert_eq!(nav.rollforward(3, 0, DutyMode::On).unwrap(), Some(4));
/// ```
#[derive(Clone, Copy)]
pub struct Navigator<'a> {
    index: &'a DutyIndex,
    activity: &'a str,
    policy: &'a dyn BoundsPolicy,
}

impl<'a> Navigator<'a> {
    /// Creates a navigator over `index` with the [`Strict`] policy.
    pub fn new(index: &'a DutyIndex, activity: &'a str) -> Self {
        Self {
            index,
            activity,
            policy: &STRICT,
        }
    }

    /// Replaces the bounds policy.
    pub fn with_policy(mut self, policy: &'a dyn BoundsPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Rolls toward the future; see [`roll`] for the step semantics.
    ///
    /// # Errors
    ///
    /// Whatever the bounds policy turns a boundary failure into.
    pub fn rollforward(
        &self,
        start: usize,
        steps: i64,
        mode: DutyMode,
    ) -> Result<Option<usize>, ShiftError> {
        self.apply(roll(
            self.index,
            self.activity,
            start,
            steps,
            mode,
            Direction::Forward,
        ))
    }

    /// Rolls toward the past; see [`roll`] for the step semantics.
    ///
    /// # Errors
    ///
    /// Whatever the bounds policy turns a boundary failure into.
    pub fn rollback(
        &self,
        start: usize,
        steps: i64,
        mode: DutyMode,
    ) -> Result<Option<usize>, ShiftError> {
        self.apply(roll(
            self.index,
            self.activity,
            start,
            steps,
            mode,
            Direction::Backward,
        ))
    }

    fn apply(&self, outcome: Result<usize, OutOfBounds>) -> Result<Option<usize>, ShiftError> {
        match outcome {
            Ok(position) => Ok(Some(position)),
            Err(oob) => self.policy.resolve(oob),
        }
    }
}
