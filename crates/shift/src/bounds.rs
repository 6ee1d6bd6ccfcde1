//! Pluggable handling of out-of-bounds navigation.

use tracing::debug;

use crate::error::{OutOfBounds, ShiftError};

/// Decides the outcome of a navigation call that ran off the timeline.
///
/// The navigator never picks a recovery on its own: it hands the full
/// diagnostic context to the policy injected by the owning container.
/// Implementations may surface the failure, substitute a position (for
/// example, clamp to the nearest qualifying edge), or suppress it.
pub trait BoundsPolicy {
    /// Resolves an out-of-bounds navigation.
    ///
    /// Returning `Ok(Some(position))` substitutes a position,
    /// `Ok(None)` suppresses the navigation, and `Err` surfaces a
    /// failure to the caller.
    fn resolve(&self, oob: OutOfBounds) -> Result<Option<usize>, ShiftError>;
}

/// Surfaces every boundary violation as an error.
///
/// This is the default policy: a silently substituted position looks
/// valid downstream and corrupts duty arithmetic built on top of it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Strict;

impl BoundsPolicy for Strict {
    fn resolve(&self, oob: OutOfBounds) -> Result<Option<usize>, ShiftError> {
        Err(oob.into())
    }
}

/// Logs the boundary violation and yields no position.
#[derive(Debug, Clone, Copy, Default)]
pub struct Permissive;

impl BoundsPolicy for Permissive {
    fn resolve(&self, oob: OutOfBounds) -> Result<Option<usize>, ShiftError> {
        debug!(%oob, "navigation ran out of bounds");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigate::Direction;
    use rota_duty::DutyMode;

    fn sample_oob() -> OutOfBounds {
        OutOfBounds {
            start: 5,
            steps: 3,
            mode: DutyMode::Off,
            direction: Direction::Backward,
            activity: "night".to_string(),
        }
    }

    #[test]
    fn strict_surfaces_the_context() {
        let err = Strict.resolve(sample_oob()).unwrap_err();
        match err {
            ShiftError::OutOfBounds(oob) => assert_eq!(oob, sample_oob()),
            other => panic!("expected OutOfBounds, got {other:?}"),
        }
    }

    #[test]
    fn permissive_yields_none() {
        assert_eq!(Permissive.resolve(sample_oob()).unwrap(), None);
    }

    #[test]
    fn policies_are_object_safe() {
        let strict = Strict;
        let permissive = Permissive;
        let policies: [&dyn BoundsPolicy; 2] = [&strict, &permissive];
        assert!(policies[0].resolve(sample_oob()).is_err());
        assert!(policies[1].resolve(sample_oob()).is_ok());
    }
}
