//! Duty selection modes for navigation.

use std::fmt;
use std::str::FromStr;

use crate::error::DutyError;

/// Selects which workshifts count as steps during navigation.
///
/// `Same` and `Alt` are resolved against the duty of the *starting*
/// position, so the sequence they walk is only known once navigation
/// begins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DutyMode {
    /// Step on on-duty workshifts only.
    #[default]
    On,
    /// Step on off-duty workshifts only.
    Off,
    /// Step on workshifts with the same duty as the starting position.
    Same,
    /// Step on workshifts with the opposite duty of the starting position.
    Alt,
    /// Step on every workshift regardless of duty.
    Any,
}

impl DutyMode {
    /// Returns the canonical tag for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            DutyMode::On => "on",
            DutyMode::Off => "off",
            DutyMode::Same => "same",
            DutyMode::Alt => "alt",
            DutyMode::Any => "any",
        }
    }
}

impl fmt::Display for DutyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DutyMode {
    type Err = DutyError;

    /// Parses a duty mode tag.
    ///
    /// Only the five canonical tags are accepted. Anything else is an
    /// error, never a fallback to a default mode.
    ///
    /// # Errors
    ///
    /// Returns [`DutyError::UnknownMode`] for an unrecognized tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(DutyMode::On),
            "off" => Ok(DutyMode::Off),
            "same" => Ok(DutyMode::Same),
            "alt" => Ok(DutyMode::Alt),
            "any" => Ok(DutyMode::Any),
            _ => Err(DutyError::UnknownMode {
                value: s.to_string(),
            }),
        }
    }
}
