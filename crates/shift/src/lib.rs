//! # rota-shift
//!
//! Duty-indexed navigation over workshift timelines.
//!
//! A timeline is a sequence of workshifts, each classified on- or off-duty
//! by a schedule. This crate walks that classification: starting from any
//! position it finds the Nth on-duty, off-duty, same-duty, opposite-duty,
//! or unconditional workshift toward the future or the past, with strict
//! boundary checking. Out-of-bounds handling is delegated to the owning
//! container through a pluggable policy.
//!
//! # Quick start
//!
//! ```
//! use rota_duty::DutyMode;
//! use rota_shift::{Schedule, Workshift};
//!
//! // A week of shifts: weekdays on duty, the weekend off.
//! let labels = vec!['M', 'T', 'W', 'T', 'F', 's', 's'];
//! let schedule = Schedule::new("workweek", labels, |l| l.is_uppercase());
//!
//! let saturday = Workshift::new(&schedule, 5).unwrap();
//! // The next on-duty shift after Saturday is the following Monday —
//! // which does not exist on this one-week timeline.
//! assert!(saturday.rollforward(0, DutyMode::On).is_err());
//! // The previous on-duty shift is Friday.
//! assert_eq!(saturday.rollback(0, DutyMode::On).unwrap().position(), 4);
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `navigate` | Two-phase stepping core and the policy-driven navigator |
//! | `bounds` | Out-of-bounds delegation hook and stock policies |
//! | `schedule` | Labels plus the duty partition they induce |
//! | `timeline` | Time geometry trait and the uniform implementation |
//! | `workshift` | The thin workshift value |
//! | `error` | Error types |

pub mod bounds;
pub mod error;
pub mod navigate;
pub mod schedule;
pub mod timeline;
pub mod workshift;

pub use bounds::{BoundsPolicy, Permissive, Strict};
pub use error::{OutOfBounds, ShiftError};
pub use navigate::{roll, Direction, Navigator};
pub use schedule::Schedule;
pub use timeline::{Timeline, Timestamp, UniformTimeline, WorkshiftRef};
pub use workshift::Workshift;
