//! # rota-duty
//!
//! Sorted duty partition index for workshift timelines.
//!
//! A timeline of `N` workshifts is partitioned into on-duty and off-duty
//! positions by an external schedule. This crate owns that partition as an
//! immutable pair of strictly increasing position sequences and answers the
//! ordered-rank queries the navigator needs: membership, ceiling and floor
//! searches, and the mode table that decides which sequence a navigation
//! call walks.
//!
//! # Quick start
//!
//! ```
//! use rota_duty::{DutyIndex, DutyMode};
//!
//! // Evens on duty, odds off duty.
//! let flags: Vec<bool> = (0..10).map(|p| p % 2 == 0).collect();
//! let index = DutyIndex::from_flags(&flags);
//!
//! assert!(index.is_on_duty(4));
//! let seq = index.sequence(DutyMode::On, index.is_on_duty(3));
//! assert_eq!(seq.rank_at_or_after(3), Some(2)); // first on-duty shift at or after 3 is 4
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `mode` | Duty selection modes (`on`/`off`/`same`/`alt`/`any`) |
//! | `index` | The immutable duty partition |
//! | `sequence` | Ordered views and rank searches |
//! | `error` | Error types |

pub mod error;
pub mod index;
pub mod mode;
pub mod sequence;

pub use error::DutyError;
pub use index::DutyIndex;
pub use mode::DutyMode;
pub use sequence::DutySequence;
