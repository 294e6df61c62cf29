//! Shared types for the seating engine
//!
//! Common types used across crates: the table/group/booking model,
//! seating events and the unified error-code system.

pub mod error;
pub mod event;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use event::{SeatingEvent, SeatingEventKind};
pub use models::{Booking, Group, GroupId, GroupStatus, MAX_SEATS, Seats, Table, TableId};
