//! Data models
//!
//! Tables, groups and bookings handled by the seating engine.
//! All IDs are random v4 UUIDs wrapped in typed newtypes.

pub mod booking;
pub mod dining_table;
pub mod group;
pub mod ids;
pub mod seats;

// Re-exports
pub use booking::*;
pub use dining_table::*;
pub use group::*;
pub use ids::*;
pub use seats::*;
