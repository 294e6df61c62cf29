//! Seating engine - best-fit table allocation with a FIFO waiting queue
//!
//! # Architecture
//!
//! ```text
//!                 SeatingManager (RwLock)
//!        ┌──────────────┬────────┴───────┬──────────────┐
//!  TableRegistry  AvailabilityIndex  WaitingQueue  BookingLedger
//!   (arena)        (seat buckets)     (FIFO)        (active bookings)
//! ```
//!
//! # Module layout
//!
//! ```text
//! seating/src/
//! ├── core/          # configuration
//! ├── utils/         # logging setup
//! ├── manager/       # SeatingManager, errors, tests
//! ├── availability.rs
//! ├── ledger.rs
//! ├── registry.rs
//! ├── traits.rs
//! └── waiting.rs
//! ```

pub mod availability;
pub mod core;
pub mod ledger;
pub mod manager;
pub mod registry;
pub mod traits;
pub mod utils;
pub mod waiting;

// Re-export public types
pub use crate::core::{DepartedPolicy, DrainPolicy, SeatingConfig};
pub use manager::{SeatingError, SeatingManager, SeatingResult};
pub use traits::SeatingService;

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_from_config, init_logger_with_file};
