//! Booking Model

use super::{GroupId, Seats, TableId};
use crate::types::Timestamp;
use crate::util::now_millis;
use serde::{Deserialize, Serialize};

/// An active assignment of one group to one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub group_id: GroupId,
    pub table_id: TableId,
    /// Seats held at the table
    pub seats: Seats,
    pub seated_at: Timestamp,
}

impl Booking {
    /// Booking stamped with the current time
    pub fn new(group_id: GroupId, table_id: TableId, seats: Seats) -> Self {
        Self {
            group_id,
            table_id,
            seats,
            seated_at: now_millis(),
        }
    }
}
