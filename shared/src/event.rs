//! Seating events - facts published after each state change

use crate::models::{GroupId, Seats, TableId};
use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Seating event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingEvent {
    /// Manager-wide sequence number, strictly increasing in lock order
    pub sequence: u64,
    /// Server timestamp (Unix milliseconds)
    pub timestamp: Timestamp,
    /// Group the event is about
    pub group_id: GroupId,
    #[serde(flatten)]
    pub kind: SeatingEventKind,
}

/// What happened to the group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatingEventKind {
    /// Group took seats at a table
    Seated { table_id: TableId, seats: Seats },
    /// No table fitted; group appended to the waiting queue at `position` (0-based)
    Queued { seats: Seats, position: usize },
    /// Group left and its seats were returned
    Released { table_id: TableId, seats: Seats },
    /// Waiting group removed from the queue without being seated
    Withdrawn,
}

impl SeatingEvent {
    pub fn table_id(&self) -> Option<TableId> {
        match self.kind {
            SeatingEventKind::Seated { table_id, .. }
            | SeatingEventKind::Released { table_id, .. } => Some(table_id),
            _ => None,
        }
    }
}
