//! Guest Group Model

use super::{GroupId, Seats, TableId};
use crate::error::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};

/// A party of guests asking to be seated together (客人组)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    id: GroupId,
    seats: Seats,
}

impl Group {
    /// Create a group with a fresh identifier
    pub fn new(size: u8) -> AppResult<Self> {
        Self::with_id(GroupId::new(), size)
    }

    pub fn with_id(id: GroupId, size: u8) -> AppResult<Self> {
        let seats = Seats::new(size).filter(|s| !s.is_zero()).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::InvalidGroupSize,
                format!("Invalid group size: {}", size),
            )
            .with_detail("size", size)
        })?;
        Ok(Self { id, seats })
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Number of seats the group needs
    pub fn seats(&self) -> Seats {
        self.seats
    }
}

/// Lifecycle of a group inside the seating manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GroupStatus {
    /// In the waiting queue
    Waiting,
    /// Holding seats at a table
    Seated { table_id: TableId },
    /// Left (only observable when departed records are retained)
    Departed,
}

impl GroupStatus {
    /// Waiting or seated
    pub fn is_active(&self) -> bool {
        !matches!(self, GroupStatus::Departed)
    }

    pub fn table_id(&self) -> Option<TableId> {
        match self {
            GroupStatus::Seated { table_id } => Some(*table_id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_size_bounds() {
        assert_eq!(Group::new(1).unwrap().seats().get(), 1);
        assert_eq!(Group::new(6).unwrap().seats().get(), 6);

        for size in [0, 7] {
            let err = Group::new(size).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidGroupSize);
        }
    }

    #[test]
    fn test_status_helpers() {
        let table_id = TableId::new();
        assert!(GroupStatus::Waiting.is_active());
        assert!(GroupStatus::Seated { table_id }.is_active());
        assert!(!GroupStatus::Departed.is_active());
        assert_eq!(GroupStatus::Seated { table_id }.table_id(), Some(table_id));
        assert_eq!(GroupStatus::Waiting.table_id(), None);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_value(GroupStatus::Waiting).unwrap();
        assert_eq!(json["status"], "waiting");

        let table_id = TableId::new();
        let json = serde_json::to_value(GroupStatus::Seated { table_id }).unwrap();
        assert_eq!(json["status"], "seated");
        assert_eq!(json["table_id"], table_id.to_string());
    }
}
