use shared::error::{AppError, ErrorCode};
use shared::models::{GroupId, Seats, TableId};
use thiserror::Error;

/// Seating manager errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatingError {
    #[error("Group not found: {0}")]
    GroupNotFound(GroupId),

    #[error("Table not found: {0}")]
    TableNotFound(TableId),

    #[error("Table {table_id} has {available} free seats, cannot seat {requested}")]
    SeatCapacityExceeded {
        table_id: TableId,
        requested: Seats,
        available: Seats,
    },

    #[error(
        "Releasing {releasing} seats at table {table_id} would exceed capacity {capacity} ({available} free)"
    )]
    ReleaseInvariantViolation {
        table_id: TableId,
        releasing: Seats,
        available: Seats,
        capacity: Seats,
    },

    #[error("Invalid table capacity: {0}")]
    InvalidCapacity(u8),

    #[error("Invalid group size: {0}")]
    InvalidGroupSize(u8),

    #[error("Table registered twice: {0}")]
    DuplicateTable(TableId),

    #[error("Event channel capacity must be at least 1, got {0}")]
    InvalidEventCapacity(usize),
}

impl SeatingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SeatingError::GroupNotFound(_) => ErrorCode::GroupNotFound,
            SeatingError::TableNotFound(_) => ErrorCode::TableNotFound,
            SeatingError::SeatCapacityExceeded { .. } => ErrorCode::SeatCapacityExceeded,
            SeatingError::ReleaseInvariantViolation { .. } => ErrorCode::ReleaseInvariantViolation,
            SeatingError::InvalidCapacity(_) => ErrorCode::InvalidCapacity,
            SeatingError::InvalidGroupSize(_) => ErrorCode::InvalidGroupSize,
            SeatingError::DuplicateTable(_) => ErrorCode::DuplicateTable,
            SeatingError::InvalidEventCapacity(_) => ErrorCode::ConfigError,
        }
    }

    /// Errors that mean the manager's own bookkeeping drifted
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            SeatingError::SeatCapacityExceeded { .. }
                | SeatingError::ReleaseInvariantViolation { .. }
        )
    }
}

impl From<SeatingError> for AppError {
    fn from(err: SeatingError) -> Self {
        if err.is_invariant_violation() {
            tracing::error!(error = %err, error_code = %err.code(), "Seating invariant violated");
        }
        let code = err.code();
        let message = err.to_string();
        let base = AppError::with_message(code, message);
        match err {
            SeatingError::GroupNotFound(id) => base.with_detail("group_id", id.to_string()),
            SeatingError::TableNotFound(id) | SeatingError::DuplicateTable(id) => {
                base.with_detail("table_id", id.to_string())
            }
            SeatingError::SeatCapacityExceeded {
                table_id,
                requested,
                available,
            } => base
                .with_detail("table_id", table_id.to_string())
                .with_detail("requested", requested.get())
                .with_detail("available", available.get()),
            SeatingError::ReleaseInvariantViolation {
                table_id,
                releasing,
                available,
                capacity,
            } => base
                .with_detail("table_id", table_id.to_string())
                .with_detail("releasing", releasing.get())
                .with_detail("available", available.get())
                .with_detail("capacity", capacity.get()),
            SeatingError::InvalidCapacity(capacity) => base.with_detail("capacity", capacity),
            SeatingError::InvalidGroupSize(size) => base.with_detail("size", size),
            SeatingError::InvalidEventCapacity(capacity) => {
                base.with_detail("event_capacity", capacity)
            }
        }
    }
}

pub type SeatingResult<T> = Result<T, SeatingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let group_id = GroupId::new();
        let table_id = TableId::new();
        assert_eq!(SeatingError::GroupNotFound(group_id).code(), ErrorCode::GroupNotFound);
        assert_eq!(SeatingError::TableNotFound(table_id).code(), ErrorCode::TableNotFound);
        assert_eq!(SeatingError::InvalidCapacity(9).code(), ErrorCode::InvalidCapacity);
        assert_eq!(SeatingError::DuplicateTable(table_id).code(), ErrorCode::DuplicateTable);
        assert_eq!(SeatingError::InvalidEventCapacity(0).code(), ErrorCode::ConfigError);
    }

    #[test]
    fn test_into_app_error_keeps_details() {
        let table_id = TableId::new();
        let err = SeatingError::ReleaseInvariantViolation {
            table_id,
            releasing: Seats::new(3).unwrap(),
            available: Seats::new(2).unwrap(),
            capacity: Seats::new(4).unwrap(),
        };
        assert!(err.is_invariant_violation());

        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::ReleaseInvariantViolation);
        assert_eq!(app.detail("table_id").unwrap(), &table_id.to_string());
        assert_eq!(app.detail("releasing").unwrap(), 3);
        assert_eq!(app.detail("capacity").unwrap(), 4);
    }

    #[test]
    fn test_group_not_found_message() {
        let group_id = GroupId::new();
        let app: AppError = SeatingError::GroupNotFound(group_id).into();
        assert_eq!(app.message, format!("Group not found: {}", group_id));
        assert!(!SeatingError::GroupNotFound(group_id).is_invariant_violation());
    }
}
