//! Unified error codes for the seating engine
//!
//! Error codes are organized by range:
//! - 6xxx: Group errors
//! - 7xxx: Table errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for compact serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 6xxx: Group ====================
    /// Group not found
    GroupNotFound = 6001,
    /// Party size outside 1..=6
    InvalidGroupSize = 6002,

    // ==================== 7xxx: Table ====================
    /// Table not found
    TableNotFound = 7001,
    /// Table capacity outside 1..=6
    InvalidCapacity = 7002,
    /// Not enough free seats at the table
    SeatCapacityExceeded = 7003,
    /// Release would push free seats above capacity
    ReleaseInvariantViolation = 7004,
    /// Table registered twice
    DuplicateTable = 7005,

    // ==================== 9xxx: System ====================
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            // Group
            ErrorCode::GroupNotFound => "Group not found",
            ErrorCode::InvalidGroupSize => "Group size must be between 1 and 6",

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::InvalidCapacity => "Table capacity must be between 1 and 6",
            ErrorCode::SeatCapacityExceeded => "Not enough free seats at table",
            ErrorCode::ReleaseInvariantViolation => "Releasing seats would exceed table capacity",
            ErrorCode::DuplicateTable => "Table is already registered",

            // System
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // Group
            6001 => Ok(ErrorCode::GroupNotFound),
            6002 => Ok(ErrorCode::InvalidGroupSize),

            // Table
            7001 => Ok(ErrorCode::TableNotFound),
            7002 => Ok(ErrorCode::InvalidCapacity),
            7003 => Ok(ErrorCode::SeatCapacityExceeded),
            7004 => Ok(ErrorCode::ReleaseInvariantViolation),
            7005 => Ok(ErrorCode::DuplicateTable),

            // System
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}
