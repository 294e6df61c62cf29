//! Dining Table Model

use super::{Seats, TableId};
use crate::error::{AppError, AppResult, ErrorCode};
use serde::Serialize;

/// Dining table entity (桌台)
///
/// `available_seats` never leaves `0..=capacity`; the only mutators are
/// [`Table::seat`] and [`Table::release`], which reject any change that
/// would break that bound and leave the table untouched on error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    id: TableId,
    capacity: Seats,
    available_seats: Seats,
}

impl Table {
    /// Create an empty table with a fresh identifier
    pub fn new(capacity: u8) -> AppResult<Self> {
        Self::with_id(TableId::new(), capacity)
    }

    /// Create an empty table with a caller-supplied identifier
    pub fn with_id(id: TableId, capacity: u8) -> AppResult<Self> {
        let seats = Seats::new(capacity)
            .filter(|s| !s.is_zero())
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::InvalidCapacity,
                    format!("Invalid table capacity: {}", capacity),
                )
                .with_detail("capacity", capacity)
            })?;
        Ok(Self {
            id,
            capacity: seats,
            available_seats: seats,
        })
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn capacity(&self) -> Seats {
        self.capacity
    }

    pub fn available_seats(&self) -> Seats {
        self.available_seats
    }

    pub fn occupied_seats(&self) -> Seats {
        // available <= capacity always holds
        self.capacity
            .checked_sub(self.available_seats)
            .unwrap_or(Seats::ZERO)
    }

    /// True when nobody is seated at the table
    pub fn is_empty(&self) -> bool {
        self.available_seats == self.capacity
    }

    /// Take `people` free seats
    pub fn seat(&mut self, people: Seats) -> AppResult<()> {
        let remaining = self.available_seats.checked_sub(people).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::SeatCapacityExceeded,
                format!(
                    "No space for {} at table {} ({} free)",
                    people, self.id, self.available_seats
                ),
            )
            .with_detail("table_id", self.id.to_string())
            .with_detail("requested", people.get())
            .with_detail("available", self.available_seats.get())
        })?;
        self.available_seats = remaining;
        Ok(())
    }

    /// Give back `people` seats
    pub fn release(&mut self, people: Seats) -> AppResult<()> {
        match self.available_seats.checked_add(people) {
            Some(restored) if restored <= self.capacity => {
                self.available_seats = restored;
                Ok(())
            }
            _ => Err(AppError::with_message(
                ErrorCode::ReleaseInvariantViolation,
                format!(
                    "Cannot release {} seats at table {} ({} of {} free)",
                    people, self.id, self.available_seats, self.capacity
                ),
            )
            .with_detail("table_id", self.id.to_string())
            .with_detail("releasing", people.get())
            .with_detail("available", self.available_seats.get())
            .with_detail("capacity", self.capacity.get())),
        }
    }
}
