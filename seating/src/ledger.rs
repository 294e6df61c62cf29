//! Booking ledger - active group → table assignments in seating order

use shared::models::{Booking, GroupId, TableId};

#[derive(Debug, Default)]
pub struct BookingLedger {
    bookings: Vec<Booking>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, booking: Booking) {
        self.bookings.push(booking);
    }

    pub fn find(&self, group_id: GroupId) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.group_id == group_id)
    }

    pub fn remove(&mut self, group_id: GroupId) -> Option<Booking> {
        let pos = self.bookings.iter().position(|b| b.group_id == group_id)?;
        Some(self.bookings.remove(pos))
    }

    /// Total seats booked at a table.
    ///
    /// Exceeds the table's capacity when the ledger is inconsistent.
    pub fn seats_at(&self, table_id: TableId) -> usize {
        self.bookings
            .iter()
            .filter(|b| b.table_id == table_id)
            .map(|b| usize::from(b.seats.get()))
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.iter()
    }

    pub fn to_vec(&self) -> Vec<Booking> {
        self.bookings.clone()
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}
