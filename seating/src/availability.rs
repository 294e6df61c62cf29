//! Availability index - free-list of tables keyed by free-seat count
//!
//! Bucket `n` holds the ids of tables that currently have exactly `n`
//! free seats, in the order they were pushed. Full tables sit in bucket 0.
//! A table id lives in at most one bucket; `placement` records which one
//! so that [`AvailabilityIndex::withdraw`] removes by identity without
//! scanning every bucket.
//!
//! ```text
//! bucket: 0    1    2      3    4    5    6
//!         [T5] []   [T2]   [T3] [T1] []   []
//!                    ^ pickup(2) -> T2, pickup(3) -> T3, pickup(5) -> None
//! ```

use shared::models::{MAX_SEATS, Seats, Table, TableId};
use std::collections::{HashMap, VecDeque};

const BUCKETS: usize = MAX_SEATS as usize + 1;

#[derive(Debug)]
pub struct AvailabilityIndex {
    buckets: [VecDeque<TableId>; BUCKETS],
    placement: HashMap<TableId, Seats>,
}

impl Default for AvailabilityIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl AvailabilityIndex {
    pub fn new() -> Self {
        Self {
            buckets: std::array::from_fn(|_| VecDeque::new()),
            placement: HashMap::new(),
        }
    }

    /// Index every table under its current free-seat count
    pub fn from_tables<'a>(tables: impl IntoIterator<Item = &'a Table>) -> Self {
        let mut index = Self::new();
        for table in tables {
            index.push(table);
        }
        index
    }

    /// Hand out the smallest table with at least `desired` free seats.
    ///
    /// The id is removed from the index; the caller owns it until it is
    /// pushed back.
    pub fn pickup(&mut self, desired: Seats) -> Option<TableId> {
        // Bucket 0 only ever holds full tables
        let start = Seats::new(desired.get().max(1))?;
        for seats in start.up_to_max() {
            if let Some(table_id) = self.buckets[seats.index()].pop_front() {
                self.placement.remove(&table_id);
                return Some(table_id);
            }
        }
        None
    }

    /// Place a table under its current free-seat count.
    ///
    /// A table already in the index is moved, never duplicated.
    pub fn push(&mut self, table: &Table) {
        let table_id = table.id();
        self.withdraw(table_id);
        let seats = table.available_seats();
        self.buckets[seats.index()].push_back(table_id);
        self.placement.insert(table_id, seats);
    }

    /// Remove a specific table id, returning the bucket it was in
    pub fn withdraw(&mut self, table_id: TableId) -> Option<Seats> {
        let seats = self.placement.remove(&table_id)?;
        let bucket = &mut self.buckets[seats.index()];
        if let Some(pos) = bucket.iter().position(|id| *id == table_id) {
            bucket.remove(pos);
        }
        Some(seats)
    }

    /// Bucket currently holding `table_id`
    pub fn bucket_of(&self, table_id: TableId) -> Option<Seats> {
        self.placement.get(&table_id).copied()
    }

    /// Ids in a bucket, in hand-out order
    pub fn bucket(&self, seats: Seats) -> impl Iterator<Item = TableId> + '_ {
        self.buckets[seats.index()].iter().copied()
    }

    /// Number of indexed tables
    pub fn len(&self) -> usize {
        self.placement.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placement.is_empty()
    }
}
