//! SeatingManager - serialized arrival and departure processing
//!
//! All mutations run under one exclusive lock; queries take the shared
//! lock and return owned copies, so callers never observe a table
//! mid-update.
//!
//! # Arrival Flow
//!
//! ```text
//! arrives(group)
//!     ├─ 1. Take write lock
//!     ├─ 2. Ignore if the group is already waiting or seated
//!     ├─ 3. AvailabilityIndex::pickup(group.seats)
//!     │      ├─ hit:  Table::seat → index.push → ledger.record
//!     │      └─ miss: queue.push_back
//!     └─ 4. Broadcast event(s), release lock
//! ```
//!
//! # Departure Flow
//!
//! ```text
//! leaves(group_id)
//!     ├─ 1. Take write lock
//!     ├─ 2. Unknown id → GroupNotFound; no booking → Ok (no-op)
//!     ├─ 3. Table::release → index.push (moved to new bucket) → ledger.remove
//!     ├─ 4. Forget or retain the group record (DepartedPolicy)
//!     ├─ 5. Drain the waiting queue (DrainPolicy)
//!     └─ 6. Broadcast event(s), release lock
//! ```

mod error;
pub use error::*;

#[cfg(test)]
mod tests;

use crate::availability::AvailabilityIndex;
use crate::core::{DepartedPolicy, DrainPolicy, SeatingConfig};
use crate::ledger::BookingLedger;
use crate::registry::TableRegistry;
use crate::traits::SeatingService;
use crate::waiting::WaitingQueue;
use parking_lot::RwLock;
use shared::event::{SeatingEvent, SeatingEventKind};
use shared::models::{Booking, Group, GroupId, GroupStatus, Table, TableId};
use shared::util::now_millis;
use std::collections::{HashMap, HashSet};
use tokio::sync::broadcast;

/// Everything guarded by the manager lock
#[derive(Debug, Default)]
struct SeatingState {
    registry: TableRegistry,
    index: AvailabilityIndex,
    queue: WaitingQueue,
    ledger: BookingLedger,
    groups: HashMap<GroupId, GroupStatus>,
    /// Last assigned event sequence
    sequence: u64,
    /// Events produced inside the current critical section
    pending: Vec<SeatingEvent>,
}

/// Take a table for `group` from the index and book it.
///
/// `Ok(None)` is a plain miss. An error means the index handed out a table
/// the registry cannot seat the group at; the table is re-indexed first.
fn allocate(
    registry: &mut TableRegistry,
    index: &mut AvailabilityIndex,
    ledger: &mut BookingLedger,
    group: &Group,
) -> SeatingResult<Option<Booking>> {
    let Some(table_id) = index.pickup(group.seats()) else {
        return Ok(None);
    };
    let table = registry
        .get_mut(table_id)
        .ok_or(SeatingError::TableNotFound(table_id))?;

    let available = table.available_seats();
    let seated = table.seat(group.seats());
    index.push(table);
    if seated.is_err() {
        return Err(SeatingError::SeatCapacityExceeded {
            table_id,
            requested: group.seats(),
            available,
        });
    }

    let booking = Booking::new(group.id(), table_id, group.seats());
    ledger.record(booking.clone());
    Ok(Some(booking))
}

/// [`allocate`], treating bookkeeping errors as a miss
fn try_allocate(
    registry: &mut TableRegistry,
    index: &mut AvailabilityIndex,
    ledger: &mut BookingLedger,
    group: &Group,
) -> Option<Booking> {
    match allocate(registry, index, ledger, group) {
        Ok(booking) => booking,
        Err(e) => {
            tracing::error!(
                group_id = %group.id(),
                error = %e,
                error_code = %e.code(),
                "Allocation failed, availability index out of sync"
            );
            None
        }
    }
}

impl SeatingState {
    fn emit(&mut self, group_id: GroupId, kind: SeatingEventKind) {
        self.sequence += 1;
        self.pending.push(SeatingEvent {
            sequence: self.sequence,
            timestamp: now_millis(),
            group_id,
            kind,
        });
    }

    fn admit(&mut self, group: Group) {
        let group_id = group.id();
        if let Some(status) = self.groups.get(&group_id)
            && status.is_active()
        {
            tracing::warn!(group_id = %group_id, status = ?status, "Group already active, arrival ignored");
            return;
        }

        match try_allocate(&mut self.registry, &mut self.index, &mut self.ledger, &group) {
            Some(booking) => self.mark_seated(booking),
            None => self.enqueue(group),
        }
    }

    fn enqueue(&mut self, group: Group) {
        let group_id = group.id();
        let seats = group.seats();
        let position = self.queue.push_back(group);
        self.groups.insert(group_id, GroupStatus::Waiting);
        tracing::debug!(group_id = %group_id, seats = %seats, position, "No table fits, group queued");
        self.emit(group_id, SeatingEventKind::Queued { seats, position });
    }

    fn mark_seated(&mut self, booking: Booking) {
        self.groups.insert(
            booking.group_id,
            GroupStatus::Seated {
                table_id: booking.table_id,
            },
        );
        tracing::debug!(
            group_id = %booking.group_id,
            table_id = %booking.table_id,
            seats = %booking.seats,
            "Group seated"
        );
        self.emit(
            booking.group_id,
            SeatingEventKind::Seated {
                table_id: booking.table_id,
                seats: booking.seats,
            },
        );
    }

    fn forget_or_retain(&mut self, group_id: GroupId, policy: DepartedPolicy) {
        match policy {
            DepartedPolicy::Forget => {
                self.groups.remove(&group_id);
            }
            DepartedPolicy::Retain => {
                self.groups.insert(group_id, GroupStatus::Departed);
            }
        }
    }

    /// Release the group's seats. `Ok(false)` if it held none.
    ///
    /// Every check happens before the first mutation, so an error leaves
    /// the state untouched.
    fn depart(&mut self, group_id: GroupId, policy: DepartedPolicy) -> SeatingResult<bool> {
        if !self.groups.contains_key(&group_id) {
            return Err(SeatingError::GroupNotFound(group_id));
        }
        let Some(booking) = self.ledger.find(group_id).cloned() else {
            return Ok(false);
        };

        let table = self
            .registry
            .get_mut(booking.table_id)
            .ok_or(SeatingError::TableNotFound(booking.table_id))?;
        let available = table.available_seats();
        let capacity = table.capacity();
        table
            .release(booking.seats)
            .map_err(|_| SeatingError::ReleaseInvariantViolation {
                table_id: booking.table_id,
                releasing: booking.seats,
                available,
                capacity,
            })?;
        // push withdraws the id from its old bucket by identity first
        self.index.push(table);
        self.ledger.remove(group_id);
        self.forget_or_retain(group_id, policy);

        tracing::debug!(
            group_id = %group_id,
            table_id = %booking.table_id,
            seats = %booking.seats,
            "Group left, seats released"
        );
        self.emit(
            group_id,
            SeatingEventKind::Released {
                table_id: booking.table_id,
                seats: booking.seats,
            },
        );
        Ok(true)
    }

    /// Drop a waiting group from the queue. `Ok(false)` if it is not waiting.
    fn withdraw(&mut self, group_id: GroupId, policy: DepartedPolicy) -> SeatingResult<bool> {
        let status = self
            .groups
            .get(&group_id)
            .ok_or(SeatingError::GroupNotFound(group_id))?;
        if *status != GroupStatus::Waiting {
            return Ok(false);
        }

        self.queue.remove(group_id);
        self.forget_or_retain(group_id, policy);
        tracing::debug!(group_id = %group_id, "Waiting group withdrawn");
        self.emit(group_id, SeatingEventKind::Withdrawn);
        Ok(true)
    }

    /// Offer freed capacity to waiting groups in arrival order
    fn drain(&mut self, policy: DrainPolicy) {
        let stop_at_first_miss = match policy {
            DrainPolicy::Disabled => return,
            DrainPolicy::HeadOfLine => true,
            DrainPolicy::FirstFit => false,
        };
        if self.queue.is_empty() {
            return;
        }

        let registry = &mut self.registry;
        let index = &mut self.index;
        let ledger = &mut self.ledger;
        let mut seated = Vec::new();
        let served = self.queue.serve(stop_at_first_miss, |group| {
            match try_allocate(registry, index, ledger, group) {
                Some(booking) => {
                    seated.push(booking);
                    true
                }
                None => false,
            }
        });

        if served > 0 {
            tracing::debug!(
                served,
                still_waiting = self.queue.len(),
                "Waiting queue drained"
            );
        }
        for booking in seated {
            self.mark_seated(booking);
        }
    }

    fn audit(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.index.len() != self.registry.len() {
            issues.push(format!(
                "index holds {} tables, registry {}",
                self.index.len(),
                self.registry.len()
            ));
        }
        for table in self.registry.iter() {
            let id = table.id();
            if self.index.bucket_of(id) != Some(table.available_seats()) {
                issues.push(format!(
                    "table {} indexed under {:?}, has {} free",
                    id,
                    self.index.bucket_of(id),
                    table.available_seats()
                ));
            }
            let booked = self.ledger.seats_at(id);
            let free = usize::from(table.available_seats().get());
            if booked + free != usize::from(table.capacity().get()) {
                issues.push(format!(
                    "table {}: {} booked + {} free != capacity {}",
                    id,
                    booked,
                    table.available_seats(),
                    table.capacity()
                ));
            }
        }

        let mut booked_groups = HashSet::new();
        for booking in self.ledger.iter() {
            if !self.registry.contains(booking.table_id) {
                issues.push(format!("booking references unknown table {}", booking.table_id));
            }
            if !booked_groups.insert(booking.group_id) {
                issues.push(format!("group {} booked twice", booking.group_id));
            }
            let expected = GroupStatus::Seated {
                table_id: booking.table_id,
            };
            if self.groups.get(&booking.group_id) != Some(&expected) {
                issues.push(format!("group {} booked but not marked seated", booking.group_id));
            }
        }

        for group in self.queue.iter() {
            if self.groups.get(&group.id()) != Some(&GroupStatus::Waiting) {
                issues.push(format!("group {} queued but not marked waiting", group.id()));
            }
        }
        let waiting = self
            .groups
            .values()
            .filter(|s| **s == GroupStatus::Waiting)
            .count();
        if waiting != self.queue.len() {
            issues.push(format!(
                "{} groups marked waiting, {} queued",
                waiting,
                self.queue.len()
            ));
        }

        issues
    }
}

/// Seating manager for a fixed set of tables
///
/// Cheap to share: wrap in an `Arc` and call from any thread.
pub struct SeatingManager {
    state: RwLock<SeatingState>,
    config: SeatingConfig,
    event_tx: broadcast::Sender<SeatingEvent>,
}

impl std::fmt::Debug for SeatingManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeatingManager")
            .field("state", &"<RwLock<SeatingState>>")
            .field("event_tx", &"<broadcast::Sender>")
            .field("config", &self.config)
            .finish()
    }
}

impl SeatingManager {
    /// Create a manager with default configuration
    pub fn new(
        tables: impl IntoIterator<Item = Table>,
        waiting: impl IntoIterator<Item = Group>,
    ) -> SeatingResult<Self> {
        Self::with_config(tables, waiting, SeatingConfig::default())
    }

    /// Create a manager.
    ///
    /// Tables are expected to be empty. Pre-seeded waiting groups keep their
    /// order and are offered free tables once, per the drain policy.
    /// A zero `event_capacity` is rejected with `InvalidEventCapacity`.
    pub fn with_config(
        tables: impl IntoIterator<Item = Table>,
        waiting: impl IntoIterator<Item = Group>,
        config: SeatingConfig,
    ) -> SeatingResult<Self> {
        if config.event_capacity == 0 {
            return Err(SeatingError::InvalidEventCapacity(config.event_capacity));
        }

        let mut registry = TableRegistry::new();
        for table in tables {
            if !table.is_empty() {
                tracing::warn!(table_id = %table.id(), occupied = %table.occupied_seats(), "Registering a table that is not empty");
            }
            registry.insert(table)?;
        }
        let index = AvailabilityIndex::from_tables(registry.iter());

        let mut state = SeatingState {
            registry,
            index,
            ..Default::default()
        };
        for group in waiting {
            if state.groups.contains_key(&group.id()) {
                tracing::warn!(group_id = %group.id(), "Duplicate pre-seeded group skipped");
                continue;
            }
            state.enqueue(group);
        }
        state.drain(config.drain_policy);
        // Nobody can be subscribed yet
        state.pending.clear();

        let (event_tx, _) = broadcast::channel(config.event_capacity);
        tracing::info!(
            tables = state.registry.len(),
            waiting = state.queue.len(),
            seated = state.ledger.len(),
            drain_policy = %config.drain_policy,
            departed_policy = %config.departed_policy,
            "SeatingManager initialized"
        );

        Ok(Self {
            state: RwLock::new(state),
            config,
            event_tx,
        })
    }

    /// Create empty tables from raw capacities
    pub fn from_capacities(capacities: &[u8], config: SeatingConfig) -> SeatingResult<Self> {
        let tables = capacities
            .iter()
            .map(|&c| Table::new(c).map_err(|_| SeatingError::InvalidCapacity(c)))
            .collect::<SeatingResult<Vec<_>>>()?;
        Self::with_config(tables, Vec::new(), config)
    }

    pub fn config(&self) -> &SeatingConfig {
        &self.config
    }

    /// Subscribe to seating events.
    ///
    /// Events are sent while the manager lock is held, so channel order
    /// matches `sequence` order.
    pub fn subscribe(&self) -> broadcast::Receiver<SeatingEvent> {
        self.event_tx.subscribe()
    }

    fn flush_events(&self, state: &mut SeatingState) {
        for event in state.pending.drain(..) {
            // No subscribers is not an error
            let _ = self.event_tx.send(event);
        }
    }

    // ========== Mutations (exclusive lock) ==========

    /// Seat the group at the smallest table that fits, or queue it
    pub fn arrives(&self, group: Group) {
        let mut state = self.state.write();
        state.admit(group);
        self.flush_events(&mut state);
    }

    /// Validate a raw party size, then [`arrives`](Self::arrives)
    pub fn arrives_party(&self, size: u8) -> SeatingResult<GroupId> {
        let group = Group::new(size).map_err(|_| SeatingError::InvalidGroupSize(size))?;
        let group_id = group.id();
        self.arrives(group);
        Ok(group_id)
    }

    /// Release the group's seats, then offer them to waiting groups
    pub fn leaves(&self, group_id: GroupId) -> SeatingResult<()> {
        let mut state = self.state.write();
        let released = state.depart(group_id, self.config.departed_policy)?;
        if released {
            state.drain(self.config.drain_policy);
        }
        self.flush_events(&mut state);
        Ok(())
    }

    /// Remove a group from the waiting queue without seating it.
    ///
    /// Returns `false` if the group is known but not waiting.
    pub fn withdraw(&self, group_id: GroupId) -> SeatingResult<bool> {
        let mut state = self.state.write();
        let withdrawn = state.withdraw(group_id, self.config.departed_policy)?;
        if withdrawn {
            // A blocked head may have just left
            state.drain(self.config.drain_policy);
        }
        self.flush_events(&mut state);
        Ok(withdrawn)
    }

    // ========== Queries (shared lock) ==========

    pub fn locate(&self, group_id: GroupId) -> SeatingResult<Option<Table>> {
        let state = self.state.read();
        if !state.groups.contains_key(&group_id) {
            return Err(SeatingError::GroupNotFound(group_id));
        }
        let Some(booking) = state.ledger.find(group_id) else {
            return Ok(None);
        };
        state
            .registry
            .get(booking.table_id)
            .cloned()
            .map(Some)
            .ok_or(SeatingError::TableNotFound(booking.table_id))
    }

    pub fn status(&self, group_id: GroupId) -> SeatingResult<GroupStatus> {
        self.state
            .read()
            .groups
            .get(&group_id)
            .copied()
            .ok_or(SeatingError::GroupNotFound(group_id))
    }

    pub fn get_table(&self, table_id: TableId) -> SeatingResult<Table> {
        self.state
            .read()
            .registry
            .get(table_id)
            .cloned()
            .ok_or(SeatingError::TableNotFound(table_id))
    }

    /// All tables in registration order
    pub fn tables(&self) -> Vec<Table> {
        self.state.read().registry.iter().cloned().collect()
    }

    pub fn waiting_groups(&self) -> Vec<Group> {
        self.state.read().queue.to_vec()
    }

    pub fn bookings(&self) -> Vec<Booking> {
        self.state.read().ledger.to_vec()
    }

    /// Cross-check registry, index, ledger and queue.
    ///
    /// Returns a description of every inconsistency found; empty when the
    /// state is sound.
    pub fn audit(&self) -> Vec<String> {
        self.state.read().audit()
    }
}

impl SeatingService for SeatingManager {
    fn arrives(&self, group: Group) {
        SeatingManager::arrives(self, group)
    }

    fn leaves(&self, group_id: GroupId) -> SeatingResult<()> {
        SeatingManager::leaves(self, group_id)
    }

    fn locate(&self, group_id: GroupId) -> SeatingResult<Option<Table>> {
        SeatingManager::locate(self, group_id)
    }

    fn get_table(&self, table_id: TableId) -> SeatingResult<Table> {
        SeatingManager::get_table(self, table_id)
    }

    fn waiting_groups(&self) -> Vec<Group> {
        SeatingManager::waiting_groups(self)
    }

    fn bookings(&self) -> Vec<Booking> {
        SeatingManager::bookings(self)
    }
}
