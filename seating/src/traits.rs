//! Seating capability trait
//!
//! The narrow surface callers program against; internal registries and
//! indexes stay private to the implementation.

use crate::manager::SeatingResult;
use shared::models::{Booking, Group, GroupId, Table, TableId};

pub trait SeatingService: Send + Sync {
    /// Seat the group at the best-fitting table, or queue it. Never fails.
    fn arrives(&self, group: Group);

    /// Release the group's seats, if it holds any
    fn leaves(&self, group_id: GroupId) -> SeatingResult<()>;

    /// Table the group is seated at; `None` while waiting
    fn locate(&self, group_id: GroupId) -> SeatingResult<Option<Table>>;

    fn get_table(&self, table_id: TableId) -> SeatingResult<Table>;

    /// Waiting groups in arrival order
    fn waiting_groups(&self) -> Vec<Group>;

    /// Active bookings in seating order
    fn bookings(&self) -> Vec<Booking>;
}
