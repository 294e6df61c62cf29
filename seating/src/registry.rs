//! Table registry - authoritative table state
//!
//! Arena storage: tables live in a `Vec` in registration order and are
//! addressed through an id → slot map. Tables are never removed.

use crate::manager::{SeatingError, SeatingResult};
use shared::models::{Table, TableId};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct TableRegistry {
    tables: Vec<Table>,
    slots: HashMap<TableId, usize>,
}

impl TableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table; ids must be unique
    pub fn insert(&mut self, table: Table) -> SeatingResult<()> {
        let id = table.id();
        if self.slots.contains_key(&id) {
            return Err(SeatingError::DuplicateTable(id));
        }
        self.slots.insert(id, self.tables.len());
        self.tables.push(table);
        Ok(())
    }

    pub fn get(&self, id: TableId) -> Option<&Table> {
        self.slots.get(&id).map(|&slot| &self.tables[slot])
    }

    pub fn get_mut(&mut self, id: TableId) -> Option<&mut Table> {
        self.slots.get(&id).map(|&slot| &mut self.tables[slot])
    }

    pub fn contains(&self, id: TableId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Tables in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
