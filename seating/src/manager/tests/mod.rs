use super::*;
use shared::models::Seats;

/// Tables with the given capacities, in order
fn make_tables(capacities: &[u8]) -> Vec<Table> {
    capacities.iter().map(|&c| Table::new(c).unwrap()).collect()
}

fn group(size: u8) -> Group {
    Group::new(size).unwrap()
}

fn seats(n: u8) -> Seats {
    Seats::new(n).unwrap()
}

fn create_test_manager(tables: &[Table]) -> SeatingManager {
    SeatingManager::new(tables.to_vec(), Vec::new()).unwrap()
}

fn create_manager_with(tables: &[Table], config: SeatingConfig) -> SeatingManager {
    SeatingManager::with_config(tables.to_vec(), Vec::new(), config).unwrap()
}

/// Tables [4, 2, 3]
fn restaurant() -> (Vec<Table>, SeatingManager) {
    let tables = make_tables(&[4, 2, 3]);
    let manager = create_test_manager(&tables);
    (tables, manager)
}

fn assert_consistent(manager: &SeatingManager) {
    let issues = manager.audit();
    assert!(issues.is_empty(), "inconsistent state: {:?}", issues);
}

fn free_seats(manager: &SeatingManager, table: &Table) -> u8 {
    manager.get_table(table.id()).unwrap().available_seats().get()
}

/// Everything received so far, without blocking
fn drain_events(rx: &mut broadcast::Receiver<SeatingEvent>) -> Vec<SeatingEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

// ========================================================================
// Test modules
// ========================================================================

mod test_concurrency;
