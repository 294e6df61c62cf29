use super::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

fn arrive_concurrently(manager: &Arc<SeatingManager>, groups: &[Group]) {
    let handles: Vec<_> = groups
        .iter()
        .cloned()
        .map(|g| {
            let manager = manager.clone();
            thread::spawn(move || manager.arrives(g))
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
}

#[test]
fn test_simultaneous_arrivals_never_overbook() {
    for _ in 0..50 {
        let tables = make_tables(&[4, 2, 3]);
        let manager = Arc::new(create_test_manager(&tables));
        let groups = vec![group(2), group(2), group(3)];

        arrive_concurrently(&manager, &groups);

        // Every ordering seats all three
        assert!(manager.waiting_groups().is_empty());
        let bookings = manager.bookings();
        assert_eq!(bookings.len(), 3);

        let on_two_top: Vec<&Booking> = bookings
            .iter()
            .filter(|b| b.table_id == tables[1].id())
            .collect();
        assert_eq!(on_two_top.len(), 1);
        assert_eq!(on_two_top[0].seats, seats(2));

        for table in manager.tables() {
            assert!(table.available_seats() <= table.capacity());
        }
        assert_consistent(&manager);
    }
}

#[test]
fn test_contended_single_table() {
    let tables = make_tables(&[2]);
    let manager = Arc::new(create_test_manager(&tables));
    let groups: Vec<Group> = (0..8).map(|_| group(2)).collect();

    arrive_concurrently(&manager, &groups);

    assert_eq!(manager.bookings().len(), 1);
    assert_eq!(manager.waiting_groups().len(), 7);
    assert_eq!(free_seats(&manager, &tables[0]), 0);
    assert_consistent(&manager);
}

#[test]
fn test_concurrent_arrive_and_leave() {
    const WORKERS: usize = 8;
    const ROUNDS: usize = 200;

    let tables = make_tables(&[2, 3, 4, 6]);
    let manager = Arc::new(create_test_manager(&tables));
    let seated = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..WORKERS)
        .map(|w| {
            let manager = manager.clone();
            let seated = seated.clone();
            thread::spawn(move || {
                for round in 0..ROUNDS {
                    let g = group(((w + round) % 6 + 1) as u8);
                    manager.arrives(g.clone());
                    match manager.status(g.id()) {
                        Ok(GroupStatus::Seated { .. }) => {
                            seated.fetch_add(1, Ordering::Relaxed);
                            manager.leaves(g.id()).unwrap();
                        }
                        // Waiting, or seated by a drain in between
                        _ => {
                            if manager.withdraw(g.id()) == Ok(false) {
                                manager.leaves(g.id()).unwrap();
                            }
                        }
                    }
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert!(seated.load(Ordering::Relaxed) > 0);
    assert!(manager.bookings().is_empty());
    assert!(manager.waiting_groups().is_empty());
    for table in tables {
        assert_eq!(free_seats(&manager, &table), table.capacity().get());
    }
    assert_consistent(&manager);
}

#[test]
fn test_readers_see_consistent_snapshots() {
    let tables = make_tables(&[4, 4]);
    let manager = Arc::new(create_test_manager(&tables));

    let writer = {
        let manager = manager.clone();
        thread::spawn(move || {
            for _ in 0..500 {
                let g = group(2);
                manager.arrives(g.clone());
                manager.leaves(g.id()).unwrap();
            }
        })
    };

    for _ in 0..500 {
        assert_consistent(&manager);
        for table in manager.tables() {
            assert!(table.available_seats() <= table.capacity());
        }
    }
    writer.join().unwrap();
    assert!(manager.bookings().is_empty());
}
