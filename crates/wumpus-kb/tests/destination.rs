use wumpus_core::{Cell, Fact, FactKind, START};
use wumpus_kb::{Destination, FactStore};

#[test]
fn setting_twice_keeps_a_single_marker() {
    let mut store = FactStore::new();
    let mut destination = Destination::new();

    destination.set(&mut store, Cell::new(3, 4));
    destination.set(&mut store, Cell::new(5, 6));

    assert_eq!(destination.target(), Some(Cell::new(5, 6)));
    assert_eq!(
        store.query_all(FactKind::Destination),
        vec![Fact::DESTINATION_ANCHOR]
    );
}

#[test]
fn clear_removes_the_marker() {
    let mut store = FactStore::new();
    let mut destination = Destination::new();

    destination.set(&mut store, START);
    assert!(destination.has_target());
    destination.clear(&mut store);

    assert!(!destination.has_target());
    assert!(store.query_all(FactKind::Destination).is_empty());
}

#[test]
fn at_target_and_at_start() {
    let mut store = FactStore::new();
    let mut destination = Destination::new();
    destination.set(&mut store, Cell::new(2, 2));

    assert!(destination.at_target(Cell::new(2, 2)));
    assert!(!destination.at_target(Cell::new(2, 3)));
    assert!(Destination::at_start(START));
    assert!(!Destination::at_start(Cell::new(2, 2)));
}
