use proptest::prelude::*;
use wumpus_core::{Bounds, Cell, Direction, FactKind, NextStep};
use wumpus_kb::{FactStore, PathPlanner};

/// Walled room with every interior square known safe.
fn open_room(size: i32) -> (Bounds, FactStore) {
    let bounds = Bounds::square(size);
    let mut store = FactStore::with_perimeter(bounds);
    for cell in bounds.cells().filter(|c| !bounds.is_perimeter(*c)) {
        store.insert(FactKind::Safe, cell);
    }
    (bounds, store)
}

#[test]
fn steps_toward_the_goal_in_an_open_room() {
    let (bounds, store) = open_room(5);
    let mut planner = PathPlanner::new();

    let step = planner.next_step(&store, bounds, Cell::new(1, 1), Cell::new(3, 3));

    // East and South tie; east comes first in the scan order.
    assert_eq!(step, NextStep::Go(Direction::East));
    assert_eq!(planner.weight(Cell::new(3, 3)), 1);
    assert_eq!(planner.weight(Cell::new(2, 1)), 4);
    assert_eq!(planner.weight(Cell::new(1, 2)), 4);
    assert_eq!(planner.weight(Cell::new(0, 1)), 0);

    let stats = planner.last_stats();
    assert_eq!(stats.expanded, 9);
    assert!(stats.enqueued >= stats.expanded);
}

#[test]
fn never_routes_through_unknown_squares() {
    let bounds = Bounds::square(5);
    let mut store = FactStore::with_perimeter(bounds);
    for cell in [Cell::new(1, 1), Cell::new(1, 2), Cell::new(1, 3), Cell::new(2, 3), Cell::new(3, 3)] {
        store.insert(FactKind::Safe, cell);
    }
    let mut planner = PathPlanner::new();

    // (2, 1) is shorter but unknown, so go round by the south.
    let step = planner.next_step(&store, bounds, Cell::new(1, 1), Cell::new(3, 3));
    assert_eq!(step, NextStep::Go(Direction::South));
    assert_eq!(planner.weight(Cell::new(2, 1)), 0);
}

#[test]
fn walls_block_the_route() {
    let (bounds, mut store) = open_room(5);
    for y in 1..4 {
        store.insert(FactKind::Bump, Cell::new(2, y));
    }
    let mut planner = PathPlanner::new();

    let step = planner.next_step(&store, bounds, Cell::new(1, 1), Cell::new(3, 3));
    assert_eq!(step, NextStep::NoPath);
}

#[test]
fn standing_on_the_goal_has_no_step() {
    let (bounds, store) = open_room(5);
    let mut planner = PathPlanner::new();

    assert_eq!(
        planner.next_step(&store, bounds, Cell::new(2, 2), Cell::new(2, 2)),
        NextStep::NoPath
    );
}

#[test]
fn unsafe_goal_is_unreachable() {
    let (bounds, mut store) = open_room(5);
    store.remove(FactKind::Safe, Cell::new(3, 3));
    let mut planner = PathPlanner::new();

    assert_eq!(
        planner.next_step(&store, bounds, Cell::new(1, 1), Cell::new(3, 3)),
        NextStep::NoPath
    );
}

#[test]
fn buffers_are_reused_across_map_sizes() {
    let mut planner = PathPlanner::new();

    let (small, small_store) = open_room(5);
    planner.next_step(&small_store, small, Cell::new(1, 1), Cell::new(3, 3));

    let (large, large_store) = open_room(12);
    let step = planner.next_step(&large_store, large, Cell::new(10, 10), Cell::new(10, 1));
    assert_eq!(step, NextStep::Go(Direction::North));
    assert!(planner.last_stats().expanded <= large.len());
}

proptest! {
    #[test]
    fn planning_terminates_and_stays_on_known_ground(
        safe in proptest::collection::vec(any::<bool>(), 64),
        walls in proptest::collection::vec(any::<bool>(), 64),
        from in (1i32..7, 1i32..7),
        goal in (1i32..7, 1i32..7),
    ) {
        let bounds = Bounds::square(8);
        let mut store = FactStore::with_perimeter(bounds);
        for (idx, cell) in bounds.cells().enumerate() {
            if safe[idx] {
                store.insert(FactKind::Safe, cell);
            }
            if walls[idx] && !safe[idx] {
                store.insert(FactKind::Bump, cell);
            }
        }
        let from = Cell::new(from.0, from.1);
        let goal = Cell::new(goal.0, goal.1);

        let mut planner = PathPlanner::new();
        let step = planner.next_step(&store, bounds, from, goal);

        prop_assert!(planner.last_stats().expanded <= bounds.len());
        if let NextStep::Go(direction) = step {
            let next = from.step(direction);
            prop_assert!(!store.is_wall(next));
            prop_assert!(store.is_safe(next) || store.is_visited(next));
        }
    }
}
