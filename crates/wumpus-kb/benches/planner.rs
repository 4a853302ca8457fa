use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wumpus_core::{Bounds, Cell, FactKind, Percepts, Policy};
use wumpus_kb::{FactStore, KnowledgeAgent, PathPlanner};

fn open_store(bounds: Bounds) -> FactStore {
    let mut store = FactStore::with_perimeter(bounds);
    for cell in bounds.cells().filter(|c| !bounds.is_perimeter(*c)) {
        store.insert(FactKind::Safe, cell);
        store.insert(FactKind::Visited, cell);
    }
    store
}

fn bench_planner(c: &mut Criterion) {
    let bounds = Bounds::square(14);
    let store = open_store(bounds);
    let from = Cell::new(1, 1);
    let goal = Cell::new(12, 12);

    let mut group = c.benchmark_group("wumpus-kb/planner");

    group.bench_function("next_step_fresh", |b| {
        b.iter(|| {
            let mut planner = PathPlanner::new();
            black_box(planner.next_step(&store, bounds, from, goal));
        })
    });

    let mut planner = PathPlanner::new();
    group.bench_function("next_step_reuse", |b| {
        b.iter(|| {
            black_box(planner.next_step(&store, bounds, from, goal));
        })
    });

    group.bench_function("agent_decide_calm", |b| {
        b.iter(|| {
            let mut agent = KnowledgeAgent::seeded(bounds, 1);
            black_box(agent.decide(Percepts::NONE));
        })
    });

    group.finish();
}

criterion_group!(benches, bench_planner);
criterion_main!(benches);
