use std::collections::VecDeque;

use tracing::debug;
use wumpus_core::{Bounds, Cell, NextStep};

use crate::FactStore;

/// Counters from the most recent query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanStats {
    /// Cells marked and expanded. Never exceeds the number of cells on the map.
    pub expanded: usize,
    pub enqueued: usize,
}

/// Shortest safe route finder.
///
/// Floods distances outward from the goal over squares the knowledge base proves safe (a
/// breadth-first search with unit edges, run in reverse), then steps to the agent's neighbour
/// closest to the goal. Squares that are walls, or neither safe nor visited, never carry a
/// distance, so the agent never routes through unconfirmed terrain.
///
/// Buffers are kept between queries to avoid reallocating every turn.
#[derive(Debug, Clone, Default)]
pub struct PathPlanner {
    bounds: Option<Bounds>,
    weights: Vec<u32>,
    marked: Vec<bool>,
    queue: VecDeque<Cell>,
    stats: PlanStats,
}

impl PathPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_stats(&self) -> PlanStats {
        self.stats
    }

    /// Distance-to-goal weight from the last query; 0 means unreachable or unknown.
    pub fn weight(&self, cell: Cell) -> u32 {
        self.bounds
            .and_then(|b| b.index(cell))
            .and_then(|idx| self.weights.get(idx).copied())
            .unwrap_or(0)
    }

    /// Direction of the first step from `from` toward `goal`.
    ///
    /// Ties between equally close neighbours go to the first in west, east, north, south order.
    /// Standing on the goal already yields `NoPath`, as there is no step to take.
    pub fn next_step(
        &mut self,
        store: &FactStore,
        bounds: Bounds,
        from: Cell,
        goal: Cell,
    ) -> NextStep {
        self.stats = PlanStats::default();
        self.bounds = Some(bounds);
        self.weights.clear();
        self.weights.resize(bounds.len(), 0);

        if from == goal {
            return NextStep::NoPath;
        }

        self.flood(store, bounds, goal);
        self.prune(store, bounds);

        let mut best: Option<(u32, NextStep)> = None;
        for (direction, neighbor) in from.neighbors() {
            let w = self.weight(neighbor);
            if w == 0 {
                continue;
            }
            if best.map_or(true, |(best_w, _)| w < best_w) {
                best = Some((w, NextStep::Go(direction)));
            }
        }

        let step = best.map_or(NextStep::NoPath, |(_, step)| step);
        debug!(
            %from,
            %goal,
            ?step,
            expanded = self.stats.expanded,
            enqueued = self.stats.enqueued,
            "planned"
        );
        step
    }

    fn flood(&mut self, store: &FactStore, bounds: Bounds, goal: Cell) {
        self.marked.clear();
        self.marked.resize(bounds.len(), false);
        self.queue.clear();

        let Some(goal_idx) = bounds.index(goal) else {
            return;
        };
        self.weights[goal_idx] = 1;
        self.queue.push_back(goal);
        self.stats.enqueued += 1;

        while let Some(cell) = self.queue.pop_front() {
            let Some(idx) = bounds.index(cell) else {
                continue;
            };
            if self.marked[idx] || store.is_wall(cell) || !store.is_safe(cell) {
                continue;
            }

            self.marked[idx] = true;
            self.stats.expanded += 1;

            let next = self.weights[idx].saturating_add(1);
            for (_, neighbor) in cell.neighbors() {
                let Some(n_idx) = bounds.index(neighbor) else {
                    continue;
                };
                if self.marked[n_idx] {
                    continue;
                }
                self.queue.push_back(neighbor);
                self.stats.enqueued += 1;

                let w = &mut self.weights[n_idx];
                if *w == 0 || *w > next {
                    *w = next;
                }
            }
        }
    }

    fn prune(&mut self, store: &FactStore, bounds: Bounds) {
        for (idx, cell) in bounds.cells().enumerate() {
            if store.is_wall(cell) || (!store.is_safe(cell) && !store.is_visited(cell)) {
                self.weights[idx] = 0;
            }
        }
    }
}
