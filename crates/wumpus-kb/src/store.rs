use std::collections::HashSet;

use tracing::trace;
use wumpus_core::{Bounds, Cell, Fact, FactKind};

/// The agent's memory: a set of facts, each asserting that `kind` holds at a cell.
///
/// Inserting a fact twice and removing an absent fact are both no-ops.
///
/// The store also keeps walls and safety apart: `Safe` is never recorded on a square known to be
/// a wall, and learning a wall retracts any `Safe` fact there.
#[derive(Debug, Clone, Default)]
pub struct FactStore {
    facts: HashSet<Fact>,
}

impl FactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already knows the outer ring of `bounds` is wall.
    pub fn with_perimeter(bounds: Bounds) -> Self {
        let mut store = Self::new();
        for cell in bounds.perimeter() {
            store.insert(FactKind::Bump, cell);
        }
        store
    }

    /// Returns `true` if the fact was new.
    pub fn insert(&mut self, kind: FactKind, cell: Cell) -> bool {
        match kind {
            FactKind::Safe if self.contains(FactKind::Bump, cell) => return false,
            FactKind::Bump => {
                self.facts.remove(&Fact::new(FactKind::Safe, cell));
            }
            _ => {}
        }

        let added = self.facts.insert(Fact::new(kind, cell));
        if added {
            trace!(%kind, %cell, "fact added");
        }
        added
    }

    /// Returns `true` if the fact was present.
    pub fn remove(&mut self, kind: FactKind, cell: Cell) -> bool {
        let removed = self.facts.remove(&Fact::new(kind, cell));
        if removed {
            trace!(%kind, %cell, "fact removed");
        }
        removed
    }

    pub fn contains(&self, kind: FactKind, cell: Cell) -> bool {
        self.facts.contains(&Fact::new(kind, cell))
    }

    /// Every cell where `kind` holds, in no particular order.
    pub fn query_all(&self, kind: FactKind) -> Vec<Cell> {
        self.facts
            .iter()
            .filter(|f| f.kind == kind)
            .map(|f| f.cell)
            .collect()
    }

    /// All facts sorted by kind, then row, then column.
    pub fn dump(&self) -> Vec<Fact> {
        let mut out: Vec<Fact> = self.facts.iter().copied().collect();
        out.sort();
        out
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn is_wall(&self, cell: Cell) -> bool {
        self.contains(FactKind::Bump, cell)
    }

    pub fn is_safe(&self, cell: Cell) -> bool {
        self.contains(FactKind::Safe, cell)
    }

    pub fn is_visited(&self, cell: Cell) -> bool {
        self.contains(FactKind::Visited, cell)
    }
}
