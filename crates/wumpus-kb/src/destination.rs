use tracing::debug;
use wumpus_core::{Cell, Fact, FactKind, START};

use crate::FactStore;

/// The single active navigation goal.
///
/// Presence is mirrored into the fact store as a `Destination` fact at
/// [`Fact::DESTINATION_ANCHOR`]; the real target lives here. Both change together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Destination {
    target: Option<Cell>,
}

impl Destination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any current goal with `cell`.
    pub fn set(&mut self, store: &mut FactStore, cell: Cell) {
        self.clear(store);
        store.insert(FactKind::Destination, Fact::DESTINATION_ANCHOR);
        self.target = Some(cell);
        debug!(target = %cell, "destination set");
    }

    pub fn clear(&mut self, store: &mut FactStore) {
        store.remove(FactKind::Destination, Fact::DESTINATION_ANCHOR);
        if let Some(old) = self.target.take() {
            debug!(target = %old, "destination cleared");
        }
    }

    pub fn target(&self) -> Option<Cell> {
        self.target
    }

    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    pub fn at_target(&self, position: Cell) -> bool {
        self.target == Some(position)
    }

    pub fn at_start(position: Cell) -> bool {
        position == START
    }
}
