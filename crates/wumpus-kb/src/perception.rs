use tracing::debug;
use wumpus_core::{Cell, FactKind, Percept, Percepts};

use crate::inference::{infer_corners, EVIDENCE};
use crate::FactStore;

const RECORDED: [Percept; 4] = [Percept::Smell, Percept::Breeze, Percept::Moo, Percept::Glitter];

/// Tell the knowledge base what was sensed on `here` this turn, then run corner inference.
///
/// A `Dead` percept records nothing: a square only becomes visited and safe once the agent has
/// survived it. `Bump` is ignored here because the wall is the square the agent tried to enter,
/// which only the move itself knows.
pub fn record_percepts(store: &mut FactStore, here: Cell, percepts: Percepts) {
    if percepts.contains(Percept::Dead) {
        debug!(cell = %here, "dead, nothing recorded");
        return;
    }

    store.insert(FactKind::Visited, here);
    store.insert(FactKind::Safe, here);

    for percept in RECORDED {
        if percepts.contains(percept) {
            store.insert(percept.into(), here);
        }
    }

    // No smell and no breeze: nothing lethal next door. A Supmuw is harmless on its own, so Moo
    // does not block this.
    if percepts.is_calm() {
        for (_, neighbor) in here.neighbors() {
            store.insert(FactKind::Safe, neighbor);
        }
    }

    for (maybe, hazard) in EVIDENCE {
        infer_corners(store, here, maybe, hazard);
    }
}
