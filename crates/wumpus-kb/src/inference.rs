use tracing::debug;
use wumpus_core::{Cell, FactKind};

use crate::FactStore;

/// Percept facts paired with the hazard they betray.
pub const EVIDENCE: [(FactKind, FactKind); 3] = [
    (FactKind::Smell, FactKind::Wumpus),
    (FactKind::Breeze, FactKind::Pit),
    (FactKind::Moo, FactKind::Supmuw),
];

/// Corner rule.
///
/// When `here` and one of its diagonals both carry the `maybe` percept, the square causing it
/// must be one of the two squares adjacent to both. If exactly one of those two is known safe,
/// the other one holds the `hazard`. Both safe or both unknown proves nothing.
///
/// Returns the cells where a hazard fact was newly added.
pub fn infer_corners(store: &mut FactStore, here: Cell, maybe: FactKind, hazard: FactKind) -> Vec<Cell> {
    let mut found = Vec::new();
    if !store.contains(maybe, here) {
        return found;
    }

    for (dx, dy) in Cell::diagonal_offsets() {
        let diagonal = here.offset(dx, dy);
        if !store.contains(maybe, diagonal) || store.is_wall(diagonal) {
            continue;
        }

        let side_a = here.offset(dx, 0);
        let side_b = here.offset(0, dy);
        let target = match (store.is_safe(side_a), store.is_safe(side_b)) {
            (true, false) => side_b,
            (false, true) => side_a,
            _ => continue,
        };

        if store.insert(hazard, target) {
            debug!(%hazard, cell = %target, from = %here, via = %diagonal, "corner inference");
            found.push(target);
        }
    }

    found
}
