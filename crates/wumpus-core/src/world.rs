use crate::{Action, Bounds, Cell, Direction, Percepts};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Read-only world access, as far as a player is allowed to see it.
pub trait WorldView {
    fn bounds(&self) -> Bounds;

    /// Percepts a player standing on `cell` would sense, excluding `Bump` (which depends on the
    /// previous move, not on the square).
    fn percepts_at(&self, cell: Cell) -> Percepts;
}

/// Write access: applying one action advances the world by one turn.
pub trait WorldMut: WorldView {
    fn apply(&mut self, action: Action) -> TurnReport;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Creature {
    Wumpus,
    Supmuw,
}

/// Something that happened while applying an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WorldEvent {
    Moved { to: Cell },
    /// The move was blocked by the wall at `at`; the player did not move.
    Bumped { at: Cell },
    ArrowFired { direction: Direction },
    OutOfArrows,
    Killed { at: Cell, creature: Creature },
    GoldGrabbed { at: Cell },
    NothingToGrab,
    FoodReceived { at: Cell },
    Died { at: Cell },
    Quit,
}

/// Everything a player learns from one turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TurnReport {
    pub events: Vec<WorldEvent>,
    pub score_delta: i32,
    /// Percepts on the player's square after the action, `Bump` included.
    pub percepts: Percepts,
}

impl TurnReport {
    pub fn push(&mut self, event: WorldEvent, score: i32) {
        self.events.push(event);
        self.score_delta += score;
    }
}
