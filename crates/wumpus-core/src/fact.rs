use core::fmt;

use crate::{Cell, Percept};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What a knowledge-base sentence asserts about a square.
///
/// Declaration order is the dump order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FactKind {
    /// The square is a wall.
    Bump,
    Smell,
    Breeze,
    Moo,
    Glitter,
    Dead,
    /// Inferred Wumpus location.
    Wumpus,
    /// Inferred Supmuw location.
    Supmuw,
    /// Inferred pit location.
    Pit,
    Safe,
    Visited,
    /// Marker for the single active navigation goal; always anchored at [`Fact::DESTINATION_ANCHOR`].
    Destination,
}

impl FactKind {
    pub const fn name(self) -> &'static str {
        match self {
            FactKind::Bump => "BUMP",
            FactKind::Smell => "SMELL",
            FactKind::Breeze => "BREEZE",
            FactKind::Moo => "MOO",
            FactKind::Glitter => "GLITTER",
            FactKind::Dead => "DEAD",
            FactKind::Wumpus => "WUMPUS",
            FactKind::Supmuw => "SUPMUW",
            FactKind::Pit => "PIT",
            FactKind::Safe => "SAFE",
            FactKind::Visited => "VISITED",
            FactKind::Destination => "DESTINATION",
        }
    }
}

impl From<Percept> for FactKind {
    fn from(value: Percept) -> Self {
        match value {
            Percept::Bump => FactKind::Bump,
            Percept::Smell => FactKind::Smell,
            Percept::Breeze => FactKind::Breeze,
            Percept::Moo => FactKind::Moo,
            Percept::Glitter => FactKind::Glitter,
            Percept::Dead => FactKind::Dead,
        }
    }
}

impl fmt::Display for FactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One atomic belief: `kind` holds at `cell`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fact {
    pub kind: FactKind,
    pub cell: Cell,
}

impl Fact {
    pub const DESTINATION_ANCHOR: Cell = Cell::new(0, 0);

    pub const fn new(kind: FactKind, cell: Cell) -> Self {
        Self { kind, cell }
    }

    /// Dump ordering: kind, then row, then column.
    fn sort_key(&self) -> (FactKind, i32, i32) {
        (self.kind, self.cell.y, self.cell.x)
    }
}

impl PartialOrd for Fact {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fact {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>7}: ({:2}, {:2})", self.kind.name(), self.cell.x, self.cell.y)
    }
}
