//! Per-turn decision policy, in strict priority order:
//!
//! 1. grab glittering gold, then head for the start square;
//! 2. drop a destination that turned out to be a wall or not safe;
//! 3. shoot a known Wumpus on a neighbouring square while it can be smelled;
//! 4. keep walking to the current destination, or pick a random unvisited safe square;
//! 5. walk back to the start square;
//! 6. quit.

use tracing::{debug, warn};
use wumpus_core::{Action, Cell, DeterministicRng, Direction, FactKind, NextStep, START};

use crate::{Destination, KnowledgeAgent};

impl<R> KnowledgeAgent<R>
where
    R: DeterministicRng,
{
    pub(crate) fn select_action(&mut self) -> Action {
        let here = self.state.position;

        if self.store.contains(FactKind::Glitter, here) {
            self.destination.clear(&mut self.store);
            self.destination.set(&mut self.store, START);
            return Action::Grab;
        }

        if let Some(target) = self.destination.target() {
            if self.store.is_wall(target) || !self.store.is_safe(target) {
                debug!(%target, "destination no longer safe");
                self.destination.clear(&mut self.store);
            }
        }

        if self.store.contains(FactKind::Smell, here) && self.state.arrows > 0 {
            if let Some(direction) = self.wumpus_nearby(here) {
                return Action::Shoot(direction);
            }
        }

        if let Some(direction) = self.continue_to_destination(here) {
            return Action::Move(direction);
        }

        if let Some(direction) = self.explore() {
            return Action::Move(direction);
        }

        if !Destination::at_start(here) {
            self.destination.set(&mut self.store, START);
            if let NextStep::Go(direction) = self.plan(START) {
                return Action::Move(direction);
            }
            warn!(%here, "no safe route back to the start");
        }

        Action::Quit
    }

    /// Direction of a neighbour holding a Wumpus fact. With several, the first in west, east,
    /// north, south order is chosen rather than the last.
    fn wumpus_nearby(&self, here: Cell) -> Option<Direction> {
        here.neighbors()
            .into_iter()
            .find(|(_, cell)| self.store.contains(FactKind::Wumpus, *cell))
            .map(|(direction, _)| direction)
    }

    fn continue_to_destination(&mut self, here: Cell) -> Option<Direction> {
        let target = self.destination.target()?;
        if self.destination.at_target(here) {
            return None;
        }

        match self.plan(target) {
            NextStep::Go(direction) => Some(direction),
            NextStep::NoPath => {
                warn!(%target, "destination unreachable, dropping it");
                self.destination.clear(&mut self.store);
                None
            }
        }
    }

    /// Pick a random unvisited safe square the agent can actually reach and set course for it.
    fn explore(&mut self) -> Option<Direction> {
        let mut candidates: Vec<Cell> = self
            .store
            .query_all(FactKind::Safe)
            .into_iter()
            .filter(|c| !self.store.is_visited(*c) && !self.store.is_wall(*c))
            .collect();
        // The store iterates in hash order; sort so the seed alone decides the shuffle.
        candidates.sort_unstable();
        self.rng.shuffle(&mut candidates);

        for candidate in candidates {
            if let NextStep::Go(direction) = self.plan(candidate) {
                self.destination.set(&mut self.store, candidate);
                return Some(direction);
            }
            debug!(%candidate, "unvisited safe square unreachable");
        }
        None
    }
}
