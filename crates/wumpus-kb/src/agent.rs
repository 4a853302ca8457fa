use tracing::{debug, info};
use wumpus_core::{
    Action, Bounds, Cell, DeterministicRng, Direction, Fact, FactKind, NextStep, Percept, Percepts,
    Policy, SplitMix64, TurnReport, WorldEvent, START,
};

use crate::{record_percepts, Destination, FactStore, PathPlanner};

/// What the agent knows about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentState {
    pub position: Cell,
    pub arrows: u32,
    pub has_food: bool,
    pub has_gold: bool,
    pub steps: u32,
    pub score: i32,
    /// Direction of the last move attempted, successful or not.
    pub last_move: Option<Direction>,
}

impl AgentState {
    pub fn new(arrows: u32) -> Self {
        Self {
            position: START,
            arrows,
            has_food: false,
            has_gold: false,
            steps: 0,
            score: 0,
            last_move: None,
        }
    }

    pub fn has_won(&self) -> bool {
        self.has_gold && self.position == START
    }
}

impl Default for AgentState {
    fn default() -> Self {
        Self::new(1)
    }
}

/// The automated player.
///
/// Owns its knowledge base, its single destination and its planner buffers. Exploration order is
/// drawn from `R`, so a seeded generator makes a whole game reproducible.
pub struct KnowledgeAgent<R = SplitMix64> {
    pub(crate) bounds: Bounds,
    pub(crate) store: FactStore,
    pub(crate) destination: Destination,
    pub(crate) planner: PathPlanner,
    pub(crate) state: AgentState,
    pub(crate) rng: R,
}

impl KnowledgeAgent<SplitMix64> {
    pub fn seeded(bounds: Bounds, seed: u64) -> Self {
        Self::new(bounds, SplitMix64::new(seed))
    }
}

impl<R> KnowledgeAgent<R>
where
    R: DeterministicRng,
{
    /// Starts at the start square with one arrow, knowing only that the map border is wall.
    pub fn new(bounds: Bounds, rng: R) -> Self {
        Self {
            bounds,
            store: FactStore::with_perimeter(bounds),
            destination: Destination::new(),
            planner: PathPlanner::new(),
            state: AgentState::default(),
            rng,
        }
    }

    pub fn with_arrows(mut self, arrows: u32) -> Self {
        self.state.arrows = arrows;
        self
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn state(&self) -> &AgentState {
        &self.state
    }

    pub fn store(&self) -> &FactStore {
        &self.store
    }

    /// Direct access to the knowledge base, for seeding scenarios.
    pub fn store_mut(&mut self) -> &mut FactStore {
        &mut self.store
    }

    pub fn destination(&self) -> Option<Cell> {
        self.destination.target()
    }

    /// Every fact, sorted by kind, then row, then column.
    pub fn dump_facts(&self) -> Vec<Fact> {
        self.store.dump()
    }

    /// Record this turn's percepts, run inference and pick an action.
    pub fn decide_action(&mut self, percepts: Percepts) -> Action {
        let here = self.state.position;
        record_percepts(&mut self.store, here, percepts);
        if percepts.contains(Percept::Dead) {
            return Action::Quit;
        }

        let action = self.select_action();
        if let Action::Move(direction) = action {
            self.state.last_move = Some(direction);
        }
        debug!(%here, %action, "decided");
        action
    }

    /// Fold the effects of the last action back into the agent's state and knowledge base.
    pub fn absorb(&mut self, report: &TurnReport) {
        for event in &report.events {
            match *event {
                WorldEvent::Moved { to } => {
                    self.state.position = to;
                    self.state.steps += 1;
                }
                WorldEvent::Bumped { at } => {
                    debug!(wall = %at, heading = ?self.state.last_move, "bumped");
                    self.store.insert(FactKind::Bump, at);
                    self.state.steps += 1;
                }
                WorldEvent::ArrowFired { .. } => {
                    self.state.arrows = self.state.arrows.saturating_sub(1);
                }
                WorldEvent::OutOfArrows => self.state.arrows = 0,
                WorldEvent::Killed { at, creature } => {
                    info!(?creature, cell = %at, "hazard eliminated");
                    self.store.remove(FactKind::Wumpus, at);
                    self.store.remove(FactKind::Supmuw, at);
                    for (_, neighbor) in at.neighbors() {
                        self.store.remove(FactKind::Smell, neighbor);
                    }
                }
                WorldEvent::GoldGrabbed { at } => {
                    self.store.remove(FactKind::Glitter, at);
                    self.state.has_gold = true;
                }
                WorldEvent::NothingToGrab => {
                    self.store.remove(FactKind::Glitter, self.state.position);
                }
                WorldEvent::FoodReceived { .. } => self.state.has_food = true,
                WorldEvent::Died { .. } | WorldEvent::Quit => {}
            }
        }
        self.state.score += report.score_delta;
    }

    pub(crate) fn plan(&mut self, goal: Cell) -> NextStep {
        self.planner
            .next_step(&self.store, self.bounds, self.state.position, goal)
    }
}

impl<R> Policy for KnowledgeAgent<R>
where
    R: DeterministicRng,
{
    fn decide(&mut self, percepts: Percepts) -> Action {
        self.decide_action(percepts)
    }

    fn observe(&mut self, report: &TurnReport) {
        self.absorb(report);
    }
}
