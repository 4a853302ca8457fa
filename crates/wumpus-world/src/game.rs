use tracing::info;
use wumpus_core::rng::WORLD_STREAM;
use wumpus_core::{
    Action, Bounds, Cell, Creature, Direction, Percept, Percepts, SplitMix64, TurnReport,
    WorldEvent, WorldMut, WorldView, START,
};

use crate::{Map, Result, ScoreTable, Tile, WorldConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossReason {
    Died,
    ScoreTooLow,
    OutOfSteps,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    Lost(LossReason),
    Quit,
}

/// One running game: the map plus everything that changes while playing it.
#[derive(Debug, Clone)]
pub struct Game {
    map: Map,
    scoring: ScoreTable,
    max_steps: u32,
    min_score: i32,
    position: Cell,
    arrows: u32,
    has_food: bool,
    has_gold: bool,
    score: i32,
    steps: u32,
    /// A Supmuw next to the Wumpus is deadly and smells like it.
    supmuw_neighbors_wumpus: bool,
    bumped: bool,
    dead: bool,
    quit: bool,
}

impl Game {
    pub fn new(map: Map, config: &WorldConfig) -> Self {
        let supmuw_neighbors_wumpus = map
            .find(Tile::Supmuw)
            .is_some_and(|supmuw| map.adjacent_to(supmuw, Tile::Wumpus));
        Self {
            map,
            scoring: config.scoring,
            max_steps: config.max_steps,
            min_score: config.min_score,
            position: START,
            arrows: config.arrows,
            has_food: false,
            has_gold: false,
            score: 0,
            steps: 0,
            supmuw_neighbors_wumpus,
            bumped: false,
            dead: false,
            quit: false,
        }
    }

    /// The configured fixed layout, or a map generated from `seed`. The config is validated first.
    pub fn from_config(config: &WorldConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let map = match &config.layout {
            Some(rows) => Map::parse(rows)?,
            None => Map::generate(config, &mut SplitMix64::for_stream(seed, WORLD_STREAM))?,
        };
        Ok(Self::new(map, config))
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn arrows(&self) -> u32 {
        self.arrows
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }

    pub fn has_gold(&self) -> bool {
        self.has_gold
    }

    pub fn has_food(&self) -> bool {
        self.has_food
    }

    pub fn supmuw_neighbors_wumpus(&self) -> bool {
        self.supmuw_neighbors_wumpus
    }

    /// Percepts on the player's square right now.
    pub fn sense(&self) -> Percepts {
        let mut percepts = self.percepts_at(self.position);
        if self.bumped {
            percepts.insert(Percept::Bump);
        }
        percepts
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn has_won(&self) -> bool {
        self.has_gold && self.position == START
    }

    pub fn has_lost(&self) -> bool {
        self.loss_reason().is_some()
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.has_won() {
            return Some(GameOutcome::Won);
        }
        if let Some(reason) = self.loss_reason() {
            return Some(GameOutcome::Lost(reason));
        }
        self.quit.then_some(GameOutcome::Quit)
    }

    fn loss_reason(&self) -> Option<LossReason> {
        if self.dead {
            Some(LossReason::Died)
        } else if self.score < self.min_score {
            Some(LossReason::ScoreTooLow)
        } else if self.steps > self.max_steps {
            Some(LossReason::OutOfSteps)
        } else {
            None
        }
    }

    fn is_deadly(&self, cell: Cell) -> bool {
        match self.map.tile(cell) {
            Tile::Pit | Tile::Wumpus => true,
            Tile::Supmuw => self.supmuw_neighbors_wumpus,
            _ => false,
        }
    }

    fn move_player(&mut self, direction: Direction, report: &mut TurnReport) {
        self.steps += 1;
        let target = self.position.step(direction);

        if self.map.is_wall(target) {
            self.bumped = true;
            report.push(WorldEvent::Bumped { at: target }, self.scoring.movement);
            return;
        }

        report.push(WorldEvent::Moved { to: target }, self.scoring.movement);
        if self.map.tile(target) == Tile::Supmuw && !self.has_food && !self.supmuw_neighbors_wumpus {
            self.has_food = true;
            info!(cell = %target, "the supmuw has gifted food");
            report.push(WorldEvent::FoodReceived { at: target }, self.scoring.food);
        }
        self.position = target;

        if self.is_deadly(target) {
            self.dead = true;
            info!(cell = %target, tile = ?self.map.tile(target), "player died");
            report.push(WorldEvent::Died { at: target }, self.scoring.death);
        }
    }

    fn shoot(&mut self, direction: Direction, report: &mut TurnReport) {
        if self.arrows == 0 {
            report.push(WorldEvent::OutOfArrows, 0);
            return;
        }

        self.arrows -= 1;
        report.push(WorldEvent::ArrowFired { direction }, self.scoring.shoot);

        let target = self.position.step(direction);
        let creature = match self.map.tile(target) {
            Tile::Wumpus => Creature::Wumpus,
            Tile::Supmuw => Creature::Supmuw,
            _ => return,
        };
        self.map.set(target, Tile::Empty);
        // Whichever one died, the two are no longer neighbours.
        self.supmuw_neighbors_wumpus = false;
        info!(?creature, cell = %target, "beast slain");
        report.push(WorldEvent::Killed { at: target, creature }, self.scoring.kill);
    }

    fn grab(&mut self, report: &mut TurnReport) {
        if self.map.tile(self.position) != Tile::Gold {
            report.push(WorldEvent::NothingToGrab, 0);
            return;
        }
        self.map.set(self.position, Tile::Empty);
        self.has_gold = true;
        info!(cell = %self.position, "gold found");
        report.push(WorldEvent::GoldGrabbed { at: self.position }, self.scoring.gold);
    }
}

impl WorldView for Game {
    fn bounds(&self) -> Bounds {
        self.map.bounds()
    }

    fn percepts_at(&self, cell: Cell) -> Percepts {
        let mut percepts = Percepts::NONE;
        if self.is_deadly(cell) {
            percepts.insert(Percept::Dead);
        }
        if self.map.adjacent_to(cell, Tile::Wumpus) {
            percepts.insert(Percept::Smell);
        }
        if self.map.adjacent_to(cell, Tile::Pit) {
            percepts.insert(Percept::Breeze);
        }
        if self.map.adjacent_to(cell, Tile::Supmuw) {
            percepts.insert(Percept::Moo);
            if self.supmuw_neighbors_wumpus {
                percepts.insert(Percept::Smell);
            }
        }
        if self.map.tile(cell) == Tile::Gold {
            percepts.insert(Percept::Glitter);
        }
        percepts
    }
}

impl WorldMut for Game {
    /// Apply one action. Once the game is over, actions are ignored.
    fn apply(&mut self, action: Action) -> TurnReport {
        let mut report = TurnReport::default();
        if self.is_over() {
            report.percepts = self.sense();
            return report;
        }

        self.bumped = false;
        match action {
            Action::Move(direction) => self.move_player(direction, &mut report),
            Action::Shoot(direction) => self.shoot(direction, &mut report),
            Action::Grab => self.grab(&mut report),
            Action::Quit => {
                self.quit = true;
                report.push(WorldEvent::Quit, 0);
            }
        }

        self.score += report.score_delta;
        report.percepts = self.sense();
        report
    }
}
