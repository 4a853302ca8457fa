use tracing::info;
use wumpus_core::{Action, Percepts, Policy, TurnReport, WorldMut};

use crate::{Game, GameOutcome};

/// One completed turn.
#[derive(Debug, Clone)]
pub struct Turn {
    pub number: u64,
    /// What the player sensed when deciding.
    pub percepts: Percepts,
    pub action: Action,
    pub report: TurnReport,
}

/// Exclusive owner of one game and its player, driving sense → decide → apply → observe.
pub struct Session<P> {
    game: Game,
    policy: P,
    turn: u64,
    percepts: Percepts,
}

impl<P> Session<P>
where
    P: Policy,
{
    pub fn new(game: Game, policy: P) -> Self {
        let percepts = game.sense();
        Self {
            game,
            policy,
            turn: 0,
            percepts,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Completed turns so far.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// What the player senses before its next decision.
    pub fn percepts(&self) -> Percepts {
        self.percepts
    }

    pub fn into_parts(self) -> (Game, P) {
        (self.game, self.policy)
    }

    /// Play exactly one turn.
    pub fn step(&mut self) -> Turn {
        let percepts = self.percepts;
        let action = self.policy.decide(percepts);
        let report = self.game.apply(action);
        self.policy.observe(&report);
        self.percepts = report.percepts;
        self.turn += 1;

        Turn {
            number: self.turn,
            percepts,
            action,
            report,
        }
    }

    pub fn run(&mut self) -> GameOutcome {
        self.run_with(|_, _| {})
    }

    /// Play until the game is over, handing every finished turn to `observer`.
    pub fn run_with<F>(&mut self, mut observer: F) -> GameOutcome
    where
        F: FnMut(&Game, &Turn),
    {
        loop {
            if let Some(outcome) = self.game.outcome() {
                info!(
                    ?outcome,
                    score = self.game.score(),
                    steps = self.game.steps(),
                    turns = self.turn,
                    "game over"
                );
                return outcome;
            }
            let turn = self.step();
            observer(&self.game, &turn);
        }
    }
}
