//! Terminal output for a game in progress.

use wumpus_core::{Action, Percepts, WorldEvent, START};
use wumpus_world::{Game, GameOutcome, LossReason, Tile, Turn, WorldConfig};

pub fn banner(config: &WorldConfig) {
    let s = &config.scoring;
    println!("Wum+");
    println!("Scoring:");
    println!(" Move ({}), Death ({}), Shoot ({})", s.movement, s.death, s.shoot);
    println!(" Food ({}), Gold ({}), Kill ({})", s.food, s.gold, s.kill);
    println!("Available Percepts: [Bump,Smell,Breeze,Moo,Glitter,Dead]");
    println!(
        "Losing Conditions: Score < {} or Steps > {} or Dead",
        config.min_score, config.max_steps
    );
    println!("Winning Conditions: Gold and Player in starting position {START}.");
    println!();
}

pub fn map(game: &Game) {
    println!("{}", game.map().render(Some(game.position())));
}

pub fn status(game: &Game, percepts: Percepts) {
    println!("Percepts: {percepts}");
    println!(
        "Score: {:5}\tSteps Taken: {:3}/{}",
        game.score(),
        game.steps(),
        game.max_steps()
    );
}

/// Describe what a turn did, one line per event.
pub fn narrate(game: &Game, turn: &Turn) {
    for event in &turn.report.events {
        match *event {
            WorldEvent::Moved { to } => {
                if let Action::Move(direction) = turn.action {
                    println!("Moving {} {to}", direction.name());
                }
            }
            WorldEvent::Bumped { .. } => println!("You bumped into a wall!"),
            WorldEvent::ArrowFired { direction } => println!("Shooting {}", direction.name()),
            WorldEvent::OutOfArrows => println!("You are out of arrows!"),
            WorldEvent::Killed { .. } => {
                println!("You hear a deafening scream as you slay the beast.")
            }
            WorldEvent::GoldGrabbed { .. } => println!("You have found gold!"),
            WorldEvent::NothingToGrab => println!("There is nothing here to grab."),
            WorldEvent::FoodReceived { .. } => println!("The supmuw has gifted food to you!"),
            WorldEvent::Died { at } => {
                if game.map().tile(at) == Tile::Pit {
                    println!("You have fallen into a pit!");
                } else {
                    println!("You have been consumed by the beast!");
                }
            }
            WorldEvent::Quit => {}
        }
    }
}

pub fn final_analysis(game: &Game, outcome: GameOutcome) {
    println!();
    println!("Final Analysis of gameplay");
    map(game);
    status(game, game.sense());
    match outcome {
        GameOutcome::Won => println!("You have won, the plantation is saved. Glory! Glory!"),
        GameOutcome::Lost(LossReason::Died) => {
            println!("Apparently you are not a winner. That would make you a loser.");
            println!("You have died. Indiana Jones would be ashamed.");
        }
        GameOutcome::Lost(_) => {
            println!("Apparently you are not a winner. That would make you a loser.")
        }
        GameOutcome::Quit => println!("You gave up."),
    }
}
