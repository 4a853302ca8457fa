use wumpus_core::{
    Action, Cell, Creature, Direction, Percept, Percepts, WorldEvent, WorldMut, WorldView, START,
};
use wumpus_world::{Game, GameOutcome, LossReason, Map, WorldConfig};

fn game(rows: &[&str]) -> Game {
    game_with(rows, &WorldConfig::default())
}

fn game_with(rows: &[&str], config: &WorldConfig) -> Game {
    Game::new(Map::parse(rows).expect("layout"), config)
}

fn percepts(list: &[Percept]) -> Percepts {
    list.iter().copied().collect()
}

#[test]
fn percepts_describe_the_neighbourhood() {
    let game = game(&["######", "#.P..#", "#W.G.#", "######"]);

    assert_eq!(game.sense(), percepts(&[Percept::Smell, Percept::Breeze]));
    assert_eq!(game.percepts_at(Cell::new(3, 2)), percepts(&[Percept::Glitter]));
    assert_eq!(
        game.percepts_at(Cell::new(2, 1)),
        percepts(&[Percept::Dead])
    );
}

#[test]
fn bump_costs_a_move_and_is_sensed_once() {
    let mut game = game(&["####", "#..#", "####"]);

    let report = game.apply(Action::Move(Direction::North));
    assert_eq!(report.events, vec![WorldEvent::Bumped { at: Cell::new(1, 0) }]);
    assert_eq!(report.score_delta, -1);
    assert!(report.percepts.contains(Percept::Bump));
    assert_eq!(game.position(), START);
    assert_eq!(game.steps(), 1);

    let report = game.apply(Action::Move(Direction::East));
    assert_eq!(report.events, vec![WorldEvent::Moved { to: Cell::new(2, 1) }]);
    assert!(!report.percepts.contains(Percept::Bump));
    assert_eq!(game.score(), -2);
}

#[test]
fn walking_into_a_pit_is_fatal() {
    let mut game = game(&["#####", "#.P.#", "#...#", "#####"]);

    let report = game.apply(Action::Move(Direction::East));

    assert!(report.events.contains(&WorldEvent::Died { at: Cell::new(2, 1) }));
    assert!(report.percepts.contains(Percept::Dead));
    assert!(game.is_dead());
    assert_eq!(game.score(), -1001);
    assert_eq!(game.outcome(), Some(GameOutcome::Lost(LossReason::Died)));
}

#[test]
fn shooting_the_wumpus_clears_the_smell() {
    let mut game = game(&["#####", "#.W.#", "#...#", "#####"]);
    assert!(game.sense().contains(Percept::Smell));

    let report = game.apply(Action::Shoot(Direction::East));
    assert_eq!(
        report.events,
        vec![
            WorldEvent::ArrowFired { direction: Direction::East },
            WorldEvent::Killed { at: Cell::new(2, 1), creature: Creature::Wumpus },
        ]
    );
    assert_eq!(game.score(), 490);
    assert_eq!(game.arrows(), 0);
    assert!(!report.percepts.contains(Percept::Smell));

    let report = game.apply(Action::Shoot(Direction::East));
    assert_eq!(report.events, vec![WorldEvent::OutOfArrows]);
    assert_eq!(game.score(), 490);
}

#[test]
fn a_missed_shot_still_costs() {
    let mut game = game(&["#####", "#.W.#", "#...#", "#####"]);

    let report = game.apply(Action::Shoot(Direction::South));
    assert_eq!(report.events, vec![WorldEvent::ArrowFired { direction: Direction::South }]);
    assert_eq!(game.score(), -10);
    assert_eq!(game.steps(), 0);
}

#[test]
fn grab_gold_and_return_to_win() {
    let mut game = game(&["####", "#.G#", "####"]);

    let report = game.apply(Action::Grab);
    assert_eq!(report.events, vec![WorldEvent::NothingToGrab]);
    assert_eq!(report.score_delta, 0);

    game.apply(Action::Move(Direction::East));
    assert!(game.sense().contains(Percept::Glitter));
    let report = game.apply(Action::Grab);
    assert_eq!(report.events, vec![WorldEvent::GoldGrabbed { at: Cell::new(2, 1) }]);
    assert!(game.has_gold());
    assert!(!game.is_over());

    game.apply(Action::Move(Direction::West));
    assert!(game.has_won());
    assert_eq!(game.outcome(), Some(GameOutcome::Won));
    assert_eq!(game.score(), 998);
}

#[test]
fn friendly_supmuw_gifts_food_once() {
    let mut game = game(&["######", "#.S..#", "#....#", "######"]);
    assert_eq!(game.sense(), percepts(&[Percept::Moo]));

    let report = game.apply(Action::Move(Direction::East));
    assert!(report.events.contains(&WorldEvent::FoodReceived { at: Cell::new(2, 1) }));
    assert!(game.has_food());
    assert!(!game.is_dead());
    assert_eq!(game.score(), 99);

    game.apply(Action::Move(Direction::East));
    let report = game.apply(Action::Move(Direction::West));
    assert!(!report.events.iter().any(|e| matches!(e, WorldEvent::FoodReceived { .. })));
}

#[test]
fn supmuw_next_to_the_wumpus_is_deadly_and_smells() {
    let mut game = game(&["######", "#.SW.#", "#....#", "######"]);
    assert!(game.supmuw_neighbors_wumpus());
    assert_eq!(game.sense(), percepts(&[Percept::Smell, Percept::Moo]));

    let report = game.apply(Action::Move(Direction::East));
    assert!(game.is_dead());
    assert!(!game.has_food());
    assert!(!report.events.iter().any(|e| matches!(e, WorldEvent::FoodReceived { .. })));
}

#[test]
fn killing_the_wumpus_calms_the_supmuw() {
    let mut game = game(&["######", "#....#", "#.SW.#", "#....#", "######"]);
    assert!(game.supmuw_neighbors_wumpus());

    game.apply(Action::Move(Direction::East));
    game.apply(Action::Move(Direction::East));
    let report = game.apply(Action::Shoot(Direction::South));
    assert!(report.events.contains(&WorldEvent::Killed {
        at: Cell::new(3, 2),
        creature: Creature::Wumpus
    }));
    assert!(!game.supmuw_neighbors_wumpus());

    game.apply(Action::Move(Direction::West));
    let report = game.apply(Action::Move(Direction::South));
    assert!(!game.is_dead());
    assert!(report.events.contains(&WorldEvent::FoodReceived { at: Cell::new(2, 2) }));
}

#[test]
fn score_floor_loses_the_game() {
    let config = WorldConfig {
        min_score: -2,
        ..WorldConfig::default()
    };
    let mut game = game_with(&["####", "#..#", "####"], &config);

    game.apply(Action::Move(Direction::North));
    game.apply(Action::Move(Direction::North));
    assert!(!game.has_lost());
    game.apply(Action::Move(Direction::North));
    assert_eq!(game.outcome(), Some(GameOutcome::Lost(LossReason::ScoreTooLow)));
}

#[test]
fn step_limit_loses_the_game() {
    let config = WorldConfig {
        max_steps: 2,
        ..WorldConfig::default()
    };
    let mut game = game_with(&["####", "#..#", "####"], &config);

    game.apply(Action::Move(Direction::East));
    game.apply(Action::Move(Direction::West));
    assert!(!game.is_over());
    game.apply(Action::Move(Direction::East));
    assert_eq!(game.outcome(), Some(GameOutcome::Lost(LossReason::OutOfSteps)));
}

#[test]
fn actions_after_the_end_are_ignored() {
    let mut game = game(&["####", "#..#", "####"]);

    let report = game.apply(Action::Quit);
    assert_eq!(report.events, vec![WorldEvent::Quit]);
    assert_eq!(game.outcome(), Some(GameOutcome::Quit));

    let report = game.apply(Action::Move(Direction::East));
    assert!(report.events.is_empty());
    assert_eq!(game.position(), START);
    assert_eq!(game.steps(), 0);
}
