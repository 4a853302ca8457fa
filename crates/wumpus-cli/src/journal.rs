//! Turn journal: one JSON line per turn, for replaying or analysing a game afterwards.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use wumpus_core::{Action, Cell, Percepts, WorldEvent};
use wumpus_world::{Game, Turn};

#[derive(Debug, Serialize)]
pub struct TurnRecord<'a> {
    pub timestamp: DateTime<Utc>,
    pub seed: u64,
    pub turn: u64,
    pub sensed: Percepts,
    pub action: Action,
    pub events: &'a [WorldEvent],
    pub position: Cell,
    pub score: i32,
    pub steps: u32,
}

pub struct Journal {
    path: PathBuf,
    file: File,
    seed: u64,
}

impl Journal {
    /// Open `path` for appending, creating parent directories as needed.
    pub fn open(path: &Path, seed: u64) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open journal {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
            seed,
        })
    }

    pub fn record(&mut self, game: &Game, turn: &Turn) -> Result<()> {
        let record = TurnRecord {
            timestamp: Utc::now(),
            seed: self.seed,
            turn: turn.number,
            sensed: turn.percepts,
            action: turn.action,
            events: &turn.report.events,
            position: game.position(),
            score: game.score(),
            steps: game.steps(),
        };
        let line = serde_json::to_string(&record)?;
        writeln!(self.file, "{}", line)
            .with_context(|| format!("Failed to write journal {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wumpus_core::{Direction, Policy};
    use wumpus_world::{Map, Session, WorldConfig};

    struct WalkEast;

    impl Policy for WalkEast {
        fn decide(&mut self, _percepts: Percepts) -> Action {
            Action::Move(Direction::East)
        }
    }

    #[test]
    fn journal_appends_one_json_line_per_turn() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("runs/game.jsonl");

        let map = Map::parse(&["#####", "#...#", "#...#", "#####"]).expect("layout");
        let game = Game::new(map, &WorldConfig::default());
        let mut session = Session::new(game, WalkEast);
        let mut journal = Journal::open(&path, 9).expect("open");

        for _ in 0..3 {
            let turn = session.step();
            journal.record(session.game(), &turn).expect("record");
        }

        let content = std::fs::read_to_string(&path).expect("read");
        let lines: Vec<serde_json::Value> = content
            .lines()
            .map(|l| serde_json::from_str(l).expect("json"))
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["turn"], 1);
        assert_eq!(lines[0]["seed"], 9);
        assert_eq!(lines[2]["position"]["x"], 3);
        assert!(lines[2]["events"][0].get("Bumped").is_some());
    }
}
