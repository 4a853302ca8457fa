use std::io::{BufRead, Write};

use tracing::warn;
use wumpus_core::{Action, Percepts, Policy};

const HELP: &str = "\
Commands:
  n/k  move north      N  shoot north
  s/j  move south      S  shoot south
  e/l  move east       E  shoot east
  w/h  move west       W  shoot west
  g    grab            q  quit
  ?    this help";

/// A player typing one command per turn.
pub struct HumanPolicy<I, O> {
    input: I,
    output: O,
}

impl<I, O> HumanPolicy<I, O>
where
    I: BufRead,
    O: Write,
{
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Prompt until a known command arrives. End of input quits.
    fn next_action(&mut self) -> std::io::Result<Action> {
        let mut line = String::new();
        loop {
            write!(self.output, "Enter a Command (?): ")?;
            self.output.flush()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(Action::Quit);
            }
            let Some(key) = line.trim().chars().next() else {
                continue;
            };
            if key == '?' {
                writeln!(self.output, "{HELP}")?;
                continue;
            }
            match Action::from_command(key) {
                Some(action) => return Ok(action),
                None => writeln!(self.output, "Do what now? (Unknown action {key:?})")?,
            }
        }
    }
}

impl<I, O> Policy for HumanPolicy<I, O>
where
    I: BufRead,
    O: Write,
{
    fn decide(&mut self, _percepts: Percepts) -> Action {
        self.next_action().unwrap_or_else(|err| {
            warn!(error = %err, "terminal unavailable, quitting");
            Action::Quit
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use wumpus_core::Direction;

    fn policy(input: &str) -> HumanPolicy<Cursor<Vec<u8>>, Vec<u8>> {
        HumanPolicy::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn reads_one_command_per_turn() {
        let mut player = policy("e\nN\ng\n");
        assert_eq!(player.decide(Percepts::NONE), Action::Move(Direction::East));
        assert_eq!(player.decide(Percepts::NONE), Action::Shoot(Direction::North));
        assert_eq!(player.decide(Percepts::NONE), Action::Grab);
    }

    #[test]
    fn help_and_unknown_keys_prompt_again() {
        let mut player = policy("?\nx\n\nj\n");
        assert_eq!(player.decide(Percepts::NONE), Action::Move(Direction::South));

        let shown = String::from_utf8(player.output.clone()).expect("utf8");
        assert!(shown.contains("Commands:"));
        assert!(shown.contains("Do what now?"));
        assert_eq!(shown.matches("Enter a Command").count(), 4);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn unwritable_terminal_quits() {
        let mut player = HumanPolicy::new(Cursor::new(b"e\n".to_vec()), BrokenPipe);
        assert_eq!(player.decide(Percepts::NONE), Action::Quit);
    }

    #[test]
    fn end_of_input_quits() {
        let mut player = policy("");
        assert_eq!(player.decide(Percepts::NONE), Action::Quit);
    }
}
