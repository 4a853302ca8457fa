use wumpus_core::{Bounds, Cell, DeterministicRng, START};

use crate::{Result, WorldConfig, WorldError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty,
    Wall,
    Pit,
    Wumpus,
    Gold,
    Supmuw,
}

impl Tile {
    pub const fn symbol(self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::Wall => '#',
            Tile::Pit => 'P',
            Tile::Wumpus => 'W',
            Tile::Gold => 'G',
            Tile::Supmuw => 'S',
        }
    }

    /// `@` marks the player and reads as an empty square.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        let tile = match symbol {
            '.' | '@' => Tile::Empty,
            '#' => Tile::Wall,
            'P' => Tile::Pit,
            'W' => Tile::Wumpus,
            'G' => Tile::Gold,
            'S' => Tile::Supmuw,
            _ => return None,
        };
        Some(tile)
    }
}

pub const PLAYER_SYMBOL: char = '@';

/// Ground truth of a game: what occupies every square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    bounds: Bounds,
    tiles: Vec<Tile>,
}

impl Map {
    /// Empty interior surrounded by wall.
    pub fn walled(bounds: Bounds) -> Self {
        let mut map = Self {
            bounds,
            tiles: vec![Tile::Empty; bounds.len()],
        };
        for cell in bounds.perimeter() {
            map.set(cell, Tile::Wall);
        }
        map
    }

    /// Random map: pits, then interior walls, then one Wumpus, one pot of gold and one Supmuw,
    /// each on a free square other than the start.
    pub fn generate<R: DeterministicRng>(config: &WorldConfig, rng: &mut R) -> Result<Self> {
        let mut map = Self::walled(Bounds::square(config.size));
        let area = f64::from(config.size).powi(2);

        let pits = random_count(rng, area * config.pit_ratio);
        for _ in 0..pits {
            map.place_random(rng, Tile::Pit, "pit")?;
        }

        let walls = random_count(rng, area * config.wall_ratio);
        for _ in 0..walls {
            map.place_random(rng, Tile::Wall, "wall")?;
        }

        map.place_random(rng, Tile::Wumpus, "wumpus")?;
        map.place_random(rng, Tile::Gold, "gold")?;
        map.place_random(rng, Tile::Supmuw, "supmuw")?;
        Ok(map)
    }

    /// Build a map from text rows, top row first.
    ///
    /// The map must be rectangular and fully walled, and the start square must be empty.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());
        if width < 3 || height < 3 {
            return Err(WorldError::InvalidLayout(format!(
                "map must be at least 3x3, got {width}x{height}"
            )));
        }

        let bounds = Bounds::new(width as i32, height as i32);
        let mut tiles = Vec::with_capacity(bounds.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != width {
                return Err(WorldError::InvalidLayout(format!(
                    "row {y} has {} columns, expected {width}",
                    row.chars().count()
                )));
            }
            for (x, symbol) in row.chars().enumerate() {
                let tile = Tile::from_symbol(symbol).ok_or_else(|| {
                    WorldError::InvalidLayout(format!("unknown symbol {symbol:?} at ({x}, {y})"))
                })?;
                tiles.push(tile);
            }
        }

        let map = Self { bounds, tiles };
        if let Some(open) = bounds.perimeter().find(|c| map.tile(*c) != Tile::Wall) {
            return Err(WorldError::InvalidLayout(format!(
                "border square {open} is not a wall"
            )));
        }
        if map.tile(START) != Tile::Empty {
            return Err(WorldError::InvalidLayout(format!(
                "start square {START} must be empty"
            )));
        }
        Ok(map)
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Squares off the map read as wall.
    pub fn tile(&self, cell: Cell) -> Tile {
        self.bounds
            .index(cell)
            .map_or(Tile::Wall, |idx| self.tiles[idx])
    }

    pub fn set(&mut self, cell: Cell, tile: Tile) {
        if let Some(idx) = self.bounds.index(cell) {
            self.tiles[idx] = tile;
        }
    }

    pub fn is_wall(&self, cell: Cell) -> bool {
        self.tile(cell) == Tile::Wall
    }

    pub fn find(&self, tile: Tile) -> Option<Cell> {
        self.bounds.cells().find(|c| self.tile(*c) == tile)
    }

    /// Does any orthogonal neighbour of `cell` hold `tile`?
    pub fn adjacent_to(&self, cell: Cell, tile: Tile) -> bool {
        cell.neighbors()
            .into_iter()
            .any(|(_, n)| self.tile(n) == tile)
    }

    /// One line per row, `@` on the player's square.
    pub fn render(&self, player: Option<Cell>) -> String {
        let mut out = String::with_capacity(self.bounds.len() + self.bounds.height as usize);
        for y in 0..self.bounds.height {
            for x in 0..self.bounds.width {
                let cell = Cell::new(x, y);
                if Some(cell) == player {
                    out.push(PLAYER_SYMBOL);
                } else {
                    out.push(self.tile(cell).symbol());
                }
            }
            out.push('\n');
        }
        out
    }

    fn place_random<R: DeterministicRng>(
        &mut self,
        rng: &mut R,
        tile: Tile,
        what: &'static str,
    ) -> Result<Cell> {
        let free: Vec<Cell> = self
            .bounds
            .cells()
            .filter(|c| *c != START && self.tile(*c) == Tile::Empty)
            .collect();
        if free.is_empty() {
            return Err(WorldError::Crowded(what));
        }
        let cell = free[rng.next_index(free.len())];
        self.set(cell, tile);
        Ok(cell)
    }
}

/// `rand % floor(limit) + 1`: at least one, at most `floor(limit)`.
fn random_count<R: DeterministicRng>(rng: &mut R, limit: f64) -> u32 {
    let limit = (limit.floor() as u32).max(1);
    rng.next_below(limit) + 1
}
