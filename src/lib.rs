pub mod cart;
pub mod grid;
pub mod sim;
pub mod track;

use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

pub use cart::{Cart, CartState};
pub use grid::{Grid, GridBuilder};
pub use sim::{Simulation, StopPolicy};
pub use track::{Direction, Segment, Turn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidTrackChar(char, Position),
    InvalidCartChar(char),
    CartDerailed(Position),
    CartOffGrid(Position, Direction),
    NoRollingCarts,
    TickLimitReached(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidTrackChar(c, pos) => {
                write!(f, "Invalid character({}) for track at {}.", c, pos)
            }
            Error::InvalidCartChar(c) => write!(
                f,
                "Invalid character({}) for cart, expect one of '^', 'v', '<' and '>'.",
                c
            ),
            Error::CartDerailed(pos) => write!(
                f,
                "Cart rolled onto {}, but there isn't any track segment there.",
                pos
            ),
            Error::CartOffGrid(pos, dir) => write!(
                f,
                "Cart at {} can't move {:?}, it would leave the track grid.",
                pos, dir
            ),
            Error::NoRollingCarts => write!(
                f,
                "There's no rolling cart left on the track, simulation can't give any result."
            ),
            Error::TickLimitReached(tick_n) => {
                write!(f, "Simulation gave no result within {} tick(s).", tick_n)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    #[arg(help = "Tick limit, carts that never meet roll forever without it")]
    pub max_ticks: Option<usize>,
    #[arg(long)]
    pub show_track: bool,
}

// x is the column, y is the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::Up if self.y > 0 => Some(Self::new(self.x, self.y - 1)),
            Direction::Down => Some(Self::new(self.x, self.y + 1)),
            Direction::Left if self.x > 0 => Some(Self::new(self.x - 1, self.y)),
            Direction::Right => Some(Self::new(self.x + 1, self.y)),
            _ => None,
        }
    }
}

// Reading order: top row first, left to right in each row.
impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.y != other.y {
            self.y.cmp(&other.y)
        } else {
            self.x.cmp(&other.x)
        }
    }
}

pub fn read_track<P: AsRef<Path>>(path: P, policy: StopPolicy) -> Result<Simulation> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} from given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.is_empty() {
            continue;
        }

        lines.push(line);
    }

    Ok(Simulation::new(&lines, policy)?)
}
