use std::fmt::Display;

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl TryFrom<char> for Direction {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '^' => Ok(Direction::Up),
            '>' => Ok(Direction::Right),
            'v' => Ok(Direction::Down),
            '<' => Ok(Direction::Left),
            other => Err(Error::InvalidCartChar(other)),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl Direction {
    pub fn glyph(&self) -> char {
        match self {
            Direction::Up => '^',
            Direction::Right => '>',
            Direction::Down => 'v',
            Direction::Left => '<',
        }
    }

    pub fn turn(&self, turn: Turn) -> Self {
        match turn {
            Turn::Left => match self {
                Direction::Up => Direction::Left,
                Direction::Left => Direction::Down,
                Direction::Down => Direction::Right,
                Direction::Right => Direction::Up,
            },
            Turn::Straight => *self,
            Turn::Right => match self {
                Direction::Up => Direction::Right,
                Direction::Right => Direction::Down,
                Direction::Down => Direction::Left,
                Direction::Left => Direction::Up,
            },
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Turn {
    #[default]
    Left,
    Straight,
    Right,
}

impl Turn {
    pub fn next(&self) -> Self {
        match self {
            Turn::Left => Turn::Straight,
            Turn::Straight => Turn::Right,
            Turn::Right => Turn::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Vertical,
    Horizontal,
    CurveBackslash,
    CurveSlash,
    Junction,
}

impl Segment {
    // Track hidden under a cart's start glyph.
    pub fn under(dir: Direction) -> Self {
        if dir.is_vertical() {
            Segment::Vertical
        } else {
            Segment::Horizontal
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '|' => Some(Segment::Vertical),
            '-' => Some(Segment::Horizontal),
            '\\' => Some(Segment::CurveBackslash),
            '/' => Some(Segment::CurveSlash),
            '+' => Some(Segment::Junction),
            _ => None,
        }
    }

    pub fn reorient(&self, dir: Direction, turn: Turn) -> (Direction, Turn) {
        match self {
            Segment::Vertical | Segment::Horizontal => (dir, turn),
            Segment::CurveBackslash => {
                let new_dir = match dir {
                    Direction::Up => Direction::Left,
                    Direction::Left => Direction::Up,
                    Direction::Down => Direction::Right,
                    Direction::Right => Direction::Down,
                };
                (new_dir, turn)
            }
            Segment::CurveSlash => {
                let new_dir = match dir {
                    Direction::Up => Direction::Right,
                    Direction::Right => Direction::Up,
                    Direction::Down => Direction::Left,
                    Direction::Left => Direction::Down,
                };
                (new_dir, turn)
            }
            Segment::Junction => (dir.turn(turn), turn.next()),
        }
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let seg_char = match self {
            Segment::Vertical => '|',
            Segment::Horizontal => '-',
            Segment::CurveBackslash => '\\',
            Segment::CurveSlash => '/',
            Segment::Junction => '+',
        };

        write!(f, "{}", seg_char)
    }
}
