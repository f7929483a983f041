use std::fmt::Display;

use crate::{
    track::{Direction, Segment, Turn},
    Error, Position,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartState {
    Rolling,
    Crashed,
}

#[derive(Debug, Clone)]
pub struct Cart {
    pos: Position,
    dir: Direction,
    next_turn: Turn,
    state: CartState,
}

impl Display for Cart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.glyph(), self.pos)
    }
}

impl Cart {
    pub fn new(pos: Position, dir: Direction) -> Self {
        Self {
            pos,
            dir,
            next_turn: Turn::default(),
            state: CartState::Rolling,
        }
    }

    pub fn from_char(pos: Position, c: char) -> Result<Self, Error> {
        Ok(Self::new(pos, Direction::try_from(c)?))
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    pub fn dir(&self) -> Direction {
        self.dir
    }

    pub fn next_turn(&self) -> Turn {
        self.next_turn
    }

    pub fn state(&self) -> CartState {
        self.state
    }

    pub fn is_rolling(&self) -> bool {
        self.state == CartState::Rolling
    }

    pub fn glyph(&self) -> char {
        match self.state {
            CartState::Rolling => self.dir.glyph(),
            CartState::Crashed => 'X',
        }
    }

    pub fn roll(&mut self) -> Result<(), Error> {
        if !self.is_rolling() {
            return Ok(());
        }

        self.pos = self
            .pos
            .neighbor(self.dir)
            .ok_or(Error::CartOffGrid(self.pos, self.dir))?;
        Ok(())
    }

    // Only valid right after a roll that didn't end in a crash.
    pub fn reorient(&mut self, segment: Segment) {
        (self.dir, self.next_turn) = segment.reorient(self.dir, self.next_turn);
    }

    pub fn crash(&mut self) {
        self.state = CartState::Crashed;
    }
}
