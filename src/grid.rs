use std::fmt::Display;

use crate::{cart::Cart, track::Segment, Error, Position};

#[derive(Debug, Clone)]
pub struct Grid {
    segments: Vec<Option<Segment>>,
    row_n: usize,
    col_n: usize,
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.row_n {
            for x in 0..self.col_n {
                match self.segment(&Position::new(x, y)) {
                    Some(segment) => write!(f, "{}", segment)?,
                    None => write!(f, " ")?,
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl Grid {
    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn segment(&self, pos: &Position) -> Option<Segment> {
        self.pos_to_ind(pos).and_then(|ind| self.segments[ind])
    }

    fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if pos.y < self.row_n && pos.x < self.col_n {
            Some(pos.y * self.col_n + pos.x)
        } else {
            None
        }
    }
}

pub struct GridBuilder {
    rows: Vec<Vec<Option<Segment>>>,
    col_n: usize,
    carts: Vec<Cart>,
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GridBuilder {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            col_n: 0,
            carts: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row_text: &str) -> Result<(), Error> {
        let y = self.rows.len();
        let mut row = Vec::with_capacity(row_text.len());
        for (x, c) in row_text.chars().enumerate() {
            let pos = Position::new(x, y);
            let segment = match c {
                ' ' => None,
                '^' | 'v' | '<' | '>' => {
                    let cart = Cart::from_char(pos, c)?;
                    let segment = Segment::under(cart.dir());
                    self.carts.push(cart);
                    Some(segment)
                }
                other => Some(
                    Segment::from_char(other).ok_or(Error::InvalidTrackChar(other, pos))?,
                ),
            };
            row.push(segment);
        }

        self.col_n = self.col_n.max(row.len());
        self.rows.push(row);
        Ok(())
    }

    // Shorter rows are padded with empty cells up to the widest one.
    pub fn build(self) -> (Grid, Vec<Cart>) {
        let row_n = self.rows.len();
        let col_n = self.col_n;
        let mut segments = Vec::with_capacity(row_n * col_n);
        for mut row in self.rows {
            row.resize(col_n, None);
            segments.extend(row);
        }

        (
            Grid {
                segments,
                row_n,
                col_n,
            },
            self.carts,
        )
    }
}
