use std::{collections::HashMap, fmt::Display};

use log::{debug, info, trace};

use crate::{
    cart::Cart,
    grid::{Grid, GridBuilder},
    Error, Position,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopPolicy {
    FirstCrash,
    LastCart,
}

#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    carts: Vec<Cart>,
    policy: StopPolicy,
    tick_n: usize,
}

impl Display for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut cart_glyphs = HashMap::new();
        for cart in &self.carts {
            if cart.is_rolling() {
                cart_glyphs.insert(cart.pos(), cart.glyph());
            } else {
                cart_glyphs.entry(cart.pos()).or_insert(cart.glyph());
            }
        }

        for y in 0..self.grid.row_n() {
            for x in 0..self.grid.col_n() {
                let pos = Position::new(x, y);
                if let Some(glyph) = cart_glyphs.get(&pos) {
                    write!(f, "{}", glyph)?;
                } else if let Some(segment) = self.grid.segment(&pos) {
                    write!(f, "{}", segment)?;
                } else {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl Simulation {
    pub fn new<I, S>(lines: I, policy: StopPolicy) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GridBuilder::new();
        for line in lines {
            builder.add_row(line.as_ref())?;
        }
        let (grid, carts) = builder.build();

        Ok(Self::with_carts(grid, carts, policy))
    }

    pub fn with_carts(grid: Grid, carts: Vec<Cart>, policy: StopPolicy) -> Self {
        Self {
            grid,
            carts,
            policy,
            tick_n: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn carts(&self) -> &[Cart] {
        &self.carts
    }

    pub fn policy(&self) -> StopPolicy {
        self.policy
    }

    // A tick that fails with an error isn't counted.
    pub fn tick_count(&self) -> usize {
        self.tick_n
    }

    pub fn rolling_count(&self) -> usize {
        self.carts.iter().filter(|c| c.is_rolling()).count()
    }

    // Indices of rolling carts, top row first and left to right within a row.
    pub fn tick_order(&self) -> Vec<usize> {
        let mut order = (0..self.carts.len())
            .filter(|ind| self.carts[*ind].is_rolling())
            .collect::<Vec<_>>();
        order.sort_by_key(|ind| self.carts[*ind].pos());
        order
    }

    pub fn tick(&mut self) -> Result<Option<Position>, Error> {
        // Frozen for the whole tick, even though carts move while it's walked.
        let order = self.tick_order();
        if order.is_empty() {
            return Err(Error::NoRollingCarts);
        }

        let tick_n = self.tick_n + 1;
        debug!("Tick #{}: {} rolling cart(s).", tick_n, order.len());
        let result = self.roll_carts(&order, tick_n)?;
        self.tick_n = tick_n;
        Ok(result)
    }

    fn roll_carts(&mut self, order: &[usize], tick_n: usize) -> Result<Option<Position>, Error> {
        for &ind in order {
            if !self.carts[ind].is_rolling() {
                continue;
            }

            let cart = &mut self.carts[ind];
            let from_pos = cart.pos();
            cart.roll()?;
            let pos = cart.pos();
            trace!("Cart #{} rolled from {} to {}.", ind, from_pos, pos);

            if self.policy == StopPolicy::LastCart && self.rolling_count() <= 1 {
                info!(
                    "Only cart #{} is still rolling at {} in tick #{}.",
                    ind, pos, tick_n
                );
                return Ok(Some(pos));
            }

            if self
                .carts
                .iter()
                .enumerate()
                .any(|(other, c)| other != ind && c.is_rolling() && c.pos() == pos)
            {
                let crashed_n = self.clear_debris(&pos);
                info!("{} cart(s) crashed at {} in tick #{}.", crashed_n, pos, tick_n);
                if self.policy == StopPolicy::FirstCrash {
                    return Ok(Some(pos));
                }

                continue;
            }

            let segment = self.grid.segment(&pos).ok_or(Error::CartDerailed(pos))?;
            self.carts[ind].reorient(segment);
        }

        Ok(None)
    }

    pub fn run(&mut self, max_ticks: Option<usize>) -> Result<Position, Error> {
        loop {
            if let Some(limit) = max_ticks {
                if self.tick_n >= limit {
                    return Err(Error::TickLimitReached(limit));
                }
            }

            if let Some(pos) = self.tick()? {
                return Ok(pos);
            }
        }
    }

    // Every cart at the impact position crashes, not just the two involved.
    fn clear_debris(&mut self, pos: &Position) -> usize {
        let mut crashed_n = 0;
        for cart in self.carts.iter_mut().filter(|c| c.pos() == *pos) {
            if cart.is_rolling() {
                crashed_n += 1;
            }
            cart.crash();
        }

        crashed_n
    }
}
