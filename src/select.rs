/*
 * Copyright (c) 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Cell selection strategies.
//!
//! The three methods differ only in the way the next cell to be filled
//! is chosen. Each strategy implements [`CellSelector`] and is driven by
//! [`run`](crate::engine::run).
//!
//! Ties are always broken by scan order: rows before columns and lower
//! indices before higher ones.

pub mod lcm;
pub mod nwc;
pub mod vogel;

pub use self::lcm::LeastCost;
pub use self::nwc::NorthWestCorner;
pub use self::vogel::Vogel;

use crate::engine::Method;
use crate::problem::Problem;
use crate::state::AllocationState;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A route from a source to a destination.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Cell {
    /// The source (row) index.
    pub src: usize,
    /// The destination (column) index.
    pub snk: usize,
}

impl Cell {
    pub fn new(src: usize, snk: usize) -> Self {
        Cell { src, snk }
    }
}

/// A row or a column of the cost matrix.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Line {
    Row(usize),
    Col(usize),
}

/// The reason a cell has been selected.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Rule<T> {
    /// The current position of the north-west corner cursor.
    Corner,
    /// The cheapest open cell with the given unit cost.
    LeastCost { cost: T },
    /// Leftover supply moved to the dummy destination.
    DummyFill,
    /// The cheapest open cell in the line with the greatest penalty.
    Penalty { line: Line, penalty: T },
}

/// A selected cell together with the rule that selected it.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Selection<T> {
    pub cell: Cell,
    pub rule: Rule<T>,
}

/// A strategy choosing the next cell to be filled.
pub trait CellSelector<T> {
    /// The method implemented by this selector.
    fn method(&self) -> Method;

    /// Return the next cell to be filled.
    ///
    /// `state` contains the quantities remaining after all previous
    /// allocations. Returns `None` if this strategy cannot select any
    /// further cell.
    fn next(&mut self, problem: &Problem<T>, state: &AllocationState<T>) -> Option<Selection<T>>;
}

impl<'a, T, S> CellSelector<T> for &'a mut S
where
    S: CellSelector<T> + ?Sized,
{
    fn method(&self) -> Method {
        (**self).method()
    }

    fn next(&mut self, problem: &Problem<T>, state: &AllocationState<T>) -> Option<Selection<T>> {
        (**self).next(problem, state)
    }
}

impl<T, S> CellSelector<T> for Box<S>
where
    S: CellSelector<T> + ?Sized,
{
    fn method(&self) -> Method {
        (**self).method()
    }

    fn next(&mut self, problem: &Problem<T>, state: &AllocationState<T>) -> Option<Selection<T>> {
        (**self).next(problem, state)
    }
}
