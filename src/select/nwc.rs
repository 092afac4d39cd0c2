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

//! The north-west corner rule.
//!
//! A cursor starts in the upper left cell. After each allocation it
//! moves down if the current source is exhausted and right if the
//! current destination is exhausted. If both are exhausted it moves
//! right, unless it is already in the last column. Costs are never
//! looked at.

use super::{Cell, CellSelector, Rule, Selection};
use crate::engine::Method;
use crate::problem::Problem;
use crate::state::AllocationState;
use num_traits::NumAssign;

/// North-west corner cell selection.
#[derive(Clone, Default, Debug)]
pub struct NorthWestCorner {
    /// The most recently selected cell.
    pos: Option<(usize, usize)>,
}

impl NorthWestCorner {
    pub fn new() -> Self {
        NorthWestCorner { pos: None }
    }

    /// Return the current cursor position.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.pos
    }
}

impl<T> CellSelector<T> for NorthWestCorner
where
    T: NumAssign + PartialOrd + Copy,
{
    fn method(&self) -> Method {
        Method::NorthWestCorner
    }

    fn next(&mut self, problem: &Problem<T>, state: &AllocationState<T>) -> Option<Selection<T>> {
        let (i, j) = match self.pos {
            None => (0, 0),
            Some((i, j)) => {
                let row_done = !state.is_source_open(i);
                let col_done = !state.is_destination_open(j);
                if row_done && col_done {
                    if j + 1 < problem.num_destinations() {
                        (i, j + 1)
                    } else {
                        (i + 1, j)
                    }
                } else if row_done {
                    (i + 1, j)
                } else if col_done {
                    (i, j + 1)
                } else {
                    (i, j)
                }
            }
        };

        self.pos = Some((i, j));
        if i < problem.num_sources() && j < problem.num_destinations() {
            Some(Selection {
                cell: Cell::new(i, j),
                rule: Rule::Corner,
            })
        } else {
            None
        }
    }
}
