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

//! The least cost method.
//!
//! Repeatedly fills the globally cheapest open cell. A dummy
//! destination is ignored until the demand of all real destinations is
//! satisfied, afterwards the leftover supply of each source is moved to
//! the dummy destination in a single pass over the sources.
//!
//! A dummy source is treated like any other source.

use super::{Cell, CellSelector, Rule, Selection};
use crate::engine::Method;
use crate::problem::Problem;
use crate::state::AllocationState;
use num_traits::NumAssign;

/// Return the cheapest open cell and its cost.
///
/// Cells in column `exclude` are skipped. Among cells with equal cost
/// the first one in row-major order is returned.
pub fn min_cost_cell<T>(problem: &Problem<T>, state: &AllocationState<T>, exclude: Option<usize>) -> Option<(Cell, T)>
where
    T: NumAssign + PartialOrd + Copy,
{
    let mut best: Option<(Cell, T)> = None;
    for i in state.open_sources() {
        for j in state.open_destinations().filter(|&j| Some(j) != exclude) {
            let c = problem.cost(i, j);
            if best.map(|(_, b)| c < b).unwrap_or(true) {
                best = Some((Cell::new(i, j), c));
            }
        }
    }
    best
}

/// Least cost cell selection.
#[derive(Clone, Default, Debug)]
pub struct LeastCost {
    /// Whether the real destinations are done.
    draining: bool,
    /// The next source to be checked for leftover supply.
    next_source: usize,
}

impl LeastCost {
    pub fn new() -> Self {
        LeastCost {
            draining: false,
            next_source: 0,
        }
    }
}

impl<T> CellSelector<T> for LeastCost
where
    T: NumAssign + PartialOrd + Copy,
{
    fn method(&self) -> Method {
        Method::LeastCost
    }

    fn next(&mut self, problem: &Problem<T>, state: &AllocationState<T>) -> Option<Selection<T>> {
        let dummy = problem.dummy_destination();

        if !self.draining {
            if state.open_destinations().any(|j| Some(j) != dummy) {
                if let Some((cell, cost)) = min_cost_cell(problem, state, dummy) {
                    return Some(Selection {
                        cell,
                        rule: Rule::LeastCost { cost },
                    });
                }
            }
            self.draining = true;
        }

        let d = dummy?;
        while self.next_source < problem.num_sources() && state.is_destination_open(d) {
            let i = self.next_source;
            self.next_source += 1;
            if state.is_source_open(i) {
                return Some(Selection {
                    cell: Cell::new(i, d),
                    rule: Rule::DummyFill,
                });
            }
        }

        None
    }
}
