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

//! Working state of a single solve.

use crate::matrix::Matrix;
use crate::problem::{sum, Problem};
use num_traits::NumAssign;

/// The remaining supply and demand and the allocations made so far.
///
/// A fresh state is created for every solve, so several methods can be
/// run on the same [`Problem`] independently.
#[derive(Clone, Debug)]
pub struct AllocationState<T> {
    supply: Vec<T>,
    demand: Vec<T>,
    allocation: Matrix<T>,
}

impl<T> AllocationState<T>
where
    T: NumAssign + PartialOrd + Copy,
{
    pub fn new(problem: &Problem<T>) -> Self {
        AllocationState {
            supply: problem.supply().to_vec(),
            demand: problem.demand().to_vec(),
            allocation: Matrix::zeros(problem.num_sources(), problem.num_destinations()),
        }
    }

    /// Remaining supply of each source.
    pub fn supply(&self) -> &[T] {
        &self.supply
    }

    /// Remaining demand of each destination.
    pub fn demand(&self) -> &[T] {
        &self.demand
    }

    pub fn allocation(&self) -> &Matrix<T> {
        &self.allocation
    }

    pub fn into_allocation(self) -> Matrix<T> {
        self.allocation
    }

    /// Return `true` if source `i` has remaining supply.
    pub fn is_source_open(&self, i: usize) -> bool {
        !self.supply[i].is_zero()
    }

    /// Return `true` if destination `j` has remaining demand.
    pub fn is_destination_open(&self, j: usize) -> bool {
        !self.demand[j].is_zero()
    }

    /// Iterate over the indices of all sources with remaining supply.
    pub fn open_sources(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.supply.len()).filter(move |&i| self.is_source_open(i))
    }

    /// Iterate over the indices of all destinations with remaining demand.
    pub fn open_destinations(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.demand.len()).filter(move |&j| self.is_destination_open(j))
    }

    /// Total remaining demand.
    pub fn remaining(&self) -> T {
        sum(&self.demand)
    }

    /// Return `true` if all supply and all demand has been allocated.
    pub fn is_exhausted(&self) -> bool {
        self.supply.iter().all(|x| x.is_zero()) && self.demand.iter().all(|x| x.is_zero())
    }

    /// Allocate as much as possible on the route from `i` to `j`.
    ///
    /// The quantity is the minimum of the remaining supply of `i` and
    /// the remaining demand of `j`. It is added to the cell and
    /// subtracted from both remaining values, so at least one of them
    /// becomes zero. Returns the allocated quantity.
    pub fn allocate(&mut self, i: usize, j: usize) -> T {
        let s = self.supply[i];
        let d = self.demand[j];
        let x = if s < d { s } else { d };
        self.allocation[(i, j)] += x;
        self.supply[i] -= x;
        self.demand[j] -= x;
        x
    }
}
