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

//! Balanced transportation problem instances.
//!
//! A transportation problem is *balanced* if the total supply equals
//! the total demand. Unbalanced input is balanced by appending a single
//! dummy source (if demand exceeds supply) or a single dummy
//! destination (if supply exceeds demand) with zero unit costs.
//!
//! # Example
//!
//! ```
//! use rs_transport::{DummyKind, Problem};
//!
//! let p = Problem::new(
//!     vec![vec![12, 15, 18, 35], vec![35, 48, 52, 28], vec![8, 12, 20, 32]],
//!     vec![2500, 1800, 1200],
//!     vec![1500, 1200, 1000, 800],
//! )
//! .unwrap();
//!
//! assert_eq!(p.dummy(), DummyKind::Demand);
//! assert_eq!(p.num_destinations(), 5);
//! assert_eq!(p.demand()[4], 1000);
//! assert_eq!(p.cost(0, 4), 0);
//! ```

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use num_traits::{NumAssign, Zero};

use log::debug;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The kind of dummy node added while balancing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum DummyKind {
    /// Supply and demand were already balanced.
    None,
    /// A dummy source (last row) provides the missing supply.
    Supply,
    /// A dummy destination (last column) absorbs the excess supply.
    Demand,
}

/// A balanced transportation problem.
///
/// Instances are immutable once constructed, each solve works on its
/// own copy of the remaining quantities.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Problem<T> {
    costs: Matrix<T>,
    supply: Vec<T>,
    demand: Vec<T>,
    dummy: DummyKind,
}

/// Sum of all values in `xs`.
pub(crate) fn sum<T>(xs: &[T]) -> T
where
    T: NumAssign + Copy,
{
    xs.iter().fold(T::zero(), |acc, &x| acc + x)
}

fn check_nonnegative<T>(what: &'static str, xs: impl Iterator<Item = T>) -> Result<()>
where
    T: Zero + PartialOrd,
{
    let zero = T::zero();
    for (index, x) in xs.enumerate() {
        // `!(x >= 0)` also catches NaN
        if !(x >= zero) {
            return Err(Error::Negative { what, index });
        }
    }
    Ok(())
}

/// Balance a transportation problem.
///
/// - `costs` is the `m x n` matrix of unit costs
/// - `supply` has one entry per source (row)
/// - `demand` has one entry per destination (column)
///
/// If the total supply exceeds the total demand a dummy destination
/// with zero costs is appended, if the total demand exceeds the total
/// supply a dummy source is appended. Zero entries are valid.
///
/// The values are added with the plain operators of `T`. For integer
/// types the total supply and the total demand must fit into `T`,
/// otherwise the addition overflows (and panics in debug builds).
pub fn balance<T>(mut costs: Matrix<T>, mut supply: Vec<T>, mut demand: Vec<T>) -> Result<Problem<T>>
where
    T: NumAssign + PartialOrd + Copy,
{
    if supply.len() != costs.num_rows() {
        return Err(Error::ShapeMismatch {
            what: "supply vector",
            expected: costs.num_rows(),
            found: supply.len(),
        });
    }
    if demand.len() != costs.num_cols() {
        return Err(Error::ShapeMismatch {
            what: "demand vector",
            expected: costs.num_cols(),
            found: demand.len(),
        });
    }

    check_nonnegative("supply", supply.iter().copied())?;
    check_nonnegative("demand", demand.iter().copied())?;
    check_nonnegative("cost", costs.iter().map(|(_, c)| c))?;

    let total_supply = sum(&supply);
    let total_demand = sum(&demand);

    let dummy = if total_supply > total_demand {
        demand.push(total_supply - total_demand);
        costs.push_col(T::zero());
        debug!("Added dummy destination D{} for excess supply", demand.len());
        DummyKind::Demand
    } else if total_supply < total_demand {
        supply.push(total_demand - total_supply);
        costs.push_row(T::zero());
        debug!("Added dummy source S{} for excess demand", supply.len());
        DummyKind::Supply
    } else {
        DummyKind::None
    };

    Ok(Problem {
        costs,
        supply,
        demand,
        dummy,
    })
}

impl<T> Problem<T>
where
    T: NumAssign + PartialOrd + Copy,
{
    /// Create a balanced problem from cost rows, supply and demand.
    ///
    /// See [`balance`].
    pub fn new(costs: Vec<Vec<T>>, supply: Vec<T>, demand: Vec<T>) -> Result<Self> {
        balance(Matrix::from_rows(costs)?, supply, demand)
    }

    /// The (balanced) matrix of unit costs.
    pub fn costs(&self) -> &Matrix<T> {
        &self.costs
    }

    /// Unit cost from source `i` to destination `j`.
    pub fn cost(&self, i: usize, j: usize) -> T {
        self.costs[(i, j)]
    }

    /// The (balanced) supply of each source.
    pub fn supply(&self) -> &[T] {
        &self.supply
    }

    /// The (balanced) demand of each destination.
    pub fn demand(&self) -> &[T] {
        &self.demand
    }

    /// Number of sources, including a dummy source.
    pub fn num_sources(&self) -> usize {
        self.supply.len()
    }

    /// Number of destinations, including a dummy destination.
    pub fn num_destinations(&self) -> usize {
        self.demand.len()
    }

    /// Total supply, which equals the total demand.
    pub fn total(&self) -> T {
        sum(&self.supply)
    }

    pub fn dummy(&self) -> DummyKind {
        self.dummy
    }

    /// Index of the dummy source, if any.
    pub fn dummy_source(&self) -> Option<usize> {
        match self.dummy {
            DummyKind::Supply => Some(self.num_sources() - 1),
            _ => None,
        }
    }

    /// Index of the dummy destination, if any.
    pub fn dummy_destination(&self) -> Option<usize> {
        match self.dummy {
            DummyKind::Demand => Some(self.num_destinations() - 1),
            _ => None,
        }
    }

    pub fn is_dummy_source(&self, i: usize) -> bool {
        self.dummy_source() == Some(i)
    }

    pub fn is_dummy_destination(&self, j: usize) -> bool {
        self.dummy_destination() == Some(j)
    }
}
