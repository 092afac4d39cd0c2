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

//! Shipping cost of an allocation.
//!
//! Flows from a dummy source or into a dummy destination do not count.

use crate::matrix::Matrix;
use crate::problem::Problem;
use crate::select::Cell;
use num_traits::NumAssign;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A single non-zero shipment.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct CostTerm<T> {
    pub cell: Cell,
    /// The unit cost of the route.
    pub cost: T,
    /// The shipped quantity.
    pub quantity: T,
}

impl<T> CostTerm<T>
where
    T: NumAssign + Copy,
{
    /// The cost of this shipment, i.e. `cost * quantity`.
    ///
    /// For integer types the product and the total over all terms must
    /// fit into `T`.
    pub fn value(&self) -> T {
        self.cost * self.quantity
    }
}

/// The shipments of an allocation and their total cost.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct CostBreakdown<T> {
    /// All non-zero real shipments in row-major order.
    pub terms: Vec<CostTerm<T>>,
    /// The sum of the values of all terms.
    pub total: T,
}

/// Compute the non-zero real shipments of an allocation.
///
/// The terms are returned in row-major order. Cells in a dummy row or
/// column are skipped.
pub fn cost_breakdown<T>(problem: &Problem<T>, allocation: &Matrix<T>) -> CostBreakdown<T>
where
    T: NumAssign + PartialOrd + Copy,
{
    debug_assert_eq!(allocation.num_rows(), problem.num_sources());
    debug_assert_eq!(allocation.num_cols(), problem.num_destinations());

    let terms: Vec<_> = allocation
        .iter()
        .filter(|&((i, j), q)| !q.is_zero() && !problem.is_dummy_source(i) && !problem.is_dummy_destination(j))
        .map(|((i, j), quantity)| CostTerm {
            cell: Cell::new(i, j),
            cost: problem.cost(i, j),
            quantity,
        })
        .collect();
    let total = terms.iter().fold(T::zero(), |acc, t| acc + t.value());

    CostBreakdown { terms, total }
}

/// Return the total shipping cost of an allocation without dummy flows.
pub fn total_cost<T>(problem: &Problem<T>, allocation: &Matrix<T>) -> T
where
    T: NumAssign + PartialOrd + Copy,
{
    cost_breakdown(problem, allocation).total
}
