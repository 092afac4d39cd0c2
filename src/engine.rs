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

//! Computing an initial feasible allocation.
//!
//! All methods share the same loop: ask the selector for the next cell,
//! ship as much as possible on it and record the step. The loop stops as
//! soon as all supply and demand has been allocated. Allocations are
//! never taken back.
//!
//! # Example
//!
//! ```
//! use rs_transport::{least_cost, north_west_corner, vogel, Problem};
//!
//! let p = Problem::new(
//!     vec![vec![12, 15, 18, 35], vec![35, 48, 52, 28], vec![8, 12, 20, 32]],
//!     vec![2500, 1800, 1200],
//!     vec![1500, 1200, 1000, 800],
//! )
//! .unwrap();
//!
//! let nwc = north_west_corner(&p).unwrap();
//! assert_eq!(nwc.steps[0].quantity, 1500);
//! assert_eq!(nwc.total_cost(), 117800);
//!
//! let lcm = least_cost(&p).unwrap();
//! assert_eq!(lcm.total_cost(), 71600);
//!
//! let vam = vogel(&p).unwrap();
//! assert_eq!(vam.total_cost(), 71600);
//! ```

use crate::cost::{cost_breakdown, CostBreakdown};
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::problem::Problem;
use crate::select::{Cell, CellSelector, LeastCost, NorthWestCorner, Rule, Vogel};
use crate::state::AllocationState;
use num_traits::NumAssign;

use log::{debug, info};

use std::error;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The available methods.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Method {
    /// The north-west corner rule.
    NorthWestCorner,
    /// The least cost method.
    LeastCost,
    /// Vogel's approximation method.
    Vogel,
}

impl Method {
    /// All methods in menu order.
    pub const ALL: [Method; 3] = [Method::NorthWestCorner, Method::LeastCost, Method::Vogel];

    /// The short tag of the method, e.g. `NWC`.
    pub fn tag(self) -> &'static str {
        match self {
            Method::NorthWestCorner => "NWC",
            Method::LeastCost => "LCM",
            Method::Vogel => "VAM",
        }
    }

    /// The full name of the method.
    pub fn name(self) -> &'static str {
        match self {
            Method::NorthWestCorner => "North-West Corner",
            Method::LeastCost => "Least Cost Method",
            Method::Vogel => "Vogel's Approximation",
        }
    }

    /// Solve `problem` with this method.
    pub fn solve<T>(self, problem: &Problem<T>) -> Result<Solution<T>>
    where
        T: NumAssign + PartialOrd + Copy,
    {
        match self {
            Method::NorthWestCorner => north_west_corner(problem),
            Method::LeastCost => least_cost(problem),
            Method::Vogel => vogel(problem),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.tag())
    }
}

/// Error when parsing a [`Method`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ParseMethodError(String);

impl fmt::Display for ParseMethodError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Invalid method '{}' (expected 1, 2, 3, nwc, lcm or vam)", self.0)
    }
}

impl error::Error for ParseMethodError {}

impl FromStr for Method {
    type Err = ParseMethodError;

    /// Parse a menu number, a tag or a full name (case insensitive).
    fn from_str(s: &str) -> std::result::Result<Method, ParseMethodError> {
        let key = s
            .trim()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "1" | "nwc" | "northwest" | "northwestcorner" => Ok(Method::NorthWestCorner),
            "2" | "lcm" | "leastcost" | "leastcostmethod" => Ok(Method::LeastCost),
            "3" | "vam" | "vogel" | "vogels" | "vogelapproximation" | "vogelsapproximation" => Ok(Method::Vogel),
            _ => Err(ParseMethodError(s.to_string())),
        }
    }
}

/// A single allocation.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Step<T> {
    /// The number of this step, starting at 1.
    pub index: usize,
    pub method: Method,
    /// The filled cell.
    pub cell: Cell,
    /// Why the cell has been chosen.
    pub rule: Rule<T>,
    /// The quantity shipped in this step.
    pub quantity: T,
    /// The allocation after this step.
    pub allocation: Matrix<T>,
    /// The remaining supply after this step.
    pub supply: Vec<T>,
    /// The remaining demand after this step.
    pub demand: Vec<T>,
}

/// The result of a solve.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Solution<T> {
    pub method: Method,
    /// The final allocation, including dummy flows.
    pub allocation: Matrix<T>,
    /// The real shipments and their total cost.
    pub cost: CostBreakdown<T>,
    /// All allocation steps in order.
    pub steps: Vec<Step<T>>,
}

impl<T> Solution<T>
where
    T: Copy,
{
    /// The total cost of all real shipments.
    pub fn total_cost(&self) -> T {
        self.cost.total
    }

    pub fn num_steps(&self) -> usize {
        self.steps.len()
    }
}

/// Run the allocation loop with the given selector.
///
/// The loop runs as long as there is at least one source with remaining
/// supply and one destination with remaining demand. With floating point
/// values one side may keep a rounding residue when the other side is
/// exhausted; this residue is left unallocated.
///
/// Returns an error if the selector gives up while an open source and an
/// open destination remain, or if it keeps selecting cells without
/// shipping anything.
pub fn run<T, S>(problem: &Problem<T>, mut selector: S) -> Result<Solution<T>>
where
    T: NumAssign + PartialOrd + Copy,
    S: CellSelector<T>,
{
    let method = selector.method();
    let mut state = AllocationState::new(problem);
    let mut steps = Vec::new();

    // Zero allocations only happen on already exhausted lines, and each
    // of them closes a row or a column for the cursor.
    let max_idle = problem.num_sources() + problem.num_destinations();
    let mut nidle = 0;

    while state.open_sources().next().is_some() && state.open_destinations().next().is_some() {
        let sel = selector.next(problem, &state).ok_or_else(|| Error::NoFeasibleCell {
            step: steps.len(),
            open_sources: state.open_sources().count(),
            open_destinations: state.open_destinations().count(),
        })?;

        let Cell { src: i, snk: j } = sel.cell;
        let before = state.remaining();
        let quantity = state.allocate(i, j);
        debug_assert!(state.remaining() <= before);

        if quantity.is_zero() {
            nidle += 1;
            if nidle > max_idle {
                return Err(Error::Stalled { step: steps.len() + 1 });
            }
        }

        debug!("{} step {}: S{} -> D{}", method, steps.len() + 1, i + 1, j + 1);

        steps.push(Step {
            index: steps.len() + 1,
            method,
            cell: sel.cell,
            rule: sel.rule,
            quantity,
            allocation: state.allocation().clone(),
            supply: state.supply().to_vec(),
            demand: state.demand().to_vec(),
        });
    }

    let allocation = state.into_allocation();
    let cost = cost_breakdown(problem, &allocation);
    info!(
        "{} finished after {} steps with {} real shipments",
        method,
        steps.len(),
        cost.terms.len()
    );

    Ok(Solution {
        method,
        allocation,
        cost,
        steps,
    })
}

/// Compute an initial allocation with the north-west corner rule.
pub fn north_west_corner<T>(problem: &Problem<T>) -> Result<Solution<T>>
where
    T: NumAssign + PartialOrd + Copy,
{
    run(problem, NorthWestCorner::new())
}

/// Compute an initial allocation with the least cost method.
pub fn least_cost<T>(problem: &Problem<T>) -> Result<Solution<T>>
where
    T: NumAssign + PartialOrd + Copy,
{
    run(problem, LeastCost::new())
}

/// Compute an initial allocation with Vogel's approximation method.
pub fn vogel<T>(problem: &Problem<T>) -> Result<Solution<T>>
where
    T: NumAssign + PartialOrd + Copy,
{
    run(problem, Vogel::new())
}
