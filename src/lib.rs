// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

#![forbid(unsafe_code)]

//! Initial feasible solutions for the transportation problem.
//!
//! Supply of several sources has to be shipped to several destinations
//! at minimal cost. This crate balances a problem by adding a dummy
//! source or destination and computes a feasible (not necessarily
//! optimal) allocation with one of three classical heuristics:
//!
//! - the north-west corner rule ([`north_west_corner`]),
//! - the least cost method ([`least_cost`]),
//! - Vogel's approximation method ([`vogel`]).
//!
//! Every solve records its steps so they can be shown by a
//! [report](crate::report).

// # Data structures

pub mod error;
pub use self::error::{Error, Result};

pub mod matrix;
pub use self::matrix::Matrix;

pub mod problem;
pub use self::problem::{balance, DummyKind, Problem};

pub mod state;
pub use self::state::AllocationState;

// # Algorithms

pub mod select;
pub use self::select::{Cell, CellSelector, LeastCost, Line, NorthWestCorner, Rule, Selection, Vogel};

pub mod engine;
pub use self::engine::{least_cost, north_west_corner, run, vogel, Method, Solution, Step};

pub mod cost;
pub use self::cost::{cost_breakdown, total_cost, CostBreakdown, CostTerm};

// # Input and output

pub mod report;
pub mod tpfile;
