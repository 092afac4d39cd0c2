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

//! Vogel's approximation method.
//!
//! The *penalty* of an open row is the difference between the two
//! smallest costs over the open columns (or zero if only one column is
//! open). Column penalties are defined symmetrically. In each iteration
//! the line with the greatest penalty is chosen and its cheapest open
//! cell is filled.
//!
//! Rows are scanned before columns and a line only replaces the current
//! candidate if its penalty is strictly greater, so on ties the first
//! row wins over all columns. A dummy row or column takes part like any
//! other line.
//!
//! # Example
//!
//! ```
//! use rs_transport::select::{vogel, Line};
//! use rs_transport::{AllocationState, Problem};
//!
//! let p = Problem::new(
//!     vec![vec![12, 15, 18, 35], vec![35, 48, 52, 28], vec![8, 12, 20, 32]],
//!     vec![2500, 1800, 1200],
//!     vec![1500, 1200, 1000, 800],
//! )
//! .unwrap();
//! let state = AllocationState::new(&p);
//!
//! let (rows, cols) = vogel::penalties(&p, &state);
//! assert_eq!(rows, vec![Some(12), Some(28), Some(8)]);
//! assert_eq!(cols, vec![Some(4), Some(3), Some(2), Some(4), Some(0)]);
//! assert_eq!(vogel::max_penalty(&rows, &cols), Some((Line::Row(1), 28)));
//! ```

use super::{Cell, CellSelector, Line, Rule, Selection};
use crate::engine::Method;
use crate::problem::Problem;
use crate::state::AllocationState;
use either::Either::{Left, Right};
use num_traits::NumAssign;

/// Return the penalty of a sequence of costs.
///
/// This is the difference between the two smallest values (counted with
/// multiplicity), zero for a single value and `None` for no values.
fn penalty<T, I>(costs: I) -> Option<T>
where
    T: NumAssign + PartialOrd + Copy,
    I: IntoIterator<Item = T>,
{
    let mut first: Option<T> = None;
    let mut second: Option<T> = None;
    for c in costs {
        match first {
            Some(f) if c < f => {
                second = first;
                first = Some(c);
            }
            Some(_) => {
                if second.map(|s| c < s).unwrap_or(true) {
                    second = Some(c);
                }
            }
            None => first = Some(c),
        }
    }

    match (first, second) {
        (Some(f), Some(s)) => Some(s - f),
        (Some(_), None) => Some(T::zero()),
        _ => None,
    }
}

/// Penalty of row `i`, `None` if the row is not a candidate.
pub fn row_penalty<T>(problem: &Problem<T>, state: &AllocationState<T>, i: usize) -> Option<T>
where
    T: NumAssign + PartialOrd + Copy,
{
    if !state.is_source_open(i) {
        return None;
    }
    penalty(state.open_destinations().map(|j| problem.cost(i, j)))
}

/// Penalty of column `j`, `None` if the column is not a candidate.
pub fn col_penalty<T>(problem: &Problem<T>, state: &AllocationState<T>, j: usize) -> Option<T>
where
    T: NumAssign + PartialOrd + Copy,
{
    if !state.is_destination_open(j) {
        return None;
    }
    penalty(state.open_sources().map(|i| problem.cost(i, j)))
}

/// Compute the penalties of all rows and all columns.
pub fn penalties<T>(problem: &Problem<T>, state: &AllocationState<T>) -> (Vec<Option<T>>, Vec<Option<T>>)
where
    T: NumAssign + PartialOrd + Copy,
{
    let rows = (0..problem.num_sources())
        .map(|i| row_penalty(problem, state, i))
        .collect();
    let cols = (0..problem.num_destinations())
        .map(|j| col_penalty(problem, state, j))
        .collect();
    (rows, cols)
}

/// Return the line with the greatest penalty.
///
/// Rows are scanned before columns, later lines only win on a strictly
/// greater penalty.
pub fn max_penalty<T>(rows: &[Option<T>], cols: &[Option<T>]) -> Option<(Line, T)>
where
    T: PartialOrd + Copy,
{
    let rows = rows.iter().enumerate().map(|(i, &p)| (Line::Row(i), p));
    let cols = cols.iter().enumerate().map(|(j, &p)| (Line::Col(j), p));

    let mut best: Option<(Line, T)> = None;
    for (line, p) in rows.chain(cols) {
        if let Some(p) = p {
            if best.map(|(_, b)| p > b).unwrap_or(true) {
                best = Some((line, p));
            }
        }
    }
    best
}

/// Return the cheapest open cell in a line.
///
/// Among cells with equal cost the one with the smallest index wins.
pub fn min_cost_in_line<T>(problem: &Problem<T>, state: &AllocationState<T>, line: Line) -> Option<Cell>
where
    T: NumAssign + PartialOrd + Copy,
{
    let cells = match line {
        Line::Row(i) => Left(state.open_destinations().map(move |j| Cell::new(i, j))),
        Line::Col(j) => Right(state.open_sources().map(move |i| Cell::new(i, j))),
    };

    let mut best: Option<(Cell, T)> = None;
    for cell in cells {
        let c = problem.cost(cell.src, cell.snk);
        if best.map(|(_, b)| c < b).unwrap_or(true) {
            best = Some((cell, c));
        }
    }
    best.map(|(cell, _)| cell)
}

/// Vogel's approximation cell selection.
///
/// The selector itself is stateless, open rows and columns are those
/// with remaining supply or demand.
#[derive(Clone, Copy, Default, Debug)]
pub struct Vogel;

impl Vogel {
    pub fn new() -> Self {
        Vogel
    }
}

impl<T> CellSelector<T> for Vogel
where
    T: NumAssign + PartialOrd + Copy,
{
    fn method(&self) -> Method {
        Method::Vogel
    }

    fn next(&mut self, problem: &Problem<T>, state: &AllocationState<T>) -> Option<Selection<T>> {
        let (rows, cols) = penalties(problem, state);
        let (line, penalty) = max_penalty(&rows, &cols)?;
        let cell = min_cost_in_line(problem, state, line)?;
        Some(Selection {
            cell,
            rule: Rule::Penalty { line, penalty },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{max_penalty, min_cost_in_line, penalties, penalty, Vogel};
    use crate::problem::Problem;
    use crate::select::{Cell, CellSelector, Line, Rule};
    use crate::state::AllocationState;

    #[test]
    fn test_penalty() {
        assert_eq!(penalty(vec![8, 12, 20]), Some(4));
        assert_eq!(penalty(vec![20, 8, 12]), Some(4));
        assert_eq!(penalty(vec![5, 5, 9]), Some(0));
        assert_eq!(penalty(vec![7]), Some(0));
        assert_eq!(penalty(Vec::<i32>::new()), None);
        assert_eq!(penalty(vec![2.5, 1.0]), Some(1.5));
    }

    #[test]
    fn test_max_penalty_ties() {
        // a column with the same penalty never replaces a row
        let rows = vec![None, Some(3), Some(3)];
        let cols = vec![Some(3), Some(1)];
        assert_eq!(max_penalty(&rows, &cols), Some((Line::Row(1), 3)));

        let rows = vec![Some(1), None];
        let cols = vec![Some(2), Some(4), Some(4)];
        assert_eq!(max_penalty(&rows, &cols), Some((Line::Col(1), 4)));

        assert_eq!(max_penalty::<i32>(&[None], &[None, None]), None);
    }

    #[test]
    fn test_min_cost_in_line() {
        let p = Problem::new(vec![vec![4, 2, 2], vec![1, 6, 3]], vec![5, 5], vec![3, 3, 4]).unwrap();
        let mut state = AllocationState::new(&p);
        assert_eq!(min_cost_in_line(&p, &state, Line::Row(0)), Some(Cell::new(0, 1)));
        assert_eq!(min_cost_in_line(&p, &state, Line::Col(0)), Some(Cell::new(1, 0)));

        state.allocate(1, 1);
        // column 1 is exhausted now
        assert_eq!(min_cost_in_line(&p, &state, Line::Row(0)), Some(Cell::new(0, 2)));
    }

    #[test]
    fn test_inactive_lines() {
        let p = Problem::new(vec![vec![1, 5], vec![4, 2]], vec![3, 3], vec![3, 3]).unwrap();
        let mut state = AllocationState::new(&p);
        state.allocate(0, 0);

        let (rows, cols) = penalties(&p, &state);
        assert_eq!(rows, vec![None, Some(0)]);
        assert_eq!(cols, vec![None, Some(0)]);

        let sel = Vogel.next(&p, &state).unwrap();
        assert_eq!(sel.cell, Cell::new(1, 1));
        assert_eq!(
            sel.rule,
            Rule::Penalty {
                line: Line::Row(1),
                penalty: 0
            }
        );
    }
}
