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

//! Plain text reports of problems and solutions.
//!
//! All functions only read the data passed to them and write grid
//! tables to any [`Write`] implementation. Allocated cells are shown as
//! `cost×quantity`, empty cells as `−`. Dummy sources and destinations
//! are marked with `*`.
//!
//! # Example
//!
//! ```
//! use rs_transport::{north_west_corner, report, Problem};
//!
//! let p = Problem::new(vec![vec![2, 3], vec![4, 1]], vec![6, 4], vec![5, 5]).unwrap();
//! let sol = north_west_corner(&p).unwrap();
//!
//! let mut out = Vec::new();
//! report::write_cost(&mut out, &sol.cost).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "total transportation cost = 2×5+3×1+1×4=17\n\n"
//! );
//! ```

use crate::cost::CostBreakdown;
use crate::engine::{Solution, Step};
use crate::matrix::Matrix;
use crate::problem::{DummyKind, Problem};
use crate::select::{Line, Rule};
use num_traits::NumAssign;

use std::fmt::Display;
use std::io::{Result, Write};

/// A simple grid table.
struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn write<W: Write>(&self, mut w: W) -> Result<()> {
        let ncols = self.header.len();
        let mut widths = vec![0; ncols];
        for row in Some(&self.header).into_iter().chain(&self.rows) {
            for (k, cell) in row.iter().enumerate() {
                widths[k] = widths[k].max(cell.chars().count());
            }
        }

        let rule = |w: &mut W, c: char| -> Result<()> {
            write!(w, "+")?;
            for &width in &widths {
                write!(w, "{}+", c.to_string().repeat(width + 2))?;
            }
            writeln!(w)
        };
        let line = |w: &mut W, row: &[String]| -> Result<()> {
            write!(w, "|")?;
            for (k, cell) in row.iter().enumerate() {
                let pad = " ".repeat(widths[k] - cell.chars().count());
                if k == 0 {
                    write!(w, " {}{} |", cell, pad)?;
                } else {
                    write!(w, " {}{} |", pad, cell)?;
                }
            }
            writeln!(w)
        };

        rule(&mut w, '-')?;
        line(&mut w, &self.header)?;
        rule(&mut w, '=')?;
        for row in &self.rows {
            line(&mut w, row)?;
            rule(&mut w, '-')?;
        }
        Ok(())
    }
}

/// Label of source `i`, e.g. `S1` or `S4*` for a dummy source.
pub fn source_label<T>(problem: &Problem<T>, i: usize) -> String
where
    T: NumAssign + PartialOrd + Copy,
{
    let mark = if problem.is_dummy_source(i) { "*" } else { "" };
    format!("S{}{}", i + 1, mark)
}

/// Label of destination `j`, e.g. `D1` or `D5*` for a dummy destination.
pub fn destination_label<T>(problem: &Problem<T>, j: usize) -> String
where
    T: NumAssign + PartialOrd + Copy,
{
    let mark = if problem.is_dummy_destination(j) { "*" } else { "" };
    format!("D{}{}", j + 1, mark)
}

fn header<T>(problem: &Problem<T>, last: Option<&str>) -> Vec<String>
where
    T: NumAssign + PartialOrd + Copy,
{
    let mut h = vec![String::new()];
    h.extend((0..problem.num_destinations()).map(|j| destination_label(problem, j)));
    h.extend(last.map(String::from));
    h
}

fn allocation_rows<T>(problem: &Problem<T>, allocation: &Matrix<T>) -> Vec<Vec<String>>
where
    T: NumAssign + PartialOrd + Copy + Display,
{
    allocation
        .rows()
        .enumerate()
        .map(|(i, row)| {
            let mut r = vec![source_label(problem, i)];
            r.extend(row.iter().enumerate().map(|(j, q)| {
                if q.is_zero() {
                    "−".to_string()
                } else {
                    format!("{}×{}", problem.cost(i, j), q)
                }
            }));
            r
        })
        .collect()
}

/// Write the cost table with supply and demand.
pub fn write_problem<W, T>(mut w: W, problem: &Problem<T>) -> Result<()>
where
    W: Write,
    T: NumAssign + PartialOrd + Copy + Display,
{
    writeln!(w, "\n=== INITIAL PROBLEM TABLE (Costs) ===\n")?;

    let mut rows: Vec<Vec<String>> = problem
        .costs()
        .rows()
        .enumerate()
        .map(|(i, costs)| {
            let mut r = vec![source_label(problem, i)];
            r.extend(costs.iter().map(|c| format!("${}", c)));
            r.push(problem.supply()[i].to_string());
            r
        })
        .collect();
    let mut demand = vec!["Demand".to_string()];
    demand.extend(problem.demand().iter().map(|d| d.to_string()));
    demand.push(problem.total().to_string());
    rows.push(demand);

    Table {
        header: header(problem, Some("Supply")),
        rows,
    }
    .write(&mut w)?;

    match problem.dummy() {
        DummyKind::None => (),
        DummyKind::Supply => writeln!(w, "Dummy supply added for balancing\n")?,
        DummyKind::Demand => writeln!(w, "Dummy demand added for balancing\n")?,
    }

    Ok(())
}

/// Write the narration of a step, e.g. `Min cost: S3→D1 ($8), allocate 1200 units`.
pub fn write_narration<W, T>(mut w: W, problem: &Problem<T>, step: &Step<T>) -> Result<()>
where
    W: Write,
    T: NumAssign + PartialOrd + Copy + Display,
{
    let (i, j) = (step.cell.src, step.cell.snk);
    let route = format!("{}→{}", source_label(problem, i), destination_label(problem, j));
    match step.rule {
        Rule::Corner => writeln!(
            w,
            "Allocate {} units to {} (cost: ${}/unit)\n",
            step.quantity,
            route,
            problem.cost(i, j)
        ),
        Rule::LeastCost { cost } => writeln!(w, "Min cost: {} (${}), allocate {} units\n", route, cost, step.quantity),
        Rule::DummyFill => writeln!(
            w,
            "Allocate remaining {} units from {} to dummy {}\n",
            step.quantity,
            source_label(problem, i),
            destination_label(problem, j)
        ),
        Rule::Penalty { line, penalty } => {
            let (which, k) = match line {
                Line::Row(k) => ("row", k),
                Line::Col(k) => ("column", k),
            };
            writeln!(
                w,
                "Max penalty {} on {} {}, allocate {} to {}\n",
                penalty,
                which,
                k + 1,
                step.quantity,
                route
            )
        }
    }
}

/// Write the narration and the progress table of a step.
pub fn write_step<W, T>(mut w: W, problem: &Problem<T>, step: &Step<T>) -> Result<()>
where
    W: Write,
    T: NumAssign + PartialOrd + Copy + Display,
{
    write_narration(&mut w, problem, step)?;
    writeln!(w, "Step {} - {}\n", step.index, step.method)?;

    let mut rows = allocation_rows(problem, &step.allocation);
    for (r, s) in rows.iter_mut().zip(&step.supply) {
        r.push(s.to_string());
    }
    let mut demand = vec!["Demand".to_string()];
    demand.extend(step.demand.iter().map(|d| d.to_string()));
    demand.push(String::new());
    rows.push(demand);

    Table {
        header: header(problem, Some("Supply")),
        rows,
    }
    .write(&mut w)?;
    writeln!(w)
}

/// Write the final allocation table.
pub fn write_allocation<W, T>(mut w: W, problem: &Problem<T>, allocation: &Matrix<T>) -> Result<()>
where
    W: Write,
    T: NumAssign + PartialOrd + Copy + Display,
{
    writeln!(w, "=== Final Allocation Matrix ===\n")?;
    Table {
        header: header(problem, None),
        rows: allocation_rows(problem, allocation),
    }
    .write(&mut w)?;
    writeln!(w)
}

/// Write the cost equation, e.g. `total transportation cost = 12×300+8×1200=13200`.
pub fn write_cost<W, T>(mut w: W, cost: &CostBreakdown<T>) -> Result<()>
where
    W: Write,
    T: Display,
{
    let terms = cost
        .terms
        .iter()
        .map(|t| format!("{}×{}", t.cost, t.quantity))
        .collect::<Vec<_>>();
    writeln!(w, "total transportation cost = {}={}\n", terms.join("+"), cost.total)
}

/// Write a complete report of a solve.
///
/// If `steps` is `false` the intermediate tables are omitted.
pub fn write_solution<W, T>(mut w: W, problem: &Problem<T>, solution: &Solution<T>, steps: bool) -> Result<()>
where
    W: Write,
    T: NumAssign + PartialOrd + Copy + Display,
{
    writeln!(w, "\n{}", "=".repeat(70))?;
    writeln!(
        w,
        "METHOD: {} ({})",
        solution.method.name().to_uppercase(),
        solution.method.tag()
    )?;
    writeln!(w, "{}", "=".repeat(70))?;

    write_problem(&mut w, problem)?;
    if steps {
        for step in &solution.steps {
            write_step(&mut w, problem, step)?;
        }
    }
    write_allocation(&mut w, problem, &solution.allocation)?;
    write_cost(&mut w, &solution.cost)
}
