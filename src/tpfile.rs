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

//! Reading and writing transportation problems in a DIMACS-like text
//! format. A file must look as follows.
//!
//! 1. empty lines are allowed and ignored
//! 2. a line starting with `c` is a comment line and is ignored
//! 3. the first non-comment line must have the form `p tp <m> <n>`,
//!    where `<m>` is the number of sources and `<n>` the number of
//!    destinations, both > 0.
//! 4. a line `s <s_1> ... <s_m>` with the supply of each source
//! 5. a line `d <d_1> ... <d_n>` with the demand of each destination
//! 6. exactly `m` lines `r <c_1> ... <c_n>` with the unit costs of the
//!    sources in order
//!
//! The `s`, `d` and `r` lines may appear in any order, but the supply
//! and demand lines exactly once.
//!
//! # Example
//!
//! ```
//! use rs_transport::{tpfile, DummyKind, Problem};
//!
//! let text = "c small example
//! p tp 2 3
//! s 20 30
//! d 10 25 15
//! r 8 6 10
//! r 9 12 13
//! ";
//!
//! let instance = tpfile::read::<_, u32>(text.as_bytes()).unwrap();
//! assert_eq!(instance.supply, vec![20, 30]);
//!
//! let p = instance.into_problem().unwrap();
//! assert_eq!(p.dummy(), DummyKind::None);
//! assert_eq!(p.cost(1, 2), 13);
//! ```

use crate::engine::Solution;
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::problem::{balance, Problem};
use num_traits::NumAssign;

use std::fmt::{self, Display};
use std::io::{self, BufRead, BufReader, Read, Write};
use std::str::{FromStr, SplitWhitespace};

/// An unbalanced transportation problem as read from a file.
#[derive(Clone, Debug)]
pub struct Instance<T> {
    /// The unit costs, one row per source.
    pub costs: Matrix<T>,
    /// The supply of each source.
    pub supply: Vec<T>,
    /// The demand of each destination.
    pub demand: Vec<T>,
}

impl<T> Instance<T>
where
    T: NumAssign + PartialOrd + Copy,
{
    /// Balance the instance, see [`balance`].
    pub fn into_problem(self) -> Result<Problem<T>> {
        balance(self.costs, self.supply, self.demand)
    }
}

struct Reader<R: Read> {
    io: BufReader<R>,

    line: String,
    line_number: usize,
}

impl<R: Read> Reader<R> {
    fn new(reader: R) -> Self {
        Reader {
            io: BufReader::new(reader),
            line: String::new(),
            line_number: 0,
        }
    }

    /// Return the tokens of the next non-comment line.
    fn read_line(&mut self) -> Result<Option<Tokens>> {
        let line = &mut self.line;
        loop {
            line.clear();
            if self.io.read_line(line)? == 0 {
                return Ok(None);
            }

            self.line_number += 1;
            let mut it = line.char_indices();
            while let Some((i, c)) = it.next() {
                if char::is_whitespace(c) {
                    continue;
                }
                if c == 'c' {
                    break;
                }
                return Ok(Some(Tokens {
                    it: line[i..].split_whitespace(),
                    line: self.line_number,
                }));
            }
        }
    }
}

/// Iterates over the tokens in a line.
struct Tokens<'a> {
    it: SplitWhitespace<'a>,
    line: usize,
}

impl<'a> Tokens<'a> {
    /// Return an error if the next token is not the given token.
    fn expect(&mut self, tok: &str) -> Result<()> {
        let nxt = self.str()?;
        if nxt == tok {
            Ok(())
        } else {
            Err(Error::Format {
                line: self.line,
                msg: format!("expected '{}', got '{}'", tok, nxt),
            })
        }
    }

    /// Returns the next token as `&str`.
    fn str(&mut self) -> Result<&'a str> {
        self.it.next().ok_or_else(|| Error::Format {
            line: self.line,
            msg: "expected token".to_string(),
        })
    }

    /// Returns the next token converted to a number.
    fn number<T>(&mut self) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let line = self.line;
        self.str()?.parse().map_err(|e| Error::Format {
            line,
            msg: format!("{}", e),
        })
    }

    /// Read exactly `n` numbers and ensure the line ends afterwards.
    fn numbers<T>(&mut self, n: usize) -> Result<Vec<T>>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let xs = (0..n).map(|_| self.number()).collect::<Result<Vec<T>>>()?;
        self.end()?;
        Ok(xs)
    }

    /// Ensures that there is no next token.
    fn end(&mut self) -> Result<()> {
        if let Some(s) = self.it.next() {
            Err(Error::Format {
                line: self.line,
                msg: format!("unexpected token at end of line: {}", s),
            })
        } else {
            Ok(())
        }
    }
}

/// Read a transportation problem.
pub fn read<R, T>(r: R) -> Result<Instance<T>>
where
    R: Read,
    T: FromStr + Copy,
    T::Err: Display,
{
    let mut reader = Reader::new(r);

    let line_number = reader.line_number;
    let mut pline = reader.read_line()?.ok_or_else(|| Error::Format {
        line: line_number,
        msg: "unexpected end of file, expected 'p' line".to_string(),
    })?;
    pline.expect("p")?;
    pline.expect("tp")?;
    let nsources: usize = pline.number()?;
    let ndestinations: usize = pline.number()?;
    pline.end()?;
    if nsources == 0 || ndestinations == 0 {
        return Err(Error::Data {
            line: pline.line,
            msg: format!("invalid size {}x{} (must be positive)", nsources, ndestinations),
        });
    }

    let mut supply = None;
    let mut demand = None;
    let mut rows = Vec::with_capacity(nsources);

    while let Some(mut toks) = reader.read_line()? {
        let line = toks.line;
        match toks.str()? {
            "s" if supply.is_none() => supply = Some(toks.numbers(nsources)?),
            "d" if demand.is_none() => demand = Some(toks.numbers(ndestinations)?),
            "r" if rows.len() < nsources => rows.push(toks.numbers(ndestinations)?),
            "s" | "d" => {
                return Err(Error::Data {
                    line,
                    msg: "supply and demand must be specified exactly once".to_string(),
                })
            }
            "r" => {
                return Err(Error::Data {
                    line,
                    msg: format!("unexpected 'r' line (expected exactly {} rows)", nsources),
                })
            }
            d => {
                return Err(Error::Format {
                    line,
                    msg: format!("unexpected line, expected one of 's', 'd', 'r', got '{}'", d),
                })
            }
        }
    }

    let line = reader.line_number;
    let missing = |what: &str| Error::Data {
        line,
        msg: format!("missing {}", what),
    };
    let supply = supply.ok_or_else(|| missing("supply line"))?;
    let demand = demand.ok_or_else(|| missing("demand line"))?;
    if rows.len() < nsources {
        return Err(missing("cost rows"));
    }

    Ok(Instance {
        costs: Matrix::from_rows(rows)?,
        supply,
        demand,
    })
}

pub fn read_from_file<T>(filename: &str) -> Result<Instance<T>>
where
    T: FromStr + Copy,
    T::Err: Display,
{
    read(std::fs::File::open(filename)?)
}

/// Write a transportation problem.
pub fn write<W, T>(mut w: W, instance: &Instance<T>) -> io::Result<()>
where
    W: Write,
    T: Display + Copy,
{
    let join = |xs: &[T]| xs.iter().map(|x| x.to_string()).collect::<Vec<_>>().join(" ");

    writeln!(w, "p tp {} {}", instance.supply.len(), instance.demand.len())?;
    writeln!(w, "s {}", join(&instance.supply[..]))?;
    writeln!(w, "d {}", join(&instance.demand[..]))?;
    for row in instance.costs.rows() {
        writeln!(w, "r {}", join(row))?;
    }

    Ok(())
}

/// Write the real shipments of a solution.
///
/// The first line `s <value>` contains the total cost, followed by one
/// line `f <source> <destination> <quantity>` (1-based) per shipment.
pub fn write_solution<W, T>(mut w: W, solution: &Solution<T>) -> io::Result<()>
where
    W: Write,
    T: Display + Copy,
{
    writeln!(w, "s {}", solution.cost.total)?;
    for t in &solution.cost.terms {
        writeln!(w, "f {} {} {}", t.cell.src + 1, t.cell.snk + 1, t.quantity)?;
    }

    Ok(())
}
