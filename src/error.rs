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

//! Errors of the transportation algorithms and instance readers.

use std::error;
use std::fmt;
use std::io;

/// Error returned by balancing, solving or reading an instance.
#[derive(Debug)]
pub enum Error {
    /// The dimensions of the input data are inconsistent.
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    /// A cost, supply or demand value is negative (or not comparable).
    Negative { what: &'static str, index: usize },
    /// The selector found no candidate cell although quantity remains.
    NoFeasibleCell {
        step: usize,
        open_sources: usize,
        open_destinations: usize,
    },
    /// Too many allocations without any progress.
    Stalled { step: usize },
    Io(io::Error),
    Format { line: usize, msg: String },
    Data { line: usize, msg: String },
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::Error::*;
        match self {
            ShapeMismatch { what, expected, found } => {
                write!(fmt, "Shape mismatch in {}: expected {}, got {}", what, expected, found)
            }
            Negative { what, index } => write!(fmt, "Invalid {} at index {}: must be non-negative", what, index),
            NoFeasibleCell {
                step,
                open_sources,
                open_destinations,
            } => write!(
                fmt,
                "No feasible cell after step {} ({} sources and {} destinations still open)",
                step, open_sources, open_destinations
            ),
            Stalled { step } => write!(fmt, "No progress in allocation at step {}", step),
            Io(err) => err.fmt(fmt),
            Format { line, msg } => write!(fmt, "Format error on line {}: {}", line, msg),
            Data { line, msg } => write!(fmt, "Data error on line {}: {}", line, msg),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
