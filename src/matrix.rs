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

//! Dense row-major matrices used for unit costs and allocations.

use crate::error::{Error, Result};
use num_traits::Zero;

use std::ops::{Index, IndexMut};
use std::slice::ChunksExact;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A dense `nrows x ncols` matrix stored row by row.
///
/// Rows correspond to sources, columns to destinations.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Matrix<T> {
    nrows: usize,
    ncols: usize,
    data: Vec<T>,
}

impl<T> Matrix<T>
where
    T: Copy,
{
    /// Create a matrix with all entries set to `value`.
    pub fn filled(nrows: usize, ncols: usize, value: T) -> Self {
        Matrix {
            nrows,
            ncols,
            data: vec![value; nrows * ncols],
        }
    }

    /// Create a matrix with all entries set to zero.
    pub fn zeros(nrows: usize, ncols: usize) -> Self
    where
        T: Zero,
    {
        Matrix::filled(nrows, ncols, T::zero())
    }

    /// Create a matrix from a list of rows.
    ///
    /// Fails with [`Error::ShapeMismatch`] if there are no rows, no
    /// columns, or if the rows have different lengths.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let nrows = rows.len();
        if nrows == 0 {
            return Err(Error::ShapeMismatch {
                what: "cost matrix rows",
                expected: 1,
                found: 0,
            });
        }
        let ncols = rows[0].len();
        if ncols == 0 {
            return Err(Error::ShapeMismatch {
                what: "cost matrix columns",
                expected: 1,
                found: 0,
            });
        }

        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            if row.len() != ncols {
                return Err(Error::ShapeMismatch {
                    what: "cost matrix row length",
                    expected: ncols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }

        Ok(Matrix { nrows, ncols, data })
    }

    pub fn num_rows(&self) -> usize {
        self.nrows
    }

    pub fn num_cols(&self) -> usize {
        self.ncols
    }

    /// Return row `i` as a slice.
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Iterate over all rows.
    pub fn rows(&self) -> ChunksExact<'_, T> {
        self.data.chunks_exact(self.ncols)
    }

    /// Iterate over the entries of column `j` from top to bottom.
    pub fn col(&self, j: usize) -> impl Iterator<Item = T> + '_ {
        self.data.iter().skip(j).step_by(self.ncols).copied()
    }

    /// Iterate over all entries with their position in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), T)> + '_ {
        let ncols = self.ncols;
        self.data.iter().enumerate().map(move |(k, &x)| ((k / ncols, k % ncols), x))
    }

    /// Append a column with all entries equal to `value`.
    pub fn push_col(&mut self, value: T) {
        let mut data = Vec::with_capacity(self.nrows * (self.ncols + 1));
        for row in self.data.chunks_exact(self.ncols) {
            data.extend_from_slice(row);
            data.push(value);
        }
        self.data = data;
        self.ncols += 1;
    }

    /// Append a row with all entries equal to `value`.
    pub fn push_row(&mut self, value: T) {
        self.data.extend(std::iter::repeat(value).take(self.ncols));
        self.nrows += 1;
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        debug_assert!(i < self.nrows && j < self.ncols);
        &self.data[i * self.ncols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        debug_assert!(i < self.nrows && j < self.ncols);
        &mut self.data[i * self.ncols + j]
    }
}
