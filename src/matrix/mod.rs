mod arithmetic;
mod convert;
mod display;

#[cfg(test)]
mod tests;

use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::{ensure, Error, Field, Result, Shape};

pub use display::Augmented;

/// Dense rectangular matrix stored row-major.
///
/// Every arithmetic or transforming operation returns a fresh matrix; the
/// only mutators are element and row access.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<T>>", into = "Vec<Vec<T>>")]
#[serde(bound(serialize = "T: Clone + Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    /// Builds a matrix from a list of rows, rejecting empty and ragged input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        ensure!(
            n_rows != 0 && n_cols != 0,
            Error::InvalidDimensions {
                expected: Shape {
                    rows: None,
                    cols: None
                },
                found: Shape::exact(n_rows, n_cols),
            }
        );
        if let Some(ragged) = rows.iter().find(|row| row.len() != n_cols) {
            let found = ragged.len();
            log::debug!("Ragged input: row of {found} entries among rows of {n_cols}");
            return Err(Error::InvalidDimensions {
                expected: Shape::cols(n_cols),
                found: Shape::cols(found),
            });
        }

        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data: rows.into_iter().flatten().collect(),
        })
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        let cols = self.cols;
        let mut data = self.data.into_iter();
        (0..self.rows)
            .map(|_| data.by_ref().take(cols).collect())
            .collect()
    }

    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        self.check_bounds(row, col)?;
        Ok(&self.data[self.index_of(row, col)])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        self.check_bounds(row, col)?;
        let index = self.index_of(row, col);
        Ok(&mut self.data[index])
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    pub fn row(&self, row: usize) -> Option<&[T]> {
        (row < self.rows).then(|| self.row_slice(row))
    }

    pub fn row_iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |i| self.row_slice(i))
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Matrix<U> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(&mut f).collect(),
        }
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_row(a)?;
        self.check_row(b)?;
        self.swap_rows_unchecked(a, b);
        Ok(())
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        ensure!(
            row < self.rows && col < self.cols,
            Error::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            }
        );
        Ok(())
    }

    fn check_row(&self, row: usize) -> Result<()> {
        ensure!(
            row < self.rows,
            Error::IndexOutOfRange {
                row,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            }
        );
        Ok(())
    }

    #[inline]
    const fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub(crate) fn row_slice(&self, row: usize) -> &[T] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub(crate) fn swap_rows_unchecked(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        log::debug!("Swapping rows {a} and {b}");
        for c in 0..self.cols {
            self.data.swap(a * self.cols + c, b * self.cols + c);
        }
    }
}

impl<T: Clone> Matrix<T> {
    pub fn from_element(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![fill; rows * cols],
        }
    }

    /// `[self | other]`: the columns of `other` appended to the right.
    pub fn augment(&self, other: &Self) -> Result<Self> {
        ensure!(
            self.rows == other.rows,
            Error::InvalidDimensions {
                expected: Shape::rows(self.rows),
                found: Shape::rows(other.rows),
            }
        );
        Ok(Self::from_fn(self.rows, self.cols + other.cols, |i, j| {
            if j < self.cols {
                self[(i, j)].clone()
            } else {
                other[(i, j - self.cols)].clone()
            }
        }))
    }

    /// Columns `start..end` of every row.
    pub(crate) fn columns(&self, start: usize, end: usize) -> Self {
        Self::from_fn(self.rows, end - start, |i, j| self[(i, start + j)].clone())
    }
}

impl<T: Zero + Clone> Matrix<T> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::from_element(rows, cols, T::zero())
    }
}

impl<T: Zero + One + Clone> Matrix<T> {
    pub fn identity(size: usize) -> Self {
        Self::from_fn(size, size, |i, j| if i == j { T::one() } else { T::zero() })
    }
}

impl<T: Field> Matrix<T> {
    /// Multiplies every entry of `row` by `factor`.
    pub fn scale_row(&mut self, row: usize, factor: &T) -> Result<()> {
        self.check_row(row)?;
        for el in self.row_slice_mut(row) {
            *el = el.clone() * factor.clone();
        }
        Ok(())
    }

    /// `row[target] += multiple * row[source]`.
    pub fn add_row_multiple(&mut self, target: usize, source: usize, multiple: &T) -> Result<()> {
        self.check_row(target)?;
        self.check_row(source)?;
        self.add_scaled_row(target, source, multiple);
        Ok(())
    }

    pub(crate) fn add_scaled_row(&mut self, target: usize, source: usize, factor: &T) {
        // maybe optimize: the source row is copied to sidestep aliasing
        let source = self.row_slice(source).to_vec();
        self.row_slice_mut(target)
            .iter_mut()
            .zip(source)
            .for_each(|(target_el, source_el)| {
                *target_el = target_el.clone() + factor.clone() * source_el
            });
    }

    pub(crate) fn row_slice_mut(&mut self, row: usize) -> &mut [T] {
        let cols = self.cols;
        &mut self.data[row * cols..(row + 1) * cols]
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// # Panics
    /// Panics when the index is out of range; [`Matrix::get`] is the checked form.
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[self.index_of(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        let index = self.index_of(row, col);
        &mut self.data[index]
    }
}
