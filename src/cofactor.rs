//! Laplace expansion: determinant, cofactor matrix and the adjugate inverse.
//!
//! The expansion costs O(n!) and is kept as a reference path for small
//! matrices; [`Matrix::inverse`] is the elimination-based alternative.

use num_integer::Integer;

use crate::{ensure, Error, Field, Matrix, Result, SingularCause};

impl<T: Field> Matrix<T> {
    /// The matrix with `row` and `col` removed.
    pub fn minor(&self, row: usize, col: usize) -> Result<Self> {
        self.get(row, col)?;
        Ok(self.minor_unchecked(row, col))
    }

    pub fn determinant(&self) -> Result<T> {
        self.ensure_square()?;
        Ok(self.laplace())
    }

    /// `result[i][j] = (-1)^(i+j) * det(minor(i, j))`.
    pub fn cofactor(&self) -> Result<Self> {
        self.ensure_square()?;
        Ok(Self::from_fn(self.rows(), self.cols(), |i, j| {
            let det = self.minor_unchecked(i, j).laplace();
            if (i + j).is_even() {
                det
            } else {
                -det
            }
        }))
    }

    pub fn adjugate(&self) -> Result<Self> {
        Ok(self.cofactor()?.transpose())
    }

    /// `adjugate / determinant`.
    pub fn inverse_adjugate(&self) -> Result<Self> {
        let det = crate::dbg_display!(self.determinant()?);
        ensure!(
            !det.is_negligible(),
            Error::Singular {
                cause: SingularCause::ZeroDeterminant
            }
        );
        Ok(self.adjugate()?.scale(&(T::one() / det)))
    }

    pub(crate) fn ensure_square(&self) -> Result<()> {
        ensure!(
            self.is_square(),
            Error::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            }
        );
        Ok(())
    }

    fn minor_unchecked(&self, row: usize, col: usize) -> Self {
        Self::from_fn(self.rows() - 1, self.cols() - 1, |i, j| {
            let i = if i < row { i } else { i + 1 };
            let j = if j < col { j } else { j + 1 };
            self[(i, j)].clone()
        })
    }

    /// Expansion along the first row. The empty matrix has determinant one.
    fn laplace(&self) -> T {
        match self.rows() {
            0 => T::one(),
            1 => self[(0, 0)].clone(),
            2 => {
                self[(0, 0)].clone() * self[(1, 1)].clone()
                    - self[(0, 1)].clone() * self[(1, 0)].clone()
            }
            n => (0..n).fold(T::zero(), |det, j| {
                let term = self[(0, j)].clone() * self.minor_unchecked(0, j).laplace();
                if j.is_even() {
                    det + term
                } else {
                    det - term
                }
            }),
        }
    }
}
