use super::Matrix;
use crate::{ensure, Error, Field, Result, Shape};

impl<T: Field> Matrix<T> {
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.ensure_same_shape(other)?;
        Ok(self.zip_map(other, |a, b| a.clone() + b.clone()))
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.ensure_same_shape(other)?;
        Ok(self.zip_map(other, |a, b| a.clone() - b.clone()))
    }

    /// Matrix product; `self.cols()` must equal `other.rows()`.
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        ensure!(
            self.cols == other.rows,
            Error::InvalidDimensions {
                expected: Shape::rows(self.cols),
                found: Shape::rows(other.rows),
            }
        );
        Ok(Self::from_fn(self.rows, other.cols, |i, j| {
            (0..self.cols).fold(T::zero(), |acc, k| {
                acc + self[(i, k)].clone() * other[(k, j)].clone()
            })
        }))
    }

    pub fn scale(&self, scalar: &T) -> Self {
        self.map(|el| el.clone() * scalar.clone())
    }

    /// Divides every entry by `scalar`, which must not be (near) zero.
    pub fn try_div(&self, scalar: &T) -> Result<Self> {
        ensure!(!scalar.is_negligible(), Error::DivisionByZero);
        Ok(self.map(|el| el.clone() / scalar.clone()))
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |i, j| self[(j, i)].clone())
    }

    /// Entrywise comparison: within [`DEFAULT_TOLERANCE`](crate::DEFAULT_TOLERANCE)
    /// for floats, exact for fractions. Matrices of different shapes are never equal.
    pub fn approx_eq(a: &Self, b: &Self) -> bool {
        a.shape() == b.shape() && a.data.iter().zip(&b.data).all(|(x, y)| x.approx_eq(y))
    }

    fn ensure_same_shape(&self, other: &Self) -> Result<()> {
        ensure!(
            self.shape() == other.shape(),
            Error::InvalidDimensions {
                expected: Shape::exact(self.rows, self.cols),
                found: Shape::exact(other.rows, other.cols),
            }
        );
        Ok(())
    }

    fn zip_map(&self, other: &Self, f: impl Fn(&T, &T) -> T) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| f(a, b))
                .collect(),
        }
    }
}

impl Matrix<f64> {
    pub fn approx_eq_with(a: &Self, b: &Self, tolerance: f64) -> bool {
        a.shape() == b.shape()
            && a
                .data
                .iter()
                .zip(&b.data)
                .all(|(x, y)| (x - y).abs() <= tolerance)
    }
}
