use fraction::Fraction;
use nalgebra::{DMatrix, Scalar};

use super::Matrix;
use crate::Error;

impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = Error;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl<T> From<Matrix<T>> for Vec<Vec<T>> {
    fn from(matrix: Matrix<T>) -> Self {
        matrix.into_rows()
    }
}

impl<T: Scalar> From<DMatrix<T>> for Matrix<T> {
    fn from(matrix: DMatrix<T>) -> Self {
        Self::from_fn(matrix.nrows(), matrix.ncols(), |i, j| matrix[(i, j)].clone())
    }
}

impl<T: Scalar> From<Matrix<T>> for DMatrix<T> {
    fn from(matrix: Matrix<T>) -> Self {
        DMatrix::from_row_slice(matrix.rows, matrix.cols, &matrix.data)
    }
}

impl Matrix<Fraction> {
    pub fn to_f64(&self) -> Matrix<f64> {
        self.map(Fraction::to_f64)
    }
}
