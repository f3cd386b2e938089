//! Gauss–Jordan elimination with partial pivoting.


use derive_more::IsVariant;

use crate::{ensure, Error, Field, Matrix, Result, Shape, SingularCause};

#[derive(Debug, Clone, PartialEq, IsVariant)]
pub enum Solution<T> {
    /// One column of values per right-hand side column.
    Unique { variables: Matrix<T> },
    Infinite { rank: usize },
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Reduction {
    pivot_columns: Vec<usize>,
    /// Columns that had no usable pivot when elimination reached them.
    deficient_columns: Vec<usize>,
}

/// Reduces `matrix` in place, pivoting only within its first `pivot_cols`
/// columns. Row operations still span every column, so anything to the right
/// is carried along.
fn reduce<T: Field>(matrix: &mut Matrix<T>, pivot_cols: usize) -> Reduction {
    let rows = matrix.rows();
    let mut reduction = Reduction::default();
    let (mut r, mut lead) = (0, 0);

    while r < rows && lead < pivot_cols {
        // first maximum in scan order wins
        let (pivot_row, magnitude) = (r + 1..rows).fold(
            (r, matrix[(r, lead)].magnitude()),
            |(best_row, best), i| {
                let candidate = matrix[(i, lead)].magnitude();
                if candidate > best {
                    (i, candidate)
                } else {
                    (best_row, best)
                }
            },
        );

        if magnitude.is_negligible() {
            log::debug!("No pivot in column {lead} below row {r}");
            // flush rounding residue so rows without a pivot come out exactly zero
            for i in r..rows {
                matrix[(i, lead)] = T::zero();
            }
            reduction.deficient_columns.push(lead);
            lead += 1;
            continue;
        }

        matrix.swap_rows_unchecked(r, pivot_row);
        let pivot = matrix[(r, lead)].clone();
        log::debug!("Pivot element: {pivot} at ({r}, {lead})");

        // divide the pivot row so the pivot becomes one
        for el in matrix.row_slice_mut(r) {
            *el = el.clone() / pivot.clone();
        }

        // clear the pivot column in every other row
        for i in (0..rows).filter(|i| i != &r) {
            let factor = matrix[(i, lead)].clone();
            matrix.add_scaled_row(i, r, &-factor);
        }

        reduction.pivot_columns.push(lead);
        r += 1;
        lead += 1;
    }

    log::debug!("Reduced:\n{matrix}");
    reduction
}

impl<T: Field> Matrix<T> {
    /// Reduced row-echelon form.
    pub fn rref(&self) -> Self {
        let mut reduced = self.clone();
        reduce(&mut reduced, self.cols());
        reduced
    }

    pub fn rank(&self) -> usize {
        let mut reduced = self.clone();
        reduce(&mut reduced, self.cols()).pivot_columns.len()
    }

    /// Inverse by reducing `[A | I]`.
    pub fn inverse(&self) -> Result<Self> {
        self.ensure_square()?;
        let n = self.rows();
        let mut augmented = self.augment(&Self::identity(n))?;

        let reduction = reduce(&mut augmented, n);
        if let Some(&column) = reduction.deficient_columns.first() {
            return Err(Error::Singular {
                cause: SingularCause::NoPivot { column },
            });
        }
        Ok(augmented.columns(n, 2 * n))
    }

    /// Solves `self * X = rhs` for `X`.
    pub fn solve(&self, rhs: &Self) -> Result<Solution<T>> {
        ensure!(
            rhs.rows() == self.rows(),
            Error::InvalidDimensions {
                expected: Shape::rows(self.rows()),
                found: Shape::rows(rhs.rows()),
            }
        );
        let unknowns = self.cols();
        let mut augmented = self.augment(rhs)?;

        let rank = reduce(&mut augmented, unknowns).pivot_columns.len();
        log::info!("Rank: {rank} of {unknowns} unknowns");

        let inconsistent = (rank..augmented.rows()).any(|i| {
            augmented.row_slice(i)[unknowns..]
                .iter()
                .any(|el| !el.is_negligible())
        });
        if inconsistent {
            log::info!("The system is inconsistent");
            return Ok(Solution::Absent);
        }
        if rank < unknowns {
            return Ok(Solution::Infinite { rank });
        }

        // full rank: pivot i sits in column i, so the first `unknowns` rows hold X
        let n_rhs = rhs.cols();
        Ok(Solution::Unique {
            variables: Self::from_fn(unknowns, n_rhs, |i, j| augmented[(i, unknowns + j)].clone()),
        })
    }
}
