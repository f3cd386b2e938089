use std::fmt;

use super::Matrix;

/// Renders `| a b | c |` rows, with a bar before column `split`.
#[derive(Debug, Clone, Copy)]
pub struct Augmented<'a, T> {
    matrix: &'a Matrix<T>,
    split: usize,
}

impl<T> Matrix<T> {
    pub fn display_augmented(&self, split: usize) -> Augmented<'_, T> {
        Augmented {
            matrix: self,
            split,
        }
    }
}

fn write_rows<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    matrix: &Matrix<T>,
    split: Option<usize>,
) -> fmt::Result {
    let cells = matrix.data.iter().map(T::to_string).collect::<Vec<_>>();
    let width = cells.iter().map(String::len).max().unwrap_or(0);

    for (i, row) in cells.chunks(matrix.cols.max(1)).take(matrix.rows).enumerate() {
        if i > 0 {
            writeln!(f)?;
        }
        f.write_str("|")?;
        for (j, cell) in row.iter().enumerate() {
            if Some(j) == split {
                f.write_str(" |")?;
            }
            write!(f, " {cell:>width$}")?;
        }
        f.write_str(" |")?;
    }
    Ok(())
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self, None)
    }
}

impl<T: fmt::Display> fmt::Display for Augmented<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.matrix, Some(self.split))
    }
}
