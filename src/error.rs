use derive_more::{Display, Error, IsVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IsVariant)]
pub enum SingularCause {
    #[display(fmt = "no pivot in column {}", column)]
    NoPivot { column: usize },
    #[display(fmt = "determinant is zero")]
    ZeroDeterminant,
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error, IsVariant)]
pub enum Error {
    #[display(fmt = "invalid dimensions: expected {}, found {}", expected, found)]
    InvalidDimensions { expected: Shape, found: Shape },
    #[display(
        fmt = "index ({}, {}) out of range for {}x{} matrix",
        row,
        col,
        rows,
        cols
    )]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[display(fmt = "division by zero")]
    DivisionByZero,
    #[display(fmt = "matrix must be square, got {}x{}", rows, cols)]
    NotSquare { rows: usize, cols: usize },
    #[display(fmt = "matrix is singular: {}", cause)]
    Singular { cause: SingularCause },
}

/// Expected or observed matrix shape in an [`Error::InvalidDimensions`].
/// `None` in either position means "any".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "{}x{}", "DisplayDim(*rows)", "DisplayDim(*cols)")]
pub struct Shape {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
}

struct DisplayDim(Option<usize>);

impl std::fmt::Display for DisplayDim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(dim) => write!(f, "{dim}"),
            None => f.write_str("_"),
        }
    }
}

impl Shape {
    pub const fn exact(rows: usize, cols: usize) -> Self {
        Self {
            rows: Some(rows),
            cols: Some(cols),
        }
    }

    pub const fn rows(rows: usize) -> Self {
        Self {
            rows: Some(rows),
            cols: None,
        }
    }

    pub const fn cols(cols: usize) -> Self {
        Self {
            rows: None,
            cols: Some(cols),
        }
    }
}

impl From<fraction::DivisionByZero> for Error {
    fn from(_: fraction::DivisionByZero) -> Self {
        Self::DivisionByZero
    }
}

pub type Result<T> = std::result::Result<T, Error>;
