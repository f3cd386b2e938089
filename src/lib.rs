//! Linear-algebra kernel shared by the calculator front ends.
//!
//! [`Matrix`] is generic over a [`Field`]: floating point (`f64`) or the exact
//! [`Fraction`]. Both get the same arithmetic, Gauss–Jordan elimination
//! (reduced row-echelon form, inverse, linear solve) and Laplace expansion
//! (determinant, cofactors, adjugate inverse). The floating-point domain treats
//! magnitudes below [`NEGLIGIBLE`] as zero; the exact domain only zero itself.

mod cofactor;
mod elimination;
mod error;
mod field;
pub mod guided;
mod helpers;
mod matrix;

pub use elimination::Solution;
pub use error::{Error, Result, Shape, SingularCause};
pub use field::{Field, DEFAULT_TOLERANCE, NEGLIGIBLE};
pub use fraction::{DivisionByZero, Fraction, FractionError, ParseFractionError};
pub use matrix::{Augmented, Matrix};

pub type FractionMatrix = Matrix<Fraction>;
pub type RealMatrix = Matrix<f64>;
