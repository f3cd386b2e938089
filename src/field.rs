//! Scalar domains a [`Matrix`](crate::Matrix) can be built over.
//!
//! Elimination and cofactor expansion are written once against [`Field`];
//! the two implementations differ only in what counts as zero.

use std::{
    fmt,
    ops::{Div, Mul, Neg, Sub},
};

use fraction::Fraction;
use num_traits::{One, Zero};

/// Floating-point values with a smaller magnitude are treated as zero when
/// choosing pivots or dividing.
pub const NEGLIGIBLE: f64 = 1e-10;

/// Default entrywise tolerance of floating-point matrix comparison.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

pub trait Field:
    Clone
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Zero
    + One
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Absolute value, used to order pivot candidates.
    fn magnitude(&self) -> Self;

    /// Whether the value is too small to pivot on or divide by.
    fn is_negligible(&self) -> bool;

    /// Entry comparison used by [`Matrix::approx_eq`](crate::Matrix::approx_eq).
    fn approx_eq(&self, other: &Self) -> bool;
}

impl Field for f64 {
    #[inline]
    fn magnitude(&self) -> Self {
        self.abs()
    }

    #[inline]
    fn is_negligible(&self) -> bool {
        self.abs() < NEGLIGIBLE
    }

    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        (self - other).abs() <= DEFAULT_TOLERANCE
    }
}

impl Field for Fraction {
    #[inline]
    fn magnitude(&self) -> Self {
        self.abs()
    }

    #[inline]
    fn is_negligible(&self) -> bool {
        self.is_zero()
    }

    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        self == other
    }
}
