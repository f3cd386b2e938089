use std::{
    fmt,
    iter::{Product, Sum},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use derive_more::{Display, Error, IsVariant};
use num_rational::{Ratio, Rational64};
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, One, Signed, Zero};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display(fmt = "division by zero")]
pub struct DivisionByZero;

/// Reasons a numerator/denominator pair does not make a [`Fraction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, IsVariant)]
pub enum FractionError {
    #[display(fmt = "division by zero")]
    DivisionByZero,
    /// The reduced value needs a numerator or denominator outside `i64`,
    /// as `i64::MIN / -1` does.
    #[display(fmt = "{}/{} is not representable", numer, denom)]
    Overflow { numer: i64, denom: i64 },
}

impl From<DivisionByZero> for FractionError {
    fn from(_: DivisionByZero) -> Self {
        Self::DivisionByZero
    }
}

/// Exact rational number over `i64`.
///
/// The value is always kept in lowest terms with a positive denominator, and
/// zero is `0/1`, so two fractions are equal exactly when their numerators
/// and denominators are.
///
/// Operators panic when a result leaves the `i64` range, in release builds as
/// well as debug ones; they never wrap. The [`CheckedAdd`], [`CheckedSub`],
/// [`CheckedMul`] and [`CheckedDiv`] impls return `None` instead.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "(i64, i64)", into = "(i64, i64)")]
pub struct Fraction(Rational64);

impl Fraction {
    pub fn new(numer: i64, denom: i64) -> Result<Self, FractionError> {
        if denom == 0 {
            return Err(FractionError::DivisionByZero);
        }
        // reduce in i128, where moving the sign off `i64::MIN` cannot overflow
        let wide = Ratio::<i128>::new(numer.into(), denom.into());
        match (i64::try_from(*wide.numer()), i64::try_from(*wide.denom())) {
            (Ok(n), Ok(d)) => Ok(Self(Rational64::new_raw(n, d))),
            _ => Err(FractionError::Overflow { numer, denom }),
        }
    }

    pub fn from_integer(integer: i64) -> Self {
        Self(Rational64::from_integer(integer))
    }

    pub fn numer(&self) -> i64 {
        *self.0.numer()
    }

    pub fn denom(&self) -> i64 {
        *self.0.denom()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    pub fn recip(&self) -> Result<Self, DivisionByZero> {
        if self.is_zero() {
            return Err(DivisionByZero);
        }
        Ok(Self(self.0.recip()))
    }

    /// Fallible counterpart of `/`.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, DivisionByZero> {
        if rhs.is_zero() {
            return Err(DivisionByZero);
        }
        Ok(self / rhs)
    }

    pub fn to_f64(&self) -> f64 {
        self.numer() as f64 / self.denom() as f64
    }
}

impl From<i64> for Fraction {
    fn from(integer: i64) -> Self {
        Self::from_integer(integer)
    }
}

impl From<Rational64> for Fraction {
    fn from(ratio: Rational64) -> Self {
        Self(ratio)
    }
}

impl From<Fraction> for Rational64 {
    fn from(fraction: Fraction) -> Self {
        fraction.0
    }
}

impl TryFrom<(i64, i64)> for Fraction {
    type Error = FractionError;

    fn try_from((numer, denom): (i64, i64)) -> Result<Self, Self::Error> {
        Self::new(numer, denom)
    }
}

impl From<Fraction> for (i64, i64) {
    fn from(fraction: Fraction) -> Self {
        (fraction.numer(), fraction.denom())
    }
}

impl Zero for Fraction {
    #[inline]
    fn zero() -> Self {
        Self(Rational64::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Fraction {
    #[inline]
    fn one() -> Self {
        Self(Rational64::one())
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }
}

macro_rules! forward_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl $Op for Fraction {
            type Output = Fraction;

            fn $op(self, rhs: Self) -> Self::Output {
                (&self).$op(&rhs)
            }
        }

        impl $Op<&Fraction> for Fraction {
            type Output = Fraction;

            fn $op(self, rhs: &Fraction) -> Self::Output {
                (&self).$op(rhs)
            }
        }

        impl $OpAssign for Fraction {
            fn $op_assign(&mut self, rhs: Self) {
                *self = (&*self).$op(&rhs);
            }
        }

        impl $OpAssign<&Fraction> for Fraction {
            fn $op_assign(&mut self, rhs: &Fraction) {
                *self = (&*self).$op(rhs);
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);
forward_binop!(Div, div, DivAssign, div_assign);

fn overflow(op: &str) -> ! {
    panic!("attempt to {op} fractions with overflow")
}

impl Add for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).unwrap_or_else(|| overflow("add"))
    }
}

impl Sub for &Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).unwrap_or_else(|| overflow("subtract"))
    }
}

impl Mul for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).unwrap_or_else(|| overflow("multiply"))
    }
}

impl Div for &Fraction {
    type Output = Fraction;

    /// # Panics
    /// Panics when `rhs` is zero, like integer division. Use
    /// [`Fraction::checked_div`] to get an error instead.
    fn div(self, rhs: Self) -> Self::Output {
        if rhs.is_zero() {
            panic!("attempt to divide a fraction by zero");
        }
        CheckedDiv::checked_div(self, rhs).unwrap_or_else(|| overflow("divide"))
    }
}

impl CheckedAdd for Fraction {
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        self.0.checked_add(&rhs.0).map(Self)
    }
}

impl CheckedSub for Fraction {
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        self.0.checked_sub(&rhs.0).map(Self)
    }
}

impl CheckedMul for Fraction {
    fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        self.0.checked_mul(&rhs.0).map(Self)
    }
}

/// `None` on a zero divisor as well as on overflow.
impl CheckedDiv for Fraction {
    fn checked_div(&self, rhs: &Self) -> Option<Self> {
        self.0.checked_div(&rhs.0).map(Self)
    }
}

impl Neg for Fraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Self::Output {
        match self.numer().checked_neg() {
            Some(numer) => Fraction(Rational64::new_raw(numer, self.denom())),
            None => overflow("negate"),
        }
    }
}

impl Sum for Fraction {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |sum, el| sum + el)
    }
}

impl<'a> Sum<&'a Fraction> for Fraction {
    fn sum<I: Iterator<Item = &'a Fraction>>(iter: I) -> Self {
        iter.fold(Self::zero(), |sum, el| sum + el)
    }
}

impl Product for Fraction {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |product, el| product * el)
    }
}

impl fmt::Display for Fraction {
    /// `n` for integers, `n/d` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
