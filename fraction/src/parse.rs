use std::str::FromStr;

use derive_more::{Display, Error, IsVariant};
use num_traits::Zero;

use crate::{Fraction, FractionError};

#[derive(Debug, Clone, PartialEq, Eq, Display, Error, IsVariant)]
pub enum ParseFractionError {
    #[display(fmt = "empty input")]
    Empty,
    #[display(fmt = "malformed fraction {:?}", input)]
    Malformed { input: String },
    #[display(fmt = "zero denominator")]
    ZeroDenominator,
}

impl FromStr for Fraction {
    type Err = ParseFractionError;

    /// Accepts `a`, `a/b` and decimal `a.b` forms. Whitespace anywhere in the
    /// text is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>();
        if text.is_empty() {
            return Err(ParseFractionError::Empty);
        }
        let malformed = || ParseFractionError::Malformed {
            input: s.to_owned(),
        };

        if let Some((numer, denom)) = text.split_once('/') {
            let numer = numer.parse::<i64>().map_err(|_| malformed())?;
            let denom = denom.parse::<i64>().map_err(|_| malformed())?;
            return Fraction::new(numer, denom).map_err(|err| match err {
                FractionError::DivisionByZero => ParseFractionError::ZeroDenominator,
                FractionError::Overflow { .. } => malformed(),
            });
        }

        if let Some((whole, frac)) = text.split_once('.') {
            return parse_decimal(whole, frac).ok_or_else(malformed);
        }

        text.parse::<i64>()
            .map(Fraction::from_integer)
            .map_err(|_| malformed())
    }
}

/// `whole.frac` as `whole + frac / 10^digits`, keeping the sign of the whole
/// literal so that `-0.5` reads as `-1/2`.
fn parse_decimal(whole: &str, frac: &str) -> Option<Fraction> {
    let (negative, whole) = match whole.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, whole.strip_prefix('+').unwrap_or(whole)),
    };
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let whole = if whole.is_empty() { 0 } else { whole.parse::<i64>().ok()? };
    let scale = 10i64.checked_pow(u32::try_from(frac.len()).ok()?)?;
    let frac = if frac.is_empty() { 0 } else { frac.parse::<i64>().ok()? };
    let numer = whole.checked_mul(scale)?.checked_add(frac)?;

    let value = Fraction::new(numer, scale).ok()?;
    Some(if negative { -value } else { value })
}

impl Fraction {
    /// Lenient parse for calculator cells: any text that is not a valid
    /// fraction reads as zero.
    pub fn parse(text: &str) -> Self {
        match text.parse::<Self>() {
            Ok(fraction) => fraction,
            Err(ParseFractionError::Empty) => Self::zero(),
            Err(err) => {
                log::warn!("{err}, substituting 0");
                Self::zero()
            }
        }
    }
}
