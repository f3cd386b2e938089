mod fraction;
mod parse;

pub use fraction::{DivisionByZero, Fraction, FractionError};
pub use parse::ParseFractionError;
