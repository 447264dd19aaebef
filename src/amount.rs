//! Overflow-checked monetary arithmetic

use crate::error::{Error, Result};
use rust_decimal::Decimal;

/// `a + b`, failing with [`Error::Arithmetic`] instead of panicking
pub fn checked_add(a: Decimal, b: Decimal, what: &'static str) -> Result<Decimal> {
    a.checked_add(b).ok_or(Error::Arithmetic(what))
}

/// Sum of `amounts`, failing with [`Error::Arithmetic`] on overflow
pub fn checked_sum<I>(amounts: I, what: &'static str) -> Result<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, x| checked_add(acc, x, what))
}
