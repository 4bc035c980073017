use crate::Result;

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Fixed-point amount, stored as a whole number of cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);

    const CENTS_PER_UNIT: i64 = 100;

    /// Builds an amount from whole currency units, e.g. `Money::units(500)` is 500.00
    pub const fn units(units: i64) -> Self {
        return Self(units * Self::CENTS_PER_UNIT);
    }

    /// Parses operator text such as `"1000"`, `"12.5"` or `"-3.75"`
    pub fn parse(string: &str) -> Result<Self> {
        let trimmed = string.trim();

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let mut parts = unsigned.split('.');

        if parts.clone().count() > 2 {
            Err(MoneyError::Parse("Too many decimal points", string.to_string()))?
        }

        let units = parts.next().unwrap_or_default();
        let cents = parts.next().unwrap_or_default();

        if units.is_empty() && cents.is_empty() {
            Err(MoneyError::Parse("No digits found", string.to_string()))?
        }

        if cents.len() > 2 {
            Err(MoneyError::Parse("Too many decimal places", string.to_string()))?
        }

        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if !all_digits(units) || !all_digits(cents) {
            Err(MoneyError::Parse("Invalid digits", string.to_string()))?
        }

        let units: i64 = if units.is_empty() { 0 } else { units.parse()? };
        let cents: i64 = format!("{:0<2}", cents).parse()?;

        let value = units
            .checked_mul(Self::CENTS_PER_UNIT)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(|| MoneyError::Parse("Amount too large", string.to_string()))?;

        return Ok(Money(if negative { -value } else { value }));
    }

    pub fn is_positive(&self) -> bool {
        return self.0 > 0;
    }

    pub fn add(&mut self, other: &Self) -> Result {
        self.0 = self
            .0
            .checked_add(other.0)
            .ok_or(MoneyError::Overflow("add", *self, *other))?;

        return Ok(());
    }

    pub fn sub(&mut self, other: &Self) -> Result {
        self.0 = self
            .0
            .checked_sub(other.0)
            .ok_or(MoneyError::Overflow("sub", *self, *other))?;

        return Ok(());
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per_unit = Self::CENTS_PER_UNIT as u64;

        return write!(f, "{sign}{}.{:02}", abs / per_unit, abs % per_unit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(Money::parse("1000").unwrap(), Money(100000));
        assert_eq!(Money::parse("12.5").unwrap(), Money(1250));
        assert_eq!(Money::parse(" 0.07 ").unwrap(), Money(7));
        assert_eq!(Money::parse(".5").unwrap(), Money(50));
        assert_eq!(Money::parse("-3.75").unwrap(), Money(-375));
        assert_eq!(Money::parse("0").unwrap(), Money::ZERO);
    }

    #[test]
    fn parse_rejects_garbage() {
        for input in ["", "abc", "1.2.3", "1.234", "1e5", "--1", "."] {
            let err = Money::parse(input).unwrap_err();
            assert!(
                err.downcast_ref::<MoneyError>().is_some(),
                "{input:?} should fail with a MoneyError, got {err}"
            );
        }
    }

    #[test]
    fn add_and_sub() {
        let mut money = Money::units(10);

        money.add(&Money(250)).unwrap();
        assert_eq!(money, Money(1250));

        money.sub(&Money::units(20)).unwrap();
        assert_eq!(money, Money(-750));
    }

    #[test]
    fn add_overflow_leaves_value_untouched() {
        let mut money = Money::MAX;

        let err = money.add(&Money(1)).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<MoneyError>(),
            Some(MoneyError::Overflow("add", _, _))
        ));
        assert_eq!(money, Money::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(Money(100000).to_string(), "1000.00");
        assert_eq!(Money(1205).to_string(), "12.05");
        assert_eq!(Money(-5).to_string(), "-0.05");
    }
}
