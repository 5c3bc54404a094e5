use std::{fmt, ops};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An amount of money in US dollars, stored as whole cents so sums are exact. Serialized as
/// decimal dollars, like `1.52`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn cents(cents: i64) -> Money {
        Money(cents)
    }

    /// Rounds to the nearest cent. Panics on non-finite input.
    pub fn dollars(value: f64) -> Money {
        if !value.is_finite() {
            panic!("Bad Money {}", value);
        }
        Money((value * 100.0).round() as i64)
    }

    pub fn inner_cents(self) -> i64 {
        self.0
    }

    pub fn to_dollars(self) -> f64 {
        (self.0 as f64) / 100.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl ops::Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl ops::AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        *self = *self + other;
    }
}

impl std::iter::Sum for Money {
    fn sum<I>(iter: I) -> Money
    where
        I: Iterator<Item = Money>,
    {
        let mut sum = Money::ZERO;
        for x in iter {
            sum += x;
        }
        sum
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        self.to_dollars().serialize(s)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Money, D::Error> {
        let dollars = <f64>::deserialize(d)?;
        if !dollars.is_finite() {
            return Err(serde::de::Error::custom(format!("bad amount {}", dollars)));
        }
        Ok(Money::dollars(dollars))
    }
}
