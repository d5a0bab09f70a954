use bigdecimal::{BigDecimal, FromPrimitive, ParseBigDecimalError, RoundingMode, ToPrimitive};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
const SCALE: i64 = 10_000;

#[derive(Debug, Clone, Copy, Default)]
/// A donation amount stored as an integer count of 1/10000 currency units.
///
/// Sums are exact, so two donors with the same history always compare equal
/// on `total_donations`. Letters and reports display two decimals.
///
/// # Examples
/// ```
/// use mailroom::common::money::Money;
///
/// let amount: Money = "25.5".parse().unwrap();
/// assert_eq!(amount.as_i64(), 255_000);
/// assert_eq!(amount.to_string_2dp(), "25.50");
/// ```
pub struct Money(i64);

impl Money {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Scales a decimal to 4 places, rounding half to even.
    /// Returns `None` when the result does not fit.
    fn from_decimal(bd: BigDecimal) -> Option<Self> {
        let scaled = (bd * BigDecimal::from(SCALE)).with_scale_round(0, RoundingMode::HalfEven);
        scaled.to_i64().map(Money)
    }

    /// Converts a JSON-style float, rounding half to even at the fourth
    /// decimal. Returns `None` for NaN, infinities and values outside the
    /// i64 range.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Self::from_decimal(BigDecimal::from_f64(value)?)
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / SCALE as f64
    }

    /// Average over `count` amounts summing to `self`; zero when `count` is 0.
    pub fn average_over(&self, count: usize) -> Money {
        if count == 0 {
            return Money::zero();
        }
        let avg = (BigDecimal::from(self.0) / BigDecimal::from(count as u64))
            .with_scale_round(0, RoundingMode::HalfEven);
        Money(avg.to_i64().unwrap_or(self.0))
    }

    pub fn to_string_2dp(&self) -> String {
        let bd = (BigDecimal::from(self.0) / BigDecimal::from(SCALE))
            .with_scale_round(2, RoundingMode::HalfEven);
        format!("{:.2}", bd)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().trim_start_matches('$');
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        Money::from_decimal(bd).ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_2dp())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_f64(value).ok_or_else(|| {
            de::Error::invalid_value(de::Unexpected::Float(value), &"a finite amount")
        })
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}
