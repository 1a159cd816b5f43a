//! Money type for representing currency amounts
//!
//! Amounts are stored as an integer count of minor units (cents) so that
//! summing any number of transactions is exact. Floating point only appears
//! when a ratio is requested for display (progress bars, percentages).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use budget_dashboard::models::Money;
    /// let amount = Money::from_cents(72_000); // 720.00
    /// assert_eq!(amount.major(), 720);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    pub const fn from_major(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole currency units (truncated toward zero)
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Fractional part in cents (0-99)
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Divide evenly into `parts`, truncating toward zero
    ///
    /// Returns zero when `parts` is zero.
    pub const fn split_even(&self, parts: i64) -> Self {
        if parts == 0 {
            Self(0)
        } else {
            Self(self.0 / parts)
        }
    }

    /// Ratio of this amount to `other`
    ///
    /// Returns `None` when `other` is zero.
    pub fn ratio_to(&self, other: Money) -> Option<f64> {
        if other.is_zero() {
            None
        } else {
            Some(self.0 as f64 / other.0 as f64)
        }
    }

    /// The amount as a floating point number of whole units, for charts and CSV
    pub fn as_major_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "720", "720.5", "1,200.50", "-10.50" and amounts with a leading
    /// currency symbol such as "$12.00", "P1,200", "-$5" or "$-5". More than
    /// two fractional digits round half away from zero, matching numeric input.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        let s = s.trim();
        let (sign_before, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };
        let s = s.trim_start_matches(CURRENCY_SYMBOLS).trim_start();
        let (sign_after, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };
        if sign_before && sign_after {
            return Err(invalid());
        }

        let cleaned: String = s.chars().filter(|c| *c != ',').collect();
        if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(invalid());
        }

        let (whole, frac) = cleaned.split_once('.').unwrap_or((cleaned.as_str(), ""));
        if frac.contains('.') || (whole.is_empty() && frac.is_empty()) {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let digits: Vec<i64> = frac.bytes().map(|b| i64::from(b - b'0')).collect();
        let mut frac_cents = digits.first().copied().unwrap_or(0) * 10
            + digits.get(1).copied().unwrap_or(0);
        if digits.get(2).map_or(false, |&d| d >= 5) {
            frac_cents += 1;
        }

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .ok_or_else(invalid)?;

        Ok(Self(if sign_before || sign_after { -cents } else { cents }))
    }
}

/// Currency symbols accepted in front of an amount
const CURRENCY_SYMBOLS: &[char] = &['$', 'P', '₱', '€', '£', '¥', 'R'];

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

/// Plain fixed-point rendering without a currency symbol; see
/// [`crate::display::format_currency`] for the presentation form.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.major().abs(), self.minor())
        } else {
            write!(f, "{}.{:02}", self.major(), self.minor())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Serde adapter for record fields stored as decimal currency units
///
/// Data-store records carry amounts such as `156.32` or `"1,200.00"` rather
/// than cents. Use with `#[serde(with = "money::as_major")]`.
pub mod as_major {
    use super::Money;
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S: Serializer>(amount: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        if amount.minor() == 0 {
            serializer.serialize_i64(amount.major())
        } else {
            serializer.serialize_f64(amount.as_major_f64())
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        deserializer.deserialize_any(MajorVisitor)
    }

    struct MajorVisitor;

    impl<'de> Visitor<'de> for MajorVisitor {
        type Value = Money;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a currency amount as a number or string")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
            v.checked_mul(100)
                .map(Money::from_cents)
                .ok_or_else(|| E::custom(format!("amount out of range: {}", v)))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
            let v = i64::try_from(v).map_err(|_| E::custom(format!("amount out of range: {}", v)))?;
            self.visit_i64(v)
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
            if !v.is_finite() {
                return Err(E::custom("amount must be finite"));
            }
            Ok(Money::from_cents((v * 100.0).round() as i64))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
            Money::parse(v).map_err(E::custom)
        }
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.major(), 10);
        assert_eq!(m.minor(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::zero().to_string(), "0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major(5200);
        let b = Money::from_major(1920);

        assert_eq!((a - b).cents(), 328_000);
        assert_eq!((a + b).cents(), 712_000);
        assert_eq!((-a).cents(), -520_000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("P1,200").unwrap().cents(), 120_000);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse("156.32").unwrap().cents(), 15632);
        assert_eq!(Money::parse("$-10.00").unwrap().cents(), -1000);
        assert_eq!(Money::parse("-$10.00").unwrap().cents(), -1000);
        assert_eq!(Money::parse("P-250").unwrap().cents(), -25_000);
    }

    #[test]
    fn test_parse_rounds_extra_digits() {
        assert_eq!(Money::parse("1.999").unwrap().cents(), 200);
        assert_eq!(Money::parse("1.994").unwrap().cents(), 199);
        assert_eq!(Money::parse("-1.995").unwrap().cents(), -200);

        let r: Record = serde_json::from_str(r#"{"amount": 1.999}"#).unwrap();
        assert_eq!(r.amount, Money::parse("1.999").unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("P").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("12abc").is_err());
        assert!(Money::parse("abc12").is_err());
        assert!(Money::parse("--10").is_err());
        assert!(Money::parse("-$-10").is_err());
        assert!(Money::parse(".").is_err());
    }

    #[test]
    fn test_ratio() {
        let spent = Money::from_major(720);
        let top = Money::from_major(1200);
        assert_eq!(spent.ratio_to(top), Some(0.6));
        assert_eq!(spent.ratio_to(Money::zero()), None);
    }

    #[test]
    fn test_split_even() {
        assert_eq!(Money::from_cents(1000).split_even(3).cents(), 333);
        assert_eq!(Money::from_cents(-1000).split_even(3).cents(), -333);
        assert_eq!(Money::from_cents(1000).split_even(0), Money::zero());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let by_ref: Money = amounts.iter().sum();
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
        assert_eq!(by_ref, total);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }

    #[derive(Serialize, Deserialize)]
    struct Record {
        #[serde(with = "as_major")]
        amount: Money,
    }

    #[test]
    fn test_as_major_accepts_numbers_and_strings() {
        let r: Record = serde_json::from_str(r#"{"amount": 156.32}"#).unwrap();
        assert_eq!(r.amount.cents(), 15632);

        let r: Record = serde_json::from_str(r#"{"amount": 5200}"#).unwrap();
        assert_eq!(r.amount.cents(), 520_000);

        let r: Record = serde_json::from_str(r#"{"amount": "1,200.50"}"#).unwrap();
        assert_eq!(r.amount.cents(), 120_050);
    }

    #[test]
    fn test_as_major_serializes_units() {
        let json = serde_json::to_string(&Record {
            amount: Money::from_major(720),
        })
        .unwrap();
        assert_eq!(json, r#"{"amount":720}"#);

        let json = serde_json::to_string(&Record {
            amount: Money::from_cents(4550),
        })
        .unwrap();
        assert_eq!(json, r#"{"amount":45.5}"#);
    }
}
