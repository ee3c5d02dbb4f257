//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (hundredths, i64) so that sums are
//! exact and re-running an aggregation yields identical totals. On the wire
//! amounts are decimal numbers in major units (`100.5`), which is what the
//! finance API sends.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use finsight::models::Money;
    /// let amount = Money::from_minor(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a Money amount from whole units
    pub const fn from_major(major: i64) -> Self {
        Self(major * 100)
    }

    /// Create a Money amount from a floating point value in major units
    ///
    /// Returns `None` for NaN and infinities.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let minor = (value * 100.0).round();
        if minor.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Self(minor as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn whole(&self) -> i64 {
        self.0 / 100
    }

    /// Get the fractional portion (0-99)
    pub const fn fraction(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Add two amounts, returning `None` on overflow
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Self(sum)),
            None => None,
        }
    }

    /// Value in major units as a float, for percentages and JSON output
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Multiply by an exchange rate, rounding to minor units
    pub fn convert(&self, rate: f64) -> Option<Self> {
        Self::from_f64(self.to_f64() * rate)
    }

    /// Split into `parts` equal shares, rounding each share up to a whole unit
    ///
    /// Non-positive amounts yield zero; `parts` below one is treated as one.
    pub fn div_ceil_whole(&self, parts: u32) -> Self {
        if self.0 <= 0 {
            return Self::zero();
        }
        let divisor = 100 * i64::from(parts.max(1));
        Self::from_major((self.0 + divisor - 1) / divisor)
    }

    /// Parse a money amount typed by the user, in major units
    ///
    /// Accepts formats: "10.50", "-10.50", "10", "10,5". Digits past the
    /// second decimal place are rounded half away from zero. Unlike
    /// [`Money::coerce`] the whole string must be a number.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let normalized = if body.contains('.') {
            body.to_string()
        } else {
            body.replacen(',', ".", 1)
        };

        let (whole_str, frac_str) = match normalized.split_once('.') {
            Some((w, f)) => (w, f),
            None => (normalized.as_str(), ""),
        };

        if whole_str.is_empty() && frac_str.is_empty() {
            return Err(invalid());
        }
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(whole_str) || !all_digits(frac_str) {
            return Err(invalid());
        }

        let whole: i64 = if whole_str.is_empty() {
            0
        } else {
            whole_str.parse().map_err(|_| invalid())?
        };

        let digits: Vec<i64> = frac_str
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(i64::from)
            .collect();
        let mut cents = digits.first().copied().unwrap_or(0) * 10 + digits.get(1).copied().unwrap_or(0);
        if digits.get(2).copied().unwrap_or(0) >= 5 {
            cents += 1;
        }

        let minor = whole
            .checked_mul(100)
            .and_then(|m| m.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -minor } else { minor }))
    }

    /// Coerce a loosely formatted amount from the API
    ///
    /// Leading whitespace is skipped and the longest numeric prefix (sign,
    /// digits, optional fraction, optional exponent) is read, so `"50 RUB"`
    /// is 50 and `"1e3"` is 1000. Returns `None` when no digit leads the text
    /// or the value does not fit.
    pub fn coerce(s: &str) -> Option<Self> {
        let text = s.trim_start();
        let bytes = text.as_bytes();
        let digits_from = |start: usize| {
            bytes[start..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count()
        };

        let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
        let int_digits = digits_from(end);
        end += int_digits;

        let mut frac_digits = 0;
        if bytes.get(end) == Some(&b'.') {
            frac_digits = digits_from(end + 1);
            end += 1 + frac_digits;
        }
        if int_digits + frac_digits == 0 {
            return None;
        }

        let mantissa_end = end;
        if matches!(bytes.get(end), Some(b'e' | b'E')) {
            let mut exp = end + 1;
            if matches!(bytes.get(exp), Some(b'+' | b'-')) {
                exp += 1;
            }
            let exp_digits = digits_from(exp);
            if exp_digits > 0 {
                end = exp + exp_digits;
            }
        }

        let number = &text[..end];
        if end == mantissa_end {
            Self::parse(number).ok()
        } else {
            number.parse::<f64>().ok().and_then(Self::from_f64)
        }
    }

    /// Format with an ISO currency code suffix
    pub fn format_with_currency(&self, currency: &str) -> String {
        format!("{} {}", self, currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.whole().abs(), self.fraction())
        } else {
            write!(f, "{}.{:02}", self.whole(), self.fraction())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

/// Wire shapes an amount can arrive in
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
    Null(()),
    Other(serde_json::Value),
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawAmount::deserialize(deserializer)? {
            RawAmount::Number(n) => Money::from_f64(n)
                .ok_or_else(|| de::Error::custom(format!("amount out of range: {}", n))),
            RawAmount::Text(s) => Money::coerce(&s)
                .ok_or_else(|| de::Error::custom(format!("amount is not numeric: {:?}", s))),
            RawAmount::Null(()) => Err(de::Error::custom("amount is null")),
            RawAmount::Other(v) => Err(de::Error::custom(format!("amount is not a number: {}", v))),
        }
    }
}

/// A transaction amount as received, which may fail numeric coercion
///
/// Invalid amounts are kept so that the record still shows up in filtered
/// lists; aggregation treats them as contributing nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Amount {
    Valid(Money),
    Invalid(String),
}

impl Amount {
    /// Placeholder for a record that carries no amount at all
    pub fn missing() -> Self {
        Self::Invalid(String::new())
    }

    /// The numeric value, if the amount parsed
    pub fn value(&self) -> Option<Money> {
        match self {
            Self::Valid(m) => Some(*m),
            Self::Invalid(_) => None,
        }
    }

    /// The value, with unparsable amounts counting as zero
    pub fn value_or_zero(&self) -> Money {
        self.value().unwrap_or_default()
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

impl From<Money> for Amount {
    fn from(money: Money) -> Self {
        Self::Valid(money)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(m) => write!(f, "{}", m),
            Self::Invalid(raw) => write!(f, "?{}", raw),
        }
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Valid(m) => m.serialize(serializer),
            Self::Invalid(raw) => serializer.serialize_str(raw),
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawAmount::deserialize(deserializer)? {
            RawAmount::Number(n) => match Money::from_f64(n) {
                Some(m) => Self::Valid(m),
                None => Self::Invalid(n.to_string()),
            },
            RawAmount::Text(s) => match Money::coerce(&s) {
                Some(m) => Self::Valid(m),
                None => Self::Invalid(s),
            },
            RawAmount::Null(()) => Self::missing(),
            RawAmount::Other(v) => Self::Invalid(v.to_string()),
        })
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
