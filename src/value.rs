use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

/// Internal dynamic representation of a host value flowing through the
/// conversion contract, decoupled from any one driver's wire types.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Value {
    Null,
    Boolean(bool),
    SmallInt(i16),
    Int(i32),
    BigInt(i64),
    Float(f64),
    Decimal(rust_decimal::Decimal),
    String(String),
    Bytes(Vec<u8>),
    Uuid(uuid::Uuid),
    Json(serde_json::Value),
    Array(Vec<Value>),
    DateTime(DateTimeValue),
    Interval(Interval),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::SmallInt(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::BigInt(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

/// Whether a temporal host value came from the mutable or the immutable
/// family of logical types.
///
/// Immutable-only types reject mutable-tagged values; mutable types accept
/// both families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutability {
    Mutable,
    Immutable,
}

/// A temporal host value: a civil datetime, an optional fixed UTC offset
/// for timezone-aware kinds, and the mutability tag.
///
/// Pure dates carry a zeroed time-of-day; pure times are anchored at the
/// epoch day (1970-01-01) so unrelated components are deterministic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateTimeValue {
    naive: NaiveDateTime,
    offset: Option<FixedOffset>,
    mutability: Mutability,
}

impl DateTimeValue {
    pub fn new(naive: NaiveDateTime, mutability: Mutability) -> Self {
        Self { naive, offset: None, mutability }
    }

    pub fn with_offset(naive: NaiveDateTime, offset: FixedOffset, mutability: Mutability) -> Self {
        Self { naive, offset: Some(offset), mutability }
    }

    /// A pure date; time-of-day is zeroed.
    pub fn from_date(date: NaiveDate, mutability: Mutability) -> Self {
        Self::new(date.and_time(NaiveTime::MIN), mutability)
    }

    /// A pure time, anchored at the epoch day.
    pub fn from_time(time: NaiveTime, mutability: Mutability) -> Self {
        Self::new(NaiveDateTime::UNIX_EPOCH.date().and_time(time), mutability)
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.naive
    }

    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }

    pub fn mutability(&self) -> Mutability {
        self.mutability
    }

    /// Render with a chrono format string. Offset-aware specifiers (`%z`)
    /// fall back to UTC when no offset is attached.
    pub fn format(&self, format: &str) -> String {
        match self.offset.and_then(|offset| self.naive.and_local_timezone(offset).single()) {
            Some(aware) => aware.format(format).to_string(),
            None => self.naive.and_utc().format(format).to_string(),
        }
    }
}

/// A calendar/clock duration, serialized in the ISO-8601-like form
/// `P1Y2M3DT4H5M6S`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Interval {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Interval {
    pub fn new(years: u32, months: u32, days: u32, hours: u32, minutes: u32, seconds: u32) -> Self {
        Self { years, months, days, hours, minutes, seconds }
    }
}

impl Display for Interval {
    /// Every component is always written, zeros included, so the textual
    /// form has a fixed shape per column.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P{}Y{}M{}DT{}H{}M{}S",
            self.years, self.months, self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Error returned when an interval string cannot be parsed.
#[derive(Debug, thiserror::Error)]
#[error("malformed interval string {input:?}: {reason}")]
pub struct ParseIntervalError {
    input: String,
    reason: String,
}

impl ParseIntervalError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self { input: input.to_owned(), reason: reason.into() }
    }
}

fn accumulate(component: &mut u32, amount: u32, input: &str) -> Result<(), ParseIntervalError> {
    *component = component
        .checked_add(amount)
        .ok_or_else(|| ParseIntervalError::new(input, "component out of range"))?;
    Ok(())
}

impl FromStr for Interval {
    type Err = ParseIntervalError;

    /// Accepts the full duration designator set: `P[nY][nM][nW][nD][T[nH][nM][nS]]`.
    /// Weeks are folded into days.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .strip_prefix('P')
            .ok_or_else(|| ParseIntervalError::new(s, "missing 'P' prefix"))?;

        if body.is_empty() {
            return Err(ParseIntervalError::new(s, "no components after 'P'"));
        }

        let mut interval = Interval::default();
        let mut in_time = false;
        let mut digits = String::new();

        for ch in body.chars() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                continue;
            }

            if ch == 'T' {
                if !digits.is_empty() {
                    return Err(ParseIntervalError::new(s, "digits before 'T' designator"));
                }
                if in_time {
                    return Err(ParseIntervalError::new(s, "repeated 'T' designator"));
                }
                in_time = true;
                continue;
            }

            let amount: u32 = digits
                .parse()
                .map_err(|_| ParseIntervalError::new(s, format!("missing or oversized number before {ch:?}")))?;
            digits.clear();

            match (in_time, ch) {
                (false, 'Y') => accumulate(&mut interval.years, amount, s)?,
                (false, 'M') => accumulate(&mut interval.months, amount, s)?,
                (false, 'W') => {
                    let days = amount
                        .checked_mul(7)
                        .ok_or_else(|| ParseIntervalError::new(s, "component out of range"))?;
                    accumulate(&mut interval.days, days, s)?;
                }
                (false, 'D') => accumulate(&mut interval.days, amount, s)?,
                (true, 'H') => accumulate(&mut interval.hours, amount, s)?,
                (true, 'M') => accumulate(&mut interval.minutes, amount, s)?,
                (true, 'S') => accumulate(&mut interval.seconds, amount, s)?,
                _ => return Err(ParseIntervalError::new(s, format!("unexpected designator {ch:?}"))),
            }
        }

        if !digits.is_empty() {
            return Err(ParseIntervalError::new(s, "trailing digits without a designator"));
        }

        Ok(interval)
    }
}
