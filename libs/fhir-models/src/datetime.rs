//! XML Schema date and time values used by the FHIR `date`, `dateTime`, `instant`
//! and `time` primitives.
//!
//! Values remember the precision and the zone notation they were written with, so
//! formatting a parsed value gives back the original text:
//!
//! ```rust
//! use cobalt_models::datetime::{DateTimePrecision, XsDateTime};
//!
//! let value: XsDateTime = "2015-01-31T21:32:52.12679+00:00".parse().unwrap();
//! assert_eq!(value.precision(), DateTimePrecision::Fraction);
//! assert_eq!(value.to_string(), "2015-01-31T21:32:52.12679+00:00");
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, TimeZone, Timelike};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} '{input}': {reason}")]
pub struct DateTimeError {
    kind: &'static str,
    input: String,
    reason: &'static str,
}

impl DateTimeError {
    fn new(kind: &'static str, input: &str, reason: &'static str) -> Self {
        Self {
            kind,
            input: input.to_string(),
            reason,
        }
    }

    pub fn reason(&self) -> &str {
        self.reason
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DatePrecision {
    Year,
    Month,
    Day,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DateTimePrecision {
    Year,
    Month,
    Day,
    Second,
    Fraction,
}

/// Parses exactly `len` ASCII digits.
fn digits(s: &str, len: usize) -> Option<u32> {
    if s.len() != len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct XsDate {
    year: u16,
    month: Option<u8>,
    day: Option<u8>,
}

impl XsDate {
    pub fn year(year: u16) -> Result<Self, DateTimeError> {
        Self::new(year, None, None)
    }

    pub fn year_month(year: u16, month: u8) -> Result<Self, DateTimeError> {
        Self::new(year, Some(month), None)
    }

    pub fn ymd(year: u16, month: u8, day: u8) -> Result<Self, DateTimeError> {
        Self::new(year, Some(month), Some(day))
    }

    fn new(year: u16, month: Option<u8>, day: Option<u8>) -> Result<Self, DateTimeError> {
        let fail = |reason| {
            let text = Self { year, month, day }.to_string();
            Err(DateTimeError::new("date", &text, reason))
        };
        if year == 0 || year > 9999 {
            return fail("year out of range");
        }
        if let Some(month) = month {
            if !(1..=12).contains(&month) {
                return fail("month out of range");
            }
        }
        match (month, day) {
            (None, Some(_)) => return fail("day without month"),
            (Some(month), Some(day)) if day == 0 || day > days_in_month(year, month) => {
                return fail("day out of range")
            }
            _ => {}
        }
        Ok(Self { year, month, day })
    }

    pub fn get_year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> Option<u8> {
        self.month
    }

    pub fn day(&self) -> Option<u8> {
        self.day
    }

    pub fn precision(&self) -> DatePrecision {
        match (self.month, self.day) {
            (Some(_), Some(_)) => DatePrecision::Day,
            (Some(_), None) => DatePrecision::Month,
            _ => DatePrecision::Year,
        }
    }

    /// The calendar date, for dates with day precision.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month?),
            u32::from(self.day?),
        )
    }
}

impl FromStr for XsDate {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = |reason| DateTimeError::new("date", s, reason);
        let mut parts = s.split('-');
        let year = parts
            .next()
            .and_then(|p| digits(p, 4))
            .ok_or_else(|| fail("expected a four digit year"))?;
        let month = match parts.next() {
            None => None,
            Some(p) => Some(digits(p, 2).ok_or_else(|| fail("expected a two digit month"))?),
        };
        let day = match parts.next() {
            None => None,
            Some(p) => Some(digits(p, 2).ok_or_else(|| fail("expected a two digit day"))?),
        };
        if parts.next().is_some() {
            return Err(fail("unexpected trailing content"));
        }
        // Digit counts bound the values to u16/u8.
        Self::new(year as u16, month.map(|m| m as u8), day.map(|d| d as u8))
            .map_err(|err| DateTimeError::new("date", s, err.reason))
    }
}

impl fmt::Display for XsDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.year)?;
        if let Some(month) = self.month {
            write!(f, "-{:02}", month)?;
        }
        if let Some(day) = self.day {
            write!(f, "-{:02}", day)?;
        }
        Ok(())
    }
}

impl From<NaiveDate> for XsDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            // NaiveDate years outside 1..=9999 do not occur in FHIR data.
            year: date.year().clamp(1, 9999) as u16,
            month: Some(date.month() as u8),
            day: Some(date.day() as u8),
        }
    }
}

/// Fractional seconds with the number of digits they were written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Fraction {
    nanos: u32,
    digits: u8,
}

impl Fraction {
    fn parse(s: &str) -> Option<Self> {
        if s.is_empty() || s.len() > 9 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let value: u32 = s.parse().ok()?;
        let digits = s.len() as u8;
        Some(Self {
            nanos: value * 10u32.pow(9 - u32::from(digits)),
            digits,
        })
    }

    fn from_nanos(nanos: u32) -> Option<Self> {
        if nanos == 0 || nanos >= 1_000_000_000 {
            return None;
        }
        let mut digits = 9u8;
        let mut rest = nanos;
        while rest % 10 == 0 {
            rest /= 10;
            digits -= 1;
        }
        Some(Self { nanos, digits })
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scaled = self.nanos / 10u32.pow(9 - u32::from(self.digits));
        write!(f, "{:0width$}", scaled, width = usize::from(self.digits))
    }
}

/// `hh:mm:ss` with optional fractional seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct XsTime {
    hour: u8,
    minute: u8,
    second: u8,
    fraction: Option<Fraction>,
}

impl XsTime {
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, DateTimeError> {
        if hour > 23 || minute > 59 || second > 60 {
            let text = format!("{:02}:{:02}:{:02}", hour, minute, second);
            return Err(DateTimeError::new("time", &text, "component out of range"));
        }
        Ok(Self {
            hour,
            minute,
            second,
            fraction: None,
        })
    }

    /// Sets fractional seconds; trailing zeros of `nanos` are not written.
    pub fn with_nanos(mut self, nanos: u32) -> Self {
        self.fraction = Fraction::from_nanos(nanos);
        self
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    pub fn nanosecond(&self) -> u32 {
        self.fraction.map_or(0, |f| f.nanos)
    }

    /// Number of fractional digits as written, 0 when there is no fraction.
    pub fn fraction_digits(&self) -> u8 {
        self.fraction.map_or(0, |f| f.digits)
    }

    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        let (second, nanos) = if self.second == 60 {
            (59, 1_000_000_000 + self.nanosecond())
        } else {
            (u32::from(self.second), self.nanosecond())
        };
        NaiveTime::from_hms_nano_opt(u32::from(self.hour), u32::from(self.minute), second, nanos)
    }
}

impl FromStr for XsTime {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = |reason| DateTimeError::new("time", s, reason);
        let (main, fraction) = match s.split_once('.') {
            Some((main, fraction)) => (main, Some(fraction)),
            None => (s, None),
        };
        let mut parts = main.split(':');
        let mut next = || parts.next().and_then(|p| digits(p, 2));
        let (Some(hour), Some(minute), Some(second)) = (next(), next(), next()) else {
            return Err(fail("expected hh:mm:ss"));
        };
        if main.len() != 8 {
            return Err(fail("expected hh:mm:ss"));
        }
        let mut time = Self::new(hour as u8, minute as u8, second as u8)
            .map_err(|err| DateTimeError::new("time", s, err.reason))?;
        if let Some(fraction) = fraction {
            time.fraction = Some(
                Fraction::parse(fraction)
                    .ok_or_else(|| fail("fractional seconds must be 1 to 9 digits"))?,
            );
        }
        Ok(time)
    }
}

impl fmt::Display for XsTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        if let Some(fraction) = self.fraction {
            write!(f, ".{}", fraction)?;
        }
        Ok(())
    }
}

impl From<NaiveTime> for XsTime {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
            second: time.second() as u8,
            fraction: Fraction::from_nanos(time.nanosecond() % 1_000_000_000),
        }
    }
}

/// `Z` and `+00:00` are kept apart so values round-trip as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum XsTimeZone {
    Utc,
    Offset { negative: bool, hours: u8, minutes: u8 },
}

impl XsTimeZone {
    pub fn offset_seconds(&self) -> i32 {
        match *self {
            XsTimeZone::Utc => 0,
            XsTimeZone::Offset {
                negative,
                hours,
                minutes,
            } => {
                let seconds = i32::from(hours) * 3600 + i32::from(minutes) * 60;
                if negative {
                    -seconds
                } else {
                    seconds
                }
            }
        }
    }

    pub fn to_fixed_offset(&self) -> Option<FixedOffset> {
        FixedOffset::east_opt(self.offset_seconds())
    }
}

impl FromStr for XsTimeZone {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = |reason| DateTimeError::new("time zone", s, reason);
        if s == "Z" {
            return Ok(XsTimeZone::Utc);
        }
        let negative = match s.as_bytes().first() {
            Some(b'+') => false,
            Some(b'-') => true,
            _ => return Err(fail("expected Z or an offset")),
        };
        let (hours, minutes) = s[1..]
            .split_once(':')
            .and_then(|(h, m)| Some((digits(h, 2)?, digits(m, 2)?)))
            .ok_or_else(|| fail("expected an offset of the form +hh:mm"))?;
        if hours > 14 || minutes > 59 {
            return Err(fail("offset out of range"));
        }
        Ok(XsTimeZone::Offset {
            negative,
            hours: hours as u8,
            minutes: minutes as u8,
        })
    }
}

impl fmt::Display for XsTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XsTimeZone::Utc => f.write_str("Z"),
            XsTimeZone::Offset {
                negative,
                hours,
                minutes,
            } => {
                let sign = if *negative { '-' } else { '+' };
                write!(f, "{}{:02}:{:02}", sign, hours, minutes)
            }
        }
    }
}

/// A date, optionally followed by a time of day and a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XsDateTime {
    date: XsDate,
    time: Option<XsTime>,
    timezone: Option<XsTimeZone>,
}

impl XsDateTime {
    pub fn new(
        date: XsDate,
        time: Option<XsTime>,
        timezone: Option<XsTimeZone>,
    ) -> Result<Self, DateTimeError> {
        let value = Self {
            date,
            time,
            timezone,
        };
        if time.is_some() && date.precision() != DatePrecision::Day {
            return Err(DateTimeError::new(
                "dateTime",
                &value.to_string(),
                "a time requires a full date",
            ));
        }
        if time.is_none() && timezone.is_some() {
            return Err(DateTimeError::new(
                "dateTime",
                &value.to_string(),
                "a time zone requires a time",
            ));
        }
        Ok(value)
    }

    pub fn date(&self) -> XsDate {
        self.date
    }

    pub fn time(&self) -> Option<XsTime> {
        self.time
    }

    pub fn timezone(&self) -> Option<XsTimeZone> {
        self.timezone
    }

    pub fn precision(&self) -> DateTimePrecision {
        match self.time {
            Some(time) if time.fraction.is_some() => DateTimePrecision::Fraction,
            Some(_) => DateTimePrecision::Second,
            None => match self.date.precision() {
                DatePrecision::Year => DateTimePrecision::Year,
                DatePrecision::Month => DateTimePrecision::Month,
                DatePrecision::Day => DateTimePrecision::Day,
            },
        }
    }

    /// The instant this value denotes, for values with a time and a zone.
    pub fn to_chrono(&self) -> Option<DateTime<FixedOffset>> {
        let date = self.date.to_naive_date()?;
        let time = self.time?.to_naive_time()?;
        let offset = self.timezone?.to_fixed_offset()?;
        offset
            .from_local_datetime(&date.and_time(time))
            .single()
    }
}

impl FromStr for XsDateTime {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = |reason| DateTimeError::new("dateTime", s, reason);
        let Some((date, rest)) = s.split_once('T') else {
            let date = s
                .parse::<XsDate>()
                .map_err(|err| DateTimeError::new("dateTime", s, err.reason))?;
            return Ok(Self {
                date,
                time: None,
                timezone: None,
            });
        };
        let date: XsDate = date
            .parse()
            .map_err(|err: DateTimeError| DateTimeError::new("dateTime", s, err.reason))?;
        let (time, timezone) = match rest.find(['Z', '+', '-']) {
            Some(at) => (&rest[..at], Some(&rest[at..])),
            None => (rest, None),
        };
        let time: XsTime = time
            .parse()
            .map_err(|err: DateTimeError| DateTimeError::new("dateTime", s, err.reason))?;
        let timezone = timezone
            .map(str::parse::<XsTimeZone>)
            .transpose()
            .map_err(|err| DateTimeError::new("dateTime", s, err.reason))?;
        Self::new(date, Some(time), timezone).map_err(|_| fail("a time requires a full date"))
    }
}

impl fmt::Display for XsDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date)?;
        if let Some(time) = self.time {
            write!(f, "T{}", time)?;
        }
        if let Some(timezone) = self.timezone {
            write!(f, "{}", timezone)?;
        }
        Ok(())
    }
}

impl From<XsDate> for XsDateTime {
    fn from(date: XsDate) -> Self {
        Self {
            date,
            time: None,
            timezone: None,
        }
    }
}

impl From<DateTime<FixedOffset>> for XsDateTime {
    fn from(value: DateTime<FixedOffset>) -> Self {
        let seconds = value.offset().local_minus_utc();
        let timezone = if seconds == 0 {
            XsTimeZone::Utc
        } else {
            let abs = seconds.unsigned_abs();
            XsTimeZone::Offset {
                negative: seconds < 0,
                hours: (abs / 3600) as u8,
                minutes: (abs % 3600 / 60) as u8,
            }
        };
        Self {
            date: value.date_naive().into(),
            time: Some(value.time().into()),
            timezone: Some(timezone),
        }
    }
}
