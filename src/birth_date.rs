use chrono::NaiveDate;
use strum::{Display, EnumString};
use thiserror::Error;

/// Two digit years below the pivot belong to the 21st century, the others to the 20th.
/// `46` places `yy` in 1946..=2045, the 80 years back and 20 years ahead window of 2026.
pub const DEFAULT_CENTURY_PIVOT: u8 = 46;

/// The fixed-width layouts a birth date is embedded with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
pub enum BirthDatePattern {
    /// `YYYYMMDD`, used by 18 character identifiers
    #[strum(serialize = "yyyyMMdd")]
    FourDigitYear,
    /// `YYMMDD`, used by legacy 15 character identifiers
    #[strum(serialize = "yyMMdd")]
    TwoDigitYear,
}

impl BirthDatePattern {
    pub fn width(&self) -> usize {
        match self {
            BirthDatePattern::FourDigitYear => 8,
            BirthDatePattern::TwoDigitYear => 6,
        }
    }

    fn year_width(&self) -> usize {
        self.width() - 4
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("pattern {pattern} expects {} digits, got {length}", .pattern.width())]
    InvalidLength {
        pattern: BirthDatePattern,
        length: usize,
    },

    #[error("date contains non digit characters")]
    NonDigit,

    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

/// Parses a fixed-width numeric date, resolving two digit years with [DEFAULT_CENTURY_PIVOT].
pub fn parse_strict(digits: &str, pattern: BirthDatePattern) -> Result<NaiveDate, DateParseError> {
    parse_strict_with_pivot(digits, pattern, DEFAULT_CENTURY_PIVOT)
}

/// Parses `digits` as a calendar date laid out as `pattern`.
///
/// Every field must be in range for the resulting date: `20230230` or `201313` are errors,
/// never rolled over into the following month or year.
pub fn parse_strict_with_pivot(
    digits: &str,
    pattern: BirthDatePattern,
    century_pivot: u8,
) -> Result<NaiveDate, DateParseError> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateParseError::NonDigit);
    }
    if digits.len() != pattern.width() {
        return Err(DateParseError::InvalidLength {
            pattern,
            length: digits.len(),
        });
    }

    let (year, month_day) = digits.split_at(pattern.year_width());
    let (month, day) = month_day.split_at(2);

    let year = match pattern {
        BirthDatePattern::FourDigitYear => to_number(year) as i32,
        BirthDatePattern::TwoDigitYear => resolve_century(to_number(year), century_pivot),
    };
    let month = to_number(month);
    let day = to_number(day);

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(DateParseError::InvalidDate { year, month, day })
}

/// Renders a date back into `pattern`, the inverse of [parse_strict].
pub fn format(date: NaiveDate, pattern: BirthDatePattern) -> String {
    match pattern {
        BirthDatePattern::FourDigitYear => date.format("%Y%m%d").to_string(),
        BirthDatePattern::TwoDigitYear => date.format("%y%m%d").to_string(),
    }
}

fn resolve_century(two_digit_year: u32, century_pivot: u8) -> i32 {
    let year = two_digit_year as i32;
    if year < i32::from(century_pivot) {
        2000 + year
    } else {
        1900 + year
    }
}

// callers guarantee ascii digits
fn to_number(digits: &str) -> u32 {
    digits
        .bytes()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}
