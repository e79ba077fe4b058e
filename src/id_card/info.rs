use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use strum::{Display, EnumString};

use crate::birth_date::BirthDatePattern;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Sequence numbers are odd for men and even for women.
    pub fn from_digit(digit: u32) -> Self {
        if digit % 2 == 0 {
            Gender::Female
        } else {
            Gender::Male
        }
    }

    pub fn chinese_label(&self) -> &'static str {
        match self {
            Gender::Male => "男",
            Gender::Female => "女",
        }
    }
}

/// The two layouts an identifier can have.
///
/// ```text
/// 18: RRRRRR YYYYMMDD SSS C
/// 15: RRRRRR YYMMDD   SSS
/// ```
/// `R` is the administrative division (its first two digits name the region), `S` the
/// sequence number whose last digit encodes the gender, `C` the MOD 11-2 check character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdCardFormat {
    Legacy15,
    Modern18,
}

const BIRTH_DATE_OFFSET: usize = 6;

impl IdCardFormat {
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            15 => Some(IdCardFormat::Legacy15),
            18 => Some(IdCardFormat::Modern18),
            _ => None,
        }
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        match self {
            IdCardFormat::Legacy15 => 15,
            IdCardFormat::Modern18 => 18,
        }
    }

    pub fn birth_date_pattern(&self) -> BirthDatePattern {
        match self {
            IdCardFormat::Legacy15 => BirthDatePattern::TwoDigitYear,
            IdCardFormat::Modern18 => BirthDatePattern::FourDigitYear,
        }
    }

    pub(crate) fn birth_date_range(&self) -> Range<usize> {
        BIRTH_DATE_OFFSET..BIRTH_DATE_OFFSET + self.birth_date_pattern().width()
    }

    pub(crate) fn gender_digit_index(&self) -> usize {
        match self {
            IdCardFormat::Legacy15 => 14,
            IdCardFormat::Modern18 => 16,
        }
    }
}

/// Everything that can be derived from a valid identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IdCardInfo {
    /// The normalized identifier
    pub id: String,
    pub format: IdCardFormat,
    pub region_code: String,
    pub region: &'static str,
    pub gender: Gender,
    pub birth_date: NaiveDate,
}
