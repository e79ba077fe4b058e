pub mod config;
pub mod error;
pub mod info;
mod metrics;

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::birth_date::{self, BirthDatePattern};
use crate::id_card::config::IdCardConfig;
use crate::id_card::error::{ConfigValidationError, IdCardError};
use crate::id_card::info::{Gender, IdCardFormat, IdCardInfo};
use crate::id_card::metrics::Metrics;
use crate::normalization::normalize;
use crate::region::{is_known_region, region_name, REGION_CODE_LENGTH};
use crate::secondary_validation::{
    compute_check_char, ChineseIdChecksum, Validator, CHECKSUM_INPUT_LENGTH,
};

lazy_static! {
    // `\d` would also match non ASCII digits
    static ref MODERN_PATTERN: Regex =
        Regex::new("^[0-9]{17}[0-9Xx]$").expect("18 character pattern is a valid regex");
    static ref LEGACY_PATTERN: Regex =
        Regex::new("^[0-9]{15}$").expect("15 character pattern is a valid regex");
    static ref DEFAULT_VALIDATOR: IdCardValidator = IdCardValidator::default();
}

/// A normalized identifier that passed the structural checks. Its length matches `format`
/// and it only contains ASCII characters, so byte offsets can be used freely.
struct Candidate {
    id: String,
    format: IdCardFormat,
}

impl Candidate {
    fn region_code(&self) -> &str {
        &self.id[..REGION_CODE_LENGTH]
    }

    fn birth_digits(&self) -> &str {
        &self.id[self.format.birth_date_range()]
    }

    fn gender(&self) -> Option<Gender> {
        self.id[self.format.gender_digit_index()..]
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .map(Gender::from_digit)
    }
}

/// Validates identifiers and derives information from them.
///
/// Every operation accepts raw input: it is normalized first, so surrounding whitespace
/// and a lowercase `x` check character are accepted. Invalid input never produces an
/// error, only an absent or `false` result; [IdCardValidator::check] tells which stage
/// rejected it.
pub struct IdCardValidator {
    config: IdCardConfig,
    metrics: Metrics,
}

impl Default for IdCardValidator {
    fn default() -> Self {
        Self::from_valid_config(IdCardConfig::default())
    }
}

impl IdCardValidator {
    pub fn new(config: IdCardConfig) -> Result<Self, ConfigValidationError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: IdCardConfig) -> Self {
        let metrics = Metrics::new(&config.labels);
        Self { config, metrics }
    }

    pub fn config(&self) -> &IdCardConfig {
        &self.config
    }

    /// Length, layout and region checks only. The birth date and check character are
    /// not looked at, so this accepts identifiers [IdCardValidator::is_valid] rejects.
    pub fn is_valid_simple(&self, input: Option<&str>) -> bool {
        self.check_structure(input).is_ok()
    }

    /// Full validation: structure, region, birth date and, for 18 character identifiers,
    /// the check character.
    pub fn is_valid(&self, input: Option<&str>) -> bool {
        self.check(input).is_ok()
    }

    /// Same checks as [IdCardValidator::is_valid], reporting the first failing one.
    pub fn check(&self, input: Option<&str>) -> Result<IdCardFormat, IdCardError> {
        self.validate(input).map(|candidate| candidate.format)
    }

    pub fn region(&self, input: Option<&str>) -> Option<&'static str> {
        let candidate = self.check_structure(input).ok()?;
        region_name(candidate.region_code())
    }

    pub fn gender(&self, input: Option<&str>) -> Option<Gender> {
        self.check_structure(input).ok()?.gender()
    }

    /// `None` when the identifier fails the structural checks or embeds an impossible date.
    pub fn birth_date(&self, input: Option<&str>) -> Option<NaiveDate> {
        let candidate = self.check_structure(input).ok()?;
        self.parse_birth_date(&candidate).ok()
    }

    /// All derived attributes of a fully valid identifier.
    pub fn describe(&self, input: Option<&str>) -> Option<IdCardInfo> {
        let candidate = self.validate(input).ok()?;
        let birth_date = self.parse_birth_date(&candidate).ok()?;
        Some(IdCardInfo {
            region_code: candidate.region_code().to_string(),
            region: region_name(candidate.region_code())?,
            gender: candidate.gender()?,
            birth_date,
            format: candidate.format,
            id: candidate.id,
        })
    }

    /// Converts a legacy 15 character identifier to its 18 character form.
    pub fn convert_15_to_18(&self, input: &str) -> Option<String> {
        self.try_convert_15_to_18(input).ok()
    }

    /// Like [IdCardValidator::convert_15_to_18], reporting why the conversion failed.
    ///
    /// The two digit year is widened with the configured century pivot, then the check
    /// character of the resulting 17 digits is appended.
    pub fn try_convert_15_to_18(&self, input: &str) -> Result<String, IdCardError> {
        let result = self.convert(input);
        match &result {
            Ok(_) => self.metrics.conversions.increment(1),
            Err(err) => {
                self.metrics.conversion_failures.increment(1);
                debug!(reason = err.reason(), "legacy identifier was not converted");
            }
        }
        result
    }

    fn convert(&self, input: &str) -> Result<String, IdCardError> {
        let id = normalize(Some(input)).ok_or(IdCardError::AbsentInput)?;
        if id.len() != IdCardFormat::Legacy15.len() {
            return Err(IdCardError::StructuralMismatch);
        }
        if !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdCardError::NonDigitContent);
        }

        let candidate = self.check_structure(Some(&id))?;
        let birth_date = self.parse_birth_date(&candidate)?;

        let birth_range = IdCardFormat::Legacy15.birth_date_range();
        let mut converted = String::with_capacity(IdCardFormat::Modern18.len());
        converted.push_str(&id[..birth_range.start]);
        converted.push_str(&birth_date::format(
            birth_date,
            BirthDatePattern::FourDigitYear,
        ));
        converted.push_str(&id[birth_range.end..]);

        let check = compute_check_char(&converted).ok_or(IdCardError::NonDigitContent)?;
        converted.push(check);
        Ok(converted)
    }

    fn validate(&self, input: Option<&str>) -> Result<Candidate, IdCardError> {
        self.metrics.checks.increment(1);
        let result = self.run_checks(input);
        if let Err(err) = &result {
            self.metrics.record_rejection(err);
        }
        result
    }

    fn run_checks(&self, input: Option<&str>) -> Result<Candidate, IdCardError> {
        let candidate = self.check_structure(input)?;
        self.parse_birth_date(&candidate)?;

        match candidate.format {
            // nothing left to verify on legacy identifiers
            IdCardFormat::Legacy15 => Ok(candidate),
            IdCardFormat::Modern18 => {
                if ChineseIdChecksum.is_valid_match(&candidate.id) {
                    return Ok(candidate);
                }

                let (digits, check) = candidate.id.split_at(CHECKSUM_INPUT_LENGTH);
                let expected = compute_check_char(digits).ok_or(IdCardError::NonDigitContent)?;
                let actual = check
                    .chars()
                    .next()
                    .ok_or(IdCardError::StructuralMismatch)?;
                Err(IdCardError::ChecksumMismatch { expected, actual })
            }
        }
    }

    fn check_structure(&self, input: Option<&str>) -> Result<Candidate, IdCardError> {
        let id = normalize(input)
            .filter(|id| !id.is_empty())
            .ok_or(IdCardError::AbsentInput)?;

        let format = IdCardFormat::from_len(id.len()).ok_or(IdCardError::StructuralMismatch)?;
        let pattern = match format {
            IdCardFormat::Legacy15 => &*LEGACY_PATTERN,
            IdCardFormat::Modern18 => &*MODERN_PATTERN,
        };
        if !pattern.is_match(&id) {
            return Err(IdCardError::StructuralMismatch);
        }

        let candidate = Candidate { id, format };
        if !is_known_region(candidate.region_code()) {
            return Err(IdCardError::UnknownRegion {
                code: candidate.region_code().to_string(),
            });
        }
        Ok(candidate)
    }

    fn parse_birth_date(&self, candidate: &Candidate) -> Result<NaiveDate, IdCardError> {
        birth_date::parse_strict_with_pivot(
            candidate.birth_digits(),
            candidate.format.birth_date_pattern(),
            self.config.century_pivot,
        )
        .map_err(|err| {
            debug!(error = %err, "identifier embeds an unparseable birth date");
            IdCardError::from(err)
        })
    }
}

impl Validator for IdCardValidator {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        self.is_valid(Some(regex_match))
    }
}

pub fn is_valid_simple(input: Option<&str>) -> bool {
    DEFAULT_VALIDATOR.is_valid_simple(input)
}

pub fn is_valid(input: Option<&str>) -> bool {
    DEFAULT_VALIDATOR.is_valid(input)
}

pub fn check(input: Option<&str>) -> Result<IdCardFormat, IdCardError> {
    DEFAULT_VALIDATOR.check(input)
}

pub fn get_region(input: Option<&str>) -> Option<&'static str> {
    DEFAULT_VALIDATOR.region(input)
}

pub fn get_gender(input: Option<&str>) -> Option<Gender> {
    DEFAULT_VALIDATOR.gender(input)
}

pub fn get_birth_date(input: Option<&str>) -> Option<NaiveDate> {
    DEFAULT_VALIDATOR.birth_date(input)
}

pub fn describe(input: Option<&str>) -> Option<IdCardInfo> {
    DEFAULT_VALIDATOR.describe(input)
}

pub fn convert_15_to_18(input: &str) -> Option<String> {
    DEFAULT_VALIDATOR.convert_15_to_18(input)
}
