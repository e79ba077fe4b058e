// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod birth_date;
mod id_card;
mod normalization;
mod observability;
mod region;
mod secondary_validation;

// This is the public API of the library
pub use birth_date::{
    format as format_birth_date, parse_strict, parse_strict_with_pivot, BirthDatePattern,
    DateParseError, DEFAULT_CENTURY_PIVOT,
};
pub use id_card::config::IdCardConfig;
pub use id_card::error::{ConfigValidationError, IdCardError};
pub use id_card::info::{Gender, IdCardFormat, IdCardInfo};
pub use id_card::{
    check, convert_15_to_18, describe, get_birth_date, get_gender, get_region, is_valid,
    is_valid_simple, IdCardValidator,
};
pub use normalization::normalize;
pub use observability::labels::Labels;
pub use region::{is_known_region, region_name, regions};
pub use secondary_validation::{compute_check_char, ChineseIdChecksum, Validator};
