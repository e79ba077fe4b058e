use crate::secondary_validation::Validator;

/// Number of digits the check character is computed from.
pub const CHECKSUM_INPUT_LENGTH: usize = 17;

/// ISO 7064 MOD 11-2 weights, 2^(17 - i) mod 11 for position i.
const WEIGHTS: [u32; CHECKSUM_INPUT_LENGTH] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

/// Check character for each possible remainder of the weighted sum.
const CHECK_CHARACTERS: [char; 11] = ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'];

/// Computes the check character of the first 17 digits of an identifier.
///
/// Returns `None` unless `digits` is exactly 17 ASCII digits.
pub fn compute_check_char(digits: &str) -> Option<char> {
    if digits.len() != CHECKSUM_INPUT_LENGTH {
        return None;
    }

    let mut sum = 0;
    for (c, weight) in digits.chars().zip(WEIGHTS) {
        sum += c.to_digit(10)? * weight;
    }

    Some(CHECK_CHARACTERS[(sum % 11) as usize])
}

/// Validates a bare 18 character identifier: 17 digits followed by their check character,
/// which may be a lowercase `x`.
pub struct ChineseIdChecksum;

impl Validator for ChineseIdChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        if regex_match.len() != CHECKSUM_INPUT_LENGTH + 1
            || !regex_match.is_char_boundary(CHECKSUM_INPUT_LENGTH)
        {
            return false;
        }
        let (digits, check) = regex_match.split_at(CHECKSUM_INPUT_LENGTH);

        match (compute_check_char(digits), check.chars().next()) {
            (Some(expected), Some(actual)) => expected.eq_ignore_ascii_case(&actual),
            _ => false,
        }
    }
}
