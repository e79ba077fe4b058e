mod chinese_id_checksum;

pub use crate::secondary_validation::chinese_id_checksum::{
    compute_check_char, ChineseIdChecksum, CHECKSUM_INPUT_LENGTH,
};

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, regex_match: &str) -> bool;
}
