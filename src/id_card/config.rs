use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

use crate::birth_date::DEFAULT_CENTURY_PIVOT;
use crate::id_card::error::ConfigValidationError;
use crate::Labels;

fn default_century_pivot() -> u8 {
    DEFAULT_CENTURY_PIVOT
}

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct IdCardConfig {
    /// Two digit years of legacy identifiers below this value are read as `20yy`,
    /// the others as `19yy`.
    #[serde(default = "default_century_pivot")]
    pub century_pivot: u8,

    /// Attached to every metric emitted by the validator.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Labels,
}

impl Default for IdCardConfig {
    fn default() -> Self {
        Self {
            century_pivot: DEFAULT_CENTURY_PIVOT,
            labels: Labels::empty(),
        }
    }
}

impl IdCardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn century_pivot(&self, century_pivot: u8) -> Self {
        self.mutate_clone(|x| x.century_pivot = century_pivot)
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.century_pivot > 100 {
            return Err(ConfigValidationError::InvalidCenturyPivot(
                self.century_pivot,
            ));
        }
        Ok(())
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_have_default() {
        assert_eq!(
            IdCardConfig::new(),
            IdCardConfig {
                century_pivot: 46,
                labels: Labels::empty(),
            }
        );
    }

    #[test]
    fn should_override_fields() {
        let config = IdCardConfig::new()
            .century_pivot(30)
            .labels(Labels::new(&[("service", "kyc")]));
        assert_eq!(config.century_pivot, 30);
        assert_eq!(config.labels, Labels::new(&[("service", "kyc")]));
    }

    #[test]
    fn should_deserialize_with_defaults() {
        let config: IdCardConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, IdCardConfig::default());

        let config: IdCardConfig =
            serde_json::from_str(r#"{"century_pivot": 25, "labels": null}"#).unwrap();
        assert_eq!(config, IdCardConfig::new().century_pivot(25));

        let config: IdCardConfig =
            serde_json::from_str(r#"{"labels": {"env": "staging"}}"#).unwrap();
        assert_eq!(config.labels, Labels::new(&[("env", "staging")]));
    }

    #[test]
    fn should_reject_pivot_past_a_century() {
        assert!(IdCardConfig::new().century_pivot(100).validate().is_ok());
        assert_eq!(
            IdCardConfig::new().century_pivot(101).validate(),
            Err(ConfigValidationError::InvalidCenturyPivot(101))
        );
    }
}
