use metrics::{counter, Counter};

use crate::id_card::error::IdCardError;
use crate::Labels;

pub struct Metrics {
    pub checks: Counter,
    pub conversions: Counter,
    pub conversion_failures: Counter,
    labels: Labels,
}

const REASON: &str = "reason";

impl Metrics {
    pub fn new(labels: &Labels) -> Self {
        Metrics {
            checks: counter!("id_card.checks", labels.clone()),
            conversions: counter!("id_card.conversions", labels.clone()),
            conversion_failures: counter!("id_card.conversion_failures", labels.clone()),
            labels: labels.clone(),
        }
    }

    pub fn record_rejection(&self, error: &IdCardError) {
        counter!(
            "id_card.rejections",
            self.labels.clone_with_labels(&[(REASON, error.reason())])
        )
        .increment(1);
    }
}
