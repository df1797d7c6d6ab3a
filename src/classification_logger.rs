use serde::{Deserialize, Serialize};

use crate::Classification;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationEvent {
    pub host: String,
    pub subdomain: String,
    pub classification: Classification,
}

/// Receives an event for every request the classifier marks.
pub trait ClassificationLogger {
    fn log_classification(&self, event: ClassificationEvent);
}

pub(crate) struct NoopClassificationLogger;
impl ClassificationLogger for NoopClassificationLogger {
    fn log_classification(&self, _event: ClassificationEvent) {}
}

impl<T: Fn(ClassificationEvent)> ClassificationLogger for T {
    fn log_classification(&self, event: ClassificationEvent) {
        self(event);
    }
}
