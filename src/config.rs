use crate::{
    classification_logger::NoopClassificationLogger, ClassificationLogger, Classifier,
};

/// Configuration for [`Classifier`].
pub struct ClassifierConfig {
    pub(crate) header_name: String,
    pub(crate) green_suffix: String,
    pub(crate) classification_logger: Box<dyn ClassificationLogger + Send + Sync>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            header_name: ClassifierConfig::DEFAULT_HEADER_NAME.to_owned(),
            green_suffix: ClassifierConfig::DEFAULT_GREEN_SUFFIX.to_owned(),
            classification_logger: Box::new(NoopClassificationLogger),
        }
    }
}

impl ClassifierConfig {
    /// Default name of the header carrying the classification.
    pub const DEFAULT_HEADER_NAME: &'static str = "x-blue-green-context";

    /// Default subdomain suffix that marks a request as green.
    pub const DEFAULT_GREEN_SUFFIX: &'static str = "-test";

    /// Override the classification header name. The name is used verbatim both as the map entry
    /// and as the record `key`, so it should be lowercase.
    pub fn header_name(mut self, header_name: impl Into<String>) -> Self {
        self.header_name = header_name.into();
        self
    }

    /// Override the suffix matched against the subdomain label. Matching is case-sensitive.
    pub fn green_suffix(mut self, green_suffix: impl Into<String>) -> Self {
        self.green_suffix = green_suffix.into();
        self
    }

    /// Set a logger that receives every classification, e.g. to forward it to analytics.
    ///
    /// ```
    /// # use blue_green_edge::{ClassificationEvent, ClassifierConfig};
    /// let config = ClassifierConfig::default().classification_logger(|event: ClassificationEvent| {
    ///   println!("{:?}", event);
    /// });
    /// ```
    pub fn classification_logger(
        mut self,
        classification_logger: impl ClassificationLogger + Send + Sync + 'static,
    ) -> Self {
        self.classification_logger = Box::new(classification_logger);
        self
    }

    /// Create a new [`Classifier`] using the specified configuration.
    ///
    /// ```
    /// # use blue_green_edge::{ClassifierConfig, Classifier};
    /// let classifier: Classifier = ClassifierConfig::default().to_classifier();
    /// ```
    pub fn to_classifier(self) -> Classifier {
        Classifier::new(self)
    }
}
