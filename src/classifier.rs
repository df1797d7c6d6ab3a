use crate::{
    classification::{classify_host, subdomain_label},
    Classification, ClassificationEvent, ClassifierConfig, CloudFrontEvent, Error, Request,
    Result,
};

/// Marks requests as blue or green by their host header.
///
/// In order to create a classifier, first create [`ClassifierConfig`].
///
/// # Examples
/// ```
/// # use blue_green_edge::{Classifier, ClassifierConfig};
/// Classifier::new(ClassifierConfig::default());
/// ```
pub struct Classifier {
    config: ClassifierConfig,
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier::new(ClassifierConfig::default())
    }
}

impl Classifier {
    /// Create a new `Classifier` using the specified configuration.
    pub fn new(config: ClassifierConfig) -> Self {
        Classifier { config }
    }

    /// Name of the header this classifier writes.
    pub fn header_name(&self) -> &str {
        &self.config.header_name
    }

    /// Classify `request` and record the result in its classification header.
    ///
    /// Any values already present under the classification header are replaced. If the request
    /// has no host header, [`Error::MissingHostHeader`] is returned and the request is left
    /// untouched.
    pub fn classify(&self, request: &mut Request) -> Result<Classification> {
        let host = request
            .headers
            .first_value("host")
            .ok_or_else(|| {
                log::warn!(target: "blue_green_edge", "request has no host header");
                Error::MissingHostHeader
            })?
            .to_owned();

        log::info!(target: "blue_green_edge", host = host.as_str(); "adding blue green header for host {}", host);

        let classification = classify_host(&host, &self.config.green_suffix);

        request
            .headers
            .set(self.config.header_name.as_str(), classification.as_str());

        log::trace!(target: "blue_green_edge",
                    host = host.as_str(),
                    header_name = self.config.header_name.as_str(),
                    classification:display;
                    "classified request");

        self.config
            .classification_logger
            .log_classification(ClassificationEvent {
                subdomain: subdomain_label(&host).to_owned(),
                host,
                classification,
            });

        Ok(classification)
    }

    /// Handle a viewer request event: classify the request of the first record and return it.
    pub fn handle_event(&self, event: CloudFrontEvent) -> Result<Request> {
        let mut request = event.into_request()?;
        self.classify(&mut request)?;
        Ok(request)
    }
}
