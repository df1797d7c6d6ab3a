//! Blue/green traffic classification for requests passing through an edge location.
//!
//! # Overview
//!
//! A [`Classifier`] looks at the `host` header of a viewer [`Request`] and marks the request as
//! [`Classification::Green`] (pre-production) when the leftmost DNS label of the host ends with
//! `-test`, or [`Classification::Blue`] (production) otherwise. The result is written to the
//! `x-blue-green-context` header so the origin or cache behavior can route on it:
//!
//! ```
//! # use blue_green_edge::{Classification, Request};
//! let mut request = Request::default();
//! request.headers.append("Host", "shop-test.example.com");
//!
//! let classification = blue_green_edge::classify(&mut request).unwrap();
//!
//! assert_eq!(classification, Classification::Green);
//! assert_eq!(request.headers.first_value("x-blue-green-context"), Some("green"));
//! ```
//!
//! [`CloudFrontEvent`] models the envelope a Lambda@Edge viewer request trigger receives, and
//! [`Classifier::handle_event`] turns such an event into the request to forward.
//!
//! # Error Handling
//!
//! Errors are represented by the [`Error`] enum. A request without a host header cannot be
//! classified and is reported as [`Error::MissingHostHeader`] instead of silently defaulting to
//! blue.
//!
//! # Logging
//!
//! The package uses the [`log`](https://docs.rs/log/latest/log/) crate for logging
//! messages. Every classified request logs its host at `info` level under the `blue_green_edge`
//! target.

#![warn(rustdoc::missing_crate_level_docs)]

mod classification;
mod classification_logger;
mod classifier;
mod config;
mod error;
mod event;
mod headers;

pub use classification::{classify_host, subdomain_label, Classification};
pub use classification_logger::{ClassificationEvent, ClassificationLogger};
pub use classifier::Classifier;
pub use config::ClassifierConfig;
pub use error::{Error, Result};
pub use event::{CloudFrontEvent, CloudFrontMessage, CloudFrontRecord, Request};
pub use headers::{HeaderValue, Headers};

/// Classify `request` with the default configuration.
///
/// See [`Classifier::classify`].
pub fn classify(request: &mut Request) -> Result<Classification> {
    Classifier::default().classify(request)
}
