//! Lambda@Edge viewer request event envelope.
use serde::{Deserialize, Serialize};

use crate::{Error, Headers, Result};

/// Event delivered by CloudFront to a viewer request trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudFrontEvent {
    #[serde(rename = "Records")]
    pub records: Vec<CloudFrontRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudFrontRecord {
    pub cf: CloudFrontMessage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudFrontMessage {
    /// Distribution metadata (`distributionId`, `eventType`, `requestId`, ...). Not interpreted.
    #[serde(default)]
    pub config: serde_json::Value,
    pub request: Request,
}

/// An HTTP request as seen at the edge.
///
/// Only `headers` is typed. Every other field (`clientIp`, `method`, `uri`, `querystring`,
/// `body`, `origin`, ...) is kept in `other` and serialized back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub headers: Headers,
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl CloudFrontEvent {
    /// Parse an event from its JSON payload.
    pub fn from_json(json: impl AsRef<[u8]>) -> Result<Self> {
        Ok(serde_json::from_slice(json.as_ref())?)
    }

    /// Take the request out of the first record. CloudFront always sends exactly one record.
    pub fn into_request(self) -> Result<Request> {
        self.records
            .into_iter()
            .next()
            .map(|record| record.cf.request)
            .ok_or(Error::MissingRecord)
    }
}
