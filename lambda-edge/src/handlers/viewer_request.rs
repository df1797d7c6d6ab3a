use blue_green_edge::{Classifier, CloudFrontEvent, Request};
use lambda_runtime::{Error, LambdaEvent};

/// Viewer request trigger: returns the request with its blue/green header set, which CloudFront
/// then forwards to the cache and origin.
pub async fn handle_viewer_request(
    classifier: &Classifier,
    event: LambdaEvent<CloudFrontEvent>,
) -> Result<Request, Error> {
    let (payload, context) = event.into_parts();

    log::debug!(target: "lambda_edge",
                request_id = context.request_id.as_str(),
                records = payload.records.len();
                "handling viewer request");

    let request = classifier.handle_event(payload).inspect_err(|err| {
        log::error!(target: "lambda_edge",
                    request_id = context.request_id.as_str();
                    "failed to classify viewer request: {}", err);
    })?;

    Ok(request)
}

#[cfg(test)]
mod tests {
    use blue_green_edge::{Classifier, CloudFrontEvent, HeaderValue};
    use lambda_runtime::{Context, LambdaEvent};

    use super::handle_viewer_request;

    fn viewer_request_event(host: Option<&str>) -> CloudFrontEvent {
        let headers = match host {
            Some(host) => serde_json::json!({
                "host": [{ "key": "Host", "value": host }],
                "accept": [{ "key": "Accept", "value": "*/*" }]
            }),
            None => serde_json::json!({
                "accept": [{ "key": "Accept", "value": "*/*" }]
            }),
        };
        serde_json::from_value(serde_json::json!({
            "Records": [{
                "cf": {
                    "config": { "eventType": "viewer-request" },
                    "request": {
                        "clientIp": "203.0.113.178",
                        "headers": headers,
                        "method": "GET",
                        "querystring": "",
                        "uri": "/"
                    }
                }
            }]
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn returns_classified_request() {
        let classifier = Classifier::default();
        let event = LambdaEvent::new(
            viewer_request_event(Some("shop-test.example.com")),
            Context::default(),
        );

        let request = handle_viewer_request(&classifier, event).await.unwrap();

        assert_eq!(
            request.headers.get("x-blue-green-context"),
            Some(&[HeaderValue::new("x-blue-green-context", "green")][..])
        );
        assert_eq!(request.headers.first_value("accept"), Some("*/*"));

        let response = serde_json::to_value(&request).unwrap();
        assert_eq!(response["uri"], serde_json::json!("/"));
        assert_eq!(
            response["headers"]["x-blue-green-context"],
            serde_json::json!([{ "key": "x-blue-green-context", "value": "green" }])
        );
    }

    #[tokio::test]
    async fn production_host_is_blue() {
        let classifier = Classifier::default();
        let event = LambdaEvent::new(
            viewer_request_event(Some("shop.example.com")),
            Context::default(),
        );

        let request = handle_viewer_request(&classifier, event).await.unwrap();

        assert_eq!(
            request.headers.first_value("x-blue-green-context"),
            Some("blue")
        );
    }

    #[tokio::test]
    async fn missing_host_is_a_handler_error() {
        let classifier = Classifier::default();
        let event = LambdaEvent::new(viewer_request_event(None), Context::default());

        let err = handle_viewer_request(&classifier, event).await.unwrap_err();

        assert_eq!(err.to_string(), "request has no host header");
    }
}
