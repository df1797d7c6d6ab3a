mod handlers;

use std::sync::Arc;

use blue_green_edge::Classifier;
use lambda_runtime::{run, service_fn, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // CloudWatch picks up stderr; RUST_LOG overrides the default level.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let classifier = Arc::new(Classifier::default());

    run(service_fn(move |event| {
        let classifier = classifier.clone();
        async move { handlers::handle_viewer_request(&classifier, event).await }
    }))
    .await
}
