//! Request tracing middleware

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{info_span, Instrument};

/// Run the request inside an `http` span and log its outcome
pub async fn trace(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().to_string();
    let span = info_span!("http", %method, %uri);

    async move {
        let response = next.run(req).await;
        tracing::debug!(status = response.status().as_u16(), "request finished");
        response
    }
    .instrument(span)
    .await
}
