//! Prometheus request metrics middleware.
//!
//! Counts requests by matched route template and status, and observes
//! latency per route. Route templates (`/api/secrets/:id`) keep label
//! cardinality bounded.

use axum::{body::Body, extract::MatchedPath, http::Request, response::Response};
use ns_telemetry::{HTTP_REQUESTS, HTTP_REQUEST_DURATION};
use std::task::{Context, Poll};
use std::time::Instant;
use tower::{Layer, Service};

/// Route label for requests that matched no route.
pub const UNMATCHED_ROUTE: &str = "unmatched";

#[derive(Clone, Default)]
pub struct HttpMetricsLayer;

impl HttpMetricsLayer {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for HttpMetricsLayer {
    type Service = HttpMetricsService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        HttpMetricsService { inner }
    }
}

#[derive(Clone)]
pub struct HttpMetricsService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for HttpMetricsService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let mut inner = self.inner.clone();
        let route = req
            .extensions()
            .get::<MatchedPath>()
            .map(|path| path.as_str().to_string())
            .unwrap_or_else(|| UNMATCHED_ROUTE.to_string());

        Box::pin(async move {
            let started = Instant::now();
            let result = inner.call(req).await;

            if let Ok(response) = &result {
                let status = response.status().as_u16().to_string();
                HTTP_REQUESTS
                    .with_label_values(&[route.as_str(), status.as_str()])
                    .inc();
            }
            HTTP_REQUEST_DURATION
                .with_label_values(&[route.as_str()])
                .observe(started.elapsed().as_secs_f64());

            result
        })
    }
}
