//! # HTTP Gateway
//!
//! The full router over a real store and wall, driven in-process with
//! `tower::ServiceExt::oneshot`.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use ns_02_admission::{AdmissionApi, AdmissionService, Secret};
    use ns_03_wall::{Wall, WallConfig};
    use ns_04_api_gateway::{GatewayConfig, GatewayService, EMPTY_WALL_MESSAGE};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    struct Harness {
        store: Arc<AdmissionService>,
        wall: Arc<Wall>,
        router: Router,
    }

    impl Harness {
        fn new() -> Self {
            let store = Arc::new(AdmissionService::new());
            let wall = Arc::new(Wall::new(store.clone(), WallConfig::default()).unwrap());
            let gateway =
                GatewayService::new(GatewayConfig::default(), store.clone(), Arc::clone(&wall))
                    .unwrap();
            Self {
                store,
                wall,
                router: gateway.router(),
            }
        }

        async fn call(&self, request: Request<Body>) -> (StatusCode, String) {
            let response = self.router.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            (status, String::from_utf8(body.to_vec()).unwrap())
        }

        async fn submit(&self, value: &str, by: &str) -> Value {
            let body = json!({ "value": value, "submitted_by": by }).to_string();
            let request = Request::builder()
                .method(Method::POST)
                .uri("/api/secrets")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap();
            let (status, text) = self.call(request).await;
            assert_eq!(status, StatusCode::OK, "{text}");
            serde_json::from_str(&text).unwrap()
        }

        async fn get(&self, uri: &str) -> (StatusCode, String) {
            self.call(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
        }
    }

    #[tokio::test]
    async fn test_full_game_round() {
        let h = Harness::new();

        let (_, wall_text) = h.get("/api/exposed").await;
        assert_eq!(wall_text, EMPTY_WALL_MESSAGE);

        let first = h.submit("Hello", "alice").await;
        assert_eq!(first["outcome"]["kind"], "admitted");

        let second = h.submit("hello", "bob").await;
        assert_eq!(second["outcome"]["kind"], "exposed_existing");
        assert_eq!(second["outcome"]["lens"], "casefold");

        let id = first["secret"]["id"].as_str().unwrap();
        let (status, body) = h.get(&format!("/api/secrets/{id}")).await;
        assert_eq!(status, StatusCode::OK);
        let secret: Secret = serde_json::from_str(&body).unwrap();
        assert!(secret.is_exposed());
        assert_eq!(secret.exposed_by.as_deref(), Some("bob"));

        h.wall.refresh();
        let (_, wall_text) = h.get("/api/exposed").await;
        assert_eq!(wall_text, "Hello");

        let (_, stats) = h.get("/api/stats").await;
        let stats: Value = serde_json::from_str(&stats).unwrap();
        assert_eq!(stats["total"], 1);
        assert_eq!(stats["exposed"], 1);
    }

    #[tokio::test]
    async fn test_private_secret_visible_by_id_only() {
        let h = Harness::new();
        let result = h.submit("my quiet secret", "alice").await;
        let id = result["secret"]["id"].as_str().unwrap().to_string();

        let (_, body) = h.get(&format!("/api/secrets/{id}")).await;
        let secret: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(secret["state"], "private");
        assert!(secret.get("exposed_by").is_none());
        assert!(secret.get("exposed_at").is_none());

        h.wall.refresh();
        let (_, wall_text) = h.get("/api/exposed").await;
        assert_eq!(wall_text, EMPTY_WALL_MESSAGE);
    }

    #[tokio::test]
    async fn test_list_matches_store() {
        let h = Harness::new();
        for value in ["one", "two", "three"] {
            h.submit(value, "a").await;
        }
        let (_, body) = h.get("/api/secrets").await;
        let mut listed: Vec<String> = serde_json::from_str::<Vec<Secret>>(&body)
            .unwrap()
            .into_iter()
            .map(|s| s.value)
            .collect();
        listed.sort();
        assert_eq!(listed, vec!["one", "three", "two"]);
        assert_eq!(h.store.stats().total, 3);
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let h = Harness::new();
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/secrets")
            .header("origin", "https://example.com")
            .header("access-control-request-method", "POST")
            .body(Body::empty())
            .unwrap();
        let response = h.router.clone().oneshot(request).await.unwrap();
        assert!(response.status().is_success());
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_metrics_track_outcomes() {
        let h = Harness::new();
        h.submit("Hello", "a").await;
        h.submit("hello", "b").await;
        h.submit("racecar", "c").await;

        let (_, body) = h.get("/metrics").await;
        for outcome in ["admitted", "exposed", "self_exposed"] {
            let needle = format!("ns_admission_submissions_total{{outcome=\"{outcome}\"}}");
            assert!(body.contains(&needle), "missing {needle}");
        }
        assert!(body.contains("route=\"/api/secrets\""));
    }
}
