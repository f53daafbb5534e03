//! # Runtime over HTTP
//!
//! Starts the whole process on an ephemeral port and talks to it with a real
//! HTTP client.

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;
    use std::time::Duration;

    use ns_runtime::{NodeConfig, SecretsRuntime};
    use serde_json::{json, Value};

    async fn start(refresh: Duration) -> (SecretsRuntime, SocketAddr) {
        let mut config = NodeConfig::default().with_port(0);
        config.gateway.http.host = "127.0.0.1".parse().unwrap();
        config.wall.refresh_interval = refresh;
        let mut runtime = SecretsRuntime::new(config).unwrap();
        let addr = runtime.start().await.unwrap();
        (runtime, addr)
    }

    #[tokio::test]
    async fn test_submit_and_read_wall_over_http() {
        let (mut runtime, addr) = start(Duration::from_millis(50)).await;
        let client = reqwest::Client::new();
        let base = format!("http://{addr}");

        let health: Value = client
            .get(format!("{base}/health"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(health["status"], "healthy");

        for (value, by) in [("Hello", "alice"), ("hello", "bob")] {
            let response = client
                .post(format!("{base}/api/secrets"))
                .json(&json!({ "value": value, "submitted_by": by }))
                .send()
                .await
                .unwrap();
            assert_eq!(response.status(), 200);
        }

        tokio::time::sleep(Duration::from_millis(200)).await;

        let response = client.get(format!("{base}/api/exposed")).send().await.unwrap();
        assert_eq!(response.headers()["x-exposed-total"], "1");
        assert_eq!(response.headers()["x-exposed-pages"], "1");
        assert_eq!(response.text().await.unwrap(), "Hello");

        runtime.shutdown().await;
    }

    #[tokio::test]
    async fn test_error_bodies_over_http() {
        let (mut runtime, addr) = start(Duration::from_secs(5)).await;
        let client = reqwest::Client::new();
        let base = format!("http://{addr}");

        let response = client
            .post(format!("{base}/api/secrets"))
            .header("content-type", "application/json")
            .body("{broken")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "error": "invalid request body" }));

        let response = client
            .get(format!("{base}/api/secrets/sec_20000101_0001"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 404);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "secret not found");

        runtime.shutdown().await;
    }

    #[tokio::test]
    async fn test_shutdown_closes_listener() {
        let (mut runtime, addr) = start(Duration::from_secs(5)).await;
        runtime.shutdown().await;

        let result = reqwest::Client::new()
            .get(format!("http://{addr}/health"))
            .timeout(Duration::from_secs(2))
            .send()
            .await;
        assert!(result.is_err());
    }
}
