#![allow(dead_code)]

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::{Client, Response, StatusCode};
use serde_json::{json, Value};

use inventory_api::app::{build_router, AppState};
use inventory_api::auth::TokenAuthority;
use inventory_api::config::AppConfig;
use inventory_api::database::{InventoryStore, MemoryStore};

/// A running copy of the real router backed by an in-memory store
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub client: Client,
}

impl TestServer {
    /// Fresh server with an empty store
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with_store(Arc::new(MemoryStore::new())).await
    }

    /// Server whose store fails every call
    pub async fn spawn_failing() -> Result<Self> {
        Self::spawn_with_store(Arc::new(MemoryStore::failing())).await
    }

    async fn spawn_with_store(store: Arc<dyn InventoryStore>) -> Result<Self> {
        let config = AppConfig::development();
        let tokens = TokenAuthority::from_config(&config.security)?;
        let app = build_router(AppState::new(store, tokens), &config);

        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .with_context(|| format!("failed to bind port {}", port))?;

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let server = Self {
            port,
            base_url: format!("http://127.0.0.1:{}", port),
            client: Client::new(),
        };
        server.wait_ready(Duration::from_secs(5)).await?;
        Ok(server)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if self.client.get(self.url("/")).send().await.is_ok() {
                return Ok(());
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    pub async fn post_authed(&self, path: &str, token: &str, body: &Value) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .header("token", token)
            .json(body)
            .send()
            .await?)
    }

    pub async fn put_authed(&self, path: &str, token: &str, body: &Value) -> Result<Response> {
        Ok(self
            .client
            .put(self.url(path))
            .header("token", token)
            .json(body)
            .send()
            .await?)
    }

    pub async fn delete_authed(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .delete(self.url(path))
            .header("token", token)
            .send()
            .await?)
    }

    /// Register a user and return the issued token
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<String> {
        let res = self
            .post(
                "/auth/register",
                &json!({ "name": name, "email": email, "password": password }),
            )
            .await?;
        anyhow::ensure!(res.status() == StatusCode::OK, "register failed: {}", res.status());
        token_from(res).await
    }

    /// Register a throwaway user for tests that only need a valid token
    pub async fn token(&self) -> Result<String> {
        self.register("Tester", "tester@example.com", "secret123").await
    }
}

pub async fn token_from(res: Response) -> Result<String> {
    let body: Value = res.json().await?;
    body["jwtToken"]
        .as_str()
        .map(str::to_string)
        .context("response has no jwtToken field")
}

pub async fn error_message(res: Response) -> Result<String> {
    let body: Value = res.json().await?;
    body["error"]
        .as_str()
        .map(str::to_string)
        .context("response has no error field")
}
