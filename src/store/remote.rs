//! Optional GitHub-backed copy of the document.
//!
//! The local file is always authoritative for the running process. The remote
//! copy is pulled once at startup (seeding the local file when it is absent)
//! and pushed after each save from a background task. Pushes coalesce: only
//! the newest pending snapshot is sent, and every failure is logged, never
//! surfaced.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::Deserialize;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Remote coordinates, read from `GITHUB_TOKEN` / `GITHUB_REPO` /
/// `GITHUB_PATH`. Sync is enabled only when all three are present.
#[derive(Clone)]
pub struct RemoteConfig {
    pub token: String,
    /// `owner/name` form.
    pub repo: String,
    /// Path of the document inside the repository.
    pub path: String,
}

impl RemoteConfig {
    pub fn from_env() -> Option<Self> {
        Some(Self {
            token: std::env::var("GITHUB_TOKEN").ok()?,
            repo: std::env::var("GITHUB_REPO").ok()?,
            path: std::env::var("GITHUB_PATH").ok()?,
        })
    }

    fn contents_url(&self) -> String {
        format!(
            "https://api.github.com/repos/{}/contents/{}",
            self.repo, self.path
        )
    }
}

#[derive(Deserialize)]
struct ContentsMeta {
    sha: String,
}

pub struct RemoteSync {
    config: RemoteConfig,
    client: reqwest::Client,
}

impl RemoteSync {
    pub fn new(config: RemoteConfig) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("photocard-bot")
            .build()
            .unwrap_or_default();
        Self { config, client }
    }

    /// Fetches the raw remote document. `None` on any failure (missing file,
    /// network, auth); the caller keeps whatever it has locally.
    pub async fn pull(&self) -> Option<String> {
        let resp = self
            .client
            .get(self.config.contents_url())
            .bearer_auth(&self.config.token)
            .header("Accept", "application/vnd.github.raw+json")
            .send()
            .await;
        match resp {
            Ok(r) if r.status().is_success() => r.text().await.ok(),
            Ok(r) => {
                warn!(target: "store.remote", status = %r.status(), "remote pull rejected");
                None
            }
            Err(e) => {
                warn!(target: "store.remote", error = %e, "remote pull failed");
                None
            }
        }
    }

    /// Uploads one snapshot, fetching the current blob sha first so the PUT
    /// replaces rather than conflicts.
    async fn push(&self, content: &str) -> Result<(), reqwest::Error> {
        let url = self.config.contents_url();
        let sha = self
            .client
            .get(&url)
            .bearer_auth(&self.config.token)
            .send()
            .await?
            .json::<ContentsMeta>()
            .await
            .ok()
            .map(|m| m.sha);

        let mut body = serde_json::json!({
            "message": "sync card data",
            "content": BASE64.encode(content.as_bytes()),
        });
        if let Some(sha) = sha {
            body["sha"] = serde_json::Value::String(sha);
        }
        self.client
            .put(&url)
            .bearer_auth(&self.config.token)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Consumes save snapshots until the sender side closes. Coalesces to the
    /// newest pending snapshot and retries each push once.
    pub async fn run(self, mut rx: mpsc::UnboundedReceiver<String>) {
        info!(target: "store.remote", repo = %self.config.repo, "remote sync enabled");
        while let Some(mut snapshot) = rx.recv().await {
            // Drain anything that queued up while we were pushing; only the
            // latest full document matters.
            while let Ok(newer) = rx.try_recv() {
                snapshot = newer;
            }
            if let Err(first) = self.push(&snapshot).await {
                warn!(target: "store.remote", error = %first, "push failed, retrying once");
                if let Err(second) = self.push(&snapshot).await {
                    warn!(target: "store.remote", error = %second, "push failed again, dropping snapshot");
                }
            }
        }
    }
}
