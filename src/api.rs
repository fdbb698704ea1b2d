//! Label server client.
//!
//! Thin wrapper around `reqwest` for the three label-submission endpoints
//! and the thumbnail renderer. Submissions are fire-and-observe: no retry,
//! no timeout, no queueing. Callers decide what a failure means; this module
//! only reports it.

use anyhow::{Context, Result};
use serde_json::json;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(server_url: &str) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: server_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Submit a volume-level categorical label.
    pub async fn set_label(&self, element_id: i64, label_value: &str, ms: u64) -> Result<()> {
        let body = json!({
            "element_id": element_id,
            "label_value": label_value,
            "ms": ms,
        });
        self.post("/api/set-label-value", &body).await
    }

    /// Submit a slice-level categorical label. The endpoint spells the
    /// elapsed-time field differently from the volume one.
    pub async fn set_slice_label(
        &self,
        element_id: i64,
        label_value: &str,
        interaction_ms: u64,
    ) -> Result<()> {
        let body = json!({
            "element_id": element_id,
            "label_value": label_value,
            "interaction_ms": interaction_ms,
        });
        self.post("/api/set-categorical-slice-label-value", &body).await
    }

    /// Submit a pairwise comparison label.
    pub async fn set_comparison_label(
        &self,
        element_id: i64,
        label_value: &str,
        time_taken_ms: u64,
    ) -> Result<()> {
        let body = json!({
            "element_id": element_id,
            "label_value": label_value,
            "time_taken_ms": time_taken_ms,
        });
        self.post("/api/set-comparison-label-value", &body).await
    }

    async fn post(&self, path: &str, body: &serde_json::Value) -> Result<()> {
        let url = self.url(path);
        debug!(%url, "Posting label");
        self.http
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Label POST to {url} failed"))?
            .error_for_status()
            .with_context(|| format!("Label POST to {url} was rejected"))?;
        Ok(())
    }

    /// Fetch a rendered slice thumbnail. `path` is a server-relative URL
    /// from `thumburl::thumbnail_url`; the bytes are handed straight to the
    /// image decoder, never inspected here.
    pub async fn fetch_thumbnail(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.url(path);
        let bytes = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Thumbnail GET {url} failed"))?
            .error_for_status()
            .with_context(|| format!("Thumbnail GET {url} was rejected"))?
            .bytes()
            .await
            .with_context(|| format!("Thumbnail GET {url} body read failed"))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let with = ApiClient::new("http://localhost:5000/");
        let without = ApiClient::new("http://localhost:5000");
        assert_eq!(with.url("/thumb/d/i"), "http://localhost:5000/thumb/d/i");
        assert_eq!(without.url("/thumb/d/i"), "http://localhost:5000/thumb/d/i");
    }
}
