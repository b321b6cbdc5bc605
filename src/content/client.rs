//! Server-side client for the hosted content repository.
//!
//! Queries go over the GROQ HTTP API: one GET per document type, read-only,
//! no retries. Credentials come from the environment and are resolved once.

use std::sync::LazyLock;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::ContentError;

const DEFAULT_API_VERSION: &str = "2023-06-21";

static CLIENT: LazyLock<Result<ContentClient, ContentError>> =
    LazyLock::new(|| ContentConfig::from_env().map(ContentClient::new));

/// The shared client, or the configuration error that prevented building one.
pub fn content_client() -> Result<&'static ContentClient, ContentError> {
    CLIENT.as_ref().map_err(Clone::clone)
}

#[derive(Debug, Clone)]
pub struct ContentConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub token: Option<String>,
}

impl ContentConfig {
    pub fn from_env() -> Result<Self, ContentError> {
        let project_id = std::env::var("PORTFOLIO_SANITY_PROJECT_ID")
            .map_err(|_| ContentError::MissingEnv("PORTFOLIO_SANITY_PROJECT_ID"))?;
        let dataset = std::env::var("PORTFOLIO_SANITY_DATASET")
            .unwrap_or_else(|_| "production".to_string());
        let api_version = std::env::var("PORTFOLIO_SANITY_API_VERSION")
            .unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());
        let token = std::env::var("PORTFOLIO_SANITY_TOKEN").ok();
        Ok(Self {
            project_id,
            dataset,
            api_version,
            token,
        })
    }
}

pub struct ContentClient {
    http: Client,
    config: ContentConfig,
}

#[derive(Deserialize)]
struct QueryResponse<T> {
    result: T,
}

impl ContentClient {
    pub fn new(config: ContentConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Run one GROQ query and deserialize the `result` envelope field.
    pub async fn query<T: DeserializeOwned>(&self, groq: &str) -> Result<T, ContentError> {
        let url = query_url(
            &self.config.project_id,
            &self.config.api_version,
            &self.config.dataset,
        );
        let mut req = self.http.get(&url).query(&[("query", groq)]);
        if let Some(token) = &self.config.token {
            req = req.bearer_auth(token);
        }
        let resp = req
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ContentError::Http(e.to_string()))?;
        let envelope: QueryResponse<T> = resp
            .json()
            .await
            .map_err(|e| ContentError::Decode(e.to_string()))?;
        Ok(envelope.result)
    }
}

fn query_url(project_id: &str, api_version: &str, dataset: &str) -> String {
    format!("https://{project_id}.api.sanity.io/v{api_version}/data/query/{dataset}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_url_targets_the_project_dataset() {
        assert_eq!(
            query_url("abc123", "2023-06-21", "production"),
            "https://abc123.api.sanity.io/v2023-06-21/data/query/production"
        );
    }

    #[test]
    fn query_envelope_unwraps_result() {
        let raw = r#"{"ms": 3, "query": "*", "result": [1, 2, 3]}"#;
        let envelope: QueryResponse<Vec<u32>> = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.result, vec![1, 2, 3]);
    }
}
