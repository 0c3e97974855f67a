use aisearch_protocol::{IndexBatch, SearchQuery};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use std::time::Duration;

use crate::capability::{EntityKind, SearchBackend, SearchResults};
use crate::error::{BackendError, Result};

pub const DEFAULT_API_VERSION: &str = "2025-03-01-preview";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct RestBackendConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub api_version: String,
    pub timeout: Duration,
}

impl RestBackendConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

impl fmt::Debug for RestBackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestBackendConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// [`SearchBackend`] over the search service REST API.
#[derive(Clone)]
pub struct RestSearchBackend {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
    api_version: String,
}

impl fmt::Debug for RestSearchBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestSearchBackend")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl RestSearchBackend {
    pub fn new(config: RestBackendConfig) -> Result<Self> {
        let endpoint = config.endpoint.trim().trim_end_matches('/').to_string();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(BackendError::InvalidConfig(format!(
                "endpoint must be an http(s) URL, got '{}'",
                config.endpoint
            )));
        }

        let base_url = Url::parse(&endpoint)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| {
                BackendError::InvalidConfig(format!(
                    "invalid endpoint URL '{}'",
                    config.endpoint
                ))
            })?;

        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key,
            api_version: config.api_version,
        })
    }

    /// Endpoint URL with `segments` appended, each one percent-encoded as a single segment.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                BackendError::InvalidConfig(format!(
                    "endpoint '{}' cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.url(segments)?;
        log::debug!("{method} {}", url.path());

        let mut request = self
            .http
            .request(method, url)
            .query(&[("api-version", self.api_version.as_str())]);
        if let Some(key) = self.api_key.as_deref() {
            request = request.header("api-key", key);
        }
        Ok(request)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        if response.status().is_success() {
            return Ok(response);
        }
        Err(api_error(response).await)
    }

    async fn send_json(&self, request: RequestBuilder) -> Result<Value> {
        let response = self.send(request).await?;
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|err| BackendError::Decode(err.to_string()))
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    code: Option<String>,
    message: String,
}

async fn api_error(response: Response) -> BackendError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => BackendError::Api {
            status,
            code: parsed.error.code,
            message: parsed.error.message,
        },
        Err(_) => BackendError::Api {
            status,
            code: None,
            message: if body.trim().is_empty() {
                format!("HTTP {status}")
            } else {
                body
            },
        },
    }
}

fn value_array(mut body: Value) -> Result<Vec<Value>> {
    match body.get_mut("value").map(Value::take) {
        Some(Value::Array(items)) => Ok(items),
        _ => Err(BackendError::Decode(
            "expected an object with a 'value' array".to_string(),
        )),
    }
}

/// A name always addresses one entity of its own kind; dot segments would climb out of it.
fn entity_name(name: &str) -> Result<&str> {
    match name {
        "" | "." | ".." => Err(BackendError::InvalidName(name.to_string())),
        _ => Ok(name),
    }
}

fn docs_path<'a>(index: &'a str, action: &'a str) -> Result<[&'a str; 4]> {
    Ok([EntityKind::Index.collection(), entity_name(index)?, "docs", action])
}

#[async_trait]
impl SearchBackend for RestSearchBackend {
    async fn list_names(&self, kind: EntityKind) -> Result<Vec<String>> {
        let request = self
            .request(Method::GET, &[kind.collection()])?
            .query(&[("$select", "name")]);
        let items = value_array(self.send_json(request).await?)?;
        items
            .iter()
            .map(|item| {
                item.get("name")
                    .and_then(Value::as_str)
                    .map(ToString::to_string)
                    .ok_or_else(|| BackendError::Decode(format!("{kind} entry without a name")))
            })
            .collect()
    }

    async fn list(&self, kind: EntityKind) -> Result<Vec<Value>> {
        let request = self.request(Method::GET, &[kind.collection()])?;
        value_array(self.send_json(request).await?)
    }

    async fn get(&self, kind: EntityKind, name: &str) -> Result<Value> {
        let request = self.request(Method::GET, &[kind.collection(), entity_name(name)?])?;
        self.send_json(request).await
    }

    async fn create(&self, kind: EntityKind, definition: Value) -> Result<Value> {
        let request = self
            .request(Method::POST, &[kind.collection()])?
            .json(&definition);
        self.send_json(request).await
    }

    async fn create_or_update(
        &self,
        kind: EntityKind,
        name: &str,
        definition: Value,
    ) -> Result<Value> {
        let request = self
            .request(Method::PUT, &[kind.collection(), entity_name(name)?])?
            .header("Prefer", "return=representation")
            .json(&definition);
        self.send_json(request).await
    }

    async fn delete(&self, kind: EntityKind, name: &str) -> Result<()> {
        let request = self.request(Method::DELETE, &[kind.collection(), entity_name(name)?])?;
        self.send(request).await?;
        Ok(())
    }

    async fn document_count(&self, index: &str) -> Result<u64> {
        let request = self.request(Method::GET, &docs_path(index, "$count")?)?;
        let body = self.send(request).await?.text().await?;
        let trimmed = body.trim_start_matches('\u{feff}').trim();
        trimmed
            .parse()
            .map_err(|_| BackendError::Decode(format!("document count '{trimmed}' is not a number")))
    }

    async fn index_documents(&self, index: &str, batch: &IndexBatch) -> Result<Value> {
        let request = self
            .request(Method::POST, &docs_path(index, "index")?)?
            .json(batch);
        self.send_json(request).await
    }

    async fn search(&self, index: &str, query: &SearchQuery) -> Result<SearchResults> {
        let request = self
            .request(Method::POST, &docs_path(index, "search")?)?
            .json(query);
        let mut body = self.send_json(request).await?;

        let count = body.get("@odata.count").and_then(Value::as_u64);
        let documents = value_array(body.take())?
            .into_iter()
            .map(|item| match item {
                Value::Object(map) => Ok(map),
                other => Err(BackendError::Decode(format!(
                    "search result is not an object: {other}"
                ))),
            })
            .collect::<Result<Vec<Map<String, Value>>>>()?;

        Ok(SearchResults { count, documents })
    }
}
