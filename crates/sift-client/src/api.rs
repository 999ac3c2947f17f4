//! HTTP client for the sift daemon REST API
//!
//! All responses share one envelope:
//!
//! ```json
//! { "success": true, "message": "…", "data": { … } }
//! ```
//!
//! Status codes are mapped onto [`sift_core::Error`] variants so the
//! application can render a one-line summary. Bodies that do not decode are
//! reported as [`Error::MalformedResponse`] rather than panicking.

use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use url::Url;

use sift_core::prelude::*;
use sift_core::{ContentItem, ItemId, Source};

use crate::backend::{ContentPage, ContentQuery, ItemChange, SourceOp};

/// Default daemon address
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8989";

/// Header carrying the API key
const API_KEY_HEADER: &str = "X-API-Key";

/// Connection settings for [`ApiClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub url: String,
    pub key: Option<String>,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            key: None,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Response envelope returned by every endpoint
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: String,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct EntriesData {
    items: Vec<ContentItem>,
    #[serde(default)]
    hidden_count: usize,
}

#[derive(Debug, Deserialize)]
struct SourcesData {
    sources: Vec<Source>,
}

#[derive(Debug, Deserialize)]
struct CountData {
    count: usize,
}

#[derive(Debug, Deserialize)]
struct DeletedData {
    deleted: usize,
}

/// Pooled client for the daemon API.
///
/// Cloning is cheap: the inner `reqwest::Client` is reference counted and
/// its connection pool is shared by all clones, so one client is built at
/// startup and handed to every operation.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
    key: Option<String>,
}

impl ApiClient {
    /// Build a client for `config`.
    ///
    /// Fails only on an unparsable base URL or a TLS backend that cannot be
    /// initialized.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base = normalize_base(&config.url)?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base,
            key: config.key.clone().filter(|k| !k.is_empty()),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Fetch content items matching `query`
    pub async fn entries(&self, query: &ContentQuery) -> Result<ContentPage> {
        let params = query_params(query);
        let req = self.request(Method::GET, "api/entries")?.query(&params);
        let data: EntriesData = self.send(req).await?;
        Ok(ContentPage {
            items: data.items,
            hidden_count: data.hidden_count,
        })
    }

    /// List configured sources
    pub async fn sources(&self) -> Result<Vec<Source>> {
        let req = self.request(Method::GET, "api/sources")?;
        let data: SourcesData = self.send(req).await?;
        Ok(data.sources)
    }

    /// Update a single entry
    pub async fn update_entry(&self, id: &ItemId, change: ItemChange) -> Result<()> {
        let body = match change {
            ItemChange::Read(read) => json!({ "read": read }),
            ItemChange::Favorite(favorited) => json!({ "favorited": favorited }),
        };
        let req = self
            .request(Method::PATCH, &format!("api/entries/{}", id))?
            .json(&body);
        self.send_unit(req).await.map(|_| ())
    }

    /// Run a source operation and return the daemon's message
    pub async fn source_op(&self, op: &SourceOp) -> Result<String> {
        let req = match op {
            SourceOp::Add { url, name } => self
                .request(Method::POST, "api/sources")?
                .json(&json!({ "url": url, "name": name })),
            SourceOp::Remove { id } => {
                self.request(Method::DELETE, &format!("api/sources/{}", id))?
            }
            SourceOp::Pause { id } => {
                self.request(Method::PATCH, &format!("api/sources/{}/pause", id))?
            }
            SourceOp::Resume { id } => {
                self.request(Method::PATCH, &format!("api/sources/{}/resume", id))?
            }
            SourceOp::Rename { id, name } => self
                .request(Method::PATCH, &format!("api/sources/{}", id))?
                .json(&json!({ "name": name })),
        };
        self.send_unit(req).await
    }

    /// Count prunable (unprioritized) entries
    pub async fn prune_count(&self, age_days: Option<u32>) -> Result<usize> {
        let req = self
            .request(Method::GET, "api/prune/count")?
            .query(&age_param(age_days));
        let data: CountData = self.send(req).await?;
        Ok(data.count)
    }

    /// Delete prunable entries
    pub async fn prune(&self, age_days: Option<u32>) -> Result<usize> {
        let req = self
            .request(Method::POST, "api/prune")?
            .query(&age_param(age_days));
        let data: DeletedData = self.send(req).await?;
        Ok(data.deleted)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self
            .base
            .join(path)
            .map_err(|e| Error::config(format!("Invalid API path '{}': {}", path, e)))?;
        let mut req = self.http.request(method, url);
        if let Some(key) = &self.key {
            req = req.header(API_KEY_HEADER, key);
        }
        Ok(req)
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T> {
        let (status, body) = self.execute(req).await?;
        decode_envelope(status, &body)
    }

    /// Send a request whose envelope carries no `data`, returning `message`
    async fn send_unit(&self, req: RequestBuilder) -> Result<String> {
        let (status, body) = self.execute(req).await?;
        decode_message(status, &body)
    }

    async fn execute(&self, req: RequestBuilder) -> Result<(u16, Vec<u8>)> {
        let resp = req.send().await.map_err(|e| self.transport_error(e))?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(|e| self.transport_error(e))?;
        debug!("API {} -> {} ({} bytes)", self.base, status, body.len());
        Ok((status, body.to_vec()))
    }

    fn transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::unreachable(self.base.as_str(), "request timed out")
        } else if e.is_connect() {
            Error::unreachable(self.base.as_str(), "connection refused")
        } else if e.is_decode() {
            Error::malformed(e.to_string())
        } else {
            Error::api(e.to_string())
        }
    }
}

/// Parse the base URL, ensuring a trailing slash so `join` keeps any path prefix
fn normalize_base(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::config("API URL is empty"));
    }
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };
    Url::parse(&with_slash).map_err(|e| Error::config(format!("Invalid API URL '{}': {}", raw, e)))
}

fn query_params(query: &ContentQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("unread_only", (!query.include_read).to_string()),
        ("sort", query.sort.as_str().to_string()),
        (
            "include_unprioritized",
            query.include_unprioritized.to_string(),
        ),
        ("limit", query.limit.to_string()),
    ];
    if let Some(priority) = query.priority {
        params.push(("priority", priority.as_str().to_string()));
    }
    if let Some(source_type) = query.source_type {
        params.push(("source_type", source_type.as_str().to_string()));
    }
    params
}

fn age_param(age_days: Option<u32>) -> Vec<(&'static str, String)> {
    age_days
        .map(|d| vec![("days", d.to_string())])
        .unwrap_or_default()
}

/// Map an HTTP status and the envelope's message onto an error
fn status_error(status: u16, message: String) -> Error {
    match status {
        401 | 403 => Error::Unauthorized,
        404 => Error::not_found(if message.is_empty() {
            "resource".to_string()
        } else {
            message
        }),
        400 | 409 | 422 => Error::validation(message),
        _ => Error::api(if message.is_empty() {
            format!("HTTP {}", status)
        } else {
            format!("HTTP {}: {}", status, message)
        }),
    }
}

/// Best-effort extraction of the envelope message from an error body
fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<Envelope<serde_json::Value>>(body)
        .map(|env| env.message)
        .unwrap_or_else(|_| String::from_utf8_lossy(body).trim().to_string())
}

fn decode_envelope<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T> {
    if !(200..300).contains(&status) {
        return Err(status_error(status, error_message(body)));
    }
    let env: Envelope<T> =
        serde_json::from_slice(body).map_err(|e| Error::malformed(e.to_string()))?;
    if !env.success {
        return Err(Error::api(env.message));
    }
    env.data
        .ok_or_else(|| Error::malformed("response has no data"))
}

fn decode_message(status: u16, body: &[u8]) -> Result<String> {
    if !(200..300).contains(&status) {
        return Err(status_error(status, error_message(body)));
    }
    let env: Envelope<serde_json::Value> =
        serde_json::from_slice(body).map_err(|e| Error::malformed(e.to_string()))?;
    if !env.success {
        return Err(Error::api(env.message));
    }
    Ok(env.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_core::{Priority, SortDirection, SourceType};

    #[test]
    fn test_normalize_base_adds_trailing_slash() {
        let url = normalize_base("http://localhost:8989/prefix").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8989/prefix/");
        assert_eq!(
            url.join("api/entries").unwrap().as_str(),
            "http://localhost:8989/prefix/api/entries"
        );
    }

    #[test]
    fn test_normalize_base_rejects_garbage() {
        assert!(normalize_base("").is_err());
        assert!(normalize_base("not a url").is_err());
    }

    #[test]
    fn test_client_drops_empty_key() {
        let client = ApiClient::new(&ApiConfig {
            key: Some(String::new()),
            ..ApiConfig::default()
        })
        .unwrap();
        assert!(client.key.is_none());
    }

    #[test]
    fn test_query_params_reflect_filters() {
        let query = ContentQuery {
            priority: Some(Priority::High),
            include_read: false,
            source_type: Some(SourceType::Reddit),
            sort: SortDirection::Oldest,
            include_unprioritized: true,
            limit: 50,
        };
        let params = query_params(&query);
        assert!(params.contains(&("unread_only", "true".to_string())));
        assert!(params.contains(&("priority", "high".to_string())));
        assert!(params.contains(&("source_type", "reddit".to_string())));
        assert!(params.contains(&("sort", "oldest".to_string())));
        assert!(params.contains(&("include_unprioritized", "true".to_string())));
    }

    #[test]
    fn test_query_params_omit_unset_filters() {
        let params = query_params(&ContentQuery::default());
        assert!(!params.iter().any(|(k, _)| *k == "priority"));
        assert!(!params.iter().any(|(k, _)| *k == "source_type"));
    }

    #[test]
    fn test_decode_envelope_success() {
        let body = br#"{"success": true, "message": "", "data": {"count": 12}}"#;
        let data: CountData = decode_envelope(200, body).unwrap();
        assert_eq!(data.count, 12);
    }

    #[test]
    fn test_decode_envelope_malformed_body() {
        let result: Result<CountData> = decode_envelope(200, b"<html>oops</html>");
        assert!(matches!(result, Err(Error::MalformedResponse { .. })));
    }

    #[test]
    fn test_decode_envelope_missing_data() {
        let body = br#"{"success": true, "message": "ok"}"#;
        let result: Result<CountData> = decode_envelope(200, body);
        assert!(matches!(result, Err(Error::MalformedResponse { .. })));
    }

    #[test]
    fn test_decode_envelope_unsuccessful() {
        let body = br#"{"success": false, "message": "database locked", "data": null}"#;
        let result: Result<CountData> = decode_envelope(200, body);
        match result {
            Err(Error::Api { message }) => assert_eq!(message, "database locked"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_status_mapping() {
        let unauthorized: Result<CountData> = decode_envelope(401, b"{}");
        assert!(matches!(unauthorized, Err(Error::Unauthorized)));

        let body = br#"{"success": false, "message": "Source 9 not found"}"#;
        match decode_message(404, body) {
            Err(Error::NotFound { what }) => assert_eq!(what, "Source 9 not found"),
            other => panic!("unexpected: {:?}", other),
        }

        let body = br#"{"success": false, "message": "invalid url"}"#;
        assert!(matches!(
            decode_message(422, body),
            Err(Error::Validation { .. })
        ));

        match decode_message(500, b"Internal Server Error") {
            Err(Error::Api { message }) => {
                assert_eq!(message, "HTTP 500: Internal Server Error")
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_decode_message_returns_text() {
        let body = br#"{"success": true, "message": "Source paused", "data": null}"#;
        assert_eq!(decode_message(200, body).unwrap(), "Source paused");
    }

    #[test]
    fn test_entries_data_decodes_items() {
        let body = br#"{
            "success": true,
            "message": "",
            "data": {
                "items": [{
                    "id": "e1", "title": "Hello", "url": "https://x/1",
                    "source_id": "s1", "source_name": "X", "source_type": "rss",
                    "priority": "medium", "read": true
                }],
                "hidden_count": 4
            }
        }"#;
        let data: EntriesData = decode_envelope(200, body).unwrap();
        assert_eq!(data.items.len(), 1);
        assert_eq!(data.items[0].priority, Some(Priority::Medium));
        assert!(data.items[0].read);
        assert_eq!(data.hidden_count, 4);
    }
}
