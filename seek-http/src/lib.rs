//! Minimal JSON-over-HTTP client with safe logging and header auth.
//!
//! - Request options: extra headers, `Auth`, per-request timeout
//! - Never logs secret values: auth headers and secret JSON body keys
//!   (`api_key`, `token`, ...) are redacted
//! - One attempt per call; failures surface as [`HttpError`] without retries
//! - Optional *raw* request/response logging via `SEEK_HTTP_RAW=1`
//!
//! Example (no_run):
//! ```rust
//! # async fn demo() -> Result<(), seek_http::HttpError> {
//! let client = seek_http::HttpClient::new("https://api.example.com")?;
//! let got: serde_json::Value = client
//!     .post_json("v1/search", &serde_json::json!({ "q": "rust" }))
//!     .await?;
//! # Ok(()) }
//! ```
//!
//! Observability: structured `tracing` events are emitted for request start,
//! response headers, body snippets (truncated), final errors, and (optionally)
//! raw request/response lines (target `http.raw`) when `SEEK_HTTP_RAW=1`.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::env;
use std::time::Duration;
use thiserror::Error;

// ==============================
// Raw logging toggles
// ==============================

const RAW_ENV: &str = "SEEK_HTTP_RAW";
const RAW_MAX_BODY: usize = 64 * 1024; // cap raw body logs (64 KiB)
const SNIPPET_MAX: usize = 500;

const REDACTED: &str = "<redacted>";

/// Header names whose values never reach the logs.
const SECRET_HEADERS: &[&str] = &["authorization", "x-api-key", "x-subscription-token"];

/// JSON body keys whose values never reach the logs.
const SECRET_KEYS: &[&str] = &[
    "access_token",
    "authorization",
    "auth",
    "key",
    "api_key",
    "apikey",
    "token",
    "secret",
    "client_secret",
    "bearer",
];

fn raw_enabled() -> bool {
    matches!(
        env::var(RAW_ENV).as_deref(),
        Ok("1") | Ok("true") | Ok("yes")
    )
}

fn is_secret_header(name: &str) -> bool {
    SECRET_HEADERS.iter().any(|s| name.eq_ignore_ascii_case(s))
}

fn is_secret_key(key: &str) -> bool {
    SECRET_KEYS.iter().any(|s| key.eq_ignore_ascii_case(s))
}

/// Render a best-effort curl command for repro/debug, with secrets redacted.
fn make_curl(method: &Method, url: &Url, headers: &HeaderMap, body: Option<&[u8]>) -> String {
    let mut parts = vec!["curl".to_string(), format!("-X{}", method)];
    for (name, val) in headers.iter() {
        let v = if is_secret_header(name.as_str()) {
            REDACTED.to_string()
        } else {
            val.to_str().unwrap_or("").to_string()
        };
        parts.push(format!(
            "-H '{}: {}'",
            name.as_str(),
            v.replace('\'', r"'\''")
        ));
    }
    if let Some(bytes) = body {
        if std::str::from_utf8(bytes).is_ok() {
            let mut s = redact_json_body(bytes);
            truncate_utf8(&mut s, RAW_MAX_BODY);
            parts.push(format!("-d '{}'", s.replace('\'', r"'\''")));
        } else {
            parts.push(format!("--data-binary @- # ({} bytes)", bytes.len()));
        }
    }
    parts.push(format!("'{}'", url.as_str()));
    parts.join(" ")
}

/// Redact sensitive headers for logging
fn redact_headers(h: &HeaderMap) -> Vec<(String, String)> {
    h.iter()
        .map(|(k, v)| {
            let key = k.as_str().to_string();
            let val = if is_secret_header(&key) {
                REDACTED.to_string()
            } else {
                v.to_str().unwrap_or("").to_string()
            };
            (key, val)
        })
        .collect()
}

/// Re-render a JSON body with secret values replaced. Non-JSON bodies are
/// returned as lossy UTF-8.
fn redact_json_body(bytes: &[u8]) -> String {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(mut v) => {
            redact_value(&mut v);
            v.to_string()
        }
        Err(_) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

fn redact_value(v: &mut Value) {
    match v {
        Value::Object(map) => {
            for (k, val) in map.iter_mut() {
                if is_secret_key(k) {
                    *val = Value::String(REDACTED.into());
                } else {
                    redact_value(val);
                }
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(redact_value),
        _ => {}
    }
}

// ==============================
// Errors
// ==============================

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("invalid URL: {0}")]
    Url(String),
    #[error("request build failed: {0}")]
    Build(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("decode error: {0}, body_snippet: {1}")]
    Decode(String, String),
    #[error("API error: {status} - {body}")]
    Api {
        status: StatusCode,
        /// Full response body, lossily decoded as UTF-8.
        body: String,
        request_id: String,
    },
}

// ==============================
// Auth & Request Options
// ==============================

/// Authentication strategies supported by the HTTP client helpers.
///
/// ```
/// use seek_http::Auth;
/// use reqwest::header::{HeaderName, HeaderValue};
///
/// let auth = Auth::Header {
///     name: HeaderName::from_static("x-api-key"),
///     value: HeaderValue::from_static("secret"),
/// };
/// assert!(matches!(auth, Auth::Header { .. }));
/// ```
#[derive(Clone, Debug)]
pub enum Auth {
    /// Custom header (e.g., Serper: X-API-KEY)
    Header {
        name: HeaderName,
        value: HeaderValue,
    },
    /// Credentials travel elsewhere (e.g. inside the JSON body).
    None,
}

impl Auth {
    /// Build a header credential, marking the value sensitive.
    pub fn header(name: &'static str, secret: &str) -> Result<Self, HttpError> {
        let mut value = HeaderValue::from_str(secret)
            .map_err(|e| HttpError::Build(format!("invalid {name} header value: {e}")))?;
        value.set_sensitive(true);
        Ok(Auth::Header {
            name: HeaderName::from_static(name),
            value,
        })
    }

    fn kind(&self) -> &'static str {
        match self {
            Auth::Header { .. } => "header",
            Auth::None => "none",
        }
    }
}

/// Per-request tuning knobs for the HTTP client.
///
/// ```
/// use seek_http::{Auth, RequestOpts};
/// use std::time::Duration;
///
/// let opts = RequestOpts {
///     timeout: Some(Duration::from_secs(30)),
///     auth: Some(Auth::None),
///     ..Default::default()
/// };
///
/// assert_eq!(opts.timeout.unwrap().as_secs(), 30);
/// assert!(opts.headers.is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestOpts {
    pub timeout: Option<Duration>,
    pub auth: Option<Auth>,
    pub headers: Option<HeaderMap>,
}

// ==============================
// Client
// ==============================

#[derive(Clone, Debug)]
pub struct HttpClient {
    base: Url,
    inner: Client,
    pub default_timeout: Duration,
}

impl HttpClient {
    /// Construct a client anchored to a base URL.
    ///
    /// Relative paths passed to the request helpers are joined onto `base`;
    /// a trailing `/` is added to the base path so the last segment is kept.
    ///
    /// ```
    /// use seek_http::{HttpClient, HttpError};
    /// use std::time::Duration;
    ///
    /// let client = HttpClient::new("https://api.example.com/v1")?;
    /// assert_eq!(client.base().as_str(), "https://api.example.com/v1/");
    /// assert_eq!(client.default_timeout, Duration::from_secs(60));
    /// # Ok::<(), HttpError>(())
    /// ```
    pub fn new(base: &str) -> Result<Self, HttpError> {
        let mut base = Url::parse(base).map_err(|e| HttpError::Url(e.to_string()))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let inner = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| HttpError::Build(e.to_string()))?;
        Ok(Self {
            base,
            inner,
            default_timeout: Duration::from_secs(60),
        })
    }

    /// Override the default timeout returned by [`HttpClient::new`].
    ///
    /// ```
    /// use seek_http::{HttpClient, HttpError};
    /// use std::time::Duration;
    ///
    /// let client = HttpClient::new("https://api.example.com")?
    ///     .with_timeout(Duration::from_secs(2));
    /// assert_eq!(client.default_timeout, Duration::from_secs(2));
    /// # Ok::<(), HttpError>(())
    /// ```
    pub fn with_timeout(mut self, dur: Duration) -> Self {
        self.default_timeout = dur;
        self
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// POST JSON without auth headers.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request_json_internal(Method::POST, path, body, RequestOpts::default())
            .await
    }

    /// POST JSON with per-request options (headers/auth/timeout).
    pub async fn post_json_opts<B, T>(
        &self,
        path: &str,
        body: &B,
        opts: RequestOpts,
    ) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request_json_internal(Method::POST, path, body, opts)
            .await
    }

    // ==============================
    // Core request implementation
    // ==============================

    async fn request_json_internal<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        opts: RequestOpts,
    ) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self
            .base
            .join(path)
            .map_err(|e| HttpError::Url(e.to_string()))?;

        // ----- Build request -----
        let timeout = opts.timeout.unwrap_or(self.default_timeout);
        let body_bytes = serde_json::to_vec(body).map_err(|e| HttpError::Build(e.to_string()))?;

        let mut rb = self
            .inner
            .request(method.clone(), url.clone())
            .timeout(timeout)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body_bytes.clone());

        if let Some(hdrs) = &opts.headers {
            rb = rb.headers(hdrs.clone());
        }

        let auth = opts.auth.unwrap_or(Auth::None);
        if let Auth::Header { name, value } = &auth {
            rb = rb.header(name, value);
        }

        // ----- Safe request logging (pre-send) -----
        // Lightweight request id without extra deps
        let req_id = format!(
            "r{:x}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        );

        tracing::debug!(
            target: "http",
            req_id=%req_id,
            method=%method,
            host_path=%format!("{}{}", url.host_str().unwrap_or("-"), url.path()),
            timeout_ms=timeout.as_millis() as u64,
            auth_kind=auth.kind(),
            body_len=body_bytes.len(),
            "http.request.start"
        );

        if raw_enabled() {
            let mut merged = HeaderMap::new();
            if let Some(h) = &opts.headers {
                for (k, v) in h.iter() {
                    merged.append(k, v.clone());
                }
            }
            if let Auth::Header { name, value } = &auth {
                merged.append(name, value.clone());
            }
            let curl = make_curl(&method, &url, &merged, Some(body_bytes.as_slice()));
            tracing::debug!(target: "http.raw", %req_id, %curl, "request");
        }

        // ----- Send -----
        let t0 = std::time::Instant::now();
        let resp = rb.send().await.map_err(|err| {
            let message = err.to_string();
            tracing::warn!(
                target: "http",
                req_id=%req_id,
                message=%message,
                "http.network_error.send"
            );
            HttpError::Network(message)
        })?;
        let status = resp.status();
        let headers = resp.headers().clone();
        let bytes = resp.bytes().await.map_err(|err| {
            let message = err.to_string();
            tracing::warn!(
                target: "http",
                req_id=%req_id,
                message=%message,
                "http.network_error.body"
            );
            HttpError::Network(message)
        })?;
        let dur_ms = t0.elapsed().as_millis() as u64;

        let req_hdr_id = headers
            .get("x-request-id")
            .or_else(|| headers.get("x-correlation-id"))
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::debug!(
            target: "http",
            req_id=%req_id,
            %status,
            duration_ms=dur_ms,
            body_len=bytes.len(),
            x_request_id=%req_hdr_id,
            "http.response.headers"
        );

        if raw_enabled() {
            let hdrs = redact_headers(&headers);
            let truncated = bytes.len() > RAW_MAX_BODY;
            let mut text = String::from_utf8_lossy(&bytes).into_owned();
            truncate_utf8(&mut text, RAW_MAX_BODY);
            tracing::info!(
                target:"http.raw",
                %req_id,
                status=%status,
                duration_ms=dur_ms,
                headers=?hdrs,
                body=%text,
                truncated
            );
        }

        let snippet = snip_body(&bytes);
        tracing::trace!(
            target: "http",
            req_id=%req_id,
            body_snippet=%snippet,
            "http.response.body_snippet"
        );

        // ----- Success path -----
        if status.is_success() {
            return serde_json::from_slice::<T>(&bytes).map_err(|e| {
                tracing::warn!(
                    target: "http",
                    req_id=%req_id,
                    serde_line=%e.line(),
                    serde_col=%e.column(),
                    serde_err=%e.to_string(),
                    body_snippet=%snippet,
                    "http.response.decode_error"
                );
                HttpError::Decode(e.to_string(), snippet)
            });
        }

        // ----- Non-success -----
        tracing::warn!(
            target: "http",
            req_id=%req_id,
            %status,
            x_request_id=%req_hdr_id,
            body_snippet=%snippet,
            "http.error"
        );
        Err(HttpError::Api {
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
            request_id: req_hdr_id.to_string(),
        })
    }
}

// ==============================
// Helpers
// ==============================

fn snip_body(body: &[u8]) -> String {
    let mut snip = String::from_utf8_lossy(body).into_owned();
    if snip.len() > SNIPPET_MAX {
        truncate_utf8(&mut snip, SNIPPET_MAX);
        snip.push_str("...");
    }
    snip
}

/// Truncate to at most `max` bytes without splitting a UTF-8 sequence.
fn truncate_utf8(s: &mut String, max: usize) {
    if s.len() <= max {
        return;
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    s.truncate(cut);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_secret_body_keys_recursively() {
        let body = br#"{"urls":["https://a.example"],"api_key":"tvly-123","nested":{"token":"t"}}"#;
        let out = redact_json_body(body);
        assert!(!out.contains("tvly-123"));
        assert!(!out.contains("\"t\""));
        assert!(out.contains("https://a.example"));
        assert!(out.contains(REDACTED));
    }

    #[test]
    fn non_json_body_is_passed_through() {
        assert_eq!(redact_json_body(b"plain text"), "plain text");
    }

    #[test]
    fn curl_redacts_api_key_header() {
        let url = Url::parse("https://google.serper.dev/search").unwrap();
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", HeaderValue::from_static("serper-secret"));
        headers.insert("accept", HeaderValue::from_static("application/json"));
        let curl = make_curl(&Method::POST, &url, &headers, Some(&br#"{"q":"rust"}"#[..]));
        assert!(!curl.contains("serper-secret"));
        assert!(curl.contains("x-api-key: <redacted>"));
        assert!(curl.contains("accept: application/json"));
        assert!(curl.contains(r#"{"q":"rust"}"#));
    }

    #[test]
    fn redact_headers_masks_authorization() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer abc"));
        let out = redact_headers(&headers);
        assert_eq!(out, vec![("authorization".to_string(), REDACTED.to_string())]);
    }

    #[test]
    fn snippet_truncation_respects_char_boundaries() {
        let body = "é".repeat(400);
        let snip = snip_body(body.as_bytes());
        assert!(snip.ends_with("..."));
        assert!(snip.len() <= SNIPPET_MAX + 3);
    }

    #[test]
    fn base_without_trailing_slash_keeps_last_segment() {
        let client = HttpClient::new("https://api.tavily.com/v2").unwrap();
        assert_eq!(
            client.base().join("extract").unwrap().as_str(),
            "https://api.tavily.com/v2/extract"
        );
    }

    #[test]
    fn rejects_invalid_base() {
        assert!(matches!(HttpClient::new("not a url"), Err(HttpError::Url(_))));
    }

    #[test]
    fn header_auth_rejects_control_characters() {
        assert!(matches!(
            Auth::header("x-api-key", "bad\nkey"),
            Err(HttpError::Build(_))
        ));
    }
}
