// API module - HTTP client for the blog backend
//
// One thin request core (`call`) carries the whole wire contract:
// - JSON content type on every request
// - `Authorization: Bearer <token>` iff a token is supplied
// - bodies are dropped for GET/DELETE even when a caller hands one in
// - non-2xx responses become a single error kind with the backend's
//   `message` field, or "Error <status>" when no message can be parsed
// - 204 yields an empty JSON object instead of a body parse
// - exactly one attempt per call: no retry, no timeout, no backoff
//
// Typed endpoint wrappers sit on top and parse responses at the boundary.

mod error;
pub mod types;

pub use error::ApiError;

use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use types::{Article, ArticlePayload, AuthResponse, Comment, CommentPayload, Credentials, User};

pub use reqwest::Method;

/// Result alias for all API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP client for the blog backend
///
/// Cheap to clone: the underlying `reqwest::Client` is an `Arc` around a
/// connection pool, so spawned request tasks each take their own copy.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the given base URL (no trailing slash)
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform one request and return the response as loose JSON
    ///
    /// This is the transport contract; prefer the typed wrappers below.
    pub async fn call(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> ApiResult<Value> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        // GET and DELETE never carry a body, even if one was supplied
        if let Some(body) = body {
            if method != Method::GET && method != Method::DELETE {
                request = request.json(&body);
            }
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            // Pull the backend's message field if the error body is JSON;
            // otherwise fall back to the bare status code.
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|v| {
                    v.get("message")
                        .and_then(Value::as_str)
                        .map(str::to_owned)
                })
                .unwrap_or_else(|| format!("Error {}", status.as_u16()));
            tracing::debug!(%status, %url, "request failed: {message}");
            return Err(ApiError::failed(message));
        }

        if status == reqwest::StatusCode::NO_CONTENT {
            return Ok(Value::Object(Map::new()));
        }

        Ok(response.json::<Value>().await?)
    }

    /// Parse a loose JSON value into a typed result at the boundary
    fn parse<T: DeserializeOwned>(value: Value) -> ApiResult<T> {
        serde_json::from_value(value)
            .map_err(|e| ApiError::failed(format!("Unexpected response shape: {e}")))
    }

    // ── auth ────────────────────────────────────────────────────────────────

    pub async fn login(&self, credentials: &Credentials) -> ApiResult<AuthResponse> {
        let body = serde_json::to_value(credentials).expect("credentials serialize");
        let value = self
            .call(Method::POST, "/api/auth/login", Some(body), None)
            .await?;
        Self::parse(value)
    }

    pub async fn signup(&self, credentials: &Credentials) -> ApiResult<AuthResponse> {
        let body = serde_json::to_value(credentials).expect("credentials serialize");
        let value = self
            .call(Method::POST, "/api/auth/signup", Some(body), None)
            .await?;
        Self::parse(value)
    }

    /// Resolve a token to its user profile
    pub async fn me(&self, token: &str) -> ApiResult<User> {
        let value = self
            .call(Method::GET, "/api/auth/me", None, Some(token))
            .await?;
        Self::parse(value)
    }

    // ── articles ────────────────────────────────────────────────────────────

    /// The public article collection
    pub async fn articles(&self) -> ApiResult<Vec<Article>> {
        let value = self.call(Method::GET, "/api/blogs", None, None).await?;
        Self::parse(value)
    }

    /// Only the acting user's own articles
    pub async fn my_articles(&self, token: &str) -> ApiResult<Vec<Article>> {
        let value = self
            .call(Method::GET, "/api/blogs/my", None, Some(token))
            .await?;
        Self::parse(value)
    }

    pub async fn article(&self, id: i64, token: Option<&str>) -> ApiResult<Article> {
        let value = self
            .call(Method::GET, &format!("/api/blogs/{id}"), None, token)
            .await?;
        Self::parse(value)
    }

    pub async fn create_article(&self, payload: &ArticlePayload, token: &str) -> ApiResult<()> {
        let body = serde_json::to_value(payload).expect("payload serialize");
        self.call(Method::POST, "/api/blogs", Some(body), Some(token))
            .await?;
        Ok(())
    }

    pub async fn update_article(
        &self,
        id: i64,
        payload: &ArticlePayload,
        token: &str,
    ) -> ApiResult<()> {
        let body = serde_json::to_value(payload).expect("payload serialize");
        self.call(
            Method::PUT,
            &format!("/api/blogs/{id}"),
            Some(body),
            Some(token),
        )
        .await?;
        Ok(())
    }

    /// Delete an article; the backend answers 204
    pub async fn delete_article(&self, id: i64, token: &str) -> ApiResult<()> {
        self.call(
            Method::DELETE,
            &format!("/api/blogs/{id}"),
            None,
            Some(token),
        )
        .await?;
        Ok(())
    }

    // ── comments ────────────────────────────────────────────────────────────

    pub async fn comments(&self, article_id: i64, token: Option<&str>) -> ApiResult<Vec<Comment>> {
        let value = self
            .call(
                Method::GET,
                &format!("/api/blogs/{article_id}/comments"),
                None,
                token,
            )
            .await?;
        Self::parse(value)
    }

    pub async fn post_comment(
        &self,
        article_id: i64,
        payload: &CommentPayload,
        token: &str,
    ) -> ApiResult<()> {
        let body = serde_json::to_value(payload).expect("payload serialize");
        self.call(
            Method::POST,
            &format!("/api/blogs/{article_id}/comments"),
            Some(body),
            Some(token),
        )
        .await?;
        Ok(())
    }

    /// Delete a comment; the backend answers 204
    pub async fn delete_comment(
        &self,
        article_id: i64,
        comment_id: i64,
        token: &str,
    ) -> ApiResult<()> {
        self.call(
            Method::DELETE,
            &format!("/api/blogs/{article_id}/comments/{comment_id}"),
            None,
            Some(token),
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{delete, get, post};
    use axum::{Json, Router};
    use serde_json::json;

    /// Bind the fixture router on an ephemeral port and return its base URL
    async fn spawn_fixture(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fixture");
        let addr = listener.local_addr().expect("fixture addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve fixture");
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn error_message_extracted_from_json_body() {
        let router = Router::new().route(
            "/api/blogs",
            post(|| async { (StatusCode::BAD_REQUEST, Json(json!({"message": "X"}))) }),
        );
        let client = ApiClient::new(spawn_fixture(router).await);

        let err = client
            .call(Method::POST, "/api/blogs", Some(json!({})), None)
            .await
            .unwrap_err();
        assert_eq!(err.message(), "X");
    }

    #[tokio::test]
    async fn error_falls_back_to_status_code() {
        let router = Router::new().route(
            "/api/blogs",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "not json") }),
        );
        let client = ApiClient::new(spawn_fixture(router).await);

        let err = client
            .call(Method::GET, "/api/blogs", None, None)
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Error 500");
    }

    #[tokio::test]
    async fn no_content_returns_empty_object() {
        let router = Router::new().route(
            "/api/blogs/7",
            delete(|| async { StatusCode::NO_CONTENT }),
        );
        let client = ApiClient::new(spawn_fixture(router).await);

        let value = client
            .call(Method::DELETE, "/api/blogs/7", None, Some("tok"))
            .await
            .unwrap();
        assert_eq!(value, json!({}));
    }

    #[tokio::test]
    async fn bearer_header_present_iff_token_supplied() {
        async fn echo_auth(headers: HeaderMap) -> Json<serde_json::Value> {
            let auth = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned);
            Json(json!({ "auth": auth }))
        }
        let router = Router::new().route("/api/auth/me", get(echo_auth));
        let client = ApiClient::new(spawn_fixture(router).await);

        let with = client
            .call(Method::GET, "/api/auth/me", None, Some("tok123"))
            .await
            .unwrap();
        assert_eq!(with["auth"], json!("Bearer tok123"));

        let without = client
            .call(Method::GET, "/api/auth/me", None, None)
            .await
            .unwrap();
        assert_eq!(without["auth"], json!(null));
    }

    #[tokio::test]
    async fn body_is_dropped_for_get_and_delete() {
        async fn echo_len(body: String) -> Json<serde_json::Value> {
            Json(json!({ "len": body.len() }))
        }
        let router = Router::new()
            .route("/echo", get(echo_len).delete(echo_len).put(echo_len));
        let client = ApiClient::new(spawn_fixture(router).await);

        // A body mistakenly supplied on GET/DELETE never reaches the wire
        let via_get = client
            .call(Method::GET, "/echo", Some(json!({"a": 1})), None)
            .await
            .unwrap();
        assert_eq!(via_get["len"], json!(0));

        let via_delete = client
            .call(Method::DELETE, "/echo", Some(json!({"a": 1})), None)
            .await
            .unwrap();
        assert_eq!(via_delete["len"], json!(0));

        // PUT keeps it
        let via_put = client
            .call(Method::PUT, "/echo", Some(json!({"a": 1})), None)
            .await
            .unwrap();
        assert_ne!(via_put["len"], json!(0));
    }

    #[tokio::test]
    async fn network_failure_collapses_to_request_failed() {
        // Nothing listens on port 1
        let client = ApiClient::new("http://127.0.0.1:1");
        let err = client
            .call(Method::GET, "/api/blogs", None, None)
            .await
            .unwrap_err();
        assert!(!err.message().is_empty());
    }

    #[tokio::test]
    async fn typed_wrapper_parses_article_collection() {
        let router = Router::new().route(
            "/api/blogs",
            get(|| async {
                Json(json!([{
                    "id": 1,
                    "title": "Hello",
                    "content": "first\nsecond",
                    "author_id": 9,
                    "author_name": "ed",
                    "created_at": "2025-11-02T09:30:00Z",
                    "published": true
                }]))
            }),
        );
        let client = ApiClient::new(spawn_fixture(router).await);

        let articles = client.articles().await.unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Hello");
        assert_eq!(articles[0].author_id, 9);
    }

    #[tokio::test]
    async fn typed_wrapper_reports_shape_mismatch() {
        let router = Router::new().route(
            "/api/auth/me",
            get(|| async { Json(json!({"unexpected": true})) }),
        );
        let client = ApiClient::new(spawn_fixture(router).await);

        let err = client.me("tok").await.unwrap_err();
        assert!(err.message().starts_with("Unexpected response shape"));
    }
}
