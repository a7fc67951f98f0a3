//! Thin HTTP client for the `/posts` API.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use blog_shared::dto::{CreateBlogPostRequest, UpdateBlogPostRequest};

use crate::error::VerifyError;

/// A fully buffered HTTP response.
#[derive(Debug, Clone)]
pub struct ApiReply {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl ApiReply {
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("application/json"))
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, VerifyError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Fail unless the status matches `expected`.
    pub fn expect_status(&self, expected: StatusCode, what: &str) -> Result<(), VerifyError> {
        ensure!(
            self.status == expected,
            "{what}: expected status {expected}, got {} ({})",
            self.status,
            String::from_utf8_lossy(&self.body)
        );
        Ok(())
    }
}

/// HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, VerifyError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /posts
    pub async fn list_posts(&self) -> Result<ApiReply, VerifyError> {
        self.send(self.client.get(self.url("/posts"))).await
    }

    /// GET /posts/{id}
    pub async fn get_post(&self, id: Uuid) -> Result<ApiReply, VerifyError> {
        self.send(self.client.get(self.url(&format!("/posts/{id}"))))
            .await
    }

    /// POST /posts
    pub async fn create_post(&self, body: &CreateBlogPostRequest) -> Result<ApiReply, VerifyError> {
        self.send(self.client.post(self.url("/posts")).json(body))
            .await
    }

    /// PUT /posts/{id}
    pub async fn update_post(
        &self,
        id: Uuid,
        body: &UpdateBlogPostRequest,
    ) -> Result<ApiReply, VerifyError> {
        self.send(self.client.put(self.url(&format!("/posts/{id}"))).json(body))
            .await
    }

    /// DELETE /posts/{id}
    pub async fn delete_post(&self, id: Uuid) -> Result<ApiReply, VerifyError> {
        self.send(self.client.delete(self.url(&format!("/posts/{id}"))))
            .await
    }

    async fn send(&self, request: RequestBuilder) -> Result<ApiReply, VerifyError> {
        let response = request.send().await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = response.bytes().await?.to_vec();

        tracing::debug!(%status, bytes = body.len(), "API response received");

        Ok(ApiReply {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(status: StatusCode, content_type: Option<&str>, body: &str) -> ApiReply {
        ApiReply {
            status,
            content_type: content_type.map(String::from),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8080/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.url("/posts"), "http://localhost:8080/posts");
    }

    #[test]
    fn test_is_json_accepts_charset_suffix() {
        assert!(reply(StatusCode::OK, Some("application/json; charset=utf-8"), "[]").is_json());
        assert!(!reply(StatusCode::OK, Some("text/plain"), "[]").is_json());
        assert!(!reply(StatusCode::OK, None, "[]").is_json());
    }

    #[test]
    fn test_expect_status_reports_body() {
        let r = reply(StatusCode::NOT_FOUND, None, "nope");
        assert!(r.expect_status(StatusCode::NOT_FOUND, "lookup").is_ok());

        let err = r.expect_status(StatusCode::OK, "lookup").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("404"), "{msg}");
        assert!(msg.contains("nope"), "{msg}");
    }
}
