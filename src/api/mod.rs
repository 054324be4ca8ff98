//! HTTP gateway to the job board API.
//!
//! One blocking client, one base URL, bearer token attached to every request
//! once a session holds one. Endpoint methods live in the sibling modules,
//! grouped per concern; everything funnels through [`ApiClient::execute`] so
//! server error messages are extracted in exactly one place.

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use url::Url;

mod admin;
mod applications;
mod auth;
mod cv;
mod jobs;

pub use auth::{AuthResponse, RegisterRequest};

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the request. `message` is the human-readable text
    /// from the response body when one was provided, shown to the user as-is.
    #[error("{message}")]
    Server { status: StatusCode, message: String },
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Error body shape the API uses for rejections.
#[derive(serde::Deserialize)]
struct ErrorBody {
    message: String,
}

pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &Url, token: Option<String>) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            http,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Attach a bearer token; every subsequent request carries it.
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self.http.request(method, format!("{}{}", self.base_url, path));
        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let response = req.send()?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .map(|body| body.message)
                .unwrap_or_else(|_| format!("Request failed with status {}", status));
            return Err(ApiError::Server { status, message });
        }
        Ok(response.json()?)
    }

    /// Like `execute` but for endpoints whose success body is empty or
    /// irrelevant.
    fn execute_ok(&self, req: RequestBuilder) -> Result<(), ApiError> {
        let response = req.send()?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .map(|body| body.message)
                .unwrap_or_else(|_| format!("Request failed with status {}", status));
            return Err(ApiError::Server { status, message });
        }
        Ok(())
    }

    pub(crate) fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.request(Method::GET, path))
    }

    pub(crate) fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        self.execute(self.request(Method::GET, path).query(query))
    }

    pub(crate) fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.request(Method::POST, path).json(body))
    }

    pub(crate) fn post_ok<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.execute_ok(self.request(Method::POST, path).json(body))
    }

    pub(crate) fn post_empty_ok(&self, path: &str) -> Result<(), ApiError> {
        self.execute_ok(self.request(Method::POST, path))
    }

    pub(crate) fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.request(Method::PUT, path).json(body))
    }

    pub(crate) fn put_ok<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.execute_ok(self.request(Method::PUT, path).json(body))
    }

    pub(crate) fn delete_ok(&self, path: &str) -> Result<(), ApiError> {
        self.execute_ok(self.request(Method::DELETE, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let base = Url::parse("http://localhost:5000/api").unwrap();
        let client = ApiClient::new(&base, None).unwrap();
        assert!(client.token().is_none());
        assert_eq!(client.base_url, "http://localhost:5000/api");
    }

    #[test]
    fn test_token_lifecycle() {
        let base = Url::parse("http://localhost:5000/api").unwrap();
        let mut client = ApiClient::new(&base, Some("abc".into())).unwrap();
        assert_eq!(client.token(), Some("abc"));
        client.set_token("def".into());
        assert_eq!(client.token(), Some("def"));
        client.clear_token();
        assert!(client.token().is_none());
    }

    #[test]
    fn test_server_error_displays_message_verbatim() {
        let err = ApiError::Server {
            status: StatusCode::BAD_REQUEST,
            message: "Email already registered".into(),
        };
        assert_eq!(err.to_string(), "Email already registered");
    }
}
