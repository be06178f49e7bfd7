//! REST client for the authentication API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`. Native builds get
//! stub branches returning [`ApiError::Unavailable`], keeping the crate
//! compilable and testable off-wasm.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are normalized into [`ApiError::Server`] carrying the
//! server's `error` message (a generic per-operation message when absent);
//! transport failures become [`ApiError::Network`]. Callers convert these
//! to user-visible messages at the submit site; nothing propagates further.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;
use thiserror::Error;

use super::types::LoginResponse;

/// Default backend base URL, overridable at client construction.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Failure of a remote API call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Non-2xx response; carries the server's message when present.
    #[error("{0}")]
    Server(String),
    /// Transport-level failure (connection refused, timeout, bad body).
    #[error("network error: {0}")]
    Network(String),
    /// Requests are only possible in a browser environment.
    #[error("not available outside the browser")]
    Unavailable,
}

/// Operations of the remote authentication service.
///
/// The transport seam: production code uses [`ApiClient`], tests substitute
/// recording fakes. Only used through generics, never as a trait object.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// POST `/signup`. The success payload shape is owned by the server.
    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Value, ApiError>;

    /// POST `/login`. `no_expire` requests a non-expiring token.
    async fn login(
        &self,
        user: &str,
        password: &str,
        no_expire: bool,
    ) -> Result<LoginResponse, ApiError>;

    /// POST `/logout` with bearer authorization. The payload is unused.
    async fn logout(&self, token: &str) -> Result<(), ApiError>;
}

/// Decode a response body, normalizing failures.
///
/// Success bodies deserialize to `T`. Failure bodies surface the server's
/// `error` field, falling back to `fallback` when the field is absent or
/// the body is not JSON.
fn decode_response<T: serde::de::DeserializeOwned>(
    ok: bool,
    body: &str,
    fallback: &str,
) -> Result<T, ApiError> {
    if ok {
        serde_json::from_str(body)
            .map_err(|err| ApiError::Network(format!("invalid response body: {err}")))
    } else {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_owned))
            .unwrap_or_else(|| fallback.to_owned());
        Err(ApiError::Server(message))
    }
}

/// HTTP client for the authentication endpoints.
#[derive(Clone, Debug)]
pub struct ApiClient {
    pub base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    #[cfg(feature = "csr")]
    async fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let resp = gloo_net::http::Request::post(&url)
            .json(body)
            .map_err(|err| ApiError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let ok = resp.ok();
        let text = resp
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode_response(ok, &text, fallback)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl AuthApi for ApiClient {
    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Value, ApiError> {
        #[cfg(feature = "csr")]
        {
            let body = serde_json::json!({
                "username": username,
                "email": email,
                "password": password,
            });
            self.post_json("/signup", &body, "registration failed").await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (username, email, password);
            Err(ApiError::Unavailable)
        }
    }

    async fn login(
        &self,
        user: &str,
        password: &str,
        no_expire: bool,
    ) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let body = serde_json::json!({
                "user": user,
                "password": password,
                "no_expire": no_expire,
            });
            self.post_json("/login", &body, "login failed").await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (user, password, no_expire);
            Err(ApiError::Unavailable)
        }
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = format!("{}/logout", self.base_url);
            let resp = gloo_net::http::Request::post(&url)
                .header("Authorization", &format!("Bearer {token}"))
                .send()
                .await
                .map_err(|err| ApiError::Network(err.to_string()))?;
            let ok = resp.ok();
            let text = resp
                .text()
                .await
                .map_err(|err| ApiError::Network(err.to_string()))?;
            let _: Value = decode_response(ok, &text, "logout failed")?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }
}
