//! REST API helpers for the storefront backend.
//!
//! In the browser (`csr`): real HTTP calls via `gloo-net`.
//! Native builds (tests included): every call returns
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are classified once in [`classify_failure`]: `401`/`419`
//! mean the session is gone (callers hand that to
//! [`AuthSession::handle_api_error`](crate::state::auth::AuthSession::handle_api_error)),
//! `422` carries field messages for the credential form.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{CartItemRequest, LoginRequest, Product, RegisterRequest, User, ValidationErrors};
use crate::config::ClientConfig;

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    /// No valid session (`401`, or `419` for an expired CSRF/session token).
    #[error("you are not signed in")]
    Unauthorized,
    #[error("{}", .0.first_message())]
    Validation(ValidationErrors),
    #[error("request failed: {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Map a non-success status and its body to an [`ApiError`].
#[must_use]
pub fn classify_failure(status: u16, body: &str) -> ApiError {
    match status {
        401 | 419 => ApiError::Unauthorized,
        422 => ApiError::Validation(ValidationErrors::from_body(body)),
        _ => ApiError::Status(status),
    }
}

#[cfg(feature = "csr")]
mod http {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::{ApiError, classify_failure};

    pub(super) fn get(url: &str) -> RequestBuilder {
        Request::get(url).header("Accept", "application/json")
    }

    pub(super) fn post(url: &str) -> RequestBuilder {
        Request::post(url).header("Accept", "application/json")
    }

    pub(super) async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        let resp = builder.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_ok(resp).await
    }

    pub(super) async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
        let req = builder.json(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_ok(resp).await
    }

    pub(super) async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn ensure_ok(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(classify_failure(status, &body))
    }
}

/// Fetch the signed-in user from `GET /user`.
///
/// # Errors
///
/// [`ApiError::Unauthorized`] when there is no session; other variants on
/// transport or decode failure.
pub async fn fetch_current_user(config: &ClientConfig) -> Result<User, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = http::send(http::get(&config.endpoint("user"))).await?;
        http::read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// Exchange email + password for a session via `POST /login`.
///
/// # Errors
///
/// [`ApiError::Validation`] when the credentials are rejected.
pub async fn login(config: &ClientConfig, request: &LoginRequest) -> Result<User, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = http::send_json(http::post(&config.endpoint("login")), request).await?;
        http::read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, request);
        Err(ApiError::Unavailable)
    }
}

/// Create an account and start a session via `POST /register`.
///
/// # Errors
///
/// [`ApiError::Validation`] when a field is rejected (taken email, weak password).
pub async fn register(config: &ClientConfig, request: &RegisterRequest) -> Result<User, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = http::send_json(http::post(&config.endpoint("register")), request).await?;
        http::read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, request);
        Err(ApiError::Unavailable)
    }
}

/// End the session via `POST /logout`.
///
/// # Errors
///
/// Transport failures only; an already-expired session counts as logged out.
pub async fn logout(config: &ClientConfig) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        match http::send(http::post(&config.endpoint("logout"))).await {
            Ok(_) | Err(ApiError::Unauthorized) => Ok(()),
            Err(e) => Err(e),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// List the catalog via `GET /products`.
///
/// # Errors
///
/// Transport or decode failures.
pub async fn fetch_products(config: &ClientConfig) -> Result<Vec<Product>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = http::send(http::get(&config.endpoint("products"))).await?;
        http::read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// Add a product to the signed-in user's cart via `POST /cart`.
///
/// # Errors
///
/// [`ApiError::Unauthorized`] if the session expired since sign-in.
pub async fn add_to_cart(config: &ClientConfig, item: CartItemRequest) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        http::send_json(http::post(&config.endpoint("cart")), &item).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, item);
        Err(ApiError::Unavailable)
    }
}
