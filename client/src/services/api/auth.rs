//! # Authentication Endpoints
//!
//! Sign-in, sign-up and logout. Session bookkeeping lives in
//! [`crate::session::SessionManager`]; these functions only talk to the server.

use serde_json::json;
use shared::{MessageResponse, Role, SignInRequest, SignInResponse, SignUpRequest};

use super::client::ApiClient;
use super::endpoints;
use super::error::ApiError;
use super::request::RequestDescriptor;

/// Sign in with email and password.
///
/// A 401 here means bad credentials, so the current session is left alone.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn sign_in(client: &ApiClient, email: &str, password: &str) -> Result<SignInResponse, ApiError> {
    tracing::info!("Attempting sign-in");
    let start = std::time::Instant::now();

    let body = serde_json::to_value(SignInRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
    .map_err(ApiError::encode)?;

    let result = client
        .request::<SignInResponse>(RequestDescriptor::post(endpoints::SIGN_IN, body).preserve_session())
        .await;

    match &result {
        Ok(response) => tracing::info!(
            user_id = response.id,
            role = %response.role,
            duration_ms = start.elapsed().as_millis(),
            "Sign-in successful"
        ),
        Err(e) => tracing::warn!(
            status = ?e.status(),
            error = %e,
            duration_ms = start.elapsed().as_millis(),
            "Sign-in failed"
        ),
    }
    result
}

/// Register a new account.
#[tracing::instrument(skip(client, password), fields(email = %email, role = %role))]
pub async fn sign_up(
    client: &ApiClient,
    name: &str,
    email: &str,
    password: &str,
    role: Role,
) -> Result<MessageResponse, ApiError> {
    let request = SignUpRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role,
    };
    client.post(endpoints::SIGN_UP, &request).await
}

/// End the server-side session.
pub async fn logout(client: &ApiClient) -> Result<(), ApiError> {
    client
        .request::<serde_json::Value>(RequestDescriptor::post(endpoints::LOGOUT, json!({})))
        .await
        .map(|_| ())
}
