use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::nullable;

/// Account role.
///
/// The server stores collectors as `"user"`; `"collector"` is accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "user", alias = "collector")]
    Collector,
    #[serde(rename = "artist")]
    Artist,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Collector => "collector",
            Role::Artist => "artist",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "collector" | "user" => Ok(Role::Collector),
            "artist" => Ok(Role::Artist),
            other => Err(format!("Unknown role: {other}")),
        }
    }
}

/// The signed-in user as the client remembers it.
///
/// Built from the sign-in response plus the email the user typed. Never
/// mutated; a changed role or email means signing out and back in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Sign-in request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Sign-in response.
///
/// `token` is the bearer credential; an empty token is rejected by the
/// session layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignInResponse {
    pub id: i64,
    pub name: String,
    pub role: Role,
    #[serde(default, deserialize_with = "nullable")]
    pub message: String,
    #[serde(default, deserialize_with = "nullable")]
    pub token: String,
}

/// Sign-up request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Plain `{ "message": ... }` acknowledgement
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    #[serde(default, deserialize_with = "nullable")]
    pub message: String,
}

/// Error envelope.
///
/// The API reports failures as `{"error": "..."}`; some routes use
/// `{"message": "..."}`. `message` wins when both are present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// The first non-blank message in the envelope, if any.
    pub fn into_message(self) -> Option<String> {
        self.message
            .filter(|m| !m.trim().is_empty())
            .or_else(|| self.error.filter(|e| !e.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collector_travels_as_user() {
        assert_eq!(serde_json::to_string(&Role::Collector).unwrap(), "\"user\"");
        let role: Role = serde_json::from_str("\"collector\"").unwrap();
        assert_eq!(role, Role::Collector);
        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::Collector);
    }

    #[test]
    fn role_parses_from_cli_text() {
        assert_eq!("Artist".parse::<Role>().unwrap(), Role::Artist);
        assert_eq!("collector".parse::<Role>().unwrap(), Role::Collector);
        assert!("curator".parse::<Role>().is_err());
    }

    #[test]
    fn sign_in_response_tolerates_missing_token() {
        let response: SignInResponse =
            serde_json::from_str(r#"{"id": 7, "name": "Ada", "role": "artist", "message": null}"#)
                .unwrap();
        assert_eq!(response.id, 7);
        assert_eq!(response.role, Role::Artist);
        assert!(response.message.is_empty());
        assert!(response.token.is_empty());
    }

    #[test]
    fn error_envelope_prefers_message_over_error() {
        let both = ErrorResponse {
            message: Some("Email already exists".to_string()),
            error: Some("conflict".to_string()),
        };
        assert_eq!(both.into_message().as_deref(), Some("Email already exists"));

        let server: ErrorResponse = serde_json::from_str(r#"{"error": "Missing fields"}"#).unwrap();
        assert_eq!(server.into_message().as_deref(), Some("Missing fields"));

        let blank: ErrorResponse = serde_json::from_str(r#"{"message": "  "}"#).unwrap();
        assert_eq!(blank.into_message(), None);
    }
}
