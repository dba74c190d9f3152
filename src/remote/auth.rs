//! Identity Gateway
//!
//! Sign-up, login, logout, and resend-verification against the hosted
//! identity provider. Failures are typed so callers branch on kind,
//! never on message content.

use thiserror::Error;

use crate::models::Session;

use super::ApiError;

/// Why an identity operation failed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("Invalid email or password.")]
    InvalidCredentials,
    #[error("Please verify your email before logging in.")]
    EmailUnverified,
    #[error("No user logged in.")]
    NoSession,
    #[error("{0}")]
    Provider(String),
}

/// Map a login transport/status failure onto the auth taxonomy
fn classify_login(error: ApiError) -> AuthError {
    match error {
        ApiError::Status {
            status: 400 | 401, ..
        } => AuthError::InvalidCredentials,
        other => AuthError::Provider(other.to_string()),
    }
}

/// Reject sessions whose e-mail is still unverified
fn require_verified(session: Session) -> Result<Session, AuthError> {
    if session.email_verified {
        Ok(session)
    } else {
        Err(AuthError::EmailUnverified)
    }
}

#[cfg(feature = "sync")]
mod ops {
    use super::*;
    use crate::remote::{http, ApiClient};

    #[derive(serde::Serialize)]
    struct Credentials<'a> {
        email: &'a str,
        password: &'a str,
    }

    /// Create an account. The provider sends the verification e-mail;
    /// the call succeeds regardless of verification state.
    pub async fn sign_up(
        client: &ApiClient,
        email: &str,
        password: &str,
    ) -> Result<String, AuthError> {
        let session: Session = http::post_json(
            client,
            "/v1/auth/signup",
            &Credentials { email, password },
            None,
        )
        .await
        .map_err(|error| AuthError::Provider(error.to_string()))?;

        client.set_session(Some(session));
        Ok("Sign-up successful! Please check your email to verify your account.".to_string())
    }

    /// Authenticate. Unverified principals are rejected but kept on the
    /// client so the caller can offer a resend.
    pub async fn log_in(
        client: &ApiClient,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let session: Session = http::post_json(
            client,
            "/v1/auth/login",
            &Credentials { email, password },
            None,
        )
        .await
        .map_err(classify_login)?;

        client.set_session(Some(session.clone()));
        require_verified(session)
    }

    /// Re-send the verification e-mail to the signed-in principal
    pub async fn resend_verification_email(client: &ApiClient) -> Result<String, AuthError> {
        let session = client.current_session().ok_or(AuthError::NoSession)?;
        let _: serde_json::Value = http::post_json(
            client,
            "/v1/auth/resend-verification",
            &serde_json::json!({}),
            Some(&session.id_token),
        )
        .await
        .map_err(|error| AuthError::Provider(error.to_string()))?;

        Ok("Verification email resent. Check your inbox.".to_string())
    }

    /// Terminate the session. Provider failures are logged, not
    /// surfaced; the local session is dropped either way.
    pub async fn log_out(client: &ApiClient) {
        if let Some(session) = client.current_session() {
            let result: Result<serde_json::Value, ApiError> = http::post_json(
                client,
                "/v1/auth/logout",
                &serde_json::json!({}),
                Some(&session.id_token),
            )
            .await;
            if let Err(error) = result {
                tracing::error!(%error, "logout call failed");
            }
        }
        client.set_session(None);
    }
}

#[cfg(feature = "sync")]
pub use ops::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn session(verified: bool) -> Session {
        Session {
            user_id: "user-1".to_string(),
            email: "a@example.com".to_string(),
            email_verified: verified,
            id_token: "token".to_string(),
        }
    }

    #[test]
    fn test_unauthorized_login_is_invalid_credentials() {
        let error = ApiError::Status {
            status: 401,
            message: "INVALID_PASSWORD".to_string(),
        };
        assert_eq!(classify_login(error), AuthError::InvalidCredentials);
    }

    #[test]
    fn test_other_login_failures_carry_provider_detail() {
        let error = ApiError::Network("connection refused".to_string());
        match classify_login(error) {
            AuthError::Provider(detail) => assert!(detail.contains("connection refused")),
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[test]
    fn test_verified_session_passes() {
        let verified = require_verified(session(true)).expect("Failed to accept verified session");
        assert_eq!(verified.user_id, "user-1");
    }

    #[test]
    fn test_unverified_session_is_rejected_with_kind() {
        let error = require_verified(session(false)).expect_err("unverified must be rejected");
        assert_eq!(error, AuthError::EmailUnverified);
        // Message shown to the user still names the remedy
        assert!(error.to_string().contains("verify your email"));
    }

    #[test]
    fn test_no_session_message() {
        assert_eq!(AuthError::NoSession.to_string(), "No user logged in.");
    }
}
