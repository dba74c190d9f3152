//! Remote Backend Client
//!
//! Explicitly constructed handle to the hosted identity/document
//! service, passed to the auth and document modules rather than held
//! as module-level state.

pub mod auth;
#[cfg(feature = "sync")]
pub mod documents;
#[cfg(feature = "sync")]
mod http;

#[cfg(feature = "sync")]
use leptos::prelude::*;
use thiserror::Error;

#[cfg(feature = "sync")]
use crate::models::Session;

/// Connection settings for the hosted backend
#[cfg(feature = "sync")]
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteConfig {
    pub base_url: String,
    pub api_key: String,
}

#[cfg(feature = "sync")]
impl RemoteConfig {
    /// Endpoint baked in at build time
    pub fn from_env() -> Option<Self> {
        let base_url = option_env!("TASKPAD_API_BASE")?;
        let api_key = option_env!("TASKPAD_API_KEY")?;
        Some(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }
}

/// Transport and status failures from the backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Handle to the hosted backend.
///
/// Also tracks the last signed-in principal, verified or not, so
/// resend-verification and logout can reuse its credential.
#[cfg(feature = "sync")]
#[derive(Clone)]
pub struct ApiClient {
    config: RemoteConfig,
    current: RwSignal<Option<Session>>,
}

#[cfg(feature = "sync")]
impl ApiClient {
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            config,
            current: RwSignal::new(None),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.config.api_key
    }

    /// Last signed-in principal, verified or not
    pub fn current_session(&self) -> Option<Session> {
        self.current.get_untracked()
    }

    pub(crate) fn set_session(&self, session: Option<Session>) {
        self.current.set(session);
    }
}
