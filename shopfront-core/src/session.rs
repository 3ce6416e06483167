//! Process-wide authentication context
//!
//! One `Session` is created at startup and handed to every component that
//! needs the caller's identity; the HTTP layer reads the token from here on
//! every request instead of threading it through call sites.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use shared::client::UserInfo;

#[derive(Debug, Clone)]
struct AuthState {
    token: String,
    user: UserInfo,
    logged_in_at: DateTime<Utc>,
}

/// Shared session handle
#[derive(Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<Option<AuthState>>>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the token
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authenticate(&self, token: impl Into<String>, user: UserInfo) {
        tracing::info!(user_id = %user.id, "Session authenticated");
        *self.inner.write() = Some(AuthState {
            token: token.into(),
            user,
            logged_in_at: Utc::now(),
        });
    }

    pub fn clear(&self) {
        if self.inner.write().take().is_some() {
            tracing::info!("Session cleared");
        }
    }

    pub fn token(&self) -> Option<String> {
        self.inner.read().as_ref().map(|s| s.token.clone())
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.inner.read().as_ref().map(|s| s.user.clone())
    }

    pub fn logged_in_at(&self) -> Option<DateTime<Utc>> {
        self.inner.read().as_ref().map(|s| s.logged_in_at)
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().is_some()
    }
}
