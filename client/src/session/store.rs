//! # Session Store
//!
//! Owns the persisted identity/credential pair and broadcasts session state.
//!
//! The store is shared by `Arc` between the [`ApiClient`] (which reads the
//! credential on every request and clears it on 401/403) and the
//! [`SessionManager`] (which writes it on sign-in and clears it on sign-out).
//! Consumers follow changes through [`SessionStore::subscribe`].
//!
//! ## Pair Invariant
//!
//! `user` and `token` are always written and removed in one storage
//! operation. On restore, a half-present or unreadable pair is discarded.
//!
//! In memory, the credential and the published state change under one write
//! lock, and the store's own accessors read under it. A reader never sees
//! `Authenticated` without a credential or a credential while `Anonymous`.
//!
//! [`ApiClient`]: crate::services::api::ApiClient
//! [`SessionManager`]: super::SessionManager

use std::sync::Arc;

use parking_lot::RwLock;
use shared::Identity;
use tokio::sync::watch;

use super::storage::{Storage, StorageError};

/// Storage key of the serialized [`Identity`].
pub const IDENTITY_KEY: &str = "user";

/// Storage key of the raw bearer token.
pub const CREDENTIAL_KEY: &str = "token";

/// Session lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Persisted state not read yet
    Initializing,
    /// Nobody signed in
    Anonymous,
    /// Signed in as this identity
    Authenticated(Identity),
}

impl SessionState {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionState::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

pub struct SessionStore {
    storage: Arc<dyn Storage>,
    /// Also serializes every change to `state` and to storage.
    credential: RwLock<Option<String>>,
    state: watch::Sender<SessionState>,
}

impl SessionStore {
    /// A store over `storage`, in the `Initializing` state.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let (state, _) = watch::channel(SessionState::Initializing);
        Self {
            storage,
            credential: RwLock::new(None),
            state,
        }
    }

    /// Read the persisted pair and leave `Initializing`.
    ///
    /// Always lands in `Anonymous` or `Authenticated`. Storage read errors
    /// are logged and treated as "nobody signed in".
    pub fn restore(&self) -> SessionState {
        let mut current = self.credential.write();
        let (restored, token) = match self.read_pair() {
            Ok(Some((identity, token))) => {
                tracing::info!(user_id = identity.id, role = %identity.role, "Session restored");
                (SessionState::Authenticated(identity), Some(token))
            }
            Ok(None) => {
                tracing::debug!("No stored session");
                (SessionState::Anonymous, None)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Stored session unreadable, starting signed out");
                if let Err(e) = self.storage.remove_all(&[IDENTITY_KEY, CREDENTIAL_KEY]) {
                    tracing::warn!(error = %e, "Failed to discard unreadable session");
                }
                (SessionState::Anonymous, None)
            }
        };
        *current = token;
        self.state.send_replace(restored.clone());
        restored
    }

    fn read_pair(&self) -> Result<Option<(Identity, String)>, StorageError> {
        let user = self.storage.get(IDENTITY_KEY)?;
        let token = self.storage.get(CREDENTIAL_KEY)?.filter(|t| !t.is_empty());

        match (user, token) {
            (Some(user), Some(token)) => match serde_json::from_str::<Identity>(&user) {
                Ok(identity) => Ok(Some((identity, token))),
                Err(e) => Err(StorageError::Corrupt {
                    path: IDENTITY_KEY.into(),
                    detail: e.to_string(),
                }),
            },
            (None, None) => Ok(None),
            (user, _) => Err(StorageError::Corrupt {
                path: if user.is_some() { CREDENTIAL_KEY } else { IDENTITY_KEY }.into(),
                detail: "half of the session pair is missing".to_string(),
            }),
        }
    }

    /// Persist a signed-in identity and its credential, then publish it.
    ///
    /// Nothing changes if the write fails.
    pub fn establish(&self, identity: Identity, credential: &str) -> Result<(), StorageError> {
        if credential.is_empty() {
            return Err(StorageError::MissingCredential);
        }
        let user = serde_json::to_string(&identity).map_err(|e| StorageError::Corrupt {
            path: IDENTITY_KEY.into(),
            detail: e.to_string(),
        })?;

        let mut current = self.credential.write();
        self.storage
            .set_all(&[(IDENTITY_KEY, user.as_str()), (CREDENTIAL_KEY, credential)])?;

        *current = Some(credential.to_string());
        self.state.send_replace(SessionState::Authenticated(identity));
        Ok(())
    }

    /// Forget the session.
    ///
    /// The in-memory state is cleared even when storage fails, so the
    /// process never keeps acting as a user who asked to leave; the storage
    /// error is still returned for logging.
    pub fn clear(&self) -> Result<(), StorageError> {
        let mut current = self.credential.write();
        self.clear_locked(&mut current)
    }

    /// Clear the session only if `credential` is still the current one.
    ///
    /// Returns whether the session was cleared. A response to a request sent
    /// with an old token must not sign out a newer session.
    pub fn clear_if_credential(&self, credential: &str) -> bool {
        let mut current = self.credential.write();
        if current.as_deref() != Some(credential) {
            return false;
        }
        if let Err(e) = self.clear_locked(&mut current) {
            tracing::warn!(error = %e, "Failed to remove rejected credential from storage");
        }
        true
    }

    fn clear_locked(&self, current: &mut Option<String>) -> Result<(), StorageError> {
        let result = self.storage.remove_all(&[IDENTITY_KEY, CREDENTIAL_KEY]);
        *current = None;
        self.state.send_replace(SessionState::Anonymous);
        result
    }

    /// The bearer token to attach to requests.
    pub fn credential(&self) -> Option<String> {
        self.credential.read().clone()
    }

    pub fn state(&self) -> SessionState {
        let _current = self.credential.read();
        self.state.borrow().clone()
    }

    /// State and credential as of the same instant.
    pub fn snapshot(&self) -> (SessionState, Option<String>) {
        let current = self.credential.read();
        (self.state.borrow().clone(), current.clone())
    }

    pub fn identity(&self) -> Option<Identity> {
        let _current = self.credential.read();
        self.state.borrow().identity().cloned()
    }

    /// False until [`restore`](Self::restore) has run.
    pub fn is_ready(&self) -> bool {
        let _current = self.credential.read();
        !matches!(*self.state.borrow(), SessionState::Initializing)
    }

    /// Follow session changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }
}
