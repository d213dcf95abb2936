//! # Session Manager
//!
//! The identity lifecycle: restore at start-up, sign in, sign up, sign out.
//!
//! ```text
//! Initializing ──restore──> Anonymous ──sign_in──> Authenticated
//!                   │                                  │
//!                   └──────────> Authenticated ──sign_out / 401──> Anonymous
//! ```
//!
//! The manager talks to the backend through [`ApiService`] and persists
//! through [`SessionStore`]; navigation is delegated to a [`Navigator`].

use std::sync::Arc;

use lib_utils::{validate_email, validate_not_empty};
use shared::{Identity, MessageResponse, Role};
use tokio::sync::watch;

use super::store::{SessionState, SessionStore};
use crate::app::navigation::{self, Navigator, Route};
use crate::core::service::ApiService;
use crate::services::api::ApiError;

pub struct SessionManager {
    api: Arc<dyn ApiService>,
    store: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl SessionManager {
    pub fn new(api: Arc<dyn ApiService>, store: Arc<SessionStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { api, store, navigator }
    }

    /// Restore the persisted session. Call once at start-up.
    pub fn start(&self) -> SessionState {
        self.store.restore()
    }

    /// Sign in and land on the role's dashboard.
    ///
    /// On failure nothing is persisted and the current state is kept.
    #[tracing::instrument(skip(self, password), fields(email = %email))]
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, ApiError> {
        validate_not_empty(email, "Email").map_err(ApiError::validation)?;
        validate_not_empty(password, "Password").map_err(ApiError::validation)?;

        let response = self.api.sign_in(email, password).await?;
        if response.token.is_empty() {
            tracing::warn!(user_id = response.id, "Sign-in response carried no token");
            return Err(ApiError::schema("sign-in response has no token"));
        }

        let identity = Identity {
            id: response.id,
            name: response.name,
            email: email.to_string(),
            role: response.role,
        };
        self.store
            .establish(identity.clone(), &response.token)
            .map_err(ApiError::storage)?;

        tracing::info!(user_id = identity.id, role = %identity.role, "Signed in");
        self.navigator.navigate(Route::landing_for(identity.role));
        Ok(identity)
    }

    /// Register an account, then send the user to sign in.
    ///
    /// Does not authenticate.
    #[tracing::instrument(skip(self, password), fields(email = %email, role = %role))]
    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<MessageResponse, ApiError> {
        validate_not_empty(name, "Name").map_err(ApiError::validation)?;
        validate_email(email).map_err(ApiError::validation)?;
        validate_not_empty(password, "Password").map_err(ApiError::validation)?;

        let response = self.api.sign_up(name, email, password, role).await?;
        tracing::info!("Account created");
        self.navigator.navigate(Route::SignIn);
        Ok(response)
    }

    /// Sign out. Never fails.
    ///
    /// The logout call is best-effort and made even without a local
    /// identity, since the server's session cookie can outlive it. Local
    /// state is cleared regardless.
    #[tracing::instrument(skip(self))]
    pub async fn sign_out(&self) {
        if let Err(e) = self.api.logout().await {
            tracing::warn!(error = %e, status = ?e.status(), "Logout request failed, clearing locally");
        }
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "Failed to remove stored session");
        }
        tracing::info!("Signed out");
        self.navigator.navigate(Route::SignIn);
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.store.identity()
    }

    /// False while the persisted session has not been read.
    pub fn is_ready(&self) -> bool {
        self.store.is_ready()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.store.subscribe()
    }

    /// The route to show for `requested` given the current session.
    pub fn guard(&self, requested: Route) -> Route {
        navigation::guard(requested, self.current_identity().as_ref())
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::navigation::HistoryNavigator;
    use crate::session::storage::{MemoryStorage, Storage};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use shared::{Category, MarketplaceArtwork, SignInResponse};

    #[derive(Default)]
    struct FakeApi {
        sign_in: Mutex<Option<Result<SignInResponse, ApiError>>>,
        logout_fails: bool,
        calls: Mutex<Vec<&'static str>>,
    }

    impl FakeApi {
        fn signing_in_as(role: Role, token: &str) -> Self {
            let api = Self::default();
            *api.sign_in.lock() = Some(Ok(SignInResponse {
                id: 42,
                name: "Mira".to_string(),
                role,
                message: "Login successful".to_string(),
                token: token.to_string(),
            }));
            api
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl ApiService for FakeApi {
        async fn sign_in(&self, _email: &str, _password: &str) -> Result<SignInResponse, ApiError> {
            self.calls.lock().push("sign_in");
            self.sign_in
                .lock()
                .clone()
                .unwrap_or_else(|| Err(ApiError::from_status(401, Some("Invalid credentials".into()))))
        }

        async fn sign_up(&self, _: &str, _: &str, _: &str, _: Role) -> Result<MessageResponse, ApiError> {
            self.calls.lock().push("sign_up");
            Ok(MessageResponse {
                message: "User created successfully".to_string(),
            })
        }

        async fn logout(&self) -> Result<(), ApiError> {
            self.calls.lock().push("logout");
            if self.logout_fails {
                Err(ApiError::from_status(500, None))
            } else {
                Ok(())
            }
        }

        async fn marketplace_artworks(&self) -> Result<Vec<MarketplaceArtwork>, ApiError> {
            Ok(Vec::new())
        }

        async fn categories(&self) -> Result<Vec<Category>, ApiError> {
            Ok(Vec::new())
        }
    }

    struct Harness {
        api: Arc<FakeApi>,
        storage: Arc<MemoryStorage>,
        nav: Arc<HistoryNavigator>,
        manager: SessionManager,
    }

    fn harness(api: FakeApi) -> Harness {
        let api = Arc::new(api);
        let storage = Arc::new(MemoryStorage::new());
        let nav = Arc::new(HistoryNavigator::new());
        let manager = manager_over(&api, &storage, &nav);
        Harness { api, storage, nav, manager }
    }

    fn manager_over(
        api: &Arc<FakeApi>,
        storage: &Arc<MemoryStorage>,
        nav: &Arc<HistoryNavigator>,
    ) -> SessionManager {
        let store = Arc::new(SessionStore::new(Arc::clone(storage) as Arc<dyn Storage>));
        SessionManager::new(
            Arc::clone(api) as Arc<dyn ApiService>,
            store,
            Arc::clone(nav) as Arc<dyn Navigator>,
        )
    }

    #[tokio::test]
    async fn sign_in_persists_and_lands_on_dashboard() {
        let h = harness(FakeApi::signing_in_as(Role::Artist, "tok-9"));
        assert!(!h.manager.is_ready());
        h.manager.start();
        assert!(h.manager.is_ready());

        let identity = h.manager.sign_in("mira@example.com", "pw").await.unwrap();
        assert_eq!(identity.email, "mira@example.com");
        assert_eq!(identity.role, Role::Artist);
        assert_eq!(h.nav.current(), Some(Route::ArtistDashboard));
        assert_eq!(h.manager.store().credential().as_deref(), Some("tok-9"));
    }

    #[tokio::test]
    async fn sign_in_survives_reload() {
        let h = harness(FakeApi::signing_in_as(Role::Collector, "tok-1"));
        h.manager.start();
        let identity = h.manager.sign_in("mira@example.com", "pw").await.unwrap();

        let reloaded = manager_over(&h.api, &h.storage, &h.nav);
        reloaded.start();
        assert_eq!(reloaded.current_identity(), Some(identity));
        assert_eq!(reloaded.guard(Route::CollectorArtworks), Route::CollectorArtworks);
        assert_eq!(reloaded.guard(Route::ArtistPortfolio), Route::CollectorDashboard);
    }

    #[tokio::test]
    async fn failed_sign_in_keeps_state() {
        let h = harness(FakeApi::default());
        h.manager.start();

        let err = h.manager.sign_in("mira@example.com", "wrong").await.unwrap_err();
        assert_eq!(err.message(), "Invalid credentials");
        assert_eq!(h.manager.current_identity(), None);
        assert_eq!(h.nav.current(), None);
    }

    #[tokio::test]
    async fn tokenless_sign_in_is_rejected() {
        let h = harness(FakeApi::signing_in_as(Role::Artist, ""));
        h.manager.start();

        let err = h.manager.sign_in("mira@example.com", "pw").await.unwrap_err();
        assert!(matches!(err, ApiError::Schema { .. }));
        assert_eq!(h.manager.current_identity(), None);
        assert_eq!(h.storage.get("user").unwrap(), None);
    }

    #[tokio::test]
    async fn blank_fields_never_reach_the_server() {
        let h = harness(FakeApi::signing_in_as(Role::Artist, "tok"));
        h.manager.start();

        let err = h.manager.sign_in("  ", "pw").await.unwrap_err();
        assert!(matches!(err, ApiError::Validation { .. }));

        let err = h
            .manager
            .sign_up("Mira", "not-an-email", "pw", Role::Artist)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation { .. }));

        assert!(h.api.calls().is_empty());
    }

    #[tokio::test]
    async fn sign_up_goes_to_sign_in_without_authenticating() {
        let h = harness(FakeApi::default());
        h.manager.start();

        let response = h
            .manager
            .sign_up("Mira", "mira@example.com", "pw", Role::Collector)
            .await
            .unwrap();
        assert_eq!(response.message, "User created successfully");
        assert_eq!(h.nav.current(), Some(Route::SignIn));
        assert_eq!(h.manager.current_identity(), None);
    }

    #[tokio::test]
    async fn sign_out_while_anonymous_still_ends_server_session() {
        let h = harness(FakeApi::default());
        h.manager.start();

        h.manager.sign_out().await;
        assert_eq!(h.manager.store().state(), SessionState::Anonymous);
        assert_eq!(h.nav.current(), Some(Route::SignIn));
        assert_eq!(h.api.calls(), ["logout"]);
    }

    #[tokio::test]
    async fn failed_logout_while_anonymous_is_harmless() {
        let h = harness(FakeApi {
            logout_fails: true,
            ..FakeApi::default()
        });
        h.manager.start();

        h.manager.sign_out().await;
        h.manager.sign_out().await;
        assert_eq!(h.manager.store().state(), SessionState::Anonymous);
        assert_eq!(h.nav.current(), Some(Route::SignIn));
        assert_eq!(h.api.calls(), ["logout", "logout"]);
    }

    #[tokio::test]
    async fn sign_out_clears_even_when_logout_fails() {
        let mut api = FakeApi::signing_in_as(Role::Artist, "tok");
        api.logout_fails = true;
        let h = harness(api);
        h.manager.start();
        h.manager.sign_in("mira@example.com", "pw").await.unwrap();

        h.manager.sign_out().await;
        assert_eq!(h.api.calls(), vec!["sign_in", "logout"]);
        assert_eq!(h.manager.current_identity(), None);
        assert_eq!(h.storage.get("token").unwrap(), None);
        assert_eq!(h.nav.current(), Some(Route::SignIn));
    }
}
