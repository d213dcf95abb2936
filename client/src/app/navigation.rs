//! # Navigation
//!
//! Routes, role gating and the [`Navigator`] seam the session manager drives.
//!
//! ## Role Gating
//!
//! | Session        | Asks for              | Gets                      |
//! |----------------|-----------------------|---------------------------|
//! | Anonymous      | any role-gated route  | [`Route::SignIn`]         |
//! | Collector      | an artist route       | collector dashboard       |
//! | Artist         | a collector route     | artist dashboard          |
//! | anyone         | sign-in / sign-up     | as asked                  |

use std::fmt;

use parking_lot::Mutex;
use shared::{Identity, Role};

/// Every screen the client can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    SignIn,
    SignUp,
    CollectorDashboard,
    CollectorArtworks,
    CollectorArtists,
    CollectorCategories,
    ArtistDashboard,
    ArtistMarketplace,
    ArtistPortfolio,
    ArtistTransactions,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::SignIn => "/signin",
            Route::SignUp => "/signup",
            Route::CollectorDashboard => "/collector/dashboard",
            Route::CollectorArtworks => "/collector/artworks",
            Route::CollectorArtists => "/collector/artists",
            Route::CollectorCategories => "/collector/categories",
            Route::ArtistDashboard => "/artist/dashboard",
            Route::ArtistMarketplace => "/artist/marketplace",
            Route::ArtistPortfolio => "/artist/portfolio",
            Route::ArtistTransactions => "/artist/transactions",
        }
    }

    /// Role a session needs to see this route, `None` for public routes.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Route::SignIn | Route::SignUp => None,
            Route::CollectorDashboard
            | Route::CollectorArtworks
            | Route::CollectorArtists
            | Route::CollectorCategories => Some(Role::Collector),
            Route::ArtistDashboard
            | Route::ArtistMarketplace
            | Route::ArtistPortfolio
            | Route::ArtistTransactions => Some(Role::Artist),
        }
    }

    /// Where a freshly signed-in user of `role` lands.
    pub fn landing_for(role: Role) -> Route {
        match role {
            Role::Collector => Route::CollectorDashboard,
            Role::Artist => Route::ArtistDashboard,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Resolve the route actually shown when `identity` asks for `requested`.
pub fn guard(requested: Route, identity: Option<&Identity>) -> Route {
    let Some(required) = requested.required_role() else {
        return requested;
    };
    match identity {
        None => Route::SignIn,
        Some(identity) if identity.role == required => requested,
        Some(identity) => Route::landing_for(identity.role),
    }
}

/// Receives navigation requests from the session manager.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Navigator that records every route it was sent to.
///
/// The CLI uses it to report where a command would have taken the user.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    history: Mutex<Vec<Route>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Route> {
        self.history.lock().last().copied()
    }

    pub fn history(&self) -> Vec<Route> {
        self.history.lock().clone()
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(route = %route, "Navigate");
        self.history.lock().push(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(role: Role) -> Identity {
        Identity {
            id: 7,
            name: "Lee".to_string(),
            email: "lee@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn anonymous_is_sent_to_sign_in() {
        assert_eq!(guard(Route::ArtistPortfolio, None), Route::SignIn);
        assert_eq!(guard(Route::CollectorArtworks, None), Route::SignIn);
        assert_eq!(guard(Route::SignUp, None), Route::SignUp);
    }

    #[test]
    fn wrong_role_lands_on_own_dashboard() {
        let collector = identity(Role::Collector);
        let artist = identity(Role::Artist);

        assert_eq!(guard(Route::ArtistMarketplace, Some(&collector)), Route::CollectorDashboard);
        assert_eq!(guard(Route::CollectorCategories, Some(&artist)), Route::ArtistDashboard);
    }

    #[test]
    fn matching_role_passes() {
        let artist = identity(Role::Artist);
        assert_eq!(guard(Route::ArtistTransactions, Some(&artist)), Route::ArtistTransactions);
        assert_eq!(guard(Route::SignIn, Some(&artist)), Route::SignIn);
    }

    #[test]
    fn landing_routes_match_roles() {
        assert_eq!(Route::landing_for(Role::Collector).required_role(), Some(Role::Collector));
        assert_eq!(Route::landing_for(Role::Artist).required_role(), Some(Role::Artist));
    }

    #[test]
    fn history_navigator_records_routes() {
        let nav = HistoryNavigator::new();
        assert_eq!(nav.current(), None);
        nav.navigate(Route::SignIn);
        nav.navigate(Route::ArtistDashboard);
        assert_eq!(nav.current(), Some(Route::ArtistDashboard));
        assert_eq!(nav.history(), vec![Route::SignIn, Route::ArtistDashboard]);
    }
}
