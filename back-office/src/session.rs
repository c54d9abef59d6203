//! Session gate
//!
//! Decides which screen a requested path lands on, from the two session
//! pointers alone. Evaluated on every render; nothing here is stored.

use serde::{Deserialize, Serialize};

use crate::store::AppState;

/// Where the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionPhase {
    /// No user signed in: only the login surface is reachable
    Unauthenticated,
    /// Signed in, no restaurant chosen: only the selector is reachable
    RestaurantUnselected,
    /// Both set: full navigation
    Active,
}

impl SessionPhase {
    pub fn of(state: &AppState) -> Self {
        match (&state.current_user, &state.current_restaurant) {
            (None, _) => Self::Unauthenticated,
            (Some(_), None) => Self::RestaurantUnselected,
            (Some(_), Some(_)) => Self::Active,
        }
    }
}

/// Navigable pages in the active session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Dashboard,
    Users,
    Staff,
    Tables,
    Menu,
    Reservations,
    Orders,
    NewOrder,
    Kitchen,
    Reports,
    Restaurants,
}

impl Route {
    pub const ALL: [Route; 11] = [
        Route::Dashboard,
        Route::Users,
        Route::Staff,
        Route::Tables,
        Route::Menu,
        Route::Reservations,
        Route::Orders,
        Route::NewOrder,
        Route::Kitchen,
        Route::Reports,
        Route::Restaurants,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Users => "/users",
            Self::Staff => "/staff",
            Self::Tables => "/tables",
            Self::Menu => "/menu",
            Self::Reservations => "/reservations",
            Self::Orders => "/orders",
            Self::NewOrder => "/new-order",
            Self::Kitchen => "/kitchen",
            Self::Reports => "/reports",
            Self::Restaurants => "/restaurants",
        }
    }

    /// Match a normalized path; `/` redirects to the dashboard
    pub fn from_path(path: &str) -> Option<Route> {
        if path == "/" {
            return Some(Self::Dashboard);
        }
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

/// What gets rendered for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", content = "route", rename_all = "kebab-case")]
pub enum Screen {
    Login,
    RestaurantSelector,
    Page(Route),
    NotFound,
}

/// Resolve `path` against the current session
///
/// Outside the active phase the requested path is irrelevant.
pub fn resolve(state: &AppState, path: &str) -> Screen {
    match SessionPhase::of(state) {
        SessionPhase::Unauthenticated => Screen::Login,
        SessionPhase::RestaurantUnselected => Screen::RestaurantSelector,
        SessionPhase::Active => match Route::from_path(&normalize(path)) {
            Some(route) => Screen::Page(route),
            None => Screen::NotFound,
        },
    }
}

/// Strip query/fragment and trailing slashes; empty becomes `/`
fn normalize(path: &str) -> String {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');
    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}
