//! # API crate: shared fullstack server functions for Formcraft
//!
//! Defines the Dioxus server functions the UI calls. Each function is compiled twice:
//! once with full server logic (behind `#[cfg(feature = "server")]`) and once as a thin
//! client stub that forwards the call over HTTP.
//!
//! Server halves read shared state from the `axum::Extension<backend::AppState>` layer
//! installed by the web binary, and the session from `tower_sessions::Session`.
//!
//! ## Server functions exposed here
//!
//! - **Session**: `get_current_user`, `login_password`, `logout`
//! - **Settings**: `get_site_settings`
//!
//! The form publish endpoint is a plain axum route (`backend::forms`), not a server
//! function, because its contract fixes the HTTP method and status codes.

use dioxus::prelude::*;

pub mod auth;

pub use store::{Locale, SiteSettings, Theme, UserInfo};

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session, state: axum::Extension<backend::AppState>)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    let user_id = auth::session_user_id(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let user = state
        .users
        .find_user_by_id(user_id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login-password", session: tower_sessions::Session, state: axum::Extension<backend::AppState>)]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    let email = store::normalize_email(&email);

    let user = state
        .users
        .find_user_by_email(&email)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let valid = backend::password::verify_password(&password, &user.password_hash)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if !valid {
        tracing::info!(email = %email, "password login rejected");
        return Err(ServerFnError::new("Invalid email or password"));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login-password")]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Site name and the default locale and theme.
#[cfg(feature = "server")]
#[get("/api/settings", state: axum::Extension<backend::AppState>)]
pub async fn get_site_settings() -> Result<SiteSettings, ServerFnError> {
    Ok(state.site.as_ref().clone())
}

#[cfg(not(feature = "server"))]
#[get("/api/settings")]
pub async fn get_site_settings() -> Result<SiteSettings, ServerFnError> {
    Ok(SiteSettings::default())
}
