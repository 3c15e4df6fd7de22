//! Session keys and accessors.

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Read the signed-in user's id from the session, if any.
pub async fn session_user_id(
    session: &tower_sessions::Session,
) -> Result<Option<uuid::Uuid>, tower_sessions::session::Error> {
    let user_id: Option<String> = session.get(SESSION_USER_ID_KEY).await?;
    // A malformed id is treated as signed out.
    Ok(user_id.and_then(|id| uuid::Uuid::parse_str(&id).ok()))
}
