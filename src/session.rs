// Session store - the client's one authenticated identity
//
// Holds the bearer token and the user profile resolved from it. The token is
// persisted to a single well-known file so a restart picks the session back
// up; the profile is never persisted and is re-derived from the token via
// /api/auth/me on every cold start.
//
// Exactly one instance exists per running client. It is owned by the app and
// passed by reference to whoever needs it - controllers only ever read the
// token, all mutation happens here on login/logout/invalidation.

use crate::api::types::User;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// The client-held pairing of an auth token and resolved user profile
#[derive(Debug)]
pub struct SessionStore {
    token: Option<String>,
    user: Option<User>,
    token_path: PathBuf,
}

impl SessionStore {
    /// Restore a session from the persisted token file, if one exists
    ///
    /// A present token only makes the session *provisionally* authenticated:
    /// the caller must resolve it with a who-am-i call and feed the result to
    /// [`attach_user`](Self::attach_user) or [`invalidate`](Self::invalidate).
    pub fn load(token_path: PathBuf) -> Self {
        let token = match fs::read_to_string(&token_path) {
            Ok(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_owned())
                }
            }
            Err(_) => None,
        };

        if token.is_some() {
            tracing::debug!("restored persisted token from {:?}", token_path);
        }

        Self {
            token,
            user: None,
            token_path,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether a token is held (the user may still be resolving)
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Record a successful login or signup: persist the token, keep the user
    pub fn login(&mut self, token: String, user: User) {
        if let Err(e) = self.persist(&token) {
            // The session still works in memory; it just won't survive a restart
            tracing::warn!("could not persist session token: {e:#}");
        }
        tracing::info!("logged in as {}", user.username);
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Attach the profile resolved from the persisted token
    pub fn attach_user(&mut self, user: User) {
        tracing::info!("session resolved for {}", user.username);
        self.user = Some(user);
    }

    /// Explicit logout: clear persisted and in-memory state
    pub fn logout(&mut self) {
        tracing::info!("logged out");
        self.teardown();
    }

    /// The token was rejected (or the who-am-i call failed): tear the session
    /// down so the client lands back on the login screen
    pub fn invalidate(&mut self) {
        tracing::warn!("session invalidated, clearing persisted token");
        self.teardown();
    }

    fn teardown(&mut self) {
        self.token = None;
        self.user = None;
        if self.token_path.exists() {
            if let Err(e) = fs::remove_file(&self.token_path) {
                tracing::warn!("could not remove token file: {e}");
            }
        }
    }

    fn persist(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.token_path.parent() {
            fs::create_dir_all(parent).context("Failed to create session directory")?;
        }
        fs::write(&self.token_path, token).context("Failed to write token file")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Role;

    fn temp_token_path(test: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("broadsheet-session-{}-{test}", std::process::id()))
            .join("token")
    }

    fn user(id: i64) -> User {
        User {
            id,
            username: format!("user{id}"),
            role: Role::Member,
        }
    }

    #[test]
    fn login_persists_and_restarts_restore_the_token() {
        let path = temp_token_path("roundtrip");
        let _ = fs::remove_file(&path);

        let mut session = SessionStore::load(path.clone());
        assert!(!session.is_authenticated());

        session.login("tok-abc".into(), user(1));
        assert!(session.is_authenticated());

        // Simulated restart: a fresh store picks the token up, user unresolved
        let restored = SessionStore::load(path.clone());
        assert_eq!(restored.token(), Some("tok-abc"));
        assert!(restored.user().is_none());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn logout_clears_memory_and_disk() {
        let path = temp_token_path("logout");
        let mut session = SessionStore::load(path.clone());
        session.login("tok".into(), user(2));

        session.logout();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(!path.exists());
    }

    #[test]
    fn failed_resolution_leaves_no_persisted_token() {
        let path = temp_token_path("invalidate");
        let mut session = SessionStore::load(path.clone());
        session.login("stale-tok".into(), user(3));

        // Restart, then the who-am-i call rejects the token
        let mut restored = SessionStore::load(path.clone());
        assert!(restored.is_authenticated());
        restored.invalidate();

        assert!(!restored.is_authenticated());
        assert!(!path.exists());
        assert!(SessionStore::load(path).token().is_none());
    }

    #[test]
    fn blank_token_file_counts_as_unauthenticated() {
        let path = temp_token_path("blank");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "  \n").unwrap();

        let session = SessionStore::load(path.clone());
        assert!(!session.is_authenticated());

        let _ = fs::remove_file(&path);
    }
}
