use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// The signed-in user as held in memory and persisted to local storage.
/// Never carries a password: [`authenticate`] strips it at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: u32,
    pub username: String,
    pub role: Role,
    pub name: String,
    pub avatar: String,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
}

struct Credential {
    id: u32,
    username: &'static str,
    password: &'static str,
    role: Role,
    name: &'static str,
    avatar: &'static str,
}

// Mock credential list; there is no backend.
const MOCK_USERS: &[Credential] = &[
    Credential {
        id: 1,
        username: "admin",
        password: "password123",
        role: Role::Admin,
        name: "Admin User",
        avatar: "assets/characters/solaire.png",
    },
    Credential {
        id: 2,
        username: "user",
        password: "password123",
        role: Role::User,
        name: "Regular User",
        avatar: "assets/characters/chosen_undead.png",
    },
];

/// Check `username`/`password` against the fixed list. The returned record is
/// what gets persisted; the password goes no further than this function.
pub fn authenticate(username: &str, password: &str) -> Result<SessionUser, AuthError> {
    MOCK_USERS
        .iter()
        .find(|c| c.username == username && c.password == password)
        .map(|c| SessionUser {
            id: c.id,
            username: c.username.to_string(),
            role: c.role,
            name: c.name.to_string(),
            avatar: c.avatar.to_string(),
        })
        .ok_or(AuthError::InvalidCredentials)
}

/// Decode a persisted session record. Anything unparseable means "logged
/// out" - the caller discards the stored value.
pub fn parse_session(raw: &str) -> Option<SessionUser> {
    serde_json::from_str(raw).ok()
}

pub fn serialize_session(user: &SessionUser) -> Option<String> {
    serde_json::to_string(user).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_credentials_yield_a_session_without_password() {
        let user = authenticate("admin", "password123").unwrap();
        assert_eq!(user.id, 1);
        assert!(user.is_admin());

        let raw = serialize_session(&user).unwrap();
        assert!(!raw.contains("password123"));
    }

    #[test]
    fn bad_credentials_are_rejected() {
        assert_eq!(
            authenticate("admin", "wrong"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            authenticate("nobody", "password123"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn session_round_trips_through_json() {
        let user = authenticate("user", "password123").unwrap();
        let raw = serialize_session(&user).unwrap();
        assert_eq!(parse_session(&raw), Some(user));
    }

    #[test]
    fn garbage_in_storage_means_logged_out() {
        assert_eq!(parse_session(""), None);
        assert_eq!(parse_session("{\"id\": 1}"), None);
        assert_eq!(parse_session("not json"), None);
    }
}
