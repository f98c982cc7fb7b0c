//! Local user accounts and the registration form.

use serde::{Deserialize, Serialize};

/// Account role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// Locally registered account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub username: String,
    pub email: String,
    /// Hex SHA-256 of `username:password`.
    pub password_digest: String,
    #[serde(default)]
    pub role: Role,
    /// ISO date (YYYY-MM-DD).
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub avatar: String,
}

impl Account {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Avatar letter, derived from the username when none is stored.
    pub fn avatar_letter(&self) -> String {
        if !self.avatar.is_empty() {
            return self.avatar.clone();
        }
        avatar_for(&self.username)
    }
}

/// First character of a username, upper-cased.
pub fn avatar_for(username: &str) -> String {
    username
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Input of the registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_letter() {
        assert_eq!(avatar_for("admin"), "A");
        assert_eq!(avatar_for("ßeta"), "SS");
        assert_eq!(avatar_for(""), "");
    }

    #[test]
    fn test_role_serde() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let account: Account = serde_json::from_str(
            r#"{"id":"1","username":"u","email":"u@x","passwordDigest":"ff"}"#,
        )
        .unwrap();
        assert_eq!(account.role, Role::User);
        assert!(!account.is_admin());
        assert_eq!(account.avatar_letter(), "U");
    }
}
