//! Local account registry and session.
//!
//! Accounts live in browser storage and exist only to personalize the
//! page; nothing here is a security boundary. Passwords are never stored,
//! only a SHA-256 digest salted with the username.

use sha2::{Digest, Sha256};

use crate::config::{MIN_PASSWORD_LEN, storage_keys};
use crate::core::error::AuthError;
use crate::core::history::now_ms;
use crate::core::storage::{KeyValueStore, load_json, save_json, try_load_json};
use crate::models::{Account, RegistrationForm, Role, avatar_for};
use crate::utils::format::format_date_iso;

/// Accounts created on first visit: `(username, email, password, role)`.
const DEFAULT_ACCOUNTS: &[(&str, &str, &str, Role)] = &[
    ("admin", "admin@dayz.com", "admin123", Role::Admin),
    ("user", "user@dayz.com", "user123", Role::User),
];

/// Credentials that register as an administrator.
const BOOTSTRAP_ADMIN: (&str, &str) = ("admin", "admin123");

/// Hex SHA-256 of `username:password`.
pub fn password_digest(username: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(username.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Account registry plus the current session.
pub struct AccountStore<S> {
    store: S,
}

impl<S: KeyValueStore> AccountStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Registered accounts. Unreadable data reads as an empty registry.
    pub fn accounts(&self) -> Vec<Account> {
        load_json(&self.store, storage_keys::ACCOUNTS).unwrap_or_default()
    }

    /// Registered accounts for a read-modify-write. Fails on unreadable
    /// data instead of treating it as empty.
    fn accounts_for_update(&self) -> Result<Vec<Account>, AuthError> {
        let accounts = try_load_json(&self.store, storage_keys::ACCOUNTS)?;
        Ok(accounts.unwrap_or_default())
    }

    fn save_accounts(&self, accounts: &[Account]) -> Result<(), AuthError> {
        save_json(&self.store, storage_keys::ACCOUNTS, &accounts)?;
        Ok(())
    }

    /// Create the default accounts when the registry is empty.
    pub fn seed_defaults(&self) -> Result<(), AuthError> {
        if !self.accounts_for_update()?.is_empty() {
            return Ok(());
        }

        let created_at = today();
        let accounts: Vec<Account> = DEFAULT_ACCOUNTS
            .iter()
            .enumerate()
            .map(|(idx, (username, email, password, role))| Account {
                id: (idx + 1).to_string(),
                username: username.to_string(),
                email: email.to_string(),
                password_digest: password_digest(username, password),
                role: *role,
                created_at: created_at.clone(),
                avatar: avatar_for(username),
            })
            .collect();
        self.save_accounts(&accounts)?;
        log::info!("seeded {} default accounts", accounts.len());
        Ok(())
    }

    /// Validate and store a new account, then sign it in.
    pub fn register(&self, form: &RegistrationForm) -> Result<Account, AuthError> {
        let username = form.username.trim();
        let email = form.email.trim();

        if username.is_empty()
            || email.is_empty()
            || form.password.is_empty()
            || form.confirm_password.is_empty()
        {
            return Err(AuthError::MissingFields);
        }
        if form.password != form.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        if form.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort);
        }

        let mut accounts = self.accounts_for_update()?;
        if accounts.iter().any(|a| a.username == username) {
            return Err(AuthError::UsernameTaken);
        }
        if accounts.iter().any(|a| a.email == email) {
            return Err(AuthError::EmailTaken);
        }

        let role = if (username, form.password.as_str()) == BOOTSTRAP_ADMIN {
            Role::Admin
        } else {
            Role::User
        };
        let account = Account {
            id: format!("{}-{}", now_ms() as u64, accounts.len() + 1),
            username: username.to_string(),
            email: email.to_string(),
            password_digest: password_digest(username, &form.password),
            role,
            created_at: today(),
            avatar: avatar_for(username),
        };

        accounts.push(account.clone());
        self.save_accounts(&accounts)?;
        self.start_session(&account)?;
        log::info!("registered account '{}'", account.username);
        Ok(account)
    }

    /// Check credentials and start a session.
    pub fn login(&self, username: &str, password: &str) -> Result<Account, AuthError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let digest = password_digest(username, password);
        let account = self
            .accounts()
            .into_iter()
            .find(|a| a.username == username && a.password_digest == digest)
            .ok_or(AuthError::InvalidCredentials)?;

        self.start_session(&account)?;
        log::info!("signed in as '{}'", account.username);
        Ok(account)
    }

    pub fn logout(&self) -> Result<(), AuthError> {
        self.store.remove(storage_keys::SESSION)?;
        Ok(())
    }

    /// Account of the stored session, if it still exists.
    pub fn current(&self) -> Option<Account> {
        let id: String = load_json(&self.store, storage_keys::SESSION)?;
        self.accounts().into_iter().find(|a| a.id == id)
    }

    pub fn is_admin(&self) -> bool {
        self.current().is_some_and(|a| a.is_admin())
    }

    fn start_session(&self, account: &Account) -> Result<(), AuthError> {
        save_json(&self.store, storage_keys::SESSION, &account.id)?;
        Ok(())
    }
}

fn today() -> String {
    format_date_iso((now_ms() / 1000.0) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::StorageError;
    use crate::core::storage::MemoryStore;

    fn form(username: &str, email: &str, password: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn test_password_digest_is_salted_by_username() {
        let a = password_digest("alice", "secret1");
        let b = password_digest("bob", "secret1");
        assert_eq!(a.len(), 64);
        assert_ne!(a, b);
        assert_eq!(a, password_digest("alice", "secret1"));
    }

    #[test]
    fn test_seed_defaults_once() {
        let store = MemoryStore::new();
        let accounts = AccountStore::new(&store);
        accounts.seed_defaults().unwrap();
        accounts.seed_defaults().unwrap();

        let all = accounts.accounts();
        assert_eq!(all.len(), 2);
        assert!(all[0].is_admin());
        assert!(!all[1].is_admin());
        assert!(!store.get(storage_keys::ACCOUNTS).unwrap().contains("admin123"));
    }

    #[test]
    fn test_login_logout_and_session_restore() {
        let store = MemoryStore::new();
        let accounts = AccountStore::new(&store);
        accounts.seed_defaults().unwrap();

        assert_eq!(
            accounts.login("admin", "wrong").unwrap_err(),
            AuthError::InvalidCredentials
        );
        assert_eq!(
            accounts.login(" ", "x").unwrap_err(),
            AuthError::MissingCredentials
        );
        assert!(accounts.current().is_none());

        let admin = accounts.login("admin", "admin123").unwrap();
        assert!(admin.is_admin());

        let restored = AccountStore::new(&store);
        assert_eq!(restored.current().unwrap().username, "admin");
        assert!(restored.is_admin());

        restored.logout().unwrap();
        assert!(accounts.current().is_none());
        assert!(!accounts.is_admin());
    }

    #[test]
    fn test_register_validation() {
        let store = MemoryStore::new();
        let accounts = AccountStore::new(&store);
        accounts.seed_defaults().unwrap();

        let cases = [
            (form("", "a@b", "secret1", "secret1"), AuthError::MissingFields),
            (form("neo", "a@b", "secret1", "secret2"), AuthError::PasswordMismatch),
            (form("neo", "a@b", "short", "short"), AuthError::PasswordTooShort),
            (form("user", "a@b", "secret1", "secret1"), AuthError::UsernameTaken),
            (form("neo", "user@dayz.com", "secret1", "secret1"), AuthError::EmailTaken),
        ];
        for (input, expected) in cases {
            assert_eq!(accounts.register(&input).unwrap_err(), expected);
        }
        assert_eq!(accounts.accounts().len(), 2);
    }

    #[test]
    fn test_register_signs_in() {
        let store = MemoryStore::new();
        let accounts = AccountStore::new(&store);

        let account = accounts
            .register(&form(" neo ", "neo@zion.io", "secret1", "secret1"))
            .unwrap();
        assert_eq!(account.username, "neo");
        assert_eq!(account.avatar, "N");
        assert_eq!(account.role, Role::User);
        assert_eq!(accounts.current().unwrap().id, account.id);
        assert!(accounts.login("neo", "secret1").is_ok());
    }

    #[test]
    fn test_bootstrap_admin_registration() {
        let store = MemoryStore::new();
        let accounts = AccountStore::new(&store);
        let account = accounts
            .register(&form("admin", "root@dayz.com", "admin123", "admin123"))
            .unwrap();
        assert!(account.is_admin());
    }

    #[test]
    fn test_unreadable_registry_is_never_overwritten() {
        crate::utils::logging::init_for_tests();
        let store = MemoryStore::new();
        let legacy = r#"[{"id":"9","username":"alice","email":"alice@dayz.com","password":"secret1"}]"#;
        store.set(storage_keys::ACCOUNTS, legacy).unwrap();
        let accounts = AccountStore::new(&store);

        let err = accounts.seed_defaults().unwrap_err();
        assert!(matches!(
            err,
            AuthError::Storage(StorageError::Corrupted { ref key, .. }) if key == storage_keys::ACCOUNTS
        ));

        let err = accounts
            .register(&form("neo", "neo@zion.io", "secret1", "secret1"))
            .unwrap_err();
        assert!(matches!(err, AuthError::Storage(StorageError::Corrupted { .. })));

        assert_eq!(store.get(storage_keys::ACCOUNTS).as_deref(), Some(legacy));
        assert!(accounts.current().is_none());
    }
}
