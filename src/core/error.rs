//! Custom error types for the application.
//!
//! One enum per domain:
//!
//! - [`FilterError`] - rejected filter transitions
//! - [`StorageError`] - localStorage reads and writes
//! - [`AuthError`] - account registration and login

use thiserror::Error;

/// A filter transition was rejected; the selection is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error("module '{module}' is not valid for category '{category}'")]
    InvalidModule { module: String, category: String },
}

/// localStorage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// localStorage not available.
    #[error("localStorage not available")]
    Unavailable,
    #[error("stored '{key}' is unreadable: {reason}")]
    Corrupted { key: String, reason: String },
    #[error("failed to serialize '{key}': {reason}")]
    Serialize { key: String, reason: String },
    #[error("failed to write '{0}' to localStorage")]
    WriteFailed(String),
    #[error("failed to remove '{0}' from localStorage")]
    RemoveFailed(String),
}

/// Account errors. Messages are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("请填写所有字段")]
    MissingFields,
    #[error("请输入用户名和密码")]
    MissingCredentials,
    #[error("两次输入的密码不一致")]
    PasswordMismatch,
    #[error("密码长度至少6位")]
    PasswordTooShort,
    #[error("用户名已存在")]
    UsernameTaken,
    #[error("邮箱已被注册")]
    EmailTaken,
    #[error("用户名或密码错误")]
    InvalidCredentials,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_error_display() {
        let err = FilterError::InvalidModule {
            module: "汽车".into(),
            category: "武器".into(),
        };
        assert_eq!(
            err.to_string(),
            "module '汽车' is not valid for category '武器'"
        );
    }

    #[test]
    fn test_auth_error_wraps_storage() {
        let err: AuthError = StorageError::Unavailable.into();
        assert_eq!(err.to_string(), "localStorage not available");
        assert_eq!(AuthError::PasswordTooShort.to_string(), "密码长度至少6位");
    }
}
