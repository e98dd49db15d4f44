//! User model
//!
//! Authentication itself lives outside this crate; the user record exists so
//! every owned row has a stable id to hang off, and so the CLI can switch
//! between local profiles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// A registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,

    /// Email address, unique per store
    pub email: String,

    /// Display name
    #[serde(default)]
    pub display_name: String,

    /// When the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            email: email.into(),
            display_name: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Create a user with a display name
    pub fn with_display_name(email: impl Into<String>, display_name: impl Into<String>) -> Self {
        let mut user = Self::new(email);
        user.display_name = display_name.into();
        user
    }

    /// Validate the user record
    pub fn validate(&self) -> Result<(), UserValidationError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if !email.contains('@') {
            return Err(UserValidationError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.display_name.is_empty() {
            write!(f, "{}", self.email)
        } else {
            write!(f, "{} <{}>", self.display_name, self.email)
        }
    }
}

/// Validation errors for users
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyEmail,
    InvalidEmail(String),
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "Email cannot be empty"),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
        }
    }
}

impl std::error::Error for UserValidationError {}
