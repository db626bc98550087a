use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, UserId};

/// User aggregate.
///
/// Credential material never lives here: authentication happens in an
/// external identity provider, and this aggregate only carries the
/// profile the rest of the dashboard needs to scope data by owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: String,
    name: String,
    created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user profile
    pub fn new(email: String, name: String) -> Result<Self, DomainError> {
        if email.trim().is_empty() || !email.contains('@') {
            return Err(DomainError::Validation(format!(
                "Invalid user email: {:?}",
                email
            )));
        }

        if name.trim().is_empty() {
            return Err(DomainError::Validation(
                "User name cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id: UserId::new(),
            email,
            name,
            created_at: Utc::now(),
        })
    }

    /// Restore user from persistence
    pub fn restore(id: UserId, email: String, name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            email,
            name,
            created_at,
        }
    }

    /// Update the display name
    pub fn rename(&mut self, name: String) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::Validation(
                "User name cannot be empty".to_string(),
            ));
        }
        self.name = name;
        Ok(())
    }

    // Getters
    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
