use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::UserIdError;

/// User aggregate entity.
///
/// The unified authenticable principal of the marketplace. The password is
/// stored only as an Argon2id PHC hash; the plaintext never reaches this
/// type.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: EmailAddress,
    pub phone_number: String,
    pub address: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. Lookup is exact
/// match against what registration stored; no normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct CreateUserCommand {
    pub name: String,
    pub email: EmailAddress,
    pub phone_number: String,
    pub address: String,
    pub password: String,
}

impl CreateUserCommand {
    /// Construct a new registration command.
    ///
    /// The password arrives in plaintext and is hashed by the service before
    /// anything is persisted.
    pub fn new(
        name: String,
        email: EmailAddress,
        phone_number: String,
        address: String,
        password: String,
    ) -> Self {
        Self {
            name,
            email,
            phone_number,
            address,
            password,
        }
    }
}

/// Command to update an existing user with optional fields.
///
/// Only provided fields are updated.
#[derive(Debug)]
pub struct UpdateUserCommand {
    pub name: Option<String>,
    pub email: Option<EmailAddress>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_address_valid() {
        let email = EmailAddress::new("ann@x.com".to_string()).unwrap();
        assert_eq!(email.as_str(), "ann@x.com");
    }

    #[test]
    fn test_email_address_invalid() {
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
        assert!(EmailAddress::new("".to_string()).is_err());
    }

    #[test]
    fn test_user_id_round_trip() {
        let id = UserId::new();
        let parsed = UserId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_user_id_invalid_format() {
        assert!(UserId::from_string("not-a-uuid").is_err());
    }
}
