use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Bearer token claims for a marketplace principal.
///
/// The token is self-contained: the subject id, the principal kind
/// discriminator, and the display name are all recoverable from the
/// signature-verified payload without a storage lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (principal identifier)
    pub sub: String,

    /// Principal kind discriminator (e.g. "user")
    pub kind: String,

    /// Principal display name
    pub name: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for an authenticated principal with a relative expiry.
    ///
    /// # Arguments
    /// * `principal_id` - Unique principal identifier
    /// * `kind` - Principal kind discriminator
    /// * `name` - Principal display name
    /// * `expiration_hours` - Hours until the token expires
    pub fn for_principal(
        principal_id: impl ToString,
        kind: impl ToString,
        name: impl ToString,
        expiration_hours: i64,
    ) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(expiration_hours);

        Self {
            sub: principal_id.to_string(),
            kind: kind.to_string(),
            name: name.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check whether the token is expired at the given instant.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_principal_sets_expiry_window() {
        let claims = Claims::for_principal("user123", "user", "Ann", 24);

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.kind, "user");
        assert_eq!(claims.name, "Ann");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_is_expired() {
        let mut claims = Claims::for_principal("user123", "user", "Ann", 1);
        claims.exp = 1000;

        assert!(!claims.is_expired(999));
        assert!(claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }
}
