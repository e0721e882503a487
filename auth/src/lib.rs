//! Authentication infrastructure for the marketplace backend.
//!
//! Provides the credential primitives the service builds on:
//! - Password hashing (Argon2id)
//! - Signed bearer tokens with expiry (HS256 JWT)
//! - An authentication coordinator (verify password, mint token)
//! - Admin API-key comparison for the coarse-grained admin gate
//!
//! The crate owns no persistent state; tokens are self-contained and
//! resolvable back to a principal only through signature verification.
//!
//! # Examples
//!
//! ## Password hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Bearer tokens
//! ```
//! use auth::{Claims, TokenHandler};
//!
//! let handler = TokenHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_principal("user123", "user", "Ann", 24);
//! let token = handler.encode(&claims).unwrap();
//! let decoded = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub, "user123");
//! ```
//!
//! ## Full authentication flow
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//! let hash = auth.hash_password("password123").unwrap();
//!
//! let claims = Claims::for_principal("user123", "user", "Ann", 24);
//! let result = auth.authenticate("password123", &hash, &claims).unwrap();
//! let decoded = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.name, "Ann");
//! ```

pub mod apikey;
pub mod authenticator;
pub mod jwt;
pub mod password;

pub use apikey::ApiKey;
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::TokenError;
pub use jwt::TokenHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
