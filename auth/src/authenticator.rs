use crate::jwt::Claims;
use crate::jwt::TokenError;
use crate::jwt::TokenHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token
/// issuance.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_handler: TokenHandler,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed bearer token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator with the token signing secret.
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_handler: TokenHandler::new(jwt_secret),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and mint a bearer token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match the stored hash
    /// * `Password` - Stored hash could not be parsed
    /// * `Token` - Token signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        claims: &Claims,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_handler.encode(claims)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Mint a token without password verification.
    ///
    /// Used by the register-and-log-in flow, where the principal was just
    /// created from the supplied credentials.
    ///
    /// # Errors
    /// * `TokenError` - Token signing failed
    pub fn issue_token(&self, claims: &Claims) -> Result<String, TokenError> {
        self.token_handler.encode(claims)
    }

    /// Validate a bearer token and return its claims.
    ///
    /// # Errors
    /// * `TokenError` - Signature invalid, malformed, or expired
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.token_handler.decode(token)
    }
}
