/// Admin API key: a coarse-grained shared secret gating admin-only routes.
///
/// A second, independent trust mechanism next to bearer tokens; routes
/// guarded by it do not consult the token handler at all.
#[derive(Debug, Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a configured secret value.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Compare a header-supplied candidate against the configured secret.
    pub fn verify(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_matching_key() {
        let key = ApiKey::new("super-secret-admin-key");
        assert!(key.verify("super-secret-admin-key"));
    }

    #[test]
    fn test_verify_rejects_mismatch() {
        let key = ApiKey::new("super-secret-admin-key");
        assert!(!key.verify("not-the-key"));
        assert!(!key.verify(""));
    }
}
