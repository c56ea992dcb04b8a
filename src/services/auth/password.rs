//! Credential verifier: salted one-way password hashing (bcrypt).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("hashing task aborted")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn hash(&self, secret: &str) -> Result<String, PasswordError> {
        Ok(bcrypt::hash(secret, self.cost)?)
    }

    /// `false` on mismatch and on a hash that is not bcrypt at all.
    pub fn check(&self, secret: &str, hash: &str) -> bool {
        bcrypt::verify(secret, hash).unwrap_or(false)
    }

    // bcrypt is deliberately slow; keep it off the async worker threads.

    pub async fn hash_blocking(&self, secret: String) -> Result<String, PasswordError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.hash(&secret)).await?
    }

    pub async fn check_blocking(&self, secret: String, hash: String) -> bool {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.check(&secret, &hash))
            .await
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(4)
    }

    #[test]
    fn hash_then_check_matches() {
        let hasher = hasher();
        let hash = hasher.hash("testpass").unwrap();

        assert_ne!(hash, "testpass");
        assert!(hasher.check("testpass", &hash));
        assert!(!hasher.check("wrongpass", &hash));
    }

    #[test]
    fn same_secret_gets_distinct_salts() {
        let hasher = hasher();
        let a = hasher.hash("password123").unwrap();
        let b = hasher.hash("password123").unwrap();
        assert_ne!(a, b);
        assert!(hasher.check("password123", &a));
        assert!(hasher.check("password123", &b));
    }

    #[test]
    fn malformed_hash_is_a_mismatch() {
        assert!(!hasher().check("testpass", "not-a-bcrypt-hash"));
        assert!(!hasher().check("testpass", ""));
    }

    #[tokio::test]
    async fn blocking_wrappers_agree() {
        let hasher = hasher();
        let hash = hasher.hash_blocking("s3cret".to_string()).await.unwrap();
        assert!(hasher.check_blocking("s3cret".to_string(), hash.clone()).await);
        assert!(!hasher.check_blocking("nope".to_string(), hash).await);
    }
}
