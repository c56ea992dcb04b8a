/*
 * Responsibility
 * - Shared context bound to the Router (AppState)
 *   - store: per-request connection source
 *   - tokens: the process-wide token codec
 *   - passwords: bcrypt settings
 * - Cheap to Clone (everything behind Arc or Copy)
 */
use std::sync::Arc;

use crate::repos::Store;
use crate::services::auth::{PasswordHasher, TokenCodec};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub tokens: Arc<TokenCodec>,
    pub passwords: PasswordHasher,
    pub cookie_secure: bool,
}

impl AppState {
    pub fn new(
        store: Arc<dyn Store>,
        tokens: Arc<TokenCodec>,
        passwords: PasswordHasher,
        cookie_secure: bool,
    ) -> Self {
        Self {
            store,
            tokens,
            passwords,
            cookie_secure,
        }
    }
}
