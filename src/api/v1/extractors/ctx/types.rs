/*
 * Responsibility
 * - The per-request context type handlers see
 * - Built by the middleware pipeline and stored in request extensions
 *
 * Notes
 * - Both fields are always present; an empty string means "not available"
 */
use crate::error::AppError;

/// Facts about the current request, derived before the handler runs.
///
/// - `id` is the raw `{id}` path segment (not yet parsed)
/// - `username` is the subject of a valid `token` cookie
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestCtx {
    pub id: String,
    pub username: String,
}

impl RequestCtx {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
        }
    }

    /// Parses `id` as a row id, naming `resource` in the 400 message.
    pub fn record_id(&self, resource: &str) -> Result<i32, AppError> {
        self.id
            .parse::<i32>()
            .map_err(|_| AppError::bad_request(format!("Invalid {resource} ID")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_parses_digits() {
        assert_eq!(RequestCtx::new("42", "").record_id("blog").unwrap(), 42);
    }

    #[test]
    fn record_id_rejects_non_numeric() {
        let err = RequestCtx::new("abc", "").record_id("blog").unwrap_err();
        assert_eq!(err.to_string(), "Invalid blog ID");

        let err = RequestCtx::default().record_id("order").unwrap_err();
        assert_eq!(err.to_string(), "Invalid order ID");
    }
}
