/*
 * Responsibility
 * - Public interface of the middleware layer
 *   - auth: per-route pipelines (gate + context)
 *   - cors / http / security_headers: router-wide layers
 */
pub mod auth;
pub mod cors;
pub mod http;
pub mod security_headers;
