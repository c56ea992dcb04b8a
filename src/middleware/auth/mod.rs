/*
 * Responsibility
 * - Request pipeline for the v1 API
 *   - gate: token cookie must verify (protected routes only)
 *   - context: RequestCtx { id, username } into extensions
 *   - pipeline: ordered composition + axum wiring
 */
pub mod context;
pub mod cookie;
pub mod gate;
pub mod pipeline;

pub use pipeline::Pipeline;
