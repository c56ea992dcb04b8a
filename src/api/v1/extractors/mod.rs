/*
 * Responsibility
 * - Custom extractors shared by v1 handlers
 */
pub mod ctx;
pub mod json_body;

pub use ctx::{Ctx, RequestCtx};
pub use json_body::JsonBody;
