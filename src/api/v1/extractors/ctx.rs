mod core;
mod types;

pub use self::core::Ctx;
pub use self::types::RequestCtx;
