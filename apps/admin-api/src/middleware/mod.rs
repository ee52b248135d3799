//! 中间件模块

pub mod addon;
pub mod context;
pub mod identity;

pub use addon::addon_scope;
pub use context::request_context;
pub use identity::forwarded_identity;
