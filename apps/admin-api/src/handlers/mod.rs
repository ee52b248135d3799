//! Handlers 模块

pub mod addons;
pub mod health;
pub mod profile;

pub use addons::*;
pub use health::*;
pub use profile::*;
