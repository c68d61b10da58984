//! 认证模块
//!
//! 基于JWT的无状态认证：token生成与校验、会话有效期判断、axum提取器

pub mod extract;
pub mod jwt;
pub mod session;

pub use extract::{AuthUser, OptionalAuthUser};
pub use session::Session;
