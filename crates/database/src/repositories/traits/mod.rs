//! 数据库仓库 trait 定义
//!
//! 这里定义了各种数据库仓库的抽象接口。
//!
//! 所有 Repository trait 都遵循统一的约束：
//!
//! ```rust
//! pub trait XxxRepositoryTrait: Send + Sync + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! `Send + Sync`保证仓库实例可以在axum的worker线程之间共享，
//! `'static`是异步trait方法返回的Future跨await点存活所需要的。

pub mod project;

// 重新导出
pub use project::ProjectRepositoryTrait;
