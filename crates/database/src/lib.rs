//! 数据库操作模块
//!
//! 这个模块提供了数据库连接、迁移、查询等功能。
//!
//! 项目id的存储编码（UUID）只在这个crate内部出现，
//! 对外接口一律使用不透明的字符串id。

pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;

pub use connection::{initialize_database, DatabasePool};
pub use error::DatabaseError;
pub use models::project::{
    page_offset, JoinRequest, ProjectChange, ProjectDraft, ProjectPage, ProjectRecord, PAGE_SIZE,
};
pub use repositories::{project::ProjectRepository, traits::ProjectRepositoryTrait};

/// 数据库操作结果类型
pub type DatabaseResult<T> = Result<T, DatabaseError>;
