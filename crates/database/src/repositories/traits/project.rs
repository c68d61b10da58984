//! 项目仓库 trait 定义
//!
//! 定义项目数据库操作的抽象接口

use crate::models::project::{JoinRequest, ProjectChange, ProjectDraft, ProjectPage, ProjectRecord};
use crate::DatabaseResult;

/// 项目仓库trait定义
///
/// 定义了项目相关的数据库操作接口，支持：
/// - 项目注册（id由存储层分配）
/// - 按创始人查询
/// - 按id查询
/// - 带可见性过滤的分页查询
/// - 项目更新/删除（返回受影响行数）
/// - 追加加入申请
#[async_trait::async_trait]
pub trait ProjectRepositoryTrait: Send + Sync + 'static {
    /// 保存新项目，返回存储层分配的项目id
    ///
    /// id在这里分配且只分配一次，之后不再变化，也不会复用
    async fn save(&self, draft: ProjectDraft) -> DatabaseResult<String>;

    /// 查询指定创始人名下的所有项目
    async fn find_by_founder_username(&self, username: &str) -> DatabaseResult<Vec<ProjectRecord>>;

    /// 根据id查询项目
    ///
    /// 注意：这里不做可见性过滤。可见性过滤只作用于分页列表查询，
    /// 已认证的调用方可以通过id直接获取任意项目（包括私有项目），
    /// 这是平台的显式策略而不是疏漏
    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<ProjectRecord>>;

    /// 分页查询项目列表
    ///
    /// # 参数
    /// - `page`: 页码，从1开始；超出范围返回空页而不是错误
    /// - `filter_private`: 为true时只返回公开项目
    async fn find_all_paged(&self, page: u32, filter_private: bool) -> DatabaseResult<ProjectPage>;

    /// 整体替换项目的可变字段，返回受影响行数（0表示未找到）
    async fn update(&self, change: ProjectChange) -> DatabaseResult<u64>;

    /// 删除项目（硬删除），返回受影响行数（0表示未找到）
    async fn delete(&self, id: &str) -> DatabaseResult<u64>;

    /// 追加一条加入申请，返回受影响行数（0表示项目不存在）
    ///
    /// 同一个申请人再次申请会覆盖他自己之前的那条记录
    async fn add_join_request(&self, id: &str, request: JoinRequest) -> DatabaseResult<u64>;

    /// 追加一条尚未通知创始人的加入申请（`notified`强制为false）
    async fn add_un_notified_join_request(
        &self,
        id: &str,
        request: JoinRequest,
    ) -> DatabaseResult<u64>;
}
