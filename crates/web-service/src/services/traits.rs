//! 服务层 trait 定义
//!
//! 定义服务层的抽象接口，遵循六边形架构的端口适配器模式
//!
//! 该 trait 作为业务逻辑的抽象接口，具体实现由 [`crate::services::ProjectService`] 提供

use database::{
    DatabaseResult, JoinRequest, ProjectChange, ProjectDraft, ProjectPage, ProjectRecord,
};

/// 项目服务 trait 定义
#[async_trait::async_trait]
pub trait ProjectServiceTrait: Send + Sync + 'static {
    /// 注册新项目，返回新分配的项目id
    async fn register(&self, draft: ProjectDraft) -> DatabaseResult<String>;

    /// 分页查询项目列表
    ///
    /// # 参数
    /// - `page`: 页码（从1开始），超出范围返回空页
    /// - `filter_private`: 为true时只返回公开项目
    async fn find_all_paged(&self, page: u32, filter_private: bool) -> DatabaseResult<ProjectPage>;

    /// 根据id查询项目（无可见性过滤，见仓库层说明）
    async fn find(&self, id: &str) -> DatabaseResult<Option<ProjectRecord>>;

    /// 查询指定创始人名下的所有项目
    async fn find_by_founder(&self, username: &str) -> DatabaseResult<Vec<ProjectRecord>>;

    /// 整体替换项目的可变字段，返回受影响行数
    async fn update(&self, change: ProjectChange) -> DatabaseResult<u64>;

    /// 删除项目，返回受影响行数
    async fn delete(&self, id: &str) -> DatabaseResult<u64>;

    /// 追加一条（创始人已获通知的）加入申请，返回受影响行数
    async fn add_join_request(&self, id: &str, request: JoinRequest) -> DatabaseResult<u64>;

    /// 追加一条尚未通知创始人的加入申请，返回受影响行数
    async fn add_un_notified_join_request(
        &self,
        id: &str,
        request: JoinRequest,
    ) -> DatabaseResult<u64>;
}
