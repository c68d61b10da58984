//! 项目服务
//!
//! 提供项目相关的业务逻辑操作。服务层只做表示转换和转发，
//! 不持有任何跨请求的可变状态

use crate::services::traits::ProjectServiceTrait;
use database::{
    DatabaseResult, JoinRequest, ProjectChange, ProjectDraft, ProjectPage, ProjectRecord,
    ProjectRepositoryTrait,
};

#[derive(Debug, Clone)]
pub struct ProjectService<PR: ProjectRepositoryTrait> {
    project_repository: PR,
}

impl<PR: ProjectRepositoryTrait> ProjectService<PR> {
    pub fn new(project_repository: PR) -> Self {
        Self { project_repository }
    }
}

#[async_trait::async_trait]
impl<PR: ProjectRepositoryTrait> ProjectServiceTrait for ProjectService<PR> {
    async fn register(&self, draft: ProjectDraft) -> DatabaseResult<String> {
        self.project_repository.save(draft).await
    }

    async fn find_all_paged(&self, page: u32, filter_private: bool) -> DatabaseResult<ProjectPage> {
        self.project_repository
            .find_all_paged(page, filter_private)
            .await
    }

    async fn find(&self, id: &str) -> DatabaseResult<Option<ProjectRecord>> {
        self.project_repository.find_by_id(id).await
    }

    async fn find_by_founder(&self, username: &str) -> DatabaseResult<Vec<ProjectRecord>> {
        self.project_repository
            .find_by_founder_username(username)
            .await
    }

    async fn update(&self, change: ProjectChange) -> DatabaseResult<u64> {
        self.project_repository.update(change).await
    }

    async fn delete(&self, id: &str) -> DatabaseResult<u64> {
        self.project_repository.delete(id).await
    }

    async fn add_join_request(&self, id: &str, request: JoinRequest) -> DatabaseResult<u64> {
        self.project_repository.add_join_request(id, request).await
    }

    async fn add_un_notified_join_request(
        &self,
        id: &str,
        request: JoinRequest,
    ) -> DatabaseResult<u64> {
        self.project_repository
            .add_un_notified_join_request(id, request)
            .await
    }
}
