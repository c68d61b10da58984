//! 项目仓库
//!
//! 负责项目相关的数据库操作

use crate::models::project::{
    page_offset, JoinRequest, ProjectChange, ProjectDraft, ProjectPage, ProjectRecord, PAGE_SIZE,
};
use crate::repositories::traits::ProjectRepositoryTrait;
use crate::{DatabaseError, DatabaseResult};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// 项目仓库结构体
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

/// projects表的一行
#[derive(Debug, FromRow)]
struct ProjectRow {
    id: Uuid,
    founder_username: String,
    project_name: String,
    description: String,
    is_private: bool,
    join_requests: Json<HashMap<String, JoinRequest>>,
}

impl From<ProjectRow> for ProjectRecord {
    fn from(row: ProjectRow) -> Self {
        Self {
            id: row.id.to_string(),
            founder_username: row.founder_username,
            project_name: row.project_name,
            description: row.description,
            is_private: row.is_private,
            join_requests: row.join_requests.0,
        }
    }
}

/// 分页查询的一行，额外带窗口函数计算出来的总数
#[derive(Debug, FromRow)]
struct PagedProjectRow {
    id: Uuid,
    founder_username: String,
    project_name: String,
    description: String,
    is_private: bool,
    join_requests: Json<HashMap<String, JoinRequest>>,
    total_count: i64,
}

impl From<PagedProjectRow> for ProjectRecord {
    fn from(row: PagedProjectRow) -> Self {
        Self {
            id: row.id.to_string(),
            founder_username: row.founder_username,
            project_name: row.project_name,
            description: row.description,
            is_private: row.is_private,
            join_requests: row.join_requests.0,
        }
    }
}

impl ProjectRepository {
    /// 创建新的项目仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 把对外的不透明id解析为存储层的UUID编码
    ///
    /// 解析失败属于存储层故障，调用方不应该把它当成"未找到"
    fn parse_id(id: &str) -> DatabaseResult<Uuid> {
        Uuid::parse_str(id).map_err(|_| DatabaseError::invalid_id(id))
    }

    /// 可见性过滤之后的总记录数
    async fn count_visible(&self, filter_private: bool) -> DatabaseResult<i64> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM agora.projects WHERE (NOT $1 OR is_private = FALSE)",
        )
        .bind(filter_private)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    /// 追加一条加入申请（两个add变体的公共实现）
    async fn append_join_request(&self, id: &str, request: JoinRequest) -> DatabaseResult<u64> {
        let project_id = Self::parse_id(id)?;

        let result = sqlx::query(
            r#"
            UPDATE agora.projects
            SET join_requests = join_requests || jsonb_build_object($2::text, $3::jsonb),
                updated_at    = now()
            WHERE id = $1
            "#,
        )
        .bind(project_id)
        .bind(&request.requester_username)
        .bind(Json(&request))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

#[async_trait::async_trait]
impl ProjectRepositoryTrait for ProjectRepository {
    async fn save(&self, draft: ProjectDraft) -> DatabaseResult<String> {
        debug!("📝 注册项目: {:#?}", draft);

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO agora.projects (founder_username, project_name, description, is_private,
                                        created_at, updated_at)
            VALUES ($1, $2, $3, $4, now(), now())
            RETURNING id;
            "#,
        )
        .bind(&draft.founder_username)
        .bind(&draft.project_name)
        .bind(&draft.description)
        .bind(draft.is_private)
        .fetch_one(&self.pool)
        .await?;

        debug!("✅ 项目注册成功: {}", id);
        Ok(id.to_string())
    }

    async fn find_by_founder_username(&self, username: &str) -> DatabaseResult<Vec<ProjectRecord>> {
        debug!("🔍 查询创始人名下项目: {}", username);

        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, founder_username, project_name, description, is_private, join_requests
            FROM agora.projects
            WHERE founder_username = $1
            ORDER BY created_at, id;
            "#,
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<ProjectRecord>> {
        debug!("🔍 根据id查询项目: {}", id);

        let project_id = Self::parse_id(id)?;

        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, founder_username, project_name, description, is_private, join_requests
            FROM agora.projects
            WHERE id = $1
            LIMIT 1;
            "#,
        )
        .bind(project_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// 分页查询项目列表
    ///
    /// # SQL 查询说明
    ///
    /// 使用 CTE（Common Table Expression）配合窗口函数：
    /// 1. `COUNT(*) OVER ()` 在LIMIT生效之前计算，一次查询同时拿到当前页和过滤后总数
    /// 2. `(NOT $1 OR is_private = FALSE)` 实现可选的可见性过滤
    /// 3. 按创建顺序排序，id做并列时的次序
    ///
    /// 空页（超出范围的页码）时窗口函数拿不到总数，退化为一次COUNT查询，
    /// 保证返回的总数元数据始终正确
    async fn find_all_paged(&self, page: u32, filter_private: bool) -> DatabaseResult<ProjectPage> {
        debug!("🔍 分页查询项目 - 页码: {}, 仅公开: {}", page, filter_private);

        let rows = sqlx::query_as::<_, PagedProjectRow>(
            r#"
            WITH visible_projects AS (
                SELECT id,
                       founder_username,
                       project_name,
                       description,
                       is_private,
                       join_requests,
                       COUNT(*) OVER () AS total_count
                FROM agora.projects
                WHERE (NOT $1 OR is_private = FALSE)
                ORDER BY created_at, id
                LIMIT $2 OFFSET $3
            )
            SELECT id,
                   founder_username,
                   project_name,
                   description,
                   is_private,
                   join_requests,
                   total_count
            FROM visible_projects;
            "#,
        )
        .bind(filter_private)
        .bind(PAGE_SIZE as i64)
        .bind(page_offset(page))
        .fetch_all(&self.pool)
        .await?;

        let total = match rows.first() {
            Some(row) => row.total_count as u32,
            None => self.count_visible(filter_private).await? as u32,
        };

        let projects: Vec<ProjectRecord> = rows.into_iter().map(Into::into).collect();

        debug!(
            "✅ 分页查询完成 - 本页 {} 个项目，总计 {} 个",
            projects.len(),
            total
        );

        Ok(ProjectPage { projects, total })
    }

    async fn update(&self, change: ProjectChange) -> DatabaseResult<u64> {
        debug!("🔄 更新项目: {:#?}", change);

        let project_id = Self::parse_id(&change.id)?;

        // 可变字段整体替换；founder、join_requests不在更新范围内
        let result = sqlx::query(
            r#"
            UPDATE agora.projects
            SET project_name = $2,
                description  = $3,
                is_private   = $4,
                updated_at   = now()
            WHERE id = $1
            "#,
        )
        .bind(project_id)
        .bind(&change.project_name)
        .bind(&change.description)
        .bind(change.is_private)
        .execute(&self.pool)
        .await?;

        debug!("✅ 项目更新完成，受影响行数: {}", result.rows_affected());
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &str) -> DatabaseResult<u64> {
        debug!("🗑️ 删除项目: {}", id);

        let project_id = Self::parse_id(id)?;

        let result = sqlx::query("DELETE FROM agora.projects WHERE id = $1")
            .bind(project_id)
            .execute(&self.pool)
            .await?;

        debug!("✅ 项目删除完成，受影响行数: {}", result.rows_affected());
        Ok(result.rows_affected())
    }

    async fn add_join_request(&self, id: &str, request: JoinRequest) -> DatabaseResult<u64> {
        debug!("🙋 追加加入申请: {} -> {}", request.requester_username, id);

        self.append_join_request(id, request).await
    }

    async fn add_un_notified_join_request(
        &self,
        id: &str,
        request: JoinRequest,
    ) -> DatabaseResult<u64> {
        debug!(
            "🙋 追加未通知的加入申请: {} -> {}",
            request.requester_username, id
        );

        self.append_join_request(
            id,
            JoinRequest {
                notified: false,
                ..request
            },
        )
        .await
    }
}
