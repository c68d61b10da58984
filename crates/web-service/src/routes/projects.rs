//! 项目相关接口
//!

use crate::auth::{AuthUser, OptionalAuthUser};
use crate::models::common::{Reply, ReplyList};
use crate::models::err::AppError;
use crate::models::projects::{
    ListParams, ProjectCreated, ProjectInfo, ProjectRegister, ProjectUpdate,
};
use crate::services::{listing_query, ProjectServiceTrait};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use database::{JoinRequest, ProjectChange, ProjectDraft, PAGE_SIZE};
use tracing::debug;
use validator::Validate;

/// 分页查询项目列表
///
/// 匿名也可以访问：匿名调用方只能看到公开项目，已认证调用方能看到全部项目。
/// 页码从1开始，缺省为1；超出范围的页码返回空列表而不是错误。
///
/// ## 返回值
///
/// [`ReplyList`] 带本页数据和过滤后的总数，调用方可据此计算总页数。
#[utoipa::path(get,
    path = "/projects",
    tag = "projects",
    params(ListParams),
    responses(
        (status = 200, description = "One page of projects", body = ReplyList<ProjectInfo>),
        (status = 400, description = "Page number out of range")
    ),
)]
pub async fn find_projects<PS: ProjectServiceTrait>(
    State(state): State<AppState<PS>>,
    auth: OptionalAuthUser,
    Query(params): Query<ListParams>,
) -> Result<Json<ReplyList<ProjectInfo>>, AppError> {
    debug!("🔍 查询项目列表 {:?}", params);

    // 验证输入参数，确保有效性
    params.validate()?;

    // 认证状态和页码都是显式入参，策略本身是纯函数
    let query = listing_query(params.page, auth.is_authenticated());

    let result = state
        .project_service
        .find_all_paged(query.page, query.filter_private)
        .await?;

    Ok(Json(ReplyList {
        total: result.total,
        data: result.projects.into_iter().map(Into::into).collect(),
        page_size: PAGE_SIZE,
        page_index: query.page,
    }))
}

/// 注册项目
///
/// 项目id由存储层分配，调用方不能指定；创始人取自token里的用户名
#[utoipa::path(post,
    path = "/projects",
    tag = "projects",
    request_body = ProjectRegister,
    responses(
        (status = 201, description = "Project registered", body = Reply<ProjectCreated>),
        (status = 401, description = "Caller is not authenticated")
    ),
)]
pub async fn register_project<PS: ProjectServiceTrait>(
    State(state): State<AppState<PS>>,
    user: AuthUser,
    Json(payload): Json<ProjectRegister>,
) -> Result<(StatusCode, Json<Reply<ProjectCreated>>), AppError> {
    debug!("📝 注册项目 {:?}", payload);

    payload.validate()?;

    let draft = ProjectDraft {
        founder_username: user.username,
        project_name: payload.project_name,
        description: payload.description,
        is_private: payload.is_private,
    };
    let id = state.project_service.register(draft).await?;

    Ok((
        StatusCode::CREATED,
        Json(Reply {
            data: ProjectCreated { id },
        }),
    ))
}

/// 更新项目信息
///
/// 对可变字段做整体替换；受影响行数为0时返回404
#[utoipa::path(put,
    path = "/projects",
    tag = "projects",
    request_body = ProjectUpdate,
    responses(
        (status = 204, description = "Project updated"),
        (status = 404, description = "Project not found")
    ),
)]
pub async fn update_project<PS: ProjectServiceTrait>(
    State(state): State<AppState<PS>>,
    _user: AuthUser,
    Json(payload): Json<ProjectUpdate>,
) -> Result<StatusCode, AppError> {
    debug!("🔄 更新项目 {:?}", payload);

    payload.validate()?;

    let project_id = payload.id.clone();
    let change = ProjectChange {
        id: payload.id,
        project_name: payload.project_name,
        description: payload.description,
        is_private: payload.is_private,
    };
    let affected = state.project_service.update(change).await?;
    if affected == 0 {
        return Err(AppError::NotFound(format!("project {project_id}")));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// 查询当前调用方创建的项目
#[utoipa::path(get,
    path = "/projects/founded",
    tag = "projects",
    responses(
        (status = 200, description = "Projects founded by the caller", body = Reply<Vec<ProjectInfo>>)
    ),
)]
pub async fn find_founded_projects<PS: ProjectServiceTrait>(
    State(state): State<AppState<PS>>,
    user: AuthUser,
) -> Result<Json<Reply<Vec<ProjectInfo>>>, AppError> {
    debug!("🔍 查询创始人名下项目 {}", user.username);

    let projects = state.project_service.find_by_founder(&user.username).await?;

    Ok(Json(Reply {
        data: projects.into_iter().map(Into::into).collect(),
    }))
}

/// 查询指定项目信息
///
/// 这里不做可见性过滤：已认证的调用方可以通过id直接获取任意项目（包括私有项目）
#[utoipa::path(get,
    path = "/projects/{id}",
    tag = "projects",
    responses(
        (status = 200, description = "Project detail", body = ProjectInfo),
        (status = 404, description = "Project not found")
    ),
)]
pub async fn get_project<PS: ProjectServiceTrait>(
    State(state): State<AppState<PS>>,
    _user: AuthUser,
    Path(project_id): Path<String>,
) -> Result<Json<ProjectInfo>, AppError> {
    debug!("🔍 查询项目 {}", project_id);

    let project = state
        .project_service
        .find(&project_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("project {project_id}")))?;

    Ok(Json(project.into()))
}

/// 删除指定的项目
#[utoipa::path(delete,
    path = "/projects/{id}",
    tag = "projects",
    responses(
        (status = 204, description = "Project deleted"),
        (status = 404, description = "Project not found")
    ),
)]
pub async fn delete_project<PS: ProjectServiceTrait>(
    State(state): State<AppState<PS>>,
    _user: AuthUser,
    Path(project_id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("🗑️ 删除项目 {}", project_id);

    let affected = state.project_service.delete(&project_id).await?;
    if affected == 0 {
        return Err(AppError::NotFound(format!("project {project_id}")));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// 申请加入项目
///
/// 申请人取自token里的用户名；新申请尚未通知创始人（notified=false）
#[utoipa::path(post,
    path = "/projects/{id}/join-requests",
    tag = "projects",
    responses(
        (status = 204, description = "Join request recorded"),
        (status = 404, description = "Project not found")
    ),
)]
pub async fn request_to_join<PS: ProjectServiceTrait>(
    State(state): State<AppState<PS>>,
    user: AuthUser,
    Path(project_id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("🙋 申请加入项目 {} - {}", project_id, user.username);

    let request = JoinRequest::un_notified(user.username);
    let affected = state
        .project_service
        .add_un_notified_join_request(&project_id, request)
        .await?;
    if affected == 0 {
        return Err(AppError::NotFound(format!("project {project_id}")));
    }

    Ok(StatusCode::NO_CONTENT)
}
