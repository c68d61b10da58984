//! 会话相关接口
//!

use crate::auth::AuthUser;
use crate::services::ProjectServiceTrait;
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::debug;

/// 服务端会话确认
///
/// 客户端本地只凭过期时间判断"是否已登录"，需要确认时显式调用这个接口：
/// token有效返回204，缺失/无效/过期返回401（客户端收到401后清理本地会话）
#[utoipa::path(get,
    path = "/session",
    tag = "session",
    responses(
        (status = 204, description = "Session is valid"),
        (status = 401, description = "Session is missing, invalid or expired")
    ),
)]
pub async fn check_session<PS: ProjectServiceTrait>(
    State(_state): State<AppState<PS>>,
    user: AuthUser,
) -> StatusCode {
    debug!("✅ 会话有效 {}", user.username);

    StatusCode::NO_CONTENT
}
