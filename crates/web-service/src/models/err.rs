use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use color_eyre::eyre::Error;
use database::DatabaseError;
use thiserror::Error;
use validator::ValidationErrors;

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
#[derive(Error, Debug)]
pub enum AppError {
    /// 数据验证错误，这种错误通常都是用户参数不正确导致的，转换为400
    #[error(transparent)]
    ValidationFailed(#[from] ValidationErrors),

    /// 未认证或token无效，转换为401
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// 资源不存在，转换为404
    ///
    /// 更新/删除通过受影响行数为0来发现"未找到"，按id查询通过[`Option::None`]，
    /// 两种情况都走这个变体，而不是让错误从存储层抛出来
    #[error("not found: {0}")]
    NotFound(String),

    /// 仓库层数据库错误
    #[error(transparent)]
    RepositoryError(#[from] DatabaseError),

    /// 其他类型错误
    #[error(transparent)]
    InternalError(#[from] Error),
}

/// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ValidationFailed(err) => {
                (StatusCode::BAD_REQUEST, format!("Validate failed: {err}")).into_response()
            }
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg).into_response(),
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, format!("Resource not found: {msg}")).into_response()
            }
            AppError::RepositoryError(err) => match err {
                DatabaseError::SqlxError(sqlx::Error::RowNotFound) => {
                    (StatusCode::NOT_FOUND, format!("Record not found: {err}")).into_response()
                }
                // 非法id等存储层故障按服务端错误处理
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Repository error: {err}"),
                )
                    .into_response(),
            },
            AppError::InternalError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Something went wrong: {err}"),
            )
                .into_response(),
        }
    }
}
