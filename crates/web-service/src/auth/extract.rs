//! 认证提取器
//!
//! 每条路由通过参数里的提取器显式声明自己的认证要求：
//! - [`AuthUser`]：必须携带有效token，否则401
//! - [`OptionalAuthUser`]：不拒绝任何请求，只报告调用方是否已认证
//!
//! 调用方的认证状态从这里流向handler的入参，handler和策略函数
//! 不读取任何全局/隐式的请求上下文

use crate::auth::jwt::validate_token;
use crate::auth::session::Session;
use crate::models::err::AppError;
use crate::services::ProjectServiceTrait;
use crate::AppState;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use chrono::Utc;
use std::convert::Infallible;

/// 已认证的调用方
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// token中的用户名
    pub username: String,
}

impl<PS: ProjectServiceTrait> FromRequestParts<AppState<PS>> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<PS>,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Unauthorized("Invalid Authorization format. Expected: Bearer <token>".to_string())
        })?;

        let claims = validate_token(token, &state.jwt)
            .map_err(|_| AppError::Unauthorized("Invalid token".to_string()))?;

        // 过期判断是显式的纯函数：存储的过期时间 vs 当前时间
        let session = Session::from_claims(&claims);
        if !session.is_valid(Utc::now()) {
            return Err(AppError::Unauthorized("Session expired".to_string()));
        }

        Ok(AuthUser {
            username: session.username,
        })
    }
}

/// 可选认证的调用方
///
/// 用于匿名也可以访问的路由（项目列表）：匿名与认证的区别
/// 只体现在可见性过滤上，而不是拒绝请求
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    /// 调用方是否已认证
    pub fn is_authenticated(&self) -> bool {
        self.0.is_some()
    }
}

impl<PS: ProjectServiceTrait> FromRequestParts<AppState<PS>> for OptionalAuthUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<PS>,
    ) -> Result<Self, Self::Rejection> {
        // 无效或过期的token一律按匿名处理
        Ok(OptionalAuthUser(
            AuthUser::from_request_parts(parts, state).await.ok(),
        ))
    }
}
