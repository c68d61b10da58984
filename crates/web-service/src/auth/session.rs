//! 会话有效期判断
//!
//! "会话是否有效"被建模为 存储的过期时间 vs 当前时间 的纯函数，
//! 与token签名校验、服务端会话确认接口（GET /api/session）相互独立

use crate::auth::jwt::Claims;
use chrono::{DateTime, Utc};

/// 一次已通过签名校验的会话
#[derive(Debug, Clone)]
pub struct Session {
    /// 会话归属的用户名
    pub username: String,

    /// 会话过期时间
    pub expiration: DateTime<Utc>,
}

impl Session {
    /// 从token claims构建会话
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            username: claims.sub.clone(),
            expiration: claims.expiration(),
        }
    }

    /// 当前时间早于过期时间则会话有效
    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        now < self.expiration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session_expiring_at(expiration: DateTime<Utc>) -> Session {
        Session {
            username: "alice".to_string(),
            expiration,
        }
    }

    #[test]
    fn session_is_valid_before_expiration() {
        let now = Utc::now();
        assert!(session_expiring_at(now + Duration::minutes(5)).is_valid(now));
    }

    #[test]
    fn session_is_invalid_at_expiration() {
        let now = Utc::now();
        assert!(!session_expiring_at(now).is_valid(now));
    }

    #[test]
    fn session_is_invalid_after_expiration() {
        let now = Utc::now();
        assert!(!session_expiring_at(now - Duration::minutes(5)).is_valid(now));
    }
}
