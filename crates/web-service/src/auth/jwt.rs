//! JWT access token 的生成与校验
//!
//! access token是HS256签名的JWT。注意：[`validate_token`]只校验签名和格式，
//! 过期判断由 [`crate::auth::session::Session::is_valid`] 单独完成，
//! 保证"会话是否有效"是一个显式的纯函数判断，而不是藏在解码器里的副作用

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shared_lib::models::config::JwtConfig;
use uuid::Uuid;

/// access token中携带的claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// 用户名
    pub sub: String,
    /// 过期时间（UTC Unix时间戳）
    pub exp: i64,
    /// 签发时间（UTC Unix时间戳）
    pub iat: i64,
    /// token唯一标识（UUID v4），便于审计
    pub jti: String,
}

impl Claims {
    /// 过期时间对应的UTC时间
    pub fn expiration(&self) -> DateTime<Utc> {
        // 时间戳超出chrono可表示范围的token按"早已过期"处理
        DateTime::<Utc>::from_timestamp(self.exp, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// 为指定用户生成HS256 access token
pub fn generate_access_token(
    username: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp();
    let exp = now + config.access_expiry_mins * 60;

    let claims = Claims {
        sub: username.to_string(),
        exp,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// 校验签名并解出 [`Claims`]
///
/// 这里关闭了exp的自动校验，过期判断交给 [`crate::auth::session::Session`] 的纯函数
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default(); // HS256
    validation.validate_exp = false;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "unit-test-secret".to_string(),
            access_expiry_mins: 15,
        }
    }

    #[test]
    fn token_round_trip_keeps_claims() {
        let config = test_config();
        let token = generate_access_token("alice", &config).unwrap();
        let claims = validate_token(&token, &config).unwrap();

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.exp, claims.iat + 15 * 60);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = generate_access_token("alice", &test_config()).unwrap();

        let other = JwtConfig {
            secret: "another-secret".to_string(),
            access_expiry_mins: 15,
        };
        assert!(validate_token(&token, &other).is_err());
    }

    #[test]
    fn expired_token_still_decodes() {
        // 签名校验与过期判断分离：过期的token仍然能解出claims
        let config = JwtConfig {
            secret: "unit-test-secret".to_string(),
            access_expiry_mins: -5,
        };
        let token = generate_access_token("alice", &config).unwrap();
        let claims = validate_token(&token, &config).unwrap();

        assert!(claims.expiration() < Utc::now());
    }
}
