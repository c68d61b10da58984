use color_eyre::eyre::Context;
use color_eyre::{Help, Result};
use std::sync::Arc;

/// JWT签名配置
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HS256签名密钥
    pub secret: String,

    /// access token的有效期（分钟）
    ///
    /// 可通过环境变量 `JWT_ACCESS_EXPIRY_MINS` 来调整
    pub access_expiry_mins: i64,
}

/// 程序配置
pub struct AppConfig {
    /// postgresql数据库链接字符串
    pub postgresql_conn_str: String,

    /// HTTP服务监听地址
    ///
    /// 可通过环境变量 `BIND_ADDR` 来调整
    pub http_bind_addr: String,

    /// JWT配置
    pub jwt: JwtConfig,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时直接使用环境变量，没有.env文件也能启动
        let _ = dotenvy::dotenv();

        // 读取数据库地址信息（仅支持postgresql）
        let db_url = std::env::var("DATABASE_URL")
            .context("Can not load DATABASE_URL in environment")
            .suggestion("设置 DATABASE_URL 环境变量")?;

        let jwt_secret = std::env::var("JWT_SECRET")
            .context("Can not load JWT_SECRET in environment")
            .suggestion("设置 JWT_SECRET 环境变量")?;

        let config = AppConfig {
            postgresql_conn_str: db_url,
            http_bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            jwt: JwtConfig {
                secret: jwt_secret,
                access_expiry_mins: std::env::var("JWT_ACCESS_EXPIRY_MINS")
                    .map_or(60, |s| s.parse().unwrap_or(60)),
            },
        };
        Ok(Arc::new(config))
    }
}
