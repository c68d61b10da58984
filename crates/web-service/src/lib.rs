//! Web服务模块
//!
//! 提供 HTTP API 接口和文档服务

use crate::services::{ProjectService, ProjectServiceTrait};
use color_eyre::Result;
use database::ProjectRepository;
use shared_lib::models::config::{AppConfig, JwtConfig};
use sqlx::{Pool, Postgres};
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::info;

pub mod auth;
pub mod models;
pub mod routes;
pub mod services;

/// 应用共享状态
pub struct AppState<PS: ProjectServiceTrait> {
    pub project_service: Arc<PS>,
    pub jwt: Arc<JwtConfig>,
}

// 手写Clone，避免给PS加上多余的Clone约束
impl<PS: ProjectServiceTrait> Clone for AppState<PS> {
    fn clone(&self) -> Self {
        Self {
            project_service: self.project_service.clone(),
            jwt: self.jwt.clone(),
        }
    }
}

/// 具体的 AppState 类型别名
pub type ConcreteAppState = AppState<ProjectService<ProjectRepository>>;

/// 启动 Web 服务
pub async fn start_web_service(
    pool: Pool<Postgres>,
    config: Arc<AppConfig>,
    mut shutdown_rx: Receiver<bool>,
) -> Result<()> {
    let shared_state = AppState {
        project_service: Arc::new(ProjectService::new(ProjectRepository::new(pool.clone()))),
        jwt: Arc::new(config.jwt.clone()),
    };

    let router = routes::create_app_router(shared_state);

    let bind_addr = config.http_bind_addr.clone();
    info!("🚀 启动 Web Service 在 {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            // 发送端掉线也视为关闭信号
            let _ = shutdown_rx.changed().await;
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}
