//! 集成测试公共工具
//!
//! 用内存版仓库驱动真实的router，不依赖数据库。
//! 内存版实现遵循与Postgres仓库相同的契约：按创建顺序分页、
//! 受影响行数语义、未找到返回0/None而不是错误。

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use database::{
    page_offset, DatabaseError, DatabaseResult, JoinRequest, ProjectChange, ProjectDraft,
    ProjectPage, ProjectRecord, ProjectRepositoryTrait, PAGE_SIZE,
};
use http_body_util::BodyExt;
use shared_lib::models::config::JwtConfig;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use uuid::Uuid;
use web_service::auth::jwt::generate_access_token;
use web_service::routes::create_app_router;
use web_service::services::ProjectService;
use web_service::AppState;

/// 内存版项目仓库
#[derive(Debug, Clone, Default)]
pub struct MemoryProjectRepository {
    projects: Arc<Mutex<Vec<ProjectRecord>>>,
}

impl MemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn parse_id(id: &str) -> DatabaseResult<Uuid> {
        Uuid::parse_str(id).map_err(|_| DatabaseError::invalid_id(id))
    }
}

#[async_trait::async_trait]
impl ProjectRepositoryTrait for MemoryProjectRepository {
    async fn save(&self, draft: ProjectDraft) -> DatabaseResult<String> {
        let id = Uuid::new_v4().to_string();
        let record = ProjectRecord {
            id: id.clone(),
            founder_username: draft.founder_username,
            project_name: draft.project_name,
            description: draft.description,
            is_private: draft.is_private,
            join_requests: HashMap::new(),
        };
        self.projects.lock().unwrap().push(record);
        Ok(id)
    }

    async fn find_by_founder_username(&self, username: &str) -> DatabaseResult<Vec<ProjectRecord>> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.founder_username == username)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<ProjectRecord>> {
        Self::parse_id(id)?;
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_all_paged(&self, page: u32, filter_private: bool) -> DatabaseResult<ProjectPage> {
        let projects = self.projects.lock().unwrap();
        let visible: Vec<ProjectRecord> = projects
            .iter()
            .filter(|p| !filter_private || !p.is_private)
            .cloned()
            .collect();

        let slice: Vec<ProjectRecord> = visible
            .iter()
            .skip(page_offset(page) as usize)
            .take(PAGE_SIZE as usize)
            .cloned()
            .collect();

        Ok(ProjectPage {
            projects: slice,
            total: visible.len() as u32,
        })
    }

    async fn update(&self, change: ProjectChange) -> DatabaseResult<u64> {
        Self::parse_id(&change.id)?;
        let mut projects = self.projects.lock().unwrap();
        match projects.iter_mut().find(|p| p.id == change.id) {
            Some(project) => {
                project.project_name = change.project_name;
                project.description = change.description;
                project.is_private = change.is_private;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: &str) -> DatabaseResult<u64> {
        Self::parse_id(id)?;
        let mut projects = self.projects.lock().unwrap();
        let before = projects.len();
        projects.retain(|p| p.id != id);
        Ok((before - projects.len()) as u64)
    }

    async fn add_join_request(&self, id: &str, request: JoinRequest) -> DatabaseResult<u64> {
        Self::parse_id(id)?;
        let mut projects = self.projects.lock().unwrap();
        match projects.iter_mut().find(|p| p.id == id) {
            Some(project) => {
                project
                    .join_requests
                    .insert(request.requester_username.clone(), request);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn add_un_notified_join_request(
        &self,
        id: &str,
        request: JoinRequest,
    ) -> DatabaseResult<u64> {
        self.add_join_request(
            id,
            JoinRequest {
                notified: false,
                ..request
            },
        )
        .await
    }
}

/// 测试用JWT配置，和[`build_test_app`]里的保持一致
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret".to_string(),
        access_expiry_mins: 15,
    }
}

/// 用内存仓库构建完整的应用路由
pub fn build_test_app(repository: MemoryProjectRepository) -> Router {
    let state = AppState {
        project_service: Arc::new(ProjectService::new(repository)),
        jwt: Arc::new(test_jwt_config()),
    };
    create_app_router(state)
}

/// 生成指定用户的Authorization头
pub fn bearer(username: &str) -> String {
    let token = generate_access_token(username, &test_jwt_config()).expect("generate test token");
    format!("Bearer {token}")
}

/// 生成已过期的Authorization头（密钥正确，签名有效）
pub fn expired_bearer(username: &str) -> String {
    let config = JwtConfig {
        secret: test_jwt_config().secret,
        access_expiry_mins: -5,
    };
    let token = generate_access_token(username, &config).expect("generate expired token");
    format!("Bearer {token}")
}

/// 预置一个项目，返回分配的id
pub async fn seed_project(
    repo: &MemoryProjectRepository,
    founder: &str,
    name: &str,
    is_private: bool,
) -> String {
    repo.save(ProjectDraft {
        founder_username: founder.to_string(),
        project_name: name.to_string(),
        description: format!("{name} description"),
        is_private,
    })
    .await
    .expect("seed project")
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("router is infallible")
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is json")
}

/// 匿名GET请求
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// 带认证的无body请求
pub fn authed(method: Method, uri: &str, username: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, bearer(username))
        .body(Body::empty())
        .unwrap()
}

/// 带认证的json请求
pub fn authed_json(
    method: Method,
    uri: &str,
    username: &str,
    body: serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, bearer(username))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
