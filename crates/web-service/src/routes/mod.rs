//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 用户可以在导出路由时传入共享数据 shared_state，这样所有路由函数都可以访问。
//! 每条路由的认证要求由handler入参里的提取器显式声明
//! （[`crate::auth::AuthUser`] / [`crate::auth::OptionalAuthUser`]）。

use crate::routes::projects::__path_delete_project;
use crate::routes::projects::__path_find_founded_projects;
use crate::routes::projects::__path_find_projects;
use crate::routes::projects::__path_get_project;
use crate::routes::projects::__path_register_project;
use crate::routes::projects::__path_request_to_join;
use crate::routes::projects::__path_update_project;
use crate::routes::projects::{
    delete_project, find_founded_projects, find_projects, get_project, register_project,
    request_to_join, update_project,
};
use crate::routes::session::__path_check_session;
use crate::routes::session::check_session;
use crate::services::ProjectServiceTrait;
use crate::AppState;
use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

pub mod projects;
pub mod session;

/// 导出当前App的所有路由
///
/// ## 参数定义
/// - state: 共享数据，参考 [`AppState`] 定义。一般存放服务实例、JWT配置之类的全局共享数据。
///
/// ## **❗️注意事项：**
///
/// 由于 [`routes!`] 宏限制，同一个宏调用里的handler必须挂在同一个path上，
/// 不同path需要拆开多个 `.routes(...)` 调用
fn routers<PS: ProjectServiceTrait>(state: AppState<PS>) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(find_projects, register_project, update_project))
        .routes(routes!(find_founded_projects))
        .routes(routes!(get_project, delete_project))
        .routes(routes!(request_to_join))
        .routes(routes!(check_session))
        .with_state(state)
}

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 生成OpenAPI文档
/// - 生成App路由
/// - 使用Scalar作为最终在线文档格式
///
/// 由于使用了 `utoipa` 库来自动化生成`openapi`文档，因此我们没有使用原生的 [`Router`]，而是使用了
/// [`OpenApiRouter`] 。
pub fn create_app_router<PS: ProjectServiceTrait>(shared_state: AppState<PS>) -> Router {
    // 当前项目的OpenAPI声明
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "projects", description = r#"
项目协作平台后端，覆盖场景：

- 项目注册 / 检索 / 更新 / 删除
- 匿名与认证调用方的可见性过滤分页
- 加入申请
            "#),
            (name = "session", description = "会话确认接口")
        ),
    )]
    struct ApiDoc;

    // 使用`utoipa_axum`提供的OpenApiRouter来创建路由。
    // 同时传递共享状态数据到路由中供使用。
    // 最终拿到的变量：
    // - router: Axum的Router，实际的路由对象
    // - api: utoipa的OpenApi，生成的OpenAPI对象
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api", routers(shared_state))
        .split_for_parts();

    // 合并文档路由，用户可通过 /docs 访问文档网页地址
    router.merge(Scalar::with_url("/docs", api))
}
