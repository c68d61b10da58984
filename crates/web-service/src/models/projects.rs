//! 项目接口模型
//!
//! HTTP层的项目DTO定义，负责与存储层记录互相转换

use database::{JoinRequest, ProjectRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// 项目列表查询参数
#[derive(Deserialize, Debug, IntoParams, Validate)]
pub struct ListParams {
    #[param(example = 1)]
    #[validate(range(min = 1))]
    /// 页码（从1开始），缺省为1
    pub page: Option<u32>,
}

/// 加入申请信息
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct JoinRequestInfo {
    #[schema(example = "bob")]
    /// 申请人用户名
    pub requester_username: String,

    /// 创始人是否已收到该申请的通知
    pub notified: bool,
}

/// 项目信息
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct ProjectInfo {
    /// 项目id（注册时由存储层分配的不透明字符串）
    pub id: String,

    #[schema(example = "alice")]
    /// 创始人用户名
    pub founder_username: String,

    #[schema(example = "foo")]
    /// 项目名称
    pub project_name: String,

    /// 项目描述
    pub description: String,

    /// 是否私有项目（私有项目不出现在匿名调用方的列表里）
    pub is_private: bool,

    /// 以申请人用户名为key的加入申请集合
    pub join_requests: HashMap<String, JoinRequestInfo>,
}

/// 注册项目的输入参数
///
/// 没有id字段：id永远由存储层在注册时分配，调用方多传的id会被忽略
#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct ProjectRegister {
    #[schema(example = "foo")]
    #[validate(length(min = 1, max = 100))]
    /// 新建项目名称
    pub project_name: String,

    #[validate(length(max = 2000))]
    #[serde(default)]
    /// 项目描述
    pub description: String,

    #[serde(default)]
    /// 是否私有项目
    pub is_private: bool,
}

/// 更新项目的输入参数
///
/// 对可变字段做整体替换；founder与加入申请不在更新范围内
#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct ProjectUpdate {
    /// 要更新的项目id
    pub id: String,

    #[schema(example = "bar")]
    #[validate(length(min = 1, max = 100))]
    /// 项目名称
    pub project_name: String,

    #[validate(length(max = 2000))]
    #[serde(default)]
    /// 项目描述
    pub description: String,

    #[serde(default)]
    /// 是否私有项目
    pub is_private: bool,
}

/// 注册结果：新分配的项目id
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct ProjectCreated {
    /// 新项目的id
    pub id: String,
}

impl From<JoinRequest> for JoinRequestInfo {
    fn from(request: JoinRequest) -> Self {
        Self {
            requester_username: request.requester_username,
            notified: request.notified,
        }
    }
}

impl From<ProjectRecord> for ProjectInfo {
    fn from(record: ProjectRecord) -> Self {
        Self {
            id: record.id,
            founder_username: record.founder_username,
            project_name: record.project_name,
            description: record.description,
            is_private: record.is_private,
            join_requests: record
                .join_requests
                .into_iter()
                .map(|(requester, request)| (requester, request.into()))
                .collect(),
        }
    }
}
