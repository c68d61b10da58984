//! 项目数据库模型
//!
//! 定义项目相关的数据库模型结构体

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 分页查询固定的每页大小
pub const PAGE_SIZE: u32 = 10;

/// 根据页码（从1开始）计算SQL的OFFSET
pub fn page_offset(page: u32) -> i64 {
    // saturating_sub(1)会保证结果>=0，不会出现溢出
    (page.saturating_sub(1) as i64) * (PAGE_SIZE as i64)
}

/// 加入申请
///
/// 归属于某一个项目，以申请人用户名为key存储在项目的`join_requests`里，
/// 没有独立的生命周期
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JoinRequest {
    /// 申请人用户名
    pub requester_username: String,

    /// 创始人是否已经收到该申请的通知
    pub notified: bool,
}

impl JoinRequest {
    /// 创建一条尚未通知创始人的加入申请
    pub fn un_notified<S: Into<String>>(requester_username: S) -> Self {
        Self {
            requester_username: requester_username.into(),
            notified: false,
        }
    }
}

/// 项目记录
///
/// `id`在创建时由存储层分配一次（对外是不透明字符串），之后不可变；
/// `founder_username`在创建时写入，之后不再修改
#[derive(Debug, Clone)]
pub struct ProjectRecord {
    pub id: String,
    pub founder_username: String,
    pub project_name: String,
    pub description: String,
    pub is_private: bool,
    pub join_requests: HashMap<String, JoinRequest>,
}

/// 项目创建参数
///
/// 没有id字段：id只能由存储层分配
#[derive(Debug, Clone)]
pub struct ProjectDraft {
    pub founder_username: String,
    pub project_name: String,
    pub description: String,
    pub is_private: bool,
}

/// 项目更新参数
///
/// 更新是对可变字段的整体替换，不包含founder和加入申请
#[derive(Debug, Clone)]
pub struct ProjectChange {
    pub id: String,
    pub project_name: String,
    pub description: String,
    pub is_private: bool,
}

/// 一页项目查询结果
#[derive(Debug, Clone)]
pub struct ProjectPage {
    pub projects: Vec<ProjectRecord>,

    /// 可见性过滤之后的总记录数
    pub total: u32,
}
