use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 封装符合json-api的单个返回对象
///
/// 具体参考：<https://jsonapi.org>
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct Reply<T> {
    pub data: T,
}

/// 封装符合json-api的列表对象（分页）
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct ReplyList<T> {
    pub data: Vec<T>,

    #[schema(example = 146)]
    /// 可见性过滤之后的总记录数，调用方可据此计算总页数
    pub total: u32,

    #[schema(example = 10)]
    /// 每页大小
    pub page_size: u32,

    #[schema(example = 1)]
    /// 当前页码（从1开始）
    pub page_index: u32,
}
