//! 列表查询的可见性/分页策略
//!
//! 这是列表接口的核心规则：调用方的认证状态和请求页码都是显式入参，
//! 输出是交给存储层的查询参数。匿名调用方只能看到公开项目，
//! 已认证调用方不做可见性过滤

/// 分页列表的查询参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingQuery {
    /// 页码（从1开始）
    pub page: u32,

    /// 是否过滤掉私有项目
    pub filter_private: bool,
}

/// 根据请求页码和认证状态计算列表查询参数
///
/// - 页码缺省为1
/// - 匿名调用方 => 过滤私有项目；已认证 => 不过滤
pub fn listing_query(page: Option<u32>, authenticated: bool) -> ListingQuery {
    ListingQuery {
        page: page.unwrap_or(1),
        filter_private: !authenticated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_to_first() {
        assert_eq!(listing_query(None, true).page, 1);
        assert_eq!(listing_query(None, false).page, 1);
    }

    #[test]
    fn requested_page_is_kept() {
        assert_eq!(listing_query(Some(3), true).page, 3);
    }

    #[test]
    fn anonymous_callers_get_private_projects_filtered() {
        assert!(listing_query(None, false).filter_private);
        assert!(listing_query(Some(2), false).filter_private);
    }

    #[test]
    fn authenticated_callers_see_everything() {
        assert!(!listing_query(None, true).filter_private);
        assert!(!listing_query(Some(2), true).filter_private);
    }
}
