//! 权限快照
//!
//! 白名单与路由树在构造后不再变化，前端暂不做基于角色的过滤。

use crate::config::WHITE_LIST_ROUTERS;
use crate::routes::RouteTable;

#[derive(Debug, Clone, Copy)]
pub struct PermissionStore {
    white_list: &'static [&'static str],
    routers: RouteTable,
}

impl Default for PermissionStore {
    fn default() -> Self {
        Self::new(WHITE_LIST_ROUTERS, RouteTable::new())
    }
}

impl PermissionStore {
    pub fn new(white_list: &'static [&'static str], routers: RouteTable) -> Self {
        Self {
            white_list,
            routers,
        }
    }

    pub fn white_list(&self) -> &'static [&'static str] {
        self.white_list
    }

    /// 路径是否无需登录即可访问（精确匹配）
    pub fn is_white_listed(&self, path: &str) -> bool {
        self.white_list.contains(&path)
    }

    pub fn routers(&self) -> RouteTable {
        self.routers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_login_is_white_listed() {
        let permission = PermissionStore::default();
        assert_eq!(permission.white_list(), &["/login"]);
        assert!(permission.is_white_listed("/login"));
        assert!(!permission.is_white_listed("/login/"));
        assert!(!permission.is_white_listed("/bangumi/list"));
    }
}
