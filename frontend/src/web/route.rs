//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖 DOM 或 web_sys。
//! 定义应用的所有路由、路径解析/生成，以及每个路由的守卫属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页（默认路由）
    #[default]
    Home,
    Login,
    Register,
    Explore,
    /// 单作品详情页，携带作品 id
    ArtDetails(String),
    /// 上传作品（需要认证）
    AddArtwork,
    /// 我的画廊（需要认证）
    Gallery,
    /// 我的收藏（需要认证）
    Favorites,
    /// 仪表盘首页（需要认证）
    Dashboard,
    DashboardGallery,
    DashboardAddArtwork,
    DashboardFavorites,
    Profile,
    /// 管理面板（需要管理员）
    AdminHome,
    ManageUsers,
    ManageArts,
    ReportedArts,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        // 去掉查询串与结尾斜杠（根路径除外）
        let path = path.split(['?', '#']).next().unwrap_or("/");
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };

        if let Some(id) = path.strip_prefix("/art/") {
            if !id.is_empty() && !id.contains('/') {
                return Self::ArtDetails(id.to_string());
            }
            return Self::NotFound;
        }

        match path {
            "/" | "" => Self::Home,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/explore" => Self::Explore,
            "/add-artwork" => Self::AddArtwork,
            "/gallery" => Self::Gallery,
            "/favorites" => Self::Favorites,
            "/dashboard" => Self::Dashboard,
            "/dashboard/gallery" => Self::DashboardGallery,
            "/dashboard/add-artwork" => Self::DashboardAddArtwork,
            "/dashboard/favorites" => Self::DashboardFavorites,
            "/dashboard/profile" => Self::Profile,
            "/dashboard/admin" => Self::AdminHome,
            "/dashboard/admin/manage-users" => Self::ManageUsers,
            "/dashboard/admin/manage-arts" => Self::ManageArts,
            "/dashboard/admin/reported-arts" => Self::ReportedArts,
            _ => Self::NotFound,
        }
    }

    /// 生成路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::Explore => "/explore".to_string(),
            Self::ArtDetails(id) => format!("/art/{}", id),
            Self::AddArtwork => "/add-artwork".to_string(),
            Self::Gallery => "/gallery".to_string(),
            Self::Favorites => "/favorites".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::DashboardGallery => "/dashboard/gallery".to_string(),
            Self::DashboardAddArtwork => "/dashboard/add-artwork".to_string(),
            Self::DashboardFavorites => "/dashboard/favorites".to_string(),
            Self::Profile => "/dashboard/profile".to_string(),
            Self::AdminHome => "/dashboard/admin".to_string(),
            Self::ManageUsers => "/dashboard/admin/manage-users".to_string(),
            Self::ManageArts => "/dashboard/admin/manage-arts".to_string(),
            Self::ReportedArts => "/dashboard/admin/reported-arts".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **守卫属性：该路由是否需要已认证的会话**
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::AddArtwork
                | Self::Gallery
                | Self::Favorites
                | Self::Dashboard
                | Self::DashboardGallery
                | Self::DashboardAddArtwork
                | Self::DashboardFavorites
                | Self::Profile
        ) || self.requires_admin()
    }

    /// **守卫属性：该路由是否需要管理员角色**
    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            Self::AdminHome | Self::ManageUsers | Self::ManageArts | Self::ReportedArts
        )
    }

    /// 已认证用户是否应离开此路由（登录/注册页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// 认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 登录成功、且没有记录来源路由时的缺省目标
    pub fn default_after_login() -> Self {
        Self::Home
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        let routes = [
            AppRoute::Home,
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::Explore,
            AppRoute::ArtDetails("abc123".into()),
            AppRoute::AddArtwork,
            AppRoute::Gallery,
            AppRoute::Favorites,
            AppRoute::Dashboard,
            AppRoute::DashboardGallery,
            AppRoute::DashboardAddArtwork,
            AppRoute::DashboardFavorites,
            AppRoute::Profile,
            AppRoute::AdminHome,
            AppRoute::ManageUsers,
            AppRoute::ManageArts,
            AppRoute::ReportedArts,
        ];
        for route in routes {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn parsing_ignores_query_and_trailing_slash() {
        assert_eq!(AppRoute::from_path("/explore/"), AppRoute::Explore);
        assert_eq!(
            AppRoute::from_path("/explore?page=2&category=Painting"),
            AppRoute::Explore
        );
        assert_eq!(
            AppRoute::from_path("/art/65fa12"),
            AppRoute::ArtDetails("65fa12".into())
        );
        assert_eq!(AppRoute::from_path("/art/"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/art/a/b"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/no-such-page"), AppRoute::NotFound);
    }

    #[test]
    fn guard_properties_cover_protected_subtrees() {
        assert!(!AppRoute::Home.requires_auth());
        assert!(!AppRoute::Explore.requires_auth());
        assert!(!AppRoute::ArtDetails("x".into()).requires_auth());

        assert!(AppRoute::Gallery.requires_auth());
        assert!(AppRoute::Favorites.requires_auth());
        assert!(AppRoute::AddArtwork.requires_auth());
        assert!(AppRoute::Dashboard.requires_auth());

        // 管理员路由同时也是认证路由
        for route in [
            AppRoute::AdminHome,
            AppRoute::ManageUsers,
            AppRoute::ManageArts,
            AppRoute::ReportedArts,
        ] {
            assert!(route.requires_admin());
            assert!(route.requires_auth());
        }
        assert!(!AppRoute::Gallery.requires_admin());

        assert!(AppRoute::Login.should_redirect_when_authenticated());
        assert!(AppRoute::Register.should_redirect_when_authenticated());
        assert!(!AppRoute::Home.should_redirect_when_authenticated());
    }
}
