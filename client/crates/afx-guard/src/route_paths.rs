use afx_config::RoutesConfig;

/// The paths guards compare against and redirect to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePaths {
    pub admin_prefix: String,
    pub login_path: String,
    pub admin_login_path: String,
    pub landing_path: String,
    pub admin_role: String,
}

impl RoutePaths {
    /// Plain string prefix match on the pathname
    pub fn is_admin_path(&self, pathname: &str) -> bool {
        pathname.starts_with(&self.admin_prefix)
    }

    pub fn is_login_path(&self, pathname: &str) -> bool {
        pathname == self.login_path || pathname == self.admin_login_path
    }
}

impl From<&RoutesConfig> for RoutePaths {
    fn from(config: &RoutesConfig) -> Self {
        Self {
            admin_prefix: config.admin_prefix.clone(),
            login_path: config.login_path.clone(),
            admin_login_path: config.admin_login_path.clone(),
            landing_path: config.landing_path.clone(),
            admin_role: config.admin_role.clone(),
        }
    }
}

impl Default for RoutePaths {
    fn default() -> Self {
        Self::from(&RoutesConfig::default())
    }
}
