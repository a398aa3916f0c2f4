//! Errors raised while building a [`SiteConfig`](crate::SiteConfig).

use sitenav_config::ConfigError;

/// Error returned when a navigation configuration is rejected.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// Loading or field validation failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Two sidebar entries declare the same prefix.
    #[error("Duplicate sidebar prefix: {0}")]
    DuplicatePrefix(String),
    /// Sidebar prefix is empty or not site-relative.
    #[error("Invalid sidebar prefix {0:?}: must start with '/'")]
    InvalidPrefix(String),
    /// Menu item sets both `link` and `children`.
    #[error("Menu item {field} ({label:?}) sets both link and children")]
    MenuItemLinkAndChildren {
        /// Position in the menu tree (e.g. `top_nav[1].children[0]`).
        field: String,
        /// Item label.
        label: String,
    },
    /// Menu item sets neither `link` nor `children`.
    #[error("Menu item {field} ({label:?}) needs either a link or children")]
    MenuItemEmpty {
        /// Position in the menu tree.
        field: String,
        /// Item label.
        label: String,
    },
    /// The same path appears twice in one sidebar group.
    #[error("Duplicate link {path} in sidebar group {group:?} under {prefix}")]
    DuplicateSidebarLink {
        /// Prefix the group is declared under.
        prefix: String,
        /// Group title.
        group: String,
        /// Repeated document path.
        path: String,
    },
    /// A required label, title or path is blank.
    #[error("{0} cannot be empty")]
    EmptyField(String),
}
