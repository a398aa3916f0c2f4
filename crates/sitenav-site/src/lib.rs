//! Site navigation and sidebar resolution for sitenav.
//!
//! This crate provides:
//! - [`SiteConfig`]: validated, immutable navigation configuration
//! - [`resolve_sidebar`]: longest-prefix sidebar lookup for a document path
//! - [`PageNavigation`]: per-page bundle of top nav, sidebar and prev/next links
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use sitenav_config::Config;
//! use sitenav_site::{SiteConfig, resolve_sidebar};
//!
//! let config = Config::from_toml_str(r#"
//! title = "Frontend Notes"
//!
//! [[top_nav]]
//! label = "Home"
//! link = "/"
//!
//! [[sidebar]]
//! prefix = "/frontend/javascript/"
//!
//! [[sidebar.groups]]
//! title = "JavaScript"
//!
//! [[sidebar.groups.items]]
//! label = "Async"
//! path = "/frontend/javascript/async"
//! "#)?;
//! let site = SiteConfig::from_config(config)?;
//!
//! let groups = resolve_sidebar("/frontend/javascript/async", site.sidebar_table());
//! assert_eq!(groups[0].title, "JavaScript");
//! assert!(site.sidebar("/projects/").is_empty());
//! # Ok(())
//! # }
//! ```

mod error;
pub(crate) mod menu;
pub(crate) mod navigation;
pub(crate) mod sidebar;
pub(crate) mod site_config;

pub use error::NavError;
pub use menu::MenuItem;
pub use navigation::PageNavigation;
pub use sidebar::{ConfigWarning, SidebarGroup, SidebarLink, SidebarTable, resolve_sidebar};
pub use site_config::{SiteConfig, top_nav};

// Re-export config types that appear in the public API.
pub use sitenav_config::{Config, ConfigError, Footer, SocialLink};
