//! Validated, immutable site navigation configuration.
//!
//! [`SiteConfig`] is built once from a parsed [`Config`] and is read-only
//! afterwards. All structural checks happen in [`SiteConfig::from_config`],
//! so holding a `SiteConfig` means the menu tree and sidebar table are well
//! formed. Sharing one across threads needs no locking.

use std::path::{Path, PathBuf};

use sitenav_config::{Config, Footer, SocialLink};

use crate::error::NavError;
use crate::menu::MenuItem;
use crate::navigation::{PageNavigation, adjacent_links};
use crate::sidebar::{ConfigWarning, SidebarGroup, SidebarTable};

/// Validated site navigation configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    title: String,
    description: String,
    lang: String,
    top_nav: Vec<MenuItem>,
    sidebar: SidebarTable,
    social_links: Vec<SocialLink>,
    footer: Option<Footer>,
    warnings: Vec<ConfigWarning>,
    config_path: Option<PathBuf>,
}

impl SiteConfig {
    /// Validate a parsed configuration.
    ///
    /// Field-level checks from [`Config::validate`] run again, since a
    /// [`Config`] can be assembled in code. Non-fatal findings are logged and
    /// kept on [`warnings`](Self::warnings).
    ///
    /// # Errors
    ///
    /// Returns [`NavError`] for malformed menu items, duplicate or invalid
    /// sidebar prefixes, and invalid fields.
    pub fn from_config(config: Config) -> Result<Self, NavError> {
        config.validate()?;

        let top_nav = config
            .top_nav
            .into_iter()
            .enumerate()
            .map(|(i, item)| MenuItem::from_config(item, &format!("top_nav[{i}]")))
            .collect::<Result<Vec<_>, _>>()?;

        let sidebar = SidebarTable::from_config(config.sidebar)?;

        let warnings = sidebar.lint();
        for warning in &warnings {
            tracing::warn!(%warning, "Sidebar configuration warning");
        }

        tracing::debug!(
            title = %config.title,
            nav_items = top_nav.len(),
            sidebar_prefixes = sidebar.len(),
            "Site configuration loaded"
        );

        Ok(Self {
            title: config.title,
            description: config.description,
            lang: config.lang,
            top_nav,
            sidebar,
            social_links: config.social_links,
            footer: config.footer,
            warnings,
            config_path: config.config_path,
        })
    }

    /// Load and validate configuration.
    ///
    /// See [`Config::load`] for how `config_path` is resolved.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Config`] if loading fails, or any validation error.
    pub fn load(config_path: Option<&Path>) -> Result<Self, NavError> {
        Self::from_config(Config::load(config_path)?)
    }

    /// Site title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Site description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Content language tag.
    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Global top navigation. Path-independent.
    #[must_use]
    pub fn top_nav(&self) -> &[MenuItem] {
        &self.top_nav
    }

    /// Sidebar table.
    #[must_use]
    pub fn sidebar_table(&self) -> &SidebarTable {
        &self.sidebar
    }

    /// Social links.
    #[must_use]
    pub fn social_links(&self) -> &[SocialLink] {
        &self.social_links
    }

    /// Page footer.
    #[must_use]
    pub fn footer(&self) -> Option<&Footer> {
        self.footer.as_ref()
    }

    /// Non-fatal findings collected during validation.
    #[must_use]
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    /// File the configuration was loaded from, if any.
    #[must_use]
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Sidebar groups for `path`.
    #[must_use]
    pub fn sidebar(&self, path: &str) -> &[SidebarGroup] {
        self.sidebar.resolve(path)
    }

    /// Top-level entry that `path` belongs to.
    ///
    /// The entry whose link, `active_match` or child link is the longest
    /// prefix of `path` wins; the first declared entry wins a tie.
    #[must_use]
    pub fn active_nav(&self, path: &str) -> Option<&MenuItem> {
        let mut best: Option<(usize, &MenuItem)> = None;
        for item in &self.top_nav {
            if let Some(len) = item.match_len(path)
                && best.is_none_or(|(best_len, _)| len > best_len)
            {
                best = Some((len, item));
            }
        }
        best.map(|(_, item)| item)
    }

    /// Full navigation context for `path`.
    #[must_use]
    pub fn navigation(&self, path: &str) -> PageNavigation<'_> {
        let sidebar = self.sidebar.resolve(path);
        let (prev, next) = adjacent_links(sidebar, path);

        PageNavigation {
            top_nav: &self.top_nav,
            sidebar,
            prefix: self.sidebar.matching_prefix(path),
            active_nav: self.active_nav(path).map(MenuItem::label),
            prev,
            next,
        }
    }
}

impl TryFrom<Config> for SiteConfig {
    type Error = NavError;

    fn try_from(config: Config) -> Result<Self, Self::Error> {
        Self::from_config(config)
    }
}

/// Global top navigation of `config`.
#[must_use]
pub fn top_nav(config: &SiteConfig) -> &[MenuItem] {
    config.top_nav()
}
