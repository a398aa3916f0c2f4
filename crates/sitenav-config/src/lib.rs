//! Configuration loading for sitenav.
//!
//! Parses `sitenav.toml` (or a YAML equivalent) with serde and provides
//! auto-discovery of config files in parent directories. The parsed
//! [`Config`] mirrors the on-disk schema one to one; structural checks on
//! navigation (menu shape, duplicate sidebar prefixes) happen when the
//! `sitenav-site` crate builds its validated `SiteConfig` from it.
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `title`
//! - `description`
//! - `footer.message`
//! - `footer.copyright`
//! - `social_links[].link`

mod expand;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "sitenav.toml";

/// Site navigation configuration as written on disk.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Site title shown in the navigation bar.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Content language tag.
    pub lang: String,
    /// Global top navigation entries.
    pub top_nav: Vec<MenuItemConfig>,
    /// Sidebar declarations keyed by path prefix.
    pub sidebar: Vec<SidebarEntryConfig>,
    /// Social links rendered next to the navigation bar.
    pub social_links: Vec<SocialLink>,
    /// Page footer.
    pub footer: Option<Footer>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            lang: "en-US".to_owned(),
            top_nav: Vec::new(),
            sidebar: Vec::new(),
            social_links: Vec::new(),
            footer: None,
            config_path: None,
        }
    }
}

/// Top navigation entry as written on disk.
///
/// Exactly one of `link` and `children` must be set; this is checked when
/// the site configuration is built, not while parsing.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuItemConfig {
    /// Display label.
    pub label: String,
    /// Link target for leaf entries.
    #[serde(default)]
    pub link: Option<String>,
    /// Nested entries for dropdown groups.
    #[serde(default)]
    pub children: Vec<MenuItemConfig>,
    /// Path prefix that marks this entry active, overriding `link`.
    #[serde(default)]
    pub active_match: Option<String>,
}

/// Sidebar declaration for one path prefix.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarEntryConfig {
    /// Path prefix the groups apply to (e.g. `/frontend/javascript/`).
    pub prefix: String,
    /// Ordered sidebar groups.
    #[serde(default)]
    pub groups: Vec<SidebarGroupConfig>,
}

/// Sidebar group as written on disk.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarGroupConfig {
    /// Group heading.
    pub title: String,
    /// Ordered article links.
    #[serde(default)]
    pub items: Vec<SidebarLinkConfig>,
    /// Initial collapse state. `None` means the group is not collapsible.
    #[serde(default)]
    pub collapsed: Option<bool>,
}

/// Sidebar link as written on disk.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarLinkConfig {
    /// Display label.
    pub label: String,
    /// Site-relative document path.
    pub path: String,
}

/// Social link.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    /// Icon name (e.g. `github`).
    pub icon: String,
    /// Absolute URL.
    pub link: String,
}

/// Page footer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Footer {
    /// Footer message line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Copyright line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`footer.copyright`").
        field: String,
        /// Error message (e.g., "${`SITE_AUTHOR`} not set").
        message: String,
    },
}

/// On-disk format of a configuration file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML document (default).
    Toml,
    /// YAML document.
    Yaml,
}

impl ConfigFormat {
    /// Pick the format from a file extension, falling back to TOML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Toml,
        }
    }
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sitenav.toml` in current directory and parents.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the explicit path doesn't exist or
    /// discovery finds nothing, and parse/validation errors otherwise.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        let cwd = std::env::current_dir()?;
        match discover_config(&cwd) {
            Some(discovered) => Self::load_from_file(&discovered),
            None => Err(ConfigError::NotFound(cwd.join(CONFIG_FILENAME))),
        }
    }

    /// Load configuration from a specific file.
    ///
    /// The format is chosen by [`ConfigFormat::from_path`].
    ///
    /// # Errors
    ///
    /// Returns error if reading, parsing, expansion or validation fails.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "Loading site configuration");
        let content = std::fs::read_to_string(path)?;
        let mut config = match ConfigFormat::from_path(path) {
            ConfigFormat::Toml => Self::from_toml_str(&content)?,
            ConfigFormat::Yaml => Self::from_yaml_str(&content)?,
        };
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.finish()
    }

    /// Parse and validate a YAML document.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion or validation fails.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.finish()
    }

    /// Expand environment variables, then validate.
    fn finish(mut self) -> Result<Self, ConfigError> {
        self.expand_env_vars()?;
        self.validate()?;
        Ok(self)
    }

    /// Validate configuration values.
    ///
    /// Checks field-level constraints only. Called automatically after parsing.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.title, "title")?;
        require_non_empty(&self.lang, "lang")?;

        for (i, social) in self.social_links.iter().enumerate() {
            require_non_empty(&social.icon, &format!("social_links[{i}].icon"))?;
            require_http_url(&social.link, &format!("social_links[{i}].link"))?;
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.title = expand::expand_env(&self.title, "title")?;
        self.description = expand::expand_env(&self.description, "description")?;

        if let Some(ref mut footer) = self.footer {
            if let Some(ref message) = footer.message {
                footer.message = Some(expand::expand_env(message, "footer.message")?);
            }
            if let Some(ref copyright) = footer.copyright {
                footer.copyright = Some(expand::expand_env(copyright, "footer.copyright")?);
            }
        }

        for (i, social) in self.social_links.iter_mut().enumerate() {
            social.link = expand::expand_env(&social.link, &format!("social_links[{i}].link"))?;
        }

        Ok(())
    }
}

/// Search for config file in `start` and its parents.
fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "Discovered site configuration");
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}
