//! Sidebar table and longest-prefix resolution.
//!
//! A [`SidebarTable`] maps path prefixes (e.g. `/frontend/javascript/`) to the
//! ordered [`SidebarGroup`]s shown next to every page under that prefix.
//! Entries are kept sorted longest prefix first, so resolution is a linear
//! scan that stops at the first hit.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use sitenav_config::SidebarEntryConfig;

use crate::error::NavError;

/// Article link inside a sidebar group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarLink {
    /// Display label.
    pub label: String,
    /// Site-relative document path.
    pub path: String,
}

impl SidebarLink {
    /// Create a link.
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Titled group of sidebar links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    /// Group heading.
    pub title: String,
    /// Ordered links.
    pub items: Vec<SidebarLink>,
    /// Initial collapse state; `None` when the group is not collapsible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
}

impl SidebarGroup {
    /// Create a non-collapsible group.
    pub fn new(title: impl Into<String>, items: Vec<SidebarLink>) -> Self {
        Self {
            title: title.into(),
            items,
            collapsed: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct SidebarEntry {
    prefix: String,
    groups: Vec<SidebarGroup>,
}

/// Non-fatal finding about a sidebar declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Link declared under a prefix it does not start with.
    LinkOutsidePrefix {
        /// Prefix the link is declared under.
        prefix: String,
        /// Link path.
        path: String,
    },
    /// Link repeated in more than one group of the same prefix.
    RepeatedLink {
        /// Prefix the groups are declared under.
        prefix: String,
        /// Link path.
        path: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LinkOutsidePrefix { prefix, path } => {
                write!(f, "sidebar link {path} is not under its prefix {prefix}")
            }
            Self::RepeatedLink { prefix, path } => {
                write!(f, "sidebar link {path} appears in several groups under {prefix}")
            }
        }
    }
}

/// Mapping from path prefix to ordered sidebar groups.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarTable {
    /// Sorted by prefix length, longest first.
    entries: Vec<SidebarEntry>,
}

impl SidebarTable {
    /// Build a table from `(prefix, groups)` pairs.
    ///
    /// # Errors
    ///
    /// Rejects duplicate prefixes, prefixes that don't start with `/`, blank
    /// group titles or link fields, and a path repeated inside one group.
    pub fn new<I>(entries: I) -> Result<Self, NavError>
    where
        I: IntoIterator<Item = (String, Vec<SidebarGroup>)>,
    {
        let mut seen = HashSet::new();
        let mut table = Vec::new();

        for (prefix, groups) in entries {
            if !prefix.starts_with('/') {
                return Err(NavError::InvalidPrefix(prefix));
            }
            if !seen.insert(prefix.clone()) {
                return Err(NavError::DuplicatePrefix(prefix));
            }
            for group in &groups {
                validate_group(&prefix, group)?;
            }
            table.push(SidebarEntry { prefix, groups });
        }

        table.sort_by(|a, b| {
            b.prefix
                .len()
                .cmp(&a.prefix.len())
                .then_with(|| a.prefix.cmp(&b.prefix))
        });

        Ok(Self { entries: table })
    }

    /// Build a table from on-disk sidebar declarations.
    pub(crate) fn from_config(entries: Vec<SidebarEntryConfig>) -> Result<Self, NavError> {
        Self::new(entries.into_iter().map(|entry| {
            let groups = entry
                .groups
                .into_iter()
                .map(|group| SidebarGroup {
                    title: group.title,
                    items: group
                        .items
                        .into_iter()
                        .map(|link| SidebarLink {
                            label: link.label,
                            path: link.path,
                        })
                        .collect(),
                    collapsed: group.collapsed,
                })
                .collect();
            (entry.prefix, groups)
        }))
    }

    /// Groups of the longest prefix that `path` starts with.
    ///
    /// Returns an empty slice when no prefix matches.
    #[must_use]
    pub fn resolve(&self, path: &str) -> &[SidebarGroup] {
        match self.find(path) {
            Some(entry) => &entry.groups,
            None => &[],
        }
    }

    /// The prefix [`resolve`](Self::resolve) would pick for `path`.
    #[must_use]
    pub fn matching_prefix(&self, path: &str) -> Option<&str> {
        self.find(path).map(|entry| entry.prefix.as_str())
    }

    /// Groups declared under exactly `prefix`.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&[SidebarGroup]> {
        self.entries
            .iter()
            .find(|entry| entry.prefix == prefix)
            .map(|entry| entry.groups.as_slice())
    }

    /// Declared prefixes, longest first.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.prefix.as_str())
    }

    /// Number of declared prefixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no prefix is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Collect non-fatal findings about the declared links.
    pub(crate) fn lint(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        for entry in &self.entries {
            let mut seen = HashSet::new();
            for link in entry.groups.iter().flat_map(|group| &group.items) {
                if !link.path.starts_with(&entry.prefix) {
                    warnings.push(ConfigWarning::LinkOutsidePrefix {
                        prefix: entry.prefix.clone(),
                        path: link.path.clone(),
                    });
                }
                if !seen.insert(link.path.as_str()) {
                    warnings.push(ConfigWarning::RepeatedLink {
                        prefix: entry.prefix.clone(),
                        path: link.path.clone(),
                    });
                }
            }
        }

        warnings
    }

    fn find(&self, path: &str) -> Option<&SidebarEntry> {
        let entry = self
            .entries
            .iter()
            .find(|entry| path.starts_with(&entry.prefix));
        tracing::debug!(
            path,
            prefix = entry.map(|e| e.prefix.as_str()),
            "Resolved sidebar"
        );
        entry
    }
}

/// Resolve the sidebar for `path` against `table`.
///
/// Picks the longest key of `table` that is a literal, case-sensitive prefix
/// of `path`. A path outside every prefix gets an empty sidebar.
#[must_use]
pub fn resolve_sidebar<'a>(path: &str, table: &'a SidebarTable) -> &'a [SidebarGroup] {
    table.resolve(path)
}

fn validate_group(prefix: &str, group: &SidebarGroup) -> Result<(), NavError> {
    if group.title.trim().is_empty() {
        return Err(NavError::EmptyField(format!("sidebar {prefix} group title")));
    }

    let mut paths = HashSet::new();
    for link in &group.items {
        if link.label.trim().is_empty() {
            return Err(NavError::EmptyField(format!(
                "sidebar {prefix} group {:?} link label",
                group.title
            )));
        }
        if link.path.trim().is_empty() {
            return Err(NavError::EmptyField(format!(
                "sidebar {prefix} group {:?} link path",
                group.title
            )));
        }
        if !paths.insert(link.path.as_str()) {
            return Err(NavError::DuplicateSidebarLink {
                prefix: prefix.to_owned(),
                group: group.title.clone(),
                path: link.path.clone(),
            });
        }
    }

    Ok(())
}
