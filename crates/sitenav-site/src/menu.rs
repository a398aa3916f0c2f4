//! Top navigation menu.

use serde::Serialize;
use sitenav_config::MenuItemConfig;

use crate::error::NavError;
use crate::navigation::normalize_path;

/// Top navigation entry.
///
/// Serializes untagged, so a leaf renders as `{label, link}` and a group as
/// `{label, children}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MenuItem {
    /// Leaf entry pointing at a page or external URL.
    Link {
        /// Display label.
        label: String,
        /// Link target.
        link: String,
        /// Path prefix that marks this entry active instead of `link`.
        #[serde(rename = "activeMatch", skip_serializing_if = "Option::is_none")]
        active_match: Option<String>,
    },
    /// Dropdown group with at least one child.
    Group {
        /// Display label.
        label: String,
        /// Nested entries.
        children: Vec<MenuItem>,
        /// Path prefix that marks the whole group active, checked before
        /// the children.
        #[serde(rename = "activeMatch", skip_serializing_if = "Option::is_none")]
        active_match: Option<String>,
    },
}

impl MenuItem {
    /// Create a leaf entry.
    pub fn link(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            link: link.into(),
            active_match: None,
        }
    }

    /// Create a group entry.
    pub fn group(label: impl Into<String>, children: Vec<MenuItem>) -> Self {
        Self::Group {
            label: label.into(),
            children,
            active_match: None,
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Link { label, .. } | Self::Group { label, .. } => label,
        }
    }

    /// Link target, `None` for groups.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Link { link, .. } => Some(link),
            Self::Group { .. } => None,
        }
    }

    /// Nested entries, empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[MenuItem] {
        match self {
            Self::Link { .. } => &[],
            Self::Group { children, .. } => children,
        }
    }

    /// Convert an on-disk entry, rejecting entries that are both or neither
    /// a link and a group.
    ///
    /// `field` locates the entry in error messages.
    pub(crate) fn from_config(config: MenuItemConfig, field: &str) -> Result<Self, NavError> {
        if config.label.trim().is_empty() {
            return Err(NavError::EmptyField(format!("{field}.label")));
        }

        match (config.link, config.children.is_empty()) {
            (Some(_), false) => Err(NavError::MenuItemLinkAndChildren {
                field: field.to_owned(),
                label: config.label,
            }),
            (None, true) => Err(NavError::MenuItemEmpty {
                field: field.to_owned(),
                label: config.label,
            }),
            (Some(link), true) => {
                if link.trim().is_empty() {
                    return Err(NavError::EmptyField(format!("{field}.link")));
                }
                Ok(Self::Link {
                    label: config.label,
                    link,
                    active_match: config.active_match,
                })
            }
            (None, false) => {
                let children = config
                    .children
                    .into_iter()
                    .enumerate()
                    .map(|(i, child)| Self::from_config(child, &format!("{field}.children[{i}]")))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self::Group {
                    label: config.label,
                    children,
                    active_match: config.active_match,
                })
            }
        }
    }

    /// Length of the longest pattern of this entry that matches `path`.
    ///
    /// Groups match through their own `active_match` first, then through
    /// their children.
    pub(crate) fn match_len(&self, path: &str) -> Option<usize> {
        match self {
            Self::Link {
                link, active_match, ..
            } => pattern_len(active_match.as_deref().unwrap_or(link), path),
            Self::Group {
                children,
                active_match,
                ..
            } => active_match
                .as_deref()
                .and_then(|pattern| pattern_len(pattern, path))
                .or_else(|| children.iter().filter_map(|child| child.match_len(path)).max()),
        }
    }
}

fn pattern_len(pattern: &str, path: &str) -> Option<usize> {
    link_matches(pattern, path).then(|| normalize_path(pattern).len())
}

/// Whether a menu pattern covers `path`.
///
/// Matches stop at segment boundaries: `/frontend` covers `/frontend` and
/// `/frontend/x` but not `/frontend-archive/`. The root link only matches
/// the root page itself.
fn link_matches(pattern: &str, path: &str) -> bool {
    let pattern = normalize_path(pattern);
    let path = normalize_path(path);
    if pattern.is_empty() {
        return false;
    }
    if pattern == "/" {
        return path == "/";
    }
    match path.strip_prefix(pattern) {
        Some(rest) => rest.is_empty() || pattern.ends_with('/') || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn leaf(label: &str, link: &str) -> MenuItemConfig {
        MenuItemConfig {
            label: label.to_owned(),
            link: Some(link.to_owned()),
            children: Vec::new(),
            active_match: None,
        }
    }

    #[test]
    fn test_from_config_leaf() {
        let item = MenuItem::from_config(leaf("Home", "/"), "top_nav[0]").unwrap();
        assert_eq!(item, MenuItem::link("Home", "/"));
        assert_eq!(item.label(), "Home");
        assert_eq!(item.target(), Some("/"));
        assert!(item.children().is_empty());
    }

    #[test]
    fn test_from_config_group() {
        let config = MenuItemConfig {
            label: "Frontend".to_owned(),
            link: None,
            children: vec![leaf("JavaScript", "/frontend/javascript/")],
            active_match: None,
        };

        let item = MenuItem::from_config(config, "top_nav[1]").unwrap();

        assert_eq!(
            item,
            MenuItem::group(
                "Frontend",
                vec![MenuItem::link("JavaScript", "/frontend/javascript/")]
            )
        );
        assert_eq!(item.target(), None);
    }

    #[test]
    fn test_from_config_rejects_link_and_children() {
        let config = MenuItemConfig {
            children: vec![leaf("JavaScript", "/frontend/javascript/")],
            ..leaf("Frontend", "/frontend/")
        };

        let err = MenuItem::from_config(config, "top_nav[1]").unwrap_err();

        assert!(matches!(
            err,
            NavError::MenuItemLinkAndChildren { ref field, ref label }
                if field == "top_nav[1]" && label == "Frontend"
        ));
    }

    #[test]
    fn test_from_config_rejects_neither_link_nor_children() {
        let config = MenuItemConfig {
            label: "Empty".to_owned(),
            link: None,
            children: Vec::new(),
            active_match: None,
        };

        let err = MenuItem::from_config(config, "top_nav[2]").unwrap_err();

        assert!(matches!(err, NavError::MenuItemEmpty { .. }));
        assert!(err.to_string().contains("top_nav[2]"));
    }

    #[test]
    fn test_from_config_reports_nested_position() {
        let bad_child = MenuItemConfig {
            label: "Broken".to_owned(),
            link: None,
            children: Vec::new(),
            active_match: None,
        };
        let config = MenuItemConfig {
            label: "Frontend".to_owned(),
            link: None,
            children: vec![leaf("JavaScript", "/frontend/javascript/"), bad_child],
            active_match: None,
        };

        let err = MenuItem::from_config(config, "top_nav[1]").unwrap_err();

        assert!(
            matches!(err, NavError::MenuItemEmpty { ref field, .. } if field == "top_nav[1].children[1]")
        );
    }

    #[test]
    fn test_from_config_rejects_blank_label() {
        let err = MenuItem::from_config(leaf("  ", "/"), "top_nav[0]").unwrap_err();
        assert!(matches!(err, NavError::EmptyField(ref f) if f == "top_nav[0].label"));
    }

    #[test]
    fn test_match_len_root_only_matches_root() {
        let home = MenuItem::link("Home", "/");
        assert_eq!(home.match_len("/"), Some(1));
        assert_eq!(home.match_len("/index.html"), None);
        assert_eq!(home.match_len("/projects/"), None);
    }

    #[test]
    fn test_match_len_prefers_active_match() {
        let item = MenuItem::Link {
            label: "Notes".to_owned(),
            link: "/notes/getting-started".to_owned(),
            active_match: Some("/notes/".to_owned()),
        };
        assert_eq!(item.match_len("/notes/rust/ownership"), Some("/notes/".len()));
    }

    #[test]
    fn test_match_len_group_uses_best_child() {
        let group = MenuItem::group(
            "Frontend",
            vec![
                MenuItem::link("Frontend", "/frontend/"),
                MenuItem::link("JavaScript", "/frontend/javascript/"),
            ],
        );
        assert_eq!(
            group.match_len("/frontend/javascript/async"),
            Some("/frontend/javascript/".len())
        );
        assert_eq!(group.match_len("/projects/"), None);
    }

    #[test]
    fn test_from_config_group_keeps_active_match() {
        let config = MenuItemConfig {
            label: "Frontend".to_owned(),
            link: None,
            children: vec![leaf("JavaScript", "/frontend/javascript/")],
            active_match: Some("/frontend/".to_owned()),
        };

        let item = MenuItem::from_config(config, "top_nav[1]").unwrap();

        assert!(matches!(
            item,
            MenuItem::Group { ref active_match, .. } if active_match.as_deref() == Some("/frontend/")
        ));
        assert_eq!(item.match_len("/frontend/tooling"), Some("/frontend/".len()));
        assert_eq!(
            item.match_len("/frontend/javascript/async"),
            Some("/frontend/".len())
        );
        assert_eq!(item.match_len("/projects/"), None);
    }

    #[test]
    fn test_match_len_stops_at_segment_boundary() {
        let item = MenuItem::link("Frontend", "/frontend");
        assert_eq!(item.match_len("/frontend"), Some("/frontend".len()));
        assert_eq!(item.match_len("/frontend/tooling"), Some("/frontend".len()));
        assert_eq!(item.match_len("/frontend.html"), Some("/frontend".len()));
        assert_eq!(item.match_len("/frontend-archive/x"), None);

        let slashed = MenuItem::link("Frontend", "/frontend/");
        assert_eq!(slashed.match_len("/frontend/tooling"), Some("/frontend/".len()));
        assert_eq!(slashed.match_len("/frontend"), None);
    }

    #[test]
    fn test_external_link_never_matches() {
        let item = MenuItem::link("GitHub", "https://github.com/example");
        assert_eq!(item.match_len("/frontend/"), None);
    }

    #[test]
    fn test_serialization_shapes() {
        let group = MenuItem::group("Frontend", vec![MenuItem::link("JS", "/frontend/javascript/")]);

        let json = serde_json::to_value(&group).unwrap();

        assert_eq!(json["label"], "Frontend");
        assert!(json.get("link").is_none());
        assert_eq!(json["children"][0]["link"], "/frontend/javascript/");
        assert!(json["children"][0].get("activeMatch").is_none());
        assert!(json.get("activeMatch").is_none());
    }
}
