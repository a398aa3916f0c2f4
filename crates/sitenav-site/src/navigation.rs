//! Per-page navigation context.
//!
//! Bundles everything a page template needs from the site configuration:
//! the global top navigation, the resolved sidebar, the active top-level
//! entry and previous/next links for sequential reading.

use serde::Serialize;

use crate::menu::MenuItem;
use crate::sidebar::{SidebarGroup, SidebarLink};

/// Navigation context for one page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageNavigation<'a> {
    /// Global top navigation, identical for every page.
    pub top_nav: &'a [MenuItem],
    /// Sidebar groups for this page (empty outside every prefix).
    pub sidebar: &'a [SidebarGroup],
    /// Sidebar prefix that matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<&'a str>,
    /// Label of the active top-level entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_nav: Option<&'a str>,
    /// Previous link in sidebar order.
    pub prev: Option<&'a SidebarLink>,
    /// Next link in sidebar order.
    pub next: Option<&'a SidebarLink>,
}

/// Strip a trailing `.html` or `.md` extension so source and output paths
/// compare equal.
pub(crate) fn normalize_path(path: &str) -> &str {
    path.strip_suffix(".html")
        .or_else(|| path.strip_suffix(".md"))
        .unwrap_or(path)
}

/// Links before and after `path` when the groups are read in order.
///
/// Returns `(None, None)` if `path` is not linked from the sidebar.
pub(crate) fn adjacent_links<'a>(
    groups: &'a [SidebarGroup],
    path: &str,
) -> (Option<&'a SidebarLink>, Option<&'a SidebarLink>) {
    let links: Vec<&SidebarLink> = groups.iter().flat_map(|group| &group.items).collect();
    let current = normalize_path(path);

    let Some(idx) = links
        .iter()
        .position(|link| normalize_path(&link.path) == current)
    else {
        return (None, None);
    };

    let prev = idx.checked_sub(1).map(|i| links[i]);
    let next = links.get(idx + 1).copied();
    (prev, next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn groups() -> Vec<SidebarGroup> {
        vec![
            SidebarGroup::new(
                "Basics",
                vec![
                    SidebarLink::new("Variables", "/frontend/javascript/variables"),
                    SidebarLink::new("Closures", "/frontend/javascript/closures"),
                ],
            ),
            SidebarGroup::new(
                "Advanced",
                vec![SidebarLink::new("Async", "/frontend/javascript/async")],
            ),
        ]
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/guide/intro.html"), "/guide/intro");
        assert_eq!(normalize_path("/guide/intro.md"), "/guide/intro");
        assert_eq!(normalize_path("/guide/"), "/guide/");
    }

    #[test]
    fn test_adjacent_links_middle() {
        let groups = groups();
        let (prev, next) = adjacent_links(&groups, "/frontend/javascript/closures");
        assert_eq!(prev.map(|l| l.label.as_str()), Some("Variables"));
        assert_eq!(next.map(|l| l.label.as_str()), Some("Async"));
    }

    #[test]
    fn test_adjacent_links_cross_group_boundary() {
        let groups = groups();
        let (prev, next) = adjacent_links(&groups, "/frontend/javascript/async.html");
        assert_eq!(prev.map(|l| l.label.as_str()), Some("Closures"));
        assert_eq!(next, None);
    }

    #[test]
    fn test_adjacent_links_first_page() {
        let groups = groups();
        let (prev, next) = adjacent_links(&groups, "/frontend/javascript/variables");
        assert_eq!(prev, None);
        assert_eq!(next.map(|l| l.path.as_str()), Some("/frontend/javascript/closures"));
    }

    #[test]
    fn test_adjacent_links_unknown_page() {
        let groups = groups();
        assert_eq!(adjacent_links(&groups, "/frontend/javascript/"), (None, None));
        assert_eq!(adjacent_links(&[], "/anything"), (None, None));
    }
}
