//! Static sidebar menu definition.
//!
//! The list returned by [`sidebar_items`] is the single source of truth for
//! the sidebar: entries render top to bottom in exactly this order. It is
//! compiled-in configuration and never mutated at runtime; the only input
//! that varies between renders is the current route.

use crate::components::icon::Icon;

/// Visual emphasis of a sidebar link: `Default` marks the entry matching the
/// current route, `Ghost` everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkVariant {
    Default,
    Ghost,
}

impl LinkVariant {
    pub fn css_class(self) -> &'static str {
        match self {
            LinkVariant::Default => "nav-link variant-default",
            LinkVariant::Ghost => "nav-link variant-ghost",
        }
    }
}

/// A nested entry under a grouping [`NavItem`]. Children carry no icon of
/// their own; collapsed mode renders their computed initials instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavChild {
    pub title: &'static str,
    pub route: Option<&'static str>,
    pub label: Option<&'static str>,
}

impl NavChild {
    const fn new(title: &'static str, route: &'static str) -> Self {
        NavChild {
            title,
            route: Some(route),
            label: None,
        }
    }
}

/// A top-level menu entry. With `children` present it renders as an
/// expandable group; otherwise it is a direct link to `route`. A missing
/// route (or `"#"`) makes the link inert.
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub title: &'static str,
    pub route: Option<&'static str>,
    pub icon: Icon,
    pub label: Option<&'static str>,
    /// Static emphasis hint, independent of the route-derived variant.
    pub variant: Option<LinkVariant>,
    pub children: Option<Vec<NavChild>>,
}

impl NavItem {
    fn link(title: &'static str, route: &'static str, icon: Icon) -> Self {
        NavItem {
            title,
            route: Some(route),
            icon,
            label: None,
            variant: None,
            children: None,
        }
    }

    fn group(title: &'static str, icon: Icon, children: Vec<NavChild>) -> Self {
        NavItem {
            title,
            route: None,
            icon,
            label: None,
            variant: None,
            children: Some(children),
        }
    }
}

/// One element of the sidebar list. The discriminant is explicit so the
/// renderer never has to guess an entry's shape from its fields.
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarEntry {
    Header { heading: &'static str },
    Item(NavItem),
}

const BASE_PATH: &str = "/dashboard";

/// The full menu, in render order. Titles and headings double as identity
/// keys and must stay unique across the whole list.
pub fn sidebar_items() -> Vec<SidebarEntry> {
    vec![
        SidebarEntry::Header {
            heading: "Overview",
        },
        SidebarEntry::Item(NavItem {
            variant: Some(LinkVariant::Default),
            ..NavItem::link("Dashboard", BASE_PATH, Icon::PanelsTopLeft)
        }),
        SidebarEntry::Header {
            heading: "Apps & Pages",
        },
        SidebarEntry::Item(NavItem::link("Inbox", "/dashboard/inbox", Icon::Inbox)),
        SidebarEntry::Item(NavItem::group(
            "Invoice",
            Icon::Receipt,
            vec![
                NavChild::new("List", "/dashboard/invoice/list-preview"),
                NavChild::new("View", "/dashboard/invoice/view"),
                NavChild::new("Add", "/dashboard/invoice/add"),
                NavChild::new("Edit", "/dashboard/invoice/edit"),
            ],
        )),
        SidebarEntry::Item(NavItem::group(
            "Auth",
            Icon::Receipt,
            vec![NavChild::new("Unauthorized", "/dashboard/auth/unauthorized")],
        )),
        SidebarEntry::Item(NavItem::link("Drafts", "/dashboard/drafts", Icon::File)),
        SidebarEntry::Item(NavItem::link("Sent", "/dashboard/sent", Icon::Send)),
        SidebarEntry::Header {
            heading: "Billing",
        },
        SidebarEntry::Item(NavItem::link("Billing", "/dashboard/billing", Icon::Receipt)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_unique(keys: &[&str]) {
        let mut deduped = keys.to_vec();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), keys.len(), "duplicate key in {keys:?}");
    }

    // Headings and titles are separate key namespaces; each must be unique
    // within its own kind ("Billing" is legitimately both a heading and an
    // item title).
    #[test]
    fn titles_and_headings_are_unique() {
        let mut headings: Vec<&str> = Vec::new();
        let mut titles: Vec<&str> = Vec::new();
        for entry in sidebar_items() {
            match entry {
                SidebarEntry::Header { heading } => headings.push(heading),
                SidebarEntry::Item(item) => {
                    titles.push(item.title);
                    for child in item.children.iter().flatten() {
                        titles.push(child.title);
                    }
                }
            }
        }
        assert_unique(&headings);
        assert_unique(&titles);
    }

    #[test]
    fn list_order_is_stable() {
        let order: Vec<&str> = sidebar_items()
            .iter()
            .map(|entry| match entry {
                SidebarEntry::Header { heading } => *heading,
                SidebarEntry::Item(item) => item.title,
            })
            .collect();
        assert_eq!(
            order,
            [
                "Overview",
                "Dashboard",
                "Apps & Pages",
                "Inbox",
                "Invoice",
                "Auth",
                "Drafts",
                "Sent",
                "Billing",
                "Billing",
            ]
        );
    }

    #[test]
    fn definition_is_deterministic() {
        assert_eq!(sidebar_items(), sidebar_items());
    }

    #[test]
    fn routes_are_absolute_paths() {
        for entry in sidebar_items() {
            let SidebarEntry::Item(item) = entry else {
                continue;
            };
            let routes = item
                .route
                .into_iter()
                .chain(item.children.iter().flatten().filter_map(|c| c.route));
            for route in routes {
                assert!(
                    route == "#" || route.starts_with('/'),
                    "{route} is neither inert nor absolute"
                );
            }
        }
    }
}
