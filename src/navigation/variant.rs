//! Route-to-active-state resolution.
//!
//! The rules live here as plain functions so they can be unit tested on the
//! host target; the sidebar components bind them to the router's live
//! pathname through [`use_route_variant`].

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::navigation::sidebar_items::{LinkVariant, NavChild};

/// Resolve the variant for a direct link: `Default` when `route` is an exact
/// match of the current path or a `/`-boundary prefix of it, `Ghost`
/// otherwise. Absent and `"#"` routes are inert and never match.
pub fn variant_for_route(current: &str, route: Option<&str>) -> LinkVariant {
    let Some(route) = route else {
        return LinkVariant::Ghost;
    };
    if route.is_empty() || route == "#" {
        return LinkVariant::Ghost;
    }
    let matches = current == route
        || (current.starts_with(route) && current[route.len()..].starts_with('/'));
    if matches {
        LinkVariant::Default
    } else {
        LinkVariant::Ghost
    }
}

/// A group header is highlighted when the current path contains any child's
/// route as a substring. Deliberately substring, not prefix: this mirrors the
/// historical behavior, over-matches included (see the tests).
pub fn group_is_active(current: &str, children: &[NavChild]) -> bool {
    children
        .iter()
        .filter_map(|child| child.route)
        .any(|route| !route.is_empty() && current.contains(route))
}

/// Deterministic abbreviation for children in collapsed mode, which have no
/// icon of their own: the first letter of each word, uppercased.
pub fn initials(title: &str) -> String {
    title
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Bind [`variant_for_route`] to the router. The returned closure is the
/// strategy the sidebar components consult per link, so none of them touch
/// the router directly.
pub fn use_route_variant() -> impl Fn(Option<&str>) -> LinkVariant + Copy {
    let pathname = use_location().pathname;
    move |route| variant_for_route(&pathname.get(), route)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child(route: &'static str) -> NavChild {
        NavChild {
            title: "child",
            route: Some(route),
            label: None,
        }
    }

    #[test]
    fn exact_route_is_default() {
        assert_eq!(
            variant_for_route("/dashboard/drafts", Some("/dashboard/drafts")),
            LinkVariant::Default
        );
    }

    #[test]
    fn boundary_prefix_is_default() {
        assert_eq!(
            variant_for_route("/dashboard/drafts/2024", Some("/dashboard/drafts")),
            LinkVariant::Default
        );
    }

    #[test]
    fn non_boundary_prefix_is_ghost() {
        assert_eq!(
            variant_for_route("/dashboard/drafts-old", Some("/dashboard/drafts")),
            LinkVariant::Ghost
        );
    }

    #[test]
    fn unrelated_route_is_ghost() {
        assert_eq!(
            variant_for_route("/dashboard/invoice/view", Some("/dashboard/drafts")),
            LinkVariant::Ghost
        );
    }

    #[test]
    fn inert_routes_never_match() {
        assert_eq!(variant_for_route("/dashboard", None), LinkVariant::Ghost);
        assert_eq!(variant_for_route("#", Some("#")), LinkVariant::Ghost);
        assert_eq!(variant_for_route("/x", Some("")), LinkVariant::Ghost);
    }

    #[test]
    fn group_active_when_any_child_route_contained() {
        let children = [
            child("/dashboard/invoice/list-preview"),
            child("/dashboard/invoice/view"),
            child("/dashboard/invoice/add"),
            child("/dashboard/invoice/edit"),
        ];
        assert!(group_is_active("/dashboard/invoice/view", &children));
        assert!(!group_is_active("/dashboard/drafts", &children));
    }

    // Substring matching over-matches on purpose; this pins the historical
    // behavior so a change to it is a conscious one.
    #[test]
    fn group_active_substring_over_match() {
        let children = [child("/dashboard/invoice")];
        assert!(group_is_active("/dashboard/invoice-archive", &children));
    }

    #[test]
    fn group_without_routed_children_is_never_active() {
        let unrouted = [NavChild {
            title: "child",
            route: None,
            label: None,
        }];
        assert!(!group_is_active("/dashboard", &unrouted));
        assert!(!group_is_active("/dashboard", &[]));
    }

    #[test]
    fn initials_abbreviate_each_word() {
        assert_eq!(initials("Unauthorized"), "U");
        assert_eq!(initials("List Preview"), "LP");
        assert_eq!(initials("  spaced   out "), "SO");
        assert_eq!(initials(""), "");
    }
}
