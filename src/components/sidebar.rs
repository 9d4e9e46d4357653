//! Sidebar renderer.
//!
//! Maps the static list from [`sidebar_items`] to the rendered menu, one
//! node per entry in list order. Two axes of variation: collapsed vs.
//! expanded (icon-only vs. full rows) and desktop vs. mobile (padding only).
//! Active-state styling comes from the route variant strategy in
//! [`crate::navigation::variant`]; the renderer itself never inspects the
//! pathname for direct links.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::icon::IconGlyph;
use crate::components::separator::Separator;
use crate::components::tooltip::Tooltip;
use crate::layout::SidebarContext;
use crate::navigation::sidebar_items::{sidebar_items, LinkVariant, NavChild, NavItem, SidebarEntry};
use crate::navigation::variant::{group_is_active, initials, use_route_variant};

/// What a list entry renders as, given the collapse mode. Exactly one
/// rendered node per entry: collapsing swaps a header's heading for a
/// divider and an item's row for an icon button, it never drops the slot.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedEntry {
    Heading { heading: &'static str },
    Divider,
    IconEntry(NavItem),
    RowEntry(NavItem),
}

pub fn rendered_entry(entry: SidebarEntry, collapsed: bool) -> RenderedEntry {
    match entry {
        SidebarEntry::Header { heading } => {
            if collapsed {
                RenderedEntry::Divider
            } else {
                RenderedEntry::Heading { heading }
            }
        }
        SidebarEntry::Item(item) => {
            if collapsed {
                RenderedEntry::IconEntry(item)
            } else {
                RenderedEntry::RowEntry(item)
            }
        }
    }
}

#[component]
fn SidebarHeading(heading: &'static str, is_mobile_sidebar: bool) -> impl IntoView {
    view! {
        <h4 class="sidebar-heading" class:mobile=is_mobile_sidebar>{heading}</h4>
    }
}

/// One nested link inside an expandable group. Collapsed mode has no icon to
/// fall back on at this depth, so it renders the title's initials instead.
#[component]
fn SidebarChildLink(child: NavChild, #[prop(optional)] is_collapsed: bool) -> impl IntoView {
    let get_variant = use_route_variant();
    let href = child.route.unwrap_or("#");
    let route = child.route;

    if is_collapsed {
        let abbrev = initials(child.title);
        view! {
            <Tooltip title=child.title label=child.label.map(str::to_string)>
                <a
                    href=href
                    class=move || format!("{} icon-only", get_variant(route).css_class())
                >
                    <span class="nav-initials">{abbrev}</span>
                    <span class="sr-only">{child.title}</span>
                </a>
            </Tooltip>
        }
        .into_any()
    } else {
        view! {
            <a
                href=href
                class=move || format!("{} nav-child", get_variant(route).css_class())
            >
                <span class="nav-marker" aria-hidden="true">"\u{25CB}"</span>
                <span class="nav-title">{child.title}</span>
            </a>
        }
        .into_any()
    }
}

/// An expandable group. The header is a ghost button that picks up a
/// highlighted background whenever the current path contains any child
/// route; expansion itself is purely user-toggled accordion state and is
/// never derived from the route.
#[component]
fn SidebarItemWithChildren(
    item: NavItem,
    #[prop(optional)] is_collapsed: bool,
    open_group: RwSignal<Option<String>>,
) -> impl IntoView {
    let NavItem {
        title,
        icon,
        label,
        children,
        ..
    } = item;
    let children = children.unwrap_or_default();

    let pathname = use_location().pathname;
    let active_children = children.clone();
    let is_active = move || group_is_active(&pathname.get(), &active_children);

    let is_open = move || open_group.get().as_deref() == Some(title);
    let toggle = move |_| {
        open_group.update(|open| {
            *open = if open.as_deref() == Some(title) {
                None
            } else {
                Some(title.to_string())
            };
        });
    };

    let trigger = if is_collapsed {
        view! {
            <Tooltip title=title label=label.map(str::to_string)>
                <IconGlyph icon />
                <span class="sr-only">{title}</span>
            </Tooltip>
        }
        .into_any()
    } else {
        view! {
            <span class="nav-row">
                <IconGlyph icon />
                <span class="nav-title">{title}</span>
                {label.map(|label| view! { <span class="nav-label">{label}</span> })}
                <span class="nav-chevron" aria-hidden="true">"\u{25BE}"</span>
            </span>
        }
        .into_any()
    };

    view! {
        <div class="nav-group">
            <button
                class="nav-link variant-ghost nav-group-trigger"
                class:icon-only=is_collapsed
                class:active=is_active
                class:open=is_open
                aria-expanded=move || if is_open() { "true" } else { "false" }
                on:click=toggle
            >
                {trigger}
            </button>
            <Show when=is_open>
                <div class="nav-group-children">
                    {children
                        .iter()
                        .map(|child| view! { <SidebarChildLink child=*child is_collapsed /> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

/// Icon-only rendering of a top-level entry; the title moves into an
/// accessibility-only span and a tooltip.
#[component]
fn CollapsedEntry(item: NavItem, open_group: RwSignal<Option<String>>) -> impl IntoView {
    if item.children.is_some() {
        return view! { <SidebarItemWithChildren item is_collapsed=true open_group /> }.into_any();
    }

    let get_variant = use_route_variant();
    let href = item.route.unwrap_or("#");
    let route = item.route;

    view! {
        <Tooltip title=item.title label=item.label.map(str::to_string)>
            <a
                href=href
                class=move || format!("{} icon-only", get_variant(route).css_class())
            >
                <IconGlyph icon=item.icon />
                <span class="sr-only">{item.title}</span>
            </a>
        </Tooltip>
    }
    .into_any()
}

#[component]
fn ExpandedEntry(item: NavItem, open_group: RwSignal<Option<String>>) -> impl IntoView {
    if item.children.is_some() {
        return view! { <SidebarItemWithChildren item open_group /> }.into_any();
    }

    let get_variant = use_route_variant();
    let href = item.route.unwrap_or("#");
    let route = item.route;
    // Static emphasis hint for the badge, separate from the live variant.
    let emphasized = item.variant == Some(LinkVariant::Default);

    view! {
        <a href=href class=move || get_variant(route).css_class().to_string()>
            <IconGlyph icon=item.icon />
            <span class="nav-title">{item.title}</span>
            {item
                .label
                .map(|label| view! { <span class="nav-label" class:emphasis=emphasized>{label}</span> })}
        </a>
    }
    .into_any()
}

/// The sidebar menu. Entries render in the exact order of the static list;
/// collapsing swaps headings for separators and rows for icon buttons, it
/// never drops an entry.
#[component]
pub fn Sidebar(
    #[prop(into)] is_collapsed: Signal<bool>,
    #[prop(optional)] is_mobile_sidebar: bool,
) -> impl IntoView {
    // Single-open accordion: holds the title of the one expanded group.
    let open_group = RwSignal::new(None::<String>);

    view! {
        <nav
            class="sidebar-nav"
            class:mobile=is_mobile_sidebar
            data-collapsed=move || is_collapsed.get().to_string()
        >
            <style>{include_str!("sidebar.css")}</style>
            {move || {
                let collapsed = is_collapsed.get();
                sidebar_items()
                    .into_iter()
                    .map(|entry| match rendered_entry(entry, collapsed) {
                        RenderedEntry::Divider => view! { <Separator /> }.into_any(),
                        RenderedEntry::Heading { heading } => {
                            view! { <SidebarHeading heading is_mobile_sidebar /> }.into_any()
                        }
                        RenderedEntry::IconEntry(item) => {
                            view! { <CollapsedEntry item open_group /> }.into_any()
                        }
                        RenderedEntry::RowEntry(item) => {
                            view! { <ExpandedEntry item open_group /> }.into_any()
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

/// Collapse/expand button for the sidebar chrome. Reads the shared
/// [`SidebarContext`] rather than owning any state.
#[component]
pub fn SidebarToggle() -> impl IntoView {
    let ctx = expect_context::<SidebarContext>();
    let toggle = move |_| ctx.set_collapsed.update(|collapsed| *collapsed = !*collapsed);

    view! {
        <button class="sidebar-toggle" on:click=toggle aria-label="Toggle sidebar">
            {move || if ctx.collapsed.get() { "\u{00BB}" } else { "\u{00AB}" }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsing_degrades_headers_to_dividers() {
        for entry in sidebar_items() {
            let SidebarEntry::Header { heading } = entry else {
                continue;
            };
            assert_eq!(
                rendered_entry(SidebarEntry::Header { heading }, true),
                RenderedEntry::Divider
            );
            assert_eq!(
                rendered_entry(SidebarEntry::Header { heading }, false),
                RenderedEntry::Heading { heading }
            );
        }
    }

    #[test]
    fn items_swap_rows_for_icons_when_collapsed() {
        for entry in sidebar_items() {
            let SidebarEntry::Item(item) = entry else {
                continue;
            };
            assert_eq!(
                rendered_entry(SidebarEntry::Item(item.clone()), true),
                RenderedEntry::IconEntry(item.clone())
            );
            assert_eq!(
                rendered_entry(SidebarEntry::Item(item.clone()), false),
                RenderedEntry::RowEntry(item)
            );
        }
    }

    // One rendered slot per entry, in list order, in both modes.
    #[test]
    fn every_entry_keeps_its_slot_in_both_modes() {
        let entries = sidebar_items();
        for collapsed in [false, true] {
            let rendered: Vec<RenderedEntry> = entries
                .iter()
                .cloned()
                .map(|entry| rendered_entry(entry, collapsed))
                .collect();
            assert_eq!(rendered.len(), entries.len());
            for (entry, rendered) in entries.iter().zip(&rendered) {
                match (entry, rendered) {
                    (SidebarEntry::Header { .. }, RenderedEntry::Divider)
                    | (SidebarEntry::Header { .. }, RenderedEntry::Heading { .. })
                    | (SidebarEntry::Item(_), RenderedEntry::IconEntry(_))
                    | (SidebarEntry::Item(_), RenderedEntry::RowEntry(_)) => {}
                    other => panic!("entry changed kind: {other:?}"),
                }
            }
        }
    }
}
