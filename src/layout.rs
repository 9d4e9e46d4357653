use leptos::prelude::*;

/// Collapse state of the sidebar, provided once from `App` so any component
/// in the tree can read or flip it.
#[derive(Clone, Copy)]
pub struct SidebarContext {
    pub collapsed: ReadSignal<bool>,
    pub set_collapsed: WriteSignal<bool>,
}

/// Viewports narrower than this get the mobile sidebar treatment.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Mirror the collapse flag onto a `data-sidebar` attribute on `<html>` so
/// page-level CSS can shift the content area without threading the signal
/// through every component.
pub fn apply_sidebar_mode(collapsed: bool) {
    if let Some(window) = web_sys::window() {
        if let Some(doc) = window.document() {
            if let Some(html) = doc.document_element() {
                let mode = if collapsed { "collapsed" } else { "expanded" };
                let _ = html.set_attribute("data-sidebar", mode);
            }
        }
    }
}

/// Whether the viewport is below the mobile breakpoint, read once at mount.
pub fn viewport_is_mobile() -> bool {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .is_some_and(|width| width < MOBILE_BREAKPOINT_PX)
}
