use leptos::prelude::*;

/// Glyphs available to sidebar entries. The sidebar treats these as opaque;
/// only this module knows how a glyph is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    PanelsTopLeft,
    Inbox,
    Receipt,
    File,
    Send,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::PanelsTopLeft => "\u{25A4}",
            Icon::Inbox => "\u{1F4E5}",
            Icon::Receipt => "\u{1F9FE}",
            Icon::File => "\u{1F4C4}",
            Icon::Send => "\u{1F4E4}",
        }
    }
}

#[component]
pub fn IconGlyph(icon: Icon) -> impl IntoView {
    view! { <span class="nav-icon" aria-hidden="true">{icon.glyph()}</span> }
}
