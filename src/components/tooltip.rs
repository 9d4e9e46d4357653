use leptos::prelude::*;

/// Hover-reveal affordance for icon-only links in the collapsed sidebar.
/// Shows the full title, plus the badge text when the entry has one, to the
/// right of the trigger. Purely CSS-driven; no state of its own.
#[component]
pub fn Tooltip(
    /// Full title revealed on hover.
    #[prop(into)]
    title: String,
    /// Optional badge text shown after the title.
    #[prop(optional_no_strip)]
    label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="tooltip-host">
            {children()}
            <div class="tooltip-content" role="tooltip">
                <span>{title}</span>
                {label.map(|label| view! { <span class="tooltip-label">{label}</span> })}
            </div>
        </div>
    }
}
