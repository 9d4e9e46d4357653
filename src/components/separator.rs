use leptos::prelude::*;

/// Plain horizontal divider. Collapsed mode renders one in place of each
/// section heading so the vertical rhythm of the list is preserved.
#[component]
pub fn Separator() -> impl IntoView {
    view! { <hr class="sidebar-separator" /> }
}
