use leptos::prelude::*;

#[component]
pub fn DraftsPage() -> impl IntoView {
    view! {
        <div class="page drafts-page">
            <h2>"Drafts"</h2>
            <p class="page-description">"Messages you started but have not sent."</p>
        </div>
    }
}
