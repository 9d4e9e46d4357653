use leptos::prelude::*;

#[component]
pub fn SentPage() -> impl IntoView {
    view! {
        <div class="page sent-page">
            <h2>"Sent"</h2>
            <p class="page-description">"Everything that has left your outbox."</p>
        </div>
    }
}
