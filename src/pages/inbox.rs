use leptos::prelude::*;

#[component]
pub fn InboxPage() -> impl IntoView {
    view! {
        <div class="page inbox-page">
            <h2>"Inbox"</h2>
            <p class="page-description">"Incoming messages land here."</p>
        </div>
    }
}
