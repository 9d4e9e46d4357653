use leptos::prelude::*;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="page unauthorized-page">
            <h2>"Unauthorized"</h2>
            <p class="page-description">"You do not have access to this page."</p>
            <a href="/dashboard" class="btn btn-primary">"Back to Dashboard"</a>
        </div>
    }
}
