use leptos::prelude::*;

#[component]
pub fn BillingPage() -> impl IntoView {
    view! {
        <div class="page billing-page">
            <h2>"Billing"</h2>
            <p class="page-description">"Plan, payment methods, and receipts."</p>
        </div>
    }
}
