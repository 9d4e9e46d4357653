use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="page dashboard-page">
            <h2>"Dashboard"</h2>
            <p class="page-description">"Overview of your inbox, invoices, and billing at a glance."</p>

            <div class="card-grid">
                <div class="card">
                    <h3>"Inbox"</h3>
                    <p>"Catch up on unread messages"</p>
                    <a href="/dashboard/inbox" class="btn btn-primary">"Open Inbox"</a>
                </div>
                <div class="card">
                    <h3>"Invoices"</h3>
                    <p>"Review, add, and edit invoices"</p>
                    <a href="/dashboard/invoice/list-preview" class="btn btn-primary">"View Invoices"</a>
                </div>
                <div class="card">
                    <h3>"Billing"</h3>
                    <p>"Manage your plan and payment details"</p>
                    <a href="/dashboard/billing" class="btn btn-primary">"Go to Billing"</a>
                </div>
            </div>
        </div>
    }
}
