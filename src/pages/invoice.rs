//! The four invoice views reachable from the Invoice group in the sidebar.

use leptos::prelude::*;

#[component]
pub fn InvoiceListPage() -> impl IntoView {
    view! {
        <div class="page invoice-page">
            <h2>"Invoices"</h2>
            <p class="page-description">"All invoices, newest first."</p>
        </div>
    }
}

#[component]
pub fn InvoiceViewPage() -> impl IntoView {
    view! {
        <div class="page invoice-page">
            <h2>"Invoice"</h2>
            <p class="page-description">"A single invoice in detail."</p>
        </div>
    }
}

#[component]
pub fn InvoiceAddPage() -> impl IntoView {
    view! {
        <div class="page invoice-page">
            <h2>"New Invoice"</h2>
            <p class="page-description">"Draft a new invoice."</p>
        </div>
    }
}

#[component]
pub fn InvoiceEditPage() -> impl IntoView {
    view! {
        <div class="page invoice-page">
            <h2>"Edit Invoice"</h2>
            <p class="page-description">"Amend an existing invoice."</p>
        </div>
    }
}
