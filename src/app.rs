use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::sidebar::{Sidebar, SidebarToggle};
use crate::layout::{apply_sidebar_mode, viewport_is_mobile, SidebarContext};
use crate::pages::billing::BillingPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::drafts::DraftsPage;
use crate::pages::inbox::InboxPage;
use crate::pages::invoice::{InvoiceAddPage, InvoiceEditPage, InvoiceListPage, InvoiceViewPage};
use crate::pages::sent::SentPage;
use crate::pages::unauthorized::UnauthorizedPage;

#[component]
pub fn App() -> impl IntoView {
    let (collapsed, set_collapsed) = signal(false);
    provide_context(SidebarContext {
        collapsed,
        set_collapsed,
    });

    // Mirror collapse state onto the document whenever it changes.
    Effect::new(move |_| {
        apply_sidebar_mode(collapsed.get());
    });

    let is_mobile = viewport_is_mobile();

    view! {
        <Router>
            <div class="app-layout">
                <aside class="sidebar" class:collapsed=move || collapsed.get()>
                    <div class="sidebar-chrome">
                        <h1 class="sidebar-title">
                            {move || if collapsed.get() { "PD" } else { "PaperDash" }}
                        </h1>
                        <SidebarToggle />
                    </div>
                    <Sidebar is_collapsed=collapsed is_mobile_sidebar=is_mobile />
                </aside>
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/dashboard") view=DashboardPage />
                        <Route path=path!("/dashboard/inbox") view=InboxPage />
                        <Route path=path!("/dashboard/invoice/list-preview") view=InvoiceListPage />
                        <Route path=path!("/dashboard/invoice/view") view=InvoiceViewPage />
                        <Route path=path!("/dashboard/invoice/add") view=InvoiceAddPage />
                        <Route path=path!("/dashboard/invoice/edit") view=InvoiceEditPage />
                        <Route path=path!("/dashboard/auth/unauthorized") view=UnauthorizedPage />
                        <Route path=path!("/dashboard/drafts") view=DraftsPage />
                        <Route path=path!("/dashboard/sent") view=SentPage />
                        <Route path=path!("/dashboard/billing") view=BillingPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
