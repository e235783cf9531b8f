// =============================================================================
// FloodWatch Web - 404 Not Found Page
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::Layout;

/// 404 Not Found page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <Layout active="">
            <div class="page page-not-found">
                <div class="not-found-content">
                    <span class="not-found-code">"404"</span>
                    <h1>"Page Not Found"</h1>
                    <p>"Only the report review is available on this dashboard."</p>
                    <a href="/reports" class="btn btn-primary">
                        "Go to User Reports"
                    </a>
                </div>
            </div>
        </Layout>
    }
}
