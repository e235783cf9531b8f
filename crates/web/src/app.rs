// =============================================================================
// FloodWatch Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// 3. Router Configuration
// =============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::{NotFoundPage, ReportsPage};
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component with routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppState::new());

    view! {
        <Title formatter=|text: String| format!("{text} - Flood Monitor") />
        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=ReportsPage />
                <Route path=path!("/reports") view=ReportsPage />
            </Routes>
        </Router>
    }
}
