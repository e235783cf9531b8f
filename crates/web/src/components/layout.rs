// =============================================================================
// FloodWatch Web - Layout Components
// =============================================================================
// Table of Contents:
// 1. Layout (Main App Shell)
// 2. Sidebar
// 3. Top Bar
// =============================================================================

use leptos::prelude::*;

use crate::state::AppState;

/// Sidebar entries: (label, href, icon).
const NAVIGATION: [(&str, &str, &str); 1] = [("User Reports", "/reports", "📄")];

// -----------------------------------------------------------------------------
// 1. Layout (Main App Shell)
// -----------------------------------------------------------------------------

/// Main application layout with sidebar, top bar, and content area.
#[component]
pub fn Layout(
    /// Href of the active sidebar entry.
    #[prop(into)]
    active: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="layout">
            <Sidebar active=active />
            <div class="layout-body">
                <TopBar />
                <main class="layout-content">
                    {children()}
                </main>
            </div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Sidebar
// -----------------------------------------------------------------------------

/// Left sidebar navigation.
#[component]
pub fn Sidebar(active: String) -> impl IntoView {
    let links = NAVIGATION
        .iter()
        .map(|(label, href, icon)| {
            let class = if *href == active {
                "sidebar-link active"
            } else {
                "sidebar-link"
            };
            view! {
                <a href=*href class=class>
                    <span class="sidebar-icon">{*icon}</span>
                    <span class="sidebar-text">{*label}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <span class="logo-icon">"💧"</span>
                <div>
                    <h1 class="logo-text">"Flood Monitor"</h1>
                    <p class="logo-subtitle">"Smart City Admin"</p>
                </div>
            </div>
            <nav class="sidebar-nav">{links}</nav>
            <div class="sidebar-footer">
                {format!("Smart City Project v{}", env!("CARGO_PKG_VERSION"))}
            </div>
        </aside>
    }
}

// -----------------------------------------------------------------------------
// 3. Top Bar
// -----------------------------------------------------------------------------

/// Header strip naming the project the dashboard reads from.
#[component]
pub fn TopBar() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let source = format!(
        "{} / {}",
        app_state.store.project_id, app_state.store.collection
    );

    view! {
        <header class="topbar">
            <span class="topbar-title">"Flood Monitoring Dashboard"</span>
            <span class="topbar-source" title="Report store">{source}</span>
        </header>
    }
}
