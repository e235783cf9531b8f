// =============================================================================
// FloodWatch Web - Common UI Components
// =============================================================================
// Table of Contents:
// 1. Card
// 2. Loading Spinner
// 3. Badges
// 4. Stat Box
// =============================================================================

use leptos::prelude::*;

use crate::reports::{ReportStatus, Severity};

// -----------------------------------------------------------------------------
// 1. Card
// -----------------------------------------------------------------------------

/// Card container component.
#[component]
pub fn Card(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("card {}", class)>
            {title.map(|t| view! {
                <div class="card-header">
                    <h3 class="card-title">{t}</h3>
                </div>
            })}
            <div class="card-body">
                {children()}
            </div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Loading Spinner
// -----------------------------------------------------------------------------

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <div class="loading-container">
            <div class="spinner"></div>
            {message.map(|m| view! { <p class="loading-message">{m}</p> })}
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. Badges
// -----------------------------------------------------------------------------

#[component]
pub fn SeverityBadge(severity: Severity) -> impl IntoView {
    view! {
        <span class=severity.badge_class()>{severity.label()}</span>
    }
}

#[component]
pub fn StatusBadge(status: ReportStatus) -> impl IntoView {
    view! {
        <span class=status.badge_class()>
            {status.icon().map(|icon| view! { <span class="badge-icon">{icon}</span> })}
            {status.label()}
        </span>
    }
}

// -----------------------------------------------------------------------------
// 4. Stat Box
// -----------------------------------------------------------------------------

/// Labelled counter for the summary strip.
#[component]
pub fn StatBox(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<usize>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <div class=format!("stat-box {}", class)>
            <span class="stat-value">{move || value.get()}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}
