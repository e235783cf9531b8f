// =============================================================================
// FloodWatch Web - User Reports Page
// =============================================================================
// Review citizen-submitted flood reports: search, filter by status, inspect
// =============================================================================

use chrono::Utc;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::api::{FirestoreReports, ReportSource};
use crate::components::{Card, Layout, LoadingSpinner, SeverityBadge, StatBox, StatusBadge};
use crate::reports::{LoadPhase, Report, ReportStatus, ReportsView, StatusFilter};
use crate::state::AppState;
use crate::utils::{display_text, display_username, format_created_at, format_location};

/// Table columns, in order.
const COLUMNS: [&str; 7] = [
    "Username",
    "Location",
    "Time",
    "Severity",
    "Status",
    "Note",
    "Actions",
];

// -----------------------------------------------------------------------------
// Main Component
// -----------------------------------------------------------------------------

/// Report review page.
#[component]
pub fn ReportsPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    // Owned by this page instance; dropped on navigation.
    let view_state = RwSignal::new(ReportsView::new());
    let expanded = RwSignal::new(None::<String>);

    // Fetch reports on mount
    let store = app_state.store.clone();
    Effect::new(move |_| {
        let Some(ticket) = view_state.try_update(|view| view.begin_fetch()) else {
            return;
        };
        let source = FirestoreReports::new(store.clone());
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = source.fetch_all().await;
            if view_state
                .try_update(|view| view.finish_fetch(ticket, outcome))
                .is_none()
            {
                log::debug!("Report page closed before fetch completed");
            }
        });
    });

    let visible = move || view_state.with(|view| view.visible());
    let summary = move || view_state.with(|view| view.summary());
    let is_loading = move || view_state.with(|view| view.phase() == LoadPhase::Loading);
    let show_empty = move || !is_loading() && visible().is_empty();

    let status_options = ReportStatus::ALL
        .iter()
        .map(|status| view! { <option value=status.as_str()>{status.label()}</option> })
        .collect_view();

    let headers = COLUMNS
        .iter()
        .map(|column| view! { <th>{*column}</th> })
        .collect_view();

    view! {
        <Title text="User Reports" />
        <Layout active="/reports">
            <div class="page page-reports">
                <div class="page-header">
                    <h1 class="page-title">"User Reports"</h1>
                    <p class="page-subtitle">"Review and manage flood reports from citizens"</p>
                </div>

                <div class="stats-row">
                    <StatBox label="Total Reports" value=Signal::derive(move || summary().total) />
                    <StatBox label="Pending" value=Signal::derive(move || summary().pending) class="pending" />
                    <StatBox label="Verified" value=Signal::derive(move || summary().verified) class="verified" />
                    <StatBox label="Resolved" value=Signal::derive(move || summary().resolved) class="resolved" />
                    <StatBox label="Critical" value=Signal::derive(move || summary().critical) class="critical" />
                </div>

                <Card class="reports-filters">
                    <div class="filters-row">
                        <div class="search-box">
                            <span class="search-icon">"🔍"</span>
                            <input
                                type="text"
                                class="search-input"
                                placeholder="Search by username or note..."
                                prop:value=move || view_state.with(|view| view.filter().search.clone())
                                on:input=move |e| view_state.update(|view| view.set_search(event_target_value(&e)))
                            />
                        </div>
                        <select
                            class="status-select"
                            prop:value=move || view_state.with(|view| view.filter().status.as_selector().to_string())
                            on:change=move |e| view_state.update(|view| view.set_status_selector(&event_target_value(&e)))
                        >
                            <option value={StatusFilter::ALL_SELECTOR}>"All Status"</option>
                            {status_options}
                        </select>
                    </div>
                </Card>

                <Card title="Recent Reports" class="reports-table-card">
                    <table class="reports-table">
                        <thead>
                            <tr>{headers}</tr>
                        </thead>
                        <tbody>
                            <Show when=is_loading>
                                <tr class="loading-row">
                                    <td colspan="7">
                                        <LoadingSpinner message="Loading reports..." />
                                    </td>
                                </tr>
                            </Show>
                            <Show when=show_empty>
                                <tr class="empty-row">
                                    <td colspan="7">"No reports found"</td>
                                </tr>
                            </Show>
                            <For
                                each=visible
                                key=|report| report.id.clone()
                                children=move |report| view! { <ReportRow report=report expanded=expanded /> }
                            />
                        </tbody>
                    </table>
                </Card>
            </div>
        </Layout>
    }
}

// -----------------------------------------------------------------------------
// Report Row Component
// -----------------------------------------------------------------------------

#[component]
fn ReportRow(report: Report, expanded: RwSignal<Option<String>>) -> impl IntoView {
    let now = Utc::now();

    let row_id = report.id.clone();
    let is_open = move || expanded.with(|open| open.as_deref() == Some(row_id.as_str()));
    let toggle_id = report.id.clone();
    let toggle = move |_| {
        expanded.update(|open| {
            *open = if open.as_deref() == Some(toggle_id.as_str()) {
                None
            } else {
                Some(toggle_id.clone())
            };
        })
    };

    let username = display_username(report.username.as_deref()).to_string();
    let location = format_location(report.location);
    let time = format_created_at(report.created_at.as_deref(), now);
    let note = display_text(report.note.as_deref()).to_string();
    let severity = report.severity_class();
    let status = report.status_class();

    let label_open = is_open.clone();
    let details = report.clone();

    view! {
        <tr class="report-row">
            <td class="cell-username">{username}</td>
            <td class="cell-location">{location}</td>
            <td class="cell-time">{time}</td>
            <td><SeverityBadge severity=severity /></td>
            <td><StatusBadge status=status /></td>
            <td class="cell-note">{note}</td>
            <td class="cell-actions">
                <button class="btn btn-ghost" on:click=toggle>
                    {move || if label_open() { "Hide Details" } else { "View Details" }}
                </button>
            </td>
        </tr>
        <Show when=is_open>
            <tr class="report-detail-row">
                <td colspan="7">
                    <ReportDetails report=details.clone() />
                </td>
            </tr>
        </Show>
    }
}

// -----------------------------------------------------------------------------
// Report Details Component
// -----------------------------------------------------------------------------

/// Read-only view of every field of one report.
#[component]
fn ReportDetails(report: Report) -> impl IntoView {
    let coordinates = report
        .location
        .map(|point| format!("{}, {}", point.latitude, point.longitude))
        .unwrap_or_else(|| "-".to_string());

    let fields = [
        ("Report ID", report.id.clone()),
        ("Reported by", display_username(report.username.as_deref()).to_string()),
        ("Coordinates", coordinates),
        ("Submitted", display_text(report.created_at.as_deref()).to_string()),
        ("Severity", display_text(report.severity.as_deref()).to_string()),
        ("Status", display_text(report.status.as_deref()).to_string()),
        ("Note", display_text(report.note.as_deref()).to_string()),
    ];

    view! {
        <dl class="report-details">
            {fields
                .into_iter()
                .map(|(label, value)| view! {
                    <dt>{label}</dt>
                    <dd>{value}</dd>
                })
                .collect_view()}
        </dl>
    }
}
