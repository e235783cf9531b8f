// =============================================================================
// FloodWatch Web - Report Review View State
// =============================================================================
// Table of Contents:
// 1. Load Phase
// 2. Reports View
// 3. Load Sequence
// 4. Tests
// =============================================================================

use super::{normalize, RawDocument, Report, ReportFilter, ReportSummary, StatusFilter};
use crate::api::{ApiError, ReportSource};

// -----------------------------------------------------------------------------
// 1. Load Phase
// -----------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Loading,
    Loaded,
    /// The fetch was rejected; the list stays empty.
    Failed,
}

/// Identifies one fetch. Only the most recently issued ticket may apply a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

// -----------------------------------------------------------------------------
// 2. Reports View
// -----------------------------------------------------------------------------

/// State owned by one report-review page instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportsView {
    phase: LoadPhase,
    reports: Vec<Report>,
    filter: ReportFilter,
    generation: u64,
}

impl ReportsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Every fetched report, in store order.
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn filter(&self) -> &ReportFilter {
        &self.filter
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.filter.status = status;
    }

    pub fn set_status_selector(&mut self, selector: &str) {
        self.set_status(StatusFilter::from_selector(selector));
    }

    /// Reports passing the current filter. Recomputed on every call.
    pub fn visible(&self) -> Vec<Report> {
        self.filter.apply(&self.reports)
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary::from_reports(&self.reports)
    }

    /// Start a fetch: back to `Loading` with an empty list.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        self.reports.clear();
        FetchTicket(self.generation)
    }

    /// Apply a fetch outcome. Returns `false` when the ticket is stale and
    /// the outcome was dropped.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<Vec<RawDocument>, ApiError>,
    ) -> bool {
        if ticket.0 != self.generation {
            log::debug!(
                "Discarding stale report fetch #{} (current #{})",
                ticket.0,
                self.generation
            );
            return false;
        }

        match outcome {
            Ok(documents) => {
                self.reports = documents.iter().map(normalize).collect();
                self.phase = LoadPhase::Loaded;
                log::info!("Loaded {} reports", self.reports.len());
            }
            Err(err) => {
                log::error!("Error fetching reports: {}", err);
                self.reports.clear();
                self.phase = LoadPhase::Failed;
            }
        }
        true
    }

    // -------------------------------------------------------------------------
    // 3. Load Sequence
    // -------------------------------------------------------------------------

    /// Fetch from `source` and replace the list. Failures are logged and absorbed.
    pub async fn load<S: ReportSource>(&mut self, source: &S) {
        let ticket = self.begin_fetch();
        let outcome = source.fetch_all().await;
        self.finish_fetch(ticket, outcome);
    }
}

// -----------------------------------------------------------------------------
// 4. Tests
// -----------------------------------------------------------------------------
