// =============================================================================
// FloodWatch Web - Report Filtering
// =============================================================================
// Table of Contents:
// 1. Status Filter
// 2. Report Filter
// 3. Tests
// =============================================================================

use super::Report;

// -----------------------------------------------------------------------------
// 1. Status Filter
// -----------------------------------------------------------------------------

/// Status selector value. `All` admits every report.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    /// Exact match against the raw `status` field.
    Only(String),
}

impl StatusFilter {
    pub const ALL_SELECTOR: &'static str = "all";

    /// Parse a `<select>` value.
    pub fn from_selector(value: &str) -> Self {
        if value == Self::ALL_SELECTOR {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    pub fn as_selector(&self) -> &str {
        match self {
            Self::All => Self::ALL_SELECTOR,
            Self::Only(status) => status,
        }
    }

    pub fn admits(&self, status: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => status == Some(wanted.as_str()),
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Report Filter
// -----------------------------------------------------------------------------

/// Search term plus status selector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub search: String,
    pub status: StatusFilter,
}

impl ReportFilter {
    pub fn new(search: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }

    /// Visible subset, in input order.
    pub fn apply(&self, reports: &[Report]) -> Vec<Report> {
        let term = self.search.to_lowercase();
        reports
            .iter()
            .filter(|report| self.admits(report, &term))
            .cloned()
            .collect()
    }

    /// Status AND search, with the term already lower-cased.
    fn admits(&self, report: &Report, term: &str) -> bool {
        self.status.admits(report.status.as_deref()) && matches_search(report, term)
    }
}

/// `term` must already be lower-cased. Absent fields never match.
fn matches_search(report: &Report, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let contains = |field: &Option<String>| {
        field
            .as_deref()
            .is_some_and(|value| value.to_lowercase().contains(term))
    };
    contains(&report.username) || contains(&report.note)
}

// -----------------------------------------------------------------------------
// 3. Tests
// -----------------------------------------------------------------------------
