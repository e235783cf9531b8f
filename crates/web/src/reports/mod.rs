// =============================================================================
// FloodWatch Web - Citizen Reports
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. Re-exports
// 3. Report Types
// =============================================================================

pub mod classify;
pub mod filter;
pub mod normalize;
pub mod summary;
pub mod view;

pub use classify::{ReportStatus, Severity};
pub use filter::{ReportFilter, StatusFilter};
pub use normalize::{normalize, CoordinateConvention};
pub use summary::ReportSummary;
pub use view::{FetchTicket, LoadPhase, ReportsView};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

// -----------------------------------------------------------------------------
// 3. Report Types
// -----------------------------------------------------------------------------

/// A store document before normalization: its id plus whatever fields it carries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawDocument {
    pub id: String,
    pub fields: Map<String, JsonValue>,
}

/// Geographic point in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A citizen-submitted flood observation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub username: Option<String>,
    pub location: Option<GeoPoint>,
    pub created_at: Option<String>,
    pub severity: Option<String>,
    pub status: Option<String>,
    pub note: Option<String>,
}

impl Report {
    /// Report with only an id; every optional field absent.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: None,
            location: None,
            created_at: None,
            severity: None,
            status: None,
            note: None,
        }
    }

    pub fn severity_class(&self) -> Severity {
        Severity::classify(self.severity.as_deref())
    }

    pub fn status_class(&self) -> ReportStatus {
        ReportStatus::classify(self.status.as_deref())
    }
}
