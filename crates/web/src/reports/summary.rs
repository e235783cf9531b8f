// =============================================================================
// FloodWatch Web - Report Summary
// =============================================================================

use super::{Report, ReportStatus, Severity};

/// Counts shown in the stats strip above the report table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub total: usize,
    pub pending: usize,
    pub verified: usize,
    pub resolved: usize,
    pub critical: usize,
}

impl ReportSummary {
    pub fn from_reports(reports: &[Report]) -> Self {
        reports.iter().fold(Self::default(), |mut summary, report| {
            summary.total += 1;
            match report.status_class() {
                ReportStatus::Pending => summary.pending += 1,
                ReportStatus::Verified => summary.verified += 1,
                ReportStatus::Resolved => summary.resolved += 1,
                ReportStatus::Unknown => {}
            }
            if report.severity_class() == Severity::Critical {
                summary.critical += 1;
            }
            summary
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_by_category() {
        let mut reports = Vec::new();
        for (id, status, severity) in [
            ("1", Some("pending"), Some("severe")),
            ("2", Some("pending"), Some("low")),
            ("3", Some("verified"), Some("CRITICAL")),
            ("4", Some("resolved"), None),
            ("5", Some("archived"), Some("tsunami")),
            ("6", None, None),
        ] {
            reports.push(Report {
                status: status.map(str::to_string),
                severity: severity.map(str::to_string),
                ..Report::new(id)
            });
        }

        assert_eq!(
            ReportSummary::from_reports(&reports),
            ReportSummary {
                total: 6,
                pending: 2,
                verified: 1,
                resolved: 1,
                critical: 2,
            }
        );
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(ReportSummary::from_reports(&[]), ReportSummary::default());
    }
}
