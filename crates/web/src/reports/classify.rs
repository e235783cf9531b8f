// =============================================================================
// FloodWatch Web - Severity & Status Classification
// =============================================================================
// Table of Contents:
// 1. Severity
// 2. Report Status
// 3. Tests
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Severity
// -----------------------------------------------------------------------------

/// Display category for a report's severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Critical,
    High,
    Moderate,
    Low,
    Unknown,
}

impl Severity {
    /// Case-insensitive; `severe` is an alias of `critical`.
    pub fn classify(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Unknown;
        };
        match raw.to_lowercase().as_str() {
            "critical" | "severe" => Self::Critical,
            "high" => Self::High,
            "moderate" => Self::Moderate,
            "low" => Self::Low,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Moderate => "moderate",
            Self::Low => "low",
            Self::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
            Self::Unknown => "Unknown",
        }
    }

    pub fn badge_class(&self) -> String {
        format!("badge badge-severity {}", self.as_str())
    }
}

// -----------------------------------------------------------------------------
// 2. Report Status
// -----------------------------------------------------------------------------

/// Display category for a report's review status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReportStatus {
    Pending,
    Verified,
    Resolved,
    Unknown,
}

impl ReportStatus {
    /// Selectable statuses, in display order.
    pub const ALL: [ReportStatus; 3] = [Self::Pending, Self::Verified, Self::Resolved];

    /// Exact, case-sensitive match.
    pub fn classify(raw: Option<&str>) -> Self {
        match raw {
            Some("pending") => Self::Pending,
            Some("verified") => Self::Verified,
            Some("resolved") => Self::Resolved,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Resolved => "resolved",
            Self::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Verified => "Verified",
            Self::Resolved => "Resolved",
            Self::Unknown => "Unknown",
        }
    }

    pub fn icon(&self) -> Option<&'static str> {
        match self {
            Self::Pending => Some("🕒"),
            Self::Verified | Self::Resolved => Some("✔"),
            Self::Unknown => None,
        }
    }

    pub fn badge_class(&self) -> String {
        format!("badge badge-status {}", self.as_str())
    }
}

// -----------------------------------------------------------------------------
// 3. Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_aliases_and_case() {
        assert_eq!(Severity::classify(Some("SEVERE")), Severity::classify(Some("critical")));
        assert_eq!(Severity::classify(Some("Severe")), Severity::Critical);
        assert_eq!(Severity::classify(Some("HIGH")), Severity::High);
        assert_eq!(Severity::classify(Some("Moderate")), Severity::Moderate);
        assert_eq!(Severity::classify(Some("low")), Severity::Low);
    }

    #[test]
    fn test_severity_unrecognized_is_unknown() {
        assert_eq!(Severity::classify(Some("tsunami")), Severity::Unknown);
        assert_eq!(Severity::classify(Some("")), Severity::Unknown);
        assert_eq!(Severity::classify(Some(" high")), Severity::Unknown);
        assert_eq!(Severity::classify(None), Severity::Unknown);
    }

    #[test]
    fn test_status_is_case_sensitive() {
        assert_eq!(ReportStatus::classify(Some("pending")), ReportStatus::Pending);
        assert_eq!(ReportStatus::classify(Some("verified")), ReportStatus::Verified);
        assert_eq!(ReportStatus::classify(Some("resolved")), ReportStatus::Resolved);
        assert_eq!(ReportStatus::classify(Some("Pending")), ReportStatus::Unknown);
        assert_eq!(ReportStatus::classify(Some("closed")), ReportStatus::Unknown);
        assert_eq!(ReportStatus::classify(None), ReportStatus::Unknown);
    }

    #[test]
    fn test_status_round_trips_through_its_token() {
        for status in ReportStatus::ALL {
            assert_eq!(ReportStatus::classify(Some(status.as_str())), status);
        }
    }

    #[test]
    fn test_badge_classes() {
        assert_eq!(Severity::Critical.badge_class(), "badge badge-severity critical");
        assert_eq!(ReportStatus::Unknown.badge_class(), "badge badge-status unknown");
        assert_eq!(ReportStatus::Unknown.icon(), None);
    }
}
