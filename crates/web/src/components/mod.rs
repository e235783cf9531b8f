// =============================================================================
// FloodWatch Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Layout Components
// 2. Common Components
// =============================================================================

pub mod common;
pub mod layout;

pub use common::{Card, LoadingSpinner, SeverityBadge, StatBox, StatusBadge};
pub use layout::Layout;
