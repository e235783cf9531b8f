// =============================================================================
// FloodWatch Web - Page Components
// =============================================================================

pub mod not_found;
pub mod reports;

pub use not_found::NotFoundPage;
pub use reports::ReportsPage;
