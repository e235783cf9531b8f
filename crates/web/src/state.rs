// =============================================================================
// FloodWatch Web - Global Application State
// =============================================================================
// Table of Contents:
// 1. Store Configuration
// 2. App State
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Store Configuration
// -----------------------------------------------------------------------------

const PRODUCTION_BASE_URL: &str = "https://firestore.googleapis.com/v1";
const EMULATOR_BASE_URL: &str = "http://localhost:8080/v1";
const DEFAULT_PROJECT_ID: &str = "floodwatch-trivandrum";
const DEFAULT_COLLECTION: &str = "reports";

/// Where the report collection lives.
#[derive(Clone, Debug, PartialEq)]
pub struct StoreConfig {
    /// REST root, without trailing slash.
    pub base_url: String,
    pub project_id: String,
    pub database: String,
    pub collection: String,
    /// Web API key, appended as `key=` when present.
    pub api_key: Option<String>,
    /// Documents requested per listing page.
    pub page_size: u32,
}

impl StoreConfig {
    /// Hosted Firestore with the default project and collection.
    pub fn production() -> Self {
        Self {
            base_url: PRODUCTION_BASE_URL.to_string(),
            project_id: DEFAULT_PROJECT_ID.to_string(),
            database: "(default)".to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            api_key: None,
            page_size: 300,
        }
    }

    /// Local Firestore emulator.
    pub fn emulator() -> Self {
        Self {
            base_url: EMULATOR_BASE_URL.to_string(),
            ..Self::production()
        }
    }

    /// Build from compile-time environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(
            option_env!("ENVIRONMENT"),
            option_env!("FLOODWATCH_PROJECT_ID"),
            option_env!("FLOODWATCH_COLLECTION"),
            option_env!("FLOODWATCH_API_KEY"),
        )
    }

    fn from_vars(
        environment: Option<&str>,
        project_id: Option<&str>,
        collection: Option<&str>,
        api_key: Option<&str>,
    ) -> Self {
        let mut config = if environment.unwrap_or("production") == "development" {
            Self::emulator()
        } else {
            Self::production()
        };

        if let Some(project_id) = project_id.filter(|s| !s.is_empty()) {
            config.project_id = project_id.to_string();
        }
        if let Some(collection) = collection.filter(|s| !s.is_empty()) {
            config.collection = collection.to_string();
        }
        config.api_key = api_key.filter(|s| !s.is_empty()).map(str::to_string);
        config
    }

    /// Path of the collection relative to `base_url`.
    pub fn collection_path(&self) -> String {
        format!(
            "/projects/{}/databases/{}/documents/{}",
            self.project_id, self.database, self.collection
        )
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::production()
    }
}

// -----------------------------------------------------------------------------
// 2. App State
// -----------------------------------------------------------------------------

/// Global application state provided via Leptos context.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Report store location.
    pub store: StoreConfig,
}

impl AppState {
    /// Create a new app state instance.
    pub fn new() -> Self {
        let store = StoreConfig::from_env();
        log::info!(
            "Report store: {}{}",
            store.base_url,
            store.collection_path()
        );
        Self { store }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_production() {
        let config = StoreConfig::from_vars(None, None, None, None);
        assert_eq!(config, StoreConfig::production());
        assert_eq!(
            config.collection_path(),
            "/projects/floodwatch-trivandrum/databases/(default)/documents/reports"
        );
    }

    #[test]
    fn test_development_targets_emulator() {
        let config = StoreConfig::from_vars(Some("development"), None, None, None);
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.collection, "reports");
    }

    #[test]
    fn test_overrides_apply_and_blank_values_are_ignored() {
        let config = StoreConfig::from_vars(
            Some("staging"),
            Some("kochi-floods"),
            Some(""),
            Some("abc"),
        );
        assert_eq!(config.base_url, "https://firestore.googleapis.com/v1");
        assert_eq!(config.project_id, "kochi-floods");
        assert_eq!(config.collection, "reports");
        assert_eq!(config.api_key.as_deref(), Some("abc"));
    }
}
