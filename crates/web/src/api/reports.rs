// =============================================================================
// FloodWatch Web - Reports API
// =============================================================================
// Table of Contents:
// 1. Report Source
// 2. Firestore-backed Source
// 3. Page Walking
// =============================================================================

use std::future::Future;

use super::{ApiClient, ApiError, ListDocumentsResponse};
use crate::reports::RawDocument;
use crate::state::StoreConfig;

// -----------------------------------------------------------------------------
// 1. Report Source
// -----------------------------------------------------------------------------

/// Read-all access to the report collection.
#[allow(async_fn_in_trait)]
pub trait ReportSource {
    /// Fetch every document in the collection, in store order.
    async fn fetch_all(&self) -> Result<Vec<RawDocument>, ApiError>;
}

// -----------------------------------------------------------------------------
// 2. Firestore-backed Source
// -----------------------------------------------------------------------------

/// Lists the configured collection through the Firestore REST API.
pub struct FirestoreReports {
    client: ApiClient,
    config: StoreConfig,
}

impl FirestoreReports {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: ApiClient::new(config.base_url.clone()),
            config,
        }
    }

    /// Endpoint for one page of the listing.
    fn page_endpoint(&self, page_token: Option<&str>) -> String {
        let mut endpoint = format!(
            "{}?pageSize={}",
            self.config.collection_path(),
            self.config.page_size
        );
        if let Some(token) = page_token {
            endpoint.push_str("&pageToken=");
            endpoint.push_str(&urlencoding::encode(token));
        }
        if let Some(key) = &self.config.api_key {
            endpoint.push_str("&key=");
            endpoint.push_str(&urlencoding::encode(key));
        }
        endpoint
    }
}

impl ReportSource for FirestoreReports {
    async fn fetch_all(&self) -> Result<Vec<RawDocument>, ApiError> {
        let documents = read_all_pages(|page_token| {
            let endpoint = self.page_endpoint(page_token.as_deref());
            async move { self.client.get::<ListDocumentsResponse>(&endpoint).await }
        })
        .await?;

        log::debug!(
            "Listed {} documents from {}",
            documents.len(),
            self.config.collection
        );
        Ok(documents)
    }
}

// -----------------------------------------------------------------------------
// 3. Page Walking
// -----------------------------------------------------------------------------

/// Request pages until the store stops returning a `nextPageToken`.
///
/// `fetch_page` receives the token for the page to read (`None` for the first).
/// Any failed page fails the whole read; partial results are dropped.
pub async fn read_all_pages<F, Fut>(mut fetch_page: F) -> Result<Vec<RawDocument>, ApiError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<ListDocumentsResponse, ApiError>>,
{
    let mut documents = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        let page = fetch_page(page_token.take()).await?;
        documents.extend(page.documents.into_iter().map(|doc| doc.into_raw()));

        match page.next_page_token {
            Some(token) if !token.is_empty() => page_token = Some(token),
            _ => break,
        }
    }

    Ok(documents)
}
