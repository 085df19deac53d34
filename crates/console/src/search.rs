//! Search collaborator contract.
//!
//! The console only reads a result's kind, which picks the module to open.
//! Everything else is passed through for display.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use claimdesk_auth::ModuleId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchResultKind {
    Variation,
    Notice,
    Claim,
    Article,
    Regulation,
    Project,
    Document,
}

impl SearchResultKind {
    /// Module and sub-view that shows results of this kind.
    pub fn target(&self) -> (ModuleId, &'static str) {
        match self {
            SearchResultKind::Variation => (ModuleId::VariationsMasterList, "All Variations"),
            SearchResultKind::Notice => (ModuleId::NoticesRegister, "All Notices"),
            SearchResultKind::Claim => (ModuleId::ClaimsRegister, "All Claims"),
            SearchResultKind::Article => (ModuleId::LegalArticles, "Article"),
            SearchResultKind::Regulation => (ModuleId::Regulations, "Regulation"),
            SearchResultKind::Project => (ModuleId::Projects, "Project Details"),
            SearchResultKind::Document => (ModuleId::Documents, "All Documents"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub kind: SearchResultKind,
    #[serde(default)]
    pub snippet: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("search backend unavailable: {0}")]
    Unavailable(String),

    #[error("search failed: {0}")]
    Backend(String),
}

/// Remote (or local) search backend.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError>;
}

/// Run `query` against `provider` and return its first hit.
///
/// The query is trimmed; a blank query never reaches the provider. Callers
/// open the hit with [`crate::Console::open_search_result`] once the search
/// has resolved, so no console borrow is held across the await.
pub async fn first_hit<P>(provider: &P, query: &str) -> Result<Option<SearchResult>, SearchError>
where
    P: SearchProvider + ?Sized,
{
    let query = query.trim();
    if query.is_empty() {
        return Ok(None);
    }

    let results = provider.search(query).await?;
    tracing::debug!(query, hits = results.len(), "search completed");

    Ok(results.into_iter().next())
}

/// Case-insensitive substring search over a fixed set of results.
#[derive(Debug, Clone, Default)]
pub struct InMemorySearchIndex {
    entries: Vec<SearchResult>,
}

impl InMemorySearchIndex {
    pub fn new(entries: Vec<SearchResult>) -> Self {
        Self { entries }
    }

    pub fn push(&mut self, entry: SearchResult) {
        self.entries.push(entry);
    }
}

#[async_trait]
impl SearchProvider for InMemorySearchIndex {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let needle = query.to_lowercase();
        Ok(self
            .entries
            .iter()
            .filter(|e| {
                e.title.to_lowercase().contains(&needle)
                    || e.snippet
                        .as_deref()
                        .is_some_and(|s| s.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect())
    }
}
