use std::sync::Arc;
use crate::errors::QaFlowResult;
use crate::services::analysis_store::AnalysisStore;

/// Authenticated-identity capability: the core only needs "current user id,
/// or none for public endpoints". The badge route never consults this.
pub trait AuthProvider: Send + Sync {
    fn resolve(&self, bearer_token: &str) -> QaFlowResult<Option<String>>;
}

/// Resolves opaque bearer tokens against the api_tokens table.
pub struct StoreAuthProvider {
    store: Arc<AnalysisStore>,
}

impl StoreAuthProvider {
    pub fn new(store: Arc<AnalysisStore>) -> Self {
        Self { store }
    }
}

impl AuthProvider for StoreAuthProvider {
    fn resolve(&self, bearer_token: &str) -> QaFlowResult<Option<String>> {
        self.store.resolve_token(bearer_token)
    }
}
