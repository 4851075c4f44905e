use std::sync::Arc;

use storage::AssessmentStore;
use vision::SafetyAnalyzer;

/// Shared application state: the record store plus the vision collaborator,
/// both constructed once in `main` and injected into the router.
#[derive(Clone)]
pub struct AppState {
    pub store: AssessmentStore,
    pub analyzer: Arc<dyn SafetyAnalyzer>,
}
