use std::sync::Arc;

use fareflow_catalog::InventoryStore;
use fareflow_quote::SessionManager;

#[derive(Clone)]
pub struct AppState {
    pub inventory: Arc<dyn InventoryStore>,
    pub sessions: Arc<SessionManager>,
}
