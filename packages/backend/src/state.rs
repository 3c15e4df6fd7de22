use std::sync::Arc;

use store::{FormStore, SiteSettings, UserStore};

/// Shared state handed to every handler and server function.
#[derive(Clone)]
pub struct AppState {
    pub forms: Arc<dyn FormStore>,
    pub users: Arc<dyn UserStore>,
    pub site: Arc<SiteSettings>,
}

impl AppState {
    /// Build state where one store serves both forms and users.
    pub fn from_store<S>(store: S, site: SiteSettings) -> Self
    where
        S: FormStore + UserStore + 'static,
    {
        let store = Arc::new(store);
        Self {
            forms: store.clone(),
            users: store,
            site: Arc::new(site),
        }
    }
}
