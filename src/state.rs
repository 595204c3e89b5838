//! Shared application state for all routes. Passed explicitly into every router.

use crate::db::PoolHandle;

#[derive(Clone, Debug)]
pub struct AppState {
    /// `None` when the database section of the configuration could not be used at all;
    /// the pre-dispatch gate then rejects every resource request.
    pub pool: Option<PoolHandle>,
}

impl AppState {
    pub fn new(pool: PoolHandle) -> Self {
        AppState { pool: Some(pool) }
    }

    pub fn without_pool() -> Self {
        AppState { pool: None }
    }
}
