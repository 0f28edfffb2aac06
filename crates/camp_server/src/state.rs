//! Shared router state.

use crate::error::ApiError;
use log::warn;
use rusqlite::Connection;
use std::sync::{Arc, Mutex, PoisonError};

/// Injected store handle shared by every handler.
///
/// Store work runs on the blocking pool; the lock is taken and released
/// there and never held across an `.await`.
#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wraps a connection that already went through `open_db*`.
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }

    /// Runs `work` against the store connection off the async runtime.
    pub async fn with_conn<T, F>(&self, work: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T, ApiError> + Send + 'static,
    {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || {
            let conn = db.lock().unwrap_or_else(recover_poisoned);
            work(&conn)
        })
        .await
        .map_err(|err| ApiError::Internal(format!("store task failed: {err}")))?
    }
}

// Each unit of work commits or rolls back its own transaction, so the
// connection is consistent even after a panicking holder.
fn recover_poisoned<G>(poisoned: PoisonError<G>) -> G {
    warn!("event=store_lock_poisoned module=server status=recovered");
    poisoned.into_inner()
}
