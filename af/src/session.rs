//! SessionManager - mints and tracks project sessions
//!
//! Owns an injectable [`sessionstore::Store`], so independent managers
//! (one per test, one per process) never share hidden global state.

use sessionstore::Store;
use tracing::{debug, info};

use crate::domain::{ProjectConfig, ProjectSession};

/// Mints isolated, addressable workspace sessions
#[derive(Clone)]
pub struct SessionManager {
    store: Store<ProjectSession>,
    base_path: String,
}

impl SessionManager {
    /// Create a manager with its own empty registry
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            store: Store::new(),
            base_path: base_path.into(),
        }
    }

    /// Create a manager over an existing registry handle
    pub fn with_store(store: Store<ProjectSession>, base_path: impl Into<String>) -> Self {
        Self {
            store,
            base_path: base_path.into(),
        }
    }

    /// Mint a new session for a configuration
    ///
    /// Never fails for a constructed `ProjectConfig`: shape validation
    /// already happened at the wire boundary, and ids are collision-free,
    /// so registry insertion cannot conflict.
    pub fn create_session(&self, config: ProjectConfig) -> ProjectSession {
        let session = ProjectSession::new(config, &self.base_path);
        debug!(id = %session.id, path = %session.working_path, "create_session: minted");

        self.store
            .insert(session.clone())
            .expect("freshly minted session id collided");

        info!(id = %session.id, project = %session.config.name, "Created session");
        session
    }

    /// Look up a session by id
    pub fn get_session(&self, id: &str) -> Option<ProjectSession> {
        self.store.get(id)
    }

    /// Snapshot of all sessions (unordered)
    pub fn list_sessions(&self) -> Vec<ProjectSession> {
        self.store.list()
    }

    /// Number of sessions minted so far
    pub fn session_count(&self) -> usize {
        self.store.len()
    }
}
