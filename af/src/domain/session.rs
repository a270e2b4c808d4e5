//! ProjectSession domain type
//!
//! A session binds one project configuration to an isolated, uniquely
//! addressable working path. Sessions are append-only with respect to
//! their own identity: every field is set at creation and never mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sessionstore::{Record, new_record_id};

use super::project::ProjectConfig;

/// An isolated workspace context for one generated project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSession {
    /// Globally unique identifier, never reused
    pub id: String,

    /// The owning configuration (exclusively owned by this session)
    pub config: ProjectConfig,

    /// Working path derived from `id` alone - two sessions never collide
    /// on disk even with identical configs
    pub working_path: String,

    /// Creation timestamp, set once
    pub created_at: DateTime<Utc>,
}

impl ProjectSession {
    /// Mint a new session under the given base path
    pub fn new(config: ProjectConfig, base_path: &str) -> Self {
        let id = new_record_id();
        let working_path = Self::working_path_for(base_path, &id);
        Self {
            id,
            config,
            working_path,
            created_at: Utc::now(),
        }
    }

    /// Derive the working path for a session id
    ///
    /// Injective in `id`: the id is the only varying component.
    fn working_path_for(base_path: &str, id: &str) -> String {
        let base = base_path.trim_end_matches('/');
        format!("{base}/{id}/")
    }
}

impl Record for ProjectSession {
    fn id(&self) -> &str {
        &self.id
    }
}
