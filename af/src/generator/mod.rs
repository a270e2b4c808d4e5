//! File-tree generation
//!
//! Compiles a session's configuration into a named path→content map of
//! starter files, rooted under the project name. Generation is pure and
//! deterministic in the config; like the planner, unhandled framework
//! combinations contribute no files.

mod backend;
mod frontend;

use tracing::debug;

use crate::domain::{FileTree, ProjectSession};

/// Compile a session into its generated file tree
pub fn generate_file_structure(session: &ProjectSession) -> FileTree {
    let config = &session.config;
    let mut tree = FileTree::new();

    if let Some(front) = config.kind.frontend() {
        frontend::generate(&mut tree, front, config.language, &config.name);
    }

    if let Some(back) = config.kind.backend() {
        backend::generate(&mut tree, back, config);
    }

    debug!(session = %session.id, files = tree.len(), "generate_file_structure: tree compiled");
    tree
}
