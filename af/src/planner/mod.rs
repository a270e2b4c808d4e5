//! Command planning
//!
//! Compiles a session's configuration into the ordered list of shell
//! commands that would scaffold the project. Planning is pure: the same
//! config and working path always yield the same sequence, and nothing
//! here touches a real shell - commands are opaque strings handed to the
//! execution engine.
//!
//! Branch policy: combinations without a handled arm contribute no
//! commands for their section, so planning degrades to the
//! directory-setup prefix alone rather than erroring.

mod backend;
mod frontend;

use tracing::debug;

use crate::domain::ProjectSession;

/// Compile a session into its ordered scaffolding command plan
///
/// The first two commands always establish the session's working
/// directory; everything after branches on the project kind.
pub fn generate_init_commands(session: &ProjectSession) -> Vec<String> {
    let config = &session.config;
    let mut commands = vec![
        format!("mkdir -p {}", session.working_path),
        format!("cd {}", session.working_path),
    ];

    if let Some(front) = config.kind.frontend() {
        frontend::plan(&mut commands, front, config.language, &config.name);
    }

    if let Some(back) = config.kind.backend() {
        backend::plan(&mut commands, back, config.language, &config.backend_dir());
    }

    // The planner never intentionally emits an empty command; this keeps
    // the engine's input clean if a branch ever regresses.
    commands.retain(|cmd| !cmd.is_empty());

    debug!(
        session = %session.id,
        count = commands.len(),
        "generate_init_commands: plan compiled"
    );
    commands
}
