//! Domain types: project configuration, sessions, generated artifacts

mod files;
mod project;
mod session;

pub use files::{FileTree, GeneratedFile};
pub use project::{
    BackendConfig, BackendFramework, ConfigError, Database, FrontendConfig, FrontendFramework, Language,
    ProjectConfig, ProjectKind, Styling,
};
pub use session::ProjectSession;
