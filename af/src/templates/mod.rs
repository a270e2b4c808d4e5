//! Embedded payloads for generated projects
//!
//! These are the literal file contents the pipeline writes into a
//! scaffolded project. They are generated artifacts, not code this crate
//! runs - the express controllers, for example, implement the sample
//! CRUD contract inside the target project.

pub mod express;
pub mod nextjs;
pub mod react;
pub mod tailwind;
