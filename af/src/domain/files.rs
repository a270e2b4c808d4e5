//! Generated file artifacts
//!
//! A `FileTree` is the path→content half of a plan. It keeps entries in
//! insertion order because replay order is part of the execution
//! contract: `create_files` walks entries front to back and stops at the
//! first failure, so iteration order must be deterministic.

use serde::{Deserialize, Serialize};

/// One generated file: POSIX-style path plus full UTF-8 content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Insertion-ordered collection of generated files keyed by path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTree {
    files: Vec<GeneratedFile>,
}

impl FileTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file, replacing the content in place if the path exists
    ///
    /// Replacement keeps the original position so re-generation cannot
    /// reorder a plan.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        let path = path.into();
        let content = content.into();
        if let Some(existing) = self.files.iter_mut().find(|f| f.path == path) {
            existing.content = content;
        } else {
            self.files.push(GeneratedFile { path, content });
        }
    }

    /// Content for a path, if present
    pub fn get(&self, path: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.path == path)
            .map(|f| f.content.as_str())
    }

    /// Whether a path is present
    pub fn contains(&self, path: &str) -> bool {
        self.files.iter().any(|f| f.path == path)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter()
    }

    /// Paths in insertion order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.path.as_str())
    }

    /// Number of files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the tree holds no files
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Merge another tree into this one, preserving both insertion orders
    pub fn extend(&mut self, other: FileTree) {
        for file in other.files {
            self.insert(file.path, file.content);
        }
    }
}

impl IntoIterator for FileTree {
    type Item = GeneratedFile;
    type IntoIter = std::vec::IntoIter<GeneratedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}

impl<'a> IntoIterator for &'a FileTree {
    type Item = &'a GeneratedFile;
    type IntoIter = std::slice::Iter<'a, GeneratedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}
