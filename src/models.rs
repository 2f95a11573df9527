//! Shared data models for dependency resolution and copying
//!
//! This module provides the small set of value types that flow through one
//! execution of the dependency-copy step. All of them are created and
//! discarded within a single pass; nothing here is persisted by the plugin
//! (the host owns the project model that `DependencySpec` values come from).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::GAC_PREFIX;

/// One entry from the host project's dependency list.
///
/// The path expression may take three forms:
/// - a literal filesystem path (`libs/Widget.dll`)
/// - a glob pattern containing `*` or `?` (`libs/Widget.*.dll`)
/// - a symbolic assembly-cache reference (`GAC:System.Data, Version=2.0.0.0, ...`)
///
/// Specs are owned by the host project model; the plugin only reads them.
/// `Serialize`/`Deserialize` are derived so hosts can round-trip dependency
/// lists through their project files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencySpec {
    /// The raw path expression as configured in the host project.
    pub path_expression: String,
}

impl DependencySpec {
    /// Creates a spec from any string-like path expression.
    pub fn new(path_expression: impl Into<String>) -> Self {
        Self {
            path_expression: path_expression.into(),
        }
    }

    /// Returns the assembly identity portion if this spec is a `GAC:`
    /// reference, `None` otherwise.
    pub fn gac_identity(&self) -> Option<&str> {
        self.path_expression.strip_prefix(GAC_PREFIX)
    }
}

/// A concrete file path produced by expanding one [`DependencySpec`].
///
/// Ephemeral: exists only between the resolve pass and the copy pass of a
/// single execution. The path is not guaranteed to exist when the spec was a
/// literal (non-wildcard) expression - the copy step surfaces that failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDependency {
    /// Concrete path to the dependency file.
    pub path: PathBuf,
}

impl ResolvedDependency {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// The source → destination mapping produced by one unique copy.
///
/// Emitted purely for progress reporting; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRecord {
    /// Path the file was copied from.
    pub source: PathBuf,
    /// Path the file was copied to (`<uuid>.<ext>` inside the DLL folder).
    pub destination: PathBuf,
}

impl CopyRecord {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Destination file name without its directory, for progress messages.
    pub fn destination_name(&self) -> &str {
        self.destination
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }
}

/// Returns `true` if the path expression contains glob metacharacters.
///
/// Only `*` and `?` are treated as wildcards; bracket classes are not part of
/// the host's dependency syntax.
pub fn is_wildcard(expression: &str) -> bool {
    expression.contains('*') || expression.contains('?')
}

/// Returns `true` if the file's extension marks it as a binary module
/// (`.dll` or `.exe`, case-insensitive).
pub fn has_binary_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            crate::constants::BINARY_EXTENSIONS
                .iter()
                .any(|b| ext.eq_ignore_ascii_case(b))
        })
}
