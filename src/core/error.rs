//! Error handling for helpdeps
//!
//! This module provides the typed error enum for the plugin. The error system
//! follows two principles:
//! 1. **Strongly-typed errors** so the host (or tests) can match on precise
//!    failure modes
//! 2. **Fail-fast propagation** - no variant here is ever retried or recovered
//!    from; the first failure aborts the dependency-copy pass and surfaces to
//!    the host build pipeline, which owns user-visible error reporting
//!
//! # Error Categories
//!
//! - **Lifecycle**: [`HelpDepsError::PluginNotInitialized`]
//! - **Resolution**: [`HelpDepsError::AssemblyResolutionFailed`],
//!   [`HelpDepsError::InvalidPattern`], [`HelpDepsError::DependencyDirNotFound`]
//! - **File System**: [`HelpDepsError::FileSystemError`], [`HelpDepsError::IoError`]
//!
//! Common standard library errors are converted automatically:
//! [`std::io::Error`] → [`HelpDepsError::IoError`]. Fallible seams that talk to
//! the host use `anyhow::Result` with context, and only construct these typed
//! variants where a caller could plausibly dispatch on them.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for helpdeps operations
///
/// Every variant is fatal to the current dependency-copy pass. The deliberate
/// exception in the design - wildcard matches with a non-binary extension -
/// never produces an error at all: those files are a policy-level skip, not a
/// failure.
#[derive(Error, Debug)]
pub enum HelpDepsError {
    /// The execution hook was invoked before `initialize`
    ///
    /// The plugin adapter is a two-state machine (uninitialized → initialized)
    /// and the host contract guarantees `initialize` runs first; hitting this
    /// variant means the host misdispatched or a test drove the adapter
    /// directly.
    #[error("plugin has not been initialized with a build host context")]
    PluginNotInitialized,

    /// The assembly-cache lookup could not resolve an identity string
    ///
    /// # Fields
    /// - `identity`: The assembly identity that failed to resolve (the text
    ///   after the `GAC:` marker)
    /// - `reason`: The lookup service's failure description
    #[error("unable to resolve assembly '{identity}' from the assembly cache: {reason}")]
    AssemblyResolutionFailed {
        /// The assembly identity that failed to resolve
        identity: String,
        /// The lookup service's failure description
        reason: String,
    },

    /// A dependency path expression contains invalid glob syntax
    #[error("invalid wildcard pattern in dependency path '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending path expression
        pattern: String,
        /// Why the glob compiler rejected it
        reason: String,
    },

    /// A wildcard dependency referenced a directory that does not exist
    ///
    /// Literal (non-wildcard) paths are not existence-checked at resolution
    /// time - a missing literal file surfaces later as a copy failure - but
    /// enumerating a missing directory is always a configuration error.
    #[error("dependency directory not found: {path}")]
    DependencyDirNotFound {
        /// The directory portion of the wildcard expression
        path: PathBuf,
    },

    /// A file system operation failed on a specific path
    #[error("file system error at {path}: {source}")]
    FileSystemError {
        /// The path the operation was acting on
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Generic I/O error without path context
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
