//! Dependency resolution for the copy step
//!
//! This module turns the host project's ordered dependency list into a flat,
//! ordered list of concrete file paths. Three expression forms are handled:
//!
//! - **Literal paths** pass through untouched. They are deliberately not
//!   existence-checked here; a missing literal file surfaces as a copy
//!   failure, which carries better context for the user.
//! - **Glob patterns** (`*` / `?`) are split into a parent directory and a
//!   file-name pattern, the directory is enumerated non-recursively, and
//!   matches are filtered to binary modules (`.dll` / `.exe`,
//!   case-insensitive). Companion files caught by a broad pattern - debug
//!   symbols, XML documentation - are skipped silently by policy.
//! - **`GAC:` references** are resolved through the injected assembly-cache
//!   capability. The lookup handle is acquired lazily on the first such
//!   reference and released when the resolve pass ends, whether it succeeded
//!   or not (see [`crate::lookup::LazyLookup`]).
//!
//! Resolution is strictly fail-fast: the first error aborts the remaining
//! specs. There is no partial-success mode.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;
use tracing::{debug, trace};

use crate::core::HelpDepsError;
use crate::lookup::{LazyLookup, LookupProvider};
use crate::models::{DependencySpec, ResolvedDependency, has_binary_extension, is_wildcard};

/// Resolves dependency specs into concrete files for one copy pass.
#[derive(Debug, Default)]
pub struct DependencyResolver;

impl DependencyResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolves every spec, in input order, into zero or more concrete files.
    ///
    /// A literal spec contributes exactly one entry; a wildcard spec
    /// contributes one entry per matching binary module (possibly none); a
    /// `GAC:` spec contributes the cached assembly's path.
    ///
    /// # Errors
    ///
    /// Fails fast on the first invalid glob pattern, missing wildcard
    /// directory, or assembly-cache failure. Remaining specs are not
    /// processed.
    pub fn resolve(
        &self,
        specs: &[DependencySpec],
        provider: &dyn LookupProvider,
    ) -> Result<Vec<ResolvedDependency>> {
        let mut lookup = LazyLookup::new(provider);
        let mut resolved = Vec::new();

        for spec in specs {
            // GAC references go through the external cache first; the result
            // is then treated like any other path expression.
            let expression = match spec.gac_identity() {
                Some(identity) => {
                    let path = lookup.resolve(identity)?;
                    debug!(
                        "Resolved assembly '{}' to {}",
                        identity,
                        path.display()
                    );
                    path
                }
                None => PathBuf::from(&spec.path_expression),
            };

            if is_wildcard(&expression.to_string_lossy()) {
                self.expand_wildcard(&expression, &mut resolved)?;
            } else {
                trace!("Literal dependency: {}", expression.display());
                resolved.push(ResolvedDependency::new(expression));
            }
        }

        debug!("Resolved {} dependency file(s)", resolved.len());
        Ok(resolved)
    }

    /// Expands one wildcard expression against its parent directory.
    ///
    /// Enumeration is non-recursive: only direct children of the pattern's
    /// directory are considered, matching the host tool's own dependency
    /// semantics.
    fn expand_wildcard(
        &self,
        expression: &Path,
        resolved: &mut Vec<ResolvedDependency>,
    ) -> Result<()> {
        let dir = match expression.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let name_pattern = expression
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();

        let pattern =
            Pattern::new(name_pattern).map_err(|e| HelpDepsError::InvalidPattern {
                pattern: expression.to_string_lossy().into_owned(),
                reason: e.to_string(),
            })?;

        if !dir.is_dir() {
            return Err(HelpDepsError::DependencyDirNotFound { path: dir }.into());
        }

        debug!(
            "Searching for pattern '{}' in {}",
            name_pattern,
            dir.display()
        );

        // read_dir order is platform-dependent; sort for deterministic output.
        let mut matches = Vec::new();
        for entry in std::fs::read_dir(&dir)
            .with_context(|| format!("Failed to read directory: {}", dir.display()))?
        {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            trace!("Checking candidate: {file_name}");
            if !pattern.matches(file_name) {
                continue;
            }
            if !has_binary_extension(&path) {
                trace!("Skipping non-binary match: {file_name}");
                continue;
            }
            matches.push(path);
        }
        matches.sort();

        debug!("Found {} match(es) for pattern '{}'", matches.len(), name_pattern);
        resolved.extend(matches.into_iter().map(ResolvedDependency::new));
        Ok(())
    }
}
