//! Assembly-cache lookup capability
//!
//! `GAC:`-prefixed dependency path expressions cannot be resolved through the
//! filesystem; they name an assembly identity that must be looked up in the
//! platform's system-wide assembly cache. That cache is an external resource,
//! so it is modeled here as an injected capability rather than ambient global
//! state: the host supplies a [`LookupProvider`], the resolver acquires a
//! handle from it lazily (only if a `GAC:` spec is actually present, and at
//! most once per resolve pass), and the handle is released when it is dropped
//! at the end of the pass - on every exit path, success or error.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

/// A live handle into the system-wide assembly cache.
///
/// Implementations resolve an assembly identity string (the text after the
/// `GAC:` marker, e.g. `System.Data, Version=2.0.0.0, Culture=neutral, ...`)
/// to the concrete file path of the cached assembly. Any resources the handle
/// holds are released on drop.
pub trait AssemblyLookup {
    /// Resolves one assembly identity to a concrete file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the identity is not present in the cache or the
    /// cache itself cannot be queried. Resolution errors are fatal to the
    /// whole dependency-copy pass.
    fn resolve(&mut self, identity: &str) -> Result<PathBuf>;
}

/// Factory for [`AssemblyLookup`] handles, implemented by the build host.
///
/// Creating a handle may itself fail (the cache service may be unavailable),
/// so acquisition is fallible and deferred until a `GAC:` spec is actually
/// encountered.
pub trait LookupProvider {
    /// Opens a fresh handle into the assembly cache.
    fn create_lookup(&self) -> Result<Box<dyn AssemblyLookup>>;
}

/// Lazily-acquired assembly-cache handle scoped to one resolve pass.
///
/// Wraps a [`LookupProvider`] and acquires the underlying handle on the first
/// [`resolve`](Self::resolve) call only. Dropping the `LazyLookup` drops the
/// handle, which releases the external resource regardless of how the resolve
/// pass ended.
pub struct LazyLookup<'a> {
    provider: &'a dyn LookupProvider,
    handle: Option<Box<dyn AssemblyLookup>>,
}

impl<'a> LazyLookup<'a> {
    /// Creates a lazy wrapper; no external resource is touched yet.
    pub fn new(provider: &'a dyn LookupProvider) -> Self {
        Self {
            provider,
            handle: None,
        }
    }

    /// Resolves an assembly identity, acquiring the underlying handle on
    /// first use.
    pub fn resolve(&mut self, identity: &str) -> Result<PathBuf> {
        let handle = match self.handle.as_mut() {
            Some(handle) => handle,
            None => {
                debug!("Acquiring assembly cache lookup handle");
                let handle = self
                    .provider
                    .create_lookup()
                    .context("Failed to open assembly cache lookup")?;
                self.handle.insert(handle)
            }
        };
        handle
            .resolve(identity)
            .with_context(|| format!("Failed to resolve assembly '{identity}' from the cache"))
    }

    /// Whether the underlying handle has been acquired.
    pub fn is_acquired(&self) -> bool {
        self.handle.is_some()
    }
}
