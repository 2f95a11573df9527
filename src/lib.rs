//! helpdeps - Unique Dependency Copy plugin
//!
//! A plugin for help-file documentation build tools that replaces the host's
//! built-in dependency-copy step. Instead of copying referenced assemblies into
//! the working folder under their original names, every resolved dependency is
//! copied under a freshly generated UUID-based name (original extension
//! preserved), so that two distinct assemblies that happen to share a file name
//! (typically different versions of the same library) can both participate in
//! one build without clobbering each other.
//!
//! # Architecture Overview
//!
//! The crate has three layers, invoked top to bottom once per build:
//! - [`plugin`] - the host-facing adapter: identity metadata, lifecycle hooks,
//!   and the single execution point that substitutes the dependency-copy step
//! - [`resolver`] - expands dependency path expressions (literal paths, glob
//!   patterns, and `GAC:` assembly-cache references) into concrete files
//! - [`copier`] - copies each resolved file into the `DLL` working subfolder
//!   under a unique name and normalizes its attributes
//!
//! The host tool is consumed purely through traits: [`plugin::BuildHost`]
//! supplies the working folder, the dependency list, and progress reporting,
//! while [`lookup::AssemblyLookup`] abstracts the system-wide assembly cache.
//! Nothing in this crate touches ambient global state.
//!
//! # Example
//!
//! ```rust,no_run
//! use helpdeps::plugin::{BuildStep, DependencyCopyPlugin, ExecutionContext, Plugin};
//! # use helpdeps::plugin::BuildHost;
//! # fn example(host: std::sync::Arc<dyn BuildHost>) -> anyhow::Result<()> {
//! let mut plugin = DependencyCopyPlugin::new();
//! plugin.initialize(host)?;
//! plugin.execute(&ExecutionContext::new(BuildStep::CopyDependencies))?;
//! # Ok(())
//! # }
//! ```

// Core functionality modules
pub mod constants;
pub mod core;
pub mod models;

// Resolution and copying
pub mod copier;
pub mod lookup;
pub mod resolver;

// Host integration
pub mod plugin;

// Supporting modules
pub mod utils;
