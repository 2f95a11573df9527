//! Host-facing plugin adapter
//!
//! This module is the shim between the host build tool's plugin contract and
//! the resolver/copier pipeline. The host discovers plugins through a fixed
//! set of lifecycle and metadata members; here that contract is the [`Plugin`]
//! trait, and [`DependencyCopyPlugin`] is its single implementation.
//!
//! The adapter registers exactly one execution point: it *replaces* the
//! host's built-in dependency-copy step rather than running alongside it.
//! When dispatched for that step it resolves every configured dependency and
//! copies each resulting file into the `DLL` subfolder of the working folder
//! under a unique name. For any other step it is a deliberate no-op.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use semver::Version;
use serde_json::Value;
use tracing::debug;

use crate::constants::{
    DLL_SUBDIRECTORY, MINIMUM_HOST_VERSION, PLUGIN_COPYRIGHT, PLUGIN_DESCRIPTION, PLUGIN_NAME,
};
use crate::copier::copy_unique;
use crate::core::HelpDepsError;
use crate::lookup::{AssemblyLookup, LookupProvider};
use crate::models::DependencySpec;
use crate::resolver::DependencyResolver;
use crate::utils::fs::ensure_dir;

/// The host tool's build steps, in pipeline order.
///
/// The enumeration is owned by the host; the plugin only ever dispatches on
/// [`BuildStep::CopyDependencies`], but the full set exists because execution
/// points are registered against concrete step values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildStep {
    /// Build starting; working folder about to be prepared.
    Initializing,
    /// Documentation sources are being checked for existence and validity.
    ValidatingDocumentationSources,
    /// Referenced assemblies are copied into the working folder.
    CopyDependencies,
    /// Reflection data is generated from the documented assemblies.
    GenerateReflectionInfo,
    /// Topic files are transformed into the output format.
    TransformingTopics,
    /// The final help file is compiled.
    CompilingHelpFile,
    /// Build finished.
    Completed,
}

/// How a registered execution point relates to the host's built-in behavior
/// for the same step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionBehavior {
    /// Run before the host's built-in step.
    Before,
    /// Run after the host's built-in step.
    After,
    /// Fully substitute the host's built-in step.
    InsteadOf,
}

/// A (step, behavior) pair a plugin registers against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionPoint {
    pub build_step: BuildStep,
    pub behavior: ExecutionBehavior,
}

impl ExecutionPoint {
    pub const fn new(build_step: BuildStep, behavior: ExecutionBehavior) -> Self {
        Self {
            build_step,
            behavior,
        }
    }
}

/// Per-dispatch context passed to [`Plugin::execute`].
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    /// The build step being executed.
    pub build_step: BuildStep,
}

impl ExecutionContext {
    pub const fn new(build_step: BuildStep) -> Self {
        Self { build_step }
    }
}

/// Fixed identity metadata reported to the host's plugin loader.
#[derive(Debug, Clone)]
pub struct PluginMetadata {
    pub name: &'static str,
    pub description: &'static str,
    pub version: Version,
    pub copyright: &'static str,
    pub minimum_host_version: Version,
}

impl PluginMetadata {
    /// Returns `true` if the given host version can load this plugin.
    pub fn supports_host(&self, host_version: &Version) -> bool {
        *host_version >= self.minimum_host_version
    }
}

/// The build-process facade the host exposes to plugins.
///
/// Everything the plugin needs from the surrounding build lives behind this
/// trait: the scratch folder for the current run, the project's dependency
/// list, user-visible progress output, and access to the assembly cache.
pub trait BuildHost {
    /// Per-build-run scratch directory owned by the host.
    fn working_folder(&self) -> &Path;

    /// The current project's dependency list, in configured order.
    fn dependencies(&self) -> &[DependencySpec];

    /// Emits one user-visible progress message through the host's log.
    fn report_progress(&self, message: &str);

    /// Opens a handle into the system-wide assembly cache.
    fn create_lookup(&self) -> Result<Box<dyn AssemblyLookup>>;
}

/// Adapts a [`BuildHost`] to the resolver's [`LookupProvider`] capability.
struct HostLookupProvider<'a> {
    host: &'a dyn BuildHost,
}

impl LookupProvider for HostLookupProvider<'_> {
    fn create_lookup(&self) -> Result<Box<dyn AssemblyLookup>> {
        self.host.create_lookup()
    }
}

/// The lifecycle/metadata contract recognized by the host's plugin loader.
pub trait Plugin {
    /// Static identity metadata.
    fn metadata(&self) -> PluginMetadata;

    /// Whether the plugin also runs during incremental/partial builds.
    fn runs_in_partial_build(&self) -> bool;

    /// The execution points this plugin registers against.
    fn execution_points(&self) -> Vec<ExecutionPoint>;

    /// Binds the plugin to its host. Must be called before [`execute`](Self::execute).
    fn initialize(&mut self, host: Arc<dyn BuildHost>) -> Result<()>;

    /// Accepts an opaque configuration fragment and returns it (possibly
    /// modified). This plugin has no options, so the fragment passes through
    /// unchanged.
    fn configure(&self, configuration: Value) -> Value;

    /// Runs the plugin's behavior for one build step dispatch.
    fn execute(&self, context: &ExecutionContext) -> Result<()>;
}

/// Plugin that replaces the host's dependency-copy step with unique-name
/// copying.
///
/// Two-state lifecycle: constructed uninitialized, then bound to a host by
/// [`initialize`](Plugin::initialize) for the rest of its lifetime. Holds no
/// resources of its own - the assembly-cache handle is scoped entirely inside
/// the resolve pass - so dropping the plugin releases nothing.
#[derive(Default)]
pub struct DependencyCopyPlugin {
    host: Option<Arc<dyn BuildHost>>,
}

impl DependencyCopyPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    /// The resolve-then-copy pipeline for one dependency-copy dispatch.
    fn copy_dependencies(&self, host: &dyn BuildHost) -> Result<()> {
        let specs = host.dependencies();

        // Empty check runs before the destination folder is created; there is
        // nothing to gain from an empty DLL folder.
        if specs.is_empty() {
            host.report_progress("No dependencies to copy");
            return Ok(());
        }

        let dll_folder = host.working_folder().join(DLL_SUBDIRECTORY);
        ensure_dir(&dll_folder)?;

        let resolver = DependencyResolver::new();
        let provider = HostLookupProvider { host };
        let resolved = resolver.resolve(specs, &provider)?;

        for dependency in &resolved {
            let record = copy_unique(&dependency.path, &dll_folder)?;
            host.report_progress(&format!(
                "{} copied as {}",
                record.source.display(),
                record.destination_name()
            ));
        }

        Ok(())
    }
}

impl Plugin for DependencyCopyPlugin {
    fn metadata(&self) -> PluginMetadata {
        let (major, minor, patch) = MINIMUM_HOST_VERSION;
        PluginMetadata {
            name: PLUGIN_NAME,
            description: PLUGIN_DESCRIPTION,
            version: Version::new(1, 0, 0),
            copyright: PLUGIN_COPYRIGHT,
            minimum_host_version: Version::new(major, minor, patch),
        }
    }

    fn runs_in_partial_build(&self) -> bool {
        // Partial builds still need their dependencies in place.
        true
    }

    fn execution_points(&self) -> Vec<ExecutionPoint> {
        vec![ExecutionPoint::new(
            BuildStep::CopyDependencies,
            ExecutionBehavior::InsteadOf,
        )]
    }

    fn initialize(&mut self, host: Arc<dyn BuildHost>) -> Result<()> {
        debug!("Initializing '{}' plugin", PLUGIN_NAME);
        self.host = Some(host);
        Ok(())
    }

    fn configure(&self, configuration: Value) -> Value {
        configuration
    }

    fn execute(&self, context: &ExecutionContext) -> Result<()> {
        let host = self
            .host
            .as_deref()
            .ok_or(HelpDepsError::PluginNotInitialized)?;

        // Registered for exactly one step, but guard against misdispatch.
        if context.build_step != BuildStep::CopyDependencies {
            debug!("Ignoring dispatch for step {:?}", context.build_step);
            return Ok(());
        }

        self.copy_dependencies(host)
    }
}
