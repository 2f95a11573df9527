//! Global constants used throughout the helpdeps codebase.
//!
//! This module contains the fixed names and markers that the host tool and the
//! plugin agree on. Defining them centrally keeps magic strings discoverable
//! and makes the host compatibility contract explicit.

/// Name of the subdirectory, under the host's working folder, that receives
/// the renamed dependency copies.
///
/// The name is fixed: later build steps in the host tool look for dependencies
/// in a folder literally called `DLL`, so it must not be localized or changed.
pub const DLL_SUBDIRECTORY: &str = "DLL";

/// Marker prefix identifying a dependency path expression that must be
/// resolved through the system-wide assembly cache rather than the filesystem.
///
/// The remainder of the expression after this prefix is an assembly identity
/// string (e.g. `GAC:System.Data, Version=2.0.0.0, Culture=neutral, ...`).
pub const GAC_PREFIX: &str = "GAC:";

/// File extensions considered binary modules when expanding glob patterns.
///
/// Wildcard matches with any other extension (debug symbols, XML doc files,
/// config files living next to the assemblies) are silently skipped.
/// Comparison is case-insensitive.
pub const BINARY_EXTENSIONS: [&str; 2] = ["dll", "exe"];

/// Plugin display name reported to the host's plugin loader.
pub const PLUGIN_NAME: &str = "Unique Dependency Copy";

/// Plugin description shown in the host's plugin configuration UI.
pub const PLUGIN_DESCRIPTION: &str = "Copies project dependencies into the working \
folder under unique file names so that differently-versioned assemblies with the \
same file name do not collide during a build.";

/// Copyright string reported in the plugin metadata.
pub const PLUGIN_COPYRIGHT: &str = "Copyright \u{a9} 2026, helpdeps contributors, All Rights Reserved";

/// Minimum host tool version this plugin is compatible with.
pub const MINIMUM_HOST_VERSION: (u64, u64, u64) = (1, 9, 0);
