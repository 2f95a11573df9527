//! Unique-name file copying
//!
//! The whole point of this plugin: a resolved dependency is copied into the
//! destination folder under a freshly generated UUID v4 name rather than its
//! original name, so that two same-named assemblies from different sources
//! never collide inside one build. Only the source file's extension survives
//! the rename - later build steps identify modules by extension, not by name.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;
use uuid::Uuid;

use crate::core::HelpDepsError;
use crate::models::CopyRecord;
use crate::utils::fs::clear_readonly;

/// Copies one file into `dest_dir` under a unique name.
///
/// The destination file name is `<uuid>.<ext>` where the UUID is a fresh
/// random 128-bit identifier in hyphenated form and `<ext>` is the **source**
/// file's extension (a source with no extension yields a bare UUID name). Any
/// pre-existing file at the generated name is overwritten - with 2^122 random
/// values the collision probability is negligible, and overwrite-on-conflict
/// is the explicit policy rather than an error.
///
/// After the copy the destination's read-only bit is cleared so later build
/// steps can modify or delete the copy even when the source was read-only.
///
/// # Errors
///
/// Fails if the source is missing or unreadable, or the destination cannot be
/// written (permissions, disk full). Copy failures are fatal to the whole
/// dependency-copy pass; nothing is retried or skipped.
pub fn copy_unique(source: &Path, dest_dir: &Path) -> Result<CopyRecord> {
    let file_name = match source.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
        None => Uuid::new_v4().to_string(),
    };
    let destination = dest_dir.join(file_name);

    debug!(
        "Copying {} -> {}",
        source.display(),
        destination.display()
    );

    std::fs::copy(source, &destination)
        .map_err(|e| HelpDepsError::FileSystemError {
            path: source.to_path_buf(),
            source: e,
        })
        .with_context(|| {
            format!(
                "Failed to copy dependency {} to {}",
                source.display(),
                destination.display()
            )
        })?;

    // std::fs::copy carries the source permissions over; a read-only source
    // would otherwise produce a read-only copy.
    clear_readonly(&destination)?;

    Ok(CopyRecord::new(source, destination))
}
