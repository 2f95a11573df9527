//! Cross-platform utilities for helpdeps
//!
//! Small helpers shared by the resolver, copier, and plugin adapter. Only the
//! filesystem helpers live here; everything else in the crate is
//! domain-specific enough to have its own module.

pub mod fs;
