//! Core types for helpdeps
//!
//! This module is the foundation of the plugin's type system. It currently
//! holds only the error types; the domain models live in [`crate::models`]
//! and the host-facing contracts in [`crate::plugin`].
//!
//! # Design Principles
//!
//! ## Error First Design
//! Every operation that can fail returns a [`Result`] with meaningful error
//! information. No failure in this plugin is retried or recovered from: the
//! first error aborts the dependency-copy pass and propagates to the host
//! build pipeline, which owns user-visible reporting.
//!
//! ## Type Safety
//! Build steps, execution behaviors, and error variants are statically typed
//! so misdispatch is caught by the compiler rather than at run time.

pub mod error;

pub use error::HelpDepsError;
