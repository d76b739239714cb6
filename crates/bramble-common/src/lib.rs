//! Shared infrastructure for the Bramble HTML parser.
//!
//! This crate provides the plumbing used by both parsing stages:
//! - **Diagnostics** - locations, parse errors, warnings and the [`ErrorSink`] trait
//! - **Fatal errors** - the [`FatalError`] returned when a strict policy aborts a parse
//! - **Warning System** - deduplicated, colored terminal output

pub mod diagnostics;
pub mod warning;

pub use diagnostics::{
    CollectingSink, Diagnostic, ErrorSink, FatalError, Location, NullSink, Severity,
};
