//! # linewise
//!
//! Write one handle-writing operation, get a file writer and a string writer
//! for free.
//!
//! ## Overview
//!
//! linewise provides:
//! - **Derived writers**: `write_file` opens a named file, `write_string`
//!   opens an in-memory octet buffer; both delegate to your `write_handle`
//! - **Text layers**: a binmode such as `encoding(UTF-8)`, `raw`, `crlf` or
//!   `encoding(iso-8859-1)` is applied to every handle
//! - **Per-call overrides**: `write_file_with` accepts `WriteOptions` whose
//!   binmode applies to that call only
//! - **Two surfaces**: a `WriteHandle` trait with blanket writers, or a
//!   `WritersBuilder` taking a closure and a `WriterConfig`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use linewise::{Handle, WritersBuilder};
//!
//! struct Report;
//!
//! let writers = WritersBuilder::<Report, [String]>::new()
//!     .method("write_rows", |_report, rows, handle: &mut Handle, ()| {
//!         for row in rows {
//!             handle.say(row)?;
//!         }
//!         Ok(())
//!     })
//!     .build()?;
//!
//! let rows = vec!["a".to_string(), "b".to_string()];
//! assert_eq!(writers.write_string(&Report, &rows, ())?, "a\nb\n");
//! writers.write_file(&Report, &rows, "report.txt", ())?;
//! ```
//!
//! ## Handle ownership
//!
//! The generated operations always open and close the handle themselves.
//! A handle-writing operation must not hold on to it; when it returns `Ok`
//! the handle is flushed and closed, when it returns `Err` the handle is
//! released and the error is passed through.
//!
//! ## Features
//!
//! - `json` - `WriterConfig::from_json_str`
//! - `yaml` - `WriterConfig::from_yaml_str`
//! - `miette` - Pretty error reporting with miette

// Core modules
pub mod builder;
pub mod config;
pub mod error;
pub mod io;
pub mod layer;
pub mod mixin;
pub mod writers;

// Re-exports for convenience
pub use builder::WritersBuilder;
pub use config::{WriteOptions, WriterConfig};
pub use error::{Error, Result, Stage};
pub use io::{FileOutput, Handle, InMemorySink, Octets, OutputTarget};
pub use layer::{Binmode, DEFAULT_BINMODE, TextLayer};
pub use mixin::{LinewiseWriters, WriteHandle};
pub use writers::{WriteFn, Writers};

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::WriteDiagnostic;

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
