//! Configuration types for generated writers.
//!
//! This module provides:
//! - `WriterConfig`: Generation-time configuration (`method`, `binmode`)
//! - `WriteOptions`: Per-call options for the file writer

mod loader;
mod spec;

pub use spec::{DEFAULT_METHOD, WriteOptions, WriterConfig};
