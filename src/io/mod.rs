//! I/O abstractions for output targets and the handles written through them.
//!
//! This module provides:
//! - `OutputTarget`: Trait for output destinations
//! - `FileOutput`: Named file destination
//! - `InMemorySink`: Octet buffer destination backing the string writers
//! - `Handle`: The layered stream a handle-writing operation writes to
//! - `Octets`: Raw writer below a handle's text layer

mod handle;
mod memory;
mod output;
mod std_io;

pub use handle::{Handle, Octets};
pub use memory::InMemorySink;
pub use output::OutputTarget;
pub use std_io::FileOutput;
