//! Output target trait definition.

use std::fmt::Debug;
use std::io::Write;

/// Trait for synchronous output targets.
///
/// Implementors open a writable octet stream to a destination such as a file
/// or an in-memory buffer. The stream may borrow the target, so a target is
/// opened by at most one [`Handle`](super::Handle) at a time. Text layers are
/// applied on top of it by the handle.
pub trait OutputTarget: Send + Debug {
    /// Identifier used in errors and logs: the path for files, "<string>"
    /// for in-memory buffers.
    fn id(&self) -> &str;

    /// Open the target for writing, truncating any existing content.
    fn open_overwrite(&mut self) -> std::io::Result<Box<dyn Write + Send + '_>>;
}
