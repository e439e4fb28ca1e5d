//! Builder for creating Writers instances.

use std::sync::Arc;

use crate::config::WriterConfig;
use crate::error::{Error, Result};
use crate::io::Handle;
use crate::layer::Binmode;
use crate::mixin::WriteHandle;
use crate::writers::{WriteFn, Writers};

pub struct WritersBuilder<T: ?Sized, D: ?Sized, A = (), R = ()> {
    config: WriterConfig,
    write_fn: Option<WriteFn<T, D, A, R>>,
}

impl<T: ?Sized, D: ?Sized, A, R> WritersBuilder<T, D, A, R> {
    pub fn new() -> Self {
        Self::from_config(WriterConfig::default())
    }

    /// Start from a generation-time configuration.
    ///
    /// The configured method name is kept; the handle-writing operation
    /// itself still has to be attached with [`with_write_fn`](Self::with_write_fn).
    pub fn from_config(config: WriterConfig) -> Self {
        Self {
            config,
            write_fn: None,
        }
    }

    /// Attach the handle-writing operation under the given name.
    pub fn method<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&T, &D, &mut Handle<'_>, A) -> Result<R> + Send + Sync + 'static,
    {
        self.config.method = name.into();
        self.write_fn = Some(Arc::new(f));
        self
    }

    /// Attach the handle-writing operation, keeping the configured name.
    pub fn with_write_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, &D, &mut Handle<'_>, A) -> Result<R> + Send + Sync + 'static,
    {
        self.write_fn = Some(Arc::new(f));
        self
    }

    pub fn with_binmode(mut self, binmode: Binmode) -> Self {
        self.config.binmode = binmode;
        self
    }

    /// Parse and set the default binmode.
    pub fn binmode(self, spec: &str) -> Result<Self> {
        let binmode = Binmode::parse(spec)?;
        Ok(self.with_binmode(binmode))
    }

    pub fn build(self) -> Result<Writers<T, D, A, R>> {
        let write_fn = self.write_fn.ok_or_else(|| {
            Error::InvalidArgument(format!(
                "no handle-writing operation attached for method '{}'",
                self.config.method
            ))
        })?;

        Ok(Writers::new(self.config.method, self.config.binmode, write_fn))
    }
}

impl<T, D, A, R> WritersBuilder<T, D, A, R>
where
    T: WriteHandle<D, A, Output = R> + 'static,
    D: ?Sized + 'static,
    A: 'static,
    R: 'static,
{
    /// Builder wired to `T::write_handle`, starting from `T::linewise_config()`.
    pub fn for_handle() -> Self {
        Self::from_config(T::linewise_config())
            .with_write_fn(|invocant: &T, data: &D, handle: &mut Handle<'_>, args: A| {
                invocant.write_handle(data, handle, args)
            })
    }
}

impl<T: ?Sized, D: ?Sized, A, R> Default for WritersBuilder<T, D, A, R> {
    fn default() -> Self {
        WritersBuilder::new()
    }
}
