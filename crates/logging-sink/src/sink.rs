use std::fmt;
use std::io;
use std::sync::{Mutex, MutexGuard, PoisonError};

mod writing;

/// Line-oriented sink that serialises writes to an [`io::Write`] target.
///
/// The sink is shared by reference between every caller of a logger, so all
/// methods take `&self`; mutual exclusion is handled internally.
pub struct LogSink<W> {
    writer: Mutex<W>,
}

impl<W> LogSink<W> {
    /// Creates a sink that writes to `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Runs `f` with exclusive access to the underlying writer.
    ///
    /// No entry can be written while `f` runs.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.lock())
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogSink<io::Stderr> {
    /// Creates a sink bound to the process's standard error stream.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W> Default for LogSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> fmt::Debug for LogSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogSink")
            .field("writer", &std::any::type_name::<W>())
            .finish()
    }
}
