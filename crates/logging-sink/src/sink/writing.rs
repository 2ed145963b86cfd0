use super::LogSink;
use std::io::{self, Write};

impl<W> LogSink<W>
where
    W: Write,
{
    /// Writes `line` followed by a newline as one uninterrupted write.
    ///
    /// `line` must not carry its own terminator; the sink always appends
    /// exactly one `\n`.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut buffer = Vec::with_capacity(line.len() + 1);
        buffer.extend_from_slice(line.as_bytes());
        buffer.push(b'\n');
        self.lock().write_all(&buffer)
    }

    /// Flushes the underlying writer.
    pub fn flush(&self) -> io::Result<()> {
        self.lock().flush()
    }
}
