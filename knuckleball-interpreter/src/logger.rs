use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// The statement log: one timestamped line per executed statement.
pub struct Logger {
    output: Box<dyn Write + Send>,
}

impl Logger {
    /// Logs to the standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Logs to the given file, appending to it if it already exists.
    pub fn file(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Ok(Self::new(file))
    }

    /// Logs to the standard output if `path` is empty, or to that file otherwise.
    pub fn from_path(path: &str) -> io::Result<Self> {
        if path.is_empty() {
            Ok(Self::stdout())
        } else {
            Self::file(path)
        }
    }

    /// Logs into an arbitrary writer.
    pub fn new(output: impl Write + Send + 'static) -> Self {
        Self {
            output: Box::new(output),
        }
    }

    /// Writes `[YYYY-MM-DD HH:MM:SS] <input> -> <output>`, in local time.
    ///
    /// The statement and its output are written byte for byte.
    /// A failing log never fails the statement itself.
    pub fn log(&mut self, input: &[u8], output: &[u8]) {
        let timestamp = chrono::Local::now().format("[%Y-%m-%d %H:%M:%S] ");
        let mut line = timestamp.to_string().into_bytes();
        line.extend_from_slice(input);
        line.extend_from_slice(b" -> ");
        line.extend_from_slice(output);
        line.push(b'\n');

        let written = self
            .output
            .write_all(&line)
            .and_then(|_| self.output.flush());
        if let Err(err) = written {
            tracing::warn!(error = %err, "could not write to the statement log");
        }
    }
}
