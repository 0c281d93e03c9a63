//! User-facing output for gator commands.
//!
//! Command results go to stdout, failures to stderr. Both sinks can be
//! replaced with custom writers so tests can capture what a command printed.

use colored::Colorize;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::error::{GatorError, Result};

/// Output mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Print command results
    Human,
    /// Only errors are emitted
    Quiet,
}

type Sink = Arc<Mutex<Box<dyn Write + Send>>>;

#[derive(Clone)]
pub struct Output {
    mode: OutputMode,
    out: Sink,
    err: Sink,
    is_tty: bool,
}

impl Output {
    /// Create an Output writing to stdout and stderr
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            out: Arc::new(Mutex::new(Box::new(io::stdout()))),
            err: Arc::new(Mutex::new(Box::new(io::stderr()))),
            is_tty: atty::is(atty::Stream::Stderr),
        }
    }

    /// Create an Output with custom writers (for testing)
    pub fn with_writers(
        mode: OutputMode,
        out: Box<dyn Write + Send>,
        err: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            mode,
            out: Arc::new(Mutex::new(out)),
            err: Arc::new(Mutex::new(err)),
            is_tty: false,
        }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Print a result line on stdout. Suppressed in quiet mode.
    pub fn line(&self, msg: &str) -> Result<()> {
        if self.mode == OutputMode::Quiet {
            return Ok(());
        }
        write_line(&self.out, msg)
    }

    /// Print an error line on stderr, red when stderr is a terminal.
    pub fn error(&self, msg: &str) {
        let line = if self.is_tty {
            msg.red().to_string()
        } else {
            msg.to_string()
        };
        // Nowhere left to report a failing stderr.
        let _ = write_line(&self.err, &line);
    }
}

fn write_line(sink: &Sink, msg: &str) -> Result<()> {
    let mut writer = sink.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    writeln!(writer, "{}", msg).map_err(GatorError::Output)?;
    writer.flush().map_err(GatorError::Output)
}
