//! Stdin abstraction for testability.
//!
//! The pipeline never touches `std::io::stdin()` directly. It goes through
//! [`StdinReader`], so tests can simulate piped input and check whether the
//! stream was consumed at all.

use std::io::{self, IsTerminal, Read};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Abstraction over stdin reading.
pub trait StdinReader: Send + Sync {
    /// Check if stdin is a terminal (TTY).
    ///
    /// Returns `true` if stdin is interactive, `false` if piped.
    fn is_terminal(&self) -> bool;

    /// Read stdin until end of stream.
    fn read_to_end(&self) -> io::Result<Vec<u8>>;
}

/// Real stdin reader using std::io.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealStdin;

impl StdinReader for RealStdin {
    fn is_terminal(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn read_to_end(&self) -> io::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        io::stdin().lock().read_to_end(&mut buffer)?;
        Ok(buffer)
    }
}

/// Mock stdin reader for testing.
///
/// Clones share the read counter, so a test can hand one clone to the code
/// under test and keep another to inspect [`reads`](Self::reads).
#[derive(Debug, Clone)]
pub struct MockStdin {
    is_terminal: bool,
    content: Result<Vec<u8>, io::ErrorKind>,
    reads: Arc<AtomicUsize>,
}

impl MockStdin {
    /// Create a mock that simulates a terminal with nothing typed.
    pub fn terminal() -> Self {
        Self {
            is_terminal: true,
            content: Ok(Vec::new()),
            reads: Arc::default(),
        }
    }

    /// Create a mock that simulates piped input.
    pub fn piped(content: impl Into<Vec<u8>>) -> Self {
        Self {
            is_terminal: false,
            content: Ok(content.into()),
            reads: Arc::default(),
        }
    }

    /// Create a mock that simulates empty piped input.
    pub fn piped_empty() -> Self {
        Self::piped(Vec::new())
    }

    /// Create a mock whose reads fail with the given error kind.
    pub fn failing(kind: io::ErrorKind) -> Self {
        Self {
            is_terminal: false,
            content: Err(kind),
            reads: Arc::default(),
        }
    }

    /// Number of times the stream has been read.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl StdinReader for MockStdin {
    fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    fn read_to_end(&self) -> io::Result<Vec<u8>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        match &self.content {
            Ok(bytes) => Ok(bytes.clone()),
            Err(kind) => Err(io::Error::new(*kind, "mock stdin failure")),
        }
    }
}
