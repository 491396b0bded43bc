use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

use super::Destination;

/// Keeps rendered lines in memory. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemoryDestination {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryDestination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Return and drop everything captured so far
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl Destination for MemoryDestination {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }
}
