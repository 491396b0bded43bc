use std::io::{self, Write};

use super::Destination;

/// Standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleDestination;

impl Destination for ConsoleDestination {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")
    }

    fn flush(&self) -> io::Result<()> {
        io::stdout().lock().flush()
    }
}
