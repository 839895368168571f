use std::io::{self, Write};

/// Destination of the text events produced by the simulation.
pub trait Sink {
    fn emit(&self, line: String) -> io::Result<()>;
}

/// Writes every event on its own line to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn emit(&self, line: String) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{line}")
    }
}
