use std::{cell::RefCell, io};

use common::sink::Sink;

/// Keeps every emitted line, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: RefCell<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Lines containing `pattern`, in emission order.
    pub fn lines_matching(&self, pattern: &str) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|line| line.contains(pattern))
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl Sink for RecordingSink {
    fn emit(&self, line: String) -> io::Result<()> {
        self.lines.borrow_mut().push(line);
        Ok(())
    }
}
