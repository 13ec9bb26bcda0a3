#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// An in-memory sink that can be inspected while a `Logger` owns a clone.
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Capture {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    /// Emitted lines, without the level change notices.
    pub fn messages(&self) -> Vec<String> {
        self.text()
            .lines()
            .filter(|line| !line.starts_with("LOGGER: "))
            .map(str::to_string)
            .collect()
    }
}

/// Splits `[Label] message` off whatever prefix precedes it.
pub fn strip_prefix(line: &str) -> &str {
    let start = line.find('[').expect("line has no label");
    &line[start..]
}
