use std::io::{self, BufRead, Write};

/// Line-oriented prompt/print pair. Generic so sessions can be driven by
/// stdin/stdout or by scripted input in tests.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", line.as_ref())
    }

    /// Prints `marker` without a newline and reads one line. Returns `None`
    /// once input is exhausted; the line comes back with surrounding
    /// whitespace trimmed and undecodable bytes replaced by U+FFFD.
    pub fn prompt(&mut self, marker: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", marker)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
