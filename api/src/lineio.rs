use std::io::{BufRead, Write};

// Wire traffic is logged under this target so it can be enabled on its own.
pub const TRACE_TARGET: &str = "wire";

#[derive(Clone, Copy, Debug, Default)]
pub struct Trace {
    pub verbose: bool,
}

impl Trace {
    // `None` is the end of input; it traces like an empty line.
    pub fn inbound(&self, line: Option<&str>) -> Option<String> {
        if !self.verbose {
            return None;
        }
        match line {
            None | Some("") => Some("> [empty!]".to_owned()),
            Some(line) => Some(format!("> {line}")),
        }
    }

    pub fn outbound(&self, line: &str) -> Option<String> {
        self.verbose.then(|| format!("< {line}"))
    }
}

/// Line-at-a-time access to the engine: one inbound line per `read_line`,
/// one outbound line per `write_line`, flushed immediately so the engine
/// never waits on a buffered response.
pub struct LineIO<R, W> {
    input: R,
    output: W,
    trace: Trace,
    buf: String,
}

impl<R: BufRead, W: Write> LineIO<R, W> {
    pub fn new(input: R, output: W, trace: Trace) -> Self {
        Self {
            input,
            output,
            trace,
            buf: String::new(),
        }
    }

    /// Returns the next line without its terminator, or `None` once the
    /// input is exhausted.
    pub fn read_line(&mut self) -> std::io::Result<Option<String>> {
        self.buf.clear();
        if self.input.read_line(&mut self.buf)? == 0 {
            emit(self.trace.inbound(None));
            return Ok(None);
        }
        let line = self
            .buf
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(self.buf.as_str())
            .to_owned();
        emit(self.trace.inbound(Some(&line)));
        Ok(Some(line))
    }

    pub fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        emit(self.trace.outbound(line));
        writeln!(self.output, "{line}")?;
        self.output.flush()
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

fn emit(entry: Option<String>) {
    if let Some(entry) = entry {
        log::debug!(target: TRACE_TARGET, "{entry}");
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn io(input: &str) -> LineIO<&[u8], Vec<u8>> {
        LineIO::new(input.as_bytes(), vec![], Trace { verbose: true })
    }

    #[test]
    fn reads_lines_until_end() {
        let mut lio = io("building 1 2\r\n\nstop");
        assert_eq!(lio.read_line().unwrap().as_deref(), Some("building 1 2"));
        assert_eq!(lio.read_line().unwrap().as_deref(), Some(""));
        assert_eq!(lio.read_line().unwrap().as_deref(), Some("stop"));
        assert_eq!(lio.read_line().unwrap(), None);
        assert_eq!(lio.read_line().unwrap(), None);
    }

    #[test]
    fn verbose_trace_entries() {
        let trace = Trace { verbose: true };
        assert_eq!(trace.inbound(Some("events 0")).as_deref(), Some("> events 0"));
        assert_eq!(trace.inbound(Some("")).as_deref(), Some("> [empty!]"));
        assert_eq!(trace.inbound(None).as_deref(), Some("> [empty!]"));
        assert_eq!(trace.outbound("move 0 3").as_deref(), Some("< move 0 3"));
    }

    #[test]
    fn quiet_trace_is_silent() {
        let trace = Trace::default();
        assert_eq!(trace.inbound(Some("events 0")), None);
        assert_eq!(trace.inbound(Some("")), None);
        assert_eq!(trace.inbound(None), None);
        assert_eq!(trace.outbound("done"), None);
    }

    #[test]
    fn writes_terminated_lines() {
        let mut lio = io("");
        lio.write_line("ready").unwrap();
        lio.write_line("move 0 3").unwrap();
        let (_, out) = lio.into_inner();
        assert_eq!(String::from_utf8(out).unwrap(), "ready\nmove 0 3\n");
    }
}
