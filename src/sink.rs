use std::io;

/// Destination for flushed text. One operation: append a complete fragment.
pub trait FlushSink {
    fn append(&mut self, text: &str) -> io::Result<()>;
}

/// Adapter over any `io::Write`, for consoles and files.
pub struct WriteSink<W> {
    inner: W,
}

impl<W: io::Write> WriteSink<W> {
    pub fn new(inner: W) -> WriteSink<W> {
        WriteSink { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> FlushSink for WriteSink<W> {
    fn append(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())
    }
}

impl FlushSink for String {
    fn append(&mut self, text: &str) -> io::Result<()> {
        self.push_str(text);
        Ok(())
    }
}

/// Per-event capture; each flush lands as its own element.
impl FlushSink for Vec<String> {
    fn append(&mut self, text: &str) -> io::Result<()> {
        self.push(text.to_string());
        Ok(())
    }
}
