use log::trace;

use crate::error::Error;
use crate::sink::FlushSink;

/// Fixed-capacity staging buffer. The fill level is the owned `String`'s
/// length; contents never exceed `capacity`.
pub(crate) struct FormatBuffer {
    text: String,
    capacity: usize,
}

impl FormatBuffer {
    pub(crate) fn new(capacity: usize) -> FormatBuffer {
        FormatBuffer {
            text: String::with_capacity(capacity),
            capacity,
        }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.capacity - self.text.len()
    }

    pub(crate) fn push_str(&mut self, part: &str) {
        debug_assert!(part.len() <= self.remaining());
        self.text.push_str(part);
    }

    /// Emits the buffered contents to `sink` and resets to empty. An empty
    /// buffer emits nothing, so sinks never see empty fragments.
    pub(crate) fn flush_to<S: FlushSink>(&mut self, sink: &mut S) -> Result<(), Error> {
        if self.text.is_empty() {
            return Ok(());
        }

        trace!("flushing {} buffered chars", self.text.len());
        sink.append(&self.text)?;
        self.text.clear();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flush_resets_buffer() {
        let mut buffer = FormatBuffer::new(8);
        let mut events: Vec<String> = Vec::new();

        buffer.push_str("ab");
        assert_eq!(buffer.remaining(), 6);

        buffer.flush_to(&mut events).unwrap();
        buffer.flush_to(&mut events).unwrap();

        assert_eq!(events, vec!["ab".to_string()]);
        assert_eq!(buffer.remaining(), 8);
    }
}
