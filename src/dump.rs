use log::debug;

use crate::buffer::FormatBuffer;
use crate::config::DumpConfig;
use crate::error::Error;
use crate::sink::FlushSink;
use crate::span::MemorySpan;

/// Formats `span` as a hex table and writes it to `sink` through a
/// fixed-capacity buffer, flushing whenever the next line would not fit.
///
/// Rows are printed highest address first, one `bytes_per_line` chunk per
/// row, each labelled with the aligned address one past the row's highest
/// byte. Configuration problems are reported before anything is emitted.
pub fn format_dump<S: FlushSink>(
    span: MemorySpan,
    config: &DumpConfig,
    sink: &mut S,
) -> Result<(), Error> {
    if config.bytes_per_line == 0 {
        return Err(Error::ZeroBytesPerLine);
    }

    let base = span.base_address();
    let end = base.checked_add(span.len()).ok_or(Error::AddressOverflow {
        base,
        len: span.len(),
    })?;

    // Row labels go up to the one-past-end boundary, so the address column
    // is sized for `end` and every label is zero-padded to the same width.
    let addr_width = format!("{:#x}", end).len();
    let header = header_line(addr_width, config.bytes_per_line);
    let line_length = header.len() - 1;
    let row_width = 5 + addr_width + 4 * config.bytes_per_line;

    let mut required = (header.len() + 1).max(row_width);
    if let Some(annotation) = &config.annotation {
        required = required.max(annotation.len());
    }
    if config.buffer_capacity < required {
        return Err(Error::CapacityTooSmall {
            capacity: config.buffer_capacity,
            required,
        });
    }

    debug!(
        "dumping {} bytes at {:#x}, {} per row, buffer of {}",
        span.len(),
        base,
        config.bytes_per_line,
        config.buffer_capacity
    );

    let mut buffer = FormatBuffer::new(config.buffer_capacity);

    if let Some(annotation) = &config.annotation {
        buffer.push_str(annotation);
    }

    check_and_flush(&mut buffer, sink, header.len() + 1)?;
    buffer.push_str(&header);
    buffer.push_str("\n");

    check_and_flush(&mut buffer, sink, line_length)?;
    buffer.push_str(&"_".repeat(line_length));

    let bytes = span.bytes();
    for i in (0..bytes.len()).rev() {
        if (base + i + 1) % config.bytes_per_line == 0 {
            // Crossing a chunk boundary: start a fresh row labelled with
            // the boundary address.
            check_and_flush(&mut buffer, sink, row_width)?;
            buffer.push_str(&format!(
                "\n  {:#0width$x}  ",
                base + i + 1,
                width = addr_width
            ));
        } else if i + 1 == bytes.len() {
            // Unaligned span end: the leading partial chunk carries no
            // label and shares the underline's line. Reserve a full row so
            // the unguarded byte tokens below cannot overflow.
            check_and_flush(&mut buffer, sink, row_width)?;
        }

        buffer.push_str(&format!("{:02X}  ", bytes[i]));
    }

    buffer.flush_to(sink)
}

/// Formats `span` into a single string; flush boundaries are invisible.
pub fn dump_to_string(span: MemorySpan, config: &DumpConfig) -> Result<String, Error> {
    let mut out = String::new();
    format_dump(span, config, &mut out)?;
    Ok(out)
}

/// Flushes the buffer if appending `next_len` more chars would not fit.
fn check_and_flush<S: FlushSink>(
    buffer: &mut FormatBuffer,
    sink: &mut S,
    next_len: usize,
) -> Result<(), Error> {
    if buffer.remaining() < next_len {
        buffer.flush_to(sink)?;
    }

    Ok(())
}

/// `"\n  Address  +3  +2  +1  +0  "` for four bytes per line, with the
/// label column padded to `addr_width`.
fn header_line(addr_width: usize, bytes_per_line: usize) -> String {
    let mut header = format!("\n  {:<width$}  ", "Address", width = addr_width);

    for i in (0..bytes_per_line).rev() {
        header.push_str(&format!("+{}  ", i));
    }

    header
}
