//! Formats raw memory regions as hex tables: fixed-size chunks, one row per
//! chunk, highest addresses first, staged through a fixed-capacity buffer
//! that is flushed to a sink before it can overflow.

mod buffer;
mod config;
mod dump;
mod error;
mod sink;
mod span;

pub use config::DumpConfig;
pub use dump::{dump_to_string, format_dump};
pub use error::Error;
pub use sink::{FlushSink, WriteSink};
pub use span::MemorySpan;
