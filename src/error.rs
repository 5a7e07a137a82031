use std::io;

pub enum Error {
    ZeroBytesPerLine,
    CapacityTooSmall { capacity: usize, required: usize },
    AddressOverflow { base: usize, len: usize },
    Io(io::Error),
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Error {
        Error::Io(error)
    }
}

use std::fmt;

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;

        match self {
            Io(err) => io::Error::fmt(err, f),
            ZeroBytesPerLine => f.write_str("ZeroBytesPerLine"),
            CapacityTooSmall { capacity, required } => f
                .debug_struct("CapacityTooSmall")
                .field("capacity", capacity)
                .field("required", required)
                .finish(),
            AddressOverflow { base, len } => f
                .debug_struct("AddressOverflow")
                .field("base", base)
                .field("len", len)
                .finish(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;

        match self {
            Io(err) => io::Error::fmt(err, f),
            ZeroBytesPerLine => write!(f, "bytes_per_line must be at least 1"),
            CapacityTooSmall { capacity, required } => write!(
                f,
                "buffer capacity {} cannot hold a full line ({} chars needed)",
                capacity, required
            ),
            AddressOverflow { base, len } => write!(
                f,
                "span of {} bytes at {:#x} exceeds the address space",
                len, base
            ),
        }
    }
}
