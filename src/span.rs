/// Read-only view over a memory region: a borrowed byte slice plus the
/// address its first byte is labelled with. The address is a display value
/// and is never dereferenced.
#[derive(Clone, Copy, Debug)]
pub struct MemorySpan<'a> {
    base: usize,
    bytes: &'a [u8],
}

impl<'a> MemorySpan<'a> {
    pub fn new(base: usize, bytes: &'a [u8]) -> MemorySpan<'a> {
        MemorySpan { base, bytes }
    }

    /// View of `bytes` labelled with its own runtime address, the way a
    /// debugger would show it.
    pub fn with_runtime_address(bytes: &'a [u8]) -> MemorySpan<'a> {
        MemorySpan {
            base: bytes.as_ptr() as usize,
            bytes,
        }
    }

    pub fn base_address(&self) -> usize {
        self.base
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_address() {
        let data = [0u8; 4];
        let span = MemorySpan::with_runtime_address(&data);

        assert_eq!(span.base_address(), data.as_ptr() as usize);
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
    }
}
