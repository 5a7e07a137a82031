/// Parameters for one formatting call, validated at entry.
#[derive(Clone, Debug)]
pub struct DumpConfig {
    /// Bytes grouped under one address label. Must be at least 1.
    pub bytes_per_line: usize,
    /// Capacity of the staging buffer, in characters. Must hold the widest
    /// single line of the table.
    pub buffer_capacity: usize,
    /// Optional text prepended to the output before the table.
    pub annotation: Option<String>,
}

impl Default for DumpConfig {
    fn default() -> DumpConfig {
        DumpConfig {
            bytes_per_line: 4,
            buffer_capacity: 1024,
            annotation: None,
        }
    }
}
