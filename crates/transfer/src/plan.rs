/// One contiguous byte range of the source file, transferred
/// independently of the others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartSpec {
    /// 0-based plan position. The authoritative ordering key: part
    /// number on the wire is `index + 1`.
    pub index: usize,
    /// Inclusive start offset.
    pub offset_start: u64,
    /// Exclusive end offset.
    pub offset_end: u64,
    /// `offset_end - offset_start`.
    pub size_bytes: u64,
}

/// Splits `total_size_bytes` into parts of at most `chunk_size_bytes`.
///
/// Ranges are contiguous, non-overlapping, and cover exactly
/// `[0, total_size_bytes)`. A zero-length input still yields one
/// empty part so part counting never divides by zero downstream.
///
/// # Panics
///
/// Panics if `chunk_size_bytes == 0`. That is a programming error,
/// not a runtime condition.
pub fn plan(total_size_bytes: u64, chunk_size_bytes: u64) -> Vec<PartSpec> {
    assert!(chunk_size_bytes > 0, "chunk size must be non-zero");

    let count = total_size_bytes.div_ceil(chunk_size_bytes).max(1);
    (0..count)
        .map(|i| {
            let offset_start = i * chunk_size_bytes;
            let offset_end = (offset_start + chunk_size_bytes).min(total_size_bytes);
            PartSpec {
                index: i as usize,
                offset_start,
                offset_end,
                size_bytes: offset_end - offset_start,
            }
        })
        .collect()
}
