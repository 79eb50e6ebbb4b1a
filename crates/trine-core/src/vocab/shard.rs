//! Line-aligned splitting of an in-memory input.

/// Splits `data` into at most `shards` contiguous pieces that each start at a
/// line start and end after a line break (or at the end of the data).
///
/// Concatenating the pieces in order reproduces `data`. Empty pieces are
/// omitted.
#[must_use]
pub fn split_at_lines(data: &[u8], shards: usize) -> Vec<&[u8]> {
    let shards = shards.max(1);
    let target = data.len().div_ceil(shards).max(1);

    let mut pieces = Vec::with_capacity(shards);
    let mut start = 0;
    while start < data.len() {
        let tentative = (start + target).min(data.len());
        let end = if tentative == data.len() || data[tentative - 1] == b'\n' {
            tentative
        } else {
            data[tentative..]
                .iter()
                .position(|&b| b == b'\n')
                .map_or(data.len(), |i| tentative + i + 1)
        };
        pieces.push(&data[start..end]);
        start = end;
    }
    pieces
}
