/// Number of characters submitted to the summarizer per call.
pub const CHUNK_SIZE: usize = 1000;

/// Splits `text` into consecutive windows of `size` characters.
///
/// Always returns `char_count / size + 1` windows. The last one holds the
/// remainder, so it is empty when the length is an exact multiple of `size`
/// (including the empty string). Windows end on character boundaries.
pub fn chunk_text(text: &str, size: usize) -> Vec<&str> {
    assert!(size > 0, "chunk size must be positive");

    let char_count = text.chars().count();
    let num_chunks = char_count / size + 1;

    // Byte offset of every `size`-th character, then the end of the string.
    let mut bounds: Vec<usize> = text
        .char_indices()
        .step_by(size)
        .map(|(offset, _)| offset)
        .collect();
    bounds.push(text.len());
    if char_count % size == 0 {
        bounds.push(text.len());
    }

    let chunks: Vec<&str> = bounds
        .windows(2)
        .map(|pair| &text[pair[0]..pair[1]])
        .collect();
    debug_assert_eq!(chunks.len(), num_chunks);

    chunks
}
