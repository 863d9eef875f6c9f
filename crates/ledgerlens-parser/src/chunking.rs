//! Line-respecting text chunking for large statements

/// Splits text into chunks on line boundaries
///
/// Lines are accumulated until a chunk's cumulative line length (in
/// characters) reaches the configured size; the final partial chunk is
/// always kept. No line is ever
/// split mid-line, so rejoining the chunks with `\n` reproduces the input
/// exactly. Every chunk except possibly the last is at least `chunk_size`
/// characters.
pub struct LineChunker {
    chunk_size: usize,
}

impl LineChunker {
    /// Create a chunker that closes chunks at `chunk_size` characters
    pub fn new(chunk_size: usize) -> Self {
        Self { chunk_size }
    }

    /// Chunk the given text
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        let mut current_size = 0usize;

        for line in text.split('\n') {
            current.push(line);
            // Sizes are in characters, not bytes
            current_size += line.chars().count();
            if current_size >= self.chunk_size {
                chunks.push(current.join("\n"));
                current.clear();
                current_size = 0;
            }
        }

        if !current.is_empty() {
            chunks.push(current.join("\n"));
        }

        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn many_lines(count: usize, line_len: usize) -> String {
        let line = "x".repeat(line_len);
        std::iter::repeat(line)
            .take(count)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_small_text_is_one_chunk() {
        let chunker = LineChunker::new(8_000);
        let text = "01-02-2026 SWIGGY 450 DR\n02-02-2026 UBER 180 DR";
        let chunks = chunker.chunk(text);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], text);
    }

    #[test]
    fn test_chunks_reassemble_to_original() {
        let chunker = LineChunker::new(500);
        let text = many_lines(100, 40);
        let chunks = chunker.chunk(&text);

        assert!(chunks.len() > 1);
        assert_eq!(chunks.join("\n"), text);
    }

    #[test]
    fn test_reassembly_with_trailing_newline() {
        let chunker = LineChunker::new(3);
        let text = "abcd\nefgh\n";
        let chunks = chunker.chunk(text);

        assert_eq!(chunks.join("\n"), text);
    }

    #[test]
    fn test_only_last_chunk_may_be_short() {
        let chunker = LineChunker::new(500);
        let text = many_lines(33, 40);
        let chunks = chunker.chunk(&text);

        for chunk in &chunks[..chunks.len() - 1] {
            assert!(chunk.len() >= 500);
        }
    }

    #[test]
    fn test_no_line_is_split() {
        let chunker = LineChunker::new(100);
        let text = many_lines(20, 40);
        let chunks = chunker.chunk(&text);

        for chunk in &chunks {
            for line in chunk.split('\n') {
                assert_eq!(line.len(), 40);
            }
        }
    }

    #[test]
    fn test_final_partial_chunk_is_kept() {
        let chunker = LineChunker::new(80);
        // Two full chunks of one 80-char line each, then a 10-char remainder
        let text = format!("{}\n{}\nshortline", "y".repeat(80), "y".repeat(80));
        let chunks = chunker.chunk(&text);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[2], "shortline");
    }

    #[test]
    fn test_sizes_count_characters_not_bytes() {
        let chunker = LineChunker::new(10);
        // Three lines of three rupee signs: 9 chars total but 27 bytes.
        // Byte counting would close a chunk after the second line.
        let text = "₹₹₹\n₹₹₹\n₹₹₹";
        let chunks = chunker.chunk(text);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], text);
    }

    #[test]
    fn test_empty_text() {
        let chunker = LineChunker::new(100);
        let chunks = chunker.chunk("");

        assert_eq!(chunks, vec!["".to_string()]);
    }
}
