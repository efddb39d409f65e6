//! # Compression Summary

use core::fmt;

/// Compression achieved by a training run on its own corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionSummary {
    /// The byte length of the corpus.
    pub original_len: usize,

    /// The token length after every learned merge.
    pub final_len: usize,

    /// The number of composite tokens learned.
    pub new_tokens: usize,
}

impl CompressionSummary {
    /// The reduction in sequence length, as a percentage of the original.
    pub fn compression_percent(&self) -> f64 {
        if self.original_len == 0 {
            return 0.0;
        }
        let saved = self.original_len.saturating_sub(self.final_len);
        saved as f64 * 100.0 / self.original_len as f64
    }
}

impl fmt::Display for CompressionSummary {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "{} -> {} tokens ({:.1}% compression, {} new tokens)",
            self.original_len,
            self.final_len,
            self.compression_percent(),
            self.new_tokens
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compression_percent() {
        let summary = CompressionSummary {
            original_len: 200,
            final_len: 150,
            new_tokens: 12,
        };
        assert_eq!(summary.compression_percent(), 25.0);
        assert_eq!(
            summary.to_string(),
            "200 -> 150 tokens (25.0% compression, 12 new tokens)"
        );

        let empty = CompressionSummary {
            original_len: 0,
            final_len: 0,
            new_tokens: 0,
        };
        assert_eq!(empty.compression_percent(), 0.0);
    }
}
