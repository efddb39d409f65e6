//! # Pair Merge / Expand

use crate::types::{Pair, TokenType};

/// Merge all non-overlapping occurrences of `pair -> replacement`, in place.
///
/// The scan is greedy, left to right: a match consumes both tokens,
/// so ``x x x`` with pair ``(x, x)`` becomes ``r x``.
///
/// ## Arguments
/// * `tokens` - the sequence to rewrite.
/// * `pair` - the pair to merge.
/// * `replacement` - the token to replace `pair` with.
///
/// ## Returns
/// The number of replacements made.
pub fn merge_pair_in_place<T: TokenType>(
    tokens: &mut Vec<T>,
    pair: Pair<T>,
    replacement: T,
) -> usize {
    let n = tokens.len();
    if n < 2 {
        return 0;
    }

    // `write <= read` always holds; the sequence only shrinks.
    let mut read = 0;
    let mut write = 0;
    let mut merges = 0;

    while read < n {
        if read + 1 < n && pair == (tokens[read], tokens[read + 1]) {
            tokens[write] = replacement;
            merges += 1;
            // Skip 'a' and 'b'.
            read += 2;
        } else {
            tokens[write] = tokens[read];
            read += 1;
        }
        write += 1;
    }

    tokens.truncate(write);
    merges
}

/// Merge all non-overlapping occurrences of `pair -> replacement`.
///
/// See [`merge_pair_in_place`].
///
/// ## Returns
/// The rewritten sequence; `tokens` is not modified.
pub fn merge_pair<T: TokenType>(
    tokens: &[T],
    pair: Pair<T>,
    replacement: T,
) -> Vec<T> {
    let mut merged = tokens.to_vec();
    merge_pair_in_place(&mut merged, pair, replacement);
    merged
}

/// Replace every occurrence of `token` with the two tokens of `pair`.
///
/// The inverse of [`merge_pair`] for a token which never occurs
/// in the unmerged sequence.
pub fn expand_token<T: TokenType>(
    tokens: &[T],
    token: T,
    pair: Pair<T>,
) -> Vec<T> {
    let hits = tokens.iter().filter(|&&t| t == token).count();
    if hits == 0 {
        return tokens.to_vec();
    }

    let mut expanded = Vec::with_capacity(tokens.len() + hits);
    for &t in tokens {
        if t == token {
            expanded.push(pair.0);
            expanded.push(pair.1);
        } else {
            expanded.push(t);
        }
    }
    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_pair() {
        let tokens: Vec<u32> = vec![1, 2, 3, 1, 2, 2, 1];

        assert_eq!(merge_pair(&tokens, (1, 2), 9), vec![9, 3, 9, 2, 1]);
        assert_eq!(merge_pair(&tokens, (2, 1), 9), vec![1, 2, 3, 1, 2, 9]);
        assert_eq!(merge_pair(&tokens, (4, 4), 9), tokens);
    }

    #[test]
    fn test_merge_pair_in_place() {
        let mut tokens: Vec<u32> = vec![1, 2, 3, 1, 2, 2, 1];

        assert_eq!(merge_pair_in_place(&mut tokens, (1, 2), 9), 2);
        assert_eq!(tokens, vec![9, 3, 9, 2, 1]);

        assert_eq!(merge_pair_in_place(&mut tokens, (9, 3), 10), 1);
        assert_eq!(tokens, vec![10, 9, 2, 1]);
    }

    #[test]
    fn test_merge_overlapping_is_greedy() {
        assert_eq!(merge_pair(&[7_u16, 7, 7], (7, 7), 300), vec![300, 7]);
        assert_eq!(merge_pair(&[7_u16, 7, 7, 7], (7, 7), 300), vec![300, 300]);
        assert_eq!(
            merge_pair(&[97_u16, 97, 97, 97, 97], (97, 97), 256),
            vec![256, 256, 97]
        );
    }

    #[test]
    fn test_merge_short_sequences() {
        assert_eq!(merge_pair::<u32>(&[], (1, 1), 9), Vec::<u32>::new());
        assert_eq!(merge_pair(&[1_u32], (1, 1), 9), vec![1]);

        let mut tokens = vec![1_u32];
        assert_eq!(merge_pair_in_place(&mut tokens, (1, 1), 9), 0);
        assert_eq!(tokens, vec![1]);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let tokens: Vec<u32> = vec![1, 2, 1, 2, 1, 2, 3];
        let once = merge_pair(&tokens, (1, 2), 9);
        let twice = merge_pair(&once, (1, 2), 9);

        assert_eq!(once, vec![9, 9, 9, 3]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_expand_token() {
        let tokens: Vec<u32> = vec![9, 3, 9, 2, 1];
        assert_eq!(expand_token(&tokens, 9, (1, 2)), vec![1, 2, 3, 1, 2, 2, 1]);
        assert_eq!(expand_token(&tokens, 8, (1, 2)), tokens);
        assert_eq!(expand_token::<u32>(&[], 8, (1, 2)), Vec::<u32>::new());
    }

    #[test]
    fn test_expand_inverts_merge() {
        let tokens: Vec<u16> = vec![5, 5, 5, 6, 5, 5, 6];
        let merged = merge_pair(&tokens, (5, 5), 400);
        assert_eq!(merged, vec![400, 5, 6, 400, 6]);
        assert_eq!(expand_token(&merged, 400, (5, 5)), tokens);
    }
}
