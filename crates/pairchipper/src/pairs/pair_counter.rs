//! # Adjacent Pair Counter

use core::cmp::Ordering;

use dary_heap::OctonaryHeap;

use crate::types::{PCHashMap, Pair, TokenType, hash_map_with_capacity};

/// Occurrence statistics for one [`Pair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairStat {
    /// The number of adjacent positions holding the pair.
    ///
    /// Overlapping positions are all counted.
    pub count: usize,

    /// The first position at which the pair occurs.
    pub first_seen: usize,
}

/// A map from [`Pair`] to its [`PairStat`].
pub type PairStatMap<T> = PCHashMap<Pair<T>, PairStat>;

/// Adjacent pair counts over a token sequence.
///
/// Ranking is by descending count; ties go to the pair which
/// occurs first in the counted sequence. This is independent of
/// hash seeds and of how the count was partitioned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairCounts<T: TokenType> {
    stats: PairStatMap<T>,
}

/// Count the adjacent pairs of a token sequence.
///
/// Position `i` contributes the pair `(tokens[i], tokens[i + 1])`;
/// sequences shorter than 2 produce empty counts.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(tokens)))]
pub fn count_pairs<T: TokenType>(tokens: &[T]) -> PairCounts<T> {
    PairCounts::from_range(tokens, 0, tokens.len().saturating_sub(1))
}

impl<T: TokenType> PairCounts<T> {
    /// Count the pairs starting at positions `start..end`.
    ///
    /// `end` must be `<= tokens.len() - 1`; the final token of a range
    /// may be read from the next range.
    pub(crate) fn from_range(
        tokens: &[T],
        start: usize,
        end: usize,
    ) -> Self {
        let mut stats: PairStatMap<T> =
            hash_map_with_capacity(end.saturating_sub(start).min(1 << 16));

        if end > start {
            for (offset, w) in tokens[start..=end].windows(2).enumerate() {
                stats
                    .entry((w[0], w[1]))
                    .or_insert(PairStat {
                        count: 0,
                        first_seen: start + offset,
                    })
                    .count += 1;
            }
        }

        Self { stats }
    }

    /// Fold another count into this one.
    ///
    /// Counts are summed and first positions take the minimum;
    /// so the fold order does not change the result.
    pub fn merge(
        &mut self,
        other: Self,
    ) {
        for (pair, stat) in other.stats {
            self.stats
                .entry(pair)
                .and_modify(|s| {
                    s.count += stat.count;
                    s.first_seen = s.first_seen.min(stat.first_seen);
                })
                .or_insert(stat);
        }
    }

    /// The number of distinct pairs.
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Are there no pairs?
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// The count of a pair; zero if absent.
    pub fn get(
        &self,
        pair: &Pair<T>,
    ) -> usize {
        self.stats.get(pair).map_or(0, |s| s.count)
    }

    /// The full stats of a pair.
    pub fn stat(
        &self,
        pair: &Pair<T>,
    ) -> Option<PairStat> {
        self.stats.get(pair).copied()
    }

    /// The sum of all pair counts.
    pub fn total(&self) -> usize {
        self.stats.values().map(|s| s.count).sum()
    }

    /// Iterate over the stats, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Pair<T>, &PairStat)> {
        self.stats.iter()
    }

    /// The single highest ranked pair.
    pub fn best(&self) -> Option<(Pair<T>, usize)> {
        self.stats
            .iter()
            .map(|(&pair, &stat)| RankedPair { pair, stat })
            .max()
            .map(|r| (r.pair, r.stat.count))
    }

    /// The `k` highest ranked pairs, in rank order.
    pub fn most_frequent(
        &self,
        k: usize,
    ) -> Vec<(Pair<T>, usize)> {
        self.eligible(k, 0)
    }

    /// The `k` highest ranked pairs with `count >= min_count`, in rank order.
    pub fn eligible(
        &self,
        k: usize,
        min_count: usize,
    ) -> Vec<(Pair<T>, usize)> {
        let candidates: Vec<RankedPair<T>> = self
            .stats
            .iter()
            .filter(|(_, stat)| stat.count >= min_count)
            .map(|(&pair, &stat)| RankedPair { pair, stat })
            .collect();

        let mut heap = OctonaryHeap::from(candidates);
        let mut ranked = Vec::with_capacity(k.min(heap.len()));
        while ranked.len() < k
            && let Some(r) = heap.pop()
        {
            ranked.push((r.pair, r.stat.count));
        }
        ranked
    }
}

/// Heap entry; max-heap by count, tie-break to the earliest first occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RankedPair<T: TokenType> {
    pair: Pair<T>,
    stat: PairStat,
}

impl<T: TokenType> RankedPair<T> {
    fn heap_key(&self) -> (usize, core::cmp::Reverse<usize>) {
        (self.stat.count, core::cmp::Reverse(self.stat.first_seen))
    }
}

impl<T: TokenType> PartialOrd for RankedPair<T> {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: TokenType> Ord for RankedPair<T> {
    fn cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        // Distinct pairs never share a first position.
        self.heap_key().cmp(&other.heap_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte_stream::text_tokens;

    fn p(
        a: char,
        b: char,
    ) -> Pair<u32> {
        (a as u32, b as u32)
    }

    #[test]
    fn test_count_pairs() {
        let tokens: Vec<u32> = text_tokens("hello help");
        let counts = count_pairs(&tokens);

        assert_eq!(counts.get(&p('h', 'e')), 2);
        assert_eq!(counts.get(&p('e', 'l')), 2);
        assert_eq!(counts.get(&p('l', 'l')), 1);
        assert_eq!(counts.get(&p('l', 'o')), 1);
        assert_eq!(counts.get(&p('o', ' ')), 1);
        assert_eq!(counts.get(&p(' ', 'h')), 1);
        assert_eq!(counts.get(&p('l', 'p')), 1);
        assert_eq!(counts.get(&p('x', 'y')), 0);

        assert_eq!(counts.len(), 7);
        assert_eq!(counts.total(), tokens.len() - 1);

        assert_eq!(
            counts.stat(&p('e', 'l')),
            Some(PairStat {
                count: 2,
                first_seen: 1
            })
        );
    }

    #[test]
    fn test_count_overlapping() {
        let counts = count_pairs(&[97_u16, 97, 97, 97]);
        assert_eq!(counts.get(&(97, 97)), 3);
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn test_count_short_sequences() {
        assert!(count_pairs::<u32>(&[]).is_empty());
        assert!(count_pairs(&[1_u32]).is_empty());
        assert_eq!(count_pairs::<u32>(&[]).best(), None);
        assert!(count_pairs::<u32>(&[]).most_frequent(10).is_empty());
    }

    #[test]
    fn test_ranking_ties_first_seen() {
        // (c, d) and (a, b) both occur twice; (a, b) occurs first.
        let tokens: Vec<u32> = text_tokens("abxcdcdab");
        let counts = count_pairs(&tokens);

        assert_eq!(counts.best(), Some((p('a', 'b'), 2)));
        assert_eq!(
            counts.most_frequent(3),
            vec![(p('a', 'b'), 2), (p('c', 'd'), 2), (p('b', 'x'), 1)]
        );
    }

    #[test]
    fn test_eligible() {
        let tokens: Vec<u32> = text_tokens("aaabab");
        let counts = count_pairs(&tokens);

        // (a, a): 2, (a, b): 2, (b, a): 1
        assert_eq!(
            counts.eligible(10, 2),
            vec![(p('a', 'a'), 2), (p('a', 'b'), 2)]
        );
        assert_eq!(counts.eligible(1, 2), vec![(p('a', 'a'), 2)]);
        assert!(counts.eligible(10, 3).is_empty());
        assert!(counts.eligible(0, 1).is_empty());
    }

    #[test]
    fn test_merge_counts() {
        let tokens: Vec<u32> = text_tokens("the cat sat on the mat");
        let n = tokens.len() - 1;

        for split in [0, 1, 5, n / 2, n - 1, n] {
            let mut left = PairCounts::from_range(&tokens, 0, split);
            let right = PairCounts::from_range(&tokens, split, n);
            left.merge(right);
            assert_eq!(left, count_pairs(&tokens), "split at {split}");
        }
    }

    #[test]
    fn test_ranked_pair_order() {
        let a = RankedPair {
            pair: (1_u32, 2),
            stat: PairStat {
                count: 2,
                first_seen: 5,
            },
        };
        let b = RankedPair {
            pair: (2_u32, 1),
            stat: PairStat {
                count: 2,
                first_seen: 0,
            },
        };
        let c = RankedPair {
            pair: (3_u32, 3),
            stat: PairStat {
                count: 3,
                first_seen: 9,
            },
        };

        assert_eq!(a.cmp(&a), Ordering::Equal);
        assert_eq!(b.cmp(&a), Ordering::Greater);
        assert_eq!(c.cmp(&b), Ordering::Greater);
        assert_eq!(a.partial_cmp(&c), Some(Ordering::Less));
    }
}
