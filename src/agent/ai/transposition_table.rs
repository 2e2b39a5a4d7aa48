use super::negamax::is_mate_score;
use std::mem;

/// Bound type for transposition table entries
///
/// - Exact: the stored score is the true value at the stored depth
/// - Alpha: every move failed low; the score is an upper bound
/// - Beta: a move failed high; the score is a lower bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Alpha,
    Exact,
    Beta,
}

impl Bound {
    /// Classify a finished node against the window it was searched with
    pub fn classify(best_score: i32, original_alpha: i32, beta: i32) -> Self {
        if best_score >= beta {
            Bound::Beta
        } else if best_score > original_alpha {
            Bound::Exact
        } else {
            Bound::Alpha
        }
    }
}

/// Entry in the transposition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranspositionEntry<M> {
    /// Full position key, compared on every probe
    pub key: u64,
    pub score: i32,
    /// Remaining depth the score was searched to
    pub depth: i32,
    pub flag: Bound,
    pub best_move: Option<M>,
}

impl<M> TranspositionEntry<M> {
    /// The stored score, if it settles a search of `depth` with window
    /// `(alpha, beta)` without looking at any move
    pub fn usable_score(&self, depth: i32, alpha: i32, beta: i32) -> Option<i32> {
        if self.depth < depth {
            return None;
        }

        let usable = match self.flag {
            Bound::Exact => true,
            Bound::Alpha => self.score <= alpha,
            Bound::Beta => self.score >= beta,
        };

        usable.then_some(self.score)
    }
}

/// Convert a search score at `ply_from_root` into the form stored in the table
///
/// Stored mate scores count plies from the stored node rather than from the
/// root, so the entry reads the same at whatever ply it is probed.
pub fn score_to_table(score: i32, ply_from_root: u32) -> i32 {
    let ply = ply_from_root as i32;
    if !is_mate_score(score) {
        score
    } else if score > 0 {
        score + ply
    } else {
        score - ply
    }
}

/// Inverse of [`score_to_table`] for a probe at `ply_from_root`
pub fn score_from_table(score: i32, ply_from_root: u32) -> i32 {
    let ply = ply_from_root as i32;
    if !is_mate_score(score) {
        score
    } else if score > 0 {
        score - ply
    } else {
        score + ply
    }
}

/// Transposition table: one entry per bucket, bucket = key mod capacity
///
/// Storage is allocated once. A store always overwrites whatever the bucket
/// held; a probe only answers when the stored key equals the probing key.
pub struct TranspositionTable<M> {
    slots: Vec<Option<TranspositionEntry<M>>>,
    occupied: usize,
    /// Statistics: number of successful probes
    pub hits: u64,
    /// Statistics: number of failed probes
    pub misses: u64,
}

impl<M: Copy> TranspositionTable<M> {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: vec![None; capacity],
            occupied: 0,
            hits: 0,
            misses: 0,
        }
    }

    #[inline]
    fn bucket(&self, key: u64) -> usize {
        (key % self.slots.len() as u64) as usize
    }

    /// Probe the transposition table for a position
    ///
    /// Returns the entry only if the bucket holds this exact key.
    /// Updates hit/miss statistics.
    pub fn probe(&mut self, key: u64) -> Option<&TranspositionEntry<M>> {
        let bucket = self.bucket(key);
        match &self.slots[bucket] {
            Some(entry) if entry.key == key => {
                self.hits += 1;
                Some(entry)
            }
            _ => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store a search result, replacing whatever the bucket held
    pub fn store(&mut self, key: u64, score: i32, depth: i32, flag: Bound, best_move: Option<M>) {
        let bucket = self.bucket(key);
        let slot = &mut self.slots[bucket];
        if slot.is_none() {
            self.occupied += 1;
        }
        *slot = Some(TranspositionEntry {
            key,
            score,
            depth,
            flag,
            best_move,
        });
    }

    /// Clear the transposition table
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.occupied = 0;
        self.hits = 0;
        self.misses = 0;
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of buckets holding an entry
    pub fn size(&self) -> usize {
        self.occupied
    }

    /// Get hit rate (0.0 to 1.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Bytes held by the bucket array
    pub fn memory_usage(&self) -> usize {
        self.slots.len() * mem::size_of::<Option<TranspositionEntry<M>>>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Table = TranspositionTable<u16>;

    #[test]
    fn test_store_and_probe() {
        let mut table = Table::with_capacity(101);
        let key = 0x1234567890ABCDEF;

        table.store(key, 100, 5, Bound::Exact, Some(42));

        let entry = *table.probe(key).unwrap();
        assert_eq!(entry.key, key);
        assert_eq!(entry.depth, 5);
        assert_eq!(entry.score, 100);
        assert_eq!(entry.flag, Bound::Exact);
        assert_eq!(entry.best_move, Some(42));
    }

    #[test]
    fn test_exact_entry_answers_same_or_shallower_depth() {
        let mut table = Table::with_capacity(101);
        table.store(7, -35, 4, Bound::Exact, None);

        let entry = *table.probe(7).unwrap();
        for depth in 1..=4 {
            assert_eq!(entry.usable_score(depth, -100, 100), Some(-35));
        }
        assert_eq!(entry.usable_score(5, -100, 100), None);
    }

    #[test]
    fn test_bound_entries_respect_window() {
        let upper = TranspositionEntry::<u16> {
            key: 1,
            score: 20,
            depth: 3,
            flag: Bound::Alpha,
            best_move: None,
        };
        assert_eq!(upper.usable_score(3, 20, 90), Some(20));
        assert_eq!(upper.usable_score(3, 10, 90), None);

        let lower = TranspositionEntry::<u16> {
            flag: Bound::Beta,
            score: 90,
            ..upper
        };
        assert_eq!(lower.usable_score(2, 10, 90), Some(90));
        assert_eq!(lower.usable_score(2, 10, 95), None);
    }

    #[test]
    fn test_colliding_keys_do_not_alias() {
        let mut table = Table::with_capacity(10);
        table.store(3, 50, 2, Bound::Exact, Some(1));

        // 13 % 10 == 3 % 10: same bucket, different position
        assert!(table.probe(13).is_none());
        assert_eq!(table.misses, 1);
    }

    #[test]
    fn test_always_replace() {
        let mut table = Table::with_capacity(10);
        table.store(3, 50, 9, Bound::Exact, Some(1));
        table.store(13, -10, 1, Bound::Alpha, Some(2));

        assert!(table.probe(3).is_none(), "Deeper entry is still evicted");
        let entry = *table.probe(13).unwrap();
        assert_eq!(entry.depth, 1);
        assert_eq!(table.size(), 1);
    }

    #[test]
    fn test_classify_against_original_alpha() {
        assert_eq!(Bound::classify(120, 0, 100), Bound::Beta);
        assert_eq!(Bound::classify(100, 0, 100), Bound::Beta);
        assert_eq!(Bound::classify(50, 0, 100), Bound::Exact);
        assert_eq!(Bound::classify(0, 0, 100), Bound::Alpha);
        assert_eq!(Bound::classify(-30, 0, 100), Bound::Alpha);
    }

    #[test]
    fn test_mate_scores_are_stored_relative_to_node() {
        use crate::agent::ai::evaluation::{mated_score, MATE_SCORE};

        // Mate delivered at ply 5, seen from a node at ply 3
        let winning = MATE_SCORE - 5;
        assert_eq!(score_to_table(winning, 3), MATE_SCORE - 2);
        assert_eq!(score_from_table(score_to_table(winning, 3), 1), MATE_SCORE - 3);

        let losing = mated_score(6);
        assert_eq!(score_to_table(losing, 2), mated_score(4));
        assert_eq!(score_from_table(mated_score(4), 0), mated_score(4));

        // Ordinary scores pass through untouched
        assert_eq!(score_to_table(350, 7), 350);
        assert_eq!(score_from_table(-350, 7), -350);
    }

    #[test]
    fn test_clear_and_hit_rate() {
        let mut table = Table::with_capacity(100);
        table.store(123, 100, 5, Bound::Exact, None);

        table.probe(123);
        table.probe(456);
        assert_eq!(table.hit_rate(), 0.5);

        table.clear();
        assert_eq!(table.size(), 0);
        assert_eq!(table.hits, 0);
        assert!(table.probe(123).is_none());
    }
}
