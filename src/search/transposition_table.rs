//! Bounded transposition cache keyed by Zobrist hash.
//!
//! Eviction is first-in first-out: once the cache is full, inserting a new key
//! removes the oldest inserted key. Overwriting an existing key keeps its
//! original insertion position. Probes do not refresh anything, so this is not
//! an LRU cache.

use std::collections::{HashMap, VecDeque};

use tracing::trace;

use crate::moves::chess_move::ChessMove;

/// How a stored score relates to the true value of the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// Search failed high: the true score is at least `score`.
    Lower,
    /// Search failed low: the true score is at most `score`.
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry {
    pub depth: u8,
    pub score: i32,
    pub bound: Bound,
    pub best_move: Option<ChessMove>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TTStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
    pub evictions: u64,
}

#[derive(Debug, Clone)]
pub struct TranspositionTable {
    entries: HashMap<u64, TTEntry>,
    insertion_order: VecDeque<u64>,
    capacity: usize,
    stats: TTStats,
}

impl TranspositionTable {
    /// Cache holding at most `capacity` entries. Zero disables caching.
    pub fn with_capacity(capacity: usize) -> Self {
        // Pre-size modestly; large capacities grow on demand.
        let initial = capacity.min(1 << 16);
        Self {
            entries: HashMap::with_capacity(initial),
            insertion_order: VecDeque::with_capacity(initial),
            capacity,
            stats: TTStats::default(),
        }
    }

    /// Always-miss cache.
    #[inline]
    pub fn disabled() -> Self {
        Self::with_capacity(0)
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
        self.insertion_order.clear();
        self.stats = TTStats::default();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn stats(&self) -> TTStats {
        self.stats
    }

    pub fn lookup(&mut self, key: u64) -> Option<TTEntry> {
        self.stats.probes += 1;
        let hit = self.entries.get(&key).copied();
        if hit.is_some() {
            self.stats.hits += 1;
        }
        hit
    }

    pub fn store(&mut self, key: u64, entry: TTEntry) {
        if self.capacity == 0 {
            return;
        }
        self.stats.stores += 1;

        if let Some(existing) = self.entries.get_mut(&key) {
            *existing = entry;
            return;
        }

        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.insertion_order.pop_front() {
                self.entries.remove(&oldest);
                self.stats.evictions += 1;
                trace!(key = oldest, "evicted transposition entry");
            }
        }

        self.entries.insert(key, entry);
        self.insertion_order.push_back(key);
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::with_capacity(1_000_000)
    }
}
