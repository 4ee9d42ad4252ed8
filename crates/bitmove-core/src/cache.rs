//! Per-position memo of generated move lists.
//!
//! Keys are whole [`Position`] values (all twelve bitboards plus the side to
//! move), so a hit is only ever returned for an identical position.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tracing::{debug, trace};

use crate::chess_move::Move;
use crate::position::Position;

/// How many positions the cache may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Keep every position ever generated.
    #[default]
    Unbounded,
    /// Keep at most this many positions, evicting the oldest insertion first.
    /// `Bounded(0)` stores nothing.
    Bounded(usize),
}

/// Lookup counters since construction or the last [`MoveCache::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Positions currently stored.
    pub entries: usize,
}

#[derive(Debug, Default)]
pub struct MoveCache {
    policy: CachePolicy,
    entries: HashMap<Position, Arc<[Move]>>,
    /// Insertion order, oldest first. Only maintained for bounded caches.
    order: VecDeque<Position>,
    hits: u64,
    misses: u64,
}

impl MoveCache {
    pub fn new(policy: CachePolicy) -> MoveCache {
        MoveCache { policy, ..MoveCache::default() }
    }

    /// Return the cached list for `pos`, or build it with `generate` and store it.
    pub fn get_or_insert_with<F>(&mut self, pos: &Position, generate: F) -> Arc<[Move]>
    where
        F: FnOnce() -> Vec<Move>,
    {
        if let Some(moves) = self.entries.get(pos) {
            self.hits += 1;
            trace!(position = %pos, moves = moves.len(), "move cache hit");
            return Arc::clone(moves);
        }

        self.misses += 1;
        let moves: Arc<[Move]> = generate().into();
        trace!(position = %pos, moves = moves.len(), "move cache miss");
        self.insert(*pos, Arc::clone(&moves));
        moves
    }

    fn insert(&mut self, pos: Position, moves: Arc<[Move]>) {
        match self.policy {
            CachePolicy::Unbounded => {
                self.entries.insert(pos, moves);
            }
            CachePolicy::Bounded(0) => {}
            CachePolicy::Bounded(capacity) => {
                while self.entries.len() >= capacity {
                    let Some(oldest) = self.order.pop_front() else {
                        break;
                    };
                    self.entries.remove(&oldest);
                    debug!(evicted = %oldest, capacity, "move cache full, evicting oldest entry");
                }
                self.entries.insert(pos, moves);
                self.order.push_back(pos);
            }
        }
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Hit and miss counters plus the number of stored positions.
    pub fn stats(&self) -> CacheStats {
        CacheStats { hits: self.hits, misses: self.misses, entries: self.entries.len() }
    }
}
