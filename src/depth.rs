//! Bounded recursion counters.
//!
//! [`PREV`] is the fixed table of decreasing integers used to step a depth
//! counter down: `PREV[n]` is `n - 1`, and `PREV[0]` is "never". The largest
//! value the table yields is [`MAX_DEPTH`], which makes it a recursion ceiling
//! and nothing more.

use tracing::warn;

use crate::error::{Result, SharedError};

pub const MAX_DEPTH: usize = 15;

pub const PREV: [Option<usize>; MAX_DEPTH + 2] = [
    None,
    Some(0),
    Some(1),
    Some(2),
    Some(3),
    Some(4),
    Some(5),
    Some(6),
    Some(7),
    Some(8),
    Some(9),
    Some(10),
    Some(11),
    Some(12),
    Some(13),
    Some(14),
    Some(15),
];

/// Looks `n` up in [`PREV`]. Anything outside the table is "never".
pub fn prev(n: usize) -> Option<usize> {
    PREV.get(n).copied().flatten()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Depth {
    remaining: usize,
    limit: usize,
}

impl Depth {
    pub fn new(limit: usize) -> Self {
        let limit = if limit > MAX_DEPTH {
            warn!(requested = limit, max = MAX_DEPTH, "depth limit clamped");
            MAX_DEPTH
        } else {
            limit
        };
        Self {
            remaining: limit,
            limit,
        }
    }
    pub fn remaining(&self) -> usize {
        self.remaining
    }
    pub fn limit(&self) -> usize {
        self.limit
    }
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
    // One level deeper. Fails once the counter has reached zero.
    pub fn descend(&self) -> Result<Self> {
        match prev(self.remaining) {
            Some(remaining) => Ok(Self {
                remaining,
                limit: self.limit,
            }),
            None => Err(SharedError::DepthExhausted { limit: self.limit }),
        }
    }
}

impl Default for Depth {
    fn default() -> Self {
        Self::new(MAX_DEPTH)
    }
}
