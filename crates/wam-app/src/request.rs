//! Monotonic request identifiers for asynchronous completions.
//!
//! Every image read and generation call is tagged with a fresh [`RequestId`].
//! A completion is applied only when its id matches the request its owner is
//! still waiting on, so out-of-order or post-close results are dropped.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues strictly increasing [`RequestId`]s
#[derive(Debug, Default)]
pub struct RequestSeq {
    last: u64,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> RequestId {
        self.last += 1;
        RequestId(self.last)
    }
}
