use std::ops::AddAssign;

/// Search statistic collector.
/// It collects data during A* search.
pub trait SearchStatsCollector {
    /// Called for each node taken from a queue to be expanded, can return false to cancel search process.
    #[inline(always)] fn expanded(&mut self) -> bool { true }
    /// Called for each node pushed to a queue.
    #[inline(always)] fn enqueued(&mut self) { }
    /// Called for each neighbor skipped since it equals the board the expanded node was reached from.
    #[inline(always)] fn pruned(&mut self) { }
}

/// Search statistic collector that ignore all events.
impl SearchStatsCollector for () {}

/// Counts expanded nodes.
impl SearchStatsCollector for u64 {
    #[inline(always)] fn expanded(&mut self) -> bool { *self += 1; true }
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchAllStats {
    pub expanded: u64,
    pub enqueued: u64,
    pub pruned: u64
}

impl SearchAllStats {
    /// Returns the number of neighbors generated by expansions.
    pub fn generated(&self) -> u64 { self.enqueued + self.pruned }
}

impl AddAssign for SearchAllStats {
    fn add_assign(&mut self, rhs: Self) {
        self.expanded += rhs.expanded;
        self.enqueued += rhs.enqueued;
        self.pruned += rhs.pruned;
    }
}

impl SearchStatsCollector for SearchAllStats {
    #[inline(always)] fn expanded(&mut self) -> bool { self.expanded += 1; true }
    #[inline(always)] fn enqueued(&mut self) { self.enqueued += 1; }
    #[inline(always)] fn pruned(&mut self) { self.pruned += 1; }
}

/// Cancels the search after `limit` expansions.
pub struct Limited {
    pub expanded: u64,
    pub limit: u64
}

impl Limited {
    pub fn with_limit(limit: u64) -> Self { Self{expanded: 0, limit} }

    pub fn reset_expanded(&mut self) { self.expanded = 0; }

    pub fn reset_limit(&mut self, limit: u64) { self.reset_expanded(); self.limit = limit; }
}

impl SearchStatsCollector for Limited {
    #[inline(always)] fn expanded(&mut self) -> bool {
        if self.expanded >= self.limit { return false; }
        self.expanded += 1;
        true
    }
}
