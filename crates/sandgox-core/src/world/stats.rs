//! Simulation statistics collection trait

/// Trait for collecting simulation statistics
///
/// The engine reports every swap and every cell it creates or destroys, so a
/// host can measure throughput without the engine knowing how it's reported.
pub trait SimStats {
    /// Record that two cells were swapped
    fn record_swap(&mut self);

    /// Record that a cell was created by a generator rule
    fn record_spawn(&mut self);

    /// Record that non-air matter was destroyed
    fn record_destroy(&mut self);
}

/// A no-op implementation for when stats collection is not needed
#[derive(Default)]
pub struct NoopStats;

impl SimStats for NoopStats {
    fn record_swap(&mut self) {}
    fn record_spawn(&mut self) {}
    fn record_destroy(&mut self) {}
}

/// Plain counters, summed across however many ticks they were passed to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    pub swaps: u64,
    pub spawns: u64,
    pub destroys: u64,
}

impl TickStats {
    /// Number of cells touched by any rule
    pub fn total_events(&self) -> u64 {
        self.swaps + self.spawns + self.destroys
    }
}

impl SimStats for TickStats {
    fn record_swap(&mut self) {
        self.swaps += 1;
    }

    fn record_spawn(&mut self) {
        self.spawns += 1;
    }

    fn record_destroy(&mut self) {
        self.destroys += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_stats_all_methods() {
        let mut stats = NoopStats;
        for _ in 0..100 {
            stats.record_swap();
            stats.record_spawn();
            stats.record_destroy();
        }
    }

    #[test]
    fn test_tick_stats_counts() {
        let mut stats = TickStats::default();

        stats.record_swap();
        stats.record_swap();
        stats.record_spawn();
        stats.record_destroy();
        stats.record_destroy();
        stats.record_destroy();

        assert_eq!(stats.swaps, 2);
        assert_eq!(stats.spawns, 1);
        assert_eq!(stats.destroys, 3);
        assert_eq!(stats.total_events(), 6);
    }

    #[test]
    fn test_tick_stats_through_trait_object() {
        let mut stats = TickStats::default();
        {
            let dyn_stats: &mut dyn SimStats = &mut stats;
            dyn_stats.record_spawn();
        }
        assert_eq!(stats.spawns, 1);
    }
}
