//! Depth statistics accumulated over a batch of descents.

use crate::policy::DescentPolicy;
use crate::types::Outcome;
use serde::Serialize;
use std::collections::BTreeMap;

/// Statistics collected during a harness run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DepthStats {
    /// Total descents executed.
    pub runs: u64,
    /// Descents that stopped voluntarily.
    pub stopped: u64,
    /// Descents that exhausted the budget.
    pub overflows: u64,
    /// Shallowest voluntary stop, if any.
    pub min_stop_depth: Option<u32>,
    /// Deepest voluntary stop, if any.
    pub max_stop_depth: Option<u32>,
    /// Sum of voluntary stop depths.
    pub sum_stop_depth: u64,
    /// Sum of Bernoulli decisions drawn across all descents.
    pub sum_decisions: u64,
    /// Count of descents per stop depth.
    pub histogram: BTreeMap<u32, u64>,
}

impl DepthStats {
    /// Fold one outcome into the accumulator.
    ///
    /// The decision count is determined by the outcome: a stop at
    /// depth `d` drew `d - start + 1` decisions, an overflow drew the
    /// whole budget (`max_depth - start + 1`), and a start beyond the
    /// budget drew none.
    pub fn record(&mut self, start: u32, policy: &DescentPolicy, outcome: Outcome) {
        self.runs += 1;
        match outcome {
            Outcome::Stopped { depth } => {
                self.stopped += 1;
                self.sum_stop_depth += u64::from(depth);
                self.sum_decisions += u64::from(depth) - u64::from(start) + 1;
                self.min_stop_depth =
                    Some(self.min_stop_depth.map_or(depth, |d| d.min(depth)));
                self.max_stop_depth =
                    Some(self.max_stop_depth.map_or(depth, |d| d.max(depth)));
                *self.histogram.entry(depth).or_insert(0) += 1;
            }
            Outcome::Overflow => {
                self.overflows += 1;
                if start <= policy.max_depth() {
                    self.sum_decisions +=
                        u64::from(policy.max_depth()) - u64::from(start) + 1;
                }
            }
        }
    }

    /// Mean depth over voluntary stops, `None` when none stopped.
    #[must_use]
    pub fn mean_stop_depth(&self) -> Option<f64> {
        if self.stopped == 0 {
            return None;
        }
        Some(self.sum_stop_depth as f64 / self.stopped as f64)
    }

    /// Mean decisions drawn per descent, `None` for an empty batch.
    #[must_use]
    pub fn mean_decisions(&self) -> Option<f64> {
        if self.runs == 0 {
            return None;
        }
        Some(self.sum_decisions as f64 / self.runs as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_stops_and_overflows() {
        let policy = DescentPolicy::new(0.5, 10).unwrap();
        let mut stats = DepthStats::default();

        stats.record(0, &policy, Outcome::Stopped { depth: 2 });
        stats.record(0, &policy, Outcome::Stopped { depth: 4 });
        stats.record(0, &policy, Outcome::Overflow);

        assert_eq!(stats.runs, 3);
        assert_eq!(stats.stopped, 2);
        assert_eq!(stats.overflows, 1);
        assert_eq!(stats.min_stop_depth, Some(2));
        assert_eq!(stats.max_stop_depth, Some(4));
        assert_eq!(stats.mean_stop_depth(), Some(3.0));
        // Decisions: 3 + 5 for the stops, 11 for the overflow.
        assert_eq!(stats.sum_decisions, 19);
        assert_eq!(stats.histogram.get(&2), Some(&1));
        assert_eq!(stats.histogram.get(&4), Some(&1));
    }

    #[test]
    fn empty_batch_has_no_means() {
        let stats = DepthStats::default();
        assert_eq!(stats.mean_stop_depth(), None);
        assert_eq!(stats.mean_decisions(), None);
    }

    #[test]
    fn overflow_from_unreachable_start_draws_nothing() {
        let policy = DescentPolicy::new(0.5, 3).unwrap();
        let mut stats = DepthStats::default();
        stats.record(5, &policy, Outcome::Overflow);
        assert_eq!(stats.sum_decisions, 0);
    }
}
