//! Seeded simulation harness.
//!
//! Runs a batch of descents from a single seeded RNG, checks the
//! structural invariants after every run, and compares the observed
//! stop-depth distribution against the policy's exact expectation.

mod stats;

pub use stats::DepthStats;

use crate::descent::descend_from;
use crate::error::HarnessError;
use crate::policy::DescentPolicy;
use crate::types::Outcome;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

/// Minimum voluntary stops before the mean check is meaningful.
const MEAN_CHECK_MIN_STOPS: u64 = 1000;

/// Harness configuration.
#[derive(Debug, Clone, Serialize)]
pub struct HarnessConfig {
    /// Random seed for reproducibility.
    pub seed: u64,
    /// Total descents to execute.
    pub runs: u64,
    /// Starting depth for every descent.
    pub start_depth: u32,
    /// Policy under test.
    pub policy: DescentPolicy,
    /// Stop the batch on the first violation.
    pub stop_on_first_violation: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            runs: 10_000,
            start_depth: 0,
            policy: DescentPolicy::default(),
            stop_on_first_violation: true,
        }
    }
}

/// A violation detected during a harness run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Violation {
    /// A voluntary stop landed outside `[start_depth, max_depth]`.
    StopDepthOutOfRange {
        /// Index of the offending run.
        run_index: u64,
        /// The out-of-range depth.
        depth: u32,
    },
    /// An overflow occurred although the policy makes one impossible.
    UnreachableOverflow {
        /// Index of the offending run.
        run_index: u64,
    },
    /// The observed mean stop depth missed the exact expectation.
    MeanOutsideTolerance {
        /// Sample mean over voluntary stops.
        observed: f64,
        /// Exact truncated-geometric mean.
        expected: f64,
        /// Allowed absolute deviation.
        tolerance: f64,
    },
}

/// Final report from the harness.
#[derive(Debug, Clone, Serialize)]
pub struct HarnessReport {
    /// Configuration the batch ran under.
    pub config: HarnessConfig,
    /// Accumulated depth statistics.
    pub stats: DepthStats,
    /// Violations, empty on a clean run.
    pub violations: Vec<Violation>,
}

impl HarnessReport {
    /// Whether the batch finished without violations.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Generate a text report.
    #[must_use]
    pub fn generate_text(&self) -> String {
        let mut report = String::new();

        report.push_str("=== Plummet Harness Report ===\n\n");
        report.push_str(&format!("Seed: {}\n", self.config.seed));
        report.push_str(&format!(
            "Policy: p = {}, max depth = {}\n",
            self.config.policy.continue_probability(),
            self.config.policy.max_depth(),
        ));
        report.push_str(&format!("Start Depth: {}\n", self.config.start_depth));
        report.push_str(&format!("Runs: {}\n", self.stats.runs));
        report.push_str(&format!("Stopped: {}\n", self.stats.stopped));
        report.push_str(&format!("Overflows: {}\n", self.stats.overflows));
        if let Some(mean) = self.stats.mean_stop_depth() {
            report.push_str(&format!("Mean Stop Depth: {:.3}\n", mean));
        }
        if let Some(mean) = self.stats.mean_decisions() {
            report.push_str(&format!("Mean Decisions: {:.3}\n", mean));
        }
        report.push_str(&format!("Violations: {}\n", self.violations.len()));

        if !self.violations.is_empty() {
            report.push_str("\n=== Violations ===\n");
            for (i, v) in self.violations.iter().enumerate() {
                report.push_str(&format!("{}. {:?}\n", i + 1, v));
            }
        }

        report.push_str(&format!(
            "\n=== Result: {} ===\n",
            if self.passed() { "PASS" } else { "FAIL" }
        ));

        report
    }
}

/// Run the harness.
///
/// An empty batch is rejected: zero runs leave every distributional
/// statement undefined.
pub fn run_harness(config: HarnessConfig) -> Result<HarnessReport, HarnessError> {
    if config.runs == 0 {
        return Err(HarnessError::ZeroRuns);
    }

    info!(
        seed = config.seed,
        runs = config.runs,
        start_depth = config.start_depth,
        "harness starting"
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut stats = DepthStats::default();
    let mut violations = Vec::new();

    // An overflow is unreachable only when continuing is impossible
    // while the budget is still ahead of the start.
    let overflow_reachable = config.policy.continue_probability() > 0.0
        || config.start_depth > config.policy.max_depth();

    for i in 0..config.runs {
        let outcome = descend_from(&config.policy, config.start_depth, &mut rng);

        // Check invariants after every run.
        match outcome {
            Outcome::Stopped { depth } => {
                if depth < config.start_depth || depth > config.policy.max_depth() {
                    violations.push(Violation::StopDepthOutOfRange { run_index: i, depth });
                }
            }
            Outcome::Overflow => {
                if !overflow_reachable {
                    violations.push(Violation::UnreachableOverflow { run_index: i });
                }
            }
        }

        stats.record(config.start_depth, &config.policy, outcome);

        if !violations.is_empty() && config.stop_on_first_violation {
            break;
        }

        if (i + 1) % 1000 == 0 {
            debug!(completed = i + 1, "harness progress");
        }
    }

    if stats.stopped >= MEAN_CHECK_MIN_STOPS {
        if let (Some(expected), Some(std)) = (
            config.policy.expected_stop_depth(config.start_depth),
            config.policy.stop_depth_std(config.start_depth),
        ) {
            // Eight standard errors: loose enough to never flag a
            // correct engine, tight enough to catch a miswired one.
            let tolerance = 8.0 * std / (stats.stopped as f64).sqrt();
            let observed = stats.mean_stop_depth().unwrap_or(expected);
            if (observed - expected).abs() > tolerance {
                violations.push(Violation::MeanOutsideTolerance {
                    observed,
                    expected,
                    tolerance,
                });
            }
        }
    }

    let report = HarnessReport {
        config,
        stats,
        violations,
    };
    info!(passed = report.passed(), "harness finished");
    Ok(report)
}
