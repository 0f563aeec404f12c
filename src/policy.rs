//! Descent policy: the continue probability and the depth budget.
//!
//! A policy is validated at construction, so the engine never has to
//! re-check its parameters. The moment helpers describe the stop-depth
//! distribution the policy induces; the harness uses them to derive its
//! statistical tolerance.

use crate::error::PolicyError;
use serde::Serialize;

/// Default continue probability.
pub const DEFAULT_CONTINUE_PROBABILITY: f64 = 0.9;

/// Default depth budget.
pub const DEFAULT_MAX_DEPTH: u32 = 1000;

/// Validated parameters for a bounded stochastic descent.
///
/// Fields are private; every constructed policy has a continue
/// probability that is finite and within `[0.0, 1.0]`. Both endpoints
/// are legal: `0.0` stops immediately, `1.0` always runs to the budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DescentPolicy {
    continue_probability: f64,
    max_depth: u32,
}

impl Default for DescentPolicy {
    fn default() -> Self {
        Self {
            continue_probability: DEFAULT_CONTINUE_PROBABILITY,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DescentPolicy {
    /// Create a policy, rejecting non-finite or out-of-range
    /// probabilities.
    pub fn new(continue_probability: f64, max_depth: u32) -> Result<Self, PolicyError> {
        validate_probability(continue_probability)?;
        Ok(Self {
            continue_probability,
            max_depth,
        })
    }

    /// With a different depth budget.
    #[inline]
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// With a different continue probability, subject to validation.
    pub fn with_continue_probability(mut self, p: f64) -> Result<Self, PolicyError> {
        validate_probability(p)?;
        self.continue_probability = p;
        Ok(self)
    }

    /// Probability of going one level deeper at each decision.
    #[inline]
    #[must_use]
    pub fn continue_probability(&self) -> f64 {
        self.continue_probability
    }

    /// Hard depth budget.
    #[inline]
    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Exact mean of the stopped depth when descending from `start`,
    /// conditioned on stopping before the budget runs out.
    ///
    /// With continue probability `p`, stop probability `q = 1 - p`, and
    /// remaining budget `M = max_depth - start`, the depth above
    /// `start` is geometric truncated at `M`: `P(k) = p^k q` for
    /// `k <= M`, with overflow mass `p^(M + 1)`. Returns `None` when no
    /// stop is possible (`p = 1`), when `start` exceeds the budget, or
    /// when the overflow mass is so close to one that the conditional
    /// mean is numerically meaningless.
    #[must_use]
    pub fn expected_stop_depth(&self, start: u32) -> Option<f64> {
        if start > self.max_depth {
            return None;
        }
        let p = self.continue_probability;
        if p >= 1.0 {
            return None;
        }
        let q = 1.0 - p;
        let m = f64::from(self.max_depth - start);
        // Stop mass: 1 - p^(M+1).
        let stop_mass = 1.0 - p.powf(m + 1.0);
        if stop_mass < 1e-12 {
            return None;
        }
        let numerator = p * (1.0 - (m + 1.0) * p.powf(m) + m * p.powf(m + 1.0));
        Some(f64::from(start) + numerator / (q * stop_mass))
    }

    /// Untruncated geometric standard deviation `sqrt(p) / q` of the
    /// stop depth, a conservative scale for statistical tolerances.
    /// `None` when no stop is possible.
    #[must_use]
    pub fn stop_depth_std(&self, start: u32) -> Option<f64> {
        if start > self.max_depth {
            return None;
        }
        let p = self.continue_probability;
        if p >= 1.0 {
            return None;
        }
        Some(p.sqrt() / (1.0 - p))
    }

    /// Probability that a descent from `start` exhausts the budget:
    /// `p^(M + 1)`, or `1.0` when `start` already exceeds the budget.
    #[must_use]
    pub fn overflow_probability(&self, start: u32) -> f64 {
        if start > self.max_depth {
            return 1.0;
        }
        let m = f64::from(self.max_depth - start);
        self.continue_probability.powf(m + 1.0)
    }
}

fn validate_probability(p: f64) -> Result<(), PolicyError> {
    if !p.is_finite() {
        return Err(PolicyError::ProbabilityNotFinite);
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(PolicyError::ProbabilityOutOfRange { value: p });
    }
    Ok(())
}
