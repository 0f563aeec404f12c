//! The descent engine.
//!
//! A descent walks downward one level at a time. At each level it draws
//! a single Bernoulli decision from the injected RNG: continue deeper,
//! or stop here. The depth budget makes termination structural — at
//! most `max_depth - start + 1` decisions are drawn no matter what the
//! RNG yields.
//!
//! Randomness is always injected. The functions are generic over
//! [`rand::Rng`], so a seeded [`rand::rngs::StdRng`] makes every
//! descent fully reproducible; no global RNG state is read.

use crate::policy::DescentPolicy;
use crate::types::Outcome;
use rand::Rng;
use tracing::{debug, trace};

/// Run one descent from depth 0.
#[inline]
pub fn descend<R: Rng + ?Sized>(policy: &DescentPolicy, rng: &mut R) -> Outcome {
    descend_from(policy, 0, rng)
}

/// Run one descent from a caller-supplied starting depth.
///
/// A `start` beyond the budget returns [`Outcome::Overflow`]
/// immediately, consuming no randomness.
pub fn descend_from<R: Rng + ?Sized>(
    policy: &DescentPolicy,
    start: u32,
    rng: &mut R,
) -> Outcome {
    // Widened so a u32::MAX budget cannot overflow the counter.
    let budget = u64::from(policy.max_depth());
    let mut depth = u64::from(start);

    if depth > budget {
        debug!(start, max_depth = policy.max_depth(), "start beyond budget");
        return Outcome::Overflow;
    }

    let p = policy.continue_probability();
    let mut decisions: u64 = 0;

    let outcome = loop {
        decisions += 1;
        if !rng.gen_bool(p) {
            break Outcome::Stopped {
                depth: depth as u32,
            };
        }
        trace!(depth, "continuing");
        depth += 1;
        if depth > budget {
            break Outcome::Overflow;
        }
    };

    #[cfg(feature = "strict-debug")]
    assert!(
        decisions <= budget - u64::from(start) + 1,
        "descent drew {} decisions with a budget of {}",
        decisions,
        budget - u64::from(start) + 1,
    );

    debug!(%outcome, decisions, "descent finished");
    outcome
}
