//! Depth-bounded stochastic descent.
//!
//! `plummet` implements one control-flow primitive: starting from a
//! depth, repeatedly decide at random whether to go one level deeper or
//! to stop, under a hard depth budget that guarantees termination
//! regardless of random outcomes. Stopping before the budget is
//! probabilistic; stopping at all is structural.
//!
//! The crate exposes the descent operation itself ([`descend`] /
//! [`descend_from`]), the validated [`DescentPolicy`] carrying the
//! continue probability and depth budget, and a seeded simulation
//! [`harness`] that runs many descents and checks the observed depth
//! distribution against the policy's exact expectation.
//!
//! ```
//! use plummet::{descend, DescentPolicy};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let policy = DescentPolicy::new(0.9, 1000)?;
//! let mut rng = StdRng::seed_from_u64(42);
//! let outcome = descend(&policy, &mut rng);
//! assert!(outcome.depth().map_or(true, |d| d <= 1000));
//! # Ok::<(), plummet::PolicyError>(())
//! ```

pub mod descent;
pub mod error;
pub mod harness;
pub mod policy;
pub mod types;

pub use descent::{descend, descend_from};
pub use error::{HarnessError, PolicyError};
pub use harness::{run_harness, DepthStats, HarnessConfig, HarnessReport, Violation};
pub use policy::DescentPolicy;
pub use types::Outcome;
