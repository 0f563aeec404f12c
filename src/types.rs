//! Terminal outcomes of a descent.

use serde::Serialize;
use std::fmt;

/// The terminal result of one descent.
///
/// Both variants end the process. `Overflow` is a documented terminal
/// state reached when the depth budget runs out before a voluntary
/// stop; it is not an error and no error type represents it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Outcome {
    /// The probabilistic stop fired at the given depth.
    Stopped {
        /// Depth at which the descent stopped voluntarily.
        depth: u32,
    },
    /// The depth budget was exhausted before a voluntary stop.
    Overflow,
}

impl Outcome {
    /// Depth of a voluntary stop, `None` for an overflow.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> Option<u32> {
        match self {
            Outcome::Stopped { depth } => Some(*depth),
            Outcome::Overflow => None,
        }
    }

    /// Whether the descent ran out of budget.
    #[inline]
    #[must_use]
    pub fn is_overflow(&self) -> bool {
        matches!(self, Outcome::Overflow)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Stopped { depth } => write!(f, "stopped at depth {}", depth),
            Outcome::Overflow => write!(f, "overflow (budget exhausted)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        assert_eq!(Outcome::Stopped { depth: 7 }.depth(), Some(7));
        assert_eq!(Outcome::Overflow.depth(), None);
        assert!(Outcome::Overflow.is_overflow());
        assert!(!Outcome::Stopped { depth: 0 }.is_overflow());
    }

    #[test]
    fn display() {
        assert_eq!(Outcome::Stopped { depth: 3 }.to_string(), "stopped at depth 3");
        assert!(Outcome::Overflow.to_string().contains("overflow"));
    }
}
