//! Counters reported at the end of a run.

use core::fmt;

/// What a normalization run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Weight vectors examined.
    pub visited: u64,
    /// Weight vectors rewritten, either replaced or reweighted.
    pub altered: u64,
    /// Weight vectors rescaled because their sum was off.
    pub reweighted: u64,
}

impl RunStats {
    /// All-zero vectors replaced by the zero replacement.
    pub fn zeros_replaced(&self) -> u64 {
        self.altered.saturating_sub(self.reweighted)
    }

    /// Whether the run left the buffer untouched.
    pub fn did_nothing(&self) -> bool {
        self.altered == 0
    }

    /// Adds the counters of `other` to these.
    pub fn merge(&mut self, other: &RunStats) {
        self.visited += other.visited;
        self.altered += other.altered;
        self.reweighted += other.reweighted;
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "visited: {}, zeros replaced: {}, reweighted: {}",
            self.visited,
            self.zeros_replaced(),
            self.reweighted
        )?;
        if self.did_nothing() {
            f.write_str(" (did nothing)")?;
        }
        Ok(())
    }
}
