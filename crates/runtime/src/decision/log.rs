use std::sync::Arc;

use super::{Decision, DecisionReader};

/// Append-only log filled during a live game.
#[derive(Clone, Debug, Default)]
pub struct DecisionLog {
    decisions: Vec<Decision>,
}

impl DecisionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, decision: Decision) {
        self.decisions.push(decision);
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    /// Freezes the log. Nothing can be appended afterwards.
    pub fn seal(self) -> Recording {
        Recording {
            decisions: self.decisions.into(),
        }
    }
}

/// Sealed decisions of one finished game.
///
/// Cloning is cheap; every clone shares the same decisions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Recording {
    decisions: Arc<[Decision]>,
}

impl Recording {
    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    pub fn decisions(&self) -> impl ExactSizeIterator<Item = &Decision> + '_ {
        self.decisions.iter()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Decision> {
        self.decisions.get(index)
    }

    /// Starts reading from the first decision.
    pub fn reader(self) -> DecisionReader {
        DecisionReader::new(self)
    }
}
