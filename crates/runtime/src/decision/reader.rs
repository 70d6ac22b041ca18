use super::{Decision, LogError, Recording};

/// Read cursor over a [`Recording`].
#[derive(Clone, Debug)]
pub struct DecisionReader {
    recording: Recording,
    position: usize,
}

impl DecisionReader {
    pub(crate) fn new(recording: Recording) -> Self {
        Self {
            recording,
            position: 0,
        }
    }

    /// Returns the next unread decision.
    ///
    /// Fails once every recorded decision has been handed out.
    pub fn next_for_replay(&mut self) -> Result<&Decision, LogError> {
        let decision = self
            .recording
            .get(self.position)
            .ok_or(LogError::Exhausted {
                consumed: self.position,
            })?;
        self.position += 1;
        Ok(decision)
    }

    pub fn consumed(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.recording.len() - self.position
    }
}
