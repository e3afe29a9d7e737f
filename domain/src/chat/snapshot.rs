//! Published session state

use super::epoch::Epoch;
use super::transcript::Transcript;

/// Everything the rendering layer needs to draw a chat session.
///
/// Snapshots are replaced as a whole; the transcript inside is copy-on-write,
/// so cloning one is cheap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub transcript: Transcript,
    /// Epoch of the current (possibly finished) request
    pub epoch: Epoch,
    /// True exactly while the current epoch's request is outstanding
    pub pending: bool,
    /// Failure of the current epoch's request, if it failed
    pub error: Option<String>,
}

impl SessionSnapshot {
    pub fn new(transcript: Transcript) -> Self {
        Self {
            transcript,
            ..Self::default()
        }
    }

    /// Whether `epoch` is still allowed to mutate this session
    pub fn is_current(&self, epoch: Epoch) -> bool {
        self.epoch == epoch
    }

    /// Whether the user may submit a new message
    pub fn accepts_input(&self) -> bool {
        !self.pending
    }
}
