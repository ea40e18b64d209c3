//! Reasoning loop states

/// Where a reasoning session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainState {
    /// Requesting intermediate step `step` (1-based)
    Running { step: u32 },
    /// Requesting the final answer
    Finalizing,
    /// Session complete
    Terminated,
}

impl ChainState {
    pub fn initial() -> Self {
        ChainState::Running { step: 1 }
    }
}

impl Default for ChainState {
    fn default() -> Self {
        Self::initial()
    }
}
