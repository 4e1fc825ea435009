//! Two-click connection state machine.

use ecoarchitect_types::HabitatId;

/// Whether a connection attempt is in progress.
///
/// At most one attempt exists at a time. Starting a new attempt replaces
/// the old source; completing or cancelling always returns to
/// [`ConnectMode::Idle`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectMode {
    /// No attempt in progress.
    #[default]
    Idle,
    /// Waiting for the second click; holds the source habitat.
    PendingFrom(HabitatId),
}

impl ConnectMode {
    /// The pending source habitat, if any.
    pub const fn pending(self) -> Option<HabitatId> {
        match self {
            Self::Idle => None,
            Self::PendingFrom(id) => Some(id),
        }
    }

    /// Return the current mode and reset to idle.
    pub const fn take(&mut self) -> Self {
        std::mem::replace(self, Self::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_always_leaves_idle() {
        let source = HabitatId::new();
        let mut mode = ConnectMode::PendingFrom(source);
        assert_eq!(mode.take().pending(), Some(source));
        assert_eq!(mode, ConnectMode::Idle);
        assert_eq!(mode.take(), ConnectMode::Idle);
    }
}
