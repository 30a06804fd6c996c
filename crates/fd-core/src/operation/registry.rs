//! Slot state registry consumed by the presentation layer.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use super::{OperationState, Slot};

/// Maps operation slots to their current lifecycle state.
///
/// Written only by the executor; read by any number of concurrent renderers.
/// Reads return value snapshots, so a continuously re-rendering observer
/// never sees a torn state and never triggers side effects.
#[derive(Debug, Default)]
pub struct OperationRegistry {
    slots: RwLock<HashMap<Slot, OperationState>>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of one slot. Slots with no recorded transition are
    /// `Idle`.
    pub fn state(&self, slot: Slot) -> OperationState {
        self.slots
            .read()
            .expect("operation registry lock poisoned")
            .get(&slot)
            .cloned()
            .unwrap_or(OperationState::Idle)
    }

    /// Value snapshot of every slot that has seen a transition.
    pub fn snapshot(&self) -> HashMap<Slot, OperationState> {
        self.slots
            .read()
            .expect("operation registry lock poisoned")
            .clone()
    }

    /// Record a transition. The previous state is superseded; terminal states
    /// stay until the next request for the same slot.
    pub fn transition(&self, slot: Slot, next: OperationState) {
        debug!(slot = %slot, state = ?next, "operation state transition");
        self.slots
            .write()
            .expect("operation registry lock poisoned")
            .insert(slot, next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::{OperationError, RebootMode};

    #[test]
    fn unknown_slots_read_idle() {
        let registry = OperationRegistry::new();
        assert_eq!(registry.state(Slot::Flash), OperationState::Idle);
        assert_eq!(
            registry.state(Slot::Reboot(RebootMode::Recovery)),
            OperationState::Idle
        );
    }

    #[test]
    fn transitions_supersede_previous_state() {
        let registry = OperationRegistry::new();
        registry.transition(Slot::Flash, OperationState::Running);
        assert!(registry.state(Slot::Flash).is_running());

        registry.transition(Slot::Flash, OperationState::succeeded());
        assert!(registry.state(Slot::Flash).is_terminal());

        // A later request for the same slot starts a fresh lifecycle
        registry.transition(Slot::Flash, OperationState::Running);
        assert!(registry.state(Slot::Flash).is_running());
    }

    #[test]
    fn slots_are_independent() {
        let registry = OperationRegistry::new();
        registry.transition(Slot::Flash, OperationState::Running);
        registry.transition(
            Slot::Wipe,
            OperationState::failed(&OperationError::Backend("device disconnected".into())),
        );
        assert!(registry.state(Slot::Flash).is_running());
        assert!(registry.state(Slot::Wipe).is_terminal());
        assert_eq!(registry.state(Slot::Reboot(RebootMode::Normal)), OperationState::Idle);
    }

    #[test]
    fn snapshot_is_a_value_copy() {
        let registry = OperationRegistry::new();
        registry.transition(Slot::Wipe, OperationState::Running);

        let mut snapshot = registry.snapshot();
        snapshot.insert(Slot::Flash, OperationState::Cancelled);

        // Mutating the snapshot leaves the registry untouched
        assert_eq!(registry.state(Slot::Flash), OperationState::Idle);
        assert!(registry.state(Slot::Wipe).is_running());
    }
}
