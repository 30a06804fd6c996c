//! Fail-fast mutual exclusion for destructive device operations.
//!
//! The attached device accepts one meaningful destructive command at a time;
//! overlapping flash/wipe/reboot calls risk corrupting device state or racing
//! partition writes. The guard hands out at most one destructive lease and
//! never queues: a second request fails immediately so the UI reports "busy"
//! instead of silently queueing a destructive command the user may not want.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::{OperationError, SlotClass};

/// Single-lease admission guard shared by all destructive slots.
#[derive(Debug, Default)]
pub struct OperationGuard {
    destructive: Arc<AtomicBool>,
}

/// Lease held while a destructive operation is running.
///
/// The lease is returned on drop, so the executor releases exactly once on
/// every exit path (success, backend error, unwind). Non-exclusive tokens
/// carry no lease.
#[derive(Debug)]
pub struct GuardToken {
    lease: Option<Arc<AtomicBool>>,
}

impl OperationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire a token for the given class.
    ///
    /// Destructive acquisition is a single compare-and-set: it either takes
    /// the free lease or fails with `Busy` without waiting, so two racing
    /// requests can never both observe "no token held".
    pub fn try_acquire(&self, class: SlotClass) -> Result<GuardToken, OperationError> {
        match class {
            SlotClass::NonExclusive => Ok(GuardToken { lease: None }),
            SlotClass::Destructive => {
                if self
                    .destructive
                    .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                    .is_ok()
                {
                    Ok(GuardToken {
                        lease: Some(Arc::clone(&self.destructive)),
                    })
                } else {
                    Err(OperationError::Busy)
                }
            }
        }
    }

    /// Whether the destructive lease is currently held.
    pub fn is_held(&self) -> bool {
        self.destructive.load(Ordering::Acquire)
    }
}

impl Drop for GuardToken {
    fn drop(&mut self) {
        if let Some(lease) = self.lease.take() {
            lease.store(false, Ordering::Release);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_destructive_acquire_is_rejected() {
        let guard = OperationGuard::new();
        let token = guard.try_acquire(SlotClass::Destructive).unwrap();
        assert!(matches!(
            guard.try_acquire(SlotClass::Destructive),
            Err(OperationError::Busy)
        ));
        drop(token);
    }

    #[test]
    fn non_exclusive_is_never_blocked() {
        let guard = OperationGuard::new();
        let _held = guard.try_acquire(SlotClass::Destructive).unwrap();
        // Shell/file-select admission is independent of the destructive lease
        assert!(guard.try_acquire(SlotClass::NonExclusive).is_ok());
        assert!(guard.try_acquire(SlotClass::NonExclusive).is_ok());
    }

    #[test]
    fn lease_returns_to_zero_on_drop() {
        let guard = OperationGuard::new();
        {
            let _token = guard.try_acquire(SlotClass::Destructive).unwrap();
            assert!(guard.is_held());
        }
        assert!(!guard.is_held());
        assert!(guard.try_acquire(SlotClass::Destructive).is_ok());
    }

    #[test]
    fn dropping_non_exclusive_token_does_not_release_lease() {
        let guard = OperationGuard::new();
        let held = guard.try_acquire(SlotClass::Destructive).unwrap();
        drop(guard.try_acquire(SlotClass::NonExclusive).unwrap());
        assert!(guard.is_held());
        drop(held);
        assert!(!guard.is_held());
    }

    #[test]
    fn racing_acquisitions_admit_exactly_one() {
        let guard = Arc::new(OperationGuard::new());
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let guard = Arc::clone(&guard);
                // Tokens are moved back to the main thread so none is
                // released while the race is still in flight.
                std::thread::spawn(move || guard.try_acquire(SlotClass::Destructive).ok())
            })
            .collect();

        let tokens: Vec<GuardToken> = handles
            .into_iter()
            .filter_map(|h| h.join().expect("acquisition thread panicked"))
            .collect();

        assert_eq!(tokens.len(), 1);
        drop(tokens);
        assert!(!guard.is_held());
    }
}
