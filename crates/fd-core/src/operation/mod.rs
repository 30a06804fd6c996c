//! Operation control: request kinds, lifecycle state, guard, and registry.

mod error;
mod guard;
mod kind;
mod registry;
mod request;
mod state;

pub use error::{FailureKind, OperationError};
pub use guard::{GuardToken, OperationGuard};
pub use kind::{RebootMode, Slot, SlotClass};
pub use registry::OperationRegistry;
pub use request::OperationRequest;
pub use state::OperationState;
