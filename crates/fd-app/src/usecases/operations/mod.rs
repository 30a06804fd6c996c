//! The operation executor: runs a single operation against the device
//! command backend under the destructive-operation guard.

mod executor;

pub use executor::{OperationExecutor, OperationOutcome, SubmissionId};
