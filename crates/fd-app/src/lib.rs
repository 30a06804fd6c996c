//! # fd-app
//!
//! Application layer for FlashDeck: the operation executor that drives the
//! device command backend under the operation guard, plus thin use cases for
//! the non-exclusive device queries.

pub mod app;
pub mod deps;
pub mod session;
pub mod usecases;

pub use app::App;
pub use deps::AppDeps;
pub use session::ShellSessionHandle;
pub use usecases::operations::{OperationExecutor, OperationOutcome, SubmissionId};
