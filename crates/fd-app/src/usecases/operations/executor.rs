//! Executes operation requests against the device command backend.
//!
//! Admission (shape validation + guard acquisition) is synchronous, so
//! `InvalidInput` and `Busy` surface to the caller immediately and the
//! `Running` transition is atomic with taking the lease. The run phase then
//! invokes the backend, records the terminal transition, and releases the
//! lease by dropping the token — on every exit path.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use fd_core::ports::{
    AdbPort, BackendError, FastbootPort, FileDialogPort, OperationObserverPort,
};
use fd_core::{
    GuardToken, OperationError, OperationGuard, OperationRegistry, OperationRequest,
    OperationState, Slot,
};

use crate::session::ShellSessionHandle;

/// Identifier handed back by `submit`; the outcome itself is observed through
/// the registry and the shell session, not through a return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Benign terminal outcomes of an admitted operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome {
    Completed { output: Option<String> },
    /// The user dismissed a dialog; distinct from failure.
    Cancelled,
}

/// Runs one operation request end to end.
///
/// Destructive kinds (flash/wipe/reboot) share a single lease; file selection
/// and shell commands are admitted unconditionally so the UI stays responsive
/// during a long flash.
pub struct OperationExecutor {
    adb: Arc<dyn AdbPort>,
    fastboot: Arc<dyn FastbootPort>,
    dialog: Arc<dyn FileDialogPort>,
    observer: Arc<dyn OperationObserverPort>,
    guard: Arc<OperationGuard>,
    registry: Arc<OperationRegistry>,
    session: ShellSessionHandle,
}

impl OperationExecutor {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        adb: Arc<dyn AdbPort>,
        fastboot: Arc<dyn FastbootPort>,
        dialog: Arc<dyn FileDialogPort>,
        observer: Arc<dyn OperationObserverPort>,
        guard: Arc<OperationGuard>,
        registry: Arc<OperationRegistry>,
        session: ShellSessionHandle,
    ) -> Self {
        Self {
            adb,
            fastboot,
            dialog,
            observer,
            guard,
            registry,
            session,
        }
    }

    /// Execute a request and await its outcome.
    ///
    /// Admission errors (`InvalidInput`, `Busy`) return before anything
    /// reaches the backend.
    pub async fn execute(
        &self,
        request: OperationRequest,
    ) -> Result<OperationOutcome, OperationError> {
        let token = self.admit(&request)?;
        self.note_admitted(&request);
        self.run(request, token).await
    }

    /// Fire-and-forget submission: admit synchronously, then run the backend
    /// phase on a spawned task. The caller observes the outcome through the
    /// registry (and the shell session for shell commands).
    pub fn submit(
        self: &Arc<Self>,
        request: OperationRequest,
    ) -> Result<SubmissionId, OperationError> {
        let token = self.admit(&request)?;
        self.note_admitted(&request);

        let id = SubmissionId::new();
        let executor = Arc::clone(self);
        let span = info_span!("operation.run", submission = %id);
        tokio::spawn(
            async move {
                // Terminal outcome lands in the registry/session; the error
                // has already been recorded there when this returns Err.
                if let Err(err) = executor.run(request, token).await {
                    debug!(error = %err, "submitted operation failed");
                }
            }
            .instrument(span),
        );
        Ok(id)
    }

    /// Validate the request shape and take the guard lease. Fail-fast: a
    /// rejected request must not be retried automatically by the caller.
    fn admit(&self, request: &OperationRequest) -> Result<GuardToken, OperationError> {
        request.validate()?;
        self.guard.try_acquire(request.slot_class()).map_err(|err| {
            warn!(class = ?request.slot_class(), "operation rejected: device busy");
            err
        })
    }

    /// Bookkeeping that must be visible before `submit` returns: the
    /// `Running` transition for slotted kinds and the command echo (plus
    /// recall entry) for shell commands, in submission order.
    fn note_admitted(&self, request: &OperationRequest) {
        if let Some(slot) = request.slot() {
            self.transition(slot, OperationState::Running);
        }
        if let OperationRequest::Shell { command } = request {
            self.session.push_command(command);
        }
    }

    async fn run(
        &self,
        request: OperationRequest,
        token: GuardToken,
    ) -> Result<OperationOutcome, OperationError> {
        // Dropped when this scope ends; covers success, backend error, and
        // unwind alike.
        let _token = token;

        match request {
            OperationRequest::Flash {
                partition,
                image_path,
            } => {
                info!(partition = %partition, image = %image_path, "flashing partition");
                match self.fastboot.flash_partition(&partition, &image_path).await {
                    Ok(()) => self.complete(Slot::Flash, None),
                    Err(err) => self.fail(Slot::Flash, err),
                }
            }
            OperationRequest::Wipe => {
                info!("wiping userdata");
                match self.fastboot.wipe_data().await {
                    Ok(()) => self.complete(Slot::Wipe, None),
                    Err(err) => self.fail(Slot::Wipe, err),
                }
            }
            OperationRequest::Reboot { mode } => {
                info!(mode = ?mode, "rebooting device");
                match self.adb.reboot(mode).await {
                    Ok(()) => self.complete(Slot::Reboot(mode), None),
                    Err(err) => self.fail(Slot::Reboot(mode), err),
                }
            }
            OperationRequest::SelectImage => match self.dialog.select_image_file().await {
                Ok(Some(path)) => Ok(OperationOutcome::Completed {
                    output: Some(path.to_string_lossy().into_owned()),
                }),
                Ok(None) => {
                    debug!("image selection cancelled by user");
                    Ok(OperationOutcome::Cancelled)
                }
                Err(err) => Err(OperationError::Backend(err.to_string())),
            },
            OperationRequest::Shell { command } => {
                // The command echo is already in the transcript
                // (note_admitted); only the completion entry is appended
                // here, which is why results interleave by completion order.
                match self.adb.run_shell(&command).await {
                    Ok(output) => {
                        self.session.push_result(&output);
                        Ok(OperationOutcome::Completed {
                            output: Some(output),
                        })
                    }
                    Err(err) => {
                        let message = err.to_string();
                        self.session.push_error(&message);
                        Err(OperationError::Backend(message))
                    }
                }
            }
        }
    }

    fn complete(
        &self,
        slot: Slot,
        output: Option<String>,
    ) -> Result<OperationOutcome, OperationError> {
        self.transition(slot, OperationState::Succeeded {
            output: output.clone(),
        });
        Ok(OperationOutcome::Completed { output })
    }

    fn fail(&self, slot: Slot, err: BackendError) -> Result<OperationOutcome, OperationError> {
        let err = OperationError::Backend(err.to_string());
        self.transition(slot, OperationState::failed(&err));
        Err(err)
    }

    fn transition(&self, slot: Slot, state: OperationState) {
        self.registry.transition(slot, state.clone());
        self.observer.state_changed(slot, &state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::time::sleep;

    use fd_core::ports::NoopOperationObserver;
    use fd_core::{Device, DeviceInfo, HistoryEntryKind, RebootMode};

    #[derive(Default)]
    struct MockAdb {
        reboot_calls: AtomicUsize,
        shell_calls: AtomicUsize,
        shell_delay_ms: u64,
        fail_with: Option<String>,
    }

    #[async_trait]
    impl AdbPort for MockAdb {
        async fn reboot(&self, _mode: RebootMode) -> Result<(), BackendError> {
            self.reboot_calls.fetch_add(1, Ordering::SeqCst);
            sleep(Duration::from_millis(20)).await;
            match &self.fail_with {
                Some(msg) => Err(BackendError::CommandFailed(msg.clone())),
                None => Ok(()),
            }
        }

        async fn run_shell(&self, command: &str) -> Result<String, BackendError> {
            self.shell_calls.fetch_add(1, Ordering::SeqCst);
            sleep(Duration::from_millis(self.shell_delay_ms)).await;
            match &self.fail_with {
                Some(msg) => Err(BackendError::CommandFailed(msg.clone())),
                None => Ok(format!("out: {command}")),
            }
        }

        async fn devices(&self) -> Result<Vec<Device>, BackendError> {
            Ok(vec![])
        }

        async fn device_info(&self) -> Result<DeviceInfo, BackendError> {
            Err(BackendError::CommandFailed("not wired in this mock".into()))
        }

        async fn install_package(&self, _apk_path: &str) -> Result<String, BackendError> {
            Ok(String::new())
        }

        async fn uninstall_package(&self, _package: &str) -> Result<String, BackendError> {
            Ok(String::new())
        }
    }

    #[derive(Default)]
    struct MockFastboot {
        flash_calls: AtomicUsize,
        wipe_calls: AtomicUsize,
        flash_delay_ms: u64,
        fail_with: Option<String>,
    }

    #[async_trait]
    impl FastbootPort for MockFastboot {
        async fn flash_partition(
            &self,
            _partition: &str,
            _image_path: &str,
        ) -> Result<(), BackendError> {
            self.flash_calls.fetch_add(1, Ordering::SeqCst);
            sleep(Duration::from_millis(self.flash_delay_ms)).await;
            match &self.fail_with {
                Some(msg) => Err(BackendError::CommandFailed(msg.clone())),
                None => Ok(()),
            }
        }

        async fn wipe_data(&self) -> Result<(), BackendError> {
            self.wipe_calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn devices(&self) -> Result<Vec<Device>, BackendError> {
            Ok(vec![])
        }
    }

    struct MockDialog {
        selection: Option<PathBuf>,
    }

    #[async_trait]
    impl FileDialogPort for MockDialog {
        async fn select_image_file(&self) -> Result<Option<PathBuf>, BackendError> {
            Ok(self.selection.clone())
        }
    }

    struct Fixture {
        adb: Arc<MockAdb>,
        fastboot: Arc<MockFastboot>,
        executor: Arc<OperationExecutor>,
        registry: Arc<OperationRegistry>,
        guard: Arc<OperationGuard>,
        session: ShellSessionHandle,
    }

    fn fixture(adb: MockAdb, fastboot: MockFastboot, dialog: MockDialog) -> Fixture {
        let adb = Arc::new(adb);
        let fastboot = Arc::new(fastboot);
        let guard = Arc::new(OperationGuard::new());
        let registry = Arc::new(OperationRegistry::new());
        let session = ShellSessionHandle::new();
        let executor = Arc::new(OperationExecutor::new(
            adb.clone(),
            fastboot.clone(),
            Arc::new(dialog),
            Arc::new(NoopOperationObserver),
            guard.clone(),
            registry.clone(),
            session.clone(),
        ));
        Fixture {
            adb,
            fastboot,
            executor,
            registry,
            guard,
            session,
        }
    }

    fn flash_request() -> OperationRequest {
        OperationRequest::Flash {
            partition: "boot".into(),
            image_path: "/tmp/boot.img".into(),
        }
    }

    #[tokio::test]
    async fn flash_succeeds_and_releases_the_lease() {
        let fx = fixture(MockAdb::default(), MockFastboot::default(), MockDialog { selection: None });

        let outcome = fx.executor.execute(flash_request()).await.unwrap();
        assert_eq!(outcome, OperationOutcome::Completed { output: None });
        assert_eq!(fx.registry.state(Slot::Flash), OperationState::succeeded());
        assert!(!fx.guard.is_held());
    }

    #[tokio::test]
    async fn invalid_flash_never_reaches_guard_or_backend() {
        let fx = fixture(MockAdb::default(), MockFastboot::default(), MockDialog { selection: None });

        let request = OperationRequest::Flash {
            partition: String::new(),
            image_path: "/tmp/boot.img".into(),
        };
        let err = fx.executor.execute(request).await.unwrap_err();
        assert!(matches!(err, OperationError::InvalidInput(_)));
        assert_eq!(fx.fastboot.flash_calls.load(Ordering::SeqCst), 0);
        assert!(!fx.guard.is_held());
        // Rejected requests never transition the slot
        assert_eq!(fx.registry.state(Slot::Flash), OperationState::Idle);
    }

    #[tokio::test]
    async fn wipe_while_flashing_is_busy_and_skips_the_backend() {
        let fx = fixture(
            MockAdb::default(),
            MockFastboot {
                flash_delay_ms: 100,
                ..Default::default()
            },
            MockDialog { selection: None },
        );

        let flash_id = fx.executor.submit(flash_request()).unwrap();
        let err = fx.executor.execute(OperationRequest::Wipe).await.unwrap_err();
        assert_eq!(err, OperationError::Busy);
        assert_eq!(fx.fastboot.wipe_calls.load(Ordering::SeqCst), 0);
        // The rejected wipe must not clobber any slot state
        assert_eq!(fx.registry.state(Slot::Wipe), OperationState::Idle);

        // The admitted flash resolves independently of the rejection
        let _ = flash_id;
        wait_for_terminal(&fx.registry, Slot::Flash).await;
        assert_eq!(fx.registry.state(Slot::Flash), OperationState::succeeded());
        assert!(!fx.guard.is_held());
    }

    #[tokio::test]
    async fn back_to_back_reboots_share_the_destructive_lease() {
        let fx = fixture(MockAdb::default(), MockFastboot::default(), MockDialog { selection: None });

        fx.executor
            .submit(OperationRequest::Reboot {
                mode: RebootMode::Recovery,
            })
            .unwrap();
        let err = fx
            .executor
            .submit(OperationRequest::Reboot {
                mode: RebootMode::Bootloader,
            })
            .unwrap_err();
        assert_eq!(err, OperationError::Busy);
        // Distinct slots, shared lease: only the first reboot ran
        assert_eq!(
            fx.registry.state(Slot::Reboot(RebootMode::Bootloader)),
            OperationState::Idle
        );

        wait_for_terminal(&fx.registry, Slot::Reboot(RebootMode::Recovery)).await;
        assert_eq!(fx.adb.reboot_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn backend_failure_preserves_message_and_frees_the_lease() {
        let fx = fixture(
            MockAdb::default(),
            MockFastboot {
                fail_with: Some("failed to run fastboot flash: exit status 1 (stderr: FAILED (remote: partition table doesn't exist))".into()),
                ..Default::default()
            },
            MockDialog { selection: None },
        );

        let err = fx.executor.execute(flash_request()).await.unwrap_err();
        match &err {
            OperationError::Backend(message) => {
                assert!(message.contains("partition table doesn't exist"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
        match fx.registry.state(Slot::Flash) {
            OperationState::Failed { message, .. } => assert_eq!(message, err.to_string()),
            other => panic!("unexpected state: {other:?}"),
        }

        // A failed operation must not wedge the guard
        assert!(!fx.guard.is_held());
        assert!(fx.executor.execute(flash_request()).await.is_ok());
    }

    #[tokio::test]
    async fn dialog_cancel_is_cancelled_not_failed() {
        let fx = fixture(MockAdb::default(), MockFastboot::default(), MockDialog { selection: None });

        let outcome = fx
            .executor
            .execute(OperationRequest::SelectImage)
            .await
            .unwrap();
        assert_eq!(outcome, OperationOutcome::Cancelled);
    }

    #[tokio::test]
    async fn dialog_selection_returns_the_path() {
        let fx = fixture(
            MockAdb::default(),
            MockFastboot::default(),
            MockDialog {
                selection: Some(PathBuf::from("/tmp/boot.img")),
            },
        );

        let outcome = fx
            .executor
            .execute(OperationRequest::SelectImage)
            .await
            .unwrap();
        assert_eq!(
            outcome,
            OperationOutcome::Completed {
                output: Some("/tmp/boot.img".into())
            }
        );
    }

    #[tokio::test]
    async fn file_selection_is_admitted_while_a_flash_runs() {
        let fx = fixture(
            MockAdb::default(),
            MockFastboot {
                flash_delay_ms: 100,
                ..Default::default()
            },
            MockDialog {
                selection: Some(PathBuf::from("/tmp/vendor.img")),
            },
        );

        fx.executor.submit(flash_request()).unwrap();
        // Non-exclusive operations are never blocked by the lease
        let outcome = fx
            .executor
            .execute(OperationRequest::SelectImage)
            .await
            .unwrap();
        assert!(matches!(outcome, OperationOutcome::Completed { .. }));

        wait_for_terminal(&fx.registry, Slot::Flash).await;
    }

    #[tokio::test]
    async fn shell_command_appends_exactly_two_entries() {
        let fx = fixture(MockAdb::default(), MockFastboot::default(), MockDialog { selection: None });

        fx.executor
            .execute(OperationRequest::Shell {
                command: "getprop ro.product.model".into(),
            })
            .await
            .unwrap();

        let entries = fx.session.snapshot();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, HistoryEntryKind::Command);
        assert_eq!(entries[0].text, "getprop ro.product.model");
        assert_eq!(entries[1].kind, HistoryEntryKind::Result);
    }

    #[tokio::test]
    async fn failing_shell_command_appends_command_and_error() {
        let fx = fixture(
            MockAdb {
                fail_with: Some("failed to run adb shell 'dmesg': exit status 1 (stderr: device offline)".into()),
                ..Default::default()
            },
            MockFastboot::default(),
            MockDialog { selection: None },
        );

        let err = fx
            .executor
            .execute(OperationRequest::Shell {
                command: "dmesg".into(),
            })
            .await
            .unwrap_err();

        let entries = fx.session.snapshot();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].kind, HistoryEntryKind::Error);
        assert_eq!(entries[1].text, err.to_string());
    }

    #[tokio::test]
    async fn empty_shell_command_is_rejected_without_touching_the_transcript() {
        let fx = fixture(MockAdb::default(), MockFastboot::default(), MockDialog { selection: None });

        let err = fx
            .executor
            .execute(OperationRequest::Shell {
                command: "   ".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, OperationError::InvalidInput(_)));
        assert!(fx.session.is_empty());
        assert_eq!(fx.adb.shell_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn shell_results_interleave_by_completion_order() {
        let slow = fixture(
            MockAdb {
                shell_delay_ms: 80,
                ..Default::default()
            },
            MockFastboot::default(),
            MockDialog { selection: None },
        );

        // Two invocations against the same session: slow first, fast second.
        // Submission order fixes the command echoes; completion order fixes
        // the results.
        let fast_adb = Arc::new(MockAdb {
            shell_delay_ms: 5,
            ..Default::default()
        });
        let fast_executor = Arc::new(OperationExecutor::new(
            fast_adb,
            Arc::new(MockFastboot::default()),
            Arc::new(MockDialog { selection: None }),
            Arc::new(NoopOperationObserver),
            slow.guard.clone(),
            slow.registry.clone(),
            slow.session.clone(),
        ));

        let slow_task = slow.executor.submit(OperationRequest::Shell {
            command: "echo a".into(),
        });
        let fast_task = fast_executor.submit(OperationRequest::Shell {
            command: "echo b".into(),
        });
        assert!(slow_task.is_ok());
        assert!(fast_task.is_ok());

        // Wait until both completion entries have landed
        let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
        while slow.session.len() < 4 {
            assert!(tokio::time::Instant::now() < deadline, "transcript never filled");
            sleep(Duration::from_millis(5)).await;
        }

        let entries = slow.session.snapshot();
        let texts: Vec<&str> = entries.iter().map(|e| e.text.as_str()).collect();
        // Command echoes in submission order...
        assert_eq!(texts[0], "echo a");
        assert_eq!(texts[1], "echo b");
        // ...results in completion order: the fast command finishes first
        assert_eq!(texts[2], "out: echo b");
        assert_eq!(texts[3], "out: echo a");
    }

    #[tokio::test]
    async fn submit_reports_running_before_the_backend_finishes() {
        let fx = fixture(
            MockAdb::default(),
            MockFastboot {
                flash_delay_ms: 100,
                ..Default::default()
            },
            MockDialog { selection: None },
        );

        fx.executor.submit(flash_request()).unwrap();
        // Visible synchronously: acquisition is atomic with Running
        assert!(fx.registry.state(Slot::Flash).is_running());
        assert!(fx.guard.is_held());

        wait_for_terminal(&fx.registry, Slot::Flash).await;
        assert!(!fx.guard.is_held());
    }

    async fn wait_for_terminal(registry: &OperationRegistry, slot: Slot) {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
        while !registry.state(slot).is_terminal() {
            assert!(
                tokio::time::Instant::now() < deadline,
                "operation on {slot} never reached a terminal state"
            );
            sleep(Duration::from_millis(5)).await;
        }
    }
}
