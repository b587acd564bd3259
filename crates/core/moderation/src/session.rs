use std::sync::Arc;

use futures::lock::Mutex;
use tokio::task::JoinHandle;

use bazaar_config::{config, FeaturesLimits};
use bazaar_database::{Database, ModerationAuditItem};
use bazaar_models::v0::{
    ActionIntent, ActionPayload, ModerationAction, RemovalReason, Report, ReportKind,
};
use bazaar_result::{Error, Result};

use crate::{actions_for, requires_message, requires_removal_reason, CommitExecutor};

/// Structured input collected on the confirmation surface
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionInput {
    pub reason: Option<RemovalReason>,
    pub comment: String,
    pub message: String,
}

impl ActionInput {
    /// Whether the commit affordance is enabled for this action
    fn satisfies(&self, action: ModerationAction, limits: &FeaturesLimits) -> bool {
        if requires_removal_reason(action) {
            let comment_ok = self.comment.len() <= limits.removal_comment_length;
            return match self.reason {
                None => false,
                Some(RemovalReason::Other) => comment_ok && !self.comment.trim().is_empty(),
                Some(_) => comment_ok,
            };
        }

        if requires_message(action) {
            return !self.message.trim().is_empty()
                && self.message.len() <= limits.warning_message_length;
        }

        true
    }

    fn into_payload(self, action: ModerationAction) -> Option<ActionPayload> {
        if requires_removal_reason(action) {
            return Some(ActionPayload {
                reason: self.reason,
                comment: (!self.comment.trim().is_empty()).then_some(self.comment),
                message: None,
            });
        }

        if requires_message(action) {
            return Some(ActionPayload {
                reason: None,
                comment: None,
                message: Some(self.message),
            });
        }

        None
    }
}

/// Terminal result of one action cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitResult {
    Success,
    Failure { error: Error },
}

/// Where the session currently is in the action cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionStage {
    /// Nothing in progress
    Idle,
    /// Confirmation surface is open and collecting input
    ConfirmOpen {
        action: ModerationAction,
        input: ActionInput,
    },
    /// Commit in flight; the busy overlay is visible
    Busy {
        action: ModerationAction,
        intent: ActionIntent,
    },
    /// Commit finished; waiting for the operator to acknowledge
    Outcome {
        action: ModerationAction,
        intent: ActionIntent,
        result: CommitResult,
    },
}

/// Drives the moderation of one report.
///
/// One session exists per report detail view and runs at most one action
/// cycle at a time: `Idle → ConfirmOpen → Busy → Outcome → Idle`. The commit
/// itself runs on a spawned task so callers observe the `Busy` stage rather
/// than waiting; dropping the session aborts any pending commit.
pub struct ModerationSession {
    id: String,
    kind: ReportKind,
    report_id: String,
    executor: Arc<dyn CommitExecutor>,
    audit: Option<Database>,
    stage: Arc<Mutex<ActionStage>>,
    commit_task: Option<JoinHandle<()>>,
}

impl ModerationSession {
    pub fn new(report: &Report, executor: Arc<dyn CommitExecutor>) -> ModerationSession {
        ModerationSession {
            id: ulid::Ulid::new().to_string(),
            kind: report.kind(),
            report_id: report.id.clone(),
            executor,
            audit: None,
            stage: Arc::new(Mutex::new(ActionStage::Idle)),
            commit_task: None,
        }
    }

    /// Record successfully committed intents into the given database
    pub fn with_audit(mut self, db: Database) -> ModerationSession {
        self.audit = Some(db);
        self
    }

    /// The action menu for this report's kind
    pub fn available_actions(&self) -> &'static [ModerationAction] {
        actions_for(self.kind)
    }

    /// Snapshot of the current stage
    pub async fn stage(&self) -> ActionStage {
        self.stage.lock().await.clone()
    }

    /// The busy overlay is shown exactly while a commit is in flight
    pub async fn overlay_visible(&self) -> bool {
        matches!(*self.stage.lock().await, ActionStage::Busy { .. })
    }

    /// Open the confirmation surface for an action.
    ///
    /// Rejected while another cycle is anywhere past `Idle`, so overlapping
    /// commits cannot happen.
    pub async fn select(&mut self, action: ModerationAction) -> Result<()> {
        if !self.available_actions().contains(&action) {
            return Err(create_error!(UnknownAction));
        }

        let mut stage = self.stage.lock().await;
        match *stage {
            ActionStage::Idle => {
                *stage = ActionStage::ConfirmOpen {
                    action,
                    input: ActionInput::default(),
                };
                Ok(())
            }
            _ => Err(create_error!(ActionInProgress)),
        }
    }

    pub async fn set_removal_reason(&mut self, reason: RemovalReason) -> Result<()> {
        self.update_input(|input| input.reason = Some(reason)).await
    }

    pub async fn set_comment(&mut self, comment: &str) -> Result<()> {
        self.update_input(|input| input.comment = comment.to_string())
            .await
    }

    pub async fn set_message(&mut self, message: &str) -> Result<()> {
        self.update_input(|input| input.message = message.to_string())
            .await
    }

    async fn update_input(&mut self, apply: impl FnOnce(&mut ActionInput)) -> Result<()> {
        let mut stage = self.stage.lock().await;
        match &mut *stage {
            ActionStage::ConfirmOpen { input, .. } => {
                apply(input);
                Ok(())
            }
            _ => Err(create_error!(InvalidOperation)),
        }
    }

    /// Whether the commit affordance is currently enabled
    pub async fn can_commit(&self) -> bool {
        let limits = config().await.features.limits;
        match &*self.stage.lock().await {
            ActionStage::ConfirmOpen { action, input } => input.satisfies(*action, &limits),
            _ => false,
        }
    }

    /// Close the confirmation surface, discarding any entered input
    pub async fn cancel(&mut self) -> Result<()> {
        let mut stage = self.stage.lock().await;
        match *stage {
            ActionStage::ConfirmOpen { .. } => {
                *stage = ActionStage::Idle;
                Ok(())
            }
            _ => Err(create_error!(InvalidOperation)),
        }
    }

    /// Start the asynchronous commit for the confirmed action
    pub async fn confirm(&mut self) -> Result<()> {
        let limits = config().await.features.limits;

        let mut stage = self.stage.lock().await;
        let (action, input) = match &*stage {
            ActionStage::ConfirmOpen { action, input } => (*action, input.clone()),
            ActionStage::Busy { .. } => return Err(create_error!(ActionInProgress)),
            _ => return Err(create_error!(InvalidOperation)),
        };

        if !input.satisfies(action, &limits) {
            return Err(create_error!(FailedValidation {
                error: "required input is missing".to_string()
            }));
        }

        let intent = ActionIntent {
            report_id: self.report_id.clone(),
            action,
            payload: input.into_payload(action),
        };

        *stage = ActionStage::Busy {
            action,
            intent: intent.clone(),
        };
        drop(stage);

        self.spawn_commit(action, intent);
        Ok(())
    }

    /// Re-run a failed commit with the same intent
    pub async fn retry(&mut self) -> Result<()> {
        let mut stage = self.stage.lock().await;
        let (action, intent) = match &*stage {
            ActionStage::Outcome {
                action,
                intent,
                result: CommitResult::Failure { .. },
            } => (*action, intent.clone()),
            _ => return Err(create_error!(InvalidOperation)),
        };

        *stage = ActionStage::Busy {
            action,
            intent: intent.clone(),
        };
        drop(stage);

        self.spawn_commit(action, intent);
        Ok(())
    }

    /// Dismiss the outcome dialog
    pub async fn acknowledge(&mut self) -> Result<()> {
        let mut stage = self.stage.lock().await;
        match *stage {
            ActionStage::Outcome { .. } => {
                *stage = ActionStage::Idle;
                drop(stage);
                // The commit task has already finished
                self.commit_task = None;
                Ok(())
            }
            _ => Err(create_error!(InvalidOperation)),
        }
    }

    /// Wait for the in-flight commit, if any, to settle.
    ///
    /// Callers normally just observe `stage()`; this is for anyone who needs
    /// a completion edge, tests included.
    pub async fn settled(&mut self) -> Result<()> {
        if let Some(task) = self.commit_task.take() {
            task.await.map_err(|_| create_error!(InternalError))?;
        }
        Ok(())
    }

    fn spawn_commit(&mut self, action: ModerationAction, intent: ActionIntent) {
        let session_id = self.id.clone();
        let stage = Arc::clone(&self.stage);
        let executor = Arc::clone(&self.executor);
        let audit = self.audit.clone();

        self.commit_task = Some(tokio::task::spawn(async move {
            let result = executor.execute(&intent).await;

            match &result {
                Ok(()) => {
                    if let Some(db) = &audit {
                        if let Err(error) = db
                            .insert_audit_item(&ModerationAuditItem::from_intent(&intent))
                            .await
                        {
                            warn!("[{session_id}] Failed to record audit item: {error:?}");
                        }
                    }
                    info!(
                        "[{session_id}] Committed {action:?} against report {}.",
                        intent.report_id
                    );
                }
                Err(error) => {
                    warn!(
                        "[{session_id}] Commit of {action:?} against report {} failed: {error:?}",
                        intent.report_id
                    );
                }
            }

            let mut stage = stage.lock().await;
            *stage = ActionStage::Outcome {
                action,
                intent,
                result: match result {
                    Ok(()) => CommitResult::Success,
                    Err(error) => CommitResult::Failure { error },
                },
            };
        }));
    }
}

impl Drop for ModerationSession {
    /// A torn-down session must never complete a pending commit
    fn drop(&mut self) {
        if let Some(task) = &self.commit_task {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use bazaar_database::{fixtures, DatabaseInfo};
    use bazaar_models::v0::{
        ActionIntent, ModerationAction, RemovalReason, Report, ReportKind,
    };
    use bazaar_result::{ErrorType, Result};
    use iso8601_timestamp::Timestamp;

    use crate::{CommitExecutor, RecordingExecutor};

    use super::{ActionStage, CommitResult, ModerationSession};

    /// Fails the first `failures` commits, then succeeds
    struct FlakyExecutor {
        failures: AtomicUsize,
    }

    #[async_trait]
    impl CommitExecutor for FlakyExecutor {
        async fn execute(&self, intent: &ActionIntent) -> Result<()> {
            if self.failures.load(Ordering::SeqCst) > 0 {
                self.failures.fetch_sub(1, Ordering::SeqCst);
                return Err(create_error!(CommitFailed {
                    action: format!("{:?}", intent.action)
                }));
            }
            Ok(())
        }
    }

    fn report_of_kind(kind: ReportKind) -> Report {
        let now = Timestamp::now_utc();
        fixtures::demo_reports(now)
            .into_iter()
            .find(|report| report.kind() == kind)
            .expect("demo data covers every kind")
    }

    #[tokio::test]
    async fn selecting_an_action_opens_its_confirmation() {
        let executor = Arc::new(RecordingExecutor::default());
        let mut session = ModerationSession::new(&report_of_kind(ReportKind::User), executor);

        session.select(ModerationAction::Ban).await.unwrap();

        assert!(matches!(
            session.stage().await,
            ActionStage::ConfirmOpen {
                action: ModerationAction::Ban,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn actions_outside_the_kind_menu_are_rejected() {
        let executor = Arc::new(RecordingExecutor::default());
        let mut session = ModerationSession::new(&report_of_kind(ReportKind::Listing), executor);

        let error = session.select(ModerationAction::Ban).await.unwrap_err();
        assert!(matches!(error.error_type, ErrorType::UnknownAction));
        assert_eq!(session.stage().await, ActionStage::Idle);
    }

    #[tokio::test]
    async fn busy_sessions_reject_new_selections_until_acknowledged() {
        let executor = Arc::new(RecordingExecutor::with_latency(Duration::from_millis(50)));
        let mut session = ModerationSession::new(&report_of_kind(ReportKind::User), executor);

        session.select(ModerationAction::Suspend).await.unwrap();
        session.confirm().await.unwrap();

        let error = session.select(ModerationAction::Warn).await.unwrap_err();
        assert!(matches!(error.error_type, ErrorType::ActionInProgress));
        assert!(matches!(session.stage().await, ActionStage::Busy { .. }));

        session.settled().await.unwrap();

        // Still exclusive until the outcome dialog is dismissed
        assert!(session.select(ModerationAction::Warn).await.is_err());
        session.acknowledge().await.unwrap();
        session.select(ModerationAction::Warn).await.unwrap();
    }

    #[tokio::test]
    async fn cancel_discards_entered_input() {
        let executor = Arc::new(RecordingExecutor::default());
        let mut session = ModerationSession::new(&report_of_kind(ReportKind::Listing), executor);

        session.select(ModerationAction::Remove).await.unwrap();
        session
            .set_removal_reason(RemovalReason::PolicyViolation)
            .await
            .unwrap();
        session.cancel().await.unwrap();
        assert_eq!(session.stage().await, ActionStage::Idle);

        session.select(ModerationAction::Remove).await.unwrap();
        assert!(!session.can_commit().await, "previous input must not leak");
    }

    #[tokio::test]
    async fn removal_with_other_reason_requires_a_comment() {
        let executor = Arc::new(RecordingExecutor::default());
        let mut session = ModerationSession::new(&report_of_kind(ReportKind::Listing), executor);

        session.select(ModerationAction::Remove).await.unwrap();
        assert!(!session.can_commit().await, "no reason chosen yet");

        session
            .set_removal_reason(RemovalReason::Other)
            .await
            .unwrap();
        assert!(!session.can_commit().await, "`other` needs a comment");

        session.set_comment("   ").await.unwrap();
        assert!(!session.can_commit().await, "whitespace is not a comment");

        session.set_comment("Stolen product photos").await.unwrap();
        assert!(session.can_commit().await);

        // A concrete reason needs no comment
        session
            .set_removal_reason(RemovalReason::FraudulentScam)
            .await
            .unwrap();
        session.set_comment("").await.unwrap();
        assert!(session.can_commit().await);
    }

    #[tokio::test]
    async fn warnings_require_a_message() {
        let executor = Arc::new(RecordingExecutor::default());
        let mut session = ModerationSession::new(&report_of_kind(ReportKind::Chat), executor);

        session.select(ModerationAction::Warn).await.unwrap();
        assert!(!session.can_commit().await);

        let error = session.confirm().await.unwrap_err();
        assert!(matches!(error.error_type, ErrorType::FailedValidation { .. }));

        session
            .set_message("Keep payments on the platform.")
            .await
            .unwrap();
        assert!(session.can_commit().await);
    }

    #[tokio::test]
    async fn a_confirmed_ban_runs_through_to_an_acknowledged_success() {
        let db = DatabaseInfo::Test("moderation_session".to_string())
            .connect()
            .await
            .unwrap();
        let executor = Arc::new(RecordingExecutor::with_latency(Duration::from_millis(25)));
        let report = report_of_kind(ReportKind::User);
        let mut session =
            ModerationSession::new(&report, executor.clone()).with_audit(db.clone());

        session.select(ModerationAction::Ban).await.unwrap();
        session.confirm().await.unwrap();
        assert!(session.overlay_visible().await);

        session.settled().await.unwrap();
        assert!(!session.overlay_visible().await);
        assert!(matches!(
            session.stage().await,
            ActionStage::Outcome {
                result: CommitResult::Success,
                ..
            }
        ));

        // The intent reached the collaborator and the audit trail
        let intents = executor.intents().await;
        assert_eq!(intents.len(), 1);
        assert_eq!(intents[0].action, ModerationAction::Ban);
        assert_eq!(intents[0].report_id, report.id);

        let audit = db.fetch_audit_items(&report.id).await.unwrap();
        assert_eq!(audit.len(), 1);
        assert_eq!(audit[0].action, ModerationAction::Ban);

        session.acknowledge().await.unwrap();
        assert_eq!(session.stage().await, ActionStage::Idle);
        assert!(session.commit_task.is_none(), "no residual timer");
    }

    #[tokio::test]
    async fn removal_intent_carries_reason_and_comment() {
        let executor = Arc::new(RecordingExecutor::default());
        let mut session =
            ModerationSession::new(&report_of_kind(ReportKind::Listing), executor.clone());

        session.select(ModerationAction::Remove).await.unwrap();
        session
            .set_removal_reason(RemovalReason::Other)
            .await
            .unwrap();
        session.set_comment("Stolen product photos").await.unwrap();
        session.confirm().await.unwrap();
        session.settled().await.unwrap();

        let intents = executor.intents().await;
        let payload = intents[0].payload.as_ref().unwrap();
        assert_eq!(payload.reason, Some(RemovalReason::Other));
        assert_eq!(payload.comment.as_deref(), Some("Stolen product photos"));
        assert_eq!(payload.message, None);
    }

    #[tokio::test]
    async fn failed_commits_surface_and_can_be_retried() {
        let executor = Arc::new(FlakyExecutor {
            failures: AtomicUsize::new(1),
        });
        let mut session = ModerationSession::new(&report_of_kind(ReportKind::User), executor);

        session.select(ModerationAction::Dismiss).await.unwrap();
        session.confirm().await.unwrap();
        session.settled().await.unwrap();

        assert!(matches!(
            session.stage().await,
            ActionStage::Outcome {
                result: CommitResult::Failure { .. },
                ..
            }
        ));

        session.retry().await.unwrap();
        session.settled().await.unwrap();

        assert!(matches!(
            session.stage().await,
            ActionStage::Outcome {
                result: CommitResult::Success,
                ..
            }
        ));

        session.acknowledge().await.unwrap();
        assert_eq!(session.stage().await, ActionStage::Idle);
    }

    #[tokio::test]
    async fn retry_is_only_offered_after_a_failure() {
        let executor = Arc::new(RecordingExecutor::default());
        let mut session = ModerationSession::new(&report_of_kind(ReportKind::User), executor);

        session.select(ModerationAction::Dismiss).await.unwrap();
        session.confirm().await.unwrap();
        session.settled().await.unwrap();

        assert!(session.retry().await.is_err());
    }

    #[tokio::test]
    async fn dropping_a_busy_session_cancels_the_pending_commit() {
        let executor = Arc::new(RecordingExecutor::with_latency(Duration::from_millis(50)));
        let mut session =
            ModerationSession::new(&report_of_kind(ReportKind::User), executor.clone());

        session.select(ModerationAction::Ban).await.unwrap();
        session.confirm().await.unwrap();

        let stage = Arc::clone(&session.stage);
        drop(session);

        tokio::time::sleep(Duration::from_millis(150)).await;

        // The aborted task never reached the outcome transition
        assert!(matches!(*stage.lock().await, ActionStage::Busy { .. }));
        assert!(executor.intents().await.is_empty());
    }
}
