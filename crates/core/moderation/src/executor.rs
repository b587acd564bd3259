use std::time::Duration;

use futures::lock::Mutex;
use tokio::time::sleep;

use bazaar_config::config;
use bazaar_models::v0::ActionIntent;
use bazaar_result::Result;

/// Capability that delivers a committed action intent to the moderation
/// collaborator. Delivery guarantees end at this boundary; a production
/// implementation would put a real remote call behind it.
#[async_trait]
pub trait CommitExecutor: Sync + Send {
    async fn execute(&self, intent: &ActionIntent) -> Result<()>;
}

/// Fixed-latency stand-in for the real moderation backend; always succeeds.
pub struct DelayExecutor {
    latency: Duration,
}

impl DelayExecutor {
    pub fn new(latency: Duration) -> DelayExecutor {
        DelayExecutor { latency }
    }

    /// Latency taken from `moderation.commit_latency_ms`
    pub async fn from_config() -> DelayExecutor {
        DelayExecutor::new(Duration::from_millis(
            config().await.moderation.commit_latency_ms,
        ))
    }
}

#[async_trait]
impl CommitExecutor for DelayExecutor {
    async fn execute(&self, intent: &ActionIntent) -> Result<()> {
        sleep(self.latency).await;
        info!(
            "Emitted {:?} intent against report {}.",
            intent.action, intent.report_id
        );
        Ok(())
    }
}

/// Executor that captures every intent it is given, so callers can assert on
/// what would have been delivered.
#[derive(Default)]
pub struct RecordingExecutor {
    latency: Duration,
    intents: Mutex<Vec<ActionIntent>>,
}

impl RecordingExecutor {
    pub fn with_latency(latency: Duration) -> RecordingExecutor {
        RecordingExecutor {
            latency,
            intents: Mutex::default(),
        }
    }

    /// Intents executed so far, in commit order
    pub async fn intents(&self) -> Vec<ActionIntent> {
        self.intents.lock().await.clone()
    }
}

#[async_trait]
impl CommitExecutor for RecordingExecutor {
    async fn execute(&self, intent: &ActionIntent) -> Result<()> {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }
        self.intents.lock().await.push(intent.clone());
        Ok(())
    }
}
