use std::{sync::mpsc::Sender, time::Duration};

use tokio::runtime::{Builder, Runtime};

use crate::{
    domain::events::RemovalRequest, infra::error::AppError,
    usecases::contracts::RemovalScheduler,
};

const REMOVAL_TIMER_STARTED: &str = "REMOVAL_TIMER_STARTED";
const REMOVAL_DUE_SEND_FAILED: &str = "REMOVAL_DUE_SEND_FAILED";

/// Delays each scheduled removal by a fixed latency on a background tokio
/// runtime, then reports it back to the event loop over `due_tx`.
///
/// Timers are not cancellable. Dropping the timer abandons the ones still
/// sleeping.
#[derive(Debug)]
pub struct TokioRemovalTimer {
    runtime: Runtime,
    latency: Duration,
    due_tx: Sender<RemovalRequest>,
}

impl TokioRemovalTimer {
    pub fn start(latency: Duration, due_tx: Sender<RemovalRequest>) -> Result<Self, AppError> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("welearn-removal-timer")
            .enable_time()
            .build()
            .map_err(AppError::RemovalTimerStart)?;

        tracing::info!(
            code = REMOVAL_TIMER_STARTED,
            latency_ms = latency.as_millis(),
            "removal timer started"
        );

        Ok(Self {
            runtime,
            latency,
            due_tx,
        })
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl RemovalScheduler for TokioRemovalTimer {
    fn schedule(&self, request: RemovalRequest) {
        let due_tx = self.due_tx.clone();
        let latency = self.latency;

        self.runtime.spawn(async move {
            tokio::time::sleep(latency).await;

            if let Err(error) = due_tx.send(request) {
                tracing::warn!(
                    code = REMOVAL_DUE_SEND_FAILED,
                    error = %error,
                    "removal elapsed but the event loop is gone"
                );
            }
        });
    }
}
