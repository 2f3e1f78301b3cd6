use std::{path::Path, sync::mpsc, time::Duration};

use crate::{
    domain::{post::PostAuthor, shell_state::ShellState, workspace::FeedWorkspace},
    infra::{
        self,
        config::{AppConfig, FileConfigAdapter},
        contracts::ConfigAdapter,
        error::AppError,
        removal_timer::TokioRemovalTimer,
        storage_layout::StorageLayout,
    },
    ui::{ChannelRemovalSource, CrosstermEventSource},
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
        seed_feed::seed_sample_feed,
        shell::DefaultShellOrchestrator,
    },
};

pub struct ShellComposition {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn ShellOrchestrator>,
}

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let context = build_context(&FileConfigAdapter::new(config_path))?;
    let layout = StorageLayout::resolve()?;
    let guard = infra::logging::init(&context.config.logging, &layout)?;

    tracing::info!(log_file = %layout.log_file().display(), "logging initialized");
    Ok(context.with_log_guard(guard))
}

fn build_context(config_adapter: &dyn ConfigAdapter) -> Result<AppContext, AppError> {
    let config = config_adapter.load()?;
    Ok(AppContext::new(config))
}

/// Fresh in-memory state for one session.
pub fn build_shell_state(config: &AppConfig) -> ShellState {
    let mut workspace = FeedWorkspace::new(config.profile.user_id.clone());
    if config.startup.seed_sample_feed {
        seed_sample_feed(&mut workspace);
    }

    let profile = PostAuthor::new(config.profile.name.clone(), config.profile.avatar.clone());
    ShellState::new(workspace, profile)
}

/// Wires the terminal event source, the removal timer, and the orchestrator.
pub fn compose_shell(context: &AppContext) -> Result<ShellComposition, AppError> {
    let (due_tx, due_rx) = mpsc::channel();
    let latency = Duration::from_millis(context.config.feed.removal_latency_ms);
    let timer = TokioRemovalTimer::start(latency, due_tx)?;

    let event_source = ChannelRemovalSource::new(CrosstermEventSource, due_rx);
    let orchestrator = DefaultShellOrchestrator::new(build_shell_state(&context.config), timer);

    Ok(ShellComposition {
        event_source: Box::new(event_source),
        orchestrator: Box::new(orchestrator),
    })
}
