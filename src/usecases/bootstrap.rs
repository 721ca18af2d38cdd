use std::{path::Path, sync::mpsc};

use crate::{
    api::{HttpChatBackend, RequestWorker},
    infra::{self, config::FileConfigAdapter, contracts::ConfigAdapter, error::AppError},
    ui::ShellEventSource,
    usecases::{context::AppContext, shell::DefaultShellOrchestrator},
};

/// Everything the TUI loop needs, wired together.
pub struct ShellComposition {
    pub event_source: ShellEventSource,
    pub orchestrator: DefaultShellOrchestrator<RequestWorker>,
}

pub fn bootstrap(config_path: Option<&Path>, base_url: Option<&str>) -> Result<AppContext, AppError> {
    let context = build_context(config_path, base_url)?;
    let log_guard = infra::logging::init(&context.config.logging)?;

    Ok(context.with_log_guard(log_guard))
}

pub fn compose_shell(context: &AppContext) -> Result<ShellComposition, AppError> {
    let backend = HttpChatBackend::new(&context.config.backend)?;
    let (event_tx, event_rx) = mpsc::channel();
    let worker = RequestWorker::start(backend, event_tx)?;

    Ok(ShellComposition {
        event_source: ShellEventSource::new(event_rx),
        orchestrator: DefaultShellOrchestrator::new(worker),
    })
}

fn build_context(config_path: Option<&Path>, base_url: Option<&str>) -> Result<AppContext, AppError> {
    let config_adapter = FileConfigAdapter::new(config_path).with_base_url(base_url);
    let config = config_adapter.load().map_err(AppError::Other)?;

    Ok(AppContext::new(config))
}
