use anyhow::Result;

use crate::usecases::{
    context::AppContext,
    contracts::{AppEventSource, ShellOrchestrator},
};

use super::{
    terminal::TerminalSession,
    view::{self, PageChrome},
};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    let chrome = PageChrome {
        title: context.config.ui.title.clone(),
        backend_url: context.config.backend.base_url.clone(),
        footer: context.config.ui.footer.clone(),
    };

    tracing::info!(
        log_level = %context.config.logging.level,
        backend = %chrome.backend_url,
        "starting TUI shell"
    );

    let mut terminal = TerminalSession::new()?;
    orchestrator.start()?;

    run_loop(event_source, orchestrator, |orchestrator| {
        terminal.draw(|frame| view::render(frame, orchestrator.state_mut(), &chrome))
    })?;

    tracing::info!("TUI shell stopped");
    Ok(())
}

/// Draws and handles events until the orchestrator stops.
fn run_loop<D>(
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
    mut draw: D,
) -> Result<()>
where
    D: FnMut(&mut dyn ShellOrchestrator) -> Result<()>,
{
    while orchestrator.state().is_running() {
        draw(orchestrator)?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    Ok(())
}
