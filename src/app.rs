use anyhow::{anyhow, Result};

use crate::{
    api::{self, HttpChatBackend},
    cli::{Cli, Command},
    domain::{self, message::Message},
    infra, ui,
    usecases::{
        self, bootstrap,
        load_messages::load_messages,
        send_message::{send_message, SendMessageCommand},
    },
};

const CLI_FETCH_FAILED: &str = "CLI_FETCH_FAILED";
const CLI_SEND_FAILED: &str = "CLI_SEND_FAILED";

pub fn run(cli: Cli) -> Result<()> {
    let context = bootstrap::bootstrap(cli.config.as_deref(), cli.base_url.as_deref())?;

    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        api = api::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    match cli.command_or_default() {
        Command::Run => {
            let mut shell = bootstrap::compose_shell(&context)?;
            ui::shell::start(&context, &mut shell.event_source, &mut shell.orchestrator)?;
        }
        Command::Fetch => {
            let backend = HttpChatBackend::new(&context.config.backend)?;
            tracing::info!(url = backend.messages_url(), "fetching messages");
            let output = load_messages(&backend).map_err(|error| {
                tracing::error!(code = CLI_FETCH_FAILED, error = ?error, "fetch failed");
                anyhow!(error.user_message())
            })?;

            for line in transcript_lines(&output.messages) {
                println!("{line}");
            }
        }
        Command::Send { text } => {
            let backend = HttpChatBackend::new(&context.config.backend)?;
            let reply = send_message(&backend, SendMessageCommand::new(text)).map_err(|error| {
                tracing::error!(code = CLI_SEND_FAILED, error = ?error, "send failed");
                anyhow!(error.user_message())
            })?;

            println!("{}", format_message(&reply));
        }
    }

    Ok(())
}

fn transcript_lines(messages: &[Message]) -> Vec<String> {
    if messages.is_empty() {
        return vec!["(no messages)".to_owned()];
    }

    messages.iter().map(format_message).collect()
}

/// One message per line as `type: text`; untyped messages print text only.
fn format_message(message: &Message) -> String {
    match message.author_label() {
        Some(label) => format!("{label}: {}", message.text),
        None => message.text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_typed_message_with_label() {
        let message = Message::new("hello", "bot");

        assert_eq!(format_message(&message), "bot: hello");
    }

    #[test]
    fn formats_untyped_message_as_text_only() {
        let message = Message::new("hello", "  ");

        assert_eq!(format_message(&message), "hello");
    }

    #[test]
    fn transcript_lines_keep_backend_order() {
        let lines = transcript_lines(&[Message::new("one", "user"), Message::new("two", "bot")]);

        assert_eq!(lines, vec!["user: one".to_owned(), "bot: two".to_owned()]);
    }

    #[test]
    fn empty_transcript_prints_placeholder() {
        assert_eq!(transcript_lines(&[]), vec!["(no messages)".to_owned()]);
    }
}
