//! Slash commands for interactive mode

mod history;
mod prompts;
mod session;

pub use history::HistoryCommand;
pub use prompts::PromptsCommand;
pub use session::SessionCommand;

use confee_chat::ConversationController;

/// Result of executing a slash command
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// Start a new conversation (clears history, new session)
    NewConversation,
    /// Submit this text as if the user had typed it
    Submit(String),
    /// Show a message to the user (not sent to the assistant)
    Message(String),
    /// Exit the application
    Exit,
    /// Unknown command
    Unknown(String),
}

/// Parse and execute a slash command
pub fn execute_command(input: &str, chat: &ConversationController) -> Option<CommandResult> {
    let input = input.trim();

    let rest = input.strip_prefix('/')?;
    let parts: Vec<&str> = rest.splitn(2, ' ').collect();
    let command = parts[0].to_lowercase();
    let args = parts.get(1).map(|s| s.trim()).unwrap_or("");

    Some(match command.as_str() {
        "help" | "h" | "?" => CommandResult::Message(help_message()),

        "new" | "n" | "clear" => CommandResult::NewConversation,

        "quit" | "exit" | "q" => CommandResult::Exit,

        "prompts" | "prompt" | "p" => PromptsCommand::execute(args),

        "session" | "s" => SessionCommand::execute(chat),

        "history" => HistoryCommand::execute(chat),

        _ => CommandResult::Unknown(command),
    })
}

fn help_message() -> String {
    r#"Available commands:
  /help, /h, /?          Show this help message
  /prompts, /p [id]      List suggested prompts, or send prompt <id>
  /history               List messages in this conversation
  /session, /s           Show session id and message counts
  /new, /n, /clear       Start a new conversation (new session)
  /quit, /exit, /q       Exit confee

Examples:
  /prompts               Show the suggested prompts
  /p 2                   Ask "今月開催のLT会を教えて"
  /new                   Forget this conversation and start fresh"#
        .to_string()
}
