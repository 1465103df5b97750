//! /session command - show session info

use super::CommandResult;
use confee_chat::{ConversationController, Role};

pub struct SessionCommand;

impl SessionCommand {
    pub fn execute(chat: &ConversationController) -> CommandResult {
        let conversation = chat.conversation();

        let mut output = String::from("Session Info\n");
        output.push_str(&"-".repeat(40));
        output.push('\n');

        output.push_str(&format!("Session id: {}\n", chat.session_id()));
        output.push_str(&format!("Messages:   {} total\n", conversation.len()));
        output.push_str(&format!(
            "            {} user, {} assistant",
            conversation.count(Role::User),
            conversation.count(Role::Assistant)
        ));

        if let Some(first) = conversation.messages().first() {
            output.push_str(&format!(
                "\nStarted:    {}",
                first.timestamp().format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        CommandResult::Message(output)
    }
}
