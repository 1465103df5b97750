//! /history command - list the conversation so far

use super::CommandResult;
use crate::utils::truncate_chars;
use confee_chat::{ConversationController, Role};

pub struct HistoryCommand;

impl HistoryCommand {
    pub fn execute(chat: &ConversationController) -> CommandResult {
        let messages = chat.messages();
        if messages.is_empty() {
            return CommandResult::Message("No messages yet.".to_string());
        }

        let mut output = String::from("Messages in conversation:\n");
        for (i, msg) in messages.iter().enumerate() {
            let role = match msg.role() {
                Role::User => "you",
                Role::Assistant => "confee",
            };
            let preview = truncate_chars(msg.content(), 60).replace('\n', " ");
            output.push_str(&format!(
                "  {}: {} [{}] {}\n",
                i,
                msg.timestamp().format("%H:%M:%S"),
                role,
                preview
            ));
        }
        CommandResult::Message(output.trim_end().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::chat;

    #[test]
    fn test_empty_history() {
        assert_eq!(
            HistoryCommand::execute(&chat()),
            CommandResult::Message("No messages yet.".into())
        );
    }

    #[tokio::test]
    async fn test_lists_messages_in_order() {
        let mut chat = chat();
        chat.submit("おすすめの勉強会ある？").await;

        let CommandResult::Message(text) = HistoryCommand::execute(&chat) else {
            panic!("expected message");
        };
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("  0:") && lines[1].contains("[you] おすすめの勉強会ある？"));
        assert!(lines[2].starts_with("  1:") && lines[2].contains("[confee] echo: おすすめの勉強会ある？"));
    }
}
