//! /prompts command - list or send suggested prompts

use super::CommandResult;
use confee_chat::suggested_prompts;

pub struct PromptsCommand;

impl PromptsCommand {
    pub fn execute(args: &str) -> CommandResult {
        if args.is_empty() {
            return CommandResult::Message(Self::list_text());
        }

        match confee_chat::find_prompt(args) {
            Some(p) => CommandResult::Submit(p.prompt.to_string()),
            None => CommandResult::Message(format!(
                "No suggested prompt '{}'. Type /prompts to see the list.",
                args
            )),
        }
    }

    /// Numbered list of suggested prompts
    pub fn list_text() -> String {
        let mut output = String::from("Suggested prompts:\n");
        for p in suggested_prompts() {
            output.push_str(&format!("  [{}] {}\n", p.id, p.label));
        }
        output.push_str("Send one with /p <number>");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_contains_every_label() {
        let text = PromptsCommand::list_text();
        for p in suggested_prompts() {
            assert!(text.contains(p.label));
        }
    }

    #[test]
    fn test_unknown_id() {
        assert!(matches!(
            PromptsCommand::execute("42"),
            CommandResult::Message(m) if m.contains("42")
        ));
    }
}
