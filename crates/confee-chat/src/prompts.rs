//! Suggested prompts offered on an empty conversation.

use serde::Serialize;

/// Rough kind of a suggested prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptCategory {
    /// Names a concrete topic or event type
    Keyword,
    /// Open-ended, lets the assistant pick
    Vague,
}

/// A canned prompt. `prompt` is submitted verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuggestedPrompt {
    pub id: &'static str,
    pub label: &'static str,
    pub prompt: &'static str,
    pub category: PromptCategory,
}

const SUGGESTED_PROMPTS: &[SuggestedPrompt] = &[
    SuggestedPrompt {
        id: "1",
        label: "TypeScriptのカンファレンスある？",
        prompt: "TypeScriptのカンファレンスある？",
        category: PromptCategory::Keyword,
    },
    SuggestedPrompt {
        id: "2",
        label: "今月開催のLT会を教えて",
        prompt: "今月開催のLT会を教えて",
        category: PromptCategory::Keyword,
    },
    SuggestedPrompt {
        id: "3",
        label: "面白そうなカンファレンスを見つけてきて",
        prompt: "面白そうなカンファレンスを見つけてきて",
        category: PromptCategory::Vague,
    },
    SuggestedPrompt {
        id: "4",
        label: "おすすめの勉強会ある？",
        prompt: "おすすめの勉強会ある？",
        category: PromptCategory::Vague,
    },
];

/// All suggested prompts, in display order
pub fn suggested_prompts() -> &'static [SuggestedPrompt] {
    SUGGESTED_PROMPTS
}

/// Look up a suggested prompt by its id
pub fn find_prompt(id: &str) -> Option<&'static SuggestedPrompt> {
    SUGGESTED_PROMPTS.iter().find(|p| p.id == id)
}
