//! Single-line modal input over the status row.
//!
//! The original editor drove prompts through callback chains; here a prompt
//! is a plain value the event loop feeds keys into, and the core operation
//! runs only once the resolved text arrives (Enter). Escape cancels.

/// What a confirmed prompt input resolves into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    /// Open the entered path
    Open,
    /// Attach the entered path to the current buffer and save
    SaveAs,
    /// Search for the entered needle after the cursor
    Find,
    /// First half of replace-all: collect the needle
    ReplaceNeedle,
    /// Second half of replace-all: collect the replacement
    ReplaceWith { needle: String },
}

/// An in-progress prompt on the status row.
#[derive(Debug, Clone)]
pub struct Prompt {
    pub kind: PromptKind,
    pub label: String,
    pub input: String,
}

impl Prompt {
    pub fn new(kind: PromptKind, label: impl Into<String>, prefill: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            input: prefill.into(),
        }
    }

    pub fn push(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_editing() {
        let mut prompt = Prompt::new(PromptKind::Find, "Find:", "");
        prompt.push('a');
        prompt.push('b');
        prompt.backspace();
        assert_eq!(prompt.input, "a");
        prompt.backspace();
        prompt.backspace(); // empty pop is a no-op
        assert_eq!(prompt.input, "");
    }

    #[test]
    fn test_prompt_prefill() {
        let prompt = Prompt::new(PromptKind::SaveAs, "Save buffer to:", "~/notes.txt");
        assert_eq!(prompt.input, "~/notes.txt");
    }
}
