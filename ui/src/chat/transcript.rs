//! Append-only conversation record.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// CSS modifier for chat bubbles.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    pub role: Role,
    pub text: String,
    pub html_snippet: Option<String>,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            html_snippet: None,
        }
    }

    pub fn assistant(text: impl Into<String>, html_snippet: Option<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            html_snippet,
        }
    }
}

/// Ordered turns; only ever appended to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    turns: Vec<ChatTurn>,
}

impl Transcript {
    pub fn push(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatTurn> {
        self.turns.iter()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&ChatTurn> {
        self.turns.last()
    }
}
