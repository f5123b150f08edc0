//! Interaction prompts

use breach_core::id::{CrateId, DoorId, TerminalId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who owns a prompt. Precedence: terminal > door > crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromptSource {
    /// Hackable terminal
    Terminal(TerminalId),
    /// Door
    Door(DoorId),
    /// Supply crate / pickup
    Crate(CrateId),
}

impl PromptSource {
    /// Terminal source
    pub fn terminal(id: impl Into<TerminalId>) -> Self {
        Self::Terminal(id.into())
    }

    /// Door source
    pub fn door(id: impl Into<DoorId>) -> Self {
        Self::Door(id.into())
    }

    /// Crate source
    pub fn supply_crate(id: impl Into<CrateId>) -> Self {
        Self::Crate(id.into())
    }

    /// Higher wins
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Terminal(_) => 3,
            Self::Door(_) => 2,
            Self::Crate(_) => 1,
        }
    }
}

impl fmt::Display for PromptSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terminal(id) => f.write_str(&id.source_label()),
            Self::Door(id) => f.write_str(&id.source_label()),
            Self::Crate(id) => f.write_str(&id.source_label()),
        }
    }
}

/// An interaction prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionPrompt {
    /// Text shown to the player
    pub message: String,
    /// Key label (e.g. "E"), if the prompt is actionable
    pub action_key: Option<String>,
    /// Owner of the prompt
    pub source: PromptSource,
}

impl InteractionPrompt {
    /// Create a prompt with no action key
    pub fn new(message: impl Into<String>, source: PromptSource) -> Self {
        Self {
            message: message.into(),
            action_key: None,
            source,
        }
    }

    /// Set action key label
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.action_key = Some(key.into());
        self
    }

    /// Display text, e.g. `[E] Hack terminal`
    pub fn display_text(&self) -> String {
        match &self.action_key {
            Some(key) => format!("[{}] {}", key, self.message),
            None => self.message.clone(),
        }
    }
}

/// Single-slot prompt arbitration
#[derive(Debug, Clone, Default)]
pub struct PromptChannel {
    slot: Option<InteractionPrompt>,
}

impl PromptChannel {
    /// Create an empty channel
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a prompt.
    ///
    /// Rejected only when the slot holds a prompt of strictly higher
    /// precedence. Returns whether the prompt is now visible.
    pub fn show(&mut self, prompt: InteractionPrompt) -> bool {
        if let Some(current) = &self.slot {
            if current.source.precedence() > prompt.source.precedence() {
                log::trace!(
                    "Prompt from {} suppressed by {}",
                    prompt.source,
                    current.source
                );
                return false;
            }
            if *current == prompt {
                return true;
            }
        }
        log::debug!("Prompt '{}' from {}", prompt.display_text(), prompt.source);
        self.slot = Some(prompt);
        true
    }

    /// Clear the slot if `source` owns it. Returns whether anything was cleared.
    pub fn clear(&mut self, source: &PromptSource) -> bool {
        match &self.slot {
            Some(current) if current.source == *source => {
                log::debug!("Prompt from {} cleared", source);
                self.slot = None;
                true
            }
            _ => false,
        }
    }

    /// Drop whatever is shown
    pub fn clear_all(&mut self) {
        self.slot = None;
    }

    /// Currently visible prompt
    pub fn current(&self) -> Option<&InteractionPrompt> {
        self.slot.as_ref()
    }

    /// Whether `source` owns the slot
    pub fn is_owned_by(&self, source: &PromptSource) -> bool {
        self.slot.as_ref().map(|p| &p.source) == Some(source)
    }
}
