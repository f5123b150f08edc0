//! Hackable terminals
//!
//! A terminal is `Locked` until its overlay is resolved with success, then
//! `Hacked` for the rest of the session. A gate flag holds it non-interactive
//! until some other part of the game raises that flag.

use crate::config::InteractionConfig;
use crate::overlay::{HackOutcome, HackingOverlay, OpenOutcome, OverlayMode};
use breach_core::context::PlayerPosition;
use breach_core::dispatch::dispatch;
use breach_core::flags::WorldFlags;
use breach_core::id::TerminalId;
use breach_core::sink::EventSink;
use breach_hud::prompt::{InteractionPrompt, PromptChannel, PromptSource};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Prompt shown at a locked, ungated terminal
pub const HACK_PROMPT_MESSAGE: &str = "Hack terminal";

/// Terminal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TerminalState {
    /// Initial
    #[default]
    Locked,
    /// One-way
    Hacked,
}

/// Result of an interact key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractOutcome {
    /// No position published yet
    PlayerAbsent,
    /// Nothing in range
    NoTerminalInRange,
    /// Every terminal in range is held by its gate flag; carries the nearest
    Gated(TerminalId),
    /// An overlay is already open
    OverlayBusy,
    /// Overlay opened in normal mode
    HackStarted(TerminalId),
    /// Overlay opened in already-hacked mode
    AlreadyHacked(TerminalId),
}

/// A hackable terminal
#[derive(Debug, Clone, PartialEq)]
pub struct Terminal {
    /// Identifier
    pub id: TerminalId,
    /// World position
    pub position: Vec3,
    /// Flag that must be raised before the terminal can be used
    pub gate_flag: Option<String>,
    state: TerminalState,
}

impl Terminal {
    /// Create a locked, ungated terminal
    pub fn new(id: impl Into<TerminalId>, position: Vec3) -> Self {
        Self {
            id: id.into(),
            position,
            gate_flag: None,
            state: TerminalState::Locked,
        }
    }

    /// Gate on a world flag (e.g. `boss_defeated`)
    pub fn gated_by(mut self, flag: impl Into<String>) -> Self {
        self.gate_flag = Some(flag.into());
        self
    }

    /// Current state
    pub fn state(&self) -> TerminalState {
        self.state
    }

    /// Whether hacked
    pub fn is_hacked(&self) -> bool {
        self.state == TerminalState::Hacked
    }

    /// Gated while the gate flag is not raised
    pub fn is_gated(&self, flags: &WorldFlags) -> bool {
        self.gate_flag
            .as_deref()
            .map(|flag| !flags.is_set(flag))
            .unwrap_or(false)
    }

    /// Prompt source for this terminal
    pub fn prompt_source(&self) -> PromptSource {
        PromptSource::Terminal(self.id.clone())
    }
}

/// All terminals in the scene
#[derive(Debug, Clone, Default)]
pub struct TerminalSystem {
    terminals: Vec<Terminal>,
    config: InteractionConfig,
}

impl TerminalSystem {
    /// Create an empty system
    pub fn new(config: InteractionConfig) -> Self {
        Self {
            terminals: Vec::new(),
            config,
        }
    }

    /// Add a terminal
    pub fn add(&mut self, terminal: Terminal) {
        self.terminals.push(terminal);
    }

    /// Look up a terminal
    pub fn get(&self, id: &TerminalId) -> Option<&Terminal> {
        self.terminals.iter().find(|t| t.id == *id)
    }

    /// All terminals
    pub fn iter(&self) -> impl Iterator<Item = &Terminal> {
        self.terminals.iter()
    }

    /// Number of terminals
    pub fn len(&self) -> usize {
        self.terminals.len()
    }

    /// Whether there are no terminals
    pub fn is_empty(&self) -> bool {
        self.terminals.is_empty()
    }

    /// Nearest terminal within interaction range of `position` matching `filter`
    fn nearest_in_range<F>(&self, position: Vec3, filter: F) -> Option<&Terminal>
    where
        F: Fn(&Terminal) -> bool,
    {
        self.terminals
            .iter()
            .filter(|t| filter(t))
            .map(|t| (t, t.position.distance(position)))
            .filter(|(_, d)| *d <= self.config.interaction_radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(t, _)| t)
    }

    /// Nearest terminal in range that can be hacked right now
    pub fn hack_target(&self, position: Vec3, flags: &WorldFlags) -> Option<&Terminal> {
        self.nearest_in_range(position, |t| !t.is_hacked() && !t.is_gated(flags))
    }

    /// Terminal the interact key acts on: the hack target if there is one,
    /// else the nearest hacked terminal. Gated terminals are never targeted.
    pub fn interact_target(&self, position: Vec3, flags: &WorldFlags) -> Option<&Terminal> {
        self.hack_target(position, flags)
            .or_else(|| self.nearest_in_range(position, |t| t.is_hacked()))
    }

    /// Settle prompts for this frame.
    ///
    /// Only the hack target prompts, and only while no overlay is up, so the
    /// prompt always names the terminal the interact key will act on. Every
    /// other terminal clears its own prompt. Skipped entirely with no
    /// published position.
    pub fn update(
        &self,
        player: &PlayerPosition,
        flags: &WorldFlags,
        overlay: &HackingOverlay,
        prompts: &mut PromptChannel,
    ) {
        let Some(position) = player.get() else {
            return;
        };

        let target = if overlay.is_open() {
            None
        } else {
            self.hack_target(position, flags).map(|t| t.id.clone())
        };

        for terminal in &self.terminals {
            if target.as_ref() != Some(&terminal.id) {
                prompts.clear(&terminal.prompt_source());
            }
        }
        if let Some(id) = target {
            prompts.show(
                InteractionPrompt::new(HACK_PROMPT_MESSAGE, PromptSource::Terminal(id))
                    .with_key(self.config.interact_key.clone()),
            );
        }
    }

    /// Handle the interact key against [`TerminalSystem::interact_target`].
    ///
    /// Invalid requests (gated terminal, overlay already open) change nothing.
    /// Sink notifications are best-effort and never stop the overlay opening.
    pub fn interact(
        &self,
        player: &PlayerPosition,
        flags: &WorldFlags,
        overlay: &mut HackingOverlay,
        prompts: &mut PromptChannel,
        sink: &dyn EventSink,
    ) -> InteractOutcome {
        let Some(position) = player.get() else {
            return InteractOutcome::PlayerAbsent;
        };
        let Some(terminal) = self.interact_target(position, flags) else {
            // Anything still in range is gated
            return match self.nearest_in_range(position, |_| true) {
                Some(gated) => {
                    log::debug!("[{}] interact ignored: gated", gated.id.source_label());
                    InteractOutcome::Gated(gated.id.clone())
                }
                None => InteractOutcome::NoTerminalInRange,
            };
        };
        let id = terminal.id.clone();
        let source = terminal.id.source_label();

        if terminal.is_hacked() {
            return match overlay.open(id.clone(), OverlayMode::AlreadyHacked) {
                OpenOutcome::Opened => InteractOutcome::AlreadyHacked(id),
                OpenOutcome::AlreadyOpen(_) => InteractOutcome::OverlayBusy,
            };
        }

        if let OpenOutcome::AlreadyOpen(_) = overlay.open(id.clone(), OverlayMode::Normal) {
            return InteractOutcome::OverlayBusy;
        }
        prompts.clear(&terminal.prompt_source());

        dispatch(&source, || sink.play_sound("hack_start"));
        dispatch(&source, || sink.play_narration("hacking_started", None));
        dispatch(&source, || sink.exit_pointer_capture());

        InteractOutcome::HackStarted(id)
    }

    /// Apply the mini-game result for `terminal`.
    ///
    /// Ignored unless the overlay is open in normal mode for that terminal.
    /// Returns the terminal id when it became hacked, so the caller can open
    /// the doors it controls.
    pub fn resolve_hack(
        &mut self,
        terminal: &TerminalId,
        outcome: HackOutcome,
        overlay: &mut HackingOverlay,
        sink: &dyn EventSink,
    ) -> Option<TerminalId> {
        if !overlay.is_open_for(terminal, OverlayMode::Normal) {
            log::warn!(
                "[{}] hack resolution ignored: no hacking overlay open for it",
                terminal.source_label()
            );
            return None;
        }
        overlay.close();

        let Some(entry) = self.terminals.iter_mut().find(|t| t.id == *terminal) else {
            log::warn!("Hack resolved for unknown terminal {}", terminal);
            return None;
        };

        match outcome {
            HackOutcome::Failure => {
                log::info!("Terminal {} hack failed", terminal);
                None
            }
            HackOutcome::Success => {
                entry.state = TerminalState::Hacked;
                log::info!("Terminal {} hacked", terminal);

                let source = terminal.source_label();
                dispatch(&source, || sink.play_sound("hack_success"));
                dispatch(&source, || sink.play_narration("terminal_hacked", None));
                Some(terminal.clone())
            }
        }
    }
}
