//! Hacking overlay
//!
//! At most one overlay is open system-wide. While it is open the player
//! controller ignores input.

use breach_core::id::TerminalId;
use serde::{Deserialize, Serialize};

/// What the overlay is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverlayMode {
    /// Hacking mini-game, resolved externally
    Normal,
    /// "Already hacked" notice, closes itself after a delay
    AlreadyHacked,
}

/// Result of the external mini-game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HackOutcome {
    /// Terminal becomes hacked
    Success,
    /// Overlay closes, terminal stays locked (also used for cancel)
    Failure,
}

/// Result of an open request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The overlay is now open
    Opened,
    /// Another overlay is already open; nothing changed
    AlreadyOpen(TerminalId),
}

#[derive(Debug, Clone, PartialEq)]
struct OpenOverlay {
    terminal: TerminalId,
    mode: OverlayMode,
    elapsed: f32,
}

/// Modal overlay bound to one terminal
#[derive(Debug, Clone, PartialEq)]
pub struct HackingOverlay {
    open: Option<OpenOverlay>,
    auto_close_delay: f32,
}

impl HackingOverlay {
    /// Create a closed overlay
    pub fn new(auto_close_delay: f32) -> Self {
        Self {
            open: None,
            auto_close_delay,
        }
    }

    /// Whether an overlay is open
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Terminal the open overlay is bound to
    pub fn terminal(&self) -> Option<&TerminalId> {
        self.open.as_ref().map(|o| &o.terminal)
    }

    /// Mode of the open overlay
    pub fn mode(&self) -> Option<OverlayMode> {
        self.open.as_ref().map(|o| o.mode)
    }

    /// Whether the overlay is open in `mode` for `terminal`
    pub fn is_open_for(&self, terminal: &TerminalId, mode: OverlayMode) -> bool {
        matches!(&self.open, Some(o) if o.terminal == *terminal && o.mode == mode)
    }

    /// Open for a terminal. Rejected while any overlay is open.
    pub fn open(&mut self, terminal: TerminalId, mode: OverlayMode) -> OpenOutcome {
        if let Some(current) = &self.open {
            log::debug!(
                "Overlay for {} rejected: {} already open",
                terminal,
                current.terminal
            );
            return OpenOutcome::AlreadyOpen(current.terminal.clone());
        }
        log::info!("Hacking overlay opened for {} ({:?})", terminal, mode);
        self.open = Some(OpenOverlay {
            terminal,
            mode,
            elapsed: 0.0,
        });
        OpenOutcome::Opened
    }

    /// Close. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        match self.open.take() {
            Some(closed) => {
                log::info!("Hacking overlay closed for {}", closed.terminal);
                true
            }
            None => false,
        }
    }

    /// Advance the already-hacked timer. Returns `true` when it closed this frame.
    pub fn tick(&mut self, dt: f32) -> bool {
        let expired = match &mut self.open {
            Some(open) if open.mode == OverlayMode::AlreadyHacked => {
                open.elapsed += dt;
                open.elapsed >= self.auto_close_delay
            }
            _ => false,
        };
        if expired {
            self.close();
        }
        expired
    }
}

impl Default for HackingOverlay {
    fn default() -> Self {
        Self::new(1.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_instance() {
        let mut overlay = HackingOverlay::default();
        assert_eq!(overlay.open("t1".into(), OverlayMode::Normal), OpenOutcome::Opened);
        assert_eq!(
            overlay.open("t2".into(), OverlayMode::Normal),
            OpenOutcome::AlreadyOpen("t1".into())
        );
        assert!(overlay.is_open_for(&"t1".into(), OverlayMode::Normal));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut overlay = HackingOverlay::default();
        overlay.open("t1".into(), OverlayMode::Normal);
        assert!(overlay.close());
        assert!(!overlay.close());
        assert!(!overlay.is_open());
    }

    #[test]
    fn test_already_hacked_auto_closes() {
        let mut overlay = HackingOverlay::new(1.5);
        overlay.open("t1".into(), OverlayMode::AlreadyHacked);

        let mut frames = 0;
        while !overlay.tick(0.1) {
            frames += 1;
            assert!(frames < 100);
        }
        assert!(frames >= 13 && frames <= 15);
        assert!(!overlay.is_open());
    }

    #[test]
    fn test_normal_mode_never_auto_closes() {
        let mut overlay = HackingOverlay::new(1.5);
        overlay.open("t1".into(), OverlayMode::Normal);
        for _ in 0..600 {
            assert!(!overlay.tick(0.1));
        }
        assert!(overlay.is_open());
    }
}
