//! External event sinks
//!
//! Audio, narration and pointer capture live outside the core. The core calls
//! them fire-and-forget through [`EventSink`]; every call goes through
//! [`crate::dispatch`] so a failing sink never blocks a state transition.

use crate::error::HandlerResult;

/// Narrow interface to the presentation layer
pub trait EventSink: Send + Sync {
    /// Play a one-shot sound effect by name
    fn play_sound(&self, name: &str) -> HandlerResult;

    /// Play the narrated line for an event key, optionally scoped to a zone
    fn play_narration(&self, key: &str, zone: Option<&str>) -> HandlerResult;

    /// Release pointer capture (the cursor becomes visible)
    fn exit_pointer_capture(&self) -> HandlerResult;
}

/// Sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn play_sound(&self, _name: &str) -> HandlerResult {
        Ok(())
    }

    fn play_narration(&self, _key: &str, _zone: Option<&str>) -> HandlerResult {
        Ok(())
    }

    fn exit_pointer_capture(&self) -> HandlerResult {
        Ok(())
    }
}

/// Sink that only logs, used by the headless runtime
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn play_sound(&self, name: &str) -> HandlerResult {
        log::info!("[sfx] {}", name);
        Ok(())
    }

    fn play_narration(&self, key: &str, zone: Option<&str>) -> HandlerResult {
        match zone {
            Some(zone) => log::info!("[narration] {} (zone {})", key, zone),
            None => log::info!("[narration] {}", key),
        }
        Ok(())
    }

    fn exit_pointer_capture(&self) -> HandlerResult {
        log::info!("[pointer] capture released");
        Ok(())
    }
}
