//! Shared per-frame context
//!
//! The player controller is the single writer of [`PlayerPosition`]; triggers,
//! doors, terminals and crates hold clones of the same cell and only read it.
//! Until the first publish the position is `None` and readers treat the
//! player as absent for that frame.

use crate::sink::{EventSink, NullSink};
use glam::Vec3;
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Debug, Default)]
struct PublishedPosition {
    position: Option<Vec3>,
    generation: u64,
}

/// Published player world position (post collision resolution)
#[derive(Debug, Clone, Default)]
pub struct PlayerPosition {
    inner: Arc<RwLock<PublishedPosition>>,
}

impl PlayerPosition {
    /// Create an empty cell (no position published yet)
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish this frame's position
    pub fn publish(&self, position: Vec3) {
        let mut inner = self.inner.write();
        inner.position = Some(position);
        inner.generation += 1;
    }

    /// Withdraw the position (player despawned or scene unloading)
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        inner.position = None;
        inner.generation += 1;
    }

    /// Latest published position, if any
    pub fn get(&self) -> Option<Vec3> {
        self.inner.read().position
    }

    /// Number of publishes so far
    pub fn generation(&self) -> u64 {
        self.inner.read().generation
    }

    /// Euclidean distance from the player to `point`, if the player is present
    pub fn distance_to(&self, point: Vec3) -> Option<f32> {
        self.get().map(|p| p.distance(point))
    }
}

/// Context handed to each gameplay system at construction
#[derive(Clone)]
pub struct GameContext {
    /// Shared player position
    pub player_position: PlayerPosition,
    /// Sound / narration / pointer-capture sink
    pub sink: Arc<dyn EventSink>,
}

impl GameContext {
    /// Create a context around an external sink
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self {
            player_position: PlayerPosition::new(),
            sink,
        }
    }

    /// Context with a sink that discards everything
    pub fn headless() -> Self {
        Self::new(Arc::new(NullSink))
    }
}

impl Default for GameContext {
    fn default() -> Self {
        Self::headless()
    }
}

impl std::fmt::Debug for GameContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameContext")
            .field("player_position", &self.player_position.get())
            .finish()
    }
}
