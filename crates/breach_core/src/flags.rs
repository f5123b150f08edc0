//! Named progression flags
//!
//! External collaborators (encounter scripts, save loading) raise flags such as
//! `boss_defeated`; gated terminals consult them every frame.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of raised world flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldFlags {
    raised: BTreeSet<String>,
}

impl WorldFlags {
    /// Create an empty flag set
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise or lower a flag. Returns true if the value changed.
    pub fn set(&mut self, flag: impl Into<String>, value: bool) -> bool {
        let flag = flag.into();
        let changed = if value {
            self.raised.insert(flag.clone())
        } else {
            self.raised.remove(&flag)
        };
        if changed {
            log::info!("World flag '{}' = {}", flag, value);
        }
        changed
    }

    /// Check a flag (unknown flags are lowered)
    pub fn is_set(&self, flag: &str) -> bool {
        self.raised.contains(flag)
    }

    /// Iterate raised flags in name order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.raised.iter().map(String::as_str)
    }

    /// Number of raised flags
    pub fn len(&self) -> usize {
        self.raised.len()
    }

    /// Whether no flag is raised
    pub fn is_empty(&self) -> bool {
        self.raised.is_empty()
    }
}
