//! Level layouts
//!
//! The level-assembly input: where the player spawns, which boxes block, where
//! zones, doors, terminals and crates sit. Geometry authoring happens
//! elsewhere; this is only the placement list.

use crate::error::{read_file, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Axis-aligned box in a layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxDef {
    /// Debug id
    #[serde(default)]
    pub id: Option<String>,
    /// Minimum corner
    pub min: [f32; 3],
    /// Maximum corner
    pub max: [f32; 3],
}

/// Placed object whose bounds become a dynamic collider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldObjectDef {
    /// Object name (also the collider debug id)
    pub name: String,
    /// Minimum corner, absent until geometry is known
    #[serde(default)]
    pub min: Option<[f32; 3]>,
    /// Maximum corner, absent until geometry is known
    #[serde(default)]
    pub max: Option<[f32; 3]>,
}

/// Zone boundary (trigger volume with a briefing)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneDef {
    /// Zone id, passed to narration
    pub id: String,
    /// Box center
    pub center: [f32; 3],
    /// Box half extents
    pub half_extents: [f32; 3],
    /// Narration key played on first entry
    #[serde(default = "default_enter_narration")]
    pub narration: String,
    /// Narration key played on every exit
    #[serde(default)]
    pub exit_narration: Option<String>,
}

fn default_enter_narration() -> String {
    "zone_enter".to_string()
}

/// Door placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorDef {
    /// Door id
    pub id: String,
    /// Slab center when closed
    pub position: [f32; 3],
    /// Slab half extents
    #[serde(default)]
    pub half_extents: Option<[f32; 3]>,
    /// Lift when open (defaults to the slab height)
    #[serde(default)]
    pub open_offset: Option<f32>,
    /// Terminal whose hack opens this door
    #[serde(default)]
    pub terminal: Option<String>,
}

/// Terminal placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalDef {
    /// Terminal id
    pub id: String,
    /// World position
    pub position: [f32; 3],
    /// World flag required before the terminal can be used
    #[serde(default)]
    pub gate_flag: Option<String>,
}

/// Supply crate placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrateDef {
    /// Crate id
    pub id: String,
    /// World position
    pub position: [f32; 3],
    /// Loot label
    #[serde(default)]
    pub loot: Option<String>,
}

/// Complete level layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    /// Level name
    #[serde(default)]
    pub name: String,
    /// Player spawn point (reference point, not feet)
    #[serde(default = "default_spawn")]
    pub spawn: [f32; 3],
    /// Initial facing
    #[serde(default)]
    pub spawn_yaw: f32,
    /// Static colliders
    #[serde(default)]
    pub static_colliders: Vec<BoxDef>,
    /// Dynamic colliders
    #[serde(default)]
    pub world_objects: Vec<WorldObjectDef>,
    /// Zones
    #[serde(default)]
    pub zones: Vec<ZoneDef>,
    /// Doors
    #[serde(default)]
    pub doors: Vec<DoorDef>,
    /// Terminals
    #[serde(default)]
    pub terminals: Vec<TerminalDef>,
    /// Supply crates
    #[serde(default)]
    pub crates: Vec<CrateDef>,
}

fn default_spawn() -> [f32; 3] {
    [0.0, 1.0, 0.0]
}

/// Built-in layout used when no level file is given
const DEMO_LAYOUT: &str = r#"
name = "Maintenance Corridor"
spawn = [0.0, 1.0, 0.0]
spawn_yaw = 0.0

[[static_colliders]]
id = "wall_west"
min = [-3.0, 0.0, -22.0]
max = [-2.0, 3.0, 2.0]

[[static_colliders]]
id = "wall_east"
min = [2.0, 0.0, -22.0]
max = [3.0, 3.0, 2.0]

[[static_colliders]]
id = "wall_north"
min = [-3.0, 0.0, -23.0]
max = [3.0, 3.0, -22.0]

[[static_colliders]]
id = "wall_south"
min = [-3.0, 0.0, 2.0]
max = [3.0, 3.0, 3.0]

[[world_objects]]
name = "pipe_rack"
min = [-2.0, 0.0, -17.0]
max = [-1.2, 2.6, -15.0]

[[world_objects]]
name = "floor_grate"
min = [-1.0, 0.0, -8.0]
max = [1.0, 0.05, -7.0]

[[world_objects]]
name = "ceiling_duct"
min = [-2.0, 2.5, -20.0]
max = [2.0, 3.0, -2.0]

[[zones]]
id = "atrium"
center = [0.0, 1.0, -3.0]
half_extents = [2.0, 2.0, 2.5]

[[zones]]
id = "lab"
center = [0.0, 1.0, -15.0]
half_extents = [2.0, 2.0, 4.5]
exit_narration = "zone_exit"

[[doors]]
id = "lab_door"
position = [0.0, 1.5, -10.0]
half_extents = [2.0, 1.5, 0.2]
terminal = "t1"

[[terminals]]
id = "t1"
position = [1.5, 1.0, -6.0]

[[terminals]]
id = "t_core"
position = [-1.5, 1.0, -20.0]
gate_flag = "boss_defeated"

[[crates]]
id = "c1"
position = [-1.5, 0.5, -4.0]
loot = "medkit"
"#;

impl LevelLayout {
    /// Load from a TOML file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let layout = Self::from_toml_str(&read_file(path)?)?;
        log::info!("Loaded level '{}' from {}", layout.name, path.display());
        Ok(layout)
    }

    /// Parse from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The built-in demo corridor
    pub fn demo() -> Result<Self> {
        Self::from_toml_str(DEMO_LAYOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_layout_parses() {
        let layout = LevelLayout::demo().unwrap();
        assert_eq!(layout.static_colliders.len(), 4);
        assert_eq!(layout.doors[0].terminal.as_deref(), Some("t1"));
        assert_eq!(layout.zones[0].narration, "zone_enter");
        assert_eq!(layout.terminals[1].gate_flag.as_deref(), Some("boss_defeated"));
    }

    #[test]
    fn test_minimal_layout() {
        let layout = LevelLayout::from_toml_str("name = \"empty\"").unwrap();
        assert_eq!(layout.spawn, [0.0, 1.0, 0.0]);
        assert!(layout.doors.is_empty());
    }

    #[test]
    fn test_door_requires_position() {
        let result = LevelLayout::from_toml_str("[[doors]]\nid = \"d\"\n");
        assert!(result.is_err());
    }
}
