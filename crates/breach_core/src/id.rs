//! Level-authored identifiers
//!
//! Doors, terminals, crates and zones are named by the level layout
//! (`"t1"`, `"door_lab"`, ...). Each kind gets its own newtype so a door id can
//! never be passed where a terminal id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create from a level-authored name
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            /// The raw name
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Source label used for logging and prompt ownership (`kind:name`)
            pub fn source_label(&self) -> String {
                format!("{}:{}", $prefix, self.0)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self::new(name)
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(name)
            }
        }
    };
}

define_id!(
    /// Identifier of a hackable terminal
    TerminalId,
    "terminal"
);

define_id!(
    /// Identifier of a door
    DoorId,
    "door"
);

define_id!(
    /// Identifier of a supply crate
    CrateId,
    "crate"
);

define_id!(
    /// Identifier of a zone (trigger region used for briefings)
    ZoneId,
    "zone"
);
