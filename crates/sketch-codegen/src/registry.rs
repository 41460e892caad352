//! Hardware controller registry.
//!
//! Maps the name a source program uses for a hardware facility (`serial`,
//! `wifi`) to the Arduino object that implements it and the header the
//! sketch must include for it, if any.

use std::collections::HashMap;

/// A recognized hardware facility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Controller {
    /// Arduino object name, e.g. `Serial`.
    pub object: String,
    /// Header to include, e.g. `WiFi.h`. `None` for facilities built into the core.
    pub header: Option<String>,
}

/// Fixed table of recognized facilities, keyed case-sensitively.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControllerRegistry {
    controllers: HashMap<String, Controller>,
}

impl ControllerRegistry {
    /// A registry that recognizes nothing.
    pub fn empty() -> Self {
        Self {
            controllers: HashMap::new(),
        }
    }

    /// The facilities known to the ESP32 Arduino core.
    pub fn builtin() -> Self {
        Self::empty()
            .with_controller("serial", "Serial", None)
            .with_controller("wifi", "WiFi", Some("WiFi.h"))
    }

    /// Add or replace a facility.
    pub fn with_controller(mut self, key: &str, object: &str, header: Option<&str>) -> Self {
        self.controllers.insert(
            key.to_string(),
            Controller {
                object: object.to_string(),
                header: header.map(str::to_string),
            },
        );
        self
    }

    pub fn lookup(&self, key: &str) -> Option<&Controller> {
        self.controllers.get(key)
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}

impl Default for ControllerRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
