//! Configuration surface.
//!
//! Toggles for each input modality plus the role names a host uses to find
//! (or generate) the bar, handle and content elements. Nothing here changes
//! runtime behavior beyond enabling or disabling a path.

use crate::constants::{DEFAULT_CLASS_BAR, DEFAULT_CLASS_CONTENT, DEFAULT_CLASS_HANDLE};
use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for one [`crate::ScrollSync`] instance.
///
/// Missing JSON fields fall back to their defaults, unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollSettings {
    /// Scroll with single-point touch drags
    pub touch_enable: bool,
    /// Scroll with the mouse wheel
    pub wheel_enable: bool,
    /// Scroll by dragging the bar handle
    pub bar_enable: bool,
    /// Ask the host to generate the bar when none exists
    pub auto_generate: bool,
    /// Role name of the bar (track) element
    pub class_bar: String,
    /// Role name of the handle element
    pub class_handle: String,
    /// Role name of the content element
    pub class_content: String,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            touch_enable: true,
            wheel_enable: true,
            bar_enable: true,
            auto_generate: false,
            class_bar: DEFAULT_CLASS_BAR.to_string(),
            class_handle: DEFAULT_CLASS_HANDLE.to_string(),
            class_content: DEFAULT_CLASS_CONTENT.to_string(),
        }
    }
}

/// Borrowed view of the structural role names, handed to the host when it is
/// asked to generate markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureRoles<'a> {
    pub bar: &'a str,
    pub handle: &'a str,
    pub content: &'a str,
}

impl ScrollSettings {
    /// Parse and validate settings from a JSON document.
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a JSON settings file.
    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> SettingsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every role name is non-empty and distinct.
    pub fn validate(&self) -> SettingsResult<()> {
        let roles = [
            ("bar", &self.class_bar),
            ("handle", &self.class_handle),
            ("content", &self.class_content),
        ];

        for (role, name) in roles {
            if name.trim().is_empty() {
                return Err(SettingsError::EmptyRoleName { role });
            }
        }

        for (i, (_, a)) in roles.iter().enumerate() {
            if roles[i + 1..].iter().any(|(_, b)| a == b) {
                return Err(SettingsError::DuplicateRoleName {
                    name: a.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn roles(&self) -> StructureRoles<'_> {
        StructureRoles {
            bar: &self.class_bar,
            handle: &self.class_handle,
            content: &self.class_content,
        }
    }

    /// Builder-style toggle for touch input.
    pub fn with_touch(mut self, enabled: bool) -> Self {
        self.touch_enable = enabled;
        self
    }

    /// Builder-style toggle for wheel input.
    pub fn with_wheel(mut self, enabled: bool) -> Self {
        self.wheel_enable = enabled;
        self
    }

    /// Builder-style toggle for the draggable bar.
    pub fn with_bar(mut self, enabled: bool) -> Self {
        self.bar_enable = enabled;
        self
    }

    /// Builder-style toggle for bar generation.
    pub fn with_auto_generate(mut self, enabled: bool) -> Self {
        self.auto_generate = enabled;
        self
    }
}
