//! Export configuration from a TOML file
//!
//! The configuration only affects presentation details the packager adds
//! around the document (heading styles); it never changes how the payload
//! is normalized.

use crate::unified_document::HeadingLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Export configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Heading style font sizes
    pub headings: HeadingSizes,
}

/// Font sizes of the built-in heading styles, in points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingSizes {
    pub heading1_pt: u32,
    pub heading2_pt: u32,
    pub heading3_pt: u32,
    pub heading4_pt: u32,
}

impl Default for HeadingSizes {
    fn default() -> Self {
        Self {
            heading1_pt: 16,
            heading2_pt: 14,
            heading3_pt: 13,
            heading4_pt: 12,
        }
    }
}

impl HeadingSizes {
    /// Font size in points for a heading level
    pub fn size_pt(&self, level: HeadingLevel) -> u32 {
        match level {
            HeadingLevel::Heading1 => self.heading1_pt,
            HeadingLevel::Heading2 => self.heading2_pt,
            HeadingLevel::Heading3 => self.heading3_pt,
            HeadingLevel::Heading4 => self.heading4_pt,
        }
    }
}

impl ExportConfig {
    /// Load configuration from a TOML file
    ///
    /// # Parameters
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(ExportConfig)` - Successfully loaded configuration
    /// * `Err(ExportConfigError)` - Error reading or parsing the configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ExportConfigError> {
        let content = fs::read_to_string(&path).map_err(ExportConfigError::IoError)?;

        let config: ExportConfig =
            toml::from_str(&content).map_err(ExportConfigError::ParseError)?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    ///
    /// # Parameters
    /// * `path` - Path where the configuration file will be written
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved configuration
    /// * `Err(ExportConfigError)` - Error serializing or writing the configuration file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportConfigError> {
        let content = toml::to_string_pretty(self).map_err(ExportConfigError::SerializeError)?;

        fs::write(&path, content).map_err(ExportConfigError::IoError)?;

        Ok(())
    }
}

/// Errors that can occur when loading or saving export configuration
#[derive(Debug)]
#[allow(clippy::enum_variant_names)]
pub enum ExportConfigError {
    /// IO error when reading or writing file
    IoError(std::io::Error),

    /// Error parsing TOML
    ParseError(toml::de::Error),

    /// Error serializing to TOML
    SerializeError(toml::ser::Error),
}

impl std::fmt::Display for ExportConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ExportConfigError::ParseError(e) => write!(f, "TOML parse error: {}", e),
            ExportConfigError::SerializeError(e) => write!(f, "TOML serialize error: {}", e),
        }
    }
}

impl std::error::Error for ExportConfigError {}
