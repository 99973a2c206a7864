//! Configuration loading and management for Pet Roster
//!
//! Architecture: Anti-Corruption Layer - Configuration translates external YAML formats
//! - Raw YAML entries are converted to boxed domain pets
//! - The default roster is embedded here, not in the driver

use crate::domain::errors::{RosterError, RosterResult};
use crate::domain::pets::{Pet, PetKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const SUPPORTED_VERSIONS: [&str; 1] = ["1.0"];

/// Main configuration structure for Pet Roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Configuration format version
    pub version: String,
    /// Pets in the order they are driven
    #[serde(default)]
    pub pets: Vec<PetEntry>,
}

/// A single configured pet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetEntry {
    pub kind: PetKind,
    pub name: String,
}

impl PetEntry {
    pub fn new(kind: PetKind, name: impl Into<String>) -> Self {
        Self { kind, name: name.into() }
    }

    /// Construct the domain pet this entry describes
    pub fn build(&self) -> Box<dyn Pet> {
        self.kind.build(self.name.clone())
    }
}

impl RosterConfig {
    /// Load configuration from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let contents = fs::read_to_string(&path).map_err(|e| {
            RosterError::config(format!(
                "Failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            RosterError::config(format!(
                "Failed to parse config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        config.validate()?;
        tracing::debug!(
            "Loaded {} pet(s) from {}",
            config.pets.len(),
            path.as_ref().display()
        );
        Ok(config)
    }

    /// Load configuration from string content
    pub fn load_from_str(content: &str) -> RosterResult<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| RosterError::config(format!("Failed to parse config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Default roster: a dog named Fido followed by a cat named Jasper
    pub fn with_defaults() -> Self {
        Self {
            version: "1.0".to_string(),
            pets: vec![
                PetEntry::new(PetKind::Dog, "Fido"),
                PetEntry::new(PetKind::Cat, "Jasper"),
            ],
        }
    }

    /// Validate the configuration for consistency and correctness
    pub fn validate(&self) -> RosterResult<()> {
        if !SUPPORTED_VERSIONS.contains(&self.version.as_str()) {
            return Err(RosterError::config(format!(
                "Unsupported configuration version: {}. Supported versions: {}",
                self.version,
                SUPPORTED_VERSIONS.join(", ")
            )));
        }

        for (index, entry) in self.pets.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(RosterError::config(format!(
                    "Pet #{} ({}) has an empty name",
                    index + 1,
                    entry.kind
                )));
            }
        }

        Ok(())
    }

    /// Construct the configured pets in order
    pub fn build_pets(&self) -> Vec<Box<dyn Pet>> {
        self.pets.iter().map(PetEntry::build).collect()
    }

    /// Convert to YAML for serialization
    pub fn to_yaml(&self) -> RosterResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| RosterError::config(format!("Failed to serialize config: {e}")))
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Configuration builder for programmatic construction
pub struct ConfigBuilder {
    config: RosterConfig,
}

impl ConfigBuilder {
    /// Create a new builder with an empty roster
    pub fn new() -> Self {
        Self {
            config: RosterConfig { pets: Vec::new(), ..RosterConfig::default() },
        }
    }

    /// Append a pet to the roster
    pub fn add_pet(mut self, kind: PetKind, name: impl Into<String>) -> Self {
        self.config.pets.push(PetEntry::new(kind, name));
        self
    }

    /// Build the final configuration
    pub fn build(self) -> RosterResult<RosterConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
