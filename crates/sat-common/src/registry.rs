//! Satellite registry loading.
//!
//! The registry is a YAML file listing the satellites a deployment knows
//! about. Angles are written in degrees and converted to radians here:
//!
//! ```yaml
//! satellites:
//!   - id: goes16
//!     display_name: GOES-16
//!     longitude: -75.2
//!   - id: himawari8
//!     display_name: Himawari-8
//!     longitude: 140.7
//!     longitude_range: { start: 59.5, end: -138.0 }
//! ```
//!
//! Entries without a `longitude_range` are flagged so the visible range
//! resolver can fill them in once the image size is known.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::angle::Angle;
use crate::error::RegistryError;
use crate::range::Range;
use crate::satellite::{SatelliteDefinition, DEFAULT_SATELLITE_HEIGHT};

/// Root of the registry YAML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryFile {
    pub satellites: Vec<SatelliteConfig>,
}

/// One satellite entry as written in the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SatelliteConfig {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    /// Sub-satellite longitude, degrees east.
    pub longitude: f64,
    /// Height above the equatorial surface, metres.
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default)]
    pub latitude_range: Option<RangeConfig>,
    #[serde(default)]
    pub longitude_range: Option<RangeConfig>,
}

fn default_height() -> f64 {
    DEFAULT_SATELLITE_HEIGHT
}

/// A `{start, end}` pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeConfig {
    pub start: f64,
    pub end: f64,
}

impl From<RangeConfig> for Range {
    fn from(config: RangeConfig) -> Self {
        Range::from_degrees(config.start, config.end)
    }
}

impl SatelliteConfig {
    /// Convert to a validated definition.
    pub fn to_definition(&self) -> Result<SatelliteDefinition, RegistryError> {
        let mut definition =
            SatelliteDefinition::new(&self.id, Angle::from_degrees(self.longitude), self.height);

        if let Some(name) = &self.display_name {
            definition = definition.with_display_name(name);
        }
        if let Some(range) = self.latitude_range {
            definition = definition.with_latitude_range(range.into());
        }
        if let Some(range) = self.longitude_range {
            definition = definition.with_longitude_range(range.into());
        }

        definition.validate()?;
        Ok(definition)
    }
}

/// The set of satellites known to a deployment.
#[derive(Debug, Clone, Default)]
pub struct SatelliteRegistry {
    satellites: Vec<SatelliteDefinition>,
    unresolved: HashSet<String>,
}

impl SatelliteRegistry {
    /// Build a registry from definitions.
    ///
    /// `unresolved` names the satellites whose longitude range is still the
    /// placeholder footprint and should come from the visible range search.
    /// Ids that match no definition are ignored.
    pub fn from_definitions<I, S>(
        satellites: Vec<SatelliteDefinition>,
        unresolved: I,
    ) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        for satellite in &satellites {
            satellite.validate()?;
            if !seen.insert(satellite.id.clone()) {
                return Err(RegistryError::DuplicateId(satellite.id.clone()));
            }
        }

        let unresolved: HashSet<String> = unresolved
            .into_iter()
            .map(|id| id.into())
            .filter(|id| seen.contains(id))
            .collect();

        Ok(Self {
            satellites,
            unresolved,
        })
    }

    /// Parse a registry from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile = serde_yaml::from_str(yaml)?;

        let mut satellites = Vec::with_capacity(file.satellites.len());
        let mut unresolved = Vec::new();

        for config in &file.satellites {
            let definition = config.to_definition()?;
            if config.longitude_range.is_none() {
                unresolved.push(definition.id.clone());
            }

            debug!(
                satellite = %definition.id,
                longitude = %definition.longitude,
                range_configured = config.longitude_range.is_some(),
                "Loaded satellite definition"
            );
            satellites.push(definition);
        }

        Self::from_definitions(satellites, unresolved)
    }

    /// Load a registry from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)?;
        let registry = Self::from_yaml_str(&yaml)?;

        info!(
            path = %path.display(),
            count = registry.len(),
            unresolved = registry.unresolved.len(),
            "Loaded satellite registry"
        );

        Ok(registry)
    }

    pub fn satellites(&self) -> &[SatelliteDefinition] {
        &self.satellites
    }

    pub fn get(&self, id: &str) -> Option<&SatelliteDefinition> {
        self.satellites.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SatelliteDefinition> {
        self.satellites.iter()
    }

    pub fn len(&self) -> usize {
        self.satellites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.satellites.is_empty()
    }

    /// True if the entry had no configured longitude range.
    pub fn needs_visible_range(&self, id: &str) -> bool {
        self.unresolved.contains(id)
    }

    /// Replace a satellite's longitude range and mark it resolved.
    ///
    /// Returns false if no satellite has the given id.
    pub fn set_longitude_range(&mut self, id: &str, range: Range) -> bool {
        match self.satellites.iter_mut().find(|s| s.id == id) {
            Some(satellite) => {
                satellite.longitude_range = range;
                self.unresolved.remove(id);
                true
            }
            None => false,
        }
    }
}
