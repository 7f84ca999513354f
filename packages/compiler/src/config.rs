//! Mapper Configuration
//!
//! Global configuration consulted during member mapping resolution. Loaded
//! from a JSON file or constructed directly; all fields have defaults so a
//! missing file section never fails deserialization.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::descriptors::source_value::NullFallback;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapperConfig {
    /// Allow assigning a possibly-null source value through to a
    /// non-nullable target member via a null-conditional access chain.
    pub allow_null_property_assignment: bool,
    /// Substitute a throw for the type's default value when a null source
    /// meets a non-nullable mapping in an expression context.
    pub throw_on_property_mapping_null_mismatch: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        MapperConfig {
            allow_null_property_assignment: false,
            throw_on_property_mapping_null_mismatch: false,
        }
    }
}

impl MapperConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: MapperConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// The fallback policy applied when a null source value reaches a
    /// mapping whose source type is not nullable.
    pub fn null_fallback(&self) -> NullFallback {
        if self.throw_on_property_mapping_null_mismatch {
            NullFallback::ThrowOnNull
        } else {
            NullFallback::Default
        }
    }
}
