//! Consolidation settings
//!
//! Loaded from TOML. Every key is optional:
//!
//! ```toml
//! max_common_prefix = 43
//! field_introduction = "watermark"   # or "presence"
//! glossary_placeholder = "?"
//!
//! [catalog]
//! versions = [
//!   { label = "FIX.4.4", suffix = "4.4", max_tag = 956 },
//!   { label = "FIX.5.0", suffix = "5.0", max_tag = 1139 },
//! ]
//! diff_aliases = []
//! ```

use crate::catalog::{VersionCatalog, VersionInfo};
use crate::errors::{DictError, Result};
use crate::normalize::DEFAULT_MAX_COMMON_PREFIX;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a field's FromVersion is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldIntroduction {
    /// First version whose max-tag watermark covers the tag
    #[default]
    Watermark,
    /// First version whose field table holds the tag, else the watermark
    Presence,
}

/// Redirect one version's content to another's when diffing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffAlias {
    pub from: String,
    pub to: String,
}

/// A catalog written out in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub versions: Vec<VersionInfo>,
    #[serde(default)]
    pub diff_aliases: Vec<DiffAlias>,
}

impl CatalogConfig {
    /// Resolve alias labels and validate into a [`VersionCatalog`]
    pub fn build(&self) -> Result<VersionCatalog> {
        let lookup = |label: &str| {
            self.versions
                .iter()
                .position(|v| v.label.eq_ignore_ascii_case(label))
                .map(crate::catalog::VersionOrdinal::new)
                .ok_or_else(|| DictError::InvalidCatalog {
                    reason: format!("diff alias names unknown version {}", label),
                })
        };

        let mut aliases = BTreeMap::new();
        for alias in &self.diff_aliases {
            let from = lookup(&alias.from)?;
            let to = lookup(&alias.to)?;
            if aliases.insert(from, to).is_some() {
                return Err(DictError::InvalidCatalog {
                    reason: format!("version {} is aliased twice", alias.from),
                });
            }
        }

        VersionCatalog::new(self.versions.clone(), aliases)
    }
}

/// Settings for one consolidation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsolidationConfig {
    pub max_common_prefix: usize,
    pub field_introduction: FieldIntroduction,
    /// Leading character marking a glossary value name as a placeholder
    pub glossary_placeholder: char,
    pub catalog: Option<CatalogConfig>,
}

impl Default for ConsolidationConfig {
    fn default() -> Self {
        Self {
            max_common_prefix: DEFAULT_MAX_COMMON_PREFIX,
            field_introduction: FieldIntroduction::default(),
            glossary_placeholder: '?',
            catalog: None,
        }
    }
}

impl ConsolidationConfig {
    /// Parse and validate TOML text
    ///
    /// # Errors
    ///
    /// `InvalidConfig` on a parse failure or a zero `max_common_prefix`;
    /// `InvalidCatalog` if a custom catalog does not validate.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: ConsolidationConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_common_prefix == 0 {
            return Err(DictError::InvalidConfig {
                reason: "max_common_prefix must be at least 1".to_string(),
            });
        }
        if let Some(catalog) = &self.catalog {
            catalog.build()?;
        }
        Ok(())
    }

    /// The configured catalog, or the standard FIX catalog
    pub fn catalog(&self) -> Result<VersionCatalog> {
        match &self.catalog {
            Some(catalog) => catalog.build(),
            None => Ok(VersionCatalog::fix_standard()),
        }
    }
}
