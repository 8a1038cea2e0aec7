//! Taxonomy configuration loaded from TOML.
//!
//! A `TaxonomyConfig` is the serializable form of a taxonomy; it funnels
//! through [`TaxonomyBuilder`] so file-loaded and programmatically-built
//! taxonomies obey the same construction rules.
//!
//! ```toml
//! case_sensitive = false
//! keywords = ["vitamin c", "fiber"]
//!
//! [categories]
//! fruit = ["citrus", "berry"]
//!
//! [synonyms]
//! "ascorbic acid" = "vitamin c"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::taxonomy::{Taxonomy, TaxonomyBuilder};
use crate::types::collections::BTreeMap;

/// Serializable taxonomy definition.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// Whether lookups distinguish case. Defaults to false.
    pub case_sensitive: bool,
    /// Category name -> list of detail names.
    pub categories: BTreeMap<String, Vec<String>>,
    /// The flat keyword dictionary.
    pub keywords: Vec<String>,
    /// Alias -> canonical form.
    pub synonyms: BTreeMap<String, String>,
}

impl TaxonomyConfig {
    /// Load and validate a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            let path = path.display().to_string();
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound { path }
            } else {
                ConfigError::ReadFailed {
                    path,
                    message: e.to_string(),
                }
            }
        })?;

        let config: TaxonomyConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Parse a config from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: TaxonomyConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from a JSON string, for callers whose taxonomies
    /// arrive over the wire rather than from a file.
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: TaxonomyConfig =
            serde_json::from_str(json_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for category in self.categories.keys() {
            if category.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "categories".to_string(),
                    message: "category name must not be empty".to_string(),
                });
            }
        }
        for keyword in &self.keywords {
            if keyword.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "keywords".to_string(),
                    message: "keyword must not be empty".to_string(),
                });
            }
        }
        for (alias, canonical) in &self.synonyms {
            if alias == canonical {
                return Err(ConfigError::ValidationFailed {
                    field: "synonyms".to_string(),
                    message: format!("{alias:?} aliases itself"),
                });
            }
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Build the immutable taxonomy this config describes.
    pub fn build_taxonomy(&self) -> Taxonomy {
        let mut builder = TaxonomyBuilder::new();
        builder = if self.case_sensitive {
            builder.case_sensitive()
        } else {
            builder.ignore_case()
        };
        for (category, details) in &self.categories {
            builder = builder.add_category(category);
            builder = builder.add_details(category, details.iter().map(String::as_str));
        }
        builder = builder.add_keywords(self.keywords.iter().map(String::as_str));
        for (alias, canonical) in &self.synonyms {
            builder = builder.add_synonym(canonical, alias);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_case_insensitive_and_empty() {
        let config = TaxonomyConfig::default();
        assert!(!config.case_sensitive);
        assert!(config.categories.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn self_alias_fails_validation() {
        let toml = r#"
            [synonyms]
            orange = "orange"
        "#;
        let err = TaxonomyConfig::from_toml(toml).unwrap_err();
        assert!(matches!(
            err,
            crate::errors::ConfigError::ValidationFailed { .. }
        ));
    }
}
