use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Order in which consumers want a flattened artifact listing. Independent of
/// the order in which artifact sets were collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Graph order as produced by the traversal.
    #[default]
    Default,
    /// Consumers listed before the components they depend on.
    ConsumerFirst,
}

/// Settings captured by an [`ArtifactCollector`](crate::ArtifactCollector)
/// for the lifetime of one resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CollectorConfig {
    /// When false, no collected artifact set may trigger a build.
    pub build_project_dependencies: bool,
    pub sort_order: SortOrder,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            build_project_dependencies: true,
            sort_order: SortOrder::Default,
        }
    }
}

impl CollectorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CollectorConfig::from_json("{}").unwrap();
        assert_eq!(config, CollectorConfig::default());
        assert!(config.build_project_dependencies);
        assert_eq!(config.sort_order, SortOrder::Default);
    }

    #[test]
    fn test_parse() {
        let config = CollectorConfig::from_json(
            r#"{"build-project-dependencies":false,"sort-order":"consumer-first"}"#,
        )
        .unwrap();

        assert!(!config.build_project_dependencies);
        assert_eq!(config.sort_order, SortOrder::ConsumerFirst);
    }

    #[test]
    fn test_unknown_sort_order() {
        let err = CollectorConfig::from_json(r#"{"sort-order":"random"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&SortOrder::ConsumerFirst).unwrap();
        assert_eq!(json, r#""consumer-first""#);
    }
}
