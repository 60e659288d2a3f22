//! Host configuration resolution.
//!
//! A host configuration document controls colors, spacing, fonts and action
//! behavior for one embedding host. This module parses such a document into a
//! fully typed [`HostConfig`].
//!
//! # Two-Tier Null Tolerance
//!
//! Resolution distinguishes two kinds of blocks:
//!
//! - **Base scales** (`fontSizes`, `fontWeights`, `imageSizes`, `colors`) are
//!   dereferenced unconditionally by every renderer. They must be present as
//!   top-level keys; a missing (or `null`) base scale fails resolution with
//!   [`ConfigError::MissingRequired`]. Individual values inside a present
//!   scale default to the standard scale, whether absent or `null`.
//! - **Style blocks** (`container`, `textBlock`, `actions`, ...) are optional.
//!   An absent (or `null`) block resolves to `None` and the style resolver
//!   supplies defaults when a renderer asks for it. A present block fills
//!   absent or `null` fields from its record defaults.
//!
//! Enumerated fields default to their documented values: `actionMode`
//! is `inlineEdgeToEdge`, `actionAlignment` is `left`, `actionsOrientation` is
//! `horizontal`, and text `size`/`color`/`weight` are `normal`/`dark`/`normal`.
//!
//! # Example
//!
//! ```rust
//! use cardwright::config::HostConfig;
//!
//! let config = HostConfig::from_json(r#"{
//!     "supportsInteractivity": false,
//!     "fontSizes": { "normal": 13 },
//!     "fontWeights": {},
//!     "imageSizes": {},
//!     "colors": {}
//! }"#).unwrap();
//!
//! assert!(!config.supports_interactivity);
//! assert_eq!(config.font_sizes.normal, 13);
//! assert_eq!(config.font_sizes.large, 17);
//! assert!(config.container.is_none());
//!
//! assert!(HostConfig::from_json("{}").is_err());
//! ```

mod types;

pub use types::{
    ActionsConfig, AdaptiveCardConfig, ColorDefinition, ColorsConfig, ColumnConfig,
    ColumnSetConfig, ContainerConfig, ContainerStyleDefinition, FactSetConfig,
    FactTextDefinition, FactTitleDefinition, FontSizes, FontWeights, HostConfig, ImageConfig,
    ImageSetConfig, ImageSizes, InputConfig, SeparationDefinition, ShowCardActionConfig,
    SpacingDefinition, TextBlockConfig, TextBlockSeparations,
};

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::error::{value_kind, ConfigError};

/// Top-level keys that must be present in every configuration document.
pub const REQUIRED_BLOCKS: &[&str] = &["fontSizes", "fontWeights", "imageSizes", "colors"];

static DEFAULT_HOST_CONFIG: Lazy<HostConfig> = Lazy::new(HostConfig::default);

/// Returns the shared built-in configuration.
pub fn default_host_config() -> &'static HostConfig {
    &DEFAULT_HOST_CONFIG
}

/// Resolves an optional serialized JSON document.
///
/// `None` yields the built-in default configuration.
///
/// # Errors
///
/// See [`HostConfig::from_json`].
pub fn resolve_host_config(document: Option<&str>) -> Result<HostConfig, ConfigError> {
    match document {
        Some(text) => HostConfig::from_json(text),
        None => Ok(default_host_config().clone()),
    }
}

impl HostConfig {
    /// Parses a JSON configuration document.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Json`] if the text is not valid JSON or a field has
    ///   the wrong type (including unknown enum values and negative spacing)
    /// - [`ConfigError::NotAnObject`] if the root is not an object
    /// - [`ConfigError::MissingRequired`] if a base scale is absent
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Parses a YAML configuration document using the same schema as JSON.
    ///
    /// # Errors
    ///
    /// As [`HostConfig::from_json`], with [`ConfigError::Yaml`] for YAML
    /// syntax errors.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_yaml::from_str(text)?;
        Self::from_value(value)
    }

    /// Resolves an already parsed document.
    ///
    /// # Errors
    ///
    /// As [`HostConfig::from_json`].
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(ConfigError::NotAnObject {
                    found: value_kind(&other),
                })
            }
        };

        for key in REQUIRED_BLOCKS {
            if map.get(*key).map_or(true, Value::is_null) {
                return Err(ConfigError::MissingRequired { key: *key });
            }
        }

        let config: HostConfig = serde_json::from_value(Value::Object(map))?;
        tracing::debug!(
            interactive = config.supports_interactivity,
            "resolved host config"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{ActionAlignment, Orientation, ShowCardActionMode};
    use proptest::prelude::*;
    use serde_json::json;

    fn base_document() -> Value {
        json!({
            "fontSizes": { "small": 9, "normal": 12, "medium": 15, "large": 18, "extraLarge": 24 },
            "fontWeights": { "lighter": 300, "normal": 400, "bolder": 700 },
            "imageSizes": { "small": 32, "medium": 64, "large": 128 },
            "colors": {
                "dark": { "normal": "#000000", "subtle": "#66000000" }
            }
        })
    }

    #[test]
    fn test_minimal_document_resolves() {
        let config = HostConfig::from_value(base_document()).unwrap();
        assert!(config.supports_interactivity);
        assert_eq!(config.font_sizes.extra_large, 24);
        assert_eq!(config.font_weights.bolder, 700);
        assert_eq!(config.image_sizes.large, 128);
        assert_eq!(config.colors.dark.normal, "#000000");
        assert_eq!(config.colors.accent, ColorsConfig::default().accent);
    }

    #[test]
    fn test_optional_blocks_resolve_to_none() {
        let config = HostConfig::from_value(base_document()).unwrap();
        assert_eq!(config.strong_separation, None);
        assert_eq!(config.actions, None);
        assert_eq!(config.adaptive_card, None);
        assert_eq!(config.container, None);
        assert_eq!(config.text_block, None);
        assert_eq!(config.image, None);
        assert_eq!(config.image_set, None);
        assert_eq!(config.fact_set, None);
        assert_eq!(config.column, None);
        assert_eq!(config.column_set, None);
        assert_eq!(config.input, None);
    }

    #[test]
    fn test_null_optional_block_is_none() {
        let mut doc = base_document();
        doc["container"] = Value::Null;
        let config = HostConfig::from_value(doc).unwrap();
        assert_eq!(config.container, None);
    }

    #[test]
    fn test_null_fields_take_defaults() {
        let mut doc = base_document();
        doc["actions"] = json!({ "maxActions": null, "actionAlignment": null });
        doc["supportsInteractivity"] = Value::Null;
        let config = HostConfig::from_value(doc).unwrap();
        assert!(config.supports_interactivity);
        let actions = config.actions.unwrap();
        assert_eq!(actions.max_actions, 5);
        assert_eq!(actions.action_alignment, ActionAlignment::Left);
        assert_eq!(actions.button_spacing, 20);
    }

    #[test]
    fn test_null_fields_in_yaml_take_defaults() {
        let yaml = r##"
fontSizes: { normal: ~, large: 19 }
fontWeights: {}
imageSizes: {}
colors: {}
factSet:
  spacing: ~
  title: { weight: ~, maxWidth: 90 }
"##;
        let config = HostConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.font_sizes.normal, 12);
        assert_eq!(config.font_sizes.large, 19);
        let fact_set = config.fact_set.unwrap();
        assert_eq!(fact_set.spacing, 10);
        let title = fact_set.title.unwrap();
        assert_eq!(title.text.weight, crate::enums::TextWeight::Normal);
        assert_eq!(title.max_width, Some(90));
    }

    #[test]
    fn test_missing_font_sizes_fails() {
        let mut doc = base_document();
        doc.as_object_mut().unwrap().remove("fontSizes");
        let err = HostConfig::from_value(doc).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingRequired { key: "fontSizes" }
        ));
    }

    #[test]
    fn test_each_base_scale_is_required() {
        for key in REQUIRED_BLOCKS {
            let mut doc = base_document();
            doc[*key] = Value::Null;
            match HostConfig::from_value(doc) {
                Err(ConfigError::MissingRequired { key: missing }) => assert_eq!(missing, *key),
                other => panic!("expected MissingRequired for {}, got {:?}", key, other),
            }
        }
    }

    #[test]
    fn test_non_object_document_fails() {
        assert!(matches!(
            HostConfig::from_json("[1, 2]"),
            Err(ConfigError::NotAnObject { found: "array" })
        ));
        assert!(matches!(
            HostConfig::from_json("null"),
            Err(ConfigError::NotAnObject { found: "null" })
        ));
    }

    #[test]
    fn test_malformed_json_fails() {
        assert!(matches!(
            HostConfig::from_json("{ fontSizes"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_unknown_enum_value_fails() {
        let mut doc = base_document();
        doc["actions"] = json!({ "actionAlignment": "diagonal" });
        assert!(matches!(
            HostConfig::from_value(doc),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_action_enum_defaults() {
        let mut doc = base_document();
        doc["actions"] = json!({ "showCard": {} });
        let config = HostConfig::from_value(doc).unwrap();
        let actions = config.actions.unwrap();
        assert_eq!(actions.actions_orientation, Orientation::Horizontal);
        assert_eq!(actions.action_alignment, ActionAlignment::Left);
        assert_eq!(
            actions.show_card.unwrap().action_mode,
            ShowCardActionMode::InlineEdgeToEdge
        );
    }

    #[test]
    fn test_text_block_without_separations() {
        let mut doc = base_document();
        doc["textBlock"] = json!({ "color": "accent" });
        let config = HostConfig::from_value(doc).unwrap();
        let text_block = config.text_block.unwrap();
        assert_eq!(text_block.color, crate::enums::TextColor::Accent);
        assert_eq!(text_block.separations, TextBlockSeparations::default());
    }

    #[test]
    fn test_yaml_document() {
        let yaml = r##"
supportsInteractivity: false
fontFamily: Helvetica
fontSizes: { normal: 14 }
fontWeights: {}
imageSizes: {}
colors:
  accent:
    normal: "#0063B1"
container:
  emphasis:
    backgroundColor: "#F0F0F0"
"##;
        let config = HostConfig::from_yaml(yaml).unwrap();
        assert!(!config.supports_interactivity);
        assert_eq!(config.font_family.as_deref(), Some("Helvetica"));
        assert_eq!(config.colors.accent.normal, "#0063B1");
        let emphasis = config.container.unwrap().emphasis.unwrap();
        assert_eq!(emphasis.background_color.as_deref(), Some("#F0F0F0"));
        assert_eq!(emphasis.padding, None);
    }

    #[test]
    fn test_resolve_without_document_uses_default() {
        let config = resolve_host_config(None).unwrap();
        assert_eq!(&config, default_host_config());
        assert!(config.container.is_some());
    }

    #[test]
    fn test_default_round_trips_through_json() {
        let text = serde_json::to_string(&HostConfig::default()).unwrap();
        assert_eq!(HostConfig::from_json(&text).unwrap(), HostConfig::default());
    }

    fn optional_blocks() -> Vec<(&'static str, Value)> {
        vec![
            ("strongSeparation", json!({ "spacing": 30, "lineThickness": 2 })),
            ("actions", json!({ "maxActions": 3, "buttonSpacing": 8 })),
            ("adaptiveCard", json!({ "backgroundColor": "#FFFFFF" })),
            ("container", json!({ "emphasis": { "backgroundColor": "#EEEEEE" } })),
            ("textBlock", json!({ "separations": { "large": { "spacing": 30 } } })),
            ("image", json!({ "size": "small" })),
            ("imageSet", json!({ "imageSize": "large" })),
            ("factSet", json!({ "title": { "maxWidth": 100 }, "spacing": 4 })),
            ("column", json!({ "separation": { "spacing": 10 } })),
            ("columnSet", json!({})),
            ("input", json!({ "separation": { "spacing": 12 } })),
        ]
    }

    fn document_with_blocks(mask: u16) -> Value {
        let mut doc = base_document();
        for (i, (key, block)) in optional_blocks().into_iter().enumerate() {
            if mask & (1 << i) != 0 {
                doc[key] = block;
            }
        }
        doc
    }

    proptest! {
        #[test]
        fn prop_omitted_blocks_are_none_and_scales_present(mask in any::<u16>()) {
            let config = HostConfig::from_value(document_with_blocks(mask)).unwrap();
            let present = [
                config.strong_separation.is_some(),
                config.actions.is_some(),
                config.adaptive_card.is_some(),
                config.container.is_some(),
                config.text_block.is_some(),
                config.image.is_some(),
                config.image_set.is_some(),
                config.fact_set.is_some(),
                config.column.is_some(),
                config.column_set.is_some(),
                config.input.is_some(),
            ];
            for (i, is_present) in present.iter().enumerate() {
                prop_assert_eq!(*is_present, mask & (1 << i) != 0);
            }
            prop_assert_eq!(config.font_sizes.normal, 12);
            prop_assert_eq!(config.font_weights.normal, 400);
            prop_assert_eq!(config.image_sizes.medium, 64);
        }

        #[test]
        fn prop_resolution_is_idempotent(mask in any::<u16>(), interactive in any::<bool>()) {
            let mut doc = document_with_blocks(mask);
            doc["supportsInteractivity"] = json!(interactive);
            let text = doc.to_string();

            let first = HostConfig::from_json(&text).unwrap();
            let second = HostConfig::from_json(&text).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
