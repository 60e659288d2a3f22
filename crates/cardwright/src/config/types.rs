//! Typed host configuration records.
//!
//! Each record's `Default` is what a present-but-sparse document block
//! resolves to. [`HostConfig::default`] is the complete built-in
//! configuration used when no document is supplied.
//!
//! An explicit `null` for a defaulted field is read as if the field were
//! absent.

use serde::{Deserialize, Deserializer, Serialize};

use crate::enums::{
    ActionAlignment, ImageSize, Orientation, ShowCardActionMode, TextColor, TextSize, TextWeight,
};

/// Reads `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Defines readers that map `null` to a field's record default.
macro_rules! null_as {
    ($($name:ident: $ty:ty = $default:expr;)+) => {
        $(
            fn $name<'de, D>(deserializer: D) -> Result<$ty, D::Error>
            where
                D: Deserializer<'de>,
            {
                Ok(Option::<$ty>::deserialize(deserializer)?.unwrap_or_else(|| $default))
            }
        )+
    };
}

null_as! {
    null_as_small_font: u32 = FontSizes::default().small;
    null_as_normal_font: u32 = FontSizes::default().normal;
    null_as_medium_font: u32 = FontSizes::default().medium;
    null_as_large_font: u32 = FontSizes::default().large;
    null_as_extra_large_font: u32 = FontSizes::default().extra_large;
    null_as_lighter_weight: u32 = FontWeights::default().lighter;
    null_as_normal_weight: u32 = FontWeights::default().normal;
    null_as_bolder_weight: u32 = FontWeights::default().bolder;
    null_as_small_image: u32 = ImageSizes::default().small;
    null_as_medium_image: u32 = ImageSizes::default().medium;
    null_as_large_image: u32 = ImageSizes::default().large;
    null_as_image_set_size: ImageSize = ImageSetConfig::default().image_size;
    null_as_fact_spacing: u32 = FactSetConfig::default().spacing;
    null_as_inline_top_margin: u32 = ShowCardActionConfig::default().inline_top_margin;
    null_as_max_actions: u32 = ActionsConfig::default().max_actions;
    null_as_button_spacing: u32 = ActionsConfig::default().button_spacing;
    null_as_supports_interactivity: bool = default_supports_interactivity();
}

/// Four-sided spacing in device-independent pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacingDefinition {
    #[serde(deserialize_with = "null_as_default")]
    pub top: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub right: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub bottom: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub left: u32,
}

impl SpacingDefinition {
    /// Same spacing on every side.
    pub fn uniform(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// Gap (and optional rule line) placed between two sibling elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeparationDefinition {
    #[serde(deserialize_with = "null_as_default")]
    pub spacing: u32,
    pub line_thickness: Option<u32>,
    pub line_color: Option<String>,
}

impl SeparationDefinition {
    pub fn spacing(spacing: u32) -> Self {
        Self {
            spacing,
            ..Self::default()
        }
    }
}

/// Normal and subtle variants of one semantic color role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorDefinition {
    pub normal: String,
    pub subtle: String,
}

impl ColorDefinition {
    pub fn new(normal: impl Into<String>, subtle: impl Into<String>) -> Self {
        Self {
            normal: normal.into(),
            subtle: subtle.into(),
        }
    }
}

/// Color pairs for every semantic role.
///
/// Roles (and single variants of a role) missing from the document fall back
/// to the built-in palette for that role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawColorsConfig")]
pub struct ColorsConfig {
    pub dark: ColorDefinition,
    pub light: ColorDefinition,
    pub accent: ColorDefinition,
    pub good: ColorDefinition,
    pub warning: ColorDefinition,
    pub attention: ColorDefinition,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            dark: ColorDefinition::new("#333333", "#EE333333"),
            light: ColorDefinition::new("#FFFFFF", "#88FFFFFF"),
            accent: ColorDefinition::new("#2E89FC", "#882E89FC"),
            good: ColorDefinition::new("#54A254", "#DD54A254"),
            warning: ColorDefinition::new("#E69500", "#DDE69500"),
            attention: ColorDefinition::new("#CC3300", "#DDCC3300"),
        }
    }
}

#[derive(Deserialize)]
struct RawColorDefinition {
    normal: Option<String>,
    subtle: Option<String>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct RawColorsConfig {
    dark: Option<RawColorDefinition>,
    light: Option<RawColorDefinition>,
    accent: Option<RawColorDefinition>,
    good: Option<RawColorDefinition>,
    warning: Option<RawColorDefinition>,
    attention: Option<RawColorDefinition>,
}

fn fill_color(raw: Option<RawColorDefinition>, fallback: ColorDefinition) -> ColorDefinition {
    match raw {
        Some(raw) => ColorDefinition {
            normal: raw.normal.unwrap_or(fallback.normal),
            subtle: raw.subtle.unwrap_or(fallback.subtle),
        },
        None => fallback,
    }
}

impl From<RawColorsConfig> for ColorsConfig {
    fn from(raw: RawColorsConfig) -> Self {
        let defaults = ColorsConfig::default();
        Self {
            dark: fill_color(raw.dark, defaults.dark),
            light: fill_color(raw.light, defaults.light),
            accent: fill_color(raw.accent, defaults.accent),
            good: fill_color(raw.good, defaults.good),
            warning: fill_color(raw.warning, defaults.warning),
            attention: fill_color(raw.attention, defaults.attention),
        }
    }
}

/// Pixel sizes for each [`TextSize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontSizes {
    #[serde(deserialize_with = "null_as_small_font")]
    pub small: u32,
    #[serde(deserialize_with = "null_as_normal_font")]
    pub normal: u32,
    #[serde(deserialize_with = "null_as_medium_font")]
    pub medium: u32,
    #[serde(deserialize_with = "null_as_large_font")]
    pub large: u32,
    #[serde(deserialize_with = "null_as_extra_large_font")]
    pub extra_large: u32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            small: 10,
            normal: 12,
            medium: 14,
            large: 17,
            extra_large: 20,
        }
    }
}

/// Numeric weights for each [`TextWeight`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontWeights {
    #[serde(deserialize_with = "null_as_lighter_weight")]
    pub lighter: u32,
    #[serde(deserialize_with = "null_as_normal_weight")]
    pub normal: u32,
    #[serde(deserialize_with = "null_as_bolder_weight")]
    pub bolder: u32,
}

impl Default for FontWeights {
    fn default() -> Self {
        Self {
            lighter: 200,
            normal: 400,
            bolder: 600,
        }
    }
}

/// Pixel widths for the fixed [`ImageSize`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageSizes {
    #[serde(deserialize_with = "null_as_small_image")]
    pub small: u32,
    #[serde(deserialize_with = "null_as_medium_image")]
    pub medium: u32,
    #[serde(deserialize_with = "null_as_large_image")]
    pub large: u32,
}

impl Default for ImageSizes {
    fn default() -> Self {
        Self {
            small: 40,
            medium: 80,
            large: 160,
        }
    }
}

/// Outer card surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdaptiveCardConfig {
    pub background_color: Option<String>,
    pub padding: Option<SpacingDefinition>,
}

/// Separation bands for text blocks, one per text size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextBlockSeparations {
    pub small: Option<SeparationDefinition>,
    pub normal: Option<SeparationDefinition>,
    pub medium: Option<SeparationDefinition>,
    pub large: Option<SeparationDefinition>,
    pub extra_large: Option<SeparationDefinition>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextBlockConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub color: TextColor,
    #[serde(deserialize_with = "null_as_default")]
    pub separations: TextBlockSeparations,
}

/// Visual treatment of one container style. Every field is independently
/// optional; the style resolver fills gaps by inheritance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerStyleDefinition {
    pub background_color: Option<String>,
    pub padding: Option<SpacingDefinition>,
    pub border_color: Option<String>,
    pub border_thickness: Option<SpacingDefinition>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerConfig {
    pub separation: Option<SeparationDefinition>,
    pub normal: Option<ContainerStyleDefinition>,
    pub emphasis: Option<ContainerStyleDefinition>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageConfig {
    pub separation: Option<SeparationDefinition>,
    #[serde(deserialize_with = "null_as_default")]
    pub size: ImageSize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageSetConfig {
    pub separation: Option<SeparationDefinition>,
    #[serde(deserialize_with = "null_as_image_set_size")]
    pub image_size: ImageSize,
}

impl Default for ImageSetConfig {
    fn default() -> Self {
        Self {
            separation: None,
            image_size: ImageSize::Medium,
        }
    }
}

/// Text treatment of fact values (and the base of fact titles).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FactTextDefinition {
    #[serde(deserialize_with = "null_as_default")]
    pub size: TextSize,
    #[serde(deserialize_with = "null_as_default")]
    pub color: TextColor,
    #[serde(deserialize_with = "null_as_default")]
    pub is_subtle: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub weight: TextWeight,
    #[serde(deserialize_with = "null_as_default")]
    pub wrap: bool,
}

/// Fact title text: the fact text fields plus a maximum column width.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactTitleDefinition {
    #[serde(flatten)]
    pub text: FactTextDefinition,
    #[serde(default)]
    pub max_width: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FactSetConfig {
    pub separation: Option<SeparationDefinition>,
    pub title: Option<FactTitleDefinition>,
    pub value: Option<FactTextDefinition>,
    #[serde(deserialize_with = "null_as_fact_spacing")]
    pub spacing: u32,
}

impl Default for FactSetConfig {
    fn default() -> Self {
        Self {
            separation: None,
            title: None,
            value: None,
            spacing: 10,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnSetConfig {
    pub separation: Option<SeparationDefinition>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnConfig {
    pub separation: Option<SeparationDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShowCardActionConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub action_mode: ShowCardActionMode,
    #[serde(deserialize_with = "null_as_inline_top_margin")]
    pub inline_top_margin: u32,
    pub background_color: Option<String>,
    pub padding: Option<SpacingDefinition>,
}

impl Default for ShowCardActionConfig {
    fn default() -> Self {
        Self {
            action_mode: ShowCardActionMode::default(),
            inline_top_margin: 16,
            background_color: None,
            padding: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionsConfig {
    #[serde(deserialize_with = "null_as_max_actions")]
    pub max_actions: u32,
    pub separation: Option<SeparationDefinition>,
    #[serde(deserialize_with = "null_as_button_spacing")]
    pub button_spacing: u32,
    pub show_card: Option<ShowCardActionConfig>,
    #[serde(deserialize_with = "null_as_default")]
    pub actions_orientation: Orientation,
    #[serde(deserialize_with = "null_as_default")]
    pub action_alignment: ActionAlignment,
}

impl Default for ActionsConfig {
    fn default() -> Self {
        Self {
            max_actions: 5,
            separation: None,
            button_spacing: 20,
            show_card: None,
            actions_orientation: Orientation::default(),
            action_alignment: ActionAlignment::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputConfig {
    pub separation: Option<SeparationDefinition>,
}

fn default_supports_interactivity() -> bool {
    true
}

/// Fully resolved host configuration.
///
/// The base scales (`font_sizes`, `font_weights`, `image_sizes`, `colors`)
/// are always present. Optional style blocks are `None` when the document
/// omits them; [`crate::style::StyleResolver`] supplies defaults for those at
/// consumption time.
///
/// A resolved `HostConfig` is immutable and may be shared across any number
/// of render scopes (wrap it in an `Arc`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostConfig {
    #[serde(
        default = "default_supports_interactivity",
        deserialize_with = "null_as_supports_interactivity"
    )]
    pub supports_interactivity: bool,
    #[serde(default)]
    pub font_family: Option<String>,
    pub font_sizes: FontSizes,
    pub font_weights: FontWeights,
    pub image_sizes: ImageSizes,
    pub colors: ColorsConfig,
    #[serde(default)]
    pub strong_separation: Option<SeparationDefinition>,
    #[serde(default)]
    pub actions: Option<ActionsConfig>,
    #[serde(default)]
    pub adaptive_card: Option<AdaptiveCardConfig>,
    #[serde(default)]
    pub container: Option<ContainerConfig>,
    #[serde(default)]
    pub text_block: Option<TextBlockConfig>,
    #[serde(default)]
    pub image: Option<ImageConfig>,
    #[serde(default)]
    pub image_set: Option<ImageSetConfig>,
    #[serde(default)]
    pub fact_set: Option<FactSetConfig>,
    #[serde(default)]
    pub column: Option<ColumnConfig>,
    #[serde(default)]
    pub column_set: Option<ColumnSetConfig>,
    #[serde(default)]
    pub input: Option<InputConfig>,
}

impl Default for HostConfig {
    fn default() -> Self {
        let separation = Some(SeparationDefinition::spacing(20));
        let fact_text = FactTextDefinition {
            wrap: true,
            ..FactTextDefinition::default()
        };

        Self {
            supports_interactivity: true,
            font_family: Some("Segoe UI".to_string()),
            font_sizes: FontSizes::default(),
            font_weights: FontWeights::default(),
            image_sizes: ImageSizes::default(),
            colors: ColorsConfig::default(),
            strong_separation: Some(SeparationDefinition {
                spacing: 40,
                line_thickness: Some(1),
                line_color: Some("#EEEEEE".to_string()),
            }),
            actions: Some(ActionsConfig {
                separation: separation.clone(),
                show_card: Some(ShowCardActionConfig {
                    background_color: Some("#08000000".to_string()),
                    padding: Some(SpacingDefinition::uniform(16)),
                    ..ShowCardActionConfig::default()
                }),
                ..ActionsConfig::default()
            }),
            adaptive_card: Some(AdaptiveCardConfig {
                background_color: Some("#FFFFFFFF".to_string()),
                padding: Some(SpacingDefinition::uniform(8)),
            }),
            container: Some(ContainerConfig {
                separation: separation.clone(),
                normal: Some(ContainerStyleDefinition::default()),
                emphasis: Some(ContainerStyleDefinition {
                    background_color: Some("#EEEEEE".to_string()),
                    padding: Some(SpacingDefinition::uniform(10)),
                    border_color: Some("#AAAAAA".to_string()),
                    border_thickness: Some(SpacingDefinition::uniform(1)),
                }),
            }),
            text_block: Some(TextBlockConfig {
                color: TextColor::Dark,
                separations: TextBlockSeparations {
                    small: Some(SeparationDefinition::spacing(20)),
                    normal: Some(SeparationDefinition::spacing(20)),
                    medium: Some(SeparationDefinition::spacing(20)),
                    large: Some(SeparationDefinition::spacing(30)),
                    extra_large: Some(SeparationDefinition::spacing(40)),
                },
            }),
            image: Some(ImageConfig {
                separation: separation.clone(),
                size: ImageSize::Auto,
            }),
            image_set: Some(ImageSetConfig {
                separation: separation.clone(),
                image_size: ImageSize::Medium,
            }),
            fact_set: Some(FactSetConfig {
                separation: separation.clone(),
                title: Some(FactTitleDefinition {
                    text: FactTextDefinition {
                        weight: TextWeight::Bolder,
                        ..fact_text.clone()
                    },
                    max_width: Some(150),
                }),
                value: Some(fact_text),
                spacing: 10,
            }),
            column: Some(ColumnConfig {
                separation: separation.clone(),
            }),
            column_set: Some(ColumnSetConfig {
                separation: separation.clone(),
            }),
            input: Some(InputConfig { separation }),
        }
    }
}
