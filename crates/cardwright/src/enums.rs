//! Enumerated values shared by host configuration and card elements.
//!
//! Every enum deserializes from its camelCase document spelling and has a
//! documented default used whenever a document omits the field.

use serde::{Deserialize, Serialize};

/// Logical text size, mapped to pixels through `fontSizes`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextSize {
    Small,
    #[default]
    Normal,
    Medium,
    Large,
    ExtraLarge,
}

/// Logical font weight, mapped through `fontWeights`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextWeight {
    Lighter,
    #[default]
    Normal,
    Bolder,
}

/// Semantic color role for text.
///
/// `Default` defers to the host's `textBlock.color` setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextColor {
    Default,
    #[default]
    Dark,
    Light,
    Accent,
    Good,
    Warning,
    Attention,
}

/// Logical image size, mapped through `imageSizes`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageSize {
    #[default]
    Auto,
    Stretch,
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageStyle {
    #[default]
    Normal,
    Person,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// How an element is separated from the element before it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeparationStyle {
    #[default]
    Default,
    None,
    Strong,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContainerStyle {
    #[default]
    Normal,
    Emphasis,
}

/// Where the sub-card of a show-card action is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShowCardActionMode {
    Inline,
    #[default]
    InlineEdgeToEdge,
    Popup,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionAlignment {
    #[default]
    Left,
    Center,
    Right,
    Stretch,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextInputStyle {
    #[default]
    Text,
    Tel,
    Url,
    Email,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChoiceInputStyle {
    #[default]
    Compact,
    Expanded,
}
