//! Concrete values produced by the style resolver.
//!
//! Unlike the configuration records, nothing here is optional unless the
//! absence itself is meaningful to a host (no rule line, no max width).

use crate::config::SpacingDefinition;
use crate::enums::{ActionAlignment, Orientation, ShowCardActionMode};

/// Fully resolved treatment of one container style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContainerStyle {
    pub background_color: String,
    pub padding: SpacingDefinition,
    pub border_color: String,
    pub border_thickness: SpacingDefinition,
}

impl Default for ResolvedContainerStyle {
    /// Transparent, unpadded and borderless.
    fn default() -> Self {
        Self {
            background_color: "#00FFFFFF".to_string(),
            padding: SpacingDefinition::default(),
            border_color: "#00000000".to_string(),
            border_thickness: SpacingDefinition::default(),
        }
    }
}

/// Outer card surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCardStyle {
    pub background_color: String,
    pub padding: SpacingDefinition,
}

/// Text treatment with sizes, weights and colors already mapped to concrete
/// values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedText {
    pub font_size: u32,
    pub font_weight: u32,
    pub color: String,
    pub wrap: bool,
}

/// Fact title text: a resolved [`ResolvedText`] plus the title column width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFactTitle {
    pub text: ResolvedText,
    pub max_width: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedActions {
    pub max_actions: usize,
    pub button_spacing: u32,
    pub orientation: Orientation,
    pub alignment: ActionAlignment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedShowCard {
    pub mode: ShowCardActionMode,
    pub inline_top_margin: u32,
    pub background_color: String,
    pub padding: SpacingDefinition,
}

/// Width a column should occupy inside its column set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Size to content.
    Auto,
    /// Take the remaining space.
    Stretch,
    /// Share remaining space in proportion to the weight.
    Weight(f64),
    /// Fixed width in device-independent pixels.
    Pixels(u32),
}
