//! Style and spacing resolution.
//!
//! [`StyleResolver`] answers one logical style request at a time with
//! concrete values: pixel sizes, font weights, hex colors, separation and
//! container treatments. It never fails. Wherever the configuration omits an
//! optional block or field, the documented default is substituted, so
//! renderers never observe "unset".
//!
//! Composition is structural: a fact title resolves its base text fields
//! exactly like a fact value, then overlays its own `maxWidth`.
//!
//! # Example
//!
//! ```rust
//! use cardwright::config::HostConfig;
//! use cardwright::enums::{SeparationStyle, TextColor, TextSize};
//! use cardwright::style::{ElementFamily, StyleResolver};
//!
//! let config = HostConfig::default();
//! let style = StyleResolver::new(&config);
//!
//! assert_eq!(style.font_size(TextSize::Large), 17);
//! assert_eq!(style.text_color(TextColor::Accent, false), "#2E89FC");
//!
//! let gap = style
//!     .separation(ElementFamily::TextBlock, SeparationStyle::Default, Some(TextSize::ExtraLarge))
//!     .unwrap();
//! assert_eq!(gap.spacing, 40);
//! assert!(style.separation(ElementFamily::Image, SeparationStyle::None, None).is_none());
//! ```

mod resolved;

pub use resolved::{
    ColumnWidth, ResolvedActions, ResolvedCardStyle, ResolvedContainerStyle, ResolvedFactTitle,
    ResolvedShowCard, ResolvedText,
};

use crate::config::{
    ActionsConfig, ColorDefinition, ContainerStyleDefinition, FactTextDefinition,
    FactTitleDefinition, HostConfig, SeparationDefinition, ShowCardActionConfig,
    SpacingDefinition,
};
use crate::element::{ColumnSize, ElementType};
use crate::enums::{ContainerStyle, ImageSize, SeparationStyle, TextColor, TextSize, TextWeight};

const DEFAULT_SEPARATION_SPACING: u32 = 20;
const DEFAULT_CARD_BACKGROUND: &str = "#FFFFFFFF";
const DEFAULT_CARD_PADDING: u32 = 8;
const DEFAULT_SHOW_CARD_BACKGROUND: &str = "#08000000";
const DEFAULT_SHOW_CARD_PADDING: u32 = 16;
const DEFAULT_FACT_TITLE_MAX_WIDTH: u32 = 150;

/// Configuration block whose `separation` applies to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementFamily {
    TextBlock,
    Image,
    ImageSet,
    Container,
    ColumnSet,
    Column,
    FactSet,
    Input,
    Actions,
}

impl ElementFamily {
    /// Family governing the separation of an element type.
    ///
    /// Media shares the image block; every input and action type maps to its
    /// shared block.
    pub fn of(element: ElementType) -> Self {
        match element {
            ElementType::TextBlock => ElementFamily::TextBlock,
            ElementType::Image | ElementType::Media => ElementFamily::Image,
            ElementType::ImageSet => ElementFamily::ImageSet,
            ElementType::Container => ElementFamily::Container,
            ElementType::ColumnSet => ElementFamily::ColumnSet,
            ElementType::Column => ElementFamily::Column,
            ElementType::FactSet => ElementFamily::FactSet,
            ElementType::InputText
            | ElementType::InputNumber
            | ElementType::InputDate
            | ElementType::InputTime
            | ElementType::InputToggle
            | ElementType::InputChoiceSet => ElementFamily::Input,
            ElementType::ActionSubmit
            | ElementType::ActionOpenUrl
            | ElementType::ActionShowCard
            | ElementType::ActionHttp => ElementFamily::Actions,
        }
    }
}

/// Resolves logical style requests against a [`HostConfig`].
#[derive(Debug, Clone, Copy)]
pub struct StyleResolver<'a> {
    config: &'a HostConfig,
}

impl<'a> StyleResolver<'a> {
    pub fn new(config: &'a HostConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a HostConfig {
        self.config
    }

    pub fn font_size(&self, size: TextSize) -> u32 {
        let sizes = &self.config.font_sizes;
        match size {
            TextSize::Small => sizes.small,
            TextSize::Normal => sizes.normal,
            TextSize::Medium => sizes.medium,
            TextSize::Large => sizes.large,
            TextSize::ExtraLarge => sizes.extra_large,
        }
    }

    pub fn font_weight(&self, weight: TextWeight) -> u32 {
        let weights = &self.config.font_weights;
        match weight {
            TextWeight::Lighter => weights.lighter,
            TextWeight::Normal => weights.normal,
            TextWeight::Bolder => weights.bolder,
        }
    }

    /// Pixel edge of a logical image size. `auto` and `stretch` are layout
    /// behaviors rather than sizes and resolve to `None`.
    pub fn image_size(&self, size: ImageSize) -> Option<u32> {
        let sizes = &self.config.image_sizes;
        match size {
            ImageSize::Auto | ImageSize::Stretch => None,
            ImageSize::Small => Some(sizes.small),
            ImageSize::Medium => Some(sizes.medium),
            ImageSize::Large => Some(sizes.large),
        }
    }

    /// Logical size for an image that does not declare one.
    pub fn default_image_size(&self) -> ImageSize {
        self.config
            .image
            .as_ref()
            .map(|image| image.size)
            .unwrap_or_default()
    }

    /// Logical size for images inside an image set that does not declare one.
    pub fn default_image_set_size(&self) -> ImageSize {
        self.config
            .image_set
            .as_ref()
            .map(|set| set.image_size)
            .unwrap_or(ImageSize::Medium)
    }

    /// Hex color for a text color role.
    ///
    /// [`TextColor::Default`] defers to `textBlock.color`, which itself
    /// defaults to dark.
    pub fn text_color(&self, color: TextColor, is_subtle: bool) -> String {
        let definition = self.color_definition(color);
        if is_subtle {
            definition.subtle.clone()
        } else {
            definition.normal.clone()
        }
    }

    fn color_definition(&self, color: TextColor) -> &'a ColorDefinition {
        let colors = &self.config.colors;
        match color {
            TextColor::Default => {
                let fallback = self
                    .config
                    .text_block
                    .as_ref()
                    .map(|block| block.color)
                    .unwrap_or_default();
                match fallback {
                    // textBlock.color: default would loop; it means dark.
                    TextColor::Default => &colors.dark,
                    other => self.color_definition(other),
                }
            }
            TextColor::Dark => &colors.dark,
            TextColor::Light => &colors.light,
            TextColor::Accent => &colors.accent,
            TextColor::Good => &colors.good,
            TextColor::Warning => &colors.warning,
            TextColor::Attention => &colors.attention,
        }
    }

    /// Gap placed before an element of `family`.
    ///
    /// `text_size` selects the band for text blocks and is ignored for every
    /// other family.
    pub fn separation(
        &self,
        family: ElementFamily,
        style: SeparationStyle,
        text_size: Option<TextSize>,
    ) -> Option<SeparationDefinition> {
        match style {
            SeparationStyle::None => None,
            SeparationStyle::Strong => Some(self.strong_separation()),
            SeparationStyle::Default => Some(self.default_separation(family, text_size)),
        }
    }

    fn strong_separation(&self) -> SeparationDefinition {
        self.config
            .strong_separation
            .clone()
            .unwrap_or_else(|| SeparationDefinition {
                spacing: 40,
                line_thickness: Some(1),
                line_color: Some("#EEEEEE".to_string()),
            })
    }

    fn default_separation(
        &self,
        family: ElementFamily,
        text_size: Option<TextSize>,
    ) -> SeparationDefinition {
        let config = self.config;
        let configured = match family {
            ElementFamily::TextBlock => {
                let size = text_size.unwrap_or_default();
                let band = config.text_block.as_ref().and_then(|block| {
                    let bands = &block.separations;
                    match size {
                        TextSize::Small => bands.small.as_ref(),
                        TextSize::Normal => bands.normal.as_ref(),
                        TextSize::Medium => bands.medium.as_ref(),
                        TextSize::Large => bands.large.as_ref(),
                        TextSize::ExtraLarge => bands.extra_large.as_ref(),
                    }
                });
                return band
                    .cloned()
                    .unwrap_or_else(|| SeparationDefinition::spacing(text_band_spacing(size)));
            }
            ElementFamily::Image => config.image.as_ref().and_then(|b| b.separation.as_ref()),
            ElementFamily::ImageSet => {
                config.image_set.as_ref().and_then(|b| b.separation.as_ref())
            }
            ElementFamily::Container => {
                config.container.as_ref().and_then(|b| b.separation.as_ref())
            }
            ElementFamily::ColumnSet => {
                config.column_set.as_ref().and_then(|b| b.separation.as_ref())
            }
            ElementFamily::Column => config.column.as_ref().and_then(|b| b.separation.as_ref()),
            ElementFamily::FactSet => {
                config.fact_set.as_ref().and_then(|b| b.separation.as_ref())
            }
            ElementFamily::Input => config.input.as_ref().and_then(|b| b.separation.as_ref()),
            ElementFamily::Actions => {
                config.actions.as_ref().and_then(|b| b.separation.as_ref())
            }
        };
        configured
            .cloned()
            .unwrap_or_else(|| SeparationDefinition::spacing(DEFAULT_SEPARATION_SPACING))
    }

    /// Treatment of a container style.
    ///
    /// `normal` fills each missing field from the transparent built-in
    /// defaults; `emphasis` fills each missing field from the resolved
    /// `normal`.
    pub fn container_style(&self, style: ContainerStyle) -> ResolvedContainerStyle {
        let block = self.config.container.as_ref();
        let normal = overlay(
            ResolvedContainerStyle::default(),
            block.and_then(|c| c.normal.as_ref()),
        );
        match style {
            ContainerStyle::Normal => normal,
            ContainerStyle::Emphasis => overlay(normal, block.and_then(|c| c.emphasis.as_ref())),
        }
    }

    pub fn card_style(&self) -> ResolvedCardStyle {
        let card = self.config.adaptive_card.as_ref();
        ResolvedCardStyle {
            background_color: card
                .and_then(|c| c.background_color.clone())
                .unwrap_or_else(|| DEFAULT_CARD_BACKGROUND.to_string()),
            padding: card
                .and_then(|c| c.padding)
                .unwrap_or_else(|| SpacingDefinition::uniform(DEFAULT_CARD_PADDING)),
        }
    }

    /// Text treatment of fact values.
    pub fn fact_value(&self) -> ResolvedText {
        let definition = self
            .config
            .fact_set
            .as_ref()
            .and_then(|set| set.value.clone())
            .unwrap_or_else(default_fact_text);
        self.resolve_text(&definition)
    }

    /// Text treatment of fact titles: base text fields first, then the
    /// title's `maxWidth`.
    pub fn fact_title(&self) -> ResolvedFactTitle {
        let definition = self
            .config
            .fact_set
            .as_ref()
            .and_then(|set| set.title.clone())
            .unwrap_or_else(default_fact_title);
        ResolvedFactTitle {
            text: self.resolve_text(&definition.text),
            max_width: definition.max_width,
        }
    }

    /// Gap between fact rows.
    pub fn fact_spacing(&self) -> u32 {
        self.config
            .fact_set
            .as_ref()
            .map(|set| set.spacing)
            .unwrap_or(10)
    }

    fn resolve_text(&self, definition: &FactTextDefinition) -> ResolvedText {
        ResolvedText {
            font_size: self.font_size(definition.size),
            font_weight: self.font_weight(definition.weight),
            color: self.text_color(definition.color, definition.is_subtle),
            wrap: definition.wrap,
        }
    }

    pub fn actions(&self) -> ResolvedActions {
        let actions = self.config.actions.clone().unwrap_or_default();
        ResolvedActions {
            max_actions: actions.max_actions as usize,
            button_spacing: actions.button_spacing,
            orientation: actions.actions_orientation,
            alignment: actions.action_alignment,
        }
    }

    pub fn show_card(&self) -> ResolvedShowCard {
        let show = self
            .config
            .actions
            .as_ref()
            .and_then(|actions: &ActionsConfig| actions.show_card.clone())
            .unwrap_or_else(ShowCardActionConfig::default);
        ResolvedShowCard {
            mode: show.action_mode,
            inline_top_margin: show.inline_top_margin,
            background_color: show
                .background_color
                .unwrap_or_else(|| DEFAULT_SHOW_CARD_BACKGROUND.to_string()),
            padding: show
                .padding
                .unwrap_or_else(|| SpacingDefinition::uniform(DEFAULT_SHOW_CARD_PADDING)),
        }
    }

    /// Width of a column. Unrecognised keywords and non-positive weights fall
    /// back to [`ColumnWidth::Auto`].
    pub fn column_width(&self, size: Option<&ColumnSize>) -> ColumnWidth {
        match size {
            None => ColumnWidth::Auto,
            Some(ColumnSize::Weight(weight)) => weight_width(*weight),
            Some(ColumnSize::Keyword(keyword)) => parse_column_keyword(keyword),
        }
    }
}

fn overlay(
    base: ResolvedContainerStyle,
    definition: Option<&ContainerStyleDefinition>,
) -> ResolvedContainerStyle {
    let Some(definition) = definition else {
        return base;
    };
    ResolvedContainerStyle {
        background_color: definition
            .background_color
            .clone()
            .unwrap_or(base.background_color),
        padding: definition.padding.unwrap_or(base.padding),
        border_color: definition.border_color.clone().unwrap_or(base.border_color),
        border_thickness: definition.border_thickness.unwrap_or(base.border_thickness),
    }
}

fn text_band_spacing(size: TextSize) -> u32 {
    match size {
        TextSize::Small | TextSize::Normal | TextSize::Medium => 20,
        TextSize::Large => 30,
        TextSize::ExtraLarge => 40,
    }
}

fn default_fact_text() -> FactTextDefinition {
    FactTextDefinition {
        wrap: true,
        ..FactTextDefinition::default()
    }
}

fn default_fact_title() -> FactTitleDefinition {
    FactTitleDefinition {
        text: FactTextDefinition {
            weight: TextWeight::Bolder,
            ..default_fact_text()
        },
        max_width: Some(DEFAULT_FACT_TITLE_MAX_WIDTH),
    }
}

fn weight_width(weight: f64) -> ColumnWidth {
    if weight.is_finite() && weight > 0.0 {
        ColumnWidth::Weight(weight)
    } else {
        ColumnWidth::Auto
    }
}

fn parse_column_keyword(keyword: &str) -> ColumnWidth {
    let keyword = keyword.trim().to_ascii_lowercase();
    match keyword.as_str() {
        "auto" => ColumnWidth::Auto,
        "stretch" => ColumnWidth::Stretch,
        _ => {
            if let Some(pixels) = keyword.strip_suffix("px") {
                return pixels
                    .trim()
                    .parse::<u32>()
                    .map(ColumnWidth::Pixels)
                    .unwrap_or(ColumnWidth::Auto);
            }
            keyword
                .parse::<f64>()
                .map(weight_width)
                .unwrap_or(ColumnWidth::Auto)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sparse_config() -> HostConfig {
        HostConfig::from_value(json!({
            "fontSizes": {},
            "fontWeights": {},
            "imageSizes": {},
            "colors": {}
        }))
        .unwrap()
    }

    #[test]
    fn test_scales_map_to_config_values() {
        let config = HostConfig::default();
        let style = StyleResolver::new(&config);
        assert_eq!(style.font_size(TextSize::Small), 10);
        assert_eq!(style.font_size(TextSize::ExtraLarge), 20);
        assert_eq!(style.font_weight(TextWeight::Bolder), 600);
        assert_eq!(style.image_size(ImageSize::Medium), Some(80));
        assert_eq!(style.image_size(ImageSize::Auto), None);
        assert_eq!(style.image_size(ImageSize::Stretch), None);
    }

    #[test]
    fn test_text_color_subtle_variant() {
        let config = HostConfig::default();
        let style = StyleResolver::new(&config);
        assert_eq!(style.text_color(TextColor::Good, false), "#54A254");
        assert_eq!(style.text_color(TextColor::Good, true), "#DD54A254");
    }

    #[test]
    fn test_default_color_follows_text_block() {
        let mut config = sparse_config();
        let style = StyleResolver::new(&config);
        assert_eq!(style.text_color(TextColor::Default, false), "#333333");

        config.text_block = Some(crate::config::TextBlockConfig {
            color: TextColor::Accent,
            ..Default::default()
        });
        let style = StyleResolver::new(&config);
        assert_eq!(style.text_color(TextColor::Default, false), "#2E89FC");
    }

    #[test]
    fn test_default_color_does_not_recurse() {
        let mut config = sparse_config();
        config.text_block = Some(crate::config::TextBlockConfig {
            color: TextColor::Default,
            ..Default::default()
        });
        let style = StyleResolver::new(&config);
        assert_eq!(style.text_color(TextColor::Default, true), "#EE333333");
    }

    #[test]
    fn test_separation_styles() {
        let config = sparse_config();
        let style = StyleResolver::new(&config);

        assert_eq!(
            style.separation(ElementFamily::Container, SeparationStyle::None, None),
            None
        );

        let strong = style
            .separation(ElementFamily::Container, SeparationStyle::Strong, None)
            .unwrap();
        assert_eq!(strong.spacing, 40);
        assert_eq!(strong.line_thickness, Some(1));
        assert_eq!(strong.line_color.as_deref(), Some("#EEEEEE"));

        let default = style
            .separation(ElementFamily::Container, SeparationStyle::Default, None)
            .unwrap();
        assert_eq!(default, SeparationDefinition::spacing(20));
    }

    #[test]
    fn test_text_block_bands() {
        let config = sparse_config();
        let style = StyleResolver::new(&config);
        let band = |size| {
            style
                .separation(ElementFamily::TextBlock, SeparationStyle::Default, Some(size))
                .unwrap()
                .spacing
        };
        assert_eq!(band(TextSize::Normal), 20);
        assert_eq!(band(TextSize::Large), 30);
        assert_eq!(band(TextSize::ExtraLarge), 40);
    }

    #[test]
    fn test_configured_family_separation() {
        let config = HostConfig::from_value(json!({
            "fontSizes": {},
            "fontWeights": {},
            "imageSizes": {},
            "colors": {},
            "input": { "separation": { "spacing": 6, "lineThickness": 2 } }
        }))
        .unwrap();
        let style = StyleResolver::new(&config);
        let gap = style
            .separation(ElementFamily::Input, SeparationStyle::Default, None)
            .unwrap();
        assert_eq!(gap.spacing, 6);
        assert_eq!(gap.line_thickness, Some(2));
    }

    #[test]
    fn test_emphasis_inherits_from_normal() {
        let config = HostConfig::from_value(json!({
            "fontSizes": {},
            "fontWeights": {},
            "imageSizes": {},
            "colors": {},
            "container": {
                "normal": { "padding": { "top": 4, "right": 4, "bottom": 4, "left": 4 } },
                "emphasis": { "backgroundColor": "#EEEEEE" }
            }
        }))
        .unwrap();
        let style = StyleResolver::new(&config);

        let normal = style.container_style(ContainerStyle::Normal);
        assert_eq!(normal.padding, SpacingDefinition::uniform(4));
        assert_eq!(normal.background_color, "#00FFFFFF");

        let emphasis = style.container_style(ContainerStyle::Emphasis);
        assert_eq!(emphasis.background_color, "#EEEEEE");
        assert_eq!(emphasis.padding, SpacingDefinition::uniform(4));
        assert_eq!(emphasis.border_color, normal.border_color);
    }

    #[test]
    fn test_container_style_without_block() {
        let config = sparse_config();
        let style = StyleResolver::new(&config);
        assert_eq!(
            style.container_style(ContainerStyle::Emphasis),
            ResolvedContainerStyle::default()
        );
    }

    #[test]
    fn test_card_style_defaults() {
        let config = sparse_config();
        let card = StyleResolver::new(&config).card_style();
        assert_eq!(card.background_color, "#FFFFFFFF");
        assert_eq!(card.padding, SpacingDefinition::uniform(8));
    }

    #[test]
    fn test_fact_title_overlays_max_width() {
        let config = sparse_config();
        let style = StyleResolver::new(&config);
        let title = style.fact_title();
        let value = style.fact_value();
        assert_eq!(title.text.font_weight, 600);
        assert_eq!(title.max_width, Some(150));
        assert_eq!(value.font_weight, 400);
        assert_eq!(title.text.font_size, value.font_size);
        assert_eq!(style.fact_spacing(), 10);
    }

    #[test]
    fn test_configured_fact_title() {
        let config = HostConfig::from_value(json!({
            "fontSizes": {},
            "fontWeights": {},
            "imageSizes": {},
            "colors": {},
            "factSet": { "title": { "size": "large", "isSubtle": true } }
        }))
        .unwrap();
        let title = StyleResolver::new(&config).fact_title();
        assert_eq!(title.text.font_size, 17);
        assert_eq!(title.text.color, "#EE333333");
        assert_eq!(title.max_width, None);
    }

    #[test]
    fn test_actions_and_show_card_defaults() {
        let config = sparse_config();
        let style = StyleResolver::new(&config);
        let actions = style.actions();
        assert_eq!(actions.max_actions, 5);
        assert_eq!(actions.button_spacing, 20);

        let show = style.show_card();
        assert_eq!(show.mode, crate::enums::ShowCardActionMode::InlineEdgeToEdge);
        assert_eq!(show.inline_top_margin, 16);
        assert_eq!(show.background_color, "#08000000");
        assert_eq!(show.padding, SpacingDefinition::uniform(16));
    }

    #[test]
    fn test_column_widths() {
        let config = sparse_config();
        let style = StyleResolver::new(&config);
        let keyword = |k: &str| style.column_width(Some(&ColumnSize::Keyword(k.to_string())));

        assert_eq!(style.column_width(None), ColumnWidth::Auto);
        assert_eq!(keyword("auto"), ColumnWidth::Auto);
        assert_eq!(keyword("Stretch"), ColumnWidth::Stretch);
        assert_eq!(keyword("80px"), ColumnWidth::Pixels(80));
        assert_eq!(keyword("3"), ColumnWidth::Weight(3.0));
        assert_eq!(keyword("wide"), ColumnWidth::Auto);
        assert_eq!(
            style.column_width(Some(&ColumnSize::Weight(2.0))),
            ColumnWidth::Weight(2.0)
        );
        assert_eq!(
            style.column_width(Some(&ColumnSize::Weight(-1.0))),
            ColumnWidth::Auto
        );
    }

    #[test]
    fn test_element_families() {
        assert_eq!(ElementFamily::of(ElementType::Media), ElementFamily::Image);
        assert_eq!(ElementFamily::of(ElementType::InputDate), ElementFamily::Input);
        assert_eq!(
            ElementFamily::of(ElementType::ActionShowCard),
            ElementFamily::Actions
        );
    }
}
