//! Typed card element tree.
//!
//! The tree is produced by a schema parser outside this crate; the serde
//! derives here accept the card JSON shape so hosts and tests can build trees
//! directly from documents. Parents own their children exclusively, so the
//! tree cannot contain cycles.

mod actions;
mod inputs;

pub use actions::{Action, HttpAction, HttpHeader, OpenUrlAction, ShowCardAction, SubmitAction};
pub use inputs::{
    Choice, InputChoiceSet, InputDate, InputNumber, InputText, InputTime, InputToggle,
};

use serde::{Deserialize, Serialize};

use crate::enums::{
    ContainerStyle, HorizontalAlignment, ImageSize, ImageStyle, SeparationStyle, TextColor,
    TextSize, TextWeight,
};

/// Root of a card document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdaptiveCard {
    pub version: Option<String>,
    pub body: Vec<CardElement>,
    pub actions: Vec<Action>,
    pub speak: Option<String>,
    pub background_image: Option<String>,
}

/// One node of the card body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CardElement {
    TextBlock(TextBlock),
    Image(Image),
    ImageSet(ImageSet),
    Media(Media),
    Container(Container),
    ColumnSet(ColumnSet),
    FactSet(FactSet),
    #[serde(rename = "Input.Text")]
    InputText(InputText),
    #[serde(rename = "Input.Number")]
    InputNumber(InputNumber),
    #[serde(rename = "Input.Date")]
    InputDate(InputDate),
    #[serde(rename = "Input.Time")]
    InputTime(InputTime),
    #[serde(rename = "Input.Toggle")]
    InputToggle(InputToggle),
    #[serde(rename = "Input.ChoiceSet")]
    InputChoiceSet(InputChoiceSet),
}

impl CardElement {
    pub fn element_type(&self) -> ElementType {
        match self {
            CardElement::TextBlock(_) => ElementType::TextBlock,
            CardElement::Image(_) => ElementType::Image,
            CardElement::ImageSet(_) => ElementType::ImageSet,
            CardElement::Media(_) => ElementType::Media,
            CardElement::Container(_) => ElementType::Container,
            CardElement::ColumnSet(_) => ElementType::ColumnSet,
            CardElement::FactSet(_) => ElementType::FactSet,
            CardElement::InputText(_) => ElementType::InputText,
            CardElement::InputNumber(_) => ElementType::InputNumber,
            CardElement::InputDate(_) => ElementType::InputDate,
            CardElement::InputTime(_) => ElementType::InputTime,
            CardElement::InputToggle(_) => ElementType::InputToggle,
            CardElement::InputChoiceSet(_) => ElementType::InputChoiceSet,
        }
    }

    /// Alternate speech representation, if the element declares one.
    pub fn speak(&self) -> Option<&str> {
        match self {
            CardElement::TextBlock(e) => e.speak.as_deref(),
            CardElement::Image(e) => e.speak.as_deref(),
            CardElement::ImageSet(e) => e.speak.as_deref(),
            CardElement::Media(e) => e.speak.as_deref(),
            CardElement::Container(e) => e.speak.as_deref(),
            CardElement::ColumnSet(e) => e.speak.as_deref(),
            CardElement::FactSet(e) => e.speak.as_deref(),
            CardElement::InputText(e) => e.speak.as_deref(),
            CardElement::InputNumber(e) => e.speak.as_deref(),
            CardElement::InputDate(e) => e.speak.as_deref(),
            CardElement::InputTime(e) => e.speak.as_deref(),
            CardElement::InputToggle(e) => e.speak.as_deref(),
            CardElement::InputChoiceSet(e) => e.speak.as_deref(),
        }
    }

    pub fn separation(&self) -> SeparationStyle {
        match self {
            CardElement::TextBlock(e) => e.separation,
            CardElement::Image(e) => e.separation,
            CardElement::ImageSet(e) => e.separation,
            CardElement::Media(e) => e.separation,
            CardElement::Container(e) => e.separation,
            CardElement::ColumnSet(e) => e.separation,
            CardElement::FactSet(e) => e.separation,
            CardElement::InputText(e) => e.separation,
            CardElement::InputNumber(e) => e.separation,
            CardElement::InputDate(e) => e.separation,
            CardElement::InputTime(e) => e.separation,
            CardElement::InputToggle(e) => e.separation,
            CardElement::InputChoiceSet(e) => e.separation,
        }
    }
}

/// Closed set of element and action type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    TextBlock,
    Image,
    ImageSet,
    Media,
    Container,
    ColumnSet,
    Column,
    FactSet,
    InputText,
    InputNumber,
    InputDate,
    InputTime,
    InputToggle,
    InputChoiceSet,
    ActionSubmit,
    ActionOpenUrl,
    ActionShowCard,
    ActionHttp,
}

impl ElementType {
    /// Document spelling of the type tag.
    pub fn type_name(self) -> &'static str {
        match self {
            ElementType::TextBlock => "TextBlock",
            ElementType::Image => "Image",
            ElementType::ImageSet => "ImageSet",
            ElementType::Media => "Media",
            ElementType::Container => "Container",
            ElementType::ColumnSet => "ColumnSet",
            ElementType::Column => "Column",
            ElementType::FactSet => "FactSet",
            ElementType::InputText => "Input.Text",
            ElementType::InputNumber => "Input.Number",
            ElementType::InputDate => "Input.Date",
            ElementType::InputTime => "Input.Time",
            ElementType::InputToggle => "Input.Toggle",
            ElementType::InputChoiceSet => "Input.ChoiceSet",
            ElementType::ActionSubmit => "Action.Submit",
            ElementType::ActionOpenUrl => "Action.OpenUrl",
            ElementType::ActionShowCard => "Action.ShowCard",
            ElementType::ActionHttp => "Action.Http",
        }
    }

    /// Logical style name handed to the host's style factory.
    pub fn style_name(self) -> &'static str {
        match self {
            ElementType::TextBlock => "Adaptive.TextBlock",
            ElementType::Image => "Adaptive.Image",
            ElementType::ImageSet => "Adaptive.ImageSet",
            ElementType::Media => "Adaptive.Media",
            ElementType::Container => "Adaptive.Container",
            ElementType::ColumnSet => "Adaptive.ColumnSet",
            ElementType::Column => "Adaptive.Column",
            ElementType::FactSet => "Adaptive.FactSet",
            ElementType::InputText => "Adaptive.Input.Text",
            ElementType::InputNumber => "Adaptive.Input.Number",
            ElementType::InputDate => "Adaptive.Input.Date",
            ElementType::InputTime => "Adaptive.Input.Time",
            ElementType::InputToggle => "Adaptive.Input.Toggle",
            ElementType::InputChoiceSet => "Adaptive.Input.ChoiceSet",
            ElementType::ActionSubmit => "Adaptive.Action.Submit",
            ElementType::ActionOpenUrl => "Adaptive.Action.OpenUrl",
            ElementType::ActionShowCard => "Adaptive.Action.ShowCard",
            ElementType::ActionHttp => "Adaptive.Action.Http",
        }
    }

    pub fn is_input(self) -> bool {
        matches!(
            self,
            ElementType::InputText
                | ElementType::InputNumber
                | ElementType::InputDate
                | ElementType::InputTime
                | ElementType::InputToggle
                | ElementType::InputChoiceSet
        )
    }

    pub fn is_action(self) -> bool {
        matches!(
            self,
            ElementType::ActionSubmit
                | ElementType::ActionOpenUrl
                | ElementType::ActionShowCard
                | ElementType::ActionHttp
        )
    }

    /// Whether the element needs a live, interactive control.
    ///
    /// Media counts as interactive because playback is user driven.
    pub fn requires_interactivity(self) -> bool {
        self.is_input() || self.is_action() || self == ElementType::Media
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextBlock {
    pub text: String,
    pub size: TextSize,
    pub weight: TextWeight,
    pub color: TextColor,
    pub is_subtle: bool,
    pub wrap: bool,
    pub max_lines: Option<u32>,
    pub horizontal_alignment: HorizontalAlignment,
    pub speak: Option<String>,
    pub separation: SeparationStyle,
}

impl TextBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Image {
    pub url: String,
    /// `None` defers to the host's `image.size`.
    pub size: Option<ImageSize>,
    pub style: ImageStyle,
    pub horizontal_alignment: HorizontalAlignment,
    pub alt_text: Option<String>,
    pub speak: Option<String>,
    pub separation: SeparationStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageSet {
    pub images: Vec<Image>,
    /// `None` defers to the host's `imageSet.imageSize`.
    pub image_size: Option<ImageSize>,
    pub speak: Option<String>,
    pub separation: SeparationStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaSource {
    pub mime_type: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Media {
    pub sources: Vec<MediaSource>,
    pub poster: Option<String>,
    pub alt_text: Option<String>,
    pub speak: Option<String>,
    pub separation: SeparationStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Container {
    pub items: Vec<CardElement>,
    pub style: ContainerStyle,
    pub speak: Option<String>,
    pub separation: SeparationStyle,
}

/// Declared column width: a keyword (`auto`, `stretch`, `80px`) or a
/// relative weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnSize {
    Weight(f64),
    Keyword(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Column {
    pub items: Vec<CardElement>,
    pub size: Option<ColumnSize>,
    pub style: ContainerStyle,
    pub speak: Option<String>,
    pub separation: SeparationStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnSet {
    pub columns: Vec<Column>,
    pub speak: Option<String>,
    pub separation: SeparationStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Fact {
    pub title: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FactSet {
    pub facts: Vec<Fact>,
    pub speak: Option<String>,
    pub separation: SeparationStyle,
}
