//! Host collaborator interfaces.
//!
//! The renderer decides *what* to build and with *which* resolved values; a
//! [`HostToolkit`] builds the native nodes. Each construction hook receives
//! a `*Spec` record whose style values are already concrete, so a host never
//! consults the [`HostConfig`](crate::config::HostConfig) itself.
//!
//! Activation flows the other way: when a native control fires, the host
//! calls [`RenderedCard::activate`](crate::render::RenderedCard::activate)
//! with the [`ActionRef`] it was given, and the outcome arrives on its
//! [`ActionHandler`].

use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use crate::config::SeparationDefinition;
use crate::element::{
    Action, AdaptiveCard, Column, ColumnSet, Container, FactSet, HttpAction, Image, ImageSet,
    InputChoiceSet, InputDate, InputText, InputTime, InputToggle, Media, OpenUrlAction,
    ShowCardAction, SubmitAction, TextBlock,
};
use crate::enums::ImageSize;
use crate::error::MissingInputError;
use crate::style::{
    ColumnWidth, ResolvedActions, ResolvedCardStyle, ResolvedContainerStyle, ResolvedFactTitle,
    ResolvedShowCard, ResolvedText,
};

/// Reads the current value of a live input control.
///
/// `None` means the control holds no value.
pub type ValueAccessor = Rc<dyn Fn() -> Option<Value>>;

/// A rendered child together with the gap to place before it.
///
/// The first rendered child of a parent never carries a separation.
#[derive(Debug, Clone, PartialEq)]
pub struct Child<N> {
    pub node: N,
    pub separation: Option<SeparationDefinition>,
}

/// Identifies a bound action inside a [`RenderedCard`](crate::render::RenderedCard).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionRef {
    /// Render scope the action belongs to. The card's own scope is `0`.
    pub scope: usize,
    /// Position of the action within its scope.
    pub index: usize,
}

pub struct CardSpec<'a, S, N> {
    pub card: &'a AdaptiveCard,
    pub style: S,
    pub card_style: ResolvedCardStyle,
    pub font_family: Option<&'a str>,
    pub children: Vec<Child<N>>,
}

pub struct TextBlockSpec<'a, S> {
    pub element: &'a TextBlock,
    pub style: S,
    pub text: ResolvedText,
    pub font_family: Option<&'a str>,
}

pub struct ImageSpec<'a, S> {
    pub element: &'a Image,
    pub style: S,
    pub size: ImageSize,
    /// Pixel edge for fixed sizes; `None` for auto and stretch.
    pub pixel_size: Option<u32>,
}

pub struct ImageSetSpec<'a, S, N> {
    pub element: &'a ImageSet,
    pub style: S,
    pub images: Vec<N>,
}

pub struct MediaSpec<'a, S> {
    pub element: &'a Media,
    pub style: S,
}

pub struct ContainerSpec<'a, S, N> {
    pub element: &'a Container,
    pub style: S,
    pub container_style: ResolvedContainerStyle,
    pub children: Vec<Child<N>>,
}

pub struct ColumnSetSpec<'a, S, N> {
    pub element: &'a ColumnSet,
    pub style: S,
    pub columns: Vec<Child<N>>,
}

pub struct ColumnSpec<'a, S, N> {
    pub element: &'a Column,
    pub style: S,
    pub width: ColumnWidth,
    pub container_style: ResolvedContainerStyle,
    pub children: Vec<Child<N>>,
}

pub struct FactSetSpec<'a, S> {
    pub element: &'a FactSet,
    pub style: S,
    pub title: ResolvedFactTitle,
    pub value: ResolvedText,
    pub spacing: u32,
}

/// Numeric control configuration.
///
/// `value` is handed over verbatim even when it lies outside the bounds:
/// `minimum` and `maximum` constrain later edits only.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberInputConfig<'a> {
    pub id: &'a str,
    pub placeholder: Option<&'a str>,
    pub value: Option<f64>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
}

/// Which control an input needs, and its configuration.
pub enum InputKind<'a> {
    Text(&'a InputText),
    Number(NumberInputConfig<'a>),
    Date(&'a InputDate),
    Time(&'a InputTime),
    Toggle(&'a InputToggle),
    ChoiceSet(&'a InputChoiceSet),
}

pub struct InputSpec<'a, S> {
    pub kind: InputKind<'a>,
    pub style: S,
}

/// A live input control and the accessor used to read it at submit time.
pub struct RenderedInput<N> {
    pub node: N,
    pub value: ValueAccessor,
}

impl<N> RenderedInput<N> {
    pub fn new(node: N, value: impl Fn() -> Option<Value> + 'static) -> Self {
        Self {
            node,
            value: Rc::new(value),
        }
    }
}

impl<N: fmt::Debug> fmt::Debug for RenderedInput<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderedInput")
            .field("node", &self.node)
            .finish_non_exhaustive()
    }
}

/// Sub-card revealed by a show-card button, rendered ahead of time.
pub struct ShowCardPanel<N> {
    pub card: N,
    pub style: ResolvedShowCard,
}

pub struct ButtonSpec<'a, S, N> {
    pub action: &'a Action,
    pub style: S,
    pub title: &'a str,
    /// Handle to pass back to `activate` when the button fires.
    pub target: ActionRef,
    pub show_card: Option<ShowCardPanel<N>>,
}

pub struct ActionSetSpec<S, N> {
    pub style: S,
    pub layout: ResolvedActions,
    pub buttons: Vec<N>,
}

/// Native widget construction for one platform.
///
/// Nodes are opaque to the renderer. They are cloned into the input registry
/// and into missing-input errors, so `Node` is usually a cheap handle.
pub trait HostToolkit {
    type Node: Clone;
    type Style: Clone;

    /// Resolves a logical style name such as `"Adaptive.TextBlock"` to a
    /// platform style token.
    fn create_style_handle(&mut self, name: &str) -> Self::Style;

    /// Non-interactive text surrogate. `None` when no fallback text exists.
    fn render_placeholder(&mut self, text: Option<&str>) -> Self::Node;

    fn card(&mut self, spec: CardSpec<'_, Self::Style, Self::Node>) -> Self::Node;
    fn text_block(&mut self, spec: TextBlockSpec<'_, Self::Style>) -> Self::Node;
    fn image(&mut self, spec: ImageSpec<'_, Self::Style>) -> Self::Node;
    fn image_set(&mut self, spec: ImageSetSpec<'_, Self::Style, Self::Node>) -> Self::Node;
    fn media(&mut self, spec: MediaSpec<'_, Self::Style>) -> Self::Node;
    fn container(&mut self, spec: ContainerSpec<'_, Self::Style, Self::Node>) -> Self::Node;
    fn column_set(&mut self, spec: ColumnSetSpec<'_, Self::Style, Self::Node>) -> Self::Node;
    fn column(&mut self, spec: ColumnSpec<'_, Self::Style, Self::Node>) -> Self::Node;
    fn fact_set(&mut self, spec: FactSetSpec<'_, Self::Style>) -> Self::Node;
    fn input(&mut self, spec: InputSpec<'_, Self::Style>) -> RenderedInput<Self::Node>;
    fn action_button(&mut self, spec: ButtonSpec<'_, Self::Style, Self::Node>) -> Self::Node;
    fn action_set(&mut self, spec: ActionSetSpec<Self::Style, Self::Node>) -> Self::Node;
}

/// What an activated action asks the host to do.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionEvent<'a> {
    /// Validated, merged submit payload.
    Submit {
        action: &'a SubmitAction,
        data: Value,
    },
    OpenUrl {
        action: &'a OpenUrlAction,
    },
    ShowCard {
        action: &'a ShowCardAction,
    },
    Http {
        action: &'a HttpAction,
    },
}

/// Host-side action handling.
pub trait ActionHandler<N> {
    /// An action fired from `control` and passed validation.
    fn on_action(&mut self, control: &N, event: ActionEvent<'_>);

    /// A submit was abandoned because a required input is empty.
    fn on_missing_input(&mut self, action: &Action, error: MissingInputError<N>);
}
