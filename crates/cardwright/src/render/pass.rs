//! One depth-first walk over a card tree.

use tracing::debug;

use crate::config::{HostConfig, SeparationDefinition};
use crate::element::{
    Action, AdaptiveCard, CardElement, Column, ColumnSet, Container, ElementType, FactSet, Image,
    ImageSet, Media, TextBlock,
};
use crate::enums::{ImageSize, SeparationStyle, TextSize};
use crate::host::{
    ActionRef, ActionSetSpec, ButtonSpec, CardSpec, Child, ColumnSetSpec, ColumnSpec,
    ContainerSpec, FactSetSpec, HostToolkit, ImageSetSpec, ImageSpec, InputKind, InputSpec,
    MediaSpec, NumberInputConfig, ShowCardPanel, TextBlockSpec,
};
use crate::style::{ElementFamily, ResolvedText, StyleResolver};
use crate::submit::RenderScope;

pub(crate) const CARD_STYLE: &str = "Adaptive.Card";
pub(crate) const ACTION_SET_STYLE: &str = "Adaptive.ActionSet";

/// State of a single render pass.
///
/// The interactivity flag is captured once, when the pass starts. Scope `0`
/// is the rendered card's own scope; every show-card sub-card pushes another.
pub(crate) struct RenderPass<'a, H: HostToolkit> {
    config: &'a HostConfig,
    style: StyleResolver<'a>,
    interactive: bool,
    host: &'a mut H,
    pub(crate) scopes: Vec<RenderScope<H::Node>>,
    current: usize,
}

impl<'a, H: HostToolkit> RenderPass<'a, H> {
    pub(crate) fn new(config: &'a HostConfig, host: &'a mut H) -> Self {
        let interactive = config.supports_interactivity;
        debug!(interactive, "starting render pass");
        Self {
            config,
            style: StyleResolver::new(config),
            interactive,
            host,
            scopes: vec![RenderScope::new(None)],
            current: 0,
        }
    }

    pub(crate) fn card(&mut self, card: &AdaptiveCard) -> H::Node {
        let mut children = self.children(&card.body);
        if let Some(node) = self.action_set(&card.actions) {
            let separation = if children.is_empty() {
                None
            } else {
                self.style
                    .separation(ElementFamily::Actions, SeparationStyle::Default, None)
            };
            children.push(Child { node, separation });
        }

        let style = self.host.create_style_handle(CARD_STYLE);
        self.host.card(CardSpec {
            card,
            style,
            card_style: self.style.card_style(),
            font_family: self.config.font_family.as_deref(),
            children,
        })
    }

    fn children(&mut self, elements: &[CardElement]) -> Vec<Child<H::Node>> {
        let mut children = Vec::with_capacity(elements.len());
        for element in elements {
            let node = self.element(element);
            let separation = if children.is_empty() {
                None
            } else {
                self.separation_before(element)
            };
            children.push(Child { node, separation });
        }
        children
    }

    fn separation_before(&self, element: &CardElement) -> Option<SeparationDefinition> {
        let text_size: Option<TextSize> = match element {
            CardElement::TextBlock(text) => Some(text.size),
            _ => None,
        };
        self.style.separation(
            ElementFamily::of(element.element_type()),
            element.separation(),
            text_size,
        )
    }

    /// Renders one body element. Non-interactive inputs and media still
    /// yield a placeholder node.
    pub(crate) fn element(&mut self, element: &CardElement) -> H::Node {
        match element {
            CardElement::TextBlock(text) => self.text_block(text),
            CardElement::Image(image) => self.image(image, None),
            CardElement::ImageSet(set) => self.image_set(set),
            CardElement::Media(media) => self.media(media),
            CardElement::Container(container) => self.container(container),
            CardElement::ColumnSet(set) => self.column_set(set),
            CardElement::FactSet(facts) => self.fact_set(facts),
            CardElement::InputText(input) => self.input(
                ElementType::InputText,
                InputMeta::new(&input.id, input.is_required, &input.speak)
                    .label(input.placeholder.as_deref()),
                InputKind::Text(input),
            ),
            CardElement::InputNumber(input) => self.input(
                ElementType::InputNumber,
                InputMeta::new(&input.id, input.is_required, &input.speak)
                    .label(input.placeholder.as_deref()),
                InputKind::Number(NumberInputConfig {
                    id: &input.id,
                    placeholder: input.placeholder.as_deref(),
                    value: input.value,
                    minimum: input.min,
                    maximum: input.max,
                }),
            ),
            CardElement::InputDate(input) => self.input(
                ElementType::InputDate,
                InputMeta::new(&input.id, input.is_required, &input.speak)
                    .label(input.placeholder.as_deref()),
                InputKind::Date(input),
            ),
            CardElement::InputTime(input) => self.input(
                ElementType::InputTime,
                InputMeta::new(&input.id, input.is_required, &input.speak)
                    .label(input.placeholder.as_deref()),
                InputKind::Time(input),
            ),
            CardElement::InputToggle(input) => self.input(
                ElementType::InputToggle,
                InputMeta::new(&input.id, input.is_required, &input.speak)
                    .label(Some(input.title.as_str())),
                InputKind::Toggle(input),
            ),
            CardElement::InputChoiceSet(input) => self.input(
                ElementType::InputChoiceSet,
                InputMeta::new(&input.id, input.is_required, &input.speak)
                    .label(input.placeholder.as_deref()),
                InputKind::ChoiceSet(input),
            ),
        }
    }

    fn text_block(&mut self, element: &TextBlock) -> H::Node {
        let style = self.host.create_style_handle(ElementType::TextBlock.style_name());
        let text = ResolvedText {
            font_size: self.style.font_size(element.size),
            font_weight: self.style.font_weight(element.weight),
            color: self.style.text_color(element.color, element.is_subtle),
            wrap: element.wrap,
        };
        self.host.text_block(TextBlockSpec {
            element,
            style,
            text,
            font_family: self.config.font_family.as_deref(),
        })
    }

    fn image(&mut self, element: &Image, set_size: Option<ImageSize>) -> H::Node {
        let style = self.host.create_style_handle(ElementType::Image.style_name());
        let size = set_size
            .or(element.size)
            .unwrap_or_else(|| self.style.default_image_size());
        self.host.image(ImageSpec {
            element,
            style,
            size,
            pixel_size: self.style.image_size(size),
        })
    }

    fn image_set(&mut self, element: &ImageSet) -> H::Node {
        let size = element
            .image_size
            .unwrap_or_else(|| self.style.default_image_set_size());
        let images = element
            .images
            .iter()
            .map(|image| self.image(image, Some(size)))
            .collect();
        let style = self.host.create_style_handle(ElementType::ImageSet.style_name());
        self.host.image_set(ImageSetSpec {
            element,
            style,
            images,
        })
    }

    fn media(&mut self, element: &Media) -> H::Node {
        if !self.interactive {
            let text = self
                .fallback_text(element.speak.as_deref())
                .or_else(|| element.alt_text.clone());
            return self.host.render_placeholder(text.as_deref());
        }
        let style = self.host.create_style_handle(ElementType::Media.style_name());
        self.host.media(MediaSpec { element, style })
    }

    fn container(&mut self, element: &Container) -> H::Node {
        let children = self.children(&element.items);
        let style = self.host.create_style_handle(ElementType::Container.style_name());
        self.host.container(ContainerSpec {
            element,
            style,
            container_style: self.style.container_style(element.style),
            children,
        })
    }

    fn column_set(&mut self, element: &ColumnSet) -> H::Node {
        let mut columns = Vec::with_capacity(element.columns.len());
        for column in &element.columns {
            let node = self.column(column);
            let separation = if columns.is_empty() {
                None
            } else {
                self.style
                    .separation(ElementFamily::Column, column.separation, None)
            };
            columns.push(Child { node, separation });
        }
        let style = self.host.create_style_handle(ElementType::ColumnSet.style_name());
        self.host.column_set(ColumnSetSpec {
            element,
            style,
            columns,
        })
    }

    fn column(&mut self, element: &Column) -> H::Node {
        let children = self.children(&element.items);
        let style = self.host.create_style_handle(ElementType::Column.style_name());
        self.host.column(ColumnSpec {
            element,
            style,
            width: self.style.column_width(element.size.as_ref()),
            container_style: self.style.container_style(element.style),
            children,
        })
    }

    fn fact_set(&mut self, element: &FactSet) -> H::Node {
        let style = self.host.create_style_handle(ElementType::FactSet.style_name());
        self.host.fact_set(FactSetSpec {
            element,
            style,
            title: self.style.fact_title(),
            value: self.style.fact_value(),
            spacing: self.style.fact_spacing(),
        })
    }

    /// Live control when interactive, text surrogate otherwise.
    fn input(&mut self, ty: ElementType, meta: InputMeta<'_>, kind: InputKind<'_>) -> H::Node {
        if !self.interactive {
            let text = self
                .fallback_text(meta.speak)
                .or_else(|| meta.label.map(str::to_string));
            return self.host.render_placeholder(text.as_deref());
        }

        let style = self.host.create_style_handle(ty.style_name());
        let rendered = self.host.input(InputSpec { kind, style });
        self.scopes[self.current].register_input(
            meta.id,
            rendered.node.clone(),
            meta.is_required,
            rendered.value,
        );
        rendered.node
    }

    fn action_set(&mut self, actions: &[Action]) -> Option<H::Node> {
        if !self.interactive || actions.is_empty() {
            return None;
        }

        let layout = self.style.actions();
        if actions.len() > layout.max_actions {
            debug!(
                declared = actions.len(),
                max_actions = layout.max_actions,
                "dropping actions beyond maxActions"
            );
        }
        let buttons: Vec<H::Node> = actions
            .iter()
            .take(layout.max_actions)
            .filter_map(|action| self.action_button(action))
            .collect();
        if buttons.is_empty() {
            return None;
        }

        let style = self.host.create_style_handle(ACTION_SET_STYLE);
        Some(self.host.action_set(ActionSetSpec {
            style,
            layout,
            buttons,
        }))
    }

    /// Button bound to the current scope, or `None` without interactivity.
    fn action_button(&mut self, action: &Action) -> Option<H::Node> {
        if !self.interactive {
            return None;
        }

        let show_card = match action {
            Action::ShowCard(show) => Some(ShowCardPanel {
                card: self.nested_card(&show.card),
                style: self.style.show_card(),
            }),
            Action::Submit(_) | Action::OpenUrl(_) | Action::Http(_) => None,
        };
        let index = self.scopes[self.current].bind_action(action.clone());
        let target = ActionRef {
            scope: self.current,
            index,
        };

        let style = self
            .host
            .create_style_handle(action.element_type().style_name());
        Some(self.host.action_button(ButtonSpec {
            action,
            style,
            title: action.title().unwrap_or_default(),
            target,
            show_card,
        }))
    }

    /// Renders a show-card sub-card into a fresh scope nested in the current
    /// one.
    fn nested_card(&mut self, card: &AdaptiveCard) -> H::Node {
        let parent = self.current;
        self.scopes.push(RenderScope::new(Some(parent)));
        self.current = self.scopes.len() - 1;
        let node = self.card(card);
        self.current = parent;
        node
    }

    /// Plain text of speech markup. Malformed markup yields `None` so the
    /// caller can fall through to its label.
    fn fallback_text(&self, speak: Option<&str>) -> Option<String> {
        let markup = speak?;
        match cardwright_speak::plain_text(markup) {
            Ok(text) => text,
            Err(err) => {
                debug!(error = %err, "speak markup did not parse");
                None
            }
        }
    }
}

/// Registry-facing fields shared by every input kind.
struct InputMeta<'e> {
    id: &'e str,
    is_required: bool,
    speak: Option<&'e str>,
    label: Option<&'e str>,
}

impl<'e> InputMeta<'e> {
    fn new(id: &'e str, is_required: bool, speak: &'e Option<String>) -> Self {
        Self {
            id,
            is_required,
            speak: speak.as_deref(),
            label: None,
        }
    }

    fn label(mut self, label: Option<&'e str>) -> Self {
        self.label = label.filter(|text| !text.is_empty());
        self
    }
}
