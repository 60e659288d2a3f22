//! Recording host used by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use cardwright::element::Action;
use cardwright::host::{
    ActionEvent, ActionHandler, ActionRef, ActionSetSpec, ButtonSpec, CardSpec, Child,
    ColumnSetSpec, ColumnSpec, ContainerSpec, FactSetSpec, HostToolkit, ImageSetSpec, ImageSpec,
    InputKind, InputSpec, MediaSpec, RenderedInput, TextBlockSpec,
};
use cardwright::style::ColumnWidth;
use cardwright::MissingInputError;
use serde_json::{json, Value};

/// Child node plus the spacing the renderer asked for before it.
pub type Spaced = (Node, Option<u32>);

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Card(Vec<Spaced>),
    Text {
        text: String,
        font_size: u32,
        color: String,
    },
    Placeholder(Option<String>),
    Image {
        url: String,
        pixel_size: Option<u32>,
    },
    ImageSet(Vec<Node>),
    Media,
    Container {
        background: String,
        children: Vec<Spaced>,
    },
    ColumnSet(Vec<Spaced>),
    Column {
        width: ColumnWidth,
        children: Vec<Spaced>,
    },
    FactSet {
        facts: usize,
        title_max_width: Option<u32>,
    },
    Input {
        id: String,
        control: usize,
    },
    Button {
        title: String,
        target: ActionRef,
        panel: Option<Box<Node>>,
    },
    ActionSet(Vec<Node>),
}

/// Number control configuration as received by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberControl {
    pub value: Option<f64>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
}

#[derive(Default)]
pub struct RecordingHost {
    pub styles: Vec<String>,
    pub numbers: Vec<NumberControl>,
    cells: Vec<Rc<RefCell<Option<Value>>>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates the user editing control number `control`.
    pub fn set_value(&self, control: usize, value: Value) {
        *self.cells[control].borrow_mut() = Some(value);
    }

    pub fn clear_value(&self, control: usize) {
        *self.cells[control].borrow_mut() = None;
    }

    pub fn control_count(&self) -> usize {
        self.cells.len()
    }

    fn new_control(&mut self, initial: Option<Value>) -> (usize, Rc<RefCell<Option<Value>>>) {
        let cell = Rc::new(RefCell::new(initial));
        self.cells.push(Rc::clone(&cell));
        (self.cells.len() - 1, cell)
    }
}

fn spaced(children: Vec<Child<Node>>) -> Vec<Spaced> {
    children
        .into_iter()
        .map(|child| (child.node, child.separation.map(|s| s.spacing)))
        .collect()
}

impl HostToolkit for RecordingHost {
    type Node = Node;
    type Style = String;

    fn create_style_handle(&mut self, name: &str) -> String {
        self.styles.push(name.to_string());
        name.to_string()
    }

    fn render_placeholder(&mut self, text: Option<&str>) -> Node {
        Node::Placeholder(text.map(str::to_string))
    }

    fn card(&mut self, spec: CardSpec<'_, String, Node>) -> Node {
        Node::Card(spaced(spec.children))
    }

    fn text_block(&mut self, spec: TextBlockSpec<'_, String>) -> Node {
        Node::Text {
            text: spec.element.text.clone(),
            font_size: spec.text.font_size,
            color: spec.text.color,
        }
    }

    fn image(&mut self, spec: ImageSpec<'_, String>) -> Node {
        Node::Image {
            url: spec.element.url.clone(),
            pixel_size: spec.pixel_size,
        }
    }

    fn image_set(&mut self, spec: ImageSetSpec<'_, String, Node>) -> Node {
        Node::ImageSet(spec.images)
    }

    fn media(&mut self, _spec: MediaSpec<'_, String>) -> Node {
        Node::Media
    }

    fn container(&mut self, spec: ContainerSpec<'_, String, Node>) -> Node {
        Node::Container {
            background: spec.container_style.background_color,
            children: spaced(spec.children),
        }
    }

    fn column_set(&mut self, spec: ColumnSetSpec<'_, String, Node>) -> Node {
        Node::ColumnSet(spaced(spec.columns))
    }

    fn column(&mut self, spec: ColumnSpec<'_, String, Node>) -> Node {
        Node::Column {
            width: spec.width,
            children: spaced(spec.children),
        }
    }

    fn fact_set(&mut self, spec: FactSetSpec<'_, String>) -> Node {
        Node::FactSet {
            facts: spec.element.facts.len(),
            title_max_width: spec.title.max_width,
        }
    }

    fn input(&mut self, spec: InputSpec<'_, String>) -> RenderedInput<Node> {
        let (id, initial) = match spec.kind {
            InputKind::Text(input) => (input.id.clone(), input.value.clone().map(Value::from)),
            InputKind::Number(config) => {
                self.numbers.push(NumberControl {
                    value: config.value,
                    minimum: config.minimum,
                    maximum: config.maximum,
                });
                (config.id.to_string(), config.value.map(|v| json!(v)))
            }
            InputKind::Date(input) => (input.id.clone(), input.value.clone().map(Value::from)),
            InputKind::Time(input) => (input.id.clone(), input.value.clone().map(Value::from)),
            InputKind::Toggle(input) => (
                input.id.clone(),
                Some(Value::from(
                    input.value.clone().unwrap_or_else(|| input.value_off.clone()),
                )),
            ),
            InputKind::ChoiceSet(input) => {
                (input.id.clone(), input.value.clone().map(Value::from))
            }
        };
        let (control, cell) = self.new_control(initial);
        RenderedInput::new(Node::Input { id, control }, move || cell.borrow().clone())
    }

    fn action_button(&mut self, spec: ButtonSpec<'_, String, Node>) -> Node {
        Node::Button {
            title: spec.title.to_string(),
            target: spec.target,
            panel: spec.show_card.map(|panel| Box::new(panel.card)),
        }
    }

    fn action_set(&mut self, spec: ActionSetSpec<String, Node>) -> Node {
        Node::ActionSet(spec.buttons)
    }
}

/// Every button in a rendered tree, depth-first, as (title, target, node).
pub fn buttons(node: &Node) -> Vec<(String, ActionRef, Node)> {
    let mut found = Vec::new();
    collect_buttons(node, &mut found);
    found
}

fn collect_buttons(node: &Node, found: &mut Vec<(String, ActionRef, Node)>) {
    match node {
        Node::Button {
            title,
            target,
            panel,
        } => {
            found.push((title.clone(), *target, node.clone()));
            if let Some(panel) = panel {
                collect_buttons(panel, found);
            }
        }
        Node::Card(children)
        | Node::Container { children, .. }
        | Node::ColumnSet(children)
        | Node::Column { children, .. } => {
            for (child, _) in children {
                collect_buttons(child, found);
            }
        }
        Node::ActionSet(items) | Node::ImageSet(items) => {
            for item in items {
                collect_buttons(item, found);
            }
        }
        _ => {}
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Submit(Value),
    OpenUrl(String),
    ShowCard(Option<String>),
    Http(String),
}

/// Records every callback the renderer makes.
#[derive(Default)]
pub struct RecordingHandler {
    pub actions: Vec<(Node, Event)>,
    pub missing: Vec<(Option<String>, MissingInputError<Node>)>,
}

impl ActionHandler<Node> for RecordingHandler {
    fn on_action(&mut self, control: &Node, event: ActionEvent<'_>) {
        let event = match event {
            ActionEvent::Submit { data, .. } => Event::Submit(data),
            ActionEvent::OpenUrl { action } => Event::OpenUrl(action.url.clone()),
            ActionEvent::ShowCard { action } => Event::ShowCard(action.title.clone()),
            ActionEvent::Http { action } => Event::Http(action.method.clone()),
        };
        self.actions.push((control.clone(), event));
    }

    fn on_missing_input(&mut self, action: &Action, error: MissingInputError<Node>) {
        self.missing.push((action.title().map(str::to_string), error));
    }
}
