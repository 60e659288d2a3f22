//! Element render dispatch.
//!
//! [`Renderer`] walks a card tree depth-first and hands each element to the
//! matching [`HostToolkit`] hook together with its resolved style values.
//! Dispatch is a `match` over the closed set of element variants, and
//! containers recurse through the same dispatcher.
//!
//! # Interactivity
//!
//! `supportsInteractivity` is read once at the start of each pass. When it is
//! off:
//!
//! - inputs render as a text surrogate via
//!   [`HostToolkit::render_placeholder`], using the plain text of the
//!   element's `speak` markup, else its placeholder or title, else no text;
//! - media renders the same way, falling back to its `altText`;
//! - actions render nothing, and an action set without buttons is omitted.
//!
//! When it is on, every input is registered in the scope it was rendered in,
//! and every button carries an [`ActionRef`] the host passes back to
//! [`RenderedCard::activate`].
//!
//! # Example
//!
//! ```rust,ignore
//! let renderer = Renderer::new(Arc::new(HostConfig::default()));
//! let rendered = renderer.render(&card, &mut toolkit);
//! // later, from the button's click handler:
//! rendered.activate(target, &button, &mut handler);
//! ```

mod pass;

use std::fmt;
use std::sync::Arc;

use crate::config::{default_host_config, HostConfig};
use crate::element::{Action, AdaptiveCard, CardElement};
use crate::host::{ActionEvent, ActionHandler, ActionRef, HostToolkit};
use crate::submit::{RenderScope, SubmitOutcome};

use pass::RenderPass;

/// Renders card trees against one shared, immutable host configuration.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: Arc<HostConfig>,
}

impl Renderer {
    pub fn new(config: Arc<HostConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Renders a whole card, including its action set.
    pub fn render<H: HostToolkit>(
        &self,
        card: &AdaptiveCard,
        host: &mut H,
    ) -> RenderedCard<H::Node> {
        let mut pass = RenderPass::new(&self.config, host);
        let node = pass.card(card);
        RenderedCard {
            node,
            scopes: pass.scopes,
        }
    }

    /// Renders a single body element outside of a card.
    pub fn render_element<H: HostToolkit>(
        &self,
        element: &CardElement,
        host: &mut H,
    ) -> RenderedCard<H::Node> {
        let mut pass = RenderPass::new(&self.config, host);
        let node = pass.element(element);
        RenderedCard {
            node,
            scopes: pass.scopes,
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Arc::new(default_host_config().clone()))
    }
}

/// Output of a render pass: the root node plus every render scope created
/// while walking the tree.
///
/// Dropping it discards the scopes and their input registries.
pub struct RenderedCard<N> {
    node: N,
    scopes: Vec<RenderScope<N>>,
}

impl<N> RenderedCard<N> {
    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn into_node(self) -> N {
        self.node
    }

    /// The card's own scope.
    pub fn root_scope(&self) -> &RenderScope<N> {
        &self.scopes[0]
    }

    pub fn scope(&self, index: usize) -> Option<&RenderScope<N>> {
        self.scopes.get(index)
    }

    pub fn scopes(&self) -> &[RenderScope<N>] {
        &self.scopes
    }

    pub fn action(&self, target: ActionRef) -> Option<&Action> {
        self.scopes.get(target.scope)?.action(target.index)
    }
}

impl<N: Clone> RenderedCard<N> {
    /// Runs the submit protocol for a bound submit action without notifying
    /// a handler. `None` when `target` is not a submit action.
    pub fn submit(&self, target: ActionRef) -> Option<SubmitOutcome<N>> {
        let scope = self.scopes.get(target.scope)?;
        match scope.action(target.index)? {
            Action::Submit(submit) => Some(scope.submit(submit)),
            Action::OpenUrl(_) | Action::ShowCard(_) | Action::Http(_) => None,
        }
    }

    /// Handles activation of the bound action `target` from `control`.
    ///
    /// Submit actions go through the submit protocol and reach the handler
    /// either as [`ActionEvent::Submit`] with the merged payload or as a
    /// missing-input notification. Other actions are forwarded as is.
    /// Returns `false` when `target` names no bound action.
    pub fn activate<A>(&self, target: ActionRef, control: &N, handler: &mut A) -> bool
    where
        A: ActionHandler<N> + ?Sized,
    {
        let Some(scope) = self.scopes.get(target.scope) else {
            return false;
        };
        let Some(action) = scope.action(target.index) else {
            return false;
        };

        match action {
            Action::Submit(submit) => match scope.submit(submit) {
                SubmitOutcome::Submitted { data } => handler.on_action(
                    control,
                    ActionEvent::Submit {
                        action: submit,
                        data,
                    },
                ),
                SubmitOutcome::MissingInput(err) => handler.on_missing_input(action, err),
            },
            Action::OpenUrl(open) => {
                handler.on_action(control, ActionEvent::OpenUrl { action: open })
            }
            Action::ShowCard(show) => {
                handler.on_action(control, ActionEvent::ShowCard { action: show })
            }
            Action::Http(http) => handler.on_action(control, ActionEvent::Http { action: http }),
        }
        true
    }
}

impl<N: fmt::Debug> fmt::Debug for RenderedCard<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderedCard")
            .field("node", &self.node)
            .field("scopes", &self.scopes)
            .finish()
    }
}
