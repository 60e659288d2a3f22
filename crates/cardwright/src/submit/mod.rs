//! Input registry and submit protocol.
//!
//! Every render scope (a card, or the sub-card of a show-card action) owns an
//! [`InputRegistry`] filled while its inputs are rendered. When one of the
//! scope's submit actions fires, [`RenderScope::submit`]:
//!
//! 1. reads every registered input in registration order,
//! 2. stops at the first required input whose value is missing and reports
//!    it as [`SubmitOutcome::MissingInput`],
//! 3. otherwise deep-copies the action's static `data` and merges the input
//!    values into it, inputs taking precedence.
//!
//! The action itself is never modified, and the registry stays populated so
//! the user can fix an input and submit again.

mod merge;
mod registry;

pub use merge::{is_missing, merge_payload};
pub use registry::{InputEntry, InputRegistry};

use std::fmt;

use serde_json::Value;

use crate::element::{Action, SubmitAction};
use crate::error::MissingInputError;
use crate::host::ValueAccessor;

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<N> {
    /// Every required input has a value; `data` is the merged payload.
    Submitted { data: Value },
    /// A required input is empty. Nothing was submitted.
    MissingInput(MissingInputError<N>),
}

/// Inputs and bound actions of one render scope.
pub struct RenderScope<N> {
    parent: Option<usize>,
    inputs: InputRegistry<N>,
    actions: Vec<Action>,
}

impl<N> RenderScope<N> {
    pub fn new(parent: Option<usize>) -> Self {
        Self {
            parent,
            inputs: InputRegistry::new(),
            actions: Vec::new(),
        }
    }

    /// Scope this one is nested in; `None` for a card's own scope.
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    pub fn inputs(&self) -> &InputRegistry<N> {
        &self.inputs
    }

    pub fn register_input(
        &mut self,
        id: impl Into<String>,
        control: N,
        is_required: bool,
        value: ValueAccessor,
    ) {
        self.inputs.register(id, control, is_required, value);
    }

    /// Binds an action, returning its index within the scope.
    pub fn bind_action(&mut self, action: Action) -> usize {
        self.actions.push(action);
        self.actions.len() - 1
    }

    pub fn action(&self, index: usize) -> Option<&Action> {
        self.actions.get(index)
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

impl<N: Clone> RenderScope<N> {
    /// Runs the submit protocol for `action` against this scope's inputs.
    pub fn submit(&self, action: &SubmitAction) -> SubmitOutcome<N> {
        let mut values = Vec::with_capacity(self.inputs.len());
        for entry in self.inputs.iter() {
            let value = entry.value();
            if entry.is_required() && is_missing(value.as_ref()) {
                return SubmitOutcome::MissingInput(MissingInputError::new(
                    entry.id(),
                    entry.control().clone(),
                ));
            }
            values.push((entry.id().to_string(), value.unwrap_or(Value::Null)));
        }
        SubmitOutcome::Submitted {
            data: merge_payload(action.data.as_ref(), values),
        }
    }
}

impl<N: fmt::Debug> fmt::Debug for RenderScope<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderScope")
            .field("parent", &self.parent)
            .field("inputs", &self.inputs)
            .field("actions", &self.actions)
            .finish()
    }
}
