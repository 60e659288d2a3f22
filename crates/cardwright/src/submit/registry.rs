use std::fmt;

use tracing::debug;

use crate::host::ValueAccessor;

/// One live input control registered during a render pass.
pub struct InputEntry<N> {
    id: String,
    control: N,
    is_required: bool,
    value: ValueAccessor,
}

impl<N> InputEntry<N> {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn control(&self) -> &N {
        &self.control
    }

    pub fn is_required(&self) -> bool {
        self.is_required
    }

    /// Reads the control's current value.
    pub fn value(&self) -> Option<serde_json::Value> {
        (self.value)()
    }
}

impl<N: fmt::Debug> fmt::Debug for InputEntry<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputEntry")
            .field("id", &self.id)
            .field("control", &self.control)
            .field("is_required", &self.is_required)
            .finish_non_exhaustive()
    }
}

/// Ordered registry of the inputs rendered in one scope.
///
/// Iteration follows registration order. Registering an id that is already
/// present replaces the earlier entry and moves the id to the end, so the
/// latest control is the one read at submit time.
pub struct InputRegistry<N> {
    entries: Vec<InputEntry<N>>,
}

impl<N> InputRegistry<N> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers a control, returning the entry it replaced, if any.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        control: N,
        is_required: bool,
        value: ValueAccessor,
    ) -> Option<InputEntry<N>> {
        let id = id.into();
        let replaced = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .map(|index| self.entries.remove(index));
        if replaced.is_some() {
            debug!(input_id = %id, "duplicate input id, later control wins");
        }
        self.entries.push(InputEntry {
            id,
            control,
            is_required,
            value,
        });
        replaced
    }

    pub fn get(&self, id: &str) -> Option<&InputEntry<N>> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEntry<N>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N> Default for InputRegistry<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: fmt::Debug> fmt::Debug for InputRegistry<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}
