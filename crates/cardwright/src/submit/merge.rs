use serde_json::{Map, Value};
use tracing::warn;

use crate::error::value_kind;

/// Builds a submit payload from an action's static data and input values.
///
/// The static data is deep-copied and never modified. Input values are
/// written under their ids, overwriting colliding static keys, which keep
/// their original position. New keys follow in the order given.
///
/// Static data that is not an object is returned verbatim when there are no
/// inputs to merge; otherwise it is replaced by an object of the inputs.
pub fn merge_payload<I>(static_data: Option<&Value>, inputs: I) -> Value
where
    I: IntoIterator<Item = (String, Value)>,
{
    let mut inputs = inputs.into_iter().peekable();
    let mut payload = match static_data {
        None | Some(Value::Null) => Map::new(),
        Some(Value::Object(map)) => map.clone(),
        Some(other) => {
            if inputs.peek().is_none() {
                return other.clone();
            }
            warn!(
                kind = value_kind(other),
                "submit data is not an object, replacing it with input values"
            );
            Map::new()
        }
    };
    for (id, value) in inputs {
        payload.insert(id, value);
    }
    Value::Object(payload)
}

/// Whether a value counts as absent for a required input.
pub fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(_) => false,
    }
}
