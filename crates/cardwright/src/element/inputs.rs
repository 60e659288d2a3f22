//! Input elements.
//!
//! Every input carries a logical `id` under which its value is merged into
//! submit payloads, and an `isRequired` flag checked at submit time.

use serde::{Deserialize, Serialize};

use crate::enums::{ChoiceInputStyle, SeparationStyle, TextInputStyle};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputText {
    pub id: String,
    pub placeholder: Option<String>,
    pub value: Option<String>,
    pub is_multiline: bool,
    pub max_length: Option<u32>,
    pub style: TextInputStyle,
    pub is_required: bool,
    pub speak: Option<String>,
    pub separation: SeparationStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputNumber {
    pub id: String,
    pub placeholder: Option<String>,
    /// Initial value. Never clamped to `min`/`max`.
    pub value: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub is_required: bool,
    pub speak: Option<String>,
    pub separation: SeparationStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputDate {
    pub id: String,
    pub placeholder: Option<String>,
    pub value: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub is_required: bool,
    pub speak: Option<String>,
    pub separation: SeparationStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputTime {
    pub id: String,
    pub placeholder: Option<String>,
    pub value: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub is_required: bool,
    pub speak: Option<String>,
    pub separation: SeparationStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputToggle {
    pub id: String,
    pub title: String,
    pub value: Option<String>,
    pub value_on: String,
    pub value_off: String,
    pub is_required: bool,
    pub speak: Option<String>,
    pub separation: SeparationStyle,
}

impl Default for InputToggle {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            value: None,
            value_on: "true".to_string(),
            value_off: "false".to_string(),
            is_required: false,
            speak: None,
            separation: SeparationStyle::Default,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Choice {
    pub title: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputChoiceSet {
    pub id: String,
    pub choices: Vec<Choice>,
    pub is_multi_select: bool,
    pub style: ChoiceInputStyle,
    /// Initially selected value; comma separated when multi-select.
    pub value: Option<String>,
    pub placeholder: Option<String>,
    pub is_required: bool,
    pub speak: Option<String>,
    pub separation: SeparationStyle,
}
