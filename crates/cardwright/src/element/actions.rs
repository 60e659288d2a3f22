//! Card actions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{AdaptiveCard, ElementType};

/// A user-triggerable action attached to a card or container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    #[serde(rename = "Action.Submit")]
    Submit(SubmitAction),
    #[serde(rename = "Action.OpenUrl")]
    OpenUrl(OpenUrlAction),
    #[serde(rename = "Action.ShowCard")]
    ShowCard(ShowCardAction),
    #[serde(rename = "Action.Http")]
    Http(HttpAction),
}

impl Action {
    pub fn element_type(&self) -> ElementType {
        match self {
            Action::Submit(_) => ElementType::ActionSubmit,
            Action::OpenUrl(_) => ElementType::ActionOpenUrl,
            Action::ShowCard(_) => ElementType::ActionShowCard,
            Action::Http(_) => ElementType::ActionHttp,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Action::Submit(a) => a.title.as_deref(),
            Action::OpenUrl(a) => a.title.as_deref(),
            Action::ShowCard(a) => a.title.as_deref(),
            Action::Http(a) => a.title.as_deref(),
        }
    }

    pub fn speak(&self) -> Option<&str> {
        match self {
            Action::Submit(a) => a.speak.as_deref(),
            Action::OpenUrl(a) => a.speak.as_deref(),
            Action::ShowCard(a) => a.speak.as_deref(),
            Action::Http(a) => a.speak.as_deref(),
        }
    }
}

/// Gathers input values and hands them to the host with the static `data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitAction {
    pub title: Option<String>,
    /// Static payload. Never mutated by a submission.
    pub data: Option<Value>,
    pub speak: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OpenUrlAction {
    pub title: Option<String>,
    pub url: String,
    pub speak: Option<String>,
}

/// Reveals a nested card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShowCardAction {
    pub title: Option<String>,
    pub card: AdaptiveCard,
    pub speak: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HttpHeader {
    pub name: String,
    pub value: String,
}

/// Asks the host to issue an HTTP request. The request itself is the host's
/// concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HttpAction {
    pub title: Option<String>,
    pub method: String,
    pub url: String,
    pub body: Option<String>,
    pub headers: Vec<HttpHeader>,
    pub speak: Option<String>,
}

impl Default for HttpAction {
    fn default() -> Self {
        Self {
            title: None,
            method: "GET".to_string(),
            url: String::new(),
            body: None,
            headers: Vec::new(),
            speak: None,
        }
    }
}
