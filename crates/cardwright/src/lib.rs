//! Platform-independent rendering core for declarative cards.
//!
//! Cardwright decides what a host should render for a parsed card tree, how
//! each node is styled, whether interactive affordances are live, and how
//! input values flow back through submit actions. Widget construction is left
//! to the host through the [`HostToolkit`] trait.
//!
//! # Modules
//!
//! - [`config`] - Host configuration documents resolved into [`HostConfig`]
//! - [`style`] - Concrete sizes, colors and spacing for logical style requests
//! - [`element`] - The typed card element tree
//! - [`render`] - Per-element dispatch and the interactivity switch
//! - [`submit`] - Input registry, payload merging and required-input checks
//! - [`host`] - Traits and specs exchanged with the embedding host
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cardwright::{resolve_host_config, AdaptiveCard, Renderer};
//!
//! let config = resolve_host_config(Some(host_config_json))?;
//! let card: AdaptiveCard = serde_json::from_str(card_json)?;
//!
//! let renderer = Renderer::new(Arc::new(config));
//! let rendered = renderer.render(&card, &mut toolkit);
//! window.set_content(rendered.node().clone());
//! ```
//!
//! Plain-text fallback for speech markup lives in the companion
//! `cardwright-speak` crate and is re-exported as [`speak`].

pub mod config;
pub mod element;
pub mod enums;
pub mod error;
pub mod host;
pub mod render;
pub mod style;
pub mod submit;

pub use cardwright_speak as speak;

pub use config::{default_host_config, resolve_host_config, HostConfig};
pub use element::{Action, AdaptiveCard, CardElement, ElementType};
pub use error::{ConfigError, MissingInputError};
pub use host::{ActionEvent, ActionHandler, ActionRef, HostToolkit};
pub use render::{RenderedCard, Renderer};
pub use style::StyleResolver;
pub use submit::{InputRegistry, RenderScope, SubmitOutcome};
