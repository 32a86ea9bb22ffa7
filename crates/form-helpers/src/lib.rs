//! Form helpers for Tera and Handlebars templates.
//!
//! Generates HTML form markup (forms, inputs, selects, labels, buttons)
//! from template helper calls. Helpers can be called directly through
//! [`form::catalog`] or registered with a template engine:
//!
//! ```no_run
//! use form_helpers::{HelperConfig, form::register_helpers};
//!
//! let mut hbs = handlebars::Handlebars::new();
//! register_helpers(&mut hbs, &HelperConfig::default());
//! // {{form-text "first" person.name class="wide"}}
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod markup;
pub mod theme;

pub use config::HelperConfig;
pub use error::{FormHelperError, FormHelperResult};
pub use markup::{AttrValue, Attributes, SafeHtml};
