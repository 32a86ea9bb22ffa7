//! Template engine integration.
//!
//! Registers the form helpers with Tera and Handlebars, and provides a
//! renderer that wraps either engine.

mod engine;
mod handlebars_engine;
mod tera_engine;

pub use engine::{EngineKind, FormRenderer};
pub use tera_engine::tera_function_name;
