//! Template renderer with the form helpers pre-registered.

use std::path::Path;

use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde_json::Value;
use tera::Tera;
use tracing::debug;

use crate::config::HelperConfig;
use crate::form::register_helpers;

/// Template engine backing a [`FormRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EngineKind {
    Tera,
    Handlebars,
}

impl EngineKind {
    /// Guess the engine from a template file name.
    ///
    /// `.hbs` and `.handlebars` files use Handlebars; everything else Tera.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("hbs" | "handlebars") => EngineKind::Handlebars,
            _ => EngineKind::Tera,
        }
    }
}

enum Engine {
    Tera(Box<Tera>),
    Handlebars(Box<Handlebars<'static>>),
}

/// Renders templates through one engine with the form helpers registered.
pub struct FormRenderer {
    engine: Engine,
    helper_count: usize,
}

impl FormRenderer {
    /// Create a renderer and register the helpers according to `config`.
    pub fn new(kind: EngineKind, config: &HelperConfig) -> Self {
        let (engine, helper_count) = match kind {
            EngineKind::Tera => {
                let mut tera = Tera::default();
                let count = register_helpers(&mut tera, config);
                (Engine::Tera(Box::new(tera)), count)
            }
            EngineKind::Handlebars => {
                let mut hbs = Handlebars::new();
                let count = register_helpers(&mut hbs, config);
                (Engine::Handlebars(Box::new(hbs)), count)
            }
        };
        debug!(engine = ?kind, helpers = helper_count, "form renderer ready");
        Self {
            engine,
            helper_count,
        }
    }

    /// The engine in use.
    pub fn kind(&self) -> EngineKind {
        match self.engine {
            Engine::Tera(_) => EngineKind::Tera,
            Engine::Handlebars(_) => EngineKind::Handlebars,
        }
    }

    /// Number of helpers registered.
    pub fn helper_count(&self) -> usize {
        self.helper_count
    }

    /// Add a named template.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<()> {
        match &mut self.engine {
            Engine::Tera(tera) => tera
                .add_raw_template(name, source)
                .with_context(|| format!("failed to parse template: {name}")),
            Engine::Handlebars(hbs) => hbs
                .register_template_string(name, source)
                .with_context(|| format!("failed to parse template: {name}")),
        }
    }

    /// Render a named template with a JSON object as context.
    pub fn render(&self, name: &str, context: &Value) -> Result<String> {
        match &self.engine {
            Engine::Tera(tera) => {
                let context = tera::Context::from_value(context.clone())
                    .context("template context must be a JSON object")?;
                tera.render(name, &context)
                    .with_context(|| format!("failed to render template: {name}"))
            }
            Engine::Handlebars(hbs) => hbs
                .render(name, context)
                .with_context(|| format!("failed to render template: {name}")),
        }
    }
}

impl std::fmt::Debug for FormRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormRenderer")
            .field("engine", &self.kind())
            .field("helper_count", &self.helper_count)
            .finish()
    }
}
