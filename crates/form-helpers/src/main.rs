//! form-render
//!
//! Renders a template file through Tera or Handlebars with the form
//! helpers registered.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use form_helpers::HelperConfig;
use form_helpers::config::validate_namespace;
use form_helpers::theme::{EngineKind, FormRenderer};

/// Render a template with the form helpers available.
#[derive(Debug, Parser)]
#[command(name = "form-render", version)]
struct Cli {
    /// Template file to render.
    template: PathBuf,

    /// JSON file with the template context.
    #[arg(short, long)]
    context: Option<PathBuf>,

    /// Template engine (default: from the template's extension).
    #[arg(short, long, value_enum)]
    engine: Option<EngineKind>,

    /// Helper namespace (overrides FORM_HELPERS_NAMESPACE).
    #[arg(short, long)]
    namespace: Option<String>,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();

    let mut config = HelperConfig::from_env().context("failed to load configuration")?;
    if let Some(namespace) = cli.namespace {
        validate_namespace(&namespace).context("invalid --namespace")?;
        config = config.with_namespace(namespace);
    }

    let engine = cli
        .engine
        .unwrap_or_else(|| EngineKind::from_path(&cli.template));
    info!(engine = ?engine, prefix = config.prefix(), "rendering template");

    let source = fs::read_to_string(&cli.template)
        .with_context(|| format!("failed to read template {}", cli.template.display()))?;

    let context = match &cli.context {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read context {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("invalid JSON in {}", path.display()))?
        }
        None => Value::Object(serde_json::Map::new()),
    };

    let name = cli
        .template
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("template")
        .to_string();

    let mut renderer = FormRenderer::new(engine, &config);
    renderer.add_template(&name, &source)?;
    let output = renderer.render(&name, &context)?;

    print!("{output}");
    Ok(())
}

/// Initialize the tracing subscriber. Logs go to stderr so rendered output
/// on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("form_helpers=info,form_render=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
