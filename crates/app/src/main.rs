//! ActionORM - Main Entry Point
//!
//! Loads the generator configuration, resolves the configured ORM adapter
//! from the built-in registry and prints the snippets of the requested
//! controller actions.

mod args;
mod render;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use actionorm_application::EmitControllerAction;
use actionorm_infrastructure::{ConfigRepository, builtin_registry};

use crate::args::{Args, OutputFormat};
use crate::render::Report;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    tracing::debug!("starting actionorm v{}", env!("CARGO_PKG_VERSION"));

    let registry = builtin_registry()?;
    if args.list {
        for id in registry.ids() {
            println!("{id}");
        }
        return Ok(());
    }

    let repo = ConfigRepository::new();
    let mut config = match &args.config {
        Some(path) => repo.load(path).await?,
        None => repo.load_default().await?,
    };
    args.apply_overrides(&mut config);
    let input = args.input(&config)?;

    let adapter = registry.get(&config.orm)?;
    tracing::info!(adapter = adapter.id(), model = %input.model, "rendering snippets");
    let use_case = EmitControllerAction::new(adapter);

    let actions = match args.controller_action()? {
        Some(action) => vec![use_case.execute(action, &input)?],
        None => use_case.execute_all(&input)?,
    };

    let report = Report {
        adapter: use_case.adapter_id(),
        model: &input.model,
        actions: &actions,
    };
    match args.format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => print!("{}", report.to_json()?),
    }

    Ok(())
}
