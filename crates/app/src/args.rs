//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use actionorm_application::{ApplicationError, ApplicationResult, EmitControllerActionInput};
use actionorm_domain::ControllerAction;
use actionorm_infrastructure::GeneratorConfig;

/// Render the ORM snippets of scaffold controller actions.
#[derive(Debug, Parser)]
#[command(name = "actionorm", version, about)]
pub struct Args {
    /// Configuration file (YAML or JSON). Defaults to the platform config dir.
    #[arg(short, long, env = "ACTIONORM_CONFIG")]
    pub config: Option<PathBuf>,

    /// ORM adapter id, overriding the configuration.
    #[arg(long)]
    pub orm: Option<String>,

    /// Receiver for instance-level snippets, e.g. `@post`.
    #[arg(long)]
    pub receiver: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// List the registered adapters and exit.
    #[arg(long)]
    pub list: bool,

    /// Model to render for, e.g. `Post`. Falls back to the configured model.
    pub model: Option<String>,

    /// Controller action to render (index, show, new, edit, create, update,
    /// destroy). Renders every action when omitted.
    pub action: Option<String>,
}

impl Args {
    /// Overrides configured values with the ones given on the command line.
    pub fn apply_overrides(&self, config: &mut GeneratorConfig) {
        if let Some(orm) = &self.orm {
            config.orm.clone_from(orm);
        }
        if let Some(receiver) = &self.receiver {
            config.receiver = Some(receiver.clone());
        }
    }

    /// Builds the use case input for the requested model.
    ///
    /// # Errors
    /// Returns `ApplicationError::Config` if neither the command line nor the
    /// configuration names a model.
    pub fn input(&self, config: &GeneratorConfig) -> ApplicationResult<EmitControllerActionInput> {
        config.to_input(self.model.as_deref()).ok_or_else(|| {
            ApplicationError::Config("no model given on the command line or in the config".into())
        })
    }

    /// Parses the requested controller action, if any.
    ///
    /// # Errors
    /// Returns `ApplicationError::Domain` for an unknown action name.
    pub fn controller_action(&self) -> ApplicationResult<Option<ControllerAction>> {
        self.action
            .as_deref()
            .map(str::parse::<ControllerAction>)
            .transpose()
            .map_err(ApplicationError::from)
    }
}

/// Output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One block per action.
    Text,
    /// Pretty-printed JSON.
    Json,
}
