//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] for the state every command shares
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands, ProbeArgs, ResolveArgs};
use crate::config::Settings;
use crate::environment::{Environment, WheelBuildDetector};
use crate::error::Result;
use crate::probe::{BindingProbe, PythonBindingProbe, StaticProbe};
use crate::resolver::ConfigurationResolver;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// State shared by all commands for one invocation.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Project root; relative settings paths resolve against it.
    pub project_root: PathBuf,
    /// Layered settings.
    pub settings: Settings,
    /// Environment captured at startup.
    pub env: Environment,
}

impl CommandContext {
    /// Create a context.
    pub fn new(project_root: impl Into<PathBuf>, settings: Settings, env: Environment) -> Self {
        Self {
            project_root: project_root.into(),
            settings,
            env,
        }
    }

    /// A resolver honoring the configured wheel workflow name.
    pub fn resolver(&self) -> ConfigurationResolver {
        ConfigurationResolver::new().with_detector(WheelBuildDetector::for_workflow(
            self.settings.wheel_workflow.clone(),
        ))
    }

    /// The binding probe selected by CLI overrides and settings.
    pub fn probe(&self, args: &ProbeArgs) -> Box<dyn BindingProbe> {
        if args.no_binding_probe {
            return Box::new(StaticProbe::absent());
        }
        match &args.pybind11_dir {
            Some(dir) => Box::new(StaticProbe::found(dir.clone())),
            None => {
                let probe = PythonBindingProbe::new(self.settings.python.clone());
                tracing::debug!("Looking for pybind11 through {}", probe.interpreter());
                Box::new(probe)
            }
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Load settings and apply CLI overrides on top.
    pub fn load_settings(&self, cli: &Cli) -> Result<Settings> {
        let mut settings = Settings::load(&self.project_root, cli.config.as_deref())?;
        if let Some(python) = &cli.python {
            settings.python = python.clone();
        }
        Ok(settings)
    }

    /// Dispatch and execute a command.
    pub fn dispatch(
        &self,
        cli: &Cli,
        env: Environment,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let settings = self.load_settings(cli)?;
        tracing::debug!("Settings: {:?}", settings);
        let ctx = CommandContext::new(&self.project_root, settings, env);

        match &cli.command {
            Some(Commands::Args(args)) => {
                super::resolve::ResolveCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Explain(args)) => {
                super::explain::ExplainCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Metadata(args)) => {
                super::metadata::MetadataCommand::new(ctx, args.clone()).execute(ui)
            }
            None => super::resolve::ResolveCommand::new(ctx, ResolveArgs::default()).execute(ui),
        }
    }
}
