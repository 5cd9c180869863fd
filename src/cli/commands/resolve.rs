//! Args command implementation.
//!
//! The `wheelcfg args` command prints the resolved CMake arguments, one per
//! line, in the order the build system should receive them.

use crate::cli::args::ResolveArgs;
use crate::error::{Result, WheelError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The args command implementation.
pub struct ResolveCommand {
    ctx: CommandContext,
    args: ResolveArgs,
}

impl ResolveCommand {
    /// Create a new args command.
    pub fn new(ctx: CommandContext, args: ResolveArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for ResolveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let probe = self.ctx.probe(&self.args.probe);
        let resolved = self.ctx.resolver().resolve(&self.ctx.env, probe.as_ref());
        tracing::info!("Resolved {} CMake argument(s)", resolved.len());
        let args = resolved.to_args();

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&args).map_err(|e| WheelError::Other(e.into()))?;
            ui.message(&json);
        } else {
            for arg in &args {
                ui.message(arg);
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::ProbeArgs;
    use crate::config::Settings;
    use crate::environment::Environment;
    use crate::ui::MockUI;
    use std::path::PathBuf;

    fn run(env: Environment, args: ResolveArgs) -> MockUI {
        let ctx = CommandContext::new("/src", Settings::default(), env);
        let mut ui = MockUI::new();
        let result = ResolveCommand::new(ctx, args).execute(&mut ui).unwrap();
        assert!(result.success);
        ui
    }

    fn no_probe() -> ResolveArgs {
        ResolveArgs {
            probe: ProbeArgs {
                no_binding_probe: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn prints_one_argument_per_line() {
        let ui = run(Environment::new(), no_probe());
        assert_eq!(ui.messages().len(), 8);
        assert_eq!(ui.messages()[0], "-DUSE_SPGLIB:BOOL=FALSE");
        assert_eq!(ui.messages()[4], "-DUSE_PYTHON:BOOL=TRUE");
    }

    #[test]
    fn prints_every_contribution() {
        let env = Environment::from_pairs([
            ("EXTRA_CMAKE_ARGS", "-DA=1;-DB=2"),
            ("GITHUB_WORKFLOW", "Build Wheels"),
        ]);
        let args = ResolveArgs {
            probe: ProbeArgs {
                pybind11_dir: Some(PathBuf::from("/p")),
                ..Default::default()
            },
            ..Default::default()
        };
        let ui = run(env, args);
        assert_eq!(
            &ui.messages()[8..],
            [
                "-DA=1",
                "-DB=2",
                "-DPYTHON_WHEEL_BUILD:BOOL=TRUE",
                "-Dpybind11_DIR:PATH=/p"
            ]
        );
    }

    #[test]
    fn json_output_is_an_array() {
        let args = ResolveArgs {
            json: true,
            ..no_probe()
        };
        let ui = run(Environment::new(), args);
        assert_eq!(ui.messages().len(), 1);
        let parsed: Vec<String> = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(parsed.len(), 8);
    }
}
