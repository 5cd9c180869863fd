//! Explain command implementation.
//!
//! The `wheelcfg explain` command lists every resolved entry with the step
//! that produced it, then the value CMake ends up with for each typed switch.

use crate::cli::args::ExplainArgs;
use crate::error::{Result, WheelError};
use crate::resolver::ResolvedConfiguration;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The explain command implementation.
pub struct ExplainCommand {
    ctx: CommandContext,
    args: ExplainArgs,
}

impl ExplainCommand {
    /// Create a new explain command.
    pub fn new(ctx: CommandContext, args: ExplainArgs) -> Self {
        Self { ctx, args }
    }

    fn render_text(resolved: &ResolvedConfiguration, ui: &mut dyn UserInterface) {
        let width = resolved
            .entries()
            .iter()
            .map(|e| e.to_arg().len())
            .max()
            .unwrap_or(0);

        ui.message("Arguments:");
        for (i, entry) in resolved.entries().iter().enumerate() {
            ui.message(&format!(
                "{:>3}. {:<width$}  [{}]",
                i + 1,
                entry.to_arg(),
                entry.source,
                width = width
            ));
        }

        ui.message("");
        ui.message("Effective values:");
        for name in resolved.option_names() {
            if let Some(value) = resolved.effective(name) {
                let count = resolved.count_option(name);
                if count > 1 {
                    ui.message(&format!("  {} = {} (set {} times)", name, value, count));
                } else {
                    ui.message(&format!("  {} = {}", name, value));
                }
            }
        }

        let raw = resolved.passthrough().len();
        if raw > 0 {
            ui.message("");
            ui.message(&format!(
                "{} raw argument(s) from EXTRA_CMAKE_ARGS are passed through unchecked.",
                raw
            ));
        }
    }
}

impl Command for ExplainCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let probe = self.ctx.probe(&self.args.probe);
        let resolved = self.ctx.resolver().resolve(&self.ctx.env, probe.as_ref());

        if resolved.passthrough().iter().any(|arg| arg.is_empty()) {
            ui.warning("EXTRA_CMAKE_ARGS contains empty segments; they are passed through as empty arguments");
        }

        if self.args.json {
            let json = serde_json::to_string_pretty(&resolved)
                .map_err(|e| WheelError::Other(e.into()))?;
            ui.message(&json);
        } else {
            Self::render_text(&resolved, ui);
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

    fn run(env: Environment, args: ExplainArgs) -> MockUI {
        let ctx = CommandContext::new("/src", Settings::default(), env);
        let mut ui = MockUI::new();
        let result = ExplainCommand::new(ctx, args).execute(&mut ui).unwrap();
        assert!(result.success);
        ui
    }

    fn absent() -> ProbeArgs {
        ProbeArgs {
            no_binding_probe: true,
            ..Default::default()
        }
    }

    #[test]
    fn labels_each_entry_with_its_source() {
        let env = Environment::from_pairs([("GITHUB_WORKFLOW", "Build Wheels")]);
        let ui = run(
            env,
            ExplainArgs {
                probe: ProbeArgs {
                    pybind11_dir: Some(PathBuf::from("/p")),
                    ..Default::default()
                },
                ..Default::default()
            },
        );
        let out = ui.stdout();
        assert!(out.contains("[base]"));
        assert!(out.contains("[GITHUB_WORKFLOW]"));
        assert!(out.contains("[binding probe]"));
        assert!(out.contains("pybind11_DIR = /p"));
    }

    #[test]
    fn reports_overridden_switches() {
        let env = Environment::from_pairs([("GITHUB_WORKFLOW", "Build Wheels")]);
        let ui = run(
            env,
            ExplainArgs {
                probe: absent(),
                ..Default::default()
            },
        );
        assert!(ui.stdout().contains("USE_QT = FALSE"));
        assert!(ui.stdout().contains("PYTHON_WHEEL_BUILD = TRUE"));
        assert!(!ui.stdout().contains("set 2 times"));
    }

    #[test]
    fn mentions_raw_passthrough() {
        let env = Environment::from_pairs([("EXTRA_CMAKE_ARGS", "-DA=1;-DB=2")]);
        let ui = run(
            env,
            ExplainArgs {
                probe: absent(),
                ..Default::default()
            },
        );
        assert!(ui.stdout().contains("[EXTRA_CMAKE_ARGS]"));
        assert!(ui.stdout().contains("2 raw argument(s)"));
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn warns_about_empty_segments() {
        let env = Environment::from_pairs([("EXTRA_CMAKE_ARGS", "-DA=1;")]);
        let ui = run(
            env,
            ExplainArgs {
                probe: absent(),
                ..Default::default()
            },
        );
        assert_eq!(ui.warnings().len(), 1);
    }

    #[test]
    fn json_includes_sources() {
        let ui = run(
            Environment::new(),
            ExplainArgs {
                probe: absent(),
                json: true,
            },
        );
        let parsed: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 8);
        assert_eq!(parsed[0]["source"], "base");
    }
}
