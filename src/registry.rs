//! Command trait and name-keyed dispatch.
//!
//! Handlers are registered under a name and looked up at dispatch time.
//! Registering a name twice replaces the earlier handler.

use std::collections::BTreeMap;
use tracing::debug;

use crate::config::ConfigStore;
use crate::error::{GatorError, Result};
use crate::output::Output;

/// Everything a handler gets to see when it runs.
pub struct CommandContext<'a> {
    /// The name the command was invoked under.
    pub command: &'a str,
    /// Arguments after the command name.
    pub args: &'a [String],
    pub store: &'a ConfigStore,
    pub output: &'a Output,
}

impl<'a> CommandContext<'a> {
    /// Get argument at index (0 is first argument after command name).
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).map(String::as_str)
    }
}

/// Trait for implementing commands.
pub trait Command {
    /// Short description (shown in `--help`).
    fn description(&self) -> &'static str {
        ""
    }

    /// Execute the command with the given context.
    fn execute(&self, ctx: &CommandContext<'_>) -> Result<()>;
}

impl<F> Command for F
where
    F: Fn(&CommandContext<'_>) -> Result<()>,
{
    fn execute(&self, ctx: &CommandContext<'_>) -> Result<()> {
        self(ctx)
    }
}

/// Mapping from command name to handler.
#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `command` to `name`, returning the handler it replaced, if any.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        command: impl Command + 'static,
    ) -> Option<Box<dyn Command>> {
        let name = name.into();
        debug!(command = %name, "Registering command");
        self.commands.insert(name, Box::new(command))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// One `name  description` line per registered command.
    pub fn summary(&self) -> String {
        let width = self.names().map(str::len).max().unwrap_or(0);
        self.commands
            .iter()
            .map(|(name, command)| {
                format!("  {:<width$}  {}", name, command.description(), width = width)
                    .trim_end()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Look up `name` and run its handler.
    pub fn run(
        &self,
        name: &str,
        args: &[String],
        store: &ConfigStore,
        output: &Output,
    ) -> Result<()> {
        let command = self
            .commands
            .get(name)
            .ok_or_else(|| GatorError::UnknownCommand(name.to_string()))?;

        debug!(command = name, args = args.len(), "Dispatching command");
        command.execute(&CommandContext {
            command: name,
            args,
            store,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MissingPolicy;
    use crate::output::tests::captured;
    use crate::output::OutputMode;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn store(tmp: &TempDir) -> ConfigStore {
        ConfigStore::new(tmp.path().join(".gatorconfig.json"), MissingPolicy::Fail)
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_run_unknown_command() {
        let tmp = TempDir::new().unwrap();
        let (output, _, _) = captured(OutputMode::Human);
        let registry = CommandRegistry::new();

        let err = registry
            .run("frobnicate", &[], &store(&tmp), &output)
            .unwrap_err();
        assert!(matches!(err, GatorError::UnknownCommand(ref name) if name == "frobnicate"));
        assert_eq!(err.to_string(), "Unknown command: frobnicate");
    }

    #[test]
    fn test_run_passes_name_and_args() {
        let tmp = TempDir::new().unwrap();
        let (output, _, _) = captured(OutputMode::Human);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let mut registry = CommandRegistry::new();
        let sink = Rc::clone(&seen);
        registry.register("echo", move |ctx: &CommandContext<'_>| -> Result<()> {
            sink.borrow_mut().push(ctx.command.to_string());
            sink.borrow_mut().extend(ctx.args.iter().cloned());
            Ok(())
        });

        registry
            .run("echo", &args(&["a", "b"]), &store(&tmp), &output)
            .unwrap();
        assert_eq!(*seen.borrow(), vec!["echo", "a", "b"]);
    }

    #[test]
    fn test_register_last_write_wins() {
        let tmp = TempDir::new().unwrap();
        let (output, out, _) = captured(OutputMode::Human);

        let mut registry = CommandRegistry::new();
        let first = registry.register("greet", |ctx: &CommandContext<'_>| ctx.output.line("first"));
        let second =
            registry.register("greet", |ctx: &CommandContext<'_>| ctx.output.line("second"));
        assert!(first.is_none());
        assert!(second.is_some());

        registry.run("greet", &[], &store(&tmp), &output).unwrap();
        assert_eq!(out.contents(), "second\n");
    }

    #[test]
    fn test_handler_error_propagates() {
        let tmp = TempDir::new().unwrap();
        let (output, _, _) = captured(OutputMode::Human);

        let mut registry = CommandRegistry::new();
        registry.register("fail", |_: &CommandContext<'_>| -> Result<()> {
            Err(GatorError::MissingArgument("needs more".to_string()))
        });

        let err = registry.run("fail", &[], &store(&tmp), &output).unwrap_err();
        assert_eq!(err.to_string(), "needs more");
    }

    #[test]
    fn test_names_are_sorted() {
        let mut registry = CommandRegistry::new();
        registry.register("login", |_: &CommandContext<'_>| -> Result<()> { Ok(()) });
        registry.register("config", |_: &CommandContext<'_>| -> Result<()> { Ok(()) });

        assert!(registry.contains("login"));
        assert!(!registry.contains("logout"));
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["config", "login"]);
    }

    #[test]
    fn test_context_arg_lookup() {
        let tmp = TempDir::new().unwrap();
        let (output, _, _) = captured(OutputMode::Human);
        let store = store(&tmp);
        let values = args(&["alice"]);
        let ctx = CommandContext {
            command: "login",
            args: &values,
            store: &store,
            output: &output,
        };

        assert_eq!(ctx.arg(0), Some("alice"));
        assert_eq!(ctx.arg(1), None);
    }
}
