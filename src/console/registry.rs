//! Per-console command registry.

use std::collections::HashMap;

use super::command::{Command, CommandSummary};
use crate::error::RegistryError;

/// Commands in registration order with a name index.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    index: HashMap<&'static str, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a command. Names must be unique, lowercase and free of whitespace.
    pub fn register(&mut self, command: Box<dyn Command>) -> Result<(), RegistryError> {
        let name = command.name();
        if name.is_empty()
            || name.chars().any(char::is_whitespace)
            || name.to_lowercase() != name
        {
            return Err(RegistryError::InvalidName(name.to_string()));
        }
        if self.index.contains_key(name) {
            return Err(RegistryError::Duplicate(name.to_string()));
        }

        self.index.insert(name, self.commands.len());
        self.commands.push(command);
        Ok(())
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, command: impl Command + 'static) -> Result<Self, RegistryError> {
        self.register(Box::new(command))?;
        Ok(self)
    }

    /// Exact lookup after lowercasing. No prefixes, no aliases.
    pub fn lookup(&self, name: &str) -> Option<&dyn Command> {
        self.index
            .get(name.to_lowercase().as_str())
            .map(|&i| self.commands[i].as_ref())
    }

    pub fn summaries(&self) -> Vec<CommandSummary> {
        self.commands.iter().map(|c| c.summary()).collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
