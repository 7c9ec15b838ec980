// src/commands/registry.rs
use std::collections::HashMap;
use super::types::Command;

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Registry with every shell verb.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        register_builtins(&mut registry);
        registry
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    /// Registered verbs, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cat::CatCommand;
use super::cd::CdCommand;
use super::exit_cmd::ExitCommand;
use super::help_cmd::HelpCommand;
use super::ls::LsCommand;
use super::mkdir::MkdirCommand;
use super::mv::MvCommand;
use super::nano::NanoCommand;
use super::pwd::PwdCommand;
use super::save_cmd::SaveCommand;
use super::tree_cmd::TreeCommand;

pub fn register_builtins(registry: &mut CommandRegistry) {
    registry.register(Box::new(PwdCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(MkdirCommand));
    registry.register(Box::new(NanoCommand));
    registry.register(Box::new(TreeCommand));
    registry.register(Box::new(MvCommand));
    registry.register(Box::new(SaveCommand));
    registry.register(Box::new(ExitCommand));
    registry.register(Box::new(HelpCommand));
}
