//! Mock implementations for testing
//!
//! Provides fakes of the scaffolding seams for testing without side effects
//! (terminal input, PATH lookup, process execution).

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use che_projects::git::{CloneCommand, CloneRunner, CloneStatus};
use che_projects::guard::ToolLocator;
use che_projects::prompt::Prompter;
use che_projects::Result;

/// Tool locator that knows a fixed set of tools
pub struct FakeLocator {
    installed: Vec<String>,
}

impl FakeLocator {
    pub fn with(tools: &[&str]) -> Self {
        Self {
            installed: tools.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::with(&[])
    }
}

impl ToolLocator for FakeLocator {
    fn locate(&self, tool: &str) -> Option<PathBuf> {
        self.installed
            .iter()
            .any(|t| t == tool)
            .then(|| PathBuf::from("/usr/bin").join(tool))
    }
}

/// Prompter that replays scripted answers and records every prompt shown
pub struct ScriptedPrompter {
    selections: Vec<usize>,
    confirm: bool,
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    /// Pick the first choice of every list and answer `confirm` at the end
    pub fn defaults(confirm: bool) -> Self {
        Self::new(vec![0, 0], confirm)
    }

    pub fn new(selections: Vec<usize>, confirm: bool) -> Self {
        Self {
            selections,
            confirm,
            asked: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, prompt: &str, _items: &[&str], default: usize) -> Result<usize> {
        self.asked.push(prompt.to_string());
        if self.selections.is_empty() {
            Ok(default)
        } else {
            Ok(self.selections.remove(0))
        }
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> Result<bool> {
        self.asked.push(prompt.to_string());
        Ok(self.confirm)
    }
}

/// Clone runner that returns a fixed exit code and records invocations
#[derive(Clone)]
pub struct RecordingRunner {
    code: Option<i32>,
    invocations: Arc<Mutex<Vec<CloneCommand>>>,
}

impl RecordingRunner {
    pub fn exiting_with(code: i32) -> Self {
        Self {
            code: Some(code),
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn killed() -> Self {
        Self {
            code: None,
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn invocations(&self) -> Vec<CloneCommand> {
        self.invocations.lock().unwrap().clone()
    }

    pub fn invocation_count(&self) -> usize {
        self.invocations.lock().unwrap().len()
    }
}

#[async_trait]
impl CloneRunner for RecordingRunner {
    async fn run(&self, command: &CloneCommand) -> Result<CloneStatus> {
        self.invocations.lock().unwrap().push(command.clone());
        Ok(CloneStatus { code: self.code })
    }
}
