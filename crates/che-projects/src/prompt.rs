//! Interactive creation questions

use dialoguer::{Confirm, Select};
use tracing::debug;

use crate::error::Result;
use crate::types::{Answers, Preset, UiLib};

pub const PRESET_PROMPT: &str = "Please pick a preset:";
pub const UI_LIB_PROMPT: &str = "Please pick an ui lib:";
pub const CONFIRM_PROMPT: &str = "Creation?";

/// Source of answers to the creation questions
///
/// Each call blocks until the user has answered.
pub trait Prompter {
    /// Pick one of `items`, returning its index
    fn select(&mut self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;

    /// Answer a yes/no question
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;
}

/// Prompts on the terminal with dialoguer
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn select(&mut self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        let selection = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()?;
        Ok(selection)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(confirmed)
    }
}

/// Ask preset, UI library and confirmation, in that order
pub fn ask(prompter: &mut dyn Prompter) -> Result<Answers> {
    let presets = Preset::ALL.map(Preset::label);
    let preset = Preset::ALL
        .get(prompter.select(PRESET_PROMPT, &presets, 0)?)
        .copied()
        .unwrap_or_default();

    let ui_libs = UiLib::ALL.map(UiLib::label);
    let ui_lib = UiLib::ALL
        .get(prompter.select(UI_LIB_PROMPT, &ui_libs, 0)?)
        .copied()
        .unwrap_or_default();

    let confirm = prompter.confirm(CONFIRM_PROMPT, true)?;

    let answers = Answers {
        preset,
        ui_lib,
        confirm,
    };
    debug!(
        "Answers: preset={}, ui_lib={}, confirm={}",
        answers.preset, answers.ui_lib, answers.confirm
    );
    Ok(answers)
}
