//! Types for project scaffolding

use std::fmt;

/// Project name used when `create` is called without one
pub const DEFAULT_PROJECT_NAME: &str = "my-project";

/// Repository every project is cloned from
pub const TEMPLATE_REPO_URL: &str = "https://github.com/Apisit-Lee/al-lib.git";

/// Named bundle of project-generation choices offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    Default,
    VueCli,
}

impl Preset {
    /// All presets in prompt order
    pub const ALL: [Preset; 2] = [Preset::Default, Preset::VueCli];

    /// Label shown in the selection list
    pub fn label(self) -> &'static str {
        match self {
            Preset::Default => "default",
            Preset::VueCli => "Vue CLI",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// UI component library choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiLib {
    #[default]
    None,
    CheUi,
}

impl UiLib {
    /// All UI libraries in prompt order
    pub const ALL: [UiLib; 2] = [UiLib::None, UiLib::CheUi];

    /// Label shown in the selection list
    pub fn label(self) -> &'static str {
        match self {
            UiLib::None => "no ui lib",
            UiLib::CheUi => "che-ui",
        }
    }
}

impl fmt::Display for UiLib {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Answers collected by the creation questions
///
/// Only `confirm` changes what happens next. `preset` and `ui_lib` are
/// recorded but the template repository is the same for every choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answers {
    pub preset: Preset,
    pub ui_lib: UiLib,
    pub confirm: bool,
}

/// Where projects are cloned from and how they are started afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    /// Repository URL passed to `git clone`
    pub url: String,
    /// Command suggested to the user once the project exists
    pub start_command: String,
}

impl Default for TemplateSource {
    fn default() -> Self {
        Self {
            url: TEMPLATE_REPO_URL.to_string(),
            start_command: "npm run serve".to_string(),
        }
    }
}

/// A project that was cloned successfully
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedProject {
    pub name: String,
    pub path: camino::Utf8PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_labels_in_prompt_order() {
        let labels: Vec<_> = Preset::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels, vec!["default", "Vue CLI"]);
    }

    #[test]
    fn test_ui_lib_labels_in_prompt_order() {
        let labels: Vec<_> = UiLib::ALL.iter().map(|u| u.to_string()).collect();
        assert_eq!(labels, vec!["no ui lib", "che-ui"]);
    }

    #[test]
    fn test_template_source_default() {
        let source = TemplateSource::default();
        assert_eq!(source.url, TEMPLATE_REPO_URL);
        assert!(source.url.starts_with("https://"));
        assert_eq!(source.start_command, "npm run serve");
    }
}
