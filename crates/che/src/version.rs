//! Version information for the che-cli binary

/// Version information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    /// Semantic version
    pub version: String,

    /// Git commit SHA (short)
    pub commit: Option<String>,
}

impl VersionInfo {
    /// Create version info for current build
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            commit: option_env!("GIT_SHA").map(String::from),
        }
    }

    /// Version info with a fixed version and no commit
    #[cfg(test)]
    pub fn fixed(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            commit: None,
        }
    }

    /// Format as display string
    pub fn display(&self) -> String {
        match &self.commit {
            Some(commit) => format!("{} ({})", self.version, commit),
            None => self.version.clone(),
        }
    }
}

impl std::fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
