#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::domain::ports::ConfigProvider;

/// Effective settings after layering command-line flags over the optional
/// settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub autoload: Option<String>,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Settings {
    pub fn merge(primary: &dyn ConfigProvider, fallback: Option<&dyn ConfigProvider>) -> Self {
        // flags win over the file
        let autoload = primary
            .autoload_file()
            .or_else(|| fallback.and_then(|f| f.autoload_file()))
            .map(str::to_string);

        Self {
            autoload,
            // switches can only be turned on
            verbose: primary.verbose() || fallback.is_some_and(|f| f.verbose()),
            json_logs: primary.json_logs() || fallback.is_some_and(|f| f.json_logs()),
        }
    }
}

impl ConfigProvider for Settings {
    fn autoload_file(&self) -> Option<&str> {
        self.autoload.as_deref()
    }

    fn verbose(&self) -> bool {
        self.verbose
    }

    fn json_logs(&self) -> bool {
        self.json_logs
    }
}
