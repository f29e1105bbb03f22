use crate::domain::ports::ConfigProvider;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "course-catalog")]
#[command(about = "Interactive course catalog: load, browse, extend and save course lists")]
pub struct CliConfig {
    #[arg(long, help = "Settings file (TOML)")]
    pub config: Option<String>,

    #[arg(long, help = "Catalog file to load before showing the menu")]
    pub load: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn autoload_file(&self) -> Option<&str> {
        self.load.as_deref()
    }

    fn verbose(&self) -> bool {
        self.verbose
    }

    fn json_logs(&self) -> bool {
        self.json_logs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_needed() {
        let config = CliConfig::try_parse_from(["course-catalog"]).unwrap();
        assert!(config.config.is_none());
        assert!(config.autoload_file().is_none());
        assert!(!config.verbose());
    }

    #[test]
    fn test_flags() {
        let config = CliConfig::try_parse_from([
            "course-catalog",
            "--load",
            "courses.txt",
            "--verbose",
            "--config",
            "catalog.toml",
        ])
        .unwrap();
        assert_eq!(config.autoload_file(), Some("courses.txt"));
        assert_eq!(config.config.as_deref(), Some("catalog.toml"));
        assert!(config.verbose());
    }
}
